//! Random classroom LP problems (integer coefficients + replay tokens).
//!
//! Purpose
//! - Produce small, reproducible exercises like the hand-written ones: a few
//!   constraints `a*x + b*y (<=|>=|=) c` with small integer coefficients and a
//!   positive profit objective.
//!
//! Model
//! - Coefficients `a, b` are drawn from `[-coef_max, coef_max] \ {0}`, so every
//!   line is non-vertical and meets the x-axis at a finite point.
//! - Right-hand sides are drawn from `[0, rhs_max]`.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::error::Result;
use crate::lp::{LimitationKind, Problem};

/// Constraint count distribution.
#[derive(Clone, Copy, Debug)]
pub enum ConstraintCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl ConstraintCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            ConstraintCount::Fixed(n) => n.max(1),
            ConstraintCount::Uniform { min, max } => {
                let lo = min.max(1);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Sampler configuration.
#[derive(Clone, Debug)]
pub struct ProblemCfg {
    pub constraint_count: ConstraintCount,
    /// Largest absolute value of a line coefficient; clamped to at least 1.
    pub coef_max: i32,
    /// Largest right-hand side.
    pub rhs_max: i32,
    /// Kinds to draw from; empty means `LessOrEqual` only.
    pub kinds: Vec<LimitationKind>,
}

impl Default for ProblemCfg {
    fn default() -> Self {
        Self {
            constraint_count: ConstraintCount::Uniform { min: 2, max: 4 },
            coef_max: 5,
            rhs_max: 12,
            kinds: vec![LimitationKind::LessOrEqual],
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

fn nonzero_coef<R: Rng>(rng: &mut R, max: i32) -> f64 {
    let v = rng.gen_range(1..=max);
    if rng.gen_bool(0.5) {
        -(v as f64)
    } else {
        v as f64
    }
}

/// Draw a random problem. The same `(cfg, tok)` always yields the same problem.
pub fn draw_problem(cfg: &ProblemCfg, tok: ReplayToken) -> Result<Problem> {
    let mut rng = tok.to_std_rng();
    let n = cfg.constraint_count.sample(&mut rng);
    let coef_max = cfg.coef_max.max(1);
    let rhs_max = cfg.rhs_max.max(0);
    let kinds: &[LimitationKind] = if cfg.kinds.is_empty() {
        &[LimitationKind::LessOrEqual]
    } else {
        &cfg.kinds
    };
    let mut rows = Vec::with_capacity(n);
    for _ in 0..n {
        let a = nonzero_coef(&mut rng, coef_max);
        let b = nonzero_coef(&mut rng, coef_max);
        let c = rng.gen_range(0..=rhs_max) as f64;
        let kind = *kinds
            .choose(&mut rng)
            .unwrap_or(&LimitationKind::LessOrEqual);
        rows.push((a, b, c, kind));
    }
    let cx = rng.gen_range(1..=coef_max) as f64;
    let cy = rng.gen_range(1..=coef_max) as f64;
    Problem::from_general(rows, (cx, cy))
}
