//! Problem instances and the end-to-end solve pipeline.
//!
//! Pipeline
//! 1. enumerate candidates (axis intercepts + pairwise intersections);
//! 2. optionally drop non-finite candidates (`SolveCfg::drop_non_finite`);
//! 3. keep candidates satisfying every constraint;
//! 4. keep the maximizers of the objective (ties retained);
//! 5. compute a display range around the feasible points (all finite
//!    candidates when nothing is feasible).

use tracing::{debug, trace};

use super::optimize::{find_optimal_eps, Objective};
use super::range::display_range;
use super::region::{filter_feasible_eps, find_all_notable_points, Constraint, LimitationKind};
use crate::cfg::SolveCfg;
use crate::error::Result;
use crate::geom2::{LinearFunction, Point2d};

/// Ordered constraints plus a linear objective.
#[derive(Clone, Debug, PartialEq)]
pub struct Problem {
    pub constraints: Vec<Constraint>,
    pub objective: Objective,
}

/// Everything the presentation layer needs from one solve.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution {
    pub candidates: Vec<Point2d>,
    pub feasible: Vec<Point2d>,
    pub optimal: Vec<Point2d>,
    /// Objective value of the optimal set; `None` when nothing is feasible.
    pub optimal_value: Option<f64>,
    pub range: (f64, f64),
}

impl Solution {
    #[inline]
    pub fn is_infeasible(&self) -> bool {
        self.feasible.is_empty()
    }
}

impl Problem {
    pub fn new(constraints: Vec<Constraint>, objective: Objective) -> Self {
        Self {
            constraints,
            objective,
        }
    }

    /// Build from general-form rows `(gen_a, gen_b, gen_c, kind)` and objective
    /// coefficients. Fails on the first row with `gen_b == 0`.
    pub fn from_general<I>(rows: I, objective: (f64, f64)) -> Result<Self>
    where
        I: IntoIterator<Item = (f64, f64, f64, LimitationKind)>,
    {
        let constraints = rows
            .into_iter()
            .map(|(a, b, c, kind)| {
                let line = LinearFunction::from_general(a, b, c)?;
                Ok(Constraint::new(line, kind))
            })
            .collect::<Result<Vec<_>>>()?;
        let objective = Objective::new(objective.0, objective.1)?;
        Ok(Self::new(constraints, objective))
    }

    /// Boundary lines in constraint order.
    pub fn lines(&self) -> Vec<LinearFunction> {
        self.constraints.iter().map(|c| c.line).collect()
    }

    pub fn solve(&self, cfg: &SolveCfg) -> Solution {
        let mut candidates = find_all_notable_points(&self.lines());
        if cfg.drop_non_finite {
            let before = candidates.len();
            candidates.retain(Point2d::is_finite);
            let dropped = before - candidates.len();
            if dropped > 0 {
                debug!(dropped, "dropped non-finite candidate points");
            }
        }
        let feasible = filter_feasible_eps(&candidates, &self.constraints, cfg.eq_eps);
        let optimal = find_optimal_eps(&feasible, |p| self.objective.eval(p), cfg.tie_eps);
        let optimal_value = optimal.first().map(|p| self.objective.eval(*p));
        let range = if feasible.is_empty() {
            let finite: Vec<Point2d> = candidates
                .iter()
                .copied()
                .filter(|p| p.is_finite())
                .collect();
            display_range(&finite, cfg.range_extra)
        } else {
            display_range(&feasible, cfg.range_extra)
        };
        trace!(
            constraints = self.constraints.len(),
            candidates = candidates.len(),
            feasible = feasible.len(),
            optimal = optimal.len(),
            "solved"
        );
        Solution {
            candidates,
            feasible,
            optimal,
            optimal_value,
            range,
        }
    }
}
