//! Constraints, candidate enumeration, and the feasibility filter.

use std::fmt;
use std::str::FromStr;

use crate::error::Lp2Error;
use crate::geom2::{Axis, LinearFunction, Point2d};

/// How a point's `y` must relate to the boundary line's value at `x`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LimitationKind {
    LessOrEqual,
    GreaterOrEqual,
    Equal,
}

impl LimitationKind {
    /// Compare `y` against the boundary value `v` with slack `eps >= 0`.
    #[inline]
    pub fn holds_eps(self, y: f64, v: f64, eps: f64) -> bool {
        match self {
            LimitationKind::LessOrEqual => y <= v + eps,
            LimitationKind::GreaterOrEqual => y >= v - eps,
            LimitationKind::Equal => {
                if eps == 0.0 {
                    y == v
                } else {
                    (y - v).abs() <= eps
                }
            }
        }
    }

    #[inline]
    pub fn holds(self, y: f64, v: f64) -> bool {
        self.holds_eps(y, v, 0.0)
    }

    pub fn symbol(self) -> &'static str {
        match self {
            LimitationKind::LessOrEqual => "≤",
            LimitationKind::GreaterOrEqual => "≥",
            LimitationKind::Equal => "=",
        }
    }
}

impl fmt::Display for LimitationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for LimitationKind {
    type Err = Lp2Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "<=" | "≤" | "le" | "leq" => Ok(LimitationKind::LessOrEqual),
            ">=" | "≥" | "ge" | "geq" => Ok(LimitationKind::GreaterOrEqual),
            "=" | "==" | "eq" => Ok(LimitationKind::Equal),
            other => Err(Lp2Error::UnknownLimitation(other.to_string())),
        }
    }
}

/// One boundary line with its limitation kind.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Constraint {
    pub line: LinearFunction,
    pub kind: LimitationKind,
}

impl Constraint {
    #[inline]
    pub fn new(line: LinearFunction, kind: LimitationKind) -> Self {
        Self { line, kind }
    }

    #[inline]
    pub fn satisfied_by(&self, p: Point2d) -> bool {
        self.kind.holds(p.y, self.line.value_at(p.x))
    }

    #[inline]
    pub fn satisfied_by_eps(&self, p: Point2d, eps: f64) -> bool {
        self.kind.holds_eps(p.y, self.line.value_at(p.x), eps)
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "y {} {}",
            self.kind,
            self.line.to_slope_string().trim_start_matches("y = ")
        )
    }
}

/// All axis intercepts and pairwise intersections of `lines`.
///
/// Order: for each line, its `X` then `Y` axis point, then its intersections
/// with every later line. Parallel pairs contribute nothing, so `n` lines
/// without parallels give `2n + n(n-1)/2` points. Non-finite coordinates are
/// passed through unchanged.
pub fn find_all_notable_points(lines: &[LinearFunction]) -> Vec<Point2d> {
    let n = lines.len();
    let mut out = Vec::with_capacity(2 * n + n * n.saturating_sub(1) / 2);
    for (i, line) in lines.iter().enumerate() {
        for axis in Axis::ALL {
            out.push(line.axis_point(axis));
        }
        for other in &lines[i + 1..] {
            if let Some(p) = line.intersect(other) {
                out.push(p);
            }
        }
    }
    out
}

/// Points satisfying every constraint (exact comparison).
///
/// With no constraints every point is kept.
pub fn filter_feasible(points: &[Point2d], constraints: &[Constraint]) -> Vec<Point2d> {
    filter_feasible_eps(points, constraints, 0.0)
}

/// Like [`filter_feasible`], with slack `eps >= 0` on every comparison.
pub fn filter_feasible_eps(
    points: &[Point2d],
    constraints: &[Constraint],
    eps: f64,
) -> Vec<Point2d> {
    points
        .iter()
        .copied()
        .filter(|p| constraints.iter().all(|c| c.satisfied_by_eps(*p, eps)))
        .collect()
}
