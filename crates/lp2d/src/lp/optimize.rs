//! Objective functions and the tie-preserving maximizer.

use std::fmt;

use nalgebra::Vector2;

use crate::error::{Lp2Error, Result};
use crate::geom2::{format_sig, Point2d, DISPLAY_SIG_DIGITS};

/// Linear utility `c · (x, y)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Objective {
    pub c: Vector2<f64>,
}

impl Objective {
    /// Fails with `InvalidParameter` on non-finite coefficients.
    pub fn new(cx: f64, cy: f64) -> Result<Self> {
        if !cx.is_finite() || !cy.is_finite() {
            return Err(Lp2Error::InvalidParameter(format!(
                "objective coefficients must be finite, got ({cx}, {cy})"
            )));
        }
        Ok(Self {
            c: Vector2::new(cx, cy),
        })
    }

    #[inline]
    pub fn eval(&self, p: Point2d) -> f64 {
        self.c.x * p.x + self.c.y * p.y
    }
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.c.y >= 0.0 { '+' } else { '-' };
        write!(
            f,
            "{}x {} {}y",
            format_sig(self.c.x, DISPLAY_SIG_DIGITS),
            sign,
            format_sig(self.c.y.abs(), DISPLAY_SIG_DIGITS)
        )
    }
}

/// Points maximizing `objective`, ties kept in first-seen order.
///
/// Ties use exact `==`; two mathematically equal values reached through
/// different float paths may not tie.
pub fn find_optimal<F>(points: &[Point2d], objective: F) -> Vec<Point2d>
where
    F: Fn(Point2d) -> f64,
{
    let mut best: Option<f64> = None;
    let mut out: Vec<Point2d> = Vec::new();
    for &p in points {
        let val = objective(p);
        match best {
            None => {
                best = Some(val);
                out.push(p);
            }
            Some(b) if val > b => {
                best = Some(val);
                out.clear();
                out.push(p);
            }
            Some(b) if val == b => out.push(p),
            Some(_) => {}
        }
    }
    out
}

/// Like [`find_optimal`], but every point whose value is within `eps` of the
/// overall maximum is kept, in first-seen order.
///
/// The maximum is taken first, so the tie set does not depend on the order of
/// `points`. `eps == 0` is exactly [`find_optimal`].
pub fn find_optimal_eps<F>(points: &[Point2d], objective: F, eps: f64) -> Vec<Point2d>
where
    F: Fn(Point2d) -> f64,
{
    if eps <= 0.0 {
        return find_optimal(points, objective);
    }
    let values: Vec<f64> = points.iter().map(|&p| objective(p)).collect();
    let Some(max) = values.iter().copied().reduce(f64::max) else {
        return Vec::new();
    };
    points
        .iter()
        .zip(&values)
        .filter(|&(_, &v)| v >= max - eps)
        .map(|(&p, _)| p)
        .collect()
}
