//! Curated surface for front ends (CLI, plotting scripts).
//!
//! Presentation code needs points as `(x, y)` pairs and lines as their
//! coefficients plus the two rendered forms; these re-exports and `LineView`
//! keep that boundary in one place.

pub use crate::geom2::{format_sig, Axis, LinearFunction, Point2d};
pub use crate::lp::{
    display_range, filter_feasible, find_all_notable_points, find_optimal, Constraint,
    LimitationKind, Objective, Problem, Solution,
};

/// Flat view of a constraint for reports.
#[derive(Clone, Debug, PartialEq)]
pub struct LineView {
    pub slope_a: f64,
    pub slope_b: f64,
    pub gen_a: f64,
    pub gen_b: f64,
    pub gen_c: f64,
    pub kind: LimitationKind,
    pub slope_form: String,
    pub general_form: String,
}

impl From<&Constraint> for LineView {
    fn from(c: &Constraint) -> Self {
        Self {
            slope_a: c.line.slope_a(),
            slope_b: c.line.slope_b(),
            gen_a: c.line.gen_a(),
            gen_b: c.line.gen_b(),
            gen_c: c.line.gen_c(),
            kind: c.kind,
            slope_form: c.line.to_slope_string(),
            general_form: c.line.to_general_string(),
        }
    }
}

/// Line views in constraint order.
pub fn line_views(problem: &Problem) -> Vec<LineView> {
    problem.constraints.iter().map(LineView::from).collect()
}
