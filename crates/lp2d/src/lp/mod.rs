//! Graphical LP: candidate vertices, feasibility, and optimization.
//!
//! Purpose
//! - Enumerate notable points of a set of boundary lines (axis intercepts and
//!   pairwise intersections), keep the ones satisfying every constraint, and
//!   select the maximizers of a linear objective.
//!
//! Conventions
//! - A constraint compares `y` with the boundary's `value_at(x)`; the kind
//!   refers to the slope form, not to the sign of the general form.
//! - No constraints means every candidate is feasible.
//! - Equality constraints and objective ties are exact unless a tolerance is
//!   configured in `SolveCfg`.
//!
//! Code cross-refs: `geom2::{LinearFunction, Point2d}`, `cfg::SolveCfg`

mod optimize;
mod problem;
mod range;
mod region;

pub use optimize::{find_optimal, find_optimal_eps, Objective};
pub use problem::{Problem, Solution};
pub use range::{display_range, EMPTY_RANGE};
pub use region::{
    filter_feasible, filter_feasible_eps, find_all_notable_points, Constraint, LimitationKind,
};
