//! Graphical solver for two-variable linear programs.
//!
//! Given linear constraints in `x` and `y` and a linear utility, the crate
//! enumerates boundary intersections, filters them by feasibility, and returns
//! the maximizing vertex/vertices. It is classroom tooling for looking at LP
//! problems geometrically, not a simplex implementation.
//!
//! Layout
//! - `geom2`: points and lines.
//! - `lp`: constraints, enumeration, feasibility, optimizer, problem pipeline.
//! - `exercise`: reproducible random exercises.
//! - `cfg`, `error`: tolerances and the error type.

pub mod api;
pub mod cfg;
pub mod error;
pub mod exercise;
pub mod geom2;
pub mod lp;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::SolveCfg;
pub use error::Lp2Error;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfg::{SolveCfg, DEFAULT_RANGE_EXTRA};
    pub use crate::error::Lp2Error;
    pub use crate::exercise::{draw_problem, ConstraintCount, ProblemCfg, ReplayToken};
    pub use crate::geom2::{Axis, LinearFunction, Point2d};
    pub use crate::lp::{Constraint, LimitationKind, Objective, Problem, Solution};
}
