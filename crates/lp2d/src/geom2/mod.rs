//! 2D geometry for graphical LP: points and non-vertical lines.
//!
//! Purpose
//! - `Point2d`: value type for candidate vertices, with 3-digit display.
//! - `LinearFunction`: one line in slope and general form, with exact
//!   intersection and axis-intercept helpers.
//!
//! Numerics
//! - All comparisons here are exact (`==`). Tolerances live in `SolveCfg` and
//!   are applied by the `lp` pipeline, not by the primitives.
//!
//! Code cross-refs: `lp::region`, `lp::problem`

mod line;
mod point;

pub use line::{Axis, LinearFunction};
pub use point::{format_sig, Point2d, DISPLAY_SIG_DIGITS};
