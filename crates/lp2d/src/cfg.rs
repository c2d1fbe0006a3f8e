//! Solve configuration (tolerances and pipeline switches).
//!
//! Defaults reproduce exact floating-point semantics: equality constraints and
//! objective ties compare with `==`. Positive tolerances are opt-in.

/// Default padding factor for [`crate::lp::display_range`].
pub const DEFAULT_RANGE_EXTRA: f64 = 0.5;

/// Pipeline configuration for [`crate::lp::Problem::solve`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolveCfg {
    /// Slack for constraint checks. `0.0` means exact comparison.
    pub eq_eps: f64,
    /// Objective values within `tie_eps` of the best are ties. `0.0` means exact.
    pub tie_eps: f64,
    /// Drop candidate points with infinite or NaN coordinates before filtering.
    pub drop_non_finite: bool,
    /// Padding factor for the display range.
    pub range_extra: f64,
}

impl Default for SolveCfg {
    fn default() -> Self {
        Self {
            eq_eps: 0.0,
            tie_eps: 0.0,
            drop_non_finite: true,
            range_extra: DEFAULT_RANGE_EXTRA,
        }
    }
}
