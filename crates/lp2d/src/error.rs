//! Error type for problem construction.
//!
//! Geometry itself never fails: parallel lines yield `None` and non-finite
//! intercepts are plain floats. Errors only arise when a problem instance is
//! malformed before any geometry runs.

use thiserror::Error;

/// Errors raised while building lines, constraints, or problems.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Lp2Error {
    /// A representation-defining coefficient makes the conversion undefined
    /// (zero slope for `from_slope`, zero `gen_b` for `from_general`, or a
    /// non-finite objective coefficient).
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    /// A limitation kind could not be parsed from text.
    #[error("unknown limitation kind `{0}` (expected one of <=, >=, =)")]
    UnknownLimitation(String),
}

pub type Result<T> = std::result::Result<T, Lp2Error>;
