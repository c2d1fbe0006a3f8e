//! Horizontal plotting range for a set of points.

use crate::geom2::Point2d;

/// Range used when there is nothing to show.
pub const EMPTY_RANGE: (f64, f64) = (-5.0, 5.0);

/// `(min_x - extra*w, max_x + extra*w)` with `w = max_x - min_x`, or
/// [`EMPTY_RANGE`] for no points.
pub fn display_range(points: &[Point2d], extra: f64) -> (f64, f64) {
    let mut it = points.iter().map(|p| p.x);
    let Some(first) = it.next() else {
        return EMPTY_RANGE;
    };
    let (lo, hi) = it.fold((first, first), |(lo, hi), x| (lo.min(x), hi.max(x)));
    let pad = extra * (hi - lo);
    (lo - pad, hi + pad)
}
