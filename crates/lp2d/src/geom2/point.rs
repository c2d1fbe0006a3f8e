//! 2D points and distance helpers.
//!
//! `Point2d` is a plain `Copy` value. Equality is exact on the coordinates;
//! only `Display` rounds, using 3 significant digits so reports do not show
//! floating noise such as `3.6000000000000005`.

use std::fmt;

use nalgebra::Vector2;

/// Significant digits used when displaying coordinates.
pub const DISPLAY_SIG_DIGITS: usize = 3;

/// A point `(x, y)` in the plane of the two decision variables.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point2d {
    pub x: f64,
    pub y: f64,
}

impl Point2d {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance.
    #[inline]
    pub fn distance_squared_to(&self, other: &Point2d) -> f64 {
        (self.to_vector() - other.to_vector()).norm_squared()
    }

    /// Euclidean distance.
    #[inline]
    pub fn distance_to(&self, other: &Point2d) -> f64 {
        (self.to_vector() - other.to_vector()).norm()
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[inline]
    pub fn to_vector(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

impl From<Vector2<f64>> for Point2d {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Point2d> for Vector2<f64> {
    #[inline]
    fn from(p: Point2d) -> Self {
        p.to_vector()
    }
}

impl From<(f64, f64)> for Point2d {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point2d> for (f64, f64) {
    #[inline]
    fn from(p: Point2d) -> Self {
        (p.x, p.y)
    }
}

impl fmt::Display for Point2d {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}]",
            format_sig(self.x, DISPLAY_SIG_DIGITS),
            format_sig(self.y, DISPLAY_SIG_DIGITS)
        )
    }
}

/// Format `v` with `sig` significant digits in "general" notation.
///
/// Fixed notation is used when the decimal exponent `e` satisfies
/// `-4 <= e < sig`, scientific (`1.23e+05`) otherwise. Trailing zeros and a
/// dangling decimal point are removed in both cases.
pub fn format_sig(v: f64, sig: usize) -> String {
    if v.is_nan() {
        return "nan".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if v == 0.0 {
        return "0".to_string();
    }
    let sig = sig.max(1);
    // Let the formatter do the rounding; the exponent is read after rounding
    // so that e.g. 999.6 moves to the next decade.
    let sci = format!("{:.*e}", sig - 1, v);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };
    if exp < -4 || exp >= sig as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exp.abs())
    } else {
        let decimals = (sig as i32 - 1 - exp).max(0) as usize;
        trim_fraction(&format!("{:.*}", decimals, v)).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn general_format_matches_three_significant_digits() {
        assert_eq!(format_sig(0.8, 3), "0.8");
        assert_eq!(format_sig(3.6000000000000005, 3), "3.6");
        assert_eq!(format_sig(24.0, 3), "24");
        assert_eq!(format_sig(-1.0, 3), "-1");
        assert_eq!(format_sig(1.0 / 3.0, 3), "0.333");
        assert_eq!(format_sig(123.456, 3), "123");
        assert_eq!(format_sig(1234.5, 3), "1.23e+03");
        assert_eq!(format_sig(999.6, 3), "1e+03");
        assert_eq!(format_sig(0.000012345, 3), "1.23e-05");
        assert_eq!(format_sig(0.0001, 3), "0.0001");
        assert_eq!(format_sig(0.0, 3), "0");
        assert_eq!(format_sig(f64::INFINITY, 3), "inf");
        assert_eq!(format_sig(f64::NAN, 3), "nan");
    }

    #[test]
    fn display_rounds_but_equality_is_exact() {
        let p = Point2d::new(0.8, 3.6000000000000005);
        assert_eq!(p.to_string(), "[0.8, 3.6]");
        assert_ne!(p, Point2d::new(0.8, 3.6));
    }

    #[test]
    fn distances() {
        let a = Point2d::new(0.0, 0.0);
        let b = Point2d::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-12);
        assert!((a.distance_squared_to(&b) - 25.0).abs() < 1e-12);
        assert!((b.distance_to(&a) - a.distance_to(&b)).abs() < 1e-12);
    }

    #[test]
    fn vector_conversions() {
        let p = Point2d::new(1.5, -2.0);
        let v: Vector2<f64> = p.into();
        assert_eq!(Point2d::from(v), p);
        let t: (f64, f64) = p.into();
        assert_eq!(t, (1.5, -2.0));
        assert!(!Point2d::new(f64::INFINITY, 0.0).is_finite());
    }
}
