//! Lines in the plane in slope and general form.
//!
//! A `LinearFunction` stores both `y = slope_a*x + slope_b` and
//! `gen_a*x + gen_b*y = gen_c`. The two forms are kept consistent at
//! construction (`slope_a = -gen_a/gen_b`, `slope_b = gen_c/gen_b`) and never
//! change afterwards.
//!
//! Conventions
//! - Vertical lines (`gen_b == 0`) are not representable.
//! - `from_slope` rejects horizontal lines (`a == 0`).
//! - Slope comparisons in `intersect` are exact.

use std::fmt;

use super::point::Point2d;
use crate::error::{Lp2Error, Result};

/// Coordinate axis, used to request an axis intercept.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// Both axes, in enumeration order.
    pub const ALL: [Axis; 2] = [Axis::X, Axis::Y];
}

/// A non-vertical line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearFunction {
    slope_a: f64,
    slope_b: f64,
    gen_a: f64,
    gen_b: f64,
    gen_c: f64,
}

impl LinearFunction {
    /// Line `y = a*x + b`, stored in general form as `-a*x + 1*y = b`.
    ///
    /// Fails with `InvalidParameter` when `a == 0`.
    pub fn from_slope(a: f64, b: f64) -> Result<Self> {
        if a == 0.0 {
            return Err(Lp2Error::InvalidParameter(
                "slope `a` must not be 0".to_string(),
            ));
        }
        Ok(Self {
            slope_a: a,
            slope_b: b,
            gen_a: -a,
            gen_b: 1.0,
            gen_c: b,
        })
    }

    /// Line `gen_a*x + gen_b*y = gen_c`.
    ///
    /// Fails with `InvalidParameter` when `gen_b == 0` (vertical line).
    pub fn from_general(gen_a: f64, gen_b: f64, gen_c: f64) -> Result<Self> {
        if gen_b == 0.0 {
            return Err(Lp2Error::InvalidParameter(
                "coefficient `b` of the general form must not be 0".to_string(),
            ));
        }
        Ok(Self {
            slope_a: -gen_a / gen_b,
            slope_b: gen_c / gen_b,
            gen_a,
            gen_b,
            gen_c,
        })
    }

    #[inline]
    pub fn slope_a(&self) -> f64 {
        self.slope_a
    }
    #[inline]
    pub fn slope_b(&self) -> f64 {
        self.slope_b
    }
    #[inline]
    pub fn gen_a(&self) -> f64 {
        self.gen_a
    }
    #[inline]
    pub fn gen_b(&self) -> f64 {
        self.gen_b
    }
    #[inline]
    pub fn gen_c(&self) -> f64 {
        self.gen_c
    }

    /// `slope_a*x + slope_b`.
    #[inline]
    pub fn value_at(&self, x: f64) -> f64 {
        self.slope_a * x + self.slope_b
    }

    /// Intersection with `other`.
    ///
    /// - Different slopes: the unique crossing, with `y` taken from `self`.
    /// - Equal slopes, different intercepts: `None`.
    /// - Identical lines: `Some((0, value_at(0)))`. Every point of the line
    ///   qualifies; `x = 0` is only the representative we report.
    pub fn intersect(&self, other: &LinearFunction) -> Option<Point2d> {
        if self.slope_a == other.slope_a {
            if self.slope_b != other.slope_b {
                return None;
            }
            return Some(Point2d::new(0.0, self.value_at(0.0)));
        }
        let x = (other.slope_b - self.slope_b) / (self.slope_a - other.slope_a);
        Some(Point2d::new(x, self.value_at(x)))
    }

    /// Axis intercept coordinate.
    ///
    /// `X` gives `gen_c/gen_a`, the `x` where the line meets `y = 0`. This is
    /// `±inf` or NaN when `gen_a == 0`; use [`Self::finite_intercept_on`] to
    /// guard. `Y` gives `0`: the `x` at which the line meets the y-axis.
    /// Pair the result with [`Self::value_at`] to get the intercept point.
    #[inline]
    pub fn intercept_on(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.gen_c / self.gen_a,
            Axis::Y => 0.0,
        }
    }

    /// Like [`Self::intercept_on`], but `None` for non-finite results.
    #[inline]
    pub fn finite_intercept_on(&self, axis: Axis) -> Option<f64> {
        Some(self.intercept_on(axis)).filter(|x| x.is_finite())
    }

    /// Intercept point `(intercept_on(axis), value_at(intercept_on(axis)))`.
    #[inline]
    pub fn axis_point(&self, axis: Axis) -> Point2d {
        let x = self.intercept_on(axis);
        Point2d::new(x, self.value_at(x))
    }

    #[inline]
    pub fn is_rising(&self) -> bool {
        self.slope_a > 0.0
    }

    /// `y = {slope_a}x {+|-} {|slope_b|}`.
    pub fn to_slope_string(&self) -> String {
        let sign = if self.slope_b >= 0.0 { '+' } else { '-' };
        format!("y = {}x {} {}", self.slope_a, sign, self.slope_b.abs())
    }

    /// `{gen_a}x {+|-} {|gen_b|}y = {gen_c}`.
    pub fn to_general_string(&self) -> String {
        let sign = if self.gen_b >= 0.0 { '+' } else { '-' };
        format!(
            "{}x {} {}y = {}",
            self.gen_a,
            sign,
            self.gen_b.abs(),
            self.gen_c
        )
    }
}

impl fmt::Display for LinearFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_general_string())
    }
}
