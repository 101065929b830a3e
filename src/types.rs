//! Strongly-typed numeric primitives shared by both coordinate spaces.
//!
//! Raw `f64` input from callers is checked here once, so that the
//! transforms downstream only ever see finite values.

use std::fmt;

use glam::{DVec2, DVec3};

use crate::errors::DrawError;

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is zero when non-zero required
    Zero,
    /// Value is negative when positive required
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Zero => write!(f, "value is zero"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Reject NaN and infinities.
#[inline]
pub fn finite(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else {
        Ok(val)
    }
}

/// Reject anything that is not a finite, strictly positive number.
#[inline]
pub fn positive(val: f64) -> Result<f64, NumericError> {
    let val = finite(val)?;
    if val == 0.0 {
        Err(NumericError::Zero)
    } else if val < 0.0 {
        Err(NumericError::Negative)
    } else {
        Ok(val)
    }
}

/// Validate a plane point, naming it in the error.
pub fn finite2(what: &'static str, p: DVec2) -> Result<DVec2, DrawError> {
    finite(p.x)
        .and_then(|_| finite(p.y))
        .map(|_| p)
        .map_err(|reason| DrawError::InvalidCoordinate { what, reason })
}

/// Validate a space point, naming it in the error.
pub fn finite3(what: &'static str, p: DVec3) -> Result<DVec3, DrawError> {
    finite(p.x)
        .and_then(|_| finite(p.y))
        .and_then(|_| finite(p.z))
        .map(|_| p)
        .map_err(|reason| DrawError::InvalidCoordinate { what, reason })
}

/// Validate a scalar length, naming it in the error.
pub fn finite1(what: &'static str, val: f64) -> Result<f64, DrawError> {
    finite(val).map_err(|reason| DrawError::InvalidCoordinate { what, reason })
}

/// Pixels per plane (or space) unit.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Scale(f64);

impl Scale {
    /// Create a Scale with validation (rejects NaN, infinite, zero, negative)
    pub fn try_new(px_per_unit: f64) -> Result<Self, NumericError> {
        positive(px_per_unit).map(Scale)
    }

    /// Pixels per unit.
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }

    /// Convert a length in units to pixels.
    #[inline]
    pub fn px(self, units: f64) -> f64 {
        units * self.0
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px/unit", self.0)
    }
}

/// Pixel size of a drawing surface.
///
/// Only [`Canvas::try_new`] builds one, so both sides are always finite and
/// positive:
///
/// ```compile_fail
/// let canvas = planespace::types::Canvas { width: 100.0, height: 0.0 };
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Canvas {
    width: f64,
    height: f64,
}

impl Canvas {
    /// Create a canvas, rejecting empty or non-finite dimensions.
    pub fn try_new(width: f64, height: f64) -> Result<Self, DrawError> {
        let width = positive(width)
            .map_err(|e| DrawError::configuration(format!("canvas width {width}: {e}")))?;
        let height = positive(height)
            .map_err(|e| DrawError::configuration(format!("canvas height {height}: {e}")))?;
        Ok(Canvas { width, height })
    }

    pub fn width(self) -> f64 {
        self.width
    }

    pub fn height(self) -> f64 {
        self.height
    }

    pub fn size(self) -> DVec2 {
        DVec2::new(self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finite_rejects_nan_and_infinity() {
        assert_eq!(finite(f64::NAN), Err(NumericError::NaN));
        assert_eq!(finite(f64::INFINITY), Err(NumericError::Infinite));
        assert_eq!(finite(f64::NEG_INFINITY), Err(NumericError::Infinite));
        assert_eq!(finite(-3.5), Ok(-3.5));
    }

    #[test]
    fn positive_rejects_zero_and_negative() {
        assert_eq!(positive(0.0), Err(NumericError::Zero));
        assert_eq!(positive(-1.0), Err(NumericError::Negative));
        assert_eq!(positive(2.0), Ok(2.0));
    }

    #[test]
    fn finite2_names_the_point() {
        let err = finite2("segment start", DVec2::new(1.0, f64::NAN)).unwrap_err();
        assert_eq!(
            err,
            DrawError::InvalidCoordinate {
                what: "segment start",
                reason: NumericError::NaN
            }
        );
        assert!(finite2("segment start", DVec2::ZERO).is_ok());
    }

    #[test]
    fn finite3_checks_every_component() {
        assert!(finite3("p", DVec3::new(0.0, 0.0, f64::INFINITY)).is_err());
        assert!(finite3("p", DVec3::new(f64::NAN, 0.0, 0.0)).is_err());
        assert!(finite3("p", DVec3::ONE).is_ok());
    }

    #[test]
    fn scale_try_new_validates() {
        assert_eq!(Scale::try_new(0.0), Err(NumericError::Zero));
        assert_eq!(Scale::try_new(-4.0), Err(NumericError::Negative));
        assert_eq!(Scale::try_new(f64::NAN), Err(NumericError::NaN));
        let scale = Scale::try_new(40.0).unwrap();
        assert_eq!(scale.px(2.5), 100.0);
    }

    #[test]
    fn canvas_rejects_empty_dimensions() {
        assert!(matches!(
            Canvas::try_new(0.0, 100.0),
            Err(DrawError::Configuration { .. })
        ));
        assert!(matches!(
            Canvas::try_new(100.0, f64::INFINITY),
            Err(DrawError::Configuration { .. })
        ));
        assert_eq!(Canvas::try_new(640.0, 480.0).unwrap().size(), DVec2::new(640.0, 480.0));
    }
}
