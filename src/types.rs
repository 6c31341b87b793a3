//! Strongly-typed primitives for turtle commands (zero-cost newtypes).
//!
//! Distances and angles are validated once when the translation table is
//! built, so the interpreter never sees NaN or infinite parameters.

use std::fmt;
use std::ops::Neg;

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
        }
    }
}

impl std::error::Error for NumericError {}

fn check_finite(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else {
        Ok(val)
    }
}

/// Distance travelled by a `forward` or `draw` step, in canvas units.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Distance(f64);

impl Distance {
    /// Create a Distance with validation (rejects NaN/infinite)
    #[inline]
    pub fn try_new(val: f64) -> Result<Distance, NumericError> {
        check_finite(val).map(Distance)
    }

    /// Get the raw value
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Angle in degrees
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Angle(f64);

impl Angle {
    /// Create an Angle with validation (rejects NaN/infinite)
    #[inline]
    pub fn try_degrees(val: f64) -> Result<Angle, NumericError> {
        check_finite(val).map(Angle)
    }

    #[inline]
    pub fn degrees(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn radians(self) -> f64 {
        self.0.to_radians()
    }
}

impl Neg for Angle {
    type Output = Angle;
    fn neg(self) -> Angle {
        Angle(-self.0)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stroke color of a path segment.
///
/// Single-token literals (`red`, `#ff8800`, ...) are kept verbatim; the
/// three-channel form prints as `rgb(r, g, b)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Named(String),
    Rgb(u8, u8, u8),
}

impl Color {
    pub fn named(name: impl Into<String>) -> Self {
        Color::Named(name.into())
    }

    pub fn black() -> Self {
        Color::named("black")
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::black()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Named(s) => write!(f, "{}", s),
            Color::Rgb(r, g, b) => write!(f, "rgb({}, {}, {})", r, g, b),
        }
    }
}
