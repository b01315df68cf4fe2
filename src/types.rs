//! Strongly-typed numeric primitives for plot measurements (zero-cost newtypes).
//!
//! Model coordinates are meters. Areas travel as [`SquareMeters`] inside the
//! geometry engine and as [`Hectares`] at the text-field boundary; the only
//! conversion between the two goes through [`HECTARE`].

use std::fmt;
use std::ops::Mul;

/// A point in model space (meters).
pub type Point = glam::DVec2;

/// Square meters in one hectare.
pub const HECTARE: SquareMeters = SquareMeters(10_000.0);

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is negative when non-negative required
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

fn check_non_negative(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else if val < 0.0 {
        Err(NumericError::Negative)
    } else {
        Ok(val)
    }
}

/// Length in meters (model canonical unit)
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Meters(pub f64);

impl Meters {
    pub const ZERO: Meters = Meters(0.0);

    /// Get the raw value (use sparingly, prefer typed operations)
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }
}

/// Meters * Meters = SquareMeters
impl Mul for Meters {
    type Output = SquareMeters;
    fn mul(self, rhs: Meters) -> SquareMeters { SquareMeters(self.0 * rhs.0) }
}

impl fmt::Display for Meters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Area in square meters
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct SquareMeters(pub f64);

impl SquareMeters {
    pub const ZERO: SquareMeters = SquareMeters(0.0);

    /// Create an area with validation (rejects NaN, infinite and negative values)
    #[inline]
    pub fn try_new(val: f64) -> Result<SquareMeters, NumericError> {
        check_non_negative(val).map(SquareMeters)
    }

    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }

    /// Side of the square with this area. NaN for negative areas.
    #[inline]
    pub fn side(self) -> Meters {
        Meters(self.0.sqrt())
    }

    #[inline]
    pub fn to_hectares(self) -> Hectares {
        Hectares(self.0 / HECTARE.0)
    }
}

impl fmt::Display for SquareMeters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Area in hectares, the unit of the text field
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Hectares(pub f64);

impl Hectares {
    pub const ZERO: Hectares = Hectares(0.0);

    /// Create a hectare value with validation (rejects NaN, infinite and negative values)
    #[inline]
    pub fn try_new(val: f64) -> Result<Hectares, NumericError> {
        check_non_negative(val).map(Hectares)
    }

    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn to_square_meters(self) -> SquareMeters {
        SquareMeters(self.0 * HECTARE.0)
    }
}

impl fmt::Display for Hectares {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Angle in degrees
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
pub struct Angle(pub f64);

impl Angle {
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
