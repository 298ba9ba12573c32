/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{Debug, Display};
use std::ops::{Add, Div, Mul, Sub};
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{de::DeserializeOwned, Serialize};

use crate::UnitError;

/// The numeric part of a value.
///
/// The plain operators behave like the underlying type (a `Decimal`
/// panics on overflow or division by zero, an `f64` yields infinity
/// or NaN). The `checked_*` methods return `None` instead.
pub trait Magnitude:
    Copy
    + PartialEq
    + PartialOrd
    + Debug
    + Display
    + Serialize
    + DeserializeOwned
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    const ZERO: Self;
    const ONE: Self;

    fn checked_add(self, rhs: Self) -> Option<Self>;
    fn checked_sub(self, rhs: Self) -> Option<Self>;
    fn checked_mul(self, rhs: Self) -> Option<Self>;
    fn checked_div(self, rhs: Self) -> Option<Self>;

    /// Converts an exact conversion factor to this type.
    fn from_decimal(value: Decimal) -> Option<Self>;

    fn parse_magnitude(input: &str) -> Result<Self, UnitError>;

    fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl Magnitude for Decimal {
    const ZERO: Self = Decimal::ZERO;
    const ONE: Self = Decimal::ONE;

    fn checked_add(self, rhs: Self) -> Option<Self> {
        Decimal::checked_add(self, rhs)
    }

    fn checked_sub(self, rhs: Self) -> Option<Self> {
        Decimal::checked_sub(self, rhs)
    }

    fn checked_mul(self, rhs: Self) -> Option<Self> {
        Decimal::checked_mul(self, rhs)
    }

    fn checked_div(self, rhs: Self) -> Option<Self> {
        Decimal::checked_div(self, rhs)
    }

    fn from_decimal(value: Decimal) -> Option<Self> {
        Some(value)
    }

    fn parse_magnitude(input: &str) -> Result<Self, UnitError> {
        Decimal::from_str(input)
            .or_else(|_| Decimal::from_scientific(input))
            .map_err(|e| {
                UnitError::ParseError(format!(
                    "invalid number {}: {}",
                    input, e
                ))
            })
    }
}

impl Magnitude for f64 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;

    fn checked_add(self, rhs: Self) -> Option<Self> {
        finite(self + rhs)
    }

    fn checked_sub(self, rhs: Self) -> Option<Self> {
        finite(self - rhs)
    }

    fn checked_mul(self, rhs: Self) -> Option<Self> {
        finite(self * rhs)
    }

    fn checked_div(self, rhs: Self) -> Option<Self> {
        match rhs == 0.0 {
            true => None,
            false => finite(self / rhs),
        }
    }

    fn from_decimal(value: Decimal) -> Option<Self> {
        value.to_f64()
    }

    fn parse_magnitude(input: &str) -> Result<Self, UnitError> {
        input.parse().map_err(|e| {
            UnitError::ParseError(format!("invalid number {}: {}", input, e))
        })
    }
}

fn finite(n: f64) -> Option<f64> {
    n.is_finite().then_some(n)
}
