/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display, Formatter};
use std::ops::{Div, Mul};
use std::str::FromStr;

use log::{debug, trace};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::algebra::{derive, Operation};
use crate::parser::parse_value;
use crate::shape::{Composer, DefaultComposer};
use crate::typed::TypedUnit;
use crate::{
    Dimension, Magnitude, MeasurementSystem, MeasurementUsage, Unit,
    UnitError, NEUTRAL_UNIT,
};

/// A magnitude tagged with a (possibly composite) unit.
///
/// Values are immutable: every operation returns a new value.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct ScientificValue<M = Decimal> {
    magnitude: M,
    unit: Unit,
}

/// Multiplies the magnitudes, derives the result unit with
/// `composer` and hands both to `factory`.
pub fn by_multiplying<M, C, T, F>(
    lhs: &ScientificValue<M>,
    rhs: &ScientificValue<M>,
    composer: &C,
    factory: F,
) -> T
where
    M: Magnitude,
    C: Composer<crate::AtomicUnit> + ?Sized,
    F: FnOnce(M, Unit) -> T,
{
    let unit = derive(&lhs.unit, &rhs.unit, Operation::Times, composer);
    trace!("{} × {} -> {}", lhs.unit, rhs.unit, unit);
    factory(lhs.magnitude * rhs.magnitude, unit)
}

/// Divides the magnitudes, derives the result unit with `composer`
/// and hands both to `factory`.
pub fn by_dividing<M, C, T, F>(
    lhs: &ScientificValue<M>,
    rhs: &ScientificValue<M>,
    composer: &C,
    factory: F,
) -> T
where
    M: Magnitude,
    C: Composer<crate::AtomicUnit> + ?Sized,
    F: FnOnce(M, Unit) -> T,
{
    let unit = derive(&lhs.unit, &rhs.unit, Operation::Div, composer);
    trace!("{} ÷ {} -> {}", lhs.unit, rhs.unit, unit);
    factory(lhs.magnitude / rhs.magnitude, unit)
}

impl<M: Magnitude> ScientificValue<M> {
    pub fn new(magnitude: M, unit: Unit) -> Self {
        Self { magnitude, unit }
    }

    /// A value in a statically known unit.
    ///
    /// ```
    /// use sci_unit::typed::{Meter, Second, DividedUnit};
    /// use sci_unit::ScientificValue;
    ///
    /// let speed = ScientificValue::of::<DividedUnit<Meter, Second>>(10.0);
    /// assert_eq!(speed.to_string(), "10 m/s");
    /// ```
    pub fn of<U: TypedUnit>(magnitude: M) -> Self {
        Self::new(magnitude, U::unit())
    }

    /// A dimensionless value.
    pub fn from_magnitude(magnitude: M) -> Self {
        Self::new(magnitude, NEUTRAL_UNIT)
    }

    pub fn parse(input: &str) -> Result<Self, UnitError> {
        parse_value(input)
    }

    pub fn magnitude(&self) -> M {
        self.magnitude
    }

    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    pub fn into_parts(self) -> (M, Unit) {
        (self.magnitude, self.unit)
    }

    pub fn dimension(&self) -> Dimension {
        self.unit.dimension()
    }

    pub fn usage(&self) -> MeasurementUsage {
        self.unit.usage()
    }

    /// `self × rhs`. Overflow behaves as for the magnitude type's
    /// own `*` operator.
    pub fn times(&self, rhs: &Self) -> Self {
        self.times_with(rhs, &DefaultComposer, Self::new)
    }

    /// `self ÷ rhs`. Division by zero behaves as for the magnitude
    /// type's own `/` operator.
    pub fn div(&self, rhs: &Self) -> Self {
        self.div_with(rhs, &DefaultComposer, Self::new)
    }

    /// `self × rhs`, composing the result unit with `composer` and
    /// building the result with `factory`.
    pub fn times_with<C, T, F>(&self, rhs: &Self, composer: &C, factory: F) -> T
    where
        C: Composer<crate::AtomicUnit> + ?Sized,
        F: FnOnce(M, Unit) -> T,
    {
        by_multiplying(self, rhs, composer, factory)
    }

    pub fn div_with<C, T, F>(&self, rhs: &Self, composer: &C, factory: F) -> T
    where
        C: Composer<crate::AtomicUnit> + ?Sized,
        F: FnOnce(M, Unit) -> T,
    {
        by_dividing(self, rhs, composer, factory)
    }

    pub fn checked_times(&self, rhs: &Self) -> Result<Self, UnitError> {
        let magnitude = self
            .magnitude
            .checked_mul(rhs.magnitude)
            .ok_or_else(|| {
                UnitError::Overflow(format!("{} × {}", self, rhs))
            })?;
        Ok(self.times_with(rhs, &DefaultComposer, |_, unit| {
            Self::new(magnitude, unit)
        }))
    }

    pub fn checked_div(&self, rhs: &Self) -> Result<Self, UnitError> {
        if rhs.magnitude.is_zero() {
            return Err(UnitError::DivisionByZero);
        }
        let magnitude = self
            .magnitude
            .checked_div(rhs.magnitude)
            .ok_or_else(|| {
                UnitError::Overflow(format!("{} ÷ {}", self, rhs))
            })?;
        Ok(self.div_with(rhs, &DefaultComposer, |_, unit| {
            Self::new(magnitude, unit)
        }))
    }

    /// `self × rhs`, provided both operands can be used in `system`.
    pub fn times_in(
        &self,
        system: MeasurementSystem,
        rhs: &Self,
    ) -> Result<Self, UnitError> {
        self.unit.check_usage(system)?;
        rhs.unit.check_usage(system)?;
        Ok(self.times(rhs))
    }

    /// `self ÷ rhs`, provided both operands can be used in `system`.
    pub fn div_in(
        &self,
        system: MeasurementSystem,
        rhs: &Self,
    ) -> Result<Self, UnitError> {
        self.unit.check_usage(system)?;
        rhs.unit.check_usage(system)?;
        Ok(self.div(rhs))
    }

    /// `1 / self`.
    pub fn reciprocal(&self) -> Self {
        Self::new(M::ONE / self.magnitude, self.unit.clone().reciprocal())
    }

    /// The same quantity expressed in `unit`.
    pub fn convert(&self, unit: &Unit) -> Result<Self, UnitError> {
        if &self.unit == unit {
            return Ok(self.clone());
        }
        if !self.unit.is_convertible(unit) {
            return Err(UnitError::Conversion(self.unit.clone(), unit.clone()));
        }
        let magnitude = rescale(self.magnitude, &self.unit, unit)?;
        debug!("converted {} to {} {}", self, magnitude, unit);
        Ok(Self::new(magnitude, unit.clone()))
    }

    /// The same quantity in reference units (meter, kilogram, ...).
    pub fn normalize(&self) -> Result<Self, UnitError> {
        self.convert(&self.unit.normalize())
    }
}

fn factor<M: Magnitude>(value: Decimal, unit: &Unit) -> Result<M, UnitError> {
    M::from_decimal(value).ok_or_else(|| {
        UnitError::Overflow(format!("conversion factor of {}", unit))
    })
}

fn overflow(from: &Unit, to: &Unit) -> UnitError {
    UnitError::Overflow(format!("conversion from {} to {}", from, to))
}

/// `(m + offset) × factor(from) / factor(to) - offset(to)`. Both
/// factors are fractions; they are cross-multiplied so that a single
/// division remains.
fn rescale<M: Magnitude>(
    magnitude: M,
    from: &Unit,
    to: &Unit,
) -> Result<M, UnitError> {
    let (from_num, from_den) = from.factor()?;
    let (to_num, to_den) = to.factor()?;
    let num = from_num
        .checked_mul(to_den)
        .ok_or_else(|| overflow(from, to))?;
    let den = from_den
        .checked_mul(to_num)
        .ok_or_else(|| overflow(from, to))?;
    let num = factor::<M>(num, from)?;
    let den = factor::<M>(den, to)?;
    let from_offset = factor::<M>(from.offset(), from)?;
    let to_offset = factor::<M>(to.offset(), to)?;
    magnitude
        .checked_add(from_offset)
        .and_then(|m| m.checked_mul(num))
        .and_then(|m| m.checked_div(den))
        .and_then(|m| m.checked_sub(to_offset))
        .ok_or_else(|| overflow(from, to))
}

impl<M: Magnitude> Display for ScientificValue<M> {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self.unit.is_neutral() {
            true => write!(f, "{}", self.magnitude),
            false => write!(f, "{} {}", self.magnitude, self.unit),
        }
    }
}

impl<M: Magnitude> FromStr for ScientificValue<M> {
    type Err = UnitError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<M: Magnitude> Mul<ScientificValue<M>> for ScientificValue<M> {
    type Output = ScientificValue<M>;
    fn mul(self, rhs: ScientificValue<M>) -> Self::Output {
        self.times(&rhs)
    }
}

impl<M: Magnitude> Mul<&ScientificValue<M>> for &ScientificValue<M> {
    type Output = ScientificValue<M>;
    fn mul(self, rhs: &ScientificValue<M>) -> Self::Output {
        self.times(rhs)
    }
}

impl<M: Magnitude> Div<ScientificValue<M>> for ScientificValue<M> {
    type Output = ScientificValue<M>;
    fn div(self, rhs: ScientificValue<M>) -> Self::Output {
        ScientificValue::div(&self, &rhs)
    }
}

impl<M: Magnitude> Div<&ScientificValue<M>> for &ScientificValue<M> {
    type Output = ScientificValue<M>;
    fn div(self, rhs: &ScientificValue<M>) -> Self::Output {
        ScientificValue::div(self, rhs)
    }
}
