/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::base_unit::{
    BaseUnit, CurrentUnit, DimensionlessUnit, LengthUnit, MassUnit,
    TemperatureUnit, TimeUnit, VolumeUnit,
};
use super::composite::Composite;
use super::dimension::{BaseDimension, Dimension};
use super::error::UnitError;
use super::magnitude::Magnitude;
use super::parser::parse_unit;
use super::shape::{Atom, Shape};
use super::usage::{MeasurementSystem, MeasurementUsage};
use super::value::ScientificValue;

/// A unit without internal structure: one of the catalog units,
/// with its prefix.
#[derive(
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Ord,
    PartialOrd,
    Hash,
    Clone,
    Copy,
    Debug,
)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub enum AtomicUnit {
    Length(LengthUnit),
    Mass(MassUnit),
    Time(TimeUnit),
    Temperature(TemperatureUnit),
    Current(CurrentUnit),
    Volume(VolumeUnit),
    Dimensionless(DimensionlessUnit),
}

/// A possibly composite unit, e.g. `km/h` or `kg⋅m/s`.
pub type Unit = Shape<AtomicUnit>;

pub const NEUTRAL_UNIT: Unit =
    Shape::Atomic(AtomicUnit::Dimensionless(DimensionlessUnit::REFERENCE));

macro_rules! dispatch {
    ($self:expr, $u:ident => $e:expr) => {
        match $self {
            AtomicUnit::Length($u) => $e,
            AtomicUnit::Mass($u) => $e,
            AtomicUnit::Time($u) => $e,
            AtomicUnit::Temperature($u) => $e,
            AtomicUnit::Current($u) => $e,
            AtomicUnit::Volume($u) => $e,
            AtomicUnit::Dimensionless($u) => $e,
        }
    };
}

impl AtomicUnit {
    /// Every catalog unit, grouped by dimension.
    pub fn all() -> impl Iterator<Item = AtomicUnit> {
        BaseDimension::LIST
            .iter()
            .flat_map(|d| d.units().iter().copied())
    }

    pub fn dimension(&self) -> BaseDimension {
        match self {
            AtomicUnit::Length(_) => BaseDimension::Length,
            AtomicUnit::Mass(_) => BaseDimension::Mass,
            AtomicUnit::Time(_) => BaseDimension::Time,
            AtomicUnit::Temperature(_) => BaseDimension::Temperature,
            AtomicUnit::Current(_) => BaseDimension::Current,
            AtomicUnit::Volume(_) => BaseDimension::Volume,
            AtomicUnit::Dimensionless(_) => BaseDimension::Dimensionless,
        }
    }

    pub fn normalize(&self) -> Self {
        match self {
            AtomicUnit::Length(u) => AtomicUnit::Length(u.normalize()),
            AtomicUnit::Mass(u) => AtomicUnit::Mass(u.normalize()),
            AtomicUnit::Time(u) => AtomicUnit::Time(u.normalize()),
            AtomicUnit::Temperature(u) => {
                AtomicUnit::Temperature(u.normalize())
            }
            AtomicUnit::Current(u) => AtomicUnit::Current(u.normalize()),
            AtomicUnit::Volume(u) => AtomicUnit::Volume(u.normalize()),
            AtomicUnit::Dimensionless(u) => {
                AtomicUnit::Dimensionless(u.normalize())
            }
        }
    }

    pub fn multiplier(&self) -> Decimal {
        dispatch!(self, u => u.multiplier())
    }

    pub fn divisor(&self) -> Decimal {
        dispatch!(self, u => u.divisor())
    }

    pub fn offset(&self) -> Decimal {
        dispatch!(self, u => u.offset())
    }

    pub fn usage(&self) -> MeasurementUsage {
        dispatch!(self, u => u.usage())
    }
}

impl Atom for AtomicUnit {
    const NEUTRAL: Self =
        AtomicUnit::Dimensionless(DimensionlessUnit::REFERENCE);
}

impl Display for AtomicUnit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        dispatch!(self, u => u.fmt(f))
    }
}

impl From<AtomicUnit> for Unit {
    fn from(unit: AtomicUnit) -> Self {
        Shape::Atomic(unit)
    }
}

impl Unit {
    pub fn parse(input: &str) -> Result<Self, UnitError> {
        parse_unit(input)
    }

    pub fn dimension(&self) -> Dimension {
        self.map(AtomicUnit::dimension)
    }

    pub fn signature(&self) -> Composite<BaseDimension> {
        self.dimension().signature()
    }

    /// The systems every atom of the unit is used in.
    pub fn usage(&self) -> MeasurementUsage {
        self.factors()
            .into_iter()
            .fold(MeasurementUsage::UNIVERSAL, |acc, (u, _)| acc & u.usage())
    }

    pub fn supports(&self, system: MeasurementSystem) -> bool {
        self.usage().supports(system)
    }

    /// Fails with [`UnitError::Usage`] unless the unit can be used
    /// in `system`.
    pub fn check_usage(
        &self,
        system: MeasurementSystem,
    ) -> Result<(), UnitError> {
        match self.supports(system) {
            true => Ok(()),
            false => Err(UnitError::Usage(self.clone(), system)),
        }
    }

    /// The unit with every atom replaced by its dimension's
    /// reference unit.
    pub fn normalize(&self) -> Self {
        self.map(AtomicUnit::normalize)
    }

    pub fn is_convertible(&self, other: &Self) -> bool {
        self.signature() == other.signature()
    }

    /// The exact factor to the reference units, as a numerator and a
    /// denominator. Numerator atoms contribute their multiplier above
    /// the line and their divisor below it; denominator atoms the
    /// other way around.
    pub fn factor(&self) -> Result<(Decimal, Decimal), UnitError> {
        self.factors()
            .into_iter()
            .try_fold((Decimal::ONE, Decimal::ONE), |(num, den), (u, inv)| {
                let (above, below) = match inv {
                    false => (u.multiplier(), u.divisor()),
                    true => (u.divisor(), u.multiplier()),
                };
                Some((num.checked_mul(above)?, den.checked_mul(below)?))
            })
            .ok_or_else(|| UnitError::Overflow(format!("factor of {}", self)))
    }

    /// The factor to the reference units as a single decimal. This
    /// is rounded when the factor has no finite decimal expansion.
    pub fn multiplier(&self) -> Result<Decimal, UnitError> {
        let (num, den) = self.factor()?;
        num.checked_div(den).ok_or_else(|| {
            UnitError::Overflow(format!("multiplier of {}", self))
        })
    }

    /// Offset from the reference zero. Only plain temperature units
    /// have one: in a composite unit a temperature is a difference.
    pub fn offset(&self) -> Decimal {
        match self {
            Shape::Atomic(u) => u.offset(),
            _ => Decimal::ZERO,
        }
    }

    /// Reads a magnitude expressed in reference units and converts
    /// it to this unit.
    pub fn value_from_json<M: Magnitude>(
        &self,
        value: serde_json::Value,
    ) -> Result<ScientificValue<M>, UnitError> {
        let magnitude: M = serde_json::from_value(value)
            .map_err(|e| UnitError::Json(e.to_string()))?;
        ScientificValue::new(magnitude, self.normalize()).convert(self)
    }
}

impl FromStr for Unit {
    type Err = UnitError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Unit::parse(s)
    }
}

impl From<Unit> for String {
    fn from(val: Unit) -> Self {
        format!("{}", val)
    }
}

impl TryFrom<String> for Unit {
    type Error = UnitError;
    fn try_from(val: String) -> std::result::Result<Self, Self::Error> {
        Self::parse(&val)
    }
}
