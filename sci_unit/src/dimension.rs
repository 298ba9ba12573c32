/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display, Formatter};
use std::mem::MaybeUninit;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::base_unit::{
    BaseUnit, CurrentUnit, DimensionlessUnit, LengthUnit, MassUnit,
    TemperatureUnit, TimeUnit, VolumeUnit,
};
use super::composite::Composite;
use super::error::UnitError;
use super::parser::parse_dimension;
use super::shape::{Atom, Shape};
use super::unit::{AtomicUnit, Unit};

/// Base dimensions. These can be considered an atomic unit's "type".
/// Conversion is possible only between units whose dimensions have
/// the same signature.
#[derive(
    Serialize,
    Deserialize,
    PartialEq,
    PartialOrd,
    Eq,
    Ord,
    Hash,
    Clone,
    Copy,
    Debug,
)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serialize_as_string", serde(rename_all = "snake_case"))]
pub enum BaseDimension {
    Length,
    Mass,
    Time,
    Temperature,
    Current,
    /* Derived, but with units of its own (liter, gallon). */
    Volume,
    Dimensionless,
}

/// A possibly composite dimension, e.g. `L/T`.
pub type Dimension = Shape<BaseDimension>;

pub(crate) static DIMENSIONS: [BaseDimension; 7] = [
    BaseDimension::Length,
    BaseDimension::Mass,
    BaseDimension::Time,
    BaseDimension::Temperature,
    BaseDimension::Current,
    BaseDimension::Volume,
    BaseDimension::Dimensionless,
];

macro_rules! define_units {
    ($name:ident, $unit:ident, $units:ident) => {
        pub(crate) static $name: [AtomicUnit; $units::LIST.len()] = {
            let mut r = [MaybeUninit::uninit(); $units::LIST.len()];
            let mut i = 0;
            while i < $units::LIST.len() {
                r[i] = MaybeUninit::new(AtomicUnit::$unit($units::LIST[i]));
                i += 1;
            }
            // Safety: the loop initialized every element.
            unsafe { std::mem::transmute(r) }
        };
    };
}

define_units!(LENGTH_UNITS, Length, LengthUnit);
define_units!(MASS_UNITS, Mass, MassUnit);
define_units!(TIME_UNITS, Time, TimeUnit);
define_units!(TEMPERATURE_UNITS, Temperature, TemperatureUnit);
define_units!(CURRENT_UNITS, Current, CurrentUnit);
define_units!(VOLUME_UNITS, Volume, VolumeUnit);
define_units!(DIMENSIONLESS_UNITS, Dimensionless, DimensionlessUnit);

impl BaseDimension {
    pub const LIST: &[Self] = &DIMENSIONS;

    pub const fn symbol(&self) -> &'static str {
        match self {
            BaseDimension::Length => "L",
            BaseDimension::Mass => "M",
            BaseDimension::Time => "T",
            BaseDimension::Temperature => "Θ",
            BaseDimension::Current => "I",
            BaseDimension::Volume => "V",
            BaseDimension::Dimensionless => "1",
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            BaseDimension::Length => "length",
            BaseDimension::Mass => "mass",
            BaseDimension::Time => "time",
            BaseDimension::Temperature => "temperature",
            BaseDimension::Current => "current",
            BaseDimension::Volume => "volume",
            BaseDimension::Dimensionless => "dimensionless",
        }
    }

    pub const fn reference_unit(&self) -> AtomicUnit {
        match self {
            BaseDimension::Length => AtomicUnit::Length(LengthUnit::REFERENCE),
            BaseDimension::Mass => AtomicUnit::Mass(MassUnit::REFERENCE),
            BaseDimension::Time => AtomicUnit::Time(TimeUnit::REFERENCE),
            BaseDimension::Temperature => {
                AtomicUnit::Temperature(TemperatureUnit::REFERENCE)
            }
            BaseDimension::Current => {
                AtomicUnit::Current(CurrentUnit::REFERENCE)
            }
            BaseDimension::Volume => AtomicUnit::Volume(VolumeUnit::REFERENCE),
            BaseDimension::Dimensionless => {
                AtomicUnit::Dimensionless(DimensionlessUnit::REFERENCE)
            }
        }
    }

    pub const fn units(&self) -> &'static [AtomicUnit] {
        match self {
            BaseDimension::Length => &LENGTH_UNITS,
            BaseDimension::Mass => &MASS_UNITS,
            BaseDimension::Time => &TIME_UNITS,
            BaseDimension::Temperature => &TEMPERATURE_UNITS,
            BaseDimension::Current => &CURRENT_UNITS,
            BaseDimension::Volume => &VOLUME_UNITS,
            BaseDimension::Dimensionless => &DIMENSIONLESS_UNITS,
        }
    }

    /// The base dimension expressed in irreducible dimensions.
    pub fn signature(&self) -> Composite<BaseDimension> {
        match self {
            BaseDimension::Volume => {
                Composite::simple(BaseDimension::Length).powi(3)
            }
            BaseDimension::Dimensionless => Composite::empty(),
            d => Composite::simple(*d),
        }
    }
}

impl Atom for BaseDimension {
    const NEUTRAL: Self = BaseDimension::Dimensionless;
}

impl Display for BaseDimension {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.symbol())
    }
}

impl Dimension {
    pub fn parse(input: &str) -> Result<Self, UnitError> {
        parse_dimension(input)
    }

    /// Flattened exponent form. Two dimensions with the same
    /// signature measure the same quantity.
    pub fn signature(&self) -> Composite<BaseDimension> {
        self.factors()
            .into_iter()
            .map(|(d, inverted)| match inverted {
                true => d.signature().powi(-1),
                false => d.signature(),
            })
            .fold(Composite::empty(), |acc, s| acc * s)
    }

    /// Whether values of `unit` measure this dimension.
    pub fn check(&self, unit: &Unit) -> Result<(), UnitError> {
        match unit.dimension().signature() == self.signature() {
            true => Ok(()),
            false => Err(UnitError::TypeError(self.clone(), unit.clone())),
        }
    }
}

impl FromStr for Dimension {
    type Err = UnitError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dimension::parse(s)
    }
}
