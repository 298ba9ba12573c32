/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

use super::{base_units::TEMPERATURE_UNITS, BaseUnit};
use crate::MeasurementUsage;

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
pub enum TemperatureUnit {
    Kelvin,
    Celsius,
    Fahrenheit,
}

impl BaseUnit for TemperatureUnit {
    const LIST: &[Self] = &TEMPERATURE_UNITS;
    const REFERENCE: Self = TemperatureUnit::Kelvin;

    fn multiplier(&self) -> Decimal {
        Decimal::ONE
    }

    /// A kelvin is 1.8 degrees Fahrenheit.
    fn divisor(&self) -> Decimal {
        match self {
            TemperatureUnit::Kelvin | TemperatureUnit::Celsius => Decimal::ONE,
            TemperatureUnit::Fahrenheit => Decimal::new(18, 1),
        }
    }

    fn offset(&self) -> Decimal {
        match self {
            TemperatureUnit::Kelvin => Decimal::ZERO,
            TemperatureUnit::Celsius => Decimal::new(27315, 2),
            TemperatureUnit::Fahrenheit => Decimal::new(45967, 2),
        }
    }

    fn usage(&self) -> MeasurementUsage {
        match self {
            TemperatureUnit::Kelvin => MeasurementUsage::UNIVERSAL,
            TemperatureUnit::Celsius => MeasurementUsage::METRIC,
            TemperatureUnit::Fahrenheit => MeasurementUsage::IMPERIAL,
        }
    }
}

impl Display for TemperatureUnit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            TemperatureUnit::Kelvin => write!(f, "K"),
            TemperatureUnit::Celsius => write!(f, "°C"),
            TemperatureUnit::Fahrenheit => write!(f, "°F"),
        }
    }
}
