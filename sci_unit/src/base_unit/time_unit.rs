/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

use super::super::prefix::{FracPrefix, Prefix};
use super::base_units::TIME_UNITS;
use super::BaseUnit;
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
pub enum TimeUnit {
    Second(FracPrefix),
    Minute,
    Hour,
    Day,
    Week,
}

impl BaseUnit for TimeUnit {
    const LIST: &[Self] = &TIME_UNITS;
    const REFERENCE: Self = TimeUnit::Second(FracPrefix::Unit);

    fn multiplier(&self) -> Decimal {
        match self {
            TimeUnit::Second(m) => m.multiplier(),
            TimeUnit::Minute => Decimal::from(60),
            TimeUnit::Hour => Decimal::from(3600),
            TimeUnit::Day => Decimal::from(3600 * 24),
            TimeUnit::Week => Decimal::from(3600 * 24 * 7),
        }
    }

    /// Time is shared by every measurement system.
    fn usage(&self) -> MeasurementUsage {
        MeasurementUsage::UNIVERSAL
    }
}

impl Display for TimeUnit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            TimeUnit::Second(m) => write!(f, "{}s", m),
            TimeUnit::Minute => write!(f, "min"),
            TimeUnit::Hour => write!(f, "h"),
            TimeUnit::Day => write!(f, "day"),
            TimeUnit::Week => write!(f, "week"),
        }
    }
}
