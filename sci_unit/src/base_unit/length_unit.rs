/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

use super::super::prefix::{Prefix, SiPrefix};
use super::base_units::LENGTH_UNITS;
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
pub enum LengthUnit {
    Meter(SiPrefix),
    Inch,
    Foot,
    Yard,
    Mile,
}

impl BaseUnit for LengthUnit {
    const LIST: &[Self] = &LENGTH_UNITS;
    const REFERENCE: Self = LengthUnit::Meter(SiPrefix::Unit);

    fn multiplier(&self) -> Decimal {
        match self {
            LengthUnit::Meter(p) => p.multiplier(),
            LengthUnit::Inch => Decimal::new(254, 4),
            LengthUnit::Foot => Decimal::new(3048, 4),
            LengthUnit::Yard => Decimal::new(9144, 4),
            LengthUnit::Mile => Decimal::new(1609344, 3),
        }
    }

    fn usage(&self) -> MeasurementUsage {
        match self {
            LengthUnit::Meter(_) => MeasurementUsage::METRIC,
            _ => MeasurementUsage::IMPERIAL,
        }
    }
}

impl Display for LengthUnit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            LengthUnit::Meter(m) => write!(f, "{}m", m),
            LengthUnit::Inch => write!(f, "in"),
            LengthUnit::Foot => write!(f, "ft"),
            LengthUnit::Yard => write!(f, "yd"),
            LengthUnit::Mile => write!(f, "mi"),
        }
    }
}
