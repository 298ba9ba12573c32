/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

use super::base_units::DIMENSIONLESS_UNITS;
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
pub enum DimensionlessUnit {
    One,
    Percent,
    Permille,
}

impl BaseUnit for DimensionlessUnit {
    const LIST: &[Self] = &DIMENSIONLESS_UNITS;
    const REFERENCE: Self = DimensionlessUnit::One;

    fn multiplier(&self) -> Decimal {
        match self {
            DimensionlessUnit::One => Decimal::ONE,
            DimensionlessUnit::Percent => Decimal::new(1, 2),
            DimensionlessUnit::Permille => Decimal::new(1, 3),
        }
    }

    fn usage(&self) -> MeasurementUsage {
        MeasurementUsage::UNIVERSAL
    }
}

impl Display for DimensionlessUnit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            DimensionlessUnit::One => write!(f, "1"),
            DimensionlessUnit::Percent => write!(f, "%"),
            DimensionlessUnit::Permille => write!(f, "‰"),
        }
    }
}
