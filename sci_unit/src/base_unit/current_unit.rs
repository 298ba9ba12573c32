/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

use super::super::prefix::{Prefix, SiPrefix};
use super::base_units::CURRENT_UNITS;
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
pub enum CurrentUnit {
    Ampere(SiPrefix),
}

impl BaseUnit for CurrentUnit {
    const LIST: &[Self] = &CURRENT_UNITS;
    const REFERENCE: Self = CurrentUnit::Ampere(SiPrefix::Unit);

    fn multiplier(&self) -> Decimal {
        match self {
            CurrentUnit::Ampere(p) => p.multiplier(),
        }
    }

    fn usage(&self) -> MeasurementUsage {
        MeasurementUsage::UNIVERSAL
    }
}

impl Display for CurrentUnit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            CurrentUnit::Ampere(p) => write!(f, "{}A", p),
        }
    }
}
