/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

use super::super::prefix::{Prefix, SiPrefix};
use super::base_units::MASS_UNITS;
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
pub enum MassUnit {
    Gram(SiPrefix),
    Tonne,
    Pound,
    Ounce,
    /// UK only.
    Stone,
    /// UK (imperial) ton of 2240 lb.
    LongTon,
    /// US ton of 2000 lb.
    ShortTon,
}

impl BaseUnit for MassUnit {
    const LIST: &[Self] = &MASS_UNITS;
    const REFERENCE: Self = MassUnit::Gram(SiPrefix::Kilo);

    fn multiplier(&self) -> Decimal {
        match self {
            MassUnit::Gram(p) => p.multiplier() / Decimal::ONE_THOUSAND,
            MassUnit::Tonne => Decimal::ONE_THOUSAND,
            MassUnit::Pound => Decimal::new(45359237, 8),
            MassUnit::Ounce => Decimal::new(28349523125, 12),
            MassUnit::Stone => Decimal::new(635029318, 8),
            MassUnit::LongTon => Decimal::new(10160469088, 7),
            MassUnit::ShortTon => Decimal::new(90718474, 5),
        }
    }

    fn usage(&self) -> MeasurementUsage {
        match self {
            MassUnit::Gram(_) | MassUnit::Tonne => MeasurementUsage::METRIC,
            MassUnit::Pound | MassUnit::Ounce => MeasurementUsage::IMPERIAL,
            MassUnit::Stone | MassUnit::LongTon => {
                MeasurementUsage::UK_IMPERIAL
            }
            MassUnit::ShortTon => MeasurementUsage::US_CUSTOMARY,
        }
    }
}

impl Display for MassUnit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            MassUnit::Gram(m) => write!(f, "{}g", m),
            MassUnit::Tonne => write!(f, "t"),
            MassUnit::Pound => write!(f, "lb"),
            MassUnit::Ounce => write!(f, "oz"),
            MassUnit::Stone => write!(f, "st"),
            MassUnit::LongTon => write!(f, "ton_uk"),
            MassUnit::ShortTon => write!(f, "ton_us"),
        }
    }
}
