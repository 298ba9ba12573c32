/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

use super::super::prefix::{Prefix, SiPrefix};
use super::base_units::VOLUME_UNITS;
use super::BaseUnit;
use crate::MeasurementUsage;

/// Volume units that are not a cube of a length unit. Multipliers
/// are relative to the cubic meter.
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
pub enum VolumeUnit {
    Liter(SiPrefix),
    ImperialGallon,
    ImperialPint,
    UsGallon,
    UsPint,
}

impl BaseUnit for VolumeUnit {
    const LIST: &[Self] = &VOLUME_UNITS;
    const REFERENCE: Self = VolumeUnit::Liter(SiPrefix::Kilo);

    fn multiplier(&self) -> Decimal {
        match self {
            VolumeUnit::Liter(p) => p.multiplier() / Decimal::ONE_THOUSAND,
            VolumeUnit::ImperialGallon => Decimal::new(454609, 8),
            VolumeUnit::ImperialPint => Decimal::new(56826125, 11),
            VolumeUnit::UsGallon => Decimal::new(3785411784, 12),
            VolumeUnit::UsPint => Decimal::new(473176473, 12),
        }
    }

    fn usage(&self) -> MeasurementUsage {
        match self {
            VolumeUnit::Liter(_) => MeasurementUsage::METRIC,
            VolumeUnit::ImperialGallon | VolumeUnit::ImperialPint => {
                MeasurementUsage::UK_IMPERIAL
            }
            VolumeUnit::UsGallon | VolumeUnit::UsPint => {
                MeasurementUsage::US_CUSTOMARY
            }
        }
    }
}

impl Display for VolumeUnit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            VolumeUnit::Liter(p) => write!(f, "{}L", p),
            VolumeUnit::ImperialGallon => write!(f, "gal_imp"),
            VolumeUnit::ImperialPint => write!(f, "pt_imp"),
            VolumeUnit::UsGallon => write!(f, "gal_us"),
            VolumeUnit::UsPint => write!(f, "pt_us"),
        }
    }
}
