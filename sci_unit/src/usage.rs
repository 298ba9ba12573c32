/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display, Formatter};
use std::ops::BitAnd;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::UnitError;

/// The measurement systems a unit may be used in.
#[derive(Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy, Debug)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct MeasurementUsage {
    pub metric: bool,
    pub uk_imperial: bool,
    pub us_customary: bool,
}

impl MeasurementUsage {
    pub const METRIC: Self = Self::new(true, false, false);
    pub const UK_IMPERIAL: Self = Self::new(false, true, false);
    pub const US_CUSTOMARY: Self = Self::new(false, false, true);
    pub const IMPERIAL: Self = Self::new(false, true, true);
    pub const UNIVERSAL: Self = Self::new(true, true, true);

    pub const fn new(
        metric: bool,
        uk_imperial: bool,
        us_customary: bool,
    ) -> Self {
        Self {
            metric,
            uk_imperial,
            us_customary,
        }
    }

    /// True if every system in `other` is also in `self`.
    pub const fn contains(&self, other: &Self) -> bool {
        (self.metric || !other.metric)
            && (self.uk_imperial || !other.uk_imperial)
            && (self.us_customary || !other.us_customary)
    }

    pub const fn supports(&self, system: MeasurementSystem) -> bool {
        self.contains(&system.requirement())
    }

    pub const fn is_empty(&self) -> bool {
        !(self.metric || self.uk_imperial || self.us_customary)
    }
}

/// A composed unit can only be used where all of its parts can.
impl BitAnd for MeasurementUsage {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        Self::new(
            self.metric && rhs.metric,
            self.uk_imperial && rhs.uk_imperial,
            self.us_customary && rhs.us_customary,
        )
    }
}

impl Display for MeasurementUsage {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        let systems = [
            (self.metric, "metric"),
            (self.uk_imperial, "UK imperial"),
            (self.us_customary, "US customary"),
        ]
        .into_iter()
        .filter_map(|(used, name)| used.then_some(name))
        .collect::<Vec<_>>();
        match systems.is_empty() {
            true => write!(f, "none"),
            false => write!(f, "{}", systems.join(", ")),
        }
    }
}

/// The seven measurement-system variants an operation can be
/// restricted to.
#[derive(
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Clone,
    Copy,
    Debug,
)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum MeasurementSystem {
    Metric,
    Imperial,
    UkImperial,
    UsCustomary,
    MetricAndImperial,
    MetricAndUkImperial,
    MetricAndUsCustomary,
}

impl MeasurementSystem {
    pub const LIST: &'static [Self] = &[
        Self::Metric,
        Self::Imperial,
        Self::UkImperial,
        Self::UsCustomary,
        Self::MetricAndImperial,
        Self::MetricAndUkImperial,
        Self::MetricAndUsCustomary,
    ];

    /// The usage a unit needs to take part in an operation
    /// restricted to this system.
    pub const fn requirement(&self) -> MeasurementUsage {
        match self {
            Self::Metric => MeasurementUsage::METRIC,
            Self::Imperial => MeasurementUsage::IMPERIAL,
            Self::UkImperial => MeasurementUsage::UK_IMPERIAL,
            Self::UsCustomary => MeasurementUsage::US_CUSTOMARY,
            Self::MetricAndImperial => MeasurementUsage::UNIVERSAL,
            Self::MetricAndUkImperial => {
                MeasurementUsage::new(true, true, false)
            }
            Self::MetricAndUsCustomary => {
                MeasurementUsage::new(true, false, true)
            }
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Metric => "metric",
            Self::Imperial => "imperial",
            Self::UkImperial => "uk_imperial",
            Self::UsCustomary => "us_customary",
            Self::MetricAndImperial => "metric_and_imperial",
            Self::MetricAndUkImperial => "metric_and_uk_imperial",
            Self::MetricAndUsCustomary => "metric_and_us_customary",
        }
    }
}

impl Display for MeasurementSystem {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.name())
    }
}

impl FromStr for MeasurementSystem {
    type Err = UnitError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::LIST
            .iter()
            .find(|system| system.name() == s)
            .copied()
            .ok_or_else(|| {
                UnitError::ParseError(format!(
                    "unknown measurement system: {}",
                    s
                ))
            })
    }
}
