/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use rust_decimal::Decimal;

use crate::MeasurementUsage;

pub trait BaseUnit: Sized + Copy + 'static {
    const LIST: &[Self];
    const REFERENCE: Self;

    /// Factor from this unit to the reference unit. Together with
    /// [`BaseUnit::divisor`] it forms an exact fraction.
    fn multiplier(&self) -> Decimal;

    /// Denominator of the factor to the reference unit, for units
    /// whose factor has no finite decimal expansion.
    fn divisor(&self) -> Decimal {
        Decimal::ONE
    }

    fn usage(&self) -> MeasurementUsage;

    /// Offset added before scaling (absolute temperatures).
    fn offset(&self) -> Decimal {
        Decimal::ZERO
    }

    fn normalize(&self) -> Self {
        Self::REFERENCE
    }
}
