/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use rust_decimal::Decimal;

pub trait Prefix: Sized + 'static {
    const BASE: u64;
    const SCALE: &'static [Self];
    /// The empty prefix.
    const UNIT: Self;

    fn power(&self) -> i64;
    fn prefix(&self) -> &'static str;

    /// The exact factor `BASE ^ power`.
    fn multiplier(&self) -> Decimal {
        let base = Decimal::from(Self::BASE);
        let power = self.power();
        (0..power.unsigned_abs()).fold(Decimal::ONE, |m, _| match power < 0 {
            true => m / base,
            false => m * base,
        })
    }
}
