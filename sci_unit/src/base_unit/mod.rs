/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

pub mod base_unit_trait;
pub mod base_units;

pub mod current_unit;
pub mod dimensionless_unit;
pub mod length_unit;
pub mod mass_unit;
pub mod temperature_unit;
pub mod time_unit;
pub mod volume_unit;

pub use base_unit_trait::BaseUnit;
pub use current_unit::CurrentUnit;
pub use dimensionless_unit::DimensionlessUnit;
pub use length_unit::LengthUnit;
pub use mass_unit::MassUnit;
pub use temperature_unit::TemperatureUnit;
pub use time_unit::TimeUnit;
pub use volume_unit::VolumeUnit;
