/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! Scientific unit algebra.
//!
//! Values carry a magnitude and a (possibly composite) unit.
//! Multiplying or dividing two values derives the result unit by
//! cancelling the factors the operands share:
//!
//! ```
//! use sci_unit::ScientificValue;
//!
//! let speed: ScientificValue = "10 m/s".parse().unwrap();
//! let pace: ScientificValue = "5 s/kg".parse().unwrap();
//! assert_eq!(speed.times(&pace).to_string(), "50 m/kg");
//! ```

pub mod algebra;
pub mod base_unit;
pub mod composite;
pub mod dimension;
pub mod error;
pub mod magnitude;
pub mod parser;
pub mod prefix;
pub mod shape;
pub mod system;
pub mod typed;
pub mod unit;
pub mod usage;
pub mod value;
pub mod value_seed;

pub use crate::unit::{AtomicUnit, Unit, NEUTRAL_UNIT};
pub use algebra::Operation;
pub use base_unit::{
    BaseUnit, CurrentUnit, DimensionlessUnit, LengthUnit, MassUnit,
    TemperatureUnit, TimeUnit, VolumeUnit,
};
pub use composite::Composite;
pub use dimension::{BaseDimension, Dimension};
pub use error::UnitError;
pub use magnitude::Magnitude;
pub use shape::{Atom, Composer, DefaultComposer, FnComposer, Shape};
pub use usage::{MeasurementSystem, MeasurementUsage};
pub use value::{by_dividing, by_multiplying, ScientificValue};
pub use value_seed::ValueSeed;

pub use prefix::{FracPrefix, Prefix, SiPrefix};
