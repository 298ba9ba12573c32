/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! Compile-time measurement-system gate.
//!
//! A [`Measured<S>`] value can only be built from a typed unit that
//! is [`SupportedBy<S>`], so mixing units of incompatible systems is
//! rejected by the compiler:
//!
//! ```
//! use sci_unit::system::{Measured, Metric};
//! use sci_unit::typed::{DividedUnit, Kilogram, Meter, Second};
//!
//! type Speed = DividedUnit<Meter, Second>;
//! type Pace = DividedUnit<Second, Kilogram>;
//!
//! let speed = Measured::<Metric, f64>::new::<Speed>(10.0);
//! let per_mass = Measured::<Metric, f64>::new::<Pace>(5.0);
//! assert_eq!(speed.times(&per_mass).to_string(), "50 m/kg");
//! ```
//!
//! A UK-only unit combined with a US-only unit is not metric:
//!
//! ```compile_fail
//! use sci_unit::system::{Measured, Metric};
//! use sci_unit::typed::{MultipliedUnit, Stone, UsGallon};
//!
//! type Mixed = MultipliedUnit<Stone, UsGallon>;
//!
//! let _ = Measured::<Metric, f64>::new::<Mixed>(1.0);
//! ```

use std::fmt::{self, Display, Formatter};
use std::marker::PhantomData;

use rust_decimal::Decimal;

use crate::shape::DefaultComposer;
use crate::typed::{DividedUnit, MultipliedUnit, ReciprocalUnit, TypedUnit};
use crate::{Magnitude, MeasurementSystem, ScientificValue, UnitError};

pub trait UsedInMetric: TypedUnit {}
pub trait UsedInUkImperial: TypedUnit {}
pub trait UsedInUsCustomary: TypedUnit {}

macro_rules! inherit_usage {
    ($($marker:ident),+) => {
        $(
            impl<A: $marker, B: $marker> $marker for MultipliedUnit<A, B> {}
            impl<N: $marker, D: $marker> $marker for DividedUnit<N, D> {}
            impl<U: $marker> $marker for ReciprocalUnit<U> {}
        )+
    };
}

inherit_usage!(UsedInMetric, UsedInUkImperial, UsedInUsCustomary);

/// Type-level counterpart of a [`MeasurementSystem`].
pub trait System {
    const SYSTEM: MeasurementSystem;
}

/// Implemented by typed units that may be used in the system `S`.
pub trait SupportedBy<S: System>: TypedUnit {}

macro_rules! systems {
    ($($name:ident: $($marker:ident)&+;)+) => {
        $(
            #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
            pub enum $name {}

            impl System for $name {
                const SYSTEM: MeasurementSystem = MeasurementSystem::$name;
            }

            impl<U: $($marker+)+> SupportedBy<$name> for U {}
        )+
    };
}

systems! {
    Metric: UsedInMetric;
    Imperial: UsedInUkImperial & UsedInUsCustomary;
    UkImperial: UsedInUkImperial;
    UsCustomary: UsedInUsCustomary;
    MetricAndImperial: UsedInMetric & UsedInUkImperial & UsedInUsCustomary;
    MetricAndUkImperial: UsedInMetric & UsedInUkImperial;
    MetricAndUsCustomary: UsedInMetric & UsedInUsCustomary;
}

/// A value restricted to the measurement system `S`. Multiplying or
/// dividing two such values stays within `S`.
#[derive(PartialEq, Clone, Debug)]
pub struct Measured<S: System, M = Decimal> {
    value: ScientificValue<M>,
    system: PhantomData<S>,
}

impl<S: System, M: Magnitude> Measured<S, M> {
    pub fn new<U: SupportedBy<S>>(magnitude: M) -> Self {
        Self::wrap(ScientificValue::of::<U>(magnitude))
    }

    /// Admits a runtime value after checking its unit.
    pub fn try_from_value(
        value: ScientificValue<M>,
    ) -> Result<Self, UnitError> {
        value.unit().check_usage(S::SYSTEM)?;
        Ok(Self::wrap(value))
    }

    fn wrap(value: ScientificValue<M>) -> Self {
        Self {
            value,
            system: PhantomData,
        }
    }

    pub fn system(&self) -> MeasurementSystem {
        S::SYSTEM
    }

    pub fn value(&self) -> &ScientificValue<M> {
        &self.value
    }

    pub fn into_value(self) -> ScientificValue<M> {
        self.value
    }

    /// Cancelling factors only ever drops atoms, so the result is
    /// used in at least the systems both operands are used in.
    pub fn times(&self, rhs: &Self) -> Self {
        self.value
            .times_with(&rhs.value, &DefaultComposer, |m, unit| {
                Self::wrap(ScientificValue::new(m, unit))
            })
    }

    pub fn div(&self, rhs: &Self) -> Self {
        self.value
            .div_with(&rhs.value, &DefaultComposer, |m, unit| {
                Self::wrap(ScientificValue::new(m, unit))
            })
    }
}

impl<S: System, M: Magnitude> Display for Measured<S, M> {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.value)
    }
}
