/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! Zero-sized units, known at compile time.
//!
//! Each type maps to a runtime [`Unit`] and carries the
//! [measurement-system markers](crate::system) of the systems it is
//! used in. Composites inherit a marker only when all of their parts
//! carry it.

use std::marker::PhantomData;

use crate::base_unit::{
    CurrentUnit, LengthUnit, MassUnit, TemperatureUnit, TimeUnit, VolumeUnit,
};
use crate::prefix::{FracPrefix, SiPrefix};
use crate::{AtomicUnit, Unit};

pub trait TypedUnit {
    fn unit() -> Unit;
}

macro_rules! typed_units {
    ($(
        $(#[$meta:meta])*
        $name:ident = $unit:expr => [$($marker:ident),*];
    )+) => {
        $(
            $(#[$meta])*
            #[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
            pub struct $name;

            impl TypedUnit for $name {
                fn unit() -> Unit {
                    Unit::Atomic($unit)
                }
            }

            $(impl crate::system::$marker for $name {})*
        )+
    };
}

typed_units! {
    Meter = AtomicUnit::Length(LengthUnit::Meter(SiPrefix::Unit))
        => [UsedInMetric];
    Kilometer = AtomicUnit::Length(LengthUnit::Meter(SiPrefix::Kilo))
        => [UsedInMetric];
    Centimeter = AtomicUnit::Length(LengthUnit::Meter(SiPrefix::Centi))
        => [UsedInMetric];
    Millimeter = AtomicUnit::Length(LengthUnit::Meter(SiPrefix::Milli))
        => [UsedInMetric];
    Inch = AtomicUnit::Length(LengthUnit::Inch)
        => [UsedInUkImperial, UsedInUsCustomary];
    Foot = AtomicUnit::Length(LengthUnit::Foot)
        => [UsedInUkImperial, UsedInUsCustomary];
    Yard = AtomicUnit::Length(LengthUnit::Yard)
        => [UsedInUkImperial, UsedInUsCustomary];
    Mile = AtomicUnit::Length(LengthUnit::Mile)
        => [UsedInUkImperial, UsedInUsCustomary];

    Gram = AtomicUnit::Mass(MassUnit::Gram(SiPrefix::Unit))
        => [UsedInMetric];
    Kilogram = AtomicUnit::Mass(MassUnit::Gram(SiPrefix::Kilo))
        => [UsedInMetric];
    Tonne = AtomicUnit::Mass(MassUnit::Tonne) => [UsedInMetric];
    Pound = AtomicUnit::Mass(MassUnit::Pound)
        => [UsedInUkImperial, UsedInUsCustomary];
    Ounce = AtomicUnit::Mass(MassUnit::Ounce)
        => [UsedInUkImperial, UsedInUsCustomary];
    Stone = AtomicUnit::Mass(MassUnit::Stone) => [UsedInUkImperial];
    LongTon = AtomicUnit::Mass(MassUnit::LongTon) => [UsedInUkImperial];
    ShortTon = AtomicUnit::Mass(MassUnit::ShortTon) => [UsedInUsCustomary];

    Second = AtomicUnit::Time(TimeUnit::Second(FracPrefix::Unit))
        => [UsedInMetric, UsedInUkImperial, UsedInUsCustomary];
    Minute = AtomicUnit::Time(TimeUnit::Minute)
        => [UsedInMetric, UsedInUkImperial, UsedInUsCustomary];
    Hour = AtomicUnit::Time(TimeUnit::Hour)
        => [UsedInMetric, UsedInUkImperial, UsedInUsCustomary];

    Liter = AtomicUnit::Volume(VolumeUnit::Liter(SiPrefix::Unit))
        => [UsedInMetric];
    ImperialGallon = AtomicUnit::Volume(VolumeUnit::ImperialGallon)
        => [UsedInUkImperial];
    UsGallon = AtomicUnit::Volume(VolumeUnit::UsGallon)
        => [UsedInUsCustomary];

    Kelvin = AtomicUnit::Temperature(TemperatureUnit::Kelvin)
        => [UsedInMetric, UsedInUkImperial, UsedInUsCustomary];
    Celsius = AtomicUnit::Temperature(TemperatureUnit::Celsius)
        => [UsedInMetric];
    Fahrenheit = AtomicUnit::Temperature(TemperatureUnit::Fahrenheit)
        => [UsedInUkImperial, UsedInUsCustomary];

    Ampere = AtomicUnit::Current(CurrentUnit::Ampere(SiPrefix::Unit))
        => [UsedInMetric, UsedInUkImperial, UsedInUsCustomary];
}

/// `A × B`.
pub struct MultipliedUnit<A, B>(PhantomData<(A, B)>);

/// `N / D`.
pub struct DividedUnit<N, D>(PhantomData<(N, D)>);

/// `1 / U`.
pub struct ReciprocalUnit<U>(PhantomData<U>);

impl<A: TypedUnit, B: TypedUnit> TypedUnit for MultipliedUnit<A, B> {
    fn unit() -> Unit {
        A::unit().x(B::unit())
    }
}

impl<N: TypedUnit, D: TypedUnit> TypedUnit for DividedUnit<N, D> {
    fn unit() -> Unit {
        N::unit().per(D::unit())
    }
}

impl<U: TypedUnit> TypedUnit for ReciprocalUnit<U> {
    fn unit() -> Unit {
        U::unit().reciprocal()
    }
}
