/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::mem::MaybeUninit;

use crate::prefix::{FracPrefix, Prefix, SiPrefix};

use super::{
    CurrentUnit, DimensionlessUnit, LengthUnit, MassUnit, TemperatureUnit,
    TimeUnit, VolumeUnit,
};

/// Number of entries a unit list expands to: one per plain variant,
/// one per scale step for prefixed variants.
macro_rules! count_units {
    () => { 0 };
    ($unit:ident ( $prefix:ident ) $(, $($rest:tt)*)?) => {
        $prefix::SCALE.len() + count_units!($($($rest)*)?)
    };
    ($unit:ident $(, $($rest:tt)*)?) => {
        1 + count_units!($($($rest)*)?)
    };
}

/// Writes the variants into `$r` starting at `$i`, returning the next
/// free index.
macro_rules! fill_units {
    ($r:ident, $i:expr, $ty:ident) => { $i };
    ($r:ident, $i:expr, $ty:ident,
     $unit:ident ( $prefix:ident ) $(, $($rest:tt)*)?) => {{
        let mut n = 0;
        while n < $prefix::SCALE.len() {
            $r[$i + n] = MaybeUninit::new($ty::$unit($prefix::SCALE[n]));
            n += 1;
        }
        fill_units!($r, $i + n, $ty $(, $($rest)*)?)
    }};
    ($r:ident, $i:expr, $ty:ident, $unit:ident $(, $($rest:tt)*)?) => {{
        $r[$i] = MaybeUninit::new($ty::$unit);
        fill_units!($r, $i + 1, $ty $(, $($rest)*)?)
    }};
}

/// Builds a static table of every unit of a kind, prefixed variants
/// expanded over their full prefix scale.
macro_rules! define_units {
    ($name:ident, $ty:ident, $($units:tt)+) => {
        pub(crate) static $name: [$ty; count_units!($($units)+)] = {
            let mut r = [MaybeUninit::uninit(); count_units!($($units)+)];
            let filled = fill_units!(r, 0, $ty, $($units)+);
            assert!(filled == r.len());
            // Safety: every slot was written above.
            unsafe { std::mem::transmute(r) }
        };
    };
}

define_units!(
    LENGTH_UNITS,
    LengthUnit,
    Meter(SiPrefix),
    Inch,
    Foot,
    Yard,
    Mile
);
define_units!(
    MASS_UNITS,
    MassUnit,
    Gram(SiPrefix),
    Tonne,
    Pound,
    Ounce,
    Stone,
    LongTon,
    ShortTon
);
define_units!(
    TIME_UNITS,
    TimeUnit,
    Second(FracPrefix),
    Minute,
    Hour,
    Day,
    Week
);
define_units!(CURRENT_UNITS, CurrentUnit, Ampere(SiPrefix));
define_units!(
    TEMPERATURE_UNITS,
    TemperatureUnit,
    Kelvin,
    Celsius,
    Fahrenheit
);
define_units!(
    VOLUME_UNITS,
    VolumeUnit,
    Liter(SiPrefix),
    ImperialGallon,
    ImperialPint,
    UsGallon,
    UsPint
);
define_units!(
    DIMENSIONLESS_UNITS,
    DimensionlessUnit,
    One,
    Percent,
    Permille
);
