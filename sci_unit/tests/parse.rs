/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use rust_decimal::Decimal;

use sci_unit::{
    AtomicUnit, BaseDimension, Dimension, FracPrefix, LengthUnit, MassUnit,
    ScientificValue, SiPrefix, TemperatureUnit, TimeUnit, Unit, NEUTRAL_UNIT,
};

fn unit(s: &str) -> Unit {
    s.parse().unwrap()
}

fn atomic(s: &str) -> AtomicUnit {
    *unit(s).as_atomic().unwrap()
}

#[test]
fn atomic_units() {
    assert_eq!(
        atomic("m"),
        AtomicUnit::Length(LengthUnit::Meter(SiPrefix::Unit))
    );
    assert_eq!(
        atomic("km"),
        AtomicUnit::Length(LengthUnit::Meter(SiPrefix::Kilo))
    );
    assert_eq!(atomic("mi"), AtomicUnit::Length(LengthUnit::Mile));
    assert_eq!(atomic("min"), AtomicUnit::Time(TimeUnit::Minute));
    assert_eq!(
        atomic("ms"),
        AtomicUnit::Time(TimeUnit::Second(FracPrefix::Milli))
    );
    assert_eq!(
        atomic("kg"),
        AtomicUnit::Mass(MassUnit::Gram(SiPrefix::Kilo))
    );
    assert_eq!(atomic("t"), AtomicUnit::Mass(MassUnit::Tonne));
    assert_eq!(atomic("ton_uk"), AtomicUnit::Mass(MassUnit::LongTon));
    assert_eq!(
        atomic("°C"),
        AtomicUnit::Temperature(TemperatureUnit::Celsius)
    );
}

#[test]
fn micro_sign_variants() {
    let micro = AtomicUnit::Time(TimeUnit::Second(FracPrefix::Micro));
    assert_eq!(atomic("µs"), micro);
    assert_eq!(atomic("μs"), micro);
    assert_eq!(micro.to_string(), "µs");
}

#[test]
fn every_unit_parses_its_own_symbol() {
    for u in AtomicUnit::all().filter(|u| !u.to_string().eq("1")) {
        assert_eq!(atomic(&u.to_string()), u, "{}", u);
    }
}

#[test]
fn operators() {
    assert_eq!(unit("m*s"), unit("m⋅s"));
    assert_eq!(unit("m·s"), unit("m⋅s"));
    assert_eq!(unit("m ⋅ s"), unit("m⋅s"));
    assert_eq!(unit("kg⋅m/s").to_string(), "kg⋅m/s");
    assert_eq!(unit("m/(s⋅s)").to_string(), "m/(s⋅s)");
}

#[test]
fn powers() {
    assert_eq!(unit("m^2"), unit("m⋅m"));
    assert_eq!(unit("m²"), unit("m⋅m"));
    assert_eq!(unit("kg⋅m/s^2").to_string(), "kg⋅m/(s⋅s)");
    assert_eq!(unit("s^-1"), unit("1/s"));
    assert_eq!(unit("s⁻¹"), unit("1/s"));
    assert_eq!(unit("m^0"), NEUTRAL_UNIT);
    assert!(Unit::parse("m^16").is_ok());
    assert!(Unit::parse("m^17").is_err());
}

#[test]
fn neutral_and_reciprocal() {
    assert_eq!(unit(""), NEUTRAL_UNIT);
    assert_eq!(unit("1"), NEUTRAL_UNIT);
    assert_eq!(unit("1/s").to_string(), "1/s");
    assert_eq!(unit("1/(m⋅s)"), unit("m⋅s").reciprocal());
}

#[test]
fn display_parses_back() {
    for s in ["kg⋅m/(s⋅s)", "1/(m⋅s)", "m⋅(s/kg)", "km/h", "1/s/kg"] {
        let u = unit(s);
        assert_eq!(unit(&u.to_string()), u, "{}", s);
    }
}

#[test]
fn invalid_units() {
    for s in ["xyz", "m/", "m⋅", "(m", "m)", "kgg", "5"] {
        assert!(Unit::parse(s).is_err(), "{} should not parse", s);
    }
}

#[test]
fn dimensions() {
    let speed = Dimension::parse("L/T").unwrap();
    assert_eq!(speed.to_string(), "L/T");
    assert_eq!(unit("km/h").dimension(), speed);
    assert_eq!(
        Dimension::parse("M⋅L/T²").unwrap().to_string(),
        "M⋅L/(T⋅T)"
    );
    assert_eq!(
        unit("%").dimension(),
        Dimension::atomic(BaseDimension::Dimensionless)
    );
}

#[test]
fn signatures() {
    assert_eq!(unit("L").signature(), unit("m^3").signature());
    assert_eq!(unit("L").signature().to_string(), "L³");
    assert_eq!(unit("m/(s⋅s)").signature().to_string(), "L/T²");
    let accel = unit("m/(s⋅s)").signature();
    assert_eq!(accel.as_map().get(&BaseDimension::Time), Some(&-2));
    assert_eq!(accel.as_map().get(&BaseDimension::Length), Some(&1));
    assert_eq!(accel.as_map().len(), 2);
    assert!(unit("m/m").signature().is_empty());
    assert_eq!(unit("m/m").signature().to_string(), "1");
}

#[test]
fn values() {
    let v: ScientificValue = "-3 °C".parse().unwrap();
    assert_eq!(v.magnitude(), Decimal::from(-3));
    assert_eq!(v.to_string(), "-3 °C");

    let v: ScientificValue = "10m/s".parse().unwrap();
    assert_eq!(v.unit(), &unit("m/s"));

    let v: ScientificValue = "  7  ".parse().unwrap();
    assert!(v.unit().is_neutral());

    assert!("m/s".parse::<ScientificValue>().is_err());
    assert!("10 xyz".parse::<ScientificValue>().is_err());
}
