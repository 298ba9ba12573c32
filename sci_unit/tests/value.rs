/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use rust_decimal::Decimal;
use serde::de::DeserializeSeed;
use serde_json::json;

use sci_unit::{
    Dimension, MeasurementSystem, ScientificValue, Unit, UnitError,
    ValueSeed,
};

fn value(s: &str) -> ScientificValue {
    s.parse().unwrap()
}

fn unit(s: &str) -> Unit {
    s.parse().unwrap()
}

#[test]
fn multiply_and_divide() {
    let speed = value("10 m/s");
    let pace = value("5 s/kg");
    assert_eq!(speed.times(&pace).to_string(), "50 m/kg");
    assert_eq!((&speed * &value("2 s")).to_string(), "20 m");
    assert_eq!((speed / value("2 m")).to_string(), "5 1/s");
}

#[test]
fn operands_are_not_modified() {
    let a = value("3 m");
    let b = value("2 s");
    let _ = a.times(&b);
    let _ = a.div(&b);
    assert_eq!(a, value("3 m"));
    assert_eq!(b, value("2 s"));
}

#[test]
fn exact_factors() {
    assert_eq!(
        unit("km/h").factor(),
        Ok((Decimal::from(1000), Decimal::from(3600)))
    );
    assert_eq!(
        unit("°F/s").factor(),
        Ok((Decimal::ONE, Decimal::new(18, 1)))
    );
    assert_eq!(
        unit("1/°F").factor(),
        Ok((Decimal::new(18, 1), Decimal::ONE))
    );
    assert_eq!(unit("km").multiplier(), Ok(Decimal::from(1000)));
}

#[test]
fn into_parts() {
    let (magnitude, u) = value("2.5 kg/L").into_parts();
    assert_eq!(magnitude, Decimal::new(25, 1));
    assert_eq!(u, unit("kg/L"));
}

#[test]
fn error_messages() {
    assert_eq!(UnitError::DivisionByZero.to_string(), "Division by zero");
    assert_eq!(
        UnitError::Usage(unit("lb"), MeasurementSystem::Metric).to_string(),
        "Unit lb cannot be used in the metric measurement system"
    );
    assert_eq!(
        UnitError::Conversion(unit("m"), unit("s")).to_string(),
        "Incompatible units: m <-> s"
    );
    assert!(UnitError::Overflow(String::from("x"))
        .to_string()
        .starts_with("Arithmetic overflow"));
}

#[test]
fn neutral_values_display_bare() {
    assert_eq!(value("42").to_string(), "42");
    assert_eq!(value("6 m").div(&value("3 m")).to_string(), "2");
    assert!(ScientificValue::from_magnitude(Decimal::ONE).unit().is_neutral());
}

#[test]
fn scientific_notation() {
    assert_eq!(value("2.5e3 kg").magnitude(), Decimal::from(2500));
    let v: ScientificValue<f64> = "1.5E-3 s".parse().unwrap();
    assert_eq!(v.magnitude(), 0.0015);
}

#[test]
fn checked_operations() {
    assert_eq!(
        value("1 m").checked_div(&value("0 s")),
        Err(UnitError::DivisionByZero)
    );
    let big = ScientificValue::new(Decimal::MAX, unit("m"));
    assert!(matches!(
        big.checked_times(&value("2 m")),
        Err(UnitError::Overflow(_))
    ));
    assert_eq!(
        value("6 m").checked_div(&value("3 s")),
        Ok(value("2 m/s"))
    );
}

#[test]
fn float_division_by_zero() {
    let a: ScientificValue<f64> = "1 m".parse().unwrap();
    let b: ScientificValue<f64> = "0 s".parse().unwrap();
    assert!(a.div(&b).magnitude().is_infinite());
    assert_eq!(a.checked_div(&b), Err(UnitError::DivisionByZero));
}

#[test]
fn reciprocal() {
    let r = value("4 s").reciprocal();
    assert_eq!(r.magnitude(), Decimal::new(25, 2));
    assert_eq!(r.unit(), &unit("1/s"));
    assert_eq!(r.reciprocal().unit(), &unit("s"));
}

#[test]
fn restricted_to_system() {
    let m = value("3 m");
    let s = value("2 s");
    assert_eq!(
        m.times_in(MeasurementSystem::Metric, &s),
        Ok(value("6 m⋅s"))
    );
    assert_eq!(
        m.times_in(MeasurementSystem::Imperial, &s),
        Err(UnitError::Usage(unit("m"), MeasurementSystem::Imperial))
    );
    assert!(value("1 st")
        .div_in(MeasurementSystem::UkImperial, &value("2 gal_imp"))
        .is_ok());
    assert!(value("1 st")
        .div_in(MeasurementSystem::UkImperial, &value("2 gal_us"))
        .is_err());
}

#[test]
fn convert_scaled_units() {
    let v = value("1.5 km").convert(&unit("m")).unwrap();
    assert_eq!(v.magnitude(), Decimal::from(1500));
    assert_eq!(v.unit(), &unit("m"));

    let v = value("36 km/h").convert(&unit("m/s")).unwrap();
    assert_eq!(v.magnitude(), Decimal::from(10));

    let v = value("10 m/s").convert(&unit("km/h")).unwrap();
    assert_eq!(v.magnitude(), Decimal::from(36));

    let v = value("90 km/h").convert(&unit("mi/h")).unwrap();
    assert_eq!(v.unit(), &unit("mi/h"));
    assert!(v.magnitude() > Decimal::new(5592, 2));
    assert!(v.magnitude() < Decimal::new(5593, 2));

    let v = value("1 L").convert(&unit("m^3")).unwrap();
    assert_eq!(v.magnitude(), Decimal::new(1, 3));
}

#[test]
fn convert_temperatures() {
    let k = value("0 °C").convert(&unit("K")).unwrap();
    assert_eq!(k.magnitude(), Decimal::new(27315, 2));

    let c = value("212 °F").convert(&unit("°C")).unwrap();
    assert_eq!(c.magnitude(), Decimal::from(100));

    let c = value("32 °F").convert(&unit("°C")).unwrap();
    assert_eq!(c.magnitude(), Decimal::ZERO);

    let f = value("-40 °C").convert(&unit("°F")).unwrap();
    assert_eq!(f.magnitude(), Decimal::from(-40));
}

#[test]
fn convert_incompatible() {
    assert_eq!(
        value("1 m").convert(&unit("s")),
        Err(UnitError::Conversion(unit("m"), unit("s")))
    );
    assert!(value("1 L").convert(&unit("m^2")).is_err());
}

#[test]
fn normalize() {
    let v = value("3 km/min").normalize().unwrap();
    assert_eq!(v.unit(), &unit("m/s"));
    assert_eq!(v.magnitude(), Decimal::from(50));

    let v = value("1 t").normalize().unwrap();
    assert_eq!(v.unit(), &unit("kg"));
    assert_eq!(v.magnitude(), Decimal::from(1000));
}

#[test]
fn value_from_reference_units() {
    let v = unit("km").value_from_json::<f64>(json!(1500.0)).unwrap();
    assert_eq!(v.magnitude(), 1.5);
    assert_eq!(v.unit(), &unit("km"));
    assert!(matches!(
        unit("km").value_from_json::<f64>(json!("abc")),
        Err(UnitError::Json(_))
    ));
}

#[test]
fn serde_round_trip() {
    let v = value("10 km/h");
    let json = serde_json::to_value(&v).unwrap();
    let back: ScientificValue = serde_json::from_value(json).unwrap();
    assert_eq!(back, v);
}

#[test]
fn seed_checks_dimension() {
    let speed = Dimension::parse("L/T").unwrap();

    let v = ValueSeed::<Decimal>::new(speed.clone())
        .deserialize(json!("36 km/h"))
        .unwrap();
    assert_eq!(v, value("36 km/h"));

    assert!(ValueSeed::<Decimal>::new(speed.clone())
        .deserialize(json!("36 kg"))
        .is_err());

    let object = json!({
        "magnitude": 10.0,
        "unit": serde_json::to_value(unit("m/s")).unwrap(),
        "comment": "ignored",
    });
    let v = ValueSeed::<f64>::new(speed.clone())
        .deserialize(object)
        .unwrap();
    assert_eq!(v.magnitude(), 10.0);
    assert_eq!(v.unit(), &unit("m/s"));

    assert!(ValueSeed::<f64>::new(speed)
        .deserialize(json!({ "magnitude": 10.0 }))
        .is_err());
}

#[test]
fn dimension_check() {
    let volume = Dimension::parse("V").unwrap();
    assert_eq!(volume.check(&unit("gal_us")), Ok(()));
    assert_eq!(volume.check(&unit("m⋅m⋅m")), Ok(()));
    assert_eq!(
        volume.check(&unit("m")),
        Err(UnitError::TypeError(volume.clone(), unit("m")))
    );
}
