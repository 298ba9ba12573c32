/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use sci_unit::system::{
    Imperial, Measured, Metric, MetricAndImperial, UkImperial, UsCustomary,
};
use sci_unit::typed::{
    DividedUnit, Hour, ImperialGallon, Kelvin, Kilometer, Liter, Meter,
    Mile, MultipliedUnit, Pound, ReciprocalUnit, Second, Stone, TypedUnit,
    UsGallon,
};
use sci_unit::{
    MeasurementSystem, MeasurementUsage, ScientificValue, Unit, UnitError,
};

fn unit(s: &str) -> Unit {
    s.parse().unwrap()
}

#[test]
fn typed_units_map_to_runtime_units() {
    assert_eq!(Meter::unit(), unit("m"));
    assert_eq!(DividedUnit::<Kilometer, Hour>::unit(), unit("km/h"));
    assert_eq!(MultipliedUnit::<Meter, Second>::unit(), unit("m⋅s"));
    assert_eq!(ReciprocalUnit::<Second>::unit(), unit("1/s"));
    assert_eq!(
        ReciprocalUnit::<DividedUnit<Meter, Second>>::unit(),
        unit("s/m")
    );
}

#[test]
fn measured_arithmetic_stays_in_system() {
    let distance = Measured::<Metric, f64>::new::<Kilometer>(120.0);
    let time = Measured::<Metric, f64>::new::<Hour>(1.5);
    let speed = distance.div(&time);
    assert_eq!(speed.to_string(), "80 km/h");
    assert_eq!(speed.system(), MeasurementSystem::Metric);
    assert_eq!(speed.times(&time).to_string(), "120 km");
}

#[test]
fn imperial_systems() {
    let speed = Measured::<Imperial, f64>::new::<DividedUnit<Mile, Hour>>(60.0);
    assert_eq!(speed.to_string(), "60 mi/h");

    let uk = Measured::<UkImperial, f64>::new::<
        DividedUnit<Stone, ImperialGallon>,
    >(2.0);
    assert_eq!(uk.value().unit(), &unit("st/gal_imp"));

    let us = Measured::<UsCustomary, f64>::new::<
        DividedUnit<Pound, UsGallon>,
    >(8.0);
    assert_eq!(us.into_value().unit(), &unit("lb/gal_us"));

    let both = Measured::<MetricAndImperial, f64>::new::<
        MultipliedUnit<Kelvin, Second>,
    >(1.0);
    assert_eq!(both.to_string(), "1 K⋅s");
}

#[test]
fn runtime_values_are_checked() {
    let litres: ScientificValue = "2 L".parse().unwrap();
    assert!(Measured::<Metric>::try_from_value(litres.clone()).is_ok());
    assert_eq!(
        Measured::<Imperial>::try_from_value(litres),
        Err(UnitError::Usage(
            Liter::unit(),
            MeasurementSystem::Imperial
        ))
    );
}

#[test]
fn unit_usage() {
    assert_eq!(unit("m/s").usage(), MeasurementUsage::METRIC);
    assert_eq!(unit("lb/ft").usage(), MeasurementUsage::IMPERIAL);
    assert_eq!(unit("s/h").usage(), MeasurementUsage::UNIVERSAL);
    assert!(unit("st/gal_us").usage().is_empty());

    let lb_ft = unit("lb/ft");
    assert!(lb_ft.supports(MeasurementSystem::Imperial));
    assert!(lb_ft.supports(MeasurementSystem::UkImperial));
    assert!(lb_ft.supports(MeasurementSystem::UsCustomary));
    assert!(!lb_ft.supports(MeasurementSystem::Metric));
    assert!(!lb_ft.supports(MeasurementSystem::MetricAndUkImperial));
}

#[test]
fn combined_systems_require_every_part() {
    assert!(unit("s").supports(MeasurementSystem::MetricAndImperial));
    assert!(!unit("m").supports(MeasurementSystem::MetricAndImperial));
    assert!(unit("K/s").supports(MeasurementSystem::MetricAndUsCustomary));
    assert!(!unit("°F").supports(MeasurementSystem::MetricAndUsCustomary));
}

#[test]
fn usage_intersection() {
    let metric = MeasurementUsage::METRIC;
    let imperial = MeasurementUsage::IMPERIAL;
    assert!((metric & imperial).is_empty());
    assert_eq!(imperial & MeasurementUsage::UNIVERSAL, imperial);
    assert!(imperial.contains(&MeasurementUsage::UK_IMPERIAL));
    assert!(!MeasurementUsage::UK_IMPERIAL.contains(&imperial));
}

#[test]
fn system_names() {
    for system in MeasurementSystem::LIST {
        assert_eq!(system.to_string().parse(), Ok(*system));
    }
    assert_eq!(
        "metric_and_uk_imperial".parse(),
        Ok(MeasurementSystem::MetricAndUkImperial)
    );
    assert!("martian".parse::<MeasurementSystem>().is_err());
}
