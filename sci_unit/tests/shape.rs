/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use sci_unit::{
    AtomicUnit, FracPrefix, LengthUnit, SiPrefix, TimeUnit, Unit,
};

fn unit(s: &str) -> Unit {
    s.parse().unwrap()
}

#[test]
fn atomic_accessors() {
    let m = unit("m");
    assert_eq!(
        m.as_atomic(),
        Some(&AtomicUnit::Length(LengthUnit::Meter(SiPrefix::Unit)))
    );
    assert_eq!(m.left(), None);
    assert_eq!(m.right(), None);
    assert_eq!(m.numerator(), None);
    assert_eq!(m.denominator(), None);
    assert_eq!(m.inverse(), None);
}

#[test]
fn product_accessors() {
    let u = unit("m⋅s");
    assert_eq!(u.left(), Some(&unit("m")));
    assert_eq!(u.right(), Some(&unit("s")));
    assert_eq!(u.as_atomic(), None);
    assert_eq!(u.numerator(), None);
    assert_eq!(u.denominator(), None);
    assert_eq!(u.inverse(), None);
}

#[test]
fn quotient_accessors() {
    let u = unit("m/s");
    assert_eq!(u.numerator(), Some(&unit("m")));
    assert_eq!(u.denominator(), Some(&unit("s")));
    assert_eq!(u.as_atomic(), None);
    assert_eq!(u.left(), None);
    assert_eq!(u.right(), None);
    assert_eq!(u.inverse(), None);

    let u = unit("kg⋅m/(s⋅s)");
    assert_eq!(u.numerator(), Some(&unit("kg⋅m")));
    assert_eq!(u.denominator(), Some(&unit("s⋅s")));
    assert_eq!(u.numerator().and_then(Unit::left), Some(&unit("kg")));
}

#[test]
fn reciprocal_accessors() {
    let u = unit("1/s");
    assert_eq!(u.inverse(), Some(&unit("s")));
    assert_eq!(u.as_atomic(), None);
    assert_eq!(u.left(), None);
    assert_eq!(u.right(), None);
    assert_eq!(u.numerator(), None);
    assert_eq!(u.denominator(), None);

    let u = unit("1/(m⋅s)");
    assert_eq!(u.inverse(), Some(&unit("m⋅s")));
    assert_eq!(u.inverse().and_then(Unit::right), Some(&unit("s")));
}

#[test]
fn size_and_factors() {
    assert_eq!(unit("m").size(), 1);
    assert_eq!(unit("1/s").size(), 2);
    assert_eq!(unit("kg⋅m/(s⋅s)").size(), 7);

    let s = AtomicUnit::Time(TimeUnit::Second(FracPrefix::Unit));
    let m = AtomicUnit::Length(LengthUnit::Meter(SiPrefix::Unit));
    assert_eq!(
        unit("m/(s⋅s)").factors(),
        vec![(&m, false), (&s, true), (&s, true)]
    );
    assert_eq!(unit("1/s").factors(), vec![(&s, true)]);
}
