//! 단위 곱/몫/거듭제곱과 `Value` 분기 테스트.
use dimensional_units::units::{
    area, base::*, electric, force, length, temperature, time, velocity, Prefix,
};
use dimensional_units::{Dimension, DimensionVector, Quantity, Unit, UnitError, Value};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

fn unit_of(value: Result<Value, UnitError>) -> Unit {
    value.expect("unit op").into_unit().expect("unit result")
}

#[test]
fn product_of_units_is_symbol_less_unit() {
    let m2 = unit_of(meter().multiply(meter()));
    let squared = DimensionVector::from_exponents([(Dimension::Length, 2)]).expect("exponents");
    assert_eq!(m2.vector(), &squared);
    assert_eq!(m2.explicit_symbol(), None);
    assert_eq!(m2.symbol(), "m²");
    assert_eq!(m2, area::square_meter());
}

#[test]
fn cancelling_units_collapse_to_scalar() {
    assert_eq!(meter().divide(meter()), Ok(Value::Scalar(1.0)));
    assert_eq!(length::kilometer().divide(meter()), Ok(Value::Scalar(1000.0)));
    let hz_s = electric::hertz().multiply(second()).expect("product");
    assert_eq!(hz_s.as_scalar(), Some(1.0));
}

#[test]
fn newton_from_base_units() {
    let kg_m = unit_of(kilogram().multiply(meter()));
    let s2 = second().power(2.0).expect("s²");
    let n = unit_of(kg_m.divide(s2));
    assert_eq!(n, force::newton());
    assert_eq!(n.symbol(), "N");
    assert_eq!(n.to_string(), "N");
}

#[test]
fn newton_by_successive_division() {
    let n = kilogram()
        .multiply(meter())
        .and_then(|v| v.divide(second()))
        .and_then(|v| v.divide(second()))
        .expect("kg·m/s/s");
    assert_eq!(n.as_unit().map(Unit::symbol), Some("N"));
}

#[test]
fn unit_times_number_is_quantity() {
    let q = meter().multiply(3.0).expect("quantity");
    assert_eq!(q, Value::Quantity(Quantity::new(3.0, &meter())));

    let q = meter().divide(4).expect("quantity");
    assert_eq!(q.as_quantity().map(Quantity::value), Some(0.25));

    let q = meter().multiply(Quantity::new(2.0, &meter())).expect("quantity");
    assert_eq!(q, Value::Quantity(Quantity::new(2.0, &area::square_meter())));
}

#[test]
fn invalid_operands_are_rejected() {
    assert_eq!(meter().divide(0.0), Err(UnitError::DivisionByZero));
    assert!(matches!(
        meter().multiply(f64::NAN),
        Err(UnitError::ArithmeticType(_))
    ));
    assert!(matches!(
        meter().power(f64::INFINITY),
        Err(UnitError::ArithmeticType(_))
    ));
    assert!(matches!(
        Value::Unit(meter()).add(second()),
        Err(UnitError::ArithmeticType(_))
    ));
    assert!(matches!(
        Value::Scalar(1.0).add(meter()),
        Err(UnitError::ArithmeticType(_))
    ));
}

#[test]
fn power_round_trips_through_square_root() {
    let m4 = meter().power(4.0).expect("m⁴");
    assert_eq!(m4.power(0.5).expect("√m⁴"), meter().power(2.0).expect("m²"));

    let m3 = meter().power(3.0).expect("m³");
    assert!(matches!(
        m3.power(0.5),
        Err(UnitError::NonIntegralDimension(_))
    ));
}

#[test]
fn exponent_overflow_is_an_error() {
    assert!(matches!(
        meter().power(1e10),
        Err(UnitError::InvalidDimension(_))
    ));

    let big = meter().power(2e9).expect("m^2e9");
    assert_eq!(big.vector().exponent(Dimension::Length), 2_000_000_000);
    assert!(matches!(
        big.multiply(&big),
        Err(UnitError::InvalidDimension(_))
    ));
    assert!(matches!(
        big.invert().expect("m^-2e9").divide(&big),
        Err(UnitError::InvalidDimension(_))
    ));
}

#[test]
fn unrepresentable_factor_is_an_error() {
    let qm = meter().with_prefix(Prefix::Quecto);
    assert!(matches!(qm.power(11.0), Err(UnitError::ArithmeticType(_))));

    let tiny = qm.power(10.0).expect("qm¹⁰");
    assert!(matches!(
        tiny.multiply(&tiny),
        Err(UnitError::ArithmeticType(_))
    ));
    assert!(matches!(
        length::kilometer().power(400.0),
        Err(UnitError::ArithmeticType(_))
    ));
    let huge = meter().with_prefix(Prefix::Quetta).power(10.0).expect("Qm¹⁰");
    assert!(matches!(huge.invert(), Ok(_)));
    assert!(matches!(
        tiny.divide(&huge),
        Err(UnitError::ArithmeticType(_))
    ));
}

#[test]
fn integer_root() {
    let m6 = meter().power(6.0).expect("m⁶");
    assert_eq!(m6.root(3).expect("∛"), meter().power(2.0).expect("m²"));
    assert!(matches!(meter().root(2), Err(UnitError::NonIntegralDimension(_))));
    assert_eq!(meter().root(0), Err(UnitError::DivisionByZero));

    let side = area::hectare().root(2).expect("√ha");
    assert_close("√ha factor", side.factor(), 100.0, 1e-12);
}

#[test]
fn invert_keeps_offset_and_products_drop_it() {
    let c = temperature::celsius();
    assert!(c.is_affine());
    let inv = c.invert().expect("1/°C");
    assert_eq!(inv.offset(), 273.15);
    assert_eq!(inv.factor(), 1.0);
    assert_eq!(inv.vector(), &kelvin().vector().negate());

    let c2 = unit_of(c.multiply(temperature::celsius()));
    assert_eq!(c2.offset(), 0.0);
    assert!(!c2.is_affine());
}

#[test]
fn dimensionless_over_second_is_hertz() {
    let per_second = unit_of(dimensionless().divide(second()));
    assert_eq!(per_second, electric::hertz());
    assert_eq!(per_second.symbol(), "s⁻¹");
}

#[test]
fn prefixes_scale_and_rename() {
    let km = meter().with_prefix(Prefix::Kilo);
    assert_eq!(km.symbol(), "km");
    assert_eq!(km.factor(), 1000.0);
    assert_eq!(km, length::kilometer());

    let us = second().with_prefix(Prefix::Micro);
    assert_eq!(us.symbol(), "μs");
    assert_close("μs", us.factor(), 1e-6, 1e-15);
    assert_eq!(Prefix::from_exponent(-3), Some(Prefix::Milli));
}

#[test]
fn unit_in_terms_of_another() {
    assert_eq!(
        length::kilometer().terms_of(&meter(), None).expect("km→m"),
        "1000 m"
    );
    assert_eq!(
        length::inch().terms_of(&length::millimeter(), Some(4)).expect("in→mm"),
        "25.4 mm"
    );
    assert!(matches!(
        meter().terms_of(&second(), None),
        Err(UnitError::Incommensurable { .. })
    ));
}

#[test]
fn speed_units_relate_through_division() {
    let kph = unit_of(length::kilometer().divide(time::hour()));
    assert_close("km/h", kph.factor(), 1000.0 / 3600.0, 1e-12);
    assert_eq!(kph.vector(), velocity::meter_per_second().vector());
    assert_eq!(kph.symbol(), "ms⁻¹");
}

#[test]
fn value_dispatch() {
    let q = Value::Scalar(2.0).multiply(meter()).expect("2 m");
    assert_eq!(q, Value::Quantity(Quantity::new(2.0, &meter())));

    let rate = Value::Scalar(6.0)
        .divide(Quantity::new(2.0, &second()))
        .expect("6 / 2 s");
    assert_eq!(rate, Value::Quantity(Quantity::new(3.0, &electric::hertz())));

    assert_eq!(Value::Scalar(1.0).divide(0.0), Err(UnitError::DivisionByZero));
    assert_eq!(Value::Scalar(3.0).power(2.0), Ok(Value::Scalar(9.0)));
}

#[test]
fn value_conversions() {
    assert_eq!(
        Quantity::try_from(Value::Unit(meter())),
        Ok(Quantity::new(1.0, &meter()))
    );
    assert!(Unit::try_from(Value::Scalar(1.0)).is_err());
    assert!(Quantity::try_from(Value::Scalar(1.0)).is_err());
}
