//! 단위 라이브러리 환산 회귀 테스트.
use dimensional_units::units::{
    area, base, conductivity, energy, force, heat_transfer, information, length, mass, power,
    pressure, specific_enthalpy, temperature, time, velocity, viscosity, volume, Prefix,
};
use dimensional_units::{Quantity, Unit, Value};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

fn convert(value: f64, from: &Unit, to: &Unit) -> f64 {
    Quantity::new(value, from)
        .convert_to(to, None)
        .unwrap_or_else(|e| panic!("{from} → {to}: {e}"))
}

#[test]
fn pressure_units() {
    assert_close("atm→bar", convert(1.0, &pressure::atmosphere(), &pressure::bar()), 1.01325, 1e-12);
    assert_close("mmHg→atm", convert(760.0, &pressure::mmhg(), &pressure::atmosphere()), 1.0, 1e-12);
    assert_close("psi→kPa", convert(1.0, &pressure::psi(), &pressure::kilopascal()), 6.894757, 1e-9);
    assert_close("kgf/cm²→bar", convert(1.0, &pressure::kgf_per_cm2(), &pressure::bar()), 0.980665, 1e-12);
    assert_close("mbar→Pa", convert(1.0, &pressure::millibar(), &pressure::pascal()), 100.0, 1e-12);
    assert_close("MPa→bar", convert(1.0, &pressure::megapascal(), &pressure::bar()), 10.0, 1e-12);
}

#[test]
fn length_area_volume() {
    assert_close("mi→km", convert(1.0, &length::mile(), &length::kilometer()), 1.609344, 1e-12);
    assert_close("ft→in", convert(1.0, &length::foot(), &length::inch()), 12.0, 1e-12);
    assert_close("yd→ft", convert(1.0, &length::yard(), &length::foot()), 3.0, 1e-12);
    assert_close("thou→mm", convert(1.0, &length::thou(), &length::millimeter()), 0.0254, 1e-12);
    assert_close("ha→m²", convert(1.0, &area::hectare(), &area::square_meter()), 1e4, 1e-12);
    assert_close("ft²→in²", convert(1.0, &area::square_foot(), &area::square_inch()), 144.0, 1e-12);
    assert_close("gal→L", convert(1.0, &volume::us_gallon(), &volume::liter()), 3.785411784, 1e-12);
    assert_close("L→mL", convert(1.0, &volume::liter(), &volume::milliliter()), 1000.0, 1e-12);
}

#[test]
fn mass_time_velocity() {
    assert_close("lbm→kg", convert(1.0, &mass::pound(), &base::kilogram()), 0.45359237, 1e-12);
    assert_close("t→g", convert(1.0, &mass::tonne(), &mass::gram()), 1e6, 1e-12);
    assert_close("mg→μg", convert(1.0, &mass::milligram(), &mass::microgram()), 1000.0, 1e-12);
    assert_close("wk→h", convert(1.0, &time::week(), &time::hour()), 168.0, 1e-12);
    assert_close("yr→d", convert(1.0, &time::year(), &time::day()), 365.25, 1e-12);
    assert_close("mph→km/h", convert(1.0, &velocity::mile_per_hour(), &velocity::kilometer_per_hour()), 1.609344, 1e-9);
    assert_close("ft/s→m/s", convert(1.0, &velocity::foot_per_second(), &velocity::meter_per_second()), 0.3048, 1e-12);
}

#[test]
fn energy_power_force() {
    assert_close("kWh→MJ", convert(1.0, &energy::kilowatt_hour(), &energy::megajoule()), 3.6, 1e-12);
    assert_close("kcal→kJ", convert(1.0, &energy::kilocalorie(), &energy::kilojoule()), 4.184, 1e-12);
    assert_close("Btu→kJ", convert(1.0, &energy::btu(), &energy::kilojoule()), 1.05506, 1e-9);
    assert_close("hp→kW", convert(1.0, &power::horsepower(), &power::kilowatt()), 0.7457, 1e-12);
    assert_close("lbf→N", convert(1.0, &force::pound_force(), &force::newton()), 4.4482216152605, 1e-12);
    assert_close("kgf→N", convert(1.0, &force::kilogram_force(), &force::newton()), 9.80665, 1e-12);
}

#[test]
fn thermal_units() {
    assert_close("°F→°C", convert(32.0, &temperature::fahrenheit(), &temperature::celsius()), 0.0, 1e-9);
    assert_close("°F→°C", convert(-40.0, &temperature::fahrenheit(), &temperature::celsius()), -40.0, 1e-9);
    assert_close("°R→°C", convert(491.67, &temperature::rankine(), &temperature::celsius()), 0.0, 1e-9);
    assert_close(
        "Btu/(h·ft·°F)→W/(m·K)",
        convert(1.0, &conductivity::btu_per_hour_foot_fahrenheit(), &conductivity::watt_per_meter_kelvin()),
        1.730735,
        1e-9,
    );
    assert_close(
        "Btu/(h·ft²·°F)→W/(m²·K)",
        convert(1.0, &heat_transfer::btu_per_hour_square_foot_fahrenheit(), &heat_transfer::watt_per_square_meter_kelvin()),
        5.678263,
        1e-9,
    );
    assert_close(
        "Btu/lb→kJ/kg",
        convert(1.0, &specific_enthalpy::btu_per_pound(), &specific_enthalpy::kilojoule_per_kilogram()),
        2.326,
        1e-12,
    );
    assert_close("cP→Pa·s", convert(1.0, &viscosity::centipoise(), &viscosity::pascal_second()), 1e-3, 1e-12);
}

#[test]
fn prefixed_symbols() {
    assert_eq!(length::kilometer().symbol(), "km");
    assert_eq!(mass::milligram().symbol(), "mg");
    assert_eq!(time::microsecond().symbol(), "μs");
    assert_eq!(pressure::kilopascal().symbol(), "kPa");
}

#[test]
fn prefix_table_is_ordered() {
    for pair in Prefix::ALL.windows(2) {
        assert!(pair[0].exponent() < pair[1].exponent(), "{:?}", pair);
    }
    for prefix in Prefix::ALL {
        let expected = 10f64.powi(prefix.exponent());
        let rel = (prefix.factor() - expected).abs() / expected;
        assert!(rel < 1e-12, "{prefix:?}: {} vs {expected}", prefix.factor());
        assert_eq!(Prefix::from_exponent(prefix.exponent()), Some(prefix));
    }
    assert_eq!(Prefix::from_exponent(4), None);
}

#[test]
fn unrelated_units_do_not_convert() {
    let err = Quantity::new(1.0, &energy::joule())
        .convert_to(&power::watt(), None)
        .unwrap_err();
    assert!(err.to_string().contains("J"), "{err}");
}

#[test]
fn information_units() {
    assert_close("B→b", convert(1.0, &information::byte(), &information::bit()), 8.0, 1e-12);
    assert_close("nybble→b", convert(1.0, &information::nybble(), &information::bit()), 4.0, 1e-12);
    assert_close("MB→kB", convert(1.0, &information::megabyte(), &information::kilobyte()), 1e3, 1e-12);
    assert_close("EB→PB", convert(1.0, &information::exabyte(), &information::petabyte()), 1e3, 1e-12);
    assert_close("TB→GB", convert(1.0, &information::terabyte(), &information::gigabyte()), 1e3, 1e-12);
    assert_close("GiB→MiB", convert(1.0, &information::gibibyte(), &information::mebibyte()), 1024.0, 1e-12);
    assert_close("EiB→B", convert(1.0, &information::exbibyte(), &information::byte()), 2f64.powi(60), 1e-12);
    assert_close("TiB→KiB", convert(1.0, &information::tebibyte(), &information::kibibyte()), 2f64.powi(30), 1e-12);
    assert_close("PiB→TiB", convert(1.0, &information::pebibyte(), &information::tebibyte()), 1024.0, 1e-12);
    assert_close("KiB→kB", convert(1.0, &information::kibibyte(), &information::kilobyte()), 1.024, 1e-12);

    assert_eq!(information::kilobyte().symbol(), "kB");
    assert_eq!(information::mebibyte().symbol(), "MiB");
    assert!(information::byte().vector().is_empty());
}

#[test]
fn storage_density_times_mass_is_data_size() {
    let density = Quantity::new(12.0, &information::megabyte())
        .divide(base::kilogram())
        .expect("MB/kg");
    let bits = match density.multiply(Quantity::new(150.0, &mass::gram())).expect("·150 g") {
        Value::Scalar(bits) => bits,
        other => panic!("expected scalar, got {other:?}"),
    };
    let size = Quantity::new(bits, &information::bit());
    assert_eq!(
        size.terms_of(&information::kibibyte(), None).expect("→KiB"),
        "1757.8125 KiB"
    );
}
