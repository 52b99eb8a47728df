use crate::dimension::Dimension;
use crate::unit::Unit;
use crate::units::{named, scaled};

/// 열전도율(k). W/(m·K)
pub fn watt_per_meter_kelvin() -> Unit {
    named(
        "W/(m·K)",
        &[
            (Dimension::Mass, 1),
            (Dimension::Length, 1),
            (Dimension::Time, -3),
            (Dimension::Temperature, -1),
        ],
    )
}

pub fn btu_per_hour_foot_fahrenheit() -> Unit {
    scaled(&watt_per_meter_kelvin(), "Btu/(h·ft·°F)", 1.730_735)
}
