use crate::dimension::Dimension;
use crate::unit::Unit;
use crate::units::{named, scaled};

/// 열전달계수(U). W/(m²·K)
pub fn watt_per_square_meter_kelvin() -> Unit {
    named(
        "W/(m²·K)",
        &[
            (Dimension::Mass, 1),
            (Dimension::Time, -3),
            (Dimension::Temperature, -1),
        ],
    )
}

pub fn btu_per_hour_square_foot_fahrenheit() -> Unit {
    scaled(&watt_per_square_meter_kelvin(), "Btu/(h·ft²·°F)", 5.678_263)
}
