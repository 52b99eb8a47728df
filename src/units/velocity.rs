use crate::dimension::Dimension;
use crate::unit::Unit;
use crate::units::{named, scaled};

pub fn meter_per_second() -> Unit {
    named("m/s", &[(Dimension::Length, 1), (Dimension::Time, -1)])
}

pub fn kilometer_per_hour() -> Unit {
    scaled(&meter_per_second(), "km/h", 1.0 / 3.6)
}

pub fn foot_per_second() -> Unit {
    scaled(&meter_per_second(), "ft/s", 0.3048)
}

pub fn mile_per_hour() -> Unit {
    scaled(&meter_per_second(), "mph", 0.447_04)
}
