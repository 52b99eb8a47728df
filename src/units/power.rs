use crate::dimension::Dimension;
use crate::unit::Unit;
use crate::units::{named, prefix::Prefix, scaled};

/// W = J/s
pub fn watt() -> Unit {
    named(
        "W",
        &[
            (Dimension::Mass, 1),
            (Dimension::Length, 2),
            (Dimension::Time, -3),
        ],
    )
}

pub fn milliwatt() -> Unit {
    watt().with_prefix(Prefix::Milli)
}

pub fn kilowatt() -> Unit {
    watt().with_prefix(Prefix::Kilo)
}

pub fn megawatt() -> Unit {
    watt().with_prefix(Prefix::Mega)
}

/// 기계 마력.
pub fn horsepower() -> Unit {
    scaled(&watt(), "hp", 745.7)
}
