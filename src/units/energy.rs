use crate::dimension::Dimension;
use crate::unit::Unit;
use crate::units::{named, prefix::Prefix, scaled};

/// J = kg·m²/s²
pub fn joule() -> Unit {
    named(
        "J",
        &[
            (Dimension::Mass, 1),
            (Dimension::Length, 2),
            (Dimension::Time, -2),
        ],
    )
}

pub fn kilojoule() -> Unit {
    joule().with_prefix(Prefix::Kilo)
}

pub fn megajoule() -> Unit {
    joule().with_prefix(Prefix::Mega)
}

/// 전자볼트. 기본 전하 × 1 V
pub fn electronvolt() -> Unit {
    scaled(&joule(), "eV", 1.602_176_634e-19)
}

pub fn watt_hour() -> Unit {
    scaled(&joule(), "Wh", 3600.0)
}

pub fn kilowatt_hour() -> Unit {
    watt_hour().with_prefix(Prefix::Kilo)
}

pub fn kilocalorie() -> Unit {
    scaled(&joule(), "kcal", 4184.0)
}

pub fn btu() -> Unit {
    scaled(&joule(), "Btu", 1055.06)
}
