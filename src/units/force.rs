use crate::dimension::Dimension;
use crate::unit::Unit;
use crate::units::{named, prefix::Prefix, scaled};

/// 표준 중력가속도(m/s²).
pub(crate) const STANDARD_GRAVITY: f64 = 9.806_65;

/// N = kg·m/s²
pub fn newton() -> Unit {
    named(
        "N",
        &[
            (Dimension::Mass, 1),
            (Dimension::Length, 1),
            (Dimension::Time, -2),
        ],
    )
}

pub fn kilonewton() -> Unit {
    newton().with_prefix(Prefix::Kilo)
}

/// 파운드힘 = lbm × g₀
pub fn pound_force() -> Unit {
    scaled(&newton(), "lbf", 0.453_592_37 * STANDARD_GRAVITY)
}

/// 킬로그램힘 = kg × g₀
pub fn kilogram_force() -> Unit {
    scaled(&newton(), "kgf", STANDARD_GRAVITY)
}
