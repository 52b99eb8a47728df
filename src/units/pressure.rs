use crate::dimension::Dimension;
use crate::unit::Unit;
use crate::units::{named, prefix::Prefix, scaled};

const PA_PER_BAR: f64 = 100_000.0;
const PA_PER_ATM: f64 = 101_325.0;
const MMHG_PER_ATM: f64 = 760.0;

/// Pa = N/m² = kg/(m·s²)
pub fn pascal() -> Unit {
    named(
        "Pa",
        &[
            (Dimension::Mass, 1),
            (Dimension::Length, -1),
            (Dimension::Time, -2),
        ],
    )
}

pub fn kilopascal() -> Unit {
    pascal().with_prefix(Prefix::Kilo)
}

pub fn megapascal() -> Unit {
    pascal().with_prefix(Prefix::Mega)
}

pub fn bar() -> Unit {
    scaled(&pascal(), "bar", PA_PER_BAR)
}

pub fn millibar() -> Unit {
    scaled(&bar(), "mbar", 1e-3)
}

/// 표준 대기압.
pub fn atmosphere() -> Unit {
    scaled(&pascal(), "atm", PA_PER_ATM)
}

/// 수은주 밀리미터. 1 atm = 760 mmHg
pub fn mmhg() -> Unit {
    scaled(&pascal(), "mmHg", PA_PER_ATM / MMHG_PER_ATM)
}

pub fn kgf_per_cm2() -> Unit {
    scaled(&pascal(), "kgf/cm²", 98_066.5)
}

pub fn psi() -> Unit {
    scaled(&pascal(), "psi", 6_894.757)
}
