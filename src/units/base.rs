//! SI 기본 단위.

use crate::dimension::Dimension;
use crate::unit::Unit;

pub fn meter() -> Unit {
    Unit::base(Dimension::Length)
}

pub fn second() -> Unit {
    Unit::base(Dimension::Time)
}

pub fn kilogram() -> Unit {
    Unit::base(Dimension::Mass)
}

pub fn ampere() -> Unit {
    Unit::base(Dimension::ElectricCurrent)
}

pub fn kelvin() -> Unit {
    Unit::base(Dimension::Temperature)
}

pub fn mole() -> Unit {
    Unit::base(Dimension::Amount)
}

pub fn candela() -> Unit {
    Unit::base(Dimension::LuminousIntensity)
}

/// 무차원 1. `1 / s` 처럼 역수 단위를 만들 때 쓴다.
pub fn dimensionless() -> Unit {
    Unit::dimensionless()
}
