//! 전자기 관련 SI 유도 단위와 헤르츠, 시버트.

use crate::dimension::Dimension::{ElectricCurrent, Length, Mass, Time};
use crate::unit::Unit;
use crate::units::{base, named, prefix::Prefix};

/// Hz = 1/s
pub fn hertz() -> Unit {
    named("Hz", &[(Time, -1)])
}

pub fn kilohertz() -> Unit {
    hertz().with_prefix(Prefix::Kilo)
}

pub fn megahertz() -> Unit {
    hertz().with_prefix(Prefix::Mega)
}

/// C = A·s
pub fn coulomb() -> Unit {
    named("C", &[(Time, 1), (ElectricCurrent, 1)])
}

/// V = W/A
pub fn volt() -> Unit {
    named("V", &[(Mass, 1), (Length, 2), (Time, -3), (ElectricCurrent, -1)])
}

pub fn millivolt() -> Unit {
    volt().with_prefix(Prefix::Milli)
}

pub fn kilovolt() -> Unit {
    volt().with_prefix(Prefix::Kilo)
}

pub fn milliampere() -> Unit {
    base::ampere().with_prefix(Prefix::Milli)
}

/// F = C/V
pub fn farad() -> Unit {
    named("F", &[(Mass, -1), (Length, -2), (Time, 4), (ElectricCurrent, 2)])
}

pub fn microfarad() -> Unit {
    farad().with_prefix(Prefix::Micro)
}

/// Ω = V/A
pub fn ohm() -> Unit {
    named("Ω", &[(Mass, 1), (Length, 2), (Time, -3), (ElectricCurrent, -2)])
}

pub fn kiloohm() -> Unit {
    ohm().with_prefix(Prefix::Kilo)
}

/// S = 1/Ω
pub fn siemens() -> Unit {
    named("S", &[(Mass, -1), (Length, -2), (Time, 3), (ElectricCurrent, 2)])
}

/// Wb = V·s
pub fn weber() -> Unit {
    named("Wb", &[(Mass, 1), (Length, 2), (Time, -2), (ElectricCurrent, -1)])
}

/// T = Wb/m²
pub fn tesla() -> Unit {
    named("T", &[(Mass, 1), (Time, -2), (ElectricCurrent, -1)])
}

/// H = Wb/A
pub fn henry() -> Unit {
    named("H", &[(Mass, 1), (Length, 2), (Time, -2), (ElectricCurrent, -2)])
}

/// Sv = J/kg
pub fn sievert() -> Unit {
    named("Sv", &[(Length, 2), (Time, -2)])
}
