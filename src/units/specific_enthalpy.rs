use crate::dimension::Dimension;
use crate::unit::Unit;
use crate::units::{named, scaled};

/// J/kg = m²/s²
pub fn joule_per_kilogram() -> Unit {
    named("J/kg", &[(Dimension::Length, 2), (Dimension::Time, -2)])
}

pub fn kilojoule_per_kilogram() -> Unit {
    scaled(&joule_per_kilogram(), "kJ/kg", 1e3)
}

pub fn kilocalorie_per_kilogram() -> Unit {
    scaled(&joule_per_kilogram(), "kcal/kg", 4184.0)
}

pub fn btu_per_pound() -> Unit {
    scaled(&joule_per_kilogram(), "Btu/lb", 2326.0)
}
