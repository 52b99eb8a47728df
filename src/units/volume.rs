use crate::dimension::Dimension;
use crate::unit::Unit;
use crate::units::{named, scaled};

pub fn cubic_meter() -> Unit {
    named("m³", &[(Dimension::Length, 3)])
}

pub fn liter() -> Unit {
    scaled(&cubic_meter(), "L", 1e-3)
}

pub fn milliliter() -> Unit {
    scaled(&liter(), "mL", 1e-3)
}

pub fn cubic_foot() -> Unit {
    scaled(&cubic_meter(), "ft³", 0.028_316_8)
}

/// 미국 갤런.
pub fn us_gallon() -> Unit {
    scaled(&liter(), "gal", 3.785_411_784)
}
