use crate::dimension::Dimension;
use crate::unit::Unit;
use crate::units::{length, named, scaled};

pub fn square_meter() -> Unit {
    named("m²", &[(Dimension::Length, 2)])
}

pub fn hectare() -> Unit {
    scaled(&square_meter(), "ha", 1e4)
}

pub fn square_foot() -> Unit {
    let ft = length::foot().factor();
    scaled(&square_meter(), "ft²", ft * ft)
}

pub fn square_inch() -> Unit {
    let inch = length::inch().factor();
    scaled(&square_meter(), "in²", inch * inch)
}

pub fn acre() -> Unit {
    scaled(&square_meter(), "acre", 4046.873)
}
