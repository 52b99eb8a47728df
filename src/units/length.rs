use crate::unit::Unit;
use crate::units::{base, prefix::Prefix, scaled};

pub fn millimeter() -> Unit {
    base::meter().with_prefix(Prefix::Milli)
}

pub fn centimeter() -> Unit {
    base::meter().with_prefix(Prefix::Centi)
}

pub fn kilometer() -> Unit {
    base::meter().with_prefix(Prefix::Kilo)
}

pub fn inch() -> Unit {
    scaled(&base::meter(), "in", 0.0254)
}

/// 1/1000 inch
pub fn thou() -> Unit {
    scaled(&inch(), "thou", 1e-3)
}

pub fn foot() -> Unit {
    scaled(&base::meter(), "ft", 0.3048)
}

pub fn yard() -> Unit {
    scaled(&base::meter(), "yd", 0.9144)
}

pub fn mile() -> Unit {
    scaled(&foot(), "mi", 5280.0)
}

/// 천문단위.
pub fn astronomical_unit() -> Unit {
    scaled(&base::meter(), "au", 149_597_870_700.0)
}
