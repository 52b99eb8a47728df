use crate::unit::Unit;
use crate::units::{base, prefix::Prefix, scaled};

pub fn millisecond() -> Unit {
    base::second().with_prefix(Prefix::Milli)
}

pub fn microsecond() -> Unit {
    base::second().with_prefix(Prefix::Micro)
}

pub fn nanosecond() -> Unit {
    base::second().with_prefix(Prefix::Nano)
}

pub fn minute() -> Unit {
    scaled(&base::second(), "min", 60.0)
}

pub fn hour() -> Unit {
    scaled(&minute(), "h", 60.0)
}

pub fn day() -> Unit {
    scaled(&hour(), "d", 24.0)
}

pub fn week() -> Unit {
    scaled(&day(), "wk", 7.0)
}

/// 율리우스년(365.25 d).
pub fn year() -> Unit {
    scaled(&day(), "yr", 365.25)
}
