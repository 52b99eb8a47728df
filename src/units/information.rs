//! 정보량 단위. 기준은 무차원 bit 이며 byte 는 8 bit 이다.
//!
//! kB, MB 등은 1000 배씩, KiB, MiB 등은 1024 배씩 커진다.

use crate::unit::Unit;
use crate::units::{base, prefix::Prefix, scaled};

pub fn bit() -> Unit {
    scaled(&base::dimensionless(), "b", 1.0)
}

pub fn nybble() -> Unit {
    scaled(&bit(), "nybble", 4.0)
}

pub fn byte() -> Unit {
    scaled(&bit(), "B", 8.0)
}

pub fn kilobyte() -> Unit {
    byte().with_prefix(Prefix::Kilo)
}

pub fn megabyte() -> Unit {
    byte().with_prefix(Prefix::Mega)
}

pub fn gigabyte() -> Unit {
    byte().with_prefix(Prefix::Giga)
}

pub fn terabyte() -> Unit {
    byte().with_prefix(Prefix::Tera)
}

pub fn petabyte() -> Unit {
    byte().with_prefix(Prefix::Peta)
}

pub fn exabyte() -> Unit {
    byte().with_prefix(Prefix::Exa)
}

const BINARY_STEP: f64 = 1024.0;

pub fn kibibyte() -> Unit {
    scaled(&byte(), "KiB", BINARY_STEP)
}

pub fn mebibyte() -> Unit {
    scaled(&kibibyte(), "MiB", BINARY_STEP)
}

pub fn gibibyte() -> Unit {
    scaled(&mebibyte(), "GiB", BINARY_STEP)
}

pub fn tebibyte() -> Unit {
    scaled(&gibibyte(), "TiB", BINARY_STEP)
}

pub fn pebibyte() -> Unit {
    scaled(&tebibyte(), "PiB", BINARY_STEP)
}

pub fn exbibyte() -> Unit {
    scaled(&pebibyte(), "EiB", BINARY_STEP)
}
