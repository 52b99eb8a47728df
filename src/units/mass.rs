use crate::unit::Unit;
use crate::units::{base, prefix::Prefix, scaled};

/// 그램. 질량 접두어는 kg 이 아닌 g 에 붙인다.
pub fn gram() -> Unit {
    scaled(&base::kilogram(), "g", 1e-3)
}

pub fn milligram() -> Unit {
    gram().with_prefix(Prefix::Milli)
}

pub fn microgram() -> Unit {
    gram().with_prefix(Prefix::Micro)
}

pub fn tonne() -> Unit {
    scaled(&base::kilogram(), "t", 1e3)
}

/// 파운드(질량). 국제 정의값.
pub fn pound() -> Unit {
    scaled(&base::kilogram(), "lbm", 0.453_592_37)
}

/// 통일 원자 질량 단위.
pub fn dalton() -> Unit {
    scaled(&base::kilogram(), "Da", 1.660_539_066_60e-27)
}
