//! 온도 단위. 섭씨/화씨는 기준점이 켈빈과 다른 아핀 단위이다.

use crate::unit::Unit;
use crate::units::{base, scaled};

/// 섭씨. 0 °C = 273.15 K
pub fn celsius() -> Unit {
    Unit::derived(&base::kelvin(), "°C", 1.0, 273.15)
}

/// 화씨. K = (°F + 459.67) × 5/9
pub fn fahrenheit() -> Unit {
    Unit::derived(&base::kelvin(), "°F", 5.0 / 9.0, 459.67 * 5.0 / 9.0)
}

/// 랭킨. 배율만 다르다.
pub fn rankine() -> Unit {
    scaled(&base::kelvin(), "°R", 5.0 / 9.0)
}
