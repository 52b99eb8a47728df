//! 단위 정의 모음. 물리량 종류별로 모듈을 나눈다.
//!
//! 모든 함수는 호출할 때마다 새 `Unit`을 만든다. 배율은 SI 기준 단위 대비 값이다.

pub mod area;
pub mod base;
pub mod conductivity;
pub mod electric;
pub mod energy;
pub mod force;
pub mod heat_transfer;
pub mod information;
pub mod length;
pub mod mass;
pub mod power;
pub mod prefix;
pub mod pressure;
pub mod specific_enthalpy;
pub mod temperature;
pub mod time;
pub mod velocity;
pub mod viscosity;
pub mod volume;

use crate::dimension::{Dimension, DimensionVector};
use crate::unit::Unit;

pub use base::{ampere, candela, dimensionless, kelvin, kilogram, meter, mole, second};
pub use prefix::Prefix;

/// 차원 지수로 직접 정의하는 배율 1 단위.
pub(crate) fn named(symbol: &str, exponents: &[(Dimension, i8)]) -> Unit {
    Unit::new(
        DimensionVector::from_table(exponents),
        Some(symbol),
        1.0,
        0.0,
    )
}

/// `base` 의 `factor` 배 단위.
pub(crate) fn scaled(base: &Unit, symbol: &str, factor: f64) -> Unit {
    Unit::derived(base, symbol, factor, 0.0)
}
