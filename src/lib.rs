//! 차원 해석 라이브러리. 단위/물리량 연산과 단위 기호 단순화를 CLI와 분리해 둔다.
pub mod catalog;
pub mod config;
pub mod constants;
pub mod dimension;
pub mod error;
pub mod quantity;
pub mod simplify;
pub mod unit;
pub mod units;
pub mod value;

pub use catalog::Catalog;
pub use dimension::{Dimension, DimensionVector};
pub use error::UnitError;
pub use quantity::Quantity;
pub use unit::Unit;
pub use value::{Operand, Value};
