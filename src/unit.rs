//! 단위: 차원 벡터 + 기준 단위로의 선형(+오프셋) 변환 + 선택적 기호.

use std::sync::OnceLock;

use crate::catalog::{self, Catalog};
use crate::dimension::{Dimension, DimensionVector};
use crate::error::UnitError;
use crate::quantity::Quantity;
use crate::simplify;
use crate::units::prefix::Prefix;
use crate::value::{Operand, Value};

/// 물리 단위. 생성 후 변경되지 않는다.
///
/// `factor`는 이 단위 1이 기준 단위 몇 개인지, `offset`은 이 단위 0이 기준 단위로
/// 얼마인지를 나타낸다(섭씨의 경우 factor=1, offset=273.15).
#[derive(Debug, Clone)]
pub struct Unit {
    vector: DimensionVector,
    symbol: Option<String>,
    factor: f64,
    offset: f64,
    /// 기호가 없을 때 기본 카탈로그로 단순화한 결과
    rendered: OnceLock<String>,
}

impl Unit {
    /// 새 단위를 만든다. `factor`는 0이 아닌 유한값이어야 한다.
    pub fn new(vector: DimensionVector, symbol: Option<&str>, factor: f64, offset: f64) -> Self {
        Self {
            vector,
            symbol: symbol.map(str::to_owned),
            factor,
            offset,
            rendered: OnceLock::new(),
        }
    }

    /// 단일 차원의 SI 기본 단위.
    pub fn base(dim: Dimension) -> Self {
        Self::new(DimensionVector::of(dim), Some(dim.base_symbol()), 1.0, 0.0)
    }

    /// 무차원 단위. `1 / unit` 같은 식의 출발점으로 쓴다.
    pub fn dimensionless() -> Self {
        Self::new(DimensionVector::empty(), Some(""), 1.0, 0.0)
    }

    /// 기존 단위를 기반으로 새 단위를 만든다.
    ///
    /// 새 단위 1 = `factor` × `base`, 새 단위 0 = `offset` × `base` 이다.
    pub fn derived(base: &Unit, symbol: &str, factor: f64, offset: f64) -> Unit {
        Unit::new(
            base.vector.clone(),
            Some(symbol),
            base.factor * factor,
            base.offset + offset,
        )
    }

    pub fn vector(&self) -> &DimensionVector {
        &self.vector
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// 명시적으로 지정된 기호.
    pub fn explicit_symbol(&self) -> Option<&str> {
        self.symbol.as_deref()
    }

    /// 기준점이 다른(아핀) 단위인지 여부.
    pub fn is_affine(&self) -> bool {
        self.offset != 0.0
    }

    /// 출력용 기호. 명시 기호가 없으면 기본 카탈로그로 단순화하고 결과를 보관한다.
    ///
    /// 보관된 결과는 이후 카탈로그 등록의 영향을 받지 않는다.
    pub fn symbol(&self) -> &str {
        if let Some(sym) = &self.symbol {
            return sym;
        }
        self.rendered
            .get_or_init(|| catalog::with_default(|c| simplify::simplify(&self.vector, c)))
    }

    /// 주어진 카탈로그로 기호를 계산한다. 보관값은 건드리지 않는다.
    pub fn symbol_in(&self, catalog: &Catalog) -> String {
        match &self.symbol {
            Some(sym) => sym.clone(),
            None => simplify::simplify(&self.vector, catalog),
        }
    }

    /// 기준 단위와 같은(factor=1, offset=0) 단위로 만든다.
    /// 기호는 원래 단위가 이미 기준 단위였을 때만 유지한다.
    pub(crate) fn canonical(&self) -> Unit {
        let symbol = if self.factor == 1.0 && self.offset == 0.0 {
            self.symbol.as_deref()
        } else {
            None
        };
        Unit::new(self.vector.clone(), symbol, 1.0, 0.0)
    }

    /// 두 단위의 곱. 차원이 모두 상쇄되면 스칼라가 된다.
    pub(crate) fn product(&self, other: &Unit) -> Result<Value, UnitError> {
        let vector = self.vector.add(&other.vector)?;
        let factor = checked_factor(self.factor * other.factor, "곱")?;
        Ok(Self::unit_or_scalar(vector, factor))
    }

    /// 두 단위의 몫. 차원이 모두 상쇄되면 스칼라가 된다.
    pub(crate) fn quotient(&self, other: &Unit) -> Result<Value, UnitError> {
        let vector = self.vector.sub(&other.vector)?;
        let factor = checked_factor(self.factor / other.factor, "몫")?;
        Ok(Self::unit_or_scalar(vector, factor))
    }

    fn unit_or_scalar(vector: DimensionVector, factor: f64) -> Value {
        if vector.is_empty() {
            Value::Scalar(factor)
        } else {
            Value::Unit(Unit::new(vector, None, factor, 0.0))
        }
    }

    /// 곱셈. 단위끼리는 단위(또는 스칼라), 숫자/물리량과는 물리량이 된다.
    pub fn multiply(&self, other: impl Into<Operand>) -> Result<Value, UnitError> {
        match other.into().checked()? {
            Operand::Unit(u) => self.product(&u),
            Operand::Scalar(x) => Ok(Value::Quantity(Quantity::new(x, self))),
            Operand::Quantity(q) => Quantity::new(1.0, self).multiply(q),
        }
    }

    /// 나눗셈. 스칼라 0으로 나누면 `DivisionByZero`.
    pub fn divide(&self, other: impl Into<Operand>) -> Result<Value, UnitError> {
        match other.into().checked()? {
            Operand::Unit(u) => self.quotient(&u),
            Operand::Scalar(x) => {
                if x == 0.0 {
                    return Err(UnitError::DivisionByZero);
                }
                Ok(Value::Quantity(Quantity::new(1.0 / x, self)))
            }
            Operand::Quantity(q) => Quantity::new(1.0, self).divide(q),
        }
    }

    /// 거듭제곱. 결과 차원 지수가 정수가 아니면 `NonIntegralDimension`,
    /// 배율이 f64 로 표현되지 않으면 `ArithmeticType`.
    pub fn power(&self, exponent: f64) -> Result<Unit, UnitError> {
        if !exponent.is_finite() {
            return Err(UnitError::ArithmeticType(format!(
                "지수 {exponent} 는 유한한 실수가 아닙니다."
            )));
        }
        let vector = self.vector.scale_checked(exponent)?;
        let factor = checked_factor(self.factor.powf(exponent), "거듭제곱")?;
        Ok(Unit::new(vector, None, factor, 0.0))
    }

    /// n제곱근. 각 차원 지수가 n으로 나누어떨어져야 한다.
    pub fn root(&self, n: u32) -> Result<Unit, UnitError> {
        if n == 0 {
            return Err(UnitError::DivisionByZero);
        }
        let n = i64::from(n);
        if let Some((dim, exp)) = self.vector.iter().find(|(_, e)| i64::from(*e) % n != 0) {
            return Err(UnitError::NonIntegralDimension(format!(
                "{}^{exp} 의 {n}제곱근",
                dim.base_symbol()
            )));
        }
        // |e / n| ≤ |e| 이므로 범위 안에 있다
        let vector = DimensionVector::from_exponents(
            self.vector
                .iter()
                .map(|(d, e)| (d, (i64::from(e) / n) as i32)),
        )?;
        let factor = checked_factor(self.factor.powf(1.0 / n as f64), "제곱근")?;
        Ok(Unit::new(vector, None, factor, 0.0))
    }

    /// 역수 단위. 오프셋은 그대로 둔다.
    pub fn invert(&self) -> Result<Unit, UnitError> {
        let factor = checked_factor(1.0 / self.factor, "역수")?;
        Ok(Unit::new(self.vector.negate(), None, factor, self.offset))
    }

    /// SI 접두어를 붙인 단위. 예: `meter().with_prefix(Prefix::Kilo)` → km
    pub fn with_prefix(&self, prefix: Prefix) -> Unit {
        let symbol = format!("{}{}", prefix.symbol(), self.symbol());
        Unit::derived(self, &symbol, prefix.factor(), 0.0)
    }

    /// 이 단위 1을 `target` 단위로 표현한 문자열.
    pub fn terms_of(&self, target: &Unit, digits: Option<u32>) -> Result<String, UnitError> {
        Quantity::new(1.0, self).terms_of(target, digits)
    }
}

/// 연산 결과 배율이 0 으로 사라지거나 무한대로 넘치면 `ArithmeticType`.
fn checked_factor(factor: f64, operation: &str) -> Result<f64, UnitError> {
    if factor == 0.0 || !factor.is_finite() {
        return Err(UnitError::ArithmeticType(format!(
            "단위 {operation}의 배율 {factor} 는 표현할 수 없습니다."
        )));
    }
    Ok(factor)
}

/// 기호는 비교하지 않는다.
impl PartialEq for Unit {
    fn eq(&self, other: &Self) -> bool {
        self.factor == other.factor && self.offset == other.offset && self.vector == other.vector
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}
