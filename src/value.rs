//! 연산의 피연산자와 결과를 나타내는 닫힌 합 타입.
//!
//! 단위끼리의 곱이 스칼라로 접히거나, 단위 × 숫자가 물리량이 되는 식의
//! 타입 의존 연산을 패턴 매칭으로 분기한다.

use crate::error::UnitError;
use crate::quantity::Quantity;
use crate::unit::Unit;

/// 연산의 오른쪽 피연산자.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Unit(Unit),
    Quantity(Quantity),
    Scalar(f64),
}

impl Operand {
    /// 유한하지 않은 스칼라는 `ArithmeticType`.
    pub(crate) fn checked(self) -> Result<Operand, UnitError> {
        match self {
            Operand::Scalar(x) if !x.is_finite() => Err(UnitError::ArithmeticType(format!(
                "스칼라 피연산자 {x} 는 유한한 실수가 아닙니다."
            ))),
            other => Ok(other),
        }
    }

    pub(crate) fn describe(&self) -> String {
        match self {
            Operand::Unit(u) => u.symbol().to_owned(),
            Operand::Quantity(q) => q.unit().symbol().to_owned(),
            Operand::Scalar(x) => x.to_string(),
        }
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Operand::Scalar(value)
    }
}

impl From<i32> for Operand {
    fn from(value: i32) -> Self {
        Operand::Scalar(value as f64)
    }
}

impl From<Unit> for Operand {
    fn from(value: Unit) -> Self {
        Operand::Unit(value)
    }
}

impl From<&Unit> for Operand {
    fn from(value: &Unit) -> Self {
        Operand::Unit(value.clone())
    }
}

impl From<Quantity> for Operand {
    fn from(value: Quantity) -> Self {
        Operand::Quantity(value)
    }
}

impl From<&Quantity> for Operand {
    fn from(value: &Quantity) -> Self {
        Operand::Quantity(value.clone())
    }
}

impl From<Value> for Operand {
    fn from(value: Value) -> Self {
        match value {
            Value::Scalar(x) => Operand::Scalar(x),
            Value::Unit(u) => Operand::Unit(u),
            Value::Quantity(q) => Operand::Quantity(q),
        }
    }
}

/// 연산 결과. 차원이 상쇄되면 `Scalar`가 된다.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Scalar(f64),
    Unit(Unit),
    Quantity(Quantity),
}

impl Value {
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Value::Scalar(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_unit(&self) -> Option<&Unit> {
        match self {
            Value::Unit(u) => Some(u),
            _ => None,
        }
    }

    pub fn as_quantity(&self) -> Option<&Quantity> {
        match self {
            Value::Quantity(q) => Some(q),
            _ => None,
        }
    }

    pub fn into_unit(self) -> Option<Unit> {
        match self {
            Value::Unit(u) => Some(u),
            _ => None,
        }
    }

    pub fn into_quantity(self) -> Option<Quantity> {
        match self {
            Value::Quantity(q) => Some(q),
            _ => None,
        }
    }

    /// 덧셈. 단위는 더할 수 없으므로 `ArithmeticType`.
    pub fn add(self, other: impl Into<Operand>) -> Result<Value, UnitError> {
        let other = other.into().checked()?;
        match (self, other) {
            (Value::Scalar(a), Operand::Scalar(b)) => Ok(Value::Scalar(a + b)),
            (Value::Scalar(a), Operand::Quantity(q)) => Ok(Value::Quantity(q.add(a)?)),
            (Value::Quantity(q), rhs) => Ok(Value::Quantity(q.add(rhs)?)),
            (lhs, rhs) => Err(UnitError::ArithmeticType(format!(
                "{lhs} 와 {} 는 더할 수 없습니다.",
                rhs.describe()
            ))),
        }
    }

    pub fn sub(self, other: impl Into<Operand>) -> Result<Value, UnitError> {
        let other = other.into().checked()?;
        match (self, other) {
            (Value::Scalar(a), Operand::Scalar(b)) => Ok(Value::Scalar(a - b)),
            (Value::Scalar(a), Operand::Quantity(q)) => Ok(Value::Quantity(q.negate().add(a)?)),
            (Value::Quantity(q), rhs) => Ok(Value::Quantity(q.sub(rhs)?)),
            (lhs, rhs) => Err(UnitError::ArithmeticType(format!(
                "{lhs} 에서 {} 를 뺄 수 없습니다.",
                rhs.describe()
            ))),
        }
    }

    pub fn multiply(self, other: impl Into<Operand>) -> Result<Value, UnitError> {
        let other = other.into().checked()?;
        match self {
            Value::Scalar(a) => match other {
                Operand::Scalar(b) => Ok(Value::Scalar(a * b)),
                Operand::Unit(u) => u.multiply(a),
                Operand::Quantity(q) => q.multiply(a),
            },
            Value::Unit(u) => u.multiply(other),
            Value::Quantity(q) => q.multiply(other),
        }
    }

    pub fn divide(self, other: impl Into<Operand>) -> Result<Value, UnitError> {
        let other = other.into().checked()?;
        match self {
            Value::Scalar(a) => match other {
                Operand::Scalar(b) => {
                    if b == 0.0 {
                        return Err(UnitError::DivisionByZero);
                    }
                    Ok(Value::Scalar(a / b))
                }
                Operand::Unit(u) => u.invert()?.multiply(a),
                Operand::Quantity(q) => q.invert()?.multiply(a),
            },
            Value::Unit(u) => u.divide(other),
            Value::Quantity(q) => q.divide(other),
        }
    }

    pub fn power(self, exponent: f64) -> Result<Value, UnitError> {
        match self {
            Value::Scalar(a) => Ok(Value::Scalar(a.powf(exponent))),
            Value::Unit(u) => Ok(Value::Unit(u.power(exponent)?)),
            Value::Quantity(q) => Ok(Value::Quantity(q.power(exponent)?)),
        }
    }
}

impl TryFrom<Value> for Unit {
    type Error = UnitError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Unit(u) => Ok(u),
            other => Err(UnitError::ArithmeticType(format!("{other} 는 단위가 아닙니다."))),
        }
    }
}

/// 단위는 값 1의 물리량으로 본다.
impl TryFrom<Value> for Quantity {
    type Error = UnitError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Quantity(q) => Ok(q),
            Value::Unit(u) => Ok(Quantity::new(1.0, &u)),
            Value::Scalar(x) => Err(UnitError::ArithmeticType(format!(
                "무차원 스칼라 {x} 는 물리량이 아닙니다."
            ))),
        }
    }
}

impl From<Unit> for Value {
    fn from(value: Unit) -> Self {
        Value::Unit(value)
    }
}

impl From<Quantity> for Value {
    fn from(value: Quantity) -> Self {
        Value::Quantity(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Scalar(value)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Scalar(x) => write!(f, "{x}"),
            Value::Unit(u) => write!(f, "{u}"),
            Value::Quantity(q) => write!(f, "{q}"),
        }
    }
}
