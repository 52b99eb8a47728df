use std::cmp::Ordering;
use std::ops::Range;

use crate::error::UnitError;
use crate::unit::Unit;
use crate::value::{Operand, Value};

/// 수치와 단위를 묶은 물리량.
///
/// 생성 시 원래 단위의 배율과 오프셋을 값에 반영해 두므로, 내부 단위는 항상
/// factor=1, offset=0 인 기준 단위이다. 예: `Quantity::new(0.0, &celsius())`의
/// 내부 값은 273.15 (K).
#[derive(Debug, Clone)]
pub struct Quantity {
    value: f64,
    unit: Unit,
    /// 출력 시 반올림 자릿수
    digits: Option<u32>,
}

impl Quantity {
    /// `value` × `unit` 을 기준 단위 값으로 환산해 만든다.
    pub fn new(value: f64, unit: &Unit) -> Self {
        Self {
            value: value * unit.factor() + unit.offset(),
            unit: unit.canonical(),
            digits: None,
        }
    }

    /// 이미 기준 단위 값인 경우.
    fn from_canonical(value: f64, unit: Unit, digits: Option<u32>) -> Self {
        Self { value, unit, digits }
    }

    /// 기준 단위로 환산된 값.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// 기준 단위(factor=1, offset=0).
    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    pub fn digits(&self) -> Option<u32> {
        self.digits
    }

    /// 출력 자릿수를 지정한 사본. 값 자체는 바꾸지 않는다.
    pub fn round(&self, digits: u32) -> Quantity {
        Self::from_canonical(self.value, self.unit.clone(), Some(digits))
    }

    pub fn is_commensurable(&self, other: &Quantity) -> bool {
        self.unit.vector() == other.unit.vector()
    }

    fn incommensurable(&self, other: &str) -> UnitError {
        UnitError::Incommensurable {
            left: self.unit.symbol().to_owned(),
            right: other.to_owned(),
        }
    }

    /// 덧셈. 차원이 같아야 하며, 스칼라 0은 항등원으로 취급해 그대로 돌려준다.
    ///
    /// 값이 0인 물리량은 항등원이 아니다. 다른 물리량과 똑같이 차원을 검사한다.
    pub fn add(&self, other: impl Into<Operand>) -> Result<Quantity, UnitError> {
        match other.into().checked()? {
            Operand::Scalar(x) if x == 0.0 => Ok(self.clone()),
            Operand::Scalar(x) => {
                if self.unit.vector().is_empty() {
                    Ok(Self::from_canonical(
                        self.value + x,
                        self.unit.clone(),
                        self.digits,
                    ))
                } else {
                    Err(self.incommensurable(&x.to_string()))
                }
            }
            Operand::Unit(u) => self.add(Quantity::new(1.0, &u)),
            Operand::Quantity(q) => {
                if !self.is_commensurable(&q) {
                    return Err(self.incommensurable(q.unit.symbol()));
                }
                Ok(Self::from_canonical(
                    self.value + q.value,
                    self.unit.clone(),
                    self.digits,
                ))
            }
        }
    }

    pub fn sub(&self, other: impl Into<Operand>) -> Result<Quantity, UnitError> {
        match other.into().checked()? {
            Operand::Scalar(x) => self.add(-x),
            Operand::Unit(u) => self.add(Quantity::new(1.0, &u).negate()),
            Operand::Quantity(q) => self.add(q.negate()),
        }
    }

    /// 곱셈. 스칼라 0을 곱하면 물리량이 아닌 0을 돌려준다.
    pub fn multiply(&self, other: impl Into<Operand>) -> Result<Value, UnitError> {
        match other.into().checked()? {
            Operand::Scalar(x) if x == 0.0 => Ok(Value::Scalar(0.0)),
            Operand::Scalar(x) => Ok(Value::Quantity(Self::from_canonical(
                self.value * x,
                self.unit.clone(),
                self.digits,
            ))),
            Operand::Unit(u) => Ok(self.scaled_by(self.value, self.unit.product(&u)?)),
            Operand::Quantity(q) => Ok(self.scaled_by(
                self.value * q.value,
                self.unit.product(&q.unit)?,
            )),
        }
    }

    /// 나눗셈. 스칼라 0이나 값이 0인 물리량으로 나누면 `DivisionByZero`.
    pub fn divide(&self, other: impl Into<Operand>) -> Result<Value, UnitError> {
        match other.into().checked()? {
            Operand::Scalar(x) => {
                if x == 0.0 {
                    return Err(UnitError::DivisionByZero);
                }
                Ok(Value::Quantity(Self::from_canonical(
                    self.value / x,
                    self.unit.clone(),
                    self.digits,
                )))
            }
            Operand::Unit(u) => Ok(self.scaled_by(self.value, self.unit.quotient(&u)?)),
            Operand::Quantity(q) => {
                if q.value == 0.0 {
                    return Err(UnitError::DivisionByZero);
                }
                Ok(self.scaled_by(self.value / q.value, self.unit.quotient(&q.unit)?))
            }
        }
    }

    /// 단위 연산 결과에 값을 곱해 물리량(또는 스칼라)으로 만든다.
    fn scaled_by(&self, value: f64, unit: Value) -> Value {
        match unit {
            Value::Scalar(factor) => Value::Scalar(value * factor),
            Value::Unit(u) => {
                let mut q = Quantity::new(value, &u);
                q.digits = self.digits;
                Value::Quantity(q)
            }
            Value::Quantity(q) => Value::Quantity(q),
        }
    }

    pub fn power(&self, exponent: f64) -> Result<Quantity, UnitError> {
        let unit = self.unit.power(exponent)?;
        Ok(Self::from_canonical(
            self.value.powf(exponent),
            unit,
            self.digits,
        ))
    }

    pub fn negate(&self) -> Quantity {
        Self::from_canonical(-self.value, self.unit.clone(), self.digits)
    }

    pub fn abs(&self) -> Quantity {
        Self::from_canonical(self.value.abs(), self.unit.clone(), self.digits)
    }

    /// 역수. 값이 0이면 `DivisionByZero`.
    pub fn invert(&self) -> Result<Quantity, UnitError> {
        if self.value == 0.0 {
            return Err(UnitError::DivisionByZero);
        }
        Ok(Self::from_canonical(
            1.0 / self.value,
            self.unit.invert()?,
            self.digits,
        ))
    }

    /// `(self - other).value` 의 부호로 순서를 정한다.
    pub fn compare(&self, other: impl Into<Operand>) -> Result<Ordering, UnitError> {
        let diff = self.sub(other)?.value;
        diff.partial_cmp(&0.0).ok_or_else(|| {
            UnitError::ArithmeticType(format!("{diff} 는 비교할 수 없는 값입니다."))
        })
    }

    pub fn is_less(&self, other: impl Into<Operand>) -> Result<bool, UnitError> {
        Ok(self.compare(other)? == Ordering::Less)
    }

    pub fn is_greater(&self, other: impl Into<Operand>) -> Result<bool, UnitError> {
        Ok(self.compare(other)? == Ordering::Greater)
    }

    pub fn is_less_or_equal(&self, other: impl Into<Operand>) -> Result<bool, UnitError> {
        Ok(self.compare(other)? != Ordering::Greater)
    }

    pub fn is_greater_or_equal(&self, other: impl Into<Operand>) -> Result<bool, UnitError> {
        Ok(self.compare(other)? != Ordering::Less)
    }

    /// `target` 단위 기준의 수치. 아핀 단위는 오프셋을 먼저 빼고 나눈다.
    pub fn convert_to(&self, target: &Unit, digits: Option<u32>) -> Result<f64, UnitError> {
        if self.unit.vector() != target.vector() {
            return Err(self.incommensurable(target.symbol()));
        }
        let ratio = (self.value - target.offset()) / target.factor();
        Ok(match digits {
            Some(d) => round_to(ratio, d),
            None => ratio,
        })
    }

    /// `target` 단위로 환산한 `"<값> <기호>"` 문자열.
    pub fn terms_of(&self, target: &Unit, digits: Option<u32>) -> Result<String, UnitError> {
        let ratio = self.convert_to(target, digits)?;
        Ok(format_value(ratio, target.symbol()))
    }
}

/// 소수점 이하 `digits` 자리로 반올림한다.
pub fn round_to(value: f64, digits: u32) -> f64 {
    let scale = 10f64.powi(digits as i32);
    (value * scale).round() / scale
}

/// 절댓값이 이 범위 밖이면 지수 표기(`6.62607015e-34`)로 출력한다.
const PLAIN_RANGE: Range<f64> = 1e-4..1e16;

fn format_number(value: f64) -> String {
    if value == 0.0 || !value.is_finite() || PLAIN_RANGE.contains(&value.abs()) {
        value.to_string()
    } else {
        format!("{value:e}")
    }
}

fn format_value(value: f64, symbol: &str) -> String {
    let number = format_number(value);
    if symbol.is_empty() {
        number
    } else {
        format!("{number} {symbol}")
    }
}

/// 값과 단위를 모두 정확히 비교한다. 허용오차는 두지 않는다.
impl PartialEq for Quantity {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.unit == other.unit
    }
}

/// 차원이 다르면 `None`.
impl PartialOrd for Quantity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other).ok()
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = match self.digits {
            Some(d) => round_to(self.value, d),
            None => self.value,
        };
        f.write_str(&format_value(value, self.unit.symbol()))
    }
}
