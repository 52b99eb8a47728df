//! 기본 물리 차원과 정수 지수 벡터.
//!
//! 모든 연산은 새 벡터를 돌려주며 기존 벡터를 바꾸지 않는다. 지수가 0인 항목은
//! 저장하지 않으므로 같은 차원은 항상 같은 맵으로 표현된다.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::UnitError;
use crate::simplify::superscript;

/// 차원 지수 절댓값의 상한. `i32::MIN` 은 부호 반전이 넘치므로 쓰지 않는다.
pub const MAX_EXPONENT: i64 = i32::MAX as i64;

fn out_of_range(dim: Dimension, exp: i64) -> UnitError {
    UnitError::InvalidDimension(format!("{}: {exp} (범위 초과)", dim.name()))
}

/// SI 7개 기본 차원. 선언 순서가 출력 정렬 순서이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Length,
    Time,
    Mass,
    ElectricCurrent,
    Temperature,
    Amount,
    LuminousIntensity,
}

impl Dimension {
    pub const ALL: [Dimension; 7] = [
        Dimension::Length,
        Dimension::Time,
        Dimension::Mass,
        Dimension::ElectricCurrent,
        Dimension::Temperature,
        Dimension::Amount,
        Dimension::LuminousIntensity,
    ];

    /// `ALL` 에서의 위치.
    pub(crate) fn index(self) -> usize {
        self as usize
    }

    /// 해당 차원의 SI 기본 단위 기호.
    pub fn base_symbol(self) -> &'static str {
        match self {
            Dimension::Length => "m",
            Dimension::Time => "s",
            Dimension::Mass => "kg",
            Dimension::ElectricCurrent => "A",
            Dimension::Temperature => "K",
            Dimension::Amount => "mol",
            Dimension::LuminousIntensity => "cd",
        }
    }

    /// 설정 파일/CLI에서 쓰는 이름.
    pub fn name(self) -> &'static str {
        match self {
            Dimension::Length => "length",
            Dimension::Time => "time",
            Dimension::Mass => "mass",
            Dimension::ElectricCurrent => "electric_current",
            Dimension::Temperature => "temperature",
            Dimension::Amount => "amount",
            Dimension::LuminousIntensity => "luminous_intensity",
        }
    }

    /// 이름 또는 기본 단위 기호로 차원을 찾는다.
    pub fn from_name(s: &str) -> Option<Dimension> {
        let lower = s.trim().to_lowercase();
        Dimension::ALL
            .into_iter()
            .find(|d| d.name() == lower || d.base_symbol().to_lowercase() == lower)
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.base_symbol())
    }
}

/// 차원별 정수 지수 벡터. 0 지수는 저장하지 않는다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<Dimension, f64>",
    into = "BTreeMap<Dimension, i32>"
)]
pub struct DimensionVector {
    exponents: BTreeMap<Dimension, i32>,
}

impl DimensionVector {
    /// 차원이 없는(무차원) 벡터.
    pub fn empty() -> Self {
        Self::default()
    }

    /// 단일 차원 지수 1 벡터.
    pub fn of(dim: Dimension) -> Self {
        Self {
            exponents: BTreeMap::from([(dim, 1)]),
        }
    }

    /// 코드에 적힌 작은 지수표로 벡터를 만든다. 같은 차원이 반복되면 뒤의 값을 쓴다.
    pub(crate) fn from_table(entries: &[(Dimension, i8)]) -> Self {
        let mut exponents = BTreeMap::new();
        for &(dim, exp) in entries {
            exponents.insert(dim, i32::from(exp));
        }
        exponents.retain(|_, e| *e != 0);
        Self { exponents }
    }

    /// 정수 지수로 벡터를 만든다. 같은 차원이 반복되면 지수를 더한다.
    ///
    /// 지수는 `±i32::MAX` 범위여야 하며 벗어나면 `InvalidDimension`.
    pub fn from_exponents<I>(entries: I) -> Result<Self, UnitError>
    where
        I: IntoIterator<Item = (Dimension, i32)>,
    {
        Self::from_wide(entries.into_iter().map(|(d, e)| (d, i64::from(e))))
    }

    /// i64 로 합산한 뒤 i32 범위를 확인한다.
    fn from_wide<I>(entries: I) -> Result<Self, UnitError>
    where
        I: IntoIterator<Item = (Dimension, i64)>,
    {
        let mut sums: BTreeMap<Dimension, i64> = BTreeMap::new();
        for (dim, exp) in entries {
            let slot = sums.entry(dim).or_insert(0);
            *slot = slot
                .checked_add(exp)
                .ok_or_else(|| out_of_range(dim, exp))?;
        }
        let mut exponents = BTreeMap::new();
        for (dim, exp) in sums {
            if exp == 0 {
                continue;
            }
            if exp.abs() > MAX_EXPONENT {
                return Err(out_of_range(dim, exp));
            }
            exponents.insert(dim, exp as i32);
        }
        Ok(Self { exponents })
    }

    /// 실수 지수 맵으로 벡터를 만든다. 정수가 아니거나 범위를 벗어나면 `InvalidDimension`.
    pub fn from_map<I>(entries: I) -> Result<Self, UnitError>
    where
        I: IntoIterator<Item = (Dimension, f64)>,
    {
        let mut ints = Vec::new();
        for (dim, value) in entries {
            if !value.is_finite() || value.fract() != 0.0 {
                return Err(UnitError::InvalidDimension(format!(
                    "{}: {value}",
                    dim.name()
                )));
            }
            if value.abs() > MAX_EXPONENT as f64 {
                return Err(UnitError::InvalidDimension(format!(
                    "{}: {value} (범위 초과)",
                    dim.name()
                )));
            }
            ints.push((dim, value as i64));
        }
        Self::from_wide(ints)
    }

    pub fn exponent(&self, dim: Dimension) -> i32 {
        self.exponents.get(&dim).copied().unwrap_or(0)
    }

    /// 0이 아닌 항목을 차원 순서로 순회한다.
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, i32)> + '_ {
        self.exponents.iter().map(|(d, e)| (*d, *e))
    }

    pub fn is_empty(&self) -> bool {
        self.exponents.is_empty()
    }

    /// 항목별 합. 단위 곱셈에 쓴다.
    pub fn add(&self, other: &DimensionVector) -> Result<DimensionVector, UnitError> {
        Self::from_wide(
            self.iter()
                .chain(other.iter())
                .map(|(d, e)| (d, i64::from(e))),
        )
    }

    /// 항목별 부호 반전. 단위 나눗셈/역수에 쓴다.
    pub fn negate(&self) -> DimensionVector {
        // 지수가 ±i32::MAX 안에 있으므로 부호를 바꿔도 넘치지 않는다.
        Self {
            exponents: self.exponents.iter().map(|(d, e)| (*d, -e)).collect(),
        }
    }

    pub fn sub(&self, other: &DimensionVector) -> Result<DimensionVector, UnitError> {
        self.add(&other.negate())
    }

    /// 정수 배.
    pub fn scale(&self, k: i32) -> Result<DimensionVector, UnitError> {
        Self::from_wide(self.iter().map(|(d, e)| (d, i64::from(e) * i64::from(k))))
    }

    /// 실수 배. 결과 지수가 정수가 아니면 `NonIntegralDimension`,
    /// 범위를 벗어나면 `InvalidDimension`.
    pub fn scale_checked(&self, exponent: f64) -> Result<DimensionVector, UnitError> {
        let mut out = Vec::with_capacity(self.exponents.len());
        for (dim, e) in self.iter() {
            let scaled = e as f64 * exponent;
            let rounded = scaled.round();
            if !scaled.is_finite() || (scaled - rounded).abs() > 1e-9 {
                return Err(UnitError::NonIntegralDimension(format!(
                    "{}^{e} 의 {exponent} 제곱은 {scaled}",
                    dim.base_symbol()
                )));
            }
            if rounded.abs() > MAX_EXPONENT as f64 {
                return Err(UnitError::InvalidDimension(format!(
                    "{}^{e} 의 {exponent} 제곱은 {rounded} (범위 초과)",
                    dim.base_symbol()
                )));
            }
            out.push((dim, rounded as i64));
        }
        Self::from_wide(out)
    }

    /// 지수 제곱합. 단순화 탐색의 거리 척도로 쓴다.
    pub fn squared_magnitude(&self) -> i128 {
        self.iter().map(|(_, e)| i128::from(e) * i128::from(e)).sum()
    }

    pub fn dot(&self, other: &DimensionVector) -> i128 {
        self.iter()
            .map(|(d, e)| i128::from(e) * i128::from(other.exponent(d)))
            .sum()
    }

    pub fn is_orthogonal(&self, other: &DimensionVector) -> bool {
        self.dot(other) == 0
    }
}

impl TryFrom<BTreeMap<Dimension, f64>> for DimensionVector {
    type Error = UnitError;

    fn try_from(value: BTreeMap<Dimension, f64>) -> Result<Self, Self::Error> {
        DimensionVector::from_map(value)
    }
}

impl From<DimensionVector> for BTreeMap<Dimension, i32> {
    fn from(value: DimensionVector) -> Self {
        value.exponents
    }
}

/// 기본 단위 기호와 위첨자 지수로 출력한다. 예: `m²s⁻¹`
impl std::fmt::Display for DimensionVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (dim, exp) in self.iter() {
            f.write_str(dim.base_symbol())?;
            if exp != 1 {
                f.write_str(&superscript(i64::from(exp)))?;
            }
        }
        Ok(())
    }
}
