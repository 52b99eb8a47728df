//! SI 접두어 (quecto ~ quetta).

use serde::{Deserialize, Serialize};

/// SI 접두어.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Prefix {
    Quecto,
    Ronto,
    Yocto,
    Zepto,
    Atto,
    Femto,
    Pico,
    Nano,
    Micro,
    Milli,
    Centi,
    Deci,
    Deca,
    Hecto,
    Kilo,
    Mega,
    Giga,
    Tera,
    Peta,
    Exa,
    Zetta,
    Yotta,
    Ronna,
    Quetta,
}

impl Prefix {
    pub const ALL: [Prefix; 24] = [
        Prefix::Quecto,
        Prefix::Ronto,
        Prefix::Yocto,
        Prefix::Zepto,
        Prefix::Atto,
        Prefix::Femto,
        Prefix::Pico,
        Prefix::Nano,
        Prefix::Micro,
        Prefix::Milli,
        Prefix::Centi,
        Prefix::Deci,
        Prefix::Deca,
        Prefix::Hecto,
        Prefix::Kilo,
        Prefix::Mega,
        Prefix::Giga,
        Prefix::Tera,
        Prefix::Peta,
        Prefix::Exa,
        Prefix::Zetta,
        Prefix::Yotta,
        Prefix::Ronna,
        Prefix::Quetta,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            Prefix::Quecto => "q",
            Prefix::Ronto => "r",
            Prefix::Yocto => "y",
            Prefix::Zepto => "z",
            Prefix::Atto => "a",
            Prefix::Femto => "f",
            Prefix::Pico => "p",
            Prefix::Nano => "n",
            Prefix::Micro => "μ",
            Prefix::Milli => "m",
            Prefix::Centi => "c",
            Prefix::Deci => "d",
            Prefix::Deca => "da",
            Prefix::Hecto => "h",
            Prefix::Kilo => "k",
            Prefix::Mega => "M",
            Prefix::Giga => "G",
            Prefix::Tera => "T",
            Prefix::Peta => "P",
            Prefix::Exa => "E",
            Prefix::Zetta => "Z",
            Prefix::Yotta => "Y",
            Prefix::Ronna => "R",
            Prefix::Quetta => "Q",
        }
    }

    /// 10의 지수.
    pub fn exponent(self) -> i32 {
        match self {
            Prefix::Quecto => -30,
            Prefix::Ronto => -27,
            Prefix::Yocto => -24,
            Prefix::Zepto => -21,
            Prefix::Atto => -18,
            Prefix::Femto => -15,
            Prefix::Pico => -12,
            Prefix::Nano => -9,
            Prefix::Micro => -6,
            Prefix::Milli => -3,
            Prefix::Centi => -2,
            Prefix::Deci => -1,
            Prefix::Deca => 1,
            Prefix::Hecto => 2,
            Prefix::Kilo => 3,
            Prefix::Mega => 6,
            Prefix::Giga => 9,
            Prefix::Tera => 12,
            Prefix::Peta => 15,
            Prefix::Exa => 18,
            Prefix::Zetta => 21,
            Prefix::Yotta => 24,
            Prefix::Ronna => 27,
            Prefix::Quetta => 30,
        }
    }

    /// 배율. 리터럴로 적어 `1e-3` 등이 정확히 같은 값이 되게 한다.
    pub fn factor(self) -> f64 {
        match self {
            Prefix::Quecto => 1e-30,
            Prefix::Ronto => 1e-27,
            Prefix::Yocto => 1e-24,
            Prefix::Zepto => 1e-21,
            Prefix::Atto => 1e-18,
            Prefix::Femto => 1e-15,
            Prefix::Pico => 1e-12,
            Prefix::Nano => 1e-9,
            Prefix::Micro => 1e-6,
            Prefix::Milli => 1e-3,
            Prefix::Centi => 1e-2,
            Prefix::Deci => 1e-1,
            Prefix::Deca => 1e1,
            Prefix::Hecto => 1e2,
            Prefix::Kilo => 1e3,
            Prefix::Mega => 1e6,
            Prefix::Giga => 1e9,
            Prefix::Tera => 1e12,
            Prefix::Peta => 1e15,
            Prefix::Exa => 1e18,
            Prefix::Zetta => 1e21,
            Prefix::Yotta => 1e24,
            Prefix::Ronna => 1e27,
            Prefix::Quetta => 1e30,
        }
    }

    /// 지수로 접두어를 찾는다. 접두어가 없는 지수는 `None`.
    pub fn from_exponent(exponent: i32) -> Option<Prefix> {
        Prefix::ALL.into_iter().find(|p| p.exponent() == exponent)
    }
}
