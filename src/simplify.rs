//! 기호가 없는 단위를 카탈로그 단위의 조합으로 표현한다.
//!
//! 차원 벡터 공간에서 현재 잔여 벡터와 가장 가까운 카탈로그 단위(또는 그 역수)의
//! 거듭제곱을 하나씩 빼 나가는 탐욕적 분해이다. 거리는 지수 차의 제곱합을 쓴다.
//! 카탈로그 순서가 곧 우선순위이며, 거리가 같으면 먼저 나온 단위를 고른다.

use tracing::{trace, warn};

use crate::catalog::Catalog;
use crate::dimension::{Dimension, DimensionVector};

const SUPERSCRIPT_DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];
const SUPERSCRIPT_MINUS: char = '⁻';

/// 정수를 위첨자 문자열로 바꾼다. 예: -12 → `⁻¹²`
pub fn superscript(n: i64) -> String {
    let mut out = String::new();
    if n < 0 {
        out.push(SUPERSCRIPT_MINUS);
    }
    for ch in n.unsigned_abs().to_string().chars() {
        if let Some(d) = ch.to_digit(10) {
            out.push(SUPERSCRIPT_DIGITS[d as usize]);
        }
    }
    out
}

/// 분해 한 단계에서 빼낸 단위.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub symbol: String,
    /// 역수로 빼냈는지 여부
    pub inverted: bool,
    pub exponent: u64,
}

impl Token {
    fn signed_exponent(&self) -> i64 {
        let exp = self.exponent as i64;
        if self.inverted {
            -exp
        } else {
            exp
        }
    }
}

/// 차원 순서대로 나열한 지수 좌표. 곱과 제곱합이 넘치지 않도록 i128 을 쓴다.
type Coords = [i128; 7];

fn coords(vector: &DimensionVector) -> Coords {
    let mut out = [0; 7];
    for (dim, exp) in vector.iter() {
        out[dim.index()] = i128::from(exp);
    }
    out
}

fn dot(a: &Coords, b: &Coords) -> i128 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

fn is_zero(c: &Coords) -> bool {
    c.iter().all(|e| *e == 0)
}

/// 좌표를 벡터로 되돌린다. 지수 범위를 벗어나면 `None`.
fn to_vector(c: &Coords) -> Option<DimensionVector> {
    let mut entries = Vec::with_capacity(c.len());
    for (dim, exp) in Dimension::ALL.into_iter().zip(c) {
        entries.push((dim, i32::try_from(*exp).ok()?));
    }
    DimensionVector::from_exponents(entries).ok()
}

/// 한 후보에 대한 탐색 결과.
#[derive(Debug, Clone, Copy)]
struct Pick {
    index: usize,
    inverted: bool,
    exponent: u64,
    distance: i128,
}

/// `target - k·step` 의 제곱 거리가 가장 작은 k(≥ 1)와 그 거리.
///
/// 거리 |t|² − 2k(t·c) + k²|c|² 는 k 에 대한 이차식이므로 꼭짓점 (t·c)/|c|² 에
/// 가장 가까운 정수를 바로 구한다. 두 정수가 같은 거리면 작은 쪽을 고른다.
/// `step` 은 `target` 과 내적이 양수여야 한다.
fn search_exponent(target: &Coords, step: &Coords) -> (u64, i128) {
    let tt = dot(target, target);
    let tc = dot(target, step);
    let cc = dot(step, step);
    // k ≥ tc/cc − 1/2 인 가장 작은 정수
    let num = 2 * tc - cc;
    let den = 2 * cc;
    let k = if num <= 0 { 1 } else { (num + den - 1) / den };
    (k as u64, tt - 2 * k * tc + k * k * cc)
}

/// 한 단계에서 가장 가까운 후보를 고른다. 기본값은 카탈로그 첫 항목(k=1, 정방향).
fn closest(target: &Coords, units: &[Coords]) -> Option<Pick> {
    let first = units.first()?;
    let mut best = Pick {
        index: 0,
        inverted: false,
        exponent: 1,
        distance: dot(target, target) - 2 * dot(target, first) + dot(first, first),
    };
    for (index, vector) in units.iter().enumerate() {
        let tc = dot(target, vector);
        if tc == 0 {
            continue;
        }
        let inverted = tc < 0;
        let step = if inverted {
            vector.map(|e| -e)
        } else {
            *vector
        };
        let (exponent, distance) = search_exponent(target, &step);
        if distance < best.distance {
            best = Pick {
                index,
                inverted,
                exponent,
                distance,
            };
        }
    }
    Some(best)
}

/// 잔여 좌표를 기본 단위 기호로 그대로 토큰화한다.
fn raw_tokens(residual: &Coords) -> Vec<Token> {
    Dimension::ALL
        .into_iter()
        .zip(residual)
        .filter(|(_, exp)| **exp != 0)
        .map(|(dim, exp)| Token {
            symbol: dim.base_symbol().to_owned(),
            inverted: *exp < 0,
            exponent: exp.unsigned_abs() as u64,
        })
        .collect()
}

/// 차원 벡터를 카탈로그 단위 토큰열로 분해한다. 토큰 순서는 빼낸 순서이다.
pub fn decompose(vector: &DimensionVector, catalog: &Catalog) -> Vec<Token> {
    let units = catalog.units();
    let unit_coords: Vec<Coords> = units.iter().map(|e| coords(e.vector())).collect();
    let mut tokens = Vec::new();
    let mut residual = coords(vector);
    while !is_zero(&residual) {
        let literal = to_vector(&residual)
            .and_then(|v| catalog.override_for(&v).map(str::to_owned));
        if let Some(literal) = literal {
            tokens.push(Token {
                symbol: literal,
                inverted: false,
                exponent: 1,
            });
            return tokens;
        }
        let pick = match closest(&residual, &unit_coords) {
            Some(pick) if pick.distance < dot(&residual, &residual) => pick,
            _ => {
                if !units.is_empty() {
                    warn!(residual = ?residual, "no catalog unit reduces residual, using base symbols");
                }
                tokens.extend(raw_tokens(&residual));
                return tokens;
            }
        };
        let entry = &units[pick.index];
        let k = i128::from(pick.exponent);
        let sign = if pick.inverted { -1 } else { 1 };
        for (r, c) in residual.iter_mut().zip(&unit_coords[pick.index]) {
            *r -= sign * k * c;
        }
        trace!(
            symbol = entry.symbol(),
            inverted = pick.inverted,
            exponent = pick.exponent,
            distance = pick.distance,
            "factored out catalog unit"
        );
        tokens.push(Token {
            symbol: entry.symbol().to_owned(),
            inverted: pick.inverted,
            exponent: pick.exponent,
        });
    }
    tokens
}

/// 같은 기호의 토큰을 합치고 지수 0인 항목을 버린다. 처음 등장한 순서를 유지한다.
pub fn coalesce(tokens: &[Token]) -> Vec<(String, i64)> {
    let mut merged: Vec<(String, i64)> = Vec::new();
    for token in tokens {
        match merged.iter_mut().find(|(sym, _)| *sym == token.symbol) {
            Some((_, exp)) => *exp += token.signed_exponent(),
            None => merged.push((token.symbol.clone(), token.signed_exponent())),
        }
    }
    merged.retain(|(_, exp)| *exp != 0);
    merged
}

/// 합쳐진 토큰을 문자열로 만든다. 지수 1은 생략한다.
pub fn render(terms: &[(String, i64)]) -> String {
    let mut out = String::new();
    for (symbol, exp) in terms {
        out.push_str(symbol);
        if *exp != 1 {
            out.push_str(&superscript(*exp));
        }
    }
    out
}

/// 차원 벡터를 카탈로그 기준의 합성 단위 기호로 표현한다. 무차원이면 빈 문자열.
pub fn simplify(vector: &DimensionVector, catalog: &Catalog) -> String {
    if vector.is_empty() {
        return String::new();
    }
    render(&coalesce(&decompose(vector, catalog)))
}
