//! 단순화 엔진이 참조하는 단위 목록.
//!
//! 프로세스 전역 기본 카탈로그는 `RwLock` 뒤에 둔다. 단순화 한 번은 읽기 잠금을
//! 잡은 채 끝까지 진행하므로 그동안 목록이 바뀌지 않는다. 테스트에서는
//! `Catalog::default_si()`/`Catalog::empty()`로 독립 인스턴스를 만들어 쓴다.

use std::sync::{OnceLock, PoisonError, RwLock};

use tracing::debug;

use crate::config::Config;
use crate::dimension::DimensionVector;
use crate::unit::Unit;
use crate::units::{base, electric, energy, force, power, pressure};

/// 카탈로그 한 항목. 등록 시점의 기호와 차원만 보관한다.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    symbol: String,
    vector: DimensionVector,
}

impl CatalogEntry {
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn vector(&self) -> &DimensionVector {
        &self.vector
    }
}

/// 우선순위 순서의 참조 단위 목록과 정확 일치 기호표.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    units: Vec<CatalogEntry>,
    overrides: Vec<(DimensionVector, String)>,
}

impl Catalog {
    /// 빈 카탈로그. 단순화 결과는 항상 기본 단위 기호가 된다.
    pub fn empty() -> Self {
        Self::default()
    }

    /// 기본 SI 카탈로그.
    ///
    /// 단위는 항상 그 역수보다 앞에 둔다(s 가 Hz 보다 앞). 거리가 같으면 먼저 나온
    /// 항목이 선택된다. Sv 는 넣지 않는다.
    pub fn default_si() -> Self {
        let mut catalog = Self::empty();
        for unit in [
            energy::joule(),
            power::watt(),
            force::newton(),
            pressure::pascal(),
            electric::coulomb(),
            electric::farad(),
            electric::volt(),
            electric::ohm(),
            electric::siemens(),
            electric::weber(),
            electric::tesla(),
            electric::henry(),
            base::kilogram(),
            base::meter(),
            base::ampere(),
            base::kelvin(),
            base::mole(),
            base::candela(),
            base::second(),
            electric::hertz(),
        ] {
            catalog.register_unit(&unit);
        }
        catalog
    }

    /// 목록 끝에 참조 단위를 추가한다. 기호가 없으면 기본 단위 기호로 적는다.
    pub fn register_unit(&mut self, unit: &Unit) {
        let symbol = match unit.explicit_symbol() {
            Some(sym) => sym.to_owned(),
            None => unit.vector().to_string(),
        };
        debug!(symbol = %symbol, vector = ?unit.vector(), "registered catalog unit");
        self.units.push(CatalogEntry {
            symbol,
            vector: unit.vector().clone(),
        });
    }

    /// 정확히 이 차원일 때 쓸 기호를 지정한다. 같은 차원이 있으면 교체한다.
    pub fn register_override(&mut self, vector: DimensionVector, literal: &str) {
        debug!(literal, vector = ?vector, "registered symbol override");
        match self.overrides.iter_mut().find(|(v, _)| *v == vector) {
            Some((_, sym)) => *sym = literal.to_owned(),
            None => self.overrides.push((vector, literal.to_owned())),
        }
    }

    pub fn units(&self) -> &[CatalogEntry] {
        &self.units
    }

    pub fn overrides(&self) -> &[(DimensionVector, String)] {
        &self.overrides
    }

    pub fn override_for(&self, vector: &DimensionVector) -> Option<&str> {
        self.overrides
            .iter()
            .find(|(v, _)| v == vector)
            .map(|(_, sym)| sym.as_str())
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// 설정 파일의 추가 단위와 기호표를 반영한다.
    pub fn apply_config(&mut self, config: &Config) {
        for entry in &config.catalog {
            self.register_unit(&entry.to_unit());
        }
        for entry in &config.overrides {
            self.register_override(entry.dimensions.clone(), &entry.symbol);
        }
    }
}

static DEFAULT_CATALOG: OnceLock<RwLock<Catalog>> = OnceLock::new();

fn default_catalog() -> &'static RwLock<Catalog> {
    DEFAULT_CATALOG.get_or_init(|| RwLock::new(Catalog::default_si()))
}

/// 기본 카탈로그를 읽기 잠금 상태로 넘겨준다.
pub fn with_default<R>(f: impl FnOnce(&Catalog) -> R) -> R {
    let guard = default_catalog()
        .read()
        .unwrap_or_else(PoisonError::into_inner);
    f(&guard)
}

/// 기본 카탈로그를 쓰기 잠금 상태로 넘겨준다.
pub fn with_default_mut<R>(f: impl FnOnce(&mut Catalog) -> R) -> R {
    let mut guard = default_catalog()
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    f(&mut guard)
}

/// 기본 카탈로그 끝에 참조 단위를 추가한다.
pub fn register_unit(unit: &Unit) {
    with_default_mut(|c| c.register_unit(unit));
}

/// 기본 카탈로그에 정확 일치 기호를 추가한다.
pub fn register_override(vector: DimensionVector, literal: &str) {
    with_default_mut(|c| c.register_override(vector, literal));
}
