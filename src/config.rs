use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::dimension::DimensionVector;
use crate::error::UnitError;
use crate::unit::Unit;

/// 출력 형식 설정.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// 물리량 출력 시 소수점 이하 자릿수. 없으면 반올림하지 않는다.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digits: Option<u32>,
}

/// 정확히 이 차원일 때 쓸 기호.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverrideEntry {
    pub symbol: String,
    pub dimensions: DimensionVector,
}

/// 기본 카탈로그 뒤에 덧붙일 참조 단위.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogUnitEntry {
    pub symbol: String,
    pub dimensions: DimensionVector,
    /// SI 기준 단위 대비 배율
    #[serde(default = "unit_factor")]
    pub factor: f64,
}

fn unit_factor() -> f64 {
    1.0
}

impl CatalogUnitEntry {
    pub fn to_unit(&self) -> Unit {
        Unit::new(self.dimensions.clone(), Some(&self.symbol), self.factor, 0.0)
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub catalog: Vec<CatalogUnitEntry>,
    pub overrides: Vec<OverrideEntry>,
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
    /// 설정 값이 단위로서 성립하지 않음
    Unit(UnitError),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ConfigError::Serde(e) => write!(f, "설정 파싱 오류: {e}"),
            ConfigError::Serialize(e) => write!(f, "설정 직렬화 오류: {e}"),
            ConfigError::Unit(e) => write!(f, "설정 단위 오류: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

impl From<UnitError> for ConfigError {
    fn from(value: UnitError) -> Self {
        ConfigError::Unit(value)
    }
}

impl Config {
    /// 설정 파일을 읽는다. 파일이 없으면 `Io` 오류.
    pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// 설정 파일을 로드하거나 없으면 기본 설정을 생성해 저장한다.
    pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
        if path.exists() {
            Self::load_from(path)
        } else {
            let cfg = Config::default();
            cfg.save(path)?;
            Ok(cfg)
        }
    }

    /// 설정을 `path`에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// 추가 단위는 배율이 0이 아닌 유한값이어야 하고, 기호표 항목은 무차원일 수 없다.
    fn validate(&self) -> Result<(), UnitError> {
        for entry in &self.catalog {
            if !entry.factor.is_finite() || entry.factor == 0.0 {
                return Err(UnitError::ArithmeticType(format!(
                    "{} 의 배율 {} 는 사용할 수 없습니다.",
                    entry.symbol, entry.factor
                )));
            }
            if entry.dimensions.is_empty() {
                return Err(UnitError::InvalidDimension(format!(
                    "{} 는 무차원 단위입니다.",
                    entry.symbol
                )));
            }
        }
        if let Some(entry) = self.overrides.iter().find(|e| e.dimensions.is_empty()) {
            return Err(UnitError::InvalidDimension(format!(
                "{} 는 무차원 기호표 항목입니다.",
                entry.symbol
            )));
        }
        Ok(())
    }
}
