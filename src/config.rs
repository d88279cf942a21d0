use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::category::Category;
use crate::session::DEFAULT_DECIMAL_PLACES;

/// 기본 설정 파일 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 허용하는 최대 표시 소수 자릿수.
pub const MAX_DECIMAL_PLACES: usize = 12;

/// 애플리케이션 설정을 표현한다. 화면 모드와 변환 기록은 저장하지 않는다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 메뉴에서 엔터만 입력했을 때 쓰는 변환 종류
    pub default_category: Category,
    /// 결과와 기록에 표시하는 소수 자릿수
    pub decimal_places: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_category: Category::Length,
            decimal_places: DEFAULT_DECIMAL_PLACES,
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// 값 범위 오류
    #[error("잘못된 설정 값: {0}")]
    Invalid(String),
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.decimal_places > MAX_DECIMAL_PLACES {
            return Err(ConfigError::Invalid(format!(
                "decimal_places={} (최대 {MAX_DECIMAL_PLACES})",
                self.decimal_places
            )));
        }
        Ok(())
    }

    /// 설정을 지정한 경로에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        self.validate()?;
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        tracing::info!(path = %path.display(), "config saved");
        Ok(())
    }
}

/// 설정 파일을 로드한다. 파일이 없으면 기본 설정을 쓰되 파일은 만들지 않는다.
pub fn load_or_builtin(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        read_config(path)
    } else {
        Ok(Config::default())
    }
}

fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path)?;
    let cfg: Config = toml::from_str(&content)?;
    cfg.validate()?;
    tracing::info!(path = %path.display(), "config loaded");
    Ok(cfg)
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        read_config(path)
    } else {
        let cfg = Config::default();
        cfg.save(path)?;
        Ok(cfg)
    }
}
