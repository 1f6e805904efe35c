//! 분해 설정 (JSON)

use serde::{Deserialize, Serialize};

/// 설정 JSON 파싱/직렬화 에러
#[derive(Debug)]
pub enum ConfigError {
    /// JSON 파싱/직렬화 실패
    ParseError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ParseError(s) => write!(f, "설정 JSON 오류: {}", s),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::ParseError(e.to_string())
    }
}

/// 분해 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SplitConfig {
    /// 음절 그룹에 복합 자모 펼침 결과를 함께 담을지
    #[serde(default = "default_expand_compounds")]
    pub expand_compounds: bool,
}

fn default_expand_compounds() -> bool {
    false
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            expand_compounds: default_expand_compounds(),
        }
    }
}

impl SplitConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_expand_compounds(mut self, expand: bool) -> Self {
        self.expand_compounds = expand;
        self
    }

    /// JSON 문자열에서 설정 생성 (없는 필드는 기본값)
    pub fn from_json(json_str: &str) -> Result<Self, ConfigError> {
        let config = serde_json::from_str(json_str).map_err(|e| {
            log::warn!("설정 JSON 파싱 실패: {}", e);
            ConfigError::from(e)
        })?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }
}
