//! 설정 관리.
//!
//! 이 모듈은 애플리케이션 설정을 정의하고 관리합니다.
//! TOML 파일에서 로드한 뒤 `SCORER__` 접두사 환경 변수로 오버라이드합니다.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// 애플리케이션 설정.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// 로깅 설정
    pub logging: LoggingConfig,
    /// 데이터 수집 설정
    pub data: DataConfig,
    /// 점수 계산 설정
    pub scoring: ScoringConfig,
}

/// 로깅 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 로그 레벨
    pub level: String,
    /// 로그 형식 (pretty, json, compact)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

/// 데이터 수집 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DataConfig {
    /// 과거 시세 조회 기간 (일 단위)
    pub lookback_days: u32,
    /// HTTP 요청 타임아웃 (초)
    pub request_timeout_secs: u64,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            lookback_days: 365,
            request_timeout_secs: 10,
        }
    }
}

/// 점수 계산 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// 기술적 점수에 필요한 최소 데이터 개수 (거래일)
    pub min_history: usize,
    /// RSI 기간
    pub rsi_period: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            min_history: 200,
            rsi_period: 14,
        }
    }
}

impl AppConfig {
    /// 파일과 환경 변수에서 설정을 로드합니다.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // 파일에서 로드
            .add_source(config::File::from(path.as_ref()))
            // 환경 변수로 오버라이드 (예: SCORER__DATA__LOOKBACK_DAYS=500)
            .add_source(
                config::Environment::with_prefix("SCORER")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// 기본 경로에서 설정을 로드합니다. 파일이 없으면 기본값을 사용합니다.
    pub fn load_default() -> Result<Self, config::ConfigError> {
        let path = Path::new("config/default.toml");
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}
