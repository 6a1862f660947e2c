//! 기술적 지표 모듈.
//!
//! 점수 계산에 사용되는 기술적 지표를 제공합니다.
//!
//! # 지원 지표
//!
//! ## 추세 지표 (Trend Indicators)
//! - **SMA**: 단순 이동평균 (Simple Moving Average)
//! - **EMA**: 지수 이동평균 (Exponential Moving Average)
//! - **MACD**: 이동평균 수렴/확산 (Moving Average Convergence Divergence)
//!
//! ## 모멘텀 지표 (Momentum Indicators)
//! - **RSI**: 상대강도지수 (Relative Strength Index)
//!
//! 모든 함수는 입력 전체 히스토리에 대해 입력과 같은 길이로 정렬된 시계열을
//! 반환하며, 히스토리가 부족한 앞부분 인덱스는 `None`으로 표시합니다.
//! 입력 시계열은 절대 변경되지 않습니다.

pub mod momentum;
pub mod trend;

use thiserror::Error;

pub use momentum::{MomentumCalculator, RsiParams};
pub use trend::{EmaParams, MacdParams, MacdPoint, SmaParams, TrendIndicators};

/// 지표 계산 오류.
#[derive(Debug, Error)]
pub enum IndicatorError {
    /// 잘못된 파라미터
    #[error("잘못된 파라미터: {0}")]
    InvalidParameter(String),
}

/// 지표 계산 결과 타입.
pub type IndicatorResult<T> = Result<T, IndicatorError>;
