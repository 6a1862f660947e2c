//! # Scorer Core
//!
//! 주식 투자 점수 시스템의 핵심 도메인 모델 및 타입을 제공합니다.
//!
//! 이 크레이트는 점수 시스템 전반에서 사용되는 기본 타입을 제공합니다:
//! - 일별 종가 시계열 (`PriceSeries`)
//! - 펀더멘털 스냅샷 (`FundamentalsSnapshot`)
//! - 점수 결과 (`ScoreBreakdown`)
//! - 티커 심볼 정의
//! - 설정 관리
//! - 로깅 인프라

pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod types;

pub use config::*;
pub use domain::*;
pub use error::*;
pub use logging::*;
pub use types::*;
