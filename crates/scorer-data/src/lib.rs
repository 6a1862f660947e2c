//! # Scorer Data
//!
//! 시장 데이터 수집 크레이트.
//!
//! 점수 엔진이 필요로 하는 두 가지 데이터를 제공합니다:
//! - 일별 종가 히스토리 (`PriceSeries`)
//! - 펀더멘털 스냅샷 (`FundamentalsSnapshot`)
//!
//! [`MarketDataProvider`] 트레이트가 제공자 계약을 정의하며,
//! 기본 구현으로 Yahoo Finance 기반 [`YahooProvider`]를 제공합니다.

pub mod error;
pub mod provider;

pub use error::{DataError, DataResult};
pub use provider::{MarketDataProvider, YahooProvider};
