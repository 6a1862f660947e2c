//! 데이터 Provider 모듈.
//!
//! 점수 엔진의 핵심은 I/O를 하지 않으므로, 외부 데이터 수집은 이 모듈의
//! Provider가 담당합니다.
//!
//! ## Yahoo Finance
//! - `YahooProvider`: chart API(v8)로 일별 종가, quoteSummary API(v10)로
//!   펀더멘털 지표 수집

pub mod yahoo;

use async_trait::async_trait;
use scorer_core::{FundamentalsSnapshot, PriceSeries, Ticker};

use crate::error::DataResult;

pub use yahoo::YahooProvider;

/// 시장 데이터 제공자 계약.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// 최근 `lookback_days`일 동안의 일별 종가를 날짜 오름차순으로 반환합니다.
    ///
    /// 데이터가 전혀 없으면 [`crate::DataError::NoData`]를 반환합니다.
    async fn daily_history(&self, ticker: &Ticker, lookback_days: u32) -> DataResult<PriceSeries>;

    /// 펀더멘털 스냅샷을 반환합니다.
    ///
    /// 인식되는 지표 중 일부 또는 전부가 없을 수 있으며, 없는 지표는
    /// `None`으로 채워집니다 (에러가 아님).
    async fn snapshot(&self, ticker: &Ticker) -> DataResult<FundamentalsSnapshot>;
}
