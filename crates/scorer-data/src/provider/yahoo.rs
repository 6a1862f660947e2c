//! Yahoo Finance Provider.
//!
//! 두 개의 공개 엔드포인트를 사용합니다:
//! - chart API (v8): 일별 종가 히스토리
//! - quoteSummary API (v10): 펀더멘털 지표
//!   (`financialData` + `defaultKeyStatistics` 모듈)
//!
//! 지표 값은 변환 없이 그대로 전달합니다. 해석(티어 판정)은 점수 엔진의
//! 책임입니다.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use reqwest::Client;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::time::Duration as StdDuration;
use tracing::{debug, warn};

use scorer_core::{DailyClose, FundamentalsSnapshot, PriceSeries, Ticker};

use crate::error::{DataError, DataResult};
use crate::provider::MarketDataProvider;

const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Yahoo Finance 기반 시장 데이터 제공자.
pub struct YahooProvider {
    client: Client,
    base_url: String,
}

impl YahooProvider {
    /// 기본 설정으로 제공자를 생성합니다.
    pub fn new() -> DataResult<Self> {
        Self::with_timeout(StdDuration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// 요청 타임아웃을 지정하여 제공자를 생성합니다.
    pub fn with_timeout(timeout: StdDuration) -> DataResult<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// 베이스 URL을 바꿉니다 (테스트용).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl MarketDataProvider for YahooProvider {
    async fn daily_history(&self, ticker: &Ticker, lookback_days: u32) -> DataResult<PriceSeries> {
        let end = Utc::now();
        let start = end - Duration::days(i64::from(lookback_days));

        let url = format!(
            "{}/v8/finance/chart/{}?period1={}&period2={}&interval=1d&events=history",
            self.base_url,
            ticker,
            start.timestamp(),
            end.timestamp()
        );
        debug!(%ticker, %url, "일별 종가 요청");

        let body = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        let response: ChartResponse = serde_json::from_str(&body)
            .map_err(|e| DataError::Parse(format!("chart 응답 파싱 실패: {}", e)))?;

        if let Some(error) = response.chart.error {
            return Err(DataError::Api {
                code: error.code,
                description: error.description,
            });
        }

        let result = response
            .chart
            .result
            .and_then(|r| r.into_iter().next())
            .ok_or_else(|| DataError::NoData {
                ticker: ticker.to_string(),
            })?;

        let series = build_series(result);
        if series.is_empty() {
            return Err(DataError::NoData {
                ticker: ticker.to_string(),
            });
        }

        debug!(%ticker, points = series.len(), "일별 종가 수신");
        Ok(series)
    }

    async fn snapshot(&self, ticker: &Ticker) -> DataResult<FundamentalsSnapshot> {
        let url = format!(
            "{}/v10/finance/quoteSummary/{}?modules=financialData%2CdefaultKeyStatistics",
            self.base_url, ticker
        );
        debug!(%ticker, %url, "펀더멘털 스냅샷 요청");

        let body = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        let response: QuoteSummaryResponse = serde_json::from_str(&body)
            .map_err(|e| DataError::Parse(format!("quoteSummary 응답 파싱 실패: {}", e)))?;

        if let Some(error) = response.quote_summary.error {
            return Err(DataError::Api {
                code: error.code,
                description: error.description,
            });
        }

        let result = response
            .quote_summary
            .result
            .and_then(|r| r.into_iter().next());

        let Some(result) = result else {
            // 히스토리와 달리 스냅샷 부재는 에러가 아님: 지표 없는 종목도
            // 기술 점수만으로 채점 가능
            warn!(%ticker, "펀더멘털 데이터 없음, 빈 스냅샷 사용");
            return Ok(FundamentalsSnapshot::default());
        };

        Ok(build_snapshot(result))
    }
}

fn build_series(result: ChartResult) -> PriceSeries {
    let timestamps = result.timestamp.unwrap_or_default();
    let quote_closes = result
        .indicators
        .quote
        .into_iter()
        .next()
        .and_then(|q| q.close)
        .unwrap_or_default();

    // 조정 종가가 있으면 우선 사용
    let adj_closes = result
        .indicators
        .adj_close
        .and_then(|ac| ac.into_iter().next())
        .and_then(|ac| ac.adj_close);
    let closes = adj_closes.unwrap_or(quote_closes);

    let points = timestamps
        .iter()
        .zip(closes.iter())
        .filter_map(|(ts, close)| {
            let close = close.and_then(Decimal::from_f64)?;
            let date = DateTime::from_timestamp(*ts, 0)?.date_naive();
            Some(DailyClose::new(date, close))
        })
        .collect();

    PriceSeries::new(points)
}

fn build_snapshot(result: QuoteSummaryResult) -> FundamentalsSnapshot {
    let financial = result.financial_data.unwrap_or_default();
    let stats = result.default_key_statistics.unwrap_or_default();

    FundamentalsSnapshot {
        revenue_growth: raw_decimal(&financial.revenue_growth),
        earnings_quarterly_growth: raw_decimal(&stats.earnings_quarterly_growth),
        forward_pe: raw_decimal(&stats.forward_pe),
        peg_ratio: raw_decimal(&stats.peg_ratio),
        target_mean_price: raw_decimal(&financial.target_mean_price),
        return_on_equity: raw_decimal(&financial.return_on_equity),
        debt_to_equity: raw_decimal(&financial.debt_to_equity),
    }
}

fn raw_decimal(value: &Option<RawValue>) -> Option<Decimal> {
    value
        .as_ref()
        .and_then(|v| v.raw)
        .and_then(Decimal::from_f64)
}

// ==================== Yahoo Finance 응답 구조 ====================

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: Chart,
}

#[derive(Debug, Deserialize)]
struct Chart {
    result: Option<Vec<ChartResult>>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    timestamp: Option<Vec<i64>>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    quote: Vec<Quote>,
    #[serde(rename = "adjclose")]
    adj_close: Option<Vec<AdjClose>>,
}

#[derive(Debug, Deserialize)]
struct Quote {
    close: Option<Vec<Option<f64>>>,
}

#[derive(Debug, Deserialize)]
struct AdjClose {
    #[serde(rename = "adjclose")]
    adj_close: Option<Vec<Option<f64>>>,
}

#[derive(Debug, Deserialize)]
struct QuoteSummaryResponse {
    #[serde(rename = "quoteSummary")]
    quote_summary: QuoteSummary,
}

#[derive(Debug, Deserialize)]
struct QuoteSummary {
    result: Option<Vec<QuoteSummaryResult>>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct QuoteSummaryResult {
    #[serde(rename = "financialData")]
    financial_data: Option<FinancialData>,
    #[serde(rename = "defaultKeyStatistics")]
    default_key_statistics: Option<DefaultKeyStatistics>,
}

#[derive(Debug, Default, Deserialize)]
struct FinancialData {
    #[serde(rename = "revenueGrowth")]
    revenue_growth: Option<RawValue>,
    #[serde(rename = "targetMeanPrice")]
    target_mean_price: Option<RawValue>,
    #[serde(rename = "returnOnEquity")]
    return_on_equity: Option<RawValue>,
    #[serde(rename = "debtToEquity")]
    debt_to_equity: Option<RawValue>,
}

#[derive(Debug, Default, Deserialize)]
struct DefaultKeyStatistics {
    #[serde(rename = "forwardPE")]
    forward_pe: Option<RawValue>,
    #[serde(rename = "pegRatio")]
    peg_ratio: Option<RawValue>,
    #[serde(rename = "earningsQuarterlyGrowth")]
    earnings_quarterly_growth: Option<RawValue>,
}

/// Yahoo의 `{raw, fmt}` 값 래퍼. `raw`만 사용합니다.
#[derive(Debug, Deserialize)]
struct RawValue {
    raw: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn ticker(symbol: &str) -> Ticker {
        Ticker::new(symbol).unwrap()
    }

    async fn provider_for(server: &mockito::ServerGuard) -> YahooProvider {
        YahooProvider::new().unwrap().with_base_url(server.url())
    }

    #[tokio::test]
    async fn test_daily_history_parsing() {
        let mut server = mockito::Server::new_async().await;
        let body = r#"{
            "chart": {
                "result": [{
                    "timestamp": [1704153600, 1704240000, 1704326400],
                    "indicators": {
                        "quote": [{"close": [184.2, null, 186.0]}],
                        "adjclose": [{"adjclose": [183.9, null, 185.7]}]
                    }
                }],
                "error": null
            }
        }"#;
        let mock = server
            .mock("GET", mockito::Matcher::Regex(r"^/v8/finance/chart/AAPL".to_string()))
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body(body)
            .create_async()
            .await;

        let provider = provider_for(&server).await;
        let series = provider.daily_history(&ticker("AAPL"), 30).await.unwrap();

        mock.assert_async().await;
        // null인 날은 건너뛰고 조정 종가를 사용
        assert_eq!(series.len(), 2);
        assert_eq!(series.last_close(), Some(dec!(185.7)));
        assert!(series.is_chronological());
    }

    #[tokio::test]
    async fn test_daily_history_no_data() {
        let mut server = mockito::Server::new_async().await;
        let body = r#"{"chart": {"result": null, "error": null}}"#;
        server
            .mock("GET", mockito::Matcher::Regex(r"^/v8/finance/chart/".to_string()))
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body(body)
            .create_async()
            .await;

        let provider = provider_for(&server).await;
        let result = provider.daily_history(&ticker("NOPE"), 30).await;

        assert!(matches!(result, Err(DataError::NoData { .. })));
    }

    #[tokio::test]
    async fn test_daily_history_api_error() {
        let mut server = mockito::Server::new_async().await;
        let body = r#"{
            "chart": {
                "result": null,
                "error": {"code": "Not Found", "description": "No data found, symbol may be delisted"}
            }
        }"#;
        server
            .mock("GET", mockito::Matcher::Regex(r"^/v8/finance/chart/".to_string()))
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body(body)
            .create_async()
            .await;

        let provider = provider_for(&server).await;
        let result = provider.daily_history(&ticker("GONE"), 30).await;

        assert!(matches!(result, Err(DataError::Api { .. })));
    }

    #[tokio::test]
    async fn test_snapshot_parsing() {
        let mut server = mockito::Server::new_async().await;
        let body = r#"{
            "quoteSummary": {
                "result": [{
                    "financialData": {
                        "revenueGrowth": {"raw": 0.152, "fmt": "15.20%"},
                        "targetMeanPrice": {"raw": 210.5, "fmt": "210.50"},
                        "returnOnEquity": {"raw": 0.31, "fmt": "31.00%"},
                        "debtToEquity": {"raw": 176.35, "fmt": "176.35"}
                    },
                    "defaultKeyStatistics": {
                        "forwardPE": {"raw": 21.3, "fmt": "21.30"},
                        "pegRatio": {"raw": 1.4, "fmt": "1.40"},
                        "earningsQuarterlyGrowth": {"raw": null}
                    }
                }],
                "error": null
            }
        }"#;
        server
            .mock("GET", mockito::Matcher::Regex(r"^/v10/finance/quoteSummary/AAPL".to_string()))
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body(body)
            .create_async()
            .await;

        let provider = provider_for(&server).await;
        let snapshot = provider.snapshot(&ticker("AAPL")).await.unwrap();

        assert_eq!(snapshot.revenue_growth, Some(dec!(0.152)));
        assert_eq!(snapshot.target_mean_price, Some(dec!(210.5)));
        assert_eq!(snapshot.forward_pe, Some(dec!(21.3)));
        // raw가 null이면 지표 없음
        assert_eq!(snapshot.earnings_quarterly_growth, None);
        // 부채비율은 변환 없이 그대로
        assert_eq!(snapshot.debt_to_equity, Some(dec!(176.35)));
    }

    #[tokio::test]
    async fn test_snapshot_missing_result_is_empty() {
        let mut server = mockito::Server::new_async().await;
        let body = r#"{"quoteSummary": {"result": null, "error": null}}"#;
        server
            .mock("GET", mockito::Matcher::Regex(r"^/v10/finance/quoteSummary/".to_string()))
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body(body)
            .create_async()
            .await;

        let provider = provider_for(&server).await;
        let snapshot = provider.snapshot(&ticker("ETF1")).await.unwrap();

        assert!(snapshot.is_empty());
    }
}
