//! 추세 지표 (Trend Indicators).
//!
//! 이동평균 기반의 추세 지표들을 제공합니다.
//! - SMA (Simple Moving Average)
//! - EMA (Exponential Moving Average)
//! - MACD (Moving Average Convergence Divergence)

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::{IndicatorError, IndicatorResult};

/// SMA 파라미터.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SmaParams {
    /// 이동평균 기간.
    pub period: usize,
}

impl Default for SmaParams {
    fn default() -> Self {
        Self { period: 20 }
    }
}

/// EMA 파라미터.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EmaParams {
    /// 평활 구간 (smoothing factor = 2 / (span + 1)).
    pub span: usize,
}

impl Default for EmaParams {
    fn default() -> Self {
        Self { span: 12 }
    }
}

/// MACD 파라미터.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MacdParams {
    /// 단기 EMA 구간 (기본: 12).
    pub fast_span: usize,
    /// 장기 EMA 구간 (기본: 26).
    pub slow_span: usize,
    /// 시그널 라인 구간 (기본: 9).
    pub signal_span: usize,
}

impl Default for MacdParams {
    fn default() -> Self {
        Self {
            fast_span: 12,
            slow_span: 26,
            signal_span: 9,
        }
    }
}

/// 한 시점의 MACD 값.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MacdPoint {
    /// MACD 라인 (단기 EMA - 장기 EMA).
    pub macd: Decimal,
    /// 시그널 라인 (MACD 라인의 EMA).
    pub signal: Decimal,
    /// 히스토그램 (MACD - 시그널).
    pub histogram: Decimal,
}

/// 추세 지표 계산기.
#[derive(Debug, Default)]
pub struct TrendIndicators;

impl TrendIndicators {
    /// 새로운 추세 지표 계산기 생성.
    pub fn new() -> Self {
        Self
    }

    /// 단순 이동평균 (SMA) 계산.
    ///
    /// SMA = (P1 + P2 + ... + Pn) / n
    ///
    /// 각 인덱스에서 직전 `period`개 데이터의 산술 평균을 계산합니다.
    /// 데이터가 `period`개 미만인 앞부분 인덱스는 `None`입니다.
    pub fn sma(
        &self,
        prices: &[Decimal],
        params: SmaParams,
    ) -> IndicatorResult<Vec<Option<Decimal>>> {
        let period = params.period;

        if period == 0 {
            return Err(IndicatorError::InvalidParameter(
                "기간은 0보다 커야 합니다".to_string(),
            ));
        }

        let mut result = Vec::with_capacity(prices.len());
        let period_decimal = Decimal::from(period);

        for i in 0..prices.len() {
            if i < period - 1 {
                result.push(None);
            } else {
                let sum: Decimal = prices[i + 1 - period..=i].iter().sum();
                result.push(Some(sum / period_decimal));
            }
        }

        Ok(result)
    }

    /// 지수 이동평균 (EMA) 계산.
    ///
    /// EMA = (현재가 × α) + (이전 EMA × (1 - α)), α = 2 / (span + 1)
    ///
    /// 첫 EMA는 첫 번째 데이터 값 자체로 시작합니다 (별도의 SMA 워밍업 없음,
    /// pandas `ewm(span, adjust=False)`과 동일). 따라서 모든 인덱스에서 값이
    /// 정의됩니다.
    pub fn ema(&self, prices: &[Decimal], params: EmaParams) -> IndicatorResult<Vec<Decimal>> {
        let span = params.span;

        if span == 0 {
            return Err(IndicatorError::InvalidParameter(
                "구간은 0보다 커야 합니다".to_string(),
            ));
        }

        let mut result = Vec::with_capacity(prices.len());
        if prices.is_empty() {
            return Ok(result);
        }

        let alpha = dec!(2) / Decimal::from(span + 1);
        let one_minus_alpha = Decimal::ONE - alpha;

        let mut prev_ema = prices[0];
        result.push(prev_ema);

        for price in prices.iter().skip(1) {
            let ema = (*price * alpha) + (prev_ema * one_minus_alpha);
            result.push(ema);
            prev_ema = ema;
        }

        Ok(result)
    }

    /// MACD 계산.
    ///
    /// MACD 라인 = 단기 EMA - 장기 EMA
    /// 시그널 라인 = MACD 라인의 EMA
    /// 히스토그램 = MACD 라인 - 시그널 라인
    ///
    /// EMA가 전 구간에서 정의되므로 MACD도 입력과 같은 길이로
    /// 전 구간에서 정의됩니다.
    pub fn macd(&self, prices: &[Decimal], params: MacdParams) -> IndicatorResult<Vec<MacdPoint>> {
        let fast_ema = self.ema(prices, EmaParams { span: params.fast_span })?;
        let slow_ema = self.ema(prices, EmaParams { span: params.slow_span })?;

        let macd_line: Vec<Decimal> = fast_ema
            .iter()
            .zip(slow_ema.iter())
            .map(|(fast, slow)| fast - slow)
            .collect();

        let signal_line = self.ema(&macd_line, EmaParams { span: params.signal_span })?;

        let result = macd_line
            .iter()
            .zip(signal_line.iter())
            .map(|(macd, signal)| MacdPoint {
                macd: *macd,
                signal: *signal,
                histogram: macd - signal,
            })
            .collect();

        Ok(result)
    }
}
