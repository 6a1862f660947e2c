//! 모멘텀 지표 (Momentum Indicators).
//!
//! 가격 모멘텀과 과매수/과매도 상태를 측정하는 지표를 제공합니다.
//! - RSI (Relative Strength Index)

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::{IndicatorError, IndicatorResult};

/// RSI 파라미터.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RsiParams {
    /// RSI 기간 (기본: 14).
    pub period: usize,
}

impl Default for RsiParams {
    fn default() -> Self {
        Self { period: 14 }
    }
}

/// 모멘텀 지표 계산기.
#[derive(Debug, Default)]
pub struct MomentumCalculator;

impl MomentumCalculator {
    /// 새로운 모멘텀 계산기 생성.
    pub fn new() -> Self {
        Self
    }

    /// RSI (Relative Strength Index) 계산.
    ///
    /// RSI = 100 - (100 / (1 + RS))
    /// RS = 평균 상승폭 / 평균 하락폭
    ///
    /// 상승폭/하락폭의 평균은 직전 `period`개 변화량의 단순 산술 평균입니다
    /// (pandas `rolling(period).mean()` 방식).
    ///
    /// 값이 정의되려면 `period + 1`개 이상의 데이터가 필요하므로
    /// 인덱스 `period` 이전은 `None`입니다.
    ///
    /// 경계 조건은 나눗셈 오류 대신 명시적으로 처리합니다:
    /// - 평균 하락폭이 0이고 평균 상승폭이 양수이면 RSI = 100 (포화)
    /// - 평균 상승폭과 평균 하락폭이 모두 0(횡보 구간)이면 RSI = 50 (중립)
    pub fn rsi(
        &self,
        prices: &[Decimal],
        params: RsiParams,
    ) -> IndicatorResult<Vec<Option<Decimal>>> {
        let period = params.period;

        if period == 0 {
            return Err(IndicatorError::InvalidParameter(
                "기간은 0보다 커야 합니다".to_string(),
            ));
        }

        let n = prices.len();
        let mut result = Vec::with_capacity(n);
        if n == 0 {
            return Ok(result);
        }

        // 가격 인덱스에 맞춘 상승/하락폭 (인덱스 0은 변화량 없음)
        let mut gains = vec![Decimal::ZERO; n];
        let mut losses = vec![Decimal::ZERO; n];
        for i in 1..n {
            let change = prices[i] - prices[i - 1];
            if change > Decimal::ZERO {
                gains[i] = change;
            } else {
                losses[i] = -change;
            }
        }

        let period_decimal = Decimal::from(period);

        for i in 0..n {
            // 변화량 period개가 모이려면 가격이 period+1개 필요
            if i < period {
                result.push(None);
                continue;
            }

            let window = i + 1 - period..=i;
            let mean_gain: Decimal =
                gains[window.clone()].iter().sum::<Decimal>() / period_decimal;
            let mean_loss: Decimal = losses[window].iter().sum::<Decimal>() / period_decimal;

            let rsi = if mean_loss.is_zero() && mean_gain.is_zero() {
                // 횡보 구간은 중립
                dec!(50)
            } else if mean_loss.is_zero() {
                dec!(100)
            } else {
                let rs = mean_gain / mean_loss;
                dec!(100) - (dec!(100) / (Decimal::ONE + rs))
            };

            result.push(Some(rsi));
        }

        Ok(result)
    }
}
