//! 기술적 점수 블록 (0~20).
//!
//! 네 개 구성 요소의 합으로 계산됩니다:
//! - 추세 (0~6): 최근 종가와 20/50/200일 이동평균 비교
//! - 모멘텀 (0~6): RSI 밴드 + MACD/시그널 관계
//! - 돌파 (0~4): 최근 3개월(63 거래일) 고가 대비 위치
//! - 센티먼트 (0~4): RSI 밴드
//!
//! 히스토리가 최소 길이(기본 200 거래일)보다 짧으면 부분 점수 없이
//! 즉시 0을 반환합니다.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use scorer_core::{PriceSeries, ScoringConfig};
use tracing::debug;

use super::ScoreResult;
use crate::indicators::{
    MacdParams, MacdPoint, MomentumCalculator, RsiParams, SmaParams, TrendIndicators,
};

/// 단기 이동평균 기간.
const MA_SHORT: usize = 20;
/// 중기 이동평균 기간.
const MA_MID: usize = 50;
/// 장기 이동평균 기간.
const MA_LONG: usize = 200;
/// 돌파 판정에 사용하는 3개월 구간 (거래일).
const BREAKOUT_WINDOW: usize = 63;

/// 기술적 점수 계산기.
#[derive(Debug)]
pub struct TechnicalScorer {
    min_history: usize,
    rsi_period: usize,
}

impl TechnicalScorer {
    /// 기본 설정(최소 200일, RSI 14)으로 계산기를 생성합니다.
    pub fn new() -> Self {
        Self::with_config(&ScoringConfig::default())
    }

    /// 설정으로부터 계산기를 생성합니다.
    pub fn with_config(config: &ScoringConfig) -> Self {
        Self {
            min_history: config.min_history,
            rsi_period: config.rsi_period,
        }
    }

    /// 기술적 점수(0~20)를 계산합니다.
    pub fn score(&self, series: &PriceSeries) -> ScoreResult<u8> {
        if series.len() < self.min_history || series.is_empty() {
            debug!(
                provided = series.len(),
                required = self.min_history,
                "히스토리 부족, 기술 점수 0"
            );
            return Ok(0);
        }

        let closes = series.closes();
        let last = *closes.last().expect("위에서 비어 있지 않음을 확인");

        let trend = TrendIndicators::new();
        let last_sma = |period: usize| -> ScoreResult<Option<Decimal>> {
            Ok(trend
                .sma(&closes, SmaParams { period })?
                .last()
                .copied()
                .flatten())
        };

        let ma_short = last_sma(MA_SHORT)?;
        let ma_mid = last_sma(MA_MID)?;
        let ma_long = last_sma(MA_LONG)?;

        let rsi = MomentumCalculator::new()
            .rsi(&closes, RsiParams { period: self.rsi_period })?
            .last()
            .copied()
            .flatten();
        let macd = trend
            .macd(&closes, MacdParams::default())?
            .last()
            .copied();

        let high_3m = closes[closes.len().saturating_sub(BREAKOUT_WINDOW)..]
            .iter()
            .max()
            .copied();

        let trend_points = trend_points(last, ma_short, ma_mid, ma_long);
        let momentum_points = momentum_points(rsi, macd);
        let breakout_points = breakout_points(last, high_3m, ma_mid);
        let sentiment_points = sentiment_points(rsi);

        debug!(
            trend = trend_points,
            momentum = momentum_points,
            breakout = breakout_points,
            sentiment = sentiment_points,
            "기술 점수 구성 요소"
        );

        Ok(trend_points + momentum_points + breakout_points + sentiment_points)
    }
}

impl Default for TechnicalScorer {
    fn default() -> Self {
        Self::new()
    }
}

/// 종가가 이동평균보다 엄격히 위에 있는지 확인합니다. 동률은 "위"가 아닙니다.
fn above(price: Decimal, ma: Option<Decimal>) -> bool {
    ma.is_some_and(|m| price > m)
}

/// 추세 점수 (0~6).
fn trend_points(
    last: Decimal,
    ma_short: Option<Decimal>,
    ma_mid: Option<Decimal>,
    ma_long: Option<Decimal>,
) -> u8 {
    if above(last, ma_short) && above(last, ma_mid) && above(last, ma_long) {
        6
    } else if above(last, ma_mid) && above(last, ma_long) {
        4
    } else if above(last, ma_long) {
        2
    } else {
        0
    }
}

/// 모멘텀 점수 (0~6).
fn momentum_points(rsi: Option<Decimal>, macd: Option<MacdPoint>) -> u8 {
    let Some(rsi) = rsi else { return 0 };

    let macd_bullish = macd.is_some_and(|point| point.macd > point.signal);
    if rsi >= dec!(50) && rsi <= dec!(65) && macd_bullish {
        6
    } else if rsi >= dec!(40) && rsi < dec!(50) {
        3
    } else {
        0
    }
}

/// 돌파 점수 (0~4).
fn breakout_points(last: Decimal, high_3m: Option<Decimal>, ma_mid: Option<Decimal>) -> u8 {
    if high_3m.is_some_and(|high| last >= high) {
        4
    } else if above(last, ma_mid) {
        2
    } else {
        0
    }
}

/// 센티먼트 점수 (0~4), RSI 밴드만 사용.
fn sentiment_points(rsi: Option<Decimal>) -> u8 {
    let Some(rsi) = rsi else { return 0 };

    if rsi >= dec!(50) && rsi <= dec!(70) {
        4
    } else if rsi >= dec!(40) && rsi < dec!(50) {
        3
    } else if rsi >= dec!(30) && rsi < dec!(40) {
        1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};
    use scorer_core::DailyClose;

    fn series_from_closes(closes: Vec<Decimal>) -> PriceSeries {
        let start = NaiveDate::from_ymd_opt(2023, 1, 2).unwrap();
        let points = closes
            .into_iter()
            .enumerate()
            .map(|(i, close)| DailyClose::new(start + Duration::days(i as i64), close))
            .collect();
        PriceSeries::new(points)
    }

    #[test]
    fn test_short_history_scores_zero() {
        let scorer = TechnicalScorer::new();
        let series = series_from_closes((0..199).map(Decimal::from).collect());
        assert_eq!(scorer.score(&series).unwrap(), 0);
    }

    #[test]
    fn test_flat_series() {
        let scorer = TechnicalScorer::new();
        let series = series_from_closes(vec![dec!(100); 220]);

        // 추세: 동률은 "위"가 아님 → 0
        // 모멘텀: RSI 50이지만 MACD == 시그널 → 0
        // 돌파: 최근 종가 == 3개월 최고가 → 4
        // 센티먼트: RSI 50 → 4
        assert_eq!(scorer.score(&series).unwrap(), 8);
    }

    #[test]
    fn test_strong_uptrend() {
        let scorer = TechnicalScorer::new();
        let series = series_from_closes((1..=250).map(Decimal::from).collect());

        // 추세: 모든 이동평균 위 → 6
        // 모멘텀: RSI 100은 밴드 밖 → 0
        // 돌파: 신고가 → 4
        // 센티먼트: RSI 100은 밴드 밖 → 0
        assert_eq!(scorer.score(&series).unwrap(), 10);
    }

    #[test]
    fn test_downtrend_scores_zero() {
        let scorer = TechnicalScorer::new();
        let series = series_from_closes((1..=250).rev().map(Decimal::from).collect());

        // 모든 이동평균 아래, RSI 0, 신저가 → 0
        assert_eq!(scorer.score(&series).unwrap(), 0);
    }

    #[test]
    fn test_trend_points_tie_is_not_above() {
        let ma = Some(dec!(100));
        assert_eq!(trend_points(dec!(100), ma, ma, ma), 0);
        assert_eq!(trend_points(dec!(100.01), ma, ma, ma), 6);
    }

    #[test]
    fn test_trend_points_partial() {
        // 50/200일선 위, 20일선 아래 → 4
        assert_eq!(
            trend_points(dec!(100), Some(dec!(101)), Some(dec!(99)), Some(dec!(95))),
            4
        );
        // 200일선 위만 → 2
        assert_eq!(
            trend_points(dec!(100), Some(dec!(101)), Some(dec!(102)), Some(dec!(95))),
            2
        );
    }

    #[test]
    fn test_momentum_points_bands() {
        let bullish = Some(MacdPoint {
            macd: dec!(1),
            signal: dec!(0.5),
            histogram: dec!(0.5),
        });
        let bearish = Some(MacdPoint {
            macd: dec!(-1),
            signal: dec!(0.5),
            histogram: dec!(-1.5),
        });

        // RSI 경계: 50은 상단 밴드에 포함
        assert_eq!(momentum_points(Some(dec!(50)), bullish), 6);
        assert_eq!(momentum_points(Some(dec!(65)), bullish), 6);
        assert_eq!(momentum_points(Some(dec!(50)), bearish), 0);
        assert_eq!(momentum_points(Some(dec!(45)), bearish), 3);
        assert_eq!(momentum_points(Some(dec!(49.9)), bullish), 3);
        assert_eq!(momentum_points(Some(dec!(66)), bullish), 0);
        assert_eq!(momentum_points(None, bullish), 0);
    }

    #[test]
    fn test_breakout_points() {
        // 3개월 고가 이상 → 4 (동률 포함)
        assert_eq!(breakout_points(dec!(100), Some(dec!(100)), Some(dec!(90))), 4);
        // 고가 아래지만 50일선 위 → 2
        assert_eq!(breakout_points(dec!(95), Some(dec!(100)), Some(dec!(90))), 2);
        assert_eq!(breakout_points(dec!(85), Some(dec!(100)), Some(dec!(90))), 0);
    }

    #[test]
    fn test_sentiment_points_bands() {
        assert_eq!(sentiment_points(Some(dec!(50))), 4);
        assert_eq!(sentiment_points(Some(dec!(70))), 4);
        assert_eq!(sentiment_points(Some(dec!(49.9))), 3);
        assert_eq!(sentiment_points(Some(dec!(40))), 3);
        assert_eq!(sentiment_points(Some(dec!(39.9))), 1);
        assert_eq!(sentiment_points(Some(dec!(30))), 1);
        assert_eq!(sentiment_points(Some(dec!(29.9))), 0);
        assert_eq!(sentiment_points(Some(dec!(70.1))), 0);
        assert_eq!(sentiment_points(None), 0);
    }
}
