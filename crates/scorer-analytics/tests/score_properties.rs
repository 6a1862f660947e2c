//! 점수 엔진 속성 테스트 (proptest).
//!
//! 임의 입력에 대해 상한/단조성/포화 같은 불변 조건을 검증합니다.

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use scorer_analytics::{growth_score, quality_score, valuation_score, TechnicalScorer};
use scorer_analytics::{MomentumCalculator, RsiParams};
use scorer_core::{
    DailyClose, FundamentalsSnapshot, PriceSeries, ScoreBreakdown, GROWTH_CAP, QUALITY_CAP,
    VALUATION_CAP,
};

fn flat_series(len: usize, price: Decimal) -> PriceSeries {
    let start = NaiveDate::from_ymd_opt(2023, 1, 2).unwrap();
    let points = (0..len)
        .map(|i| DailyClose::new(start + Duration::days(i as i64), price))
        .collect();
    PriceSeries::new(points)
}

/// 1/100 단위 스케일 정수를 Decimal로 변환 (예: 25 → 0.25).
fn hundredths(value: i64) -> Decimal {
    Decimal::new(value, 2)
}

proptest! {
    /// 성장 점수는 매출 성장률에 대해 단조 비감소.
    #[test]
    fn growth_monotone_in_revenue_growth(
        a in -100i64..300,
        b in -100i64..300,
        earnings in proptest::option::of(-100i64..300),
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };

        let base = match earnings {
            Some(e) => FundamentalsSnapshot::default().with_earnings_quarterly_growth(hundredths(e)),
            None => FundamentalsSnapshot::default(),
        };
        let snapshot_lo = base.clone().with_revenue_growth(hundredths(lo));
        let snapshot_hi = base.with_revenue_growth(hundredths(hi));

        prop_assert!(growth_score(&snapshot_lo) <= growth_score(&snapshot_hi));
    }

    /// 성장 점수는 분기 이익 성장률에 대해서도 단조 비감소.
    #[test]
    fn growth_monotone_in_earnings_growth(
        a in -100i64..300,
        b in -100i64..300,
        revenue in proptest::option::of(-100i64..300),
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };

        let base = match revenue {
            Some(r) => FundamentalsSnapshot::default().with_revenue_growth(hundredths(r)),
            None => FundamentalsSnapshot::default(),
        };
        let snapshot_lo = base.clone().with_earnings_quarterly_growth(hundredths(lo));
        let snapshot_hi = base.with_earnings_quarterly_growth(hundredths(hi));

        prop_assert!(growth_score(&snapshot_lo) <= growth_score(&snapshot_hi));
    }

    /// 극단적인 입력에도 각 블록은 상한을 넘지 않는다.
    #[test]
    fn blocks_never_exceed_caps(
        revenue in proptest::option::of(-1_000_000i64..1_000_000),
        earnings in proptest::option::of(-1_000_000i64..1_000_000),
        pe in proptest::option::of(-1_000_000i64..1_000_000),
        peg in proptest::option::of(-1_000_000i64..1_000_000),
        target in proptest::option::of(0i64..100_000_000),
        roe in proptest::option::of(-1_000_000i64..1_000_000),
        debt in proptest::option::of(-1_000_000i64..1_000_000),
        price in 1i64..10_000_000,
    ) {
        let mut snapshot = FundamentalsSnapshot::default();
        snapshot.revenue_growth = revenue.map(hundredths);
        snapshot.earnings_quarterly_growth = earnings.map(hundredths);
        snapshot.forward_pe = pe.map(hundredths);
        snapshot.peg_ratio = peg.map(hundredths);
        snapshot.target_mean_price = target.map(hundredths);
        snapshot.return_on_equity = roe.map(hundredths);
        snapshot.debt_to_equity = debt.map(hundredths);

        prop_assert!(growth_score(&snapshot) <= GROWTH_CAP);
        prop_assert!(valuation_score(&snapshot, hundredths(price)) <= VALUATION_CAP);
        prop_assert!(quality_score(&snapshot) <= QUALITY_CAP);
    }

    /// 최종 점수는 항상 [0, 100]이고 블록 합계에 대해 단조.
    #[test]
    fn final_score_in_range_and_monotone(
        t1 in 0u8..=20, g1 in 0u8..=40, v1 in 0u8..=35, q1 in 0u8..=25,
        t2 in 0u8..=20, g2 in 0u8..=40, v2 in 0u8..=35, q2 in 0u8..=25,
    ) {
        let first = ScoreBreakdown::from_blocks(t1, g1, v1, q1);
        let second = ScoreBreakdown::from_blocks(t2, g2, v2, q2);

        prop_assert!(first.final_score >= Decimal::ZERO);
        prop_assert!(first.final_score <= dec!(100));

        // 합계가 크면 최종 점수도 크거나 같다
        if first.raw_total() <= second.raw_total() {
            prop_assert!(first.final_score <= second.final_score);
        }
        if first.raw_total() == second.raw_total() {
            prop_assert_eq!(first.final_score, second.final_score);
        }
    }

    /// 200일 미만 히스토리는 항상 기술 점수 0.
    #[test]
    fn technical_is_zero_below_min_history(
        len in 0usize..200,
        price in 1i64..1_000_000,
    ) {
        let scorer = TechnicalScorer::new();
        let series = flat_series(len, hundredths(price));
        prop_assert_eq!(scorer.score(&series).unwrap(), 0);
    }

    /// 엄격히 상승하는 시계열의 RSI는 100으로 포화.
    #[test]
    fn rsi_saturates_on_strict_uptrend(
        len in 15usize..250,
        start in 1i64..1000,
        step in 1i64..50,
    ) {
        let prices: Vec<Decimal> = (0..len as i64)
            .map(|i| Decimal::from(start + i * step))
            .collect();

        let rsi = MomentumCalculator::new()
            .rsi(&prices, RsiParams::default())
            .unwrap();
        prop_assert_eq!(rsi.last().copied().flatten(), Some(dec!(100)));
    }
}
