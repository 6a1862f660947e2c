//! 펀더멘털 점수 블록.
//!
//! 성장(0~40), 밸류에이션(0~35), 퀄리티(0~25) 세 블록을 계산합니다.
//! 각 블록은 (임계값, 점수) 티어 목록을 위에서부터 평가해 첫 매칭 티어의
//! 점수를 부여하는 방식이며, 누락된 지표는 0점 기여입니다.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use scorer_core::{FundamentalsSnapshot, GROWTH_CAP, QUALITY_CAP, VALUATION_CAP};

/// 값이 임계값을 초과하는 첫 티어의 점수를 반환합니다.
/// 티어는 임계값 내림차순으로 정렬되어 있어야 합니다.
fn tier_above(value: Decimal, tiers: &[(Decimal, u8)]) -> u8 {
    tiers
        .iter()
        .find(|(threshold, _)| value > *threshold)
        .map(|(_, points)| *points)
        .unwrap_or(0)
}

/// 값이 임계값 미만인 첫 티어의 점수를 반환합니다.
/// 티어는 임계값 오름차순으로 정렬되어 있어야 합니다.
fn tier_below(value: Decimal, tiers: &[(Decimal, u8)]) -> u8 {
    tiers
        .iter()
        .find(|(threshold, _)| value < *threshold)
        .map(|(_, points)| *points)
        .unwrap_or(0)
}

/// 성장 블록 (0~40).
///
/// 매출 성장률과 분기 이익 성장률이 각각 독립적으로 기여합니다.
pub fn growth_score(snapshot: &FundamentalsSnapshot) -> u8 {
    let mut score = 0u8;

    if let Some(revenue_growth) = snapshot.revenue_growth {
        score += tier_above(
            revenue_growth,
            &[(dec!(0.20), 15), (dec!(0.10), 10), (dec!(0.03), 5)],
        );
    }

    if let Some(earnings_growth) = snapshot.earnings_quarterly_growth {
        score += tier_above(
            earnings_growth,
            &[(dec!(0.20), 15), (dec!(0.10), 10), (dec!(0.05), 5)],
        );
    }

    score.min(GROWTH_CAP)
}

/// 밸류에이션 블록 (0~35).
///
/// 선행 PER, PEG 비율(양수일 때만), 목표가 대비 상승여력이 기여합니다.
/// 상승여력 = (목표가 - 현재가) / 현재가.
pub fn valuation_score(snapshot: &FundamentalsSnapshot, price: Decimal) -> u8 {
    let mut score = 0u8;

    if let Some(forward_pe) = snapshot.forward_pe {
        score += tier_below(
            forward_pe,
            &[(dec!(15), 10), (dec!(20), 7), (dec!(30), 3)],
        );
    }

    if let Some(peg) = snapshot.peg_ratio {
        if peg > Decimal::ZERO {
            score += tier_below(peg, &[(dec!(1.2), 10), (dec!(1.8), 7), (dec!(2.5), 3)]);
        }
    }

    if let Some(target) = snapshot.target_mean_price {
        if price > Decimal::ZERO {
            let upside = (target - price) / price;
            score += tier_above(
                upside,
                &[(dec!(0.25), 10), (dec!(0.10), 7), (Decimal::ZERO, 3)],
            );
        }
    }

    score.min(VALUATION_CAP)
}

/// 퀄리티 블록 (0~25).
///
/// ROE와 부채비율이 기여합니다.
pub fn quality_score(snapshot: &FundamentalsSnapshot) -> u8 {
    let mut score = 0u8;

    if let Some(roe) = snapshot.return_on_equity {
        score += tier_above(roe, &[(dec!(0.18), 10), (dec!(0.10), 7), (dec!(0.05), 3)]);
    }

    if let Some(debt) = snapshot.debt_to_equity {
        score += tier_below(debt, &[(dec!(0.30), 10), (dec!(0.70), 7), (dec!(1.20), 3)]);
    }

    score.min(QUALITY_CAP)
}
