//! 점수 결과 타입.
//!
//! 네 개의 독립 블록 점수(기술 0~20, 성장 0~40, 밸류 0~35, 퀄리티 0~25)와
//! 이를 0~100으로 정규화한 최종 점수를 담습니다.

use crate::types::DecimalExt;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 기술적 점수 상한.
pub const TECHNICAL_CAP: u8 = 20;
/// 성장 점수 상한.
pub const GROWTH_CAP: u8 = 40;
/// 밸류에이션 점수 상한.
pub const VALUATION_CAP: u8 = 35;
/// 퀄리티 점수 상한.
pub const QUALITY_CAP: u8 = 25;
/// 네 블록 합계의 최대값 (20 + 40 + 35 + 25).
pub const MAX_RAW_TOTAL: u8 = TECHNICAL_CAP + GROWTH_CAP + VALUATION_CAP + QUALITY_CAP;

/// 블록별 점수와 최종 점수.
///
/// 최종 점수는 네 블록 합계의 순수 함수로,
/// `round(100 * (technical + growth + valuation + quality) / 120, 2)`입니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// 기술적 점수 (0~20)
    pub technical: u8,
    /// 성장 점수 (0~40)
    pub growth: u8,
    /// 밸류에이션 점수 (0~35)
    pub valuation: u8,
    /// 퀄리티 점수 (0~25)
    pub quality: u8,
    /// 최종 점수 (0~100, 소수점 2자리)
    #[serde(rename = "final")]
    pub final_score: Decimal,
}

impl ScoreBreakdown {
    /// 블록 점수들로부터 결과를 생성합니다.
    ///
    /// 각 블록은 상한으로 클램프됩니다. 채점 규칙상 상한을 넘을 수 없으므로
    /// 클램프는 안전장치일 뿐입니다.
    pub fn from_blocks(technical: u8, growth: u8, valuation: u8, quality: u8) -> Self {
        let technical = technical.min(TECHNICAL_CAP);
        let growth = growth.min(GROWTH_CAP);
        let valuation = valuation.min(VALUATION_CAP);
        let quality = quality.min(QUALITY_CAP);

        let raw_total = u32::from(technical) + u32::from(growth) + u32::from(valuation) + u32::from(quality);
        let final_score = (Decimal::from(100) * Decimal::from(raw_total)
            / Decimal::from(MAX_RAW_TOTAL))
        .round_half_up(2);

        Self {
            technical,
            growth,
            valuation,
            quality,
            final_score,
        }
    }

    /// 네 블록 점수의 합계(0~120)를 반환합니다.
    pub fn raw_total(&self) -> u32 {
        u32::from(self.technical)
            + u32::from(self.growth)
            + u32::from(self.valuation)
            + u32::from(self.quality)
    }
}
