//! 투자 점수 엔진.
//!
//! 네 개의 독립 블록을 계산하고 합계를 0~100으로 정규화합니다:
//!
//! | 블록 | 범위 | 입력 |
//! |---|---|---|
//! | 기술 (Technical) | 0~20 | 일별 종가 시계열 |
//! | 성장 (Growth) | 0~40 | 매출/분기 이익 성장률 |
//! | 밸류 (Valuation) | 0~35 | 선행 PER, PEG, 목표가 대비 상승여력 |
//! | 퀄리티 (Quality) | 0~25 | ROE, 부채비율 |
//!
//! 최종 점수 = round(100 × 블록 합계 / 120, 2)

pub mod fundamentals;
pub mod technical;

use scorer_core::{FundamentalsSnapshot, PriceSeries, ScoreBreakdown, ScoringConfig};
use thiserror::Error;
use tracing::debug;

use crate::indicators::IndicatorError;
use fundamentals::{growth_score, quality_score, valuation_score};
use technical::TechnicalScorer;

/// 점수 계산 오류.
#[derive(Debug, Error)]
pub enum ScoreError {
    /// 빈 시계열. 호출자는 "데이터 없음"으로 처리하고 점수 계산을 건너뛰어야 함
    #[error("가격 데이터 없음: 빈 시계열로는 점수를 계산할 수 없습니다")]
    EmptySeries,

    /// 지표 계산 오류
    #[error("지표 계산 실패: {0}")]
    Indicator(#[from] IndicatorError),
}

/// 점수 계산 결과 타입.
pub type ScoreResult<T> = Result<T, ScoreError>;

/// 투자 점수 계산기.
///
/// 입력(시계열, 스냅샷)만으로 결정되는 순수 계산이며 호출 간 상태를
/// 공유하지 않습니다. 여러 종목을 병렬로 계산해도 안전합니다.
#[derive(Debug, Default)]
pub struct InvestmentScorer {
    config: ScoringConfig,
}

impl InvestmentScorer {
    /// 기본 설정으로 계산기를 생성합니다.
    pub fn new() -> Self {
        Self::default()
    }

    /// 지정한 설정으로 계산기를 생성합니다.
    pub fn with_config(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// 시계열과 펀더멘털 스냅샷으로부터 점수를 계산합니다.
    ///
    /// 누락된 펀더멘털 지표는 0점 기여로 처리되며 에러가 아닙니다.
    /// 시계열이 최소 길이보다 짧으면 기술 점수는 0입니다.
    ///
    /// # 에러
    ///
    /// 빈 시계열이 들어오면 [`ScoreError::EmptySeries`]를 반환합니다.
    /// 밸류에이션 블록이 최근 종가를 필요로 하므로 호출자가 먼저
    /// "데이터 없음"을 걸러내야 합니다.
    pub fn score(
        &self,
        series: &PriceSeries,
        snapshot: &FundamentalsSnapshot,
    ) -> ScoreResult<ScoreBreakdown> {
        let last_price = series.last_close().ok_or(ScoreError::EmptySeries)?;

        let technical = TechnicalScorer::with_config(&self.config).score(series)?;
        let growth = growth_score(snapshot);
        let valuation = valuation_score(snapshot, last_price);
        let quality = quality_score(snapshot);

        debug!(
            technical,
            growth, valuation, quality, "블록 점수 계산 완료"
        );

        Ok(ScoreBreakdown::from_blocks(technical, growth, valuation, quality))
    }
}
