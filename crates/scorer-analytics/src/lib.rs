//! 지표 계산 및 투자 점수 엔진.
//!
//! 이 크레이트는 다음을 제공합니다:
//! - 기술적 지표 (SMA, EMA, RSI, MACD)
//! - 네 개 블록 점수 (기술 0~20, 성장 0~40, 밸류 0~35, 퀄리티 0~25)
//! - 블록 합계를 0~100으로 정규화하는 집계기
//!
//! # 사용 예시
//!
//! ```ignore
//! use scorer_analytics::InvestmentScorer;
//!
//! let scorer = InvestmentScorer::new();
//! let breakdown = scorer.score(&series, &snapshot)?;
//! println!("최종 점수: {}/100", breakdown.final_score);
//! ```

pub mod indicators;
pub mod scoring;

pub use indicators::{
    EmaParams, IndicatorError, IndicatorResult, MacdParams, MacdPoint, MomentumCalculator,
    RsiParams, SmaParams, TrendIndicators,
};
pub use scoring::{
    fundamentals::{growth_score, quality_score, valuation_score},
    technical::TechnicalScorer,
    InvestmentScorer, ScoreError, ScoreResult,
};
