//! 도메인 모델.
//!
//! 점수 계산에 필요한 도메인 엔티티를 정의합니다:
//! - `PriceSeries` - 일별 종가 시계열
//! - `FundamentalsSnapshot` - 펀더멘털 지표 스냅샷
//! - `ScoreBreakdown` - 블록별 점수와 최종 점수

pub mod fundamentals;
pub mod price_series;
pub mod score;

pub use fundamentals::*;
pub use price_series::*;
pub use score::*;
