//! 점수 시스템 전반에서 사용되는 공통 타입.

mod decimal;
mod ticker;

pub use decimal::*;
pub use ticker::*;
