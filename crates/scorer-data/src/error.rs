//! 데이터 수집 에러 타입.

use thiserror::Error;

/// 데이터 제공자 에러.
#[derive(Debug, Error)]
pub enum DataError {
    /// HTTP 요청 실패
    #[error("HTTP 요청 실패: {0}")]
    Http(#[from] reqwest::Error),

    /// 응답 파싱 실패
    #[error("응답 파싱 실패: {0}")]
    Parse(String),

    /// 데이터 제공자 API 에러
    #[error("API 에러: {code} - {description}")]
    Api { code: String, description: String },

    /// 해당 티커의 데이터 없음
    #[error("데이터 없음: {ticker}")]
    NoData { ticker: String },
}

/// 데이터 작업을 위한 Result 타입.
pub type DataResult<T> = Result<T, DataError>;

impl DataError {
    /// "데이터 없음" 조건인지 확인합니다.
    ///
    /// 호출자는 이 경우 점수 계산을 건너뛰어야 합니다.
    pub fn is_no_data(&self) -> bool {
        matches!(self, DataError::NoData { .. })
    }
}
