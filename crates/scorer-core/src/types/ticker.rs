//! 티커 심볼 정의.
//!
//! 거래소에 상장된 종목을 식별하는 티커 심볼을 정의합니다.
//! 예: `AAPL`, `MSFT`, `005930.KS`, `BRK-B`.

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 상장 종목을 나타내는 티커 심볼.
///
/// 생성 시 대문자로 정규화되며, 영숫자와 `.`, `-`, `^`만 허용됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ticker(String);

impl Ticker {
    /// 새 티커를 생성합니다.
    pub fn new(raw: impl AsRef<str>) -> CoreResult<Self> {
        let symbol = raw.as_ref().trim().to_uppercase();

        if symbol.is_empty() {
            return Err(CoreError::InvalidTicker("빈 심볼".to_string()));
        }

        let valid = symbol
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '^'));
        if !valid {
            return Err(CoreError::InvalidTicker(format!(
                "허용되지 않는 문자 포함: {}",
                symbol
            )));
        }

        Ok(Self(symbol))
    }

    /// 심볼 문자열을 반환합니다.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Ticker {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticker_normalization() {
        let ticker = Ticker::new(" aapl ").unwrap();
        assert_eq!(ticker.as_str(), "AAPL");
    }

    #[test]
    fn test_ticker_with_suffix() {
        assert!(Ticker::new("005930.KS").is_ok());
        assert!(Ticker::new("BRK-B").is_ok());
        assert!(Ticker::new("^GSPC").is_ok());
    }

    #[test]
    fn test_invalid_ticker() {
        assert!(Ticker::new("").is_err());
        assert!(Ticker::new("   ").is_err());
        assert!(Ticker::new("AA PL").is_err());
        assert!(Ticker::new("AAPL/USD").is_err());
    }
}
