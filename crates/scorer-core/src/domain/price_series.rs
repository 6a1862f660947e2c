//! 일별 종가 시계열.

use crate::types::Price;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 하루치 종가 데이터.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyClose {
    /// 거래일
    pub date: NaiveDate,
    /// 종가
    pub close: Price,
}

impl DailyClose {
    /// 새 종가 데이터를 생성합니다.
    pub fn new(date: NaiveDate, close: Price) -> Self {
        Self { date, close }
    }
}

/// 날짜 오름차순 일별 종가 시계열.
///
/// 제공자(provider)가 오름차순 정렬을 보장하는 것으로 간주하며,
/// 여기서 강제로 재정렬하지는 않습니다. 정렬 여부 확인이 필요하면
/// [`PriceSeries::is_chronological`]을 사용하세요.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    points: Vec<DailyClose>,
}

impl PriceSeries {
    /// 종가 목록으로 시계열을 생성합니다.
    pub fn new(points: Vec<DailyClose>) -> Self {
        Self { points }
    }

    /// 빈 시계열을 생성합니다.
    pub fn empty() -> Self {
        Self::default()
    }

    /// 데이터 개수를 반환합니다.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// 시계열이 비어 있는지 확인합니다.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// 전체 데이터를 반환합니다.
    pub fn points(&self) -> &[DailyClose] {
        &self.points
    }

    /// 종가만 모아 반환합니다.
    pub fn closes(&self) -> Vec<Decimal> {
        self.points.iter().map(|p| p.close).collect()
    }

    /// 가장 최근 종가를 반환합니다.
    pub fn last_close(&self) -> Option<Decimal> {
        self.points.last().map(|p| p.close)
    }

    /// 가장 최근 거래일을 반환합니다.
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.points.last().map(|p| p.date)
    }

    /// 날짜가 오름차순인지 확인합니다.
    pub fn is_chronological(&self) -> bool {
        self.points.windows(2).all(|w| w[0].date <= w[1].date)
    }
}

impl From<Vec<DailyClose>> for PriceSeries {
    fn from(points: Vec<DailyClose>) -> Self {
        Self::new(points)
    }
}
