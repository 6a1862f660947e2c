//! 펀더멘털 지표 스냅샷.
//!
//! 성장성/밸류에이션/재무 건전성 지표를 담는 스냅샷입니다.
//! 모든 필드는 선택적(Optional)이며, 값이 없는 지표는 "신호 없음"으로
//! 취급됩니다. "지표가 정확히 0"과 "지표를 알 수 없음"을 구분하기 위해
//! 0 같은 센티널 값 대신 `Option`을 사용합니다.

use crate::types::Ratio;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 한 종목의 펀더멘털 지표 스냅샷.
///
/// 직렬화 키는 데이터 제공자의 원본 키(camelCase)를 따릅니다.
/// 알 수 없는 키는 역직렬화 시 무시됩니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FundamentalsSnapshot {
    /// 매출 성장률 (YoY, 0.1 = 10%)
    pub revenue_growth: Option<Ratio>,
    /// 분기 순이익 성장률 (YoY)
    pub earnings_quarterly_growth: Option<Ratio>,
    /// 선행 PER
    #[serde(rename = "forwardPE")]
    pub forward_pe: Option<Decimal>,
    /// PEG 비율
    pub peg_ratio: Option<Decimal>,
    /// 애널리스트 평균 목표가
    pub target_mean_price: Option<Decimal>,
    /// ROE (자기자본이익률)
    pub return_on_equity: Option<Ratio>,
    /// 부채비율 (부채/자본)
    pub debt_to_equity: Option<Decimal>,
}

impl FundamentalsSnapshot {
    /// 모든 지표가 비어 있는지 확인합니다.
    pub fn is_empty(&self) -> bool {
        self.revenue_growth.is_none()
            && self.earnings_quarterly_growth.is_none()
            && self.forward_pe.is_none()
            && self.peg_ratio.is_none()
            && self.target_mean_price.is_none()
            && self.return_on_equity.is_none()
            && self.debt_to_equity.is_none()
    }

    /// 매출 성장률을 설정합니다.
    pub fn with_revenue_growth(mut self, value: Ratio) -> Self {
        self.revenue_growth = Some(value);
        self
    }

    /// 분기 순이익 성장률을 설정합니다.
    pub fn with_earnings_quarterly_growth(mut self, value: Ratio) -> Self {
        self.earnings_quarterly_growth = Some(value);
        self
    }

    /// 선행 PER을 설정합니다.
    pub fn with_forward_pe(mut self, value: Decimal) -> Self {
        self.forward_pe = Some(value);
        self
    }

    /// PEG 비율을 설정합니다.
    pub fn with_peg_ratio(mut self, value: Decimal) -> Self {
        self.peg_ratio = Some(value);
        self
    }

    /// 목표가를 설정합니다.
    pub fn with_target_mean_price(mut self, value: Decimal) -> Self {
        self.target_mean_price = Some(value);
        self
    }

    /// ROE를 설정합니다.
    pub fn with_return_on_equity(mut self, value: Ratio) -> Self {
        self.return_on_equity = Some(value);
        self
    }

    /// 부채비율을 설정합니다.
    pub fn with_debt_to_equity(mut self, value: Decimal) -> Self {
        self.debt_to_equity = Some(value);
        self
    }
}
