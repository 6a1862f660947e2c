//! 투자 점수 계산 명령어.
//!
//! 데이터 수집 → 점수 계산 → 출력의 전체 흐름을 담당합니다.
//! 시세가 전혀 없는 종목은 점수 계산 없이 "데이터 없음"으로 종료합니다.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde_json::json;
use tracing::info;

use scorer_analytics::InvestmentScorer;
use scorer_core::{
    AppConfig, ScoreBreakdown, Ticker, GROWTH_CAP, QUALITY_CAP, TECHNICAL_CAP, VALUATION_CAP,
};
use scorer_data::{MarketDataProvider, YahooProvider};

/// score 명령어 인자.
pub struct ScoreArgs {
    pub symbol: String,
    pub lookback_days: Option<u32>,
    pub json: bool,
    pub config: Option<String>,
}

/// 종목의 투자 점수를 계산하고 출력합니다.
pub async fn run_score(args: ScoreArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => AppConfig::load(path).with_context(|| format!("설정 로드 실패: {}", path))?,
        None => AppConfig::load_default().context("기본 설정 로드 실패")?,
    };

    let ticker = Ticker::new(&args.symbol)?;
    let lookback_days = args.lookback_days.unwrap_or(config.data.lookback_days);

    let provider =
        YahooProvider::with_timeout(Duration::from_secs(config.data.request_timeout_secs))?;

    let history = match provider.daily_history(&ticker, lookback_days).await {
        Ok(series) => series,
        Err(e) if e.is_no_data() => {
            bail!("{} 종목의 시세 데이터를 찾을 수 없습니다", ticker);
        }
        Err(e) => return Err(e).context("시세 조회 실패"),
    };
    info!(%ticker, points = history.len(), lookback_days, "시세 수신 완료");

    let snapshot = provider
        .snapshot(&ticker)
        .await
        .context("펀더멘털 조회 실패")?;

    let scorer = InvestmentScorer::with_config(config.scoring.clone());
    let breakdown = scorer.score(&history, &snapshot)?;

    if args.json {
        let output = json!({
            "ticker": ticker,
            "score": breakdown,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_breakdown(&ticker, &breakdown);
    }

    Ok(())
}

/// 블록별 점수와 최종 점수를 표 형태로 출력합니다.
fn print_breakdown(ticker: &Ticker, breakdown: &ScoreBreakdown) {
    println!();
    println!("{} 투자 점수", ticker);
    println!("---------------------------");
    println!("성장      {:>3} / {}", breakdown.growth, GROWTH_CAP);
    println!("밸류      {:>3} / {}", breakdown.valuation, VALUATION_CAP);
    println!("퀄리티    {:>3} / {}", breakdown.quality, QUALITY_CAP);
    println!("기술      {:>3} / {}", breakdown.technical, TECHNICAL_CAP);
    println!("---------------------------");
    println!("최종      {} / 100", breakdown.final_score);
}
