//! 투자 점수 CLI.
//!
//! # 사용 예시
//!
//! ```bash
//! # 애플 투자 점수 계산
//! scorer score -s AAPL
//!
//! # 조회 기간을 늘려서 계산
//! scorer score -s MSFT --lookback-days 730
//!
//! # JSON 출력 (파이프라인용)
//! scorer score -s TSLA --json
//! ```

use clap::{Parser, Subcommand};
use tracing::error;

mod commands;

use commands::score::{run_score, ScoreArgs};

#[derive(Parser)]
#[command(name = "scorer")]
#[command(about = "주식 투자 점수 계산기 - 기술/성장/밸류/퀄리티 블록 기반", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 종목의 투자 점수 계산 (0~100)
    Score {
        /// 티커 심볼 (예: AAPL, MSFT, 005930.KS)
        #[arg(short, long)]
        symbol: String,

        /// 과거 시세 조회 기간 (일 단위, 기본: 설정 파일 값)
        #[arg(short, long)]
        lookback_days: Option<u32>,

        /// JSON 형식으로 출력
        #[arg(long, default_value = "false")]
        json: bool,

        /// 설정 파일 경로 (기본: config/default.toml)
        #[arg(short, long)]
        config: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("실행 실패: {e:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    scorer_core::init_logging_from_env().map_err(|e| anyhow::anyhow!(e.to_string()))?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Score {
            symbol,
            lookback_days,
            json,
            config,
        } => {
            run_score(ScoreArgs {
                symbol,
                lookback_days,
                json,
                config,
            })
            .await
        }
    }
}
