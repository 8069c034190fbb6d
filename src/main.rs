use std::fs;
use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::de::DeserializeOwned;
use tracing_log::log::info;

use lotto_notifier::configuration::get_configuration;
use lotto_notifier::model::{
    LottoPurchaseResponse, LottoWinning, NotificationTarget, NotifyError, Win720PurchaseResponse, Win720Winning,
};
use lotto_notifier::notification::{Notifier, NotifyOutcome};
use lotto_notifier::telemetry::{get_subscriber, init_subscriber};
use lotto_notifier::util::SlackClient;

#[derive(Parser)]
#[command(name = "lotto_notifier")]
#[command(about = "로또/연금복권 구매·당첨 결과를 슬랙으로 알립니다", long_about = None)]
struct Cli {
    /// 슬랙 봇 토큰 (기본값: SLACK_TOKEN)
    #[arg(long, global = true)]
    token: Option<String>,

    /// 슬랙 채널 (기본값: SLACK_CHANNEL)
    #[arg(long, global = true)]
    channel: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 로또 6/45 구매 결과
    LottoBuy(PayloadArgs),
    /// 연금복권 720+ 구매 결과
    Win720Buy(PayloadArgs),
    /// 로또 6/45 당첨 결과
    LottoWin(PayloadArgs),
    /// 연금복권 720+ 당첨 결과
    Win720Win(PayloadArgs),
}

#[derive(Args)]
struct PayloadArgs {
    /// JSON 파일 경로, `-` 이면 표준 입력
    #[arg(long, default_value = "-")]
    payload: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let subscriber = get_subscriber("lotto_notifier".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let cli = Cli::parse();
    let settings = get_configuration()?;
    info!("환경 변수 로드 완료");

    let token = cli
        .token
        .or(settings.slack_token)
        .context("슬랙 토큰이 없습니다 (--token 또는 SLACK_TOKEN)")?;
    let channel = cli
        .channel
        .or(settings.slack_channel)
        .context("슬랙 채널이 없습니다 (--channel 또는 SLACK_CHANNEL)")?;
    let target = NotificationTarget::new(token, channel)?;

    let notifier = Notifier::new(SlackClient::new(settings.slack_api_url));

    let outcome = match cli.command {
        Commands::LottoBuy(args) => {
            let body: LottoPurchaseResponse = read_payload(&args.payload)?;
            notifier.send_lotto_buying_message(&body, &target).await
        }
        Commands::Win720Buy(args) => {
            let body: Win720PurchaseResponse = read_payload(&args.payload)?;
            notifier.send_win720_buying_message(&body, &target).await
        }
        Commands::LottoWin(args) => {
            let winning: LottoWinning = read_payload(&args.payload)?;
            notifier.send_lotto_winning_message(&winning, &target).await
        }
        Commands::Win720Win(args) => {
            let winning: Win720Winning = read_payload(&args.payload)?;
            notifier.send_win720_winning_message(&winning, &target).await
        }
    };

    match outcome {
        NotifyOutcome::Sent(_) => info!("알림 전송 완료"),
        NotifyOutcome::Skipped(reason) => info!("알림 생략: {:?}", reason),
    }

    Ok(())
}

fn read_payload<T: DeserializeOwned>(path: &str) -> Result<T> {
    let raw = if path == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).context("표준 입력 읽기 실패")?;
        buf
    } else {
        fs::read_to_string(path).with_context(|| format!("페이로드 파일 읽기 실패: {}", path))?
    };

    let parsed = serde_json::from_str(&raw).map_err(NotifyError::from)?;
    Ok(parsed)
}
