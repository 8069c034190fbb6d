pub mod lotto;
pub mod win720;

use tracing::{debug, info, instrument, warn};

use crate::model::{LottoPurchaseResponse, LottoWinning, NotificationTarget, Win720PurchaseResponse, Win720Winning};
use crate::util::slack::SlackClient;

/// 알림을 보내지 않은 이유.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// 구매 결과가 성공이 아님
    NotSuccessful,
    MissingField(&'static str),
    MalformedField(&'static str),
    /// 낙첨. 위로 메시지는 만들지만 보내지 않는다.
    NoPrize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotifyOutcome {
    Sent(String),
    Skipped(SkipReason),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Headline {
    Prize(String),
    NoPrize(String),
}

#[derive(Debug, Clone, Default)]
pub struct Notifier {
    slack: SlackClient,
}

impl Notifier {
    pub fn new(slack: SlackClient) -> Self {
        Self { slack }
    }

    #[instrument(skip_all, fields(channel = %target.channel()))]
    pub async fn send_lotto_buying_message(
        &self,
        body: &LottoPurchaseResponse,
        target: &NotificationTarget,
    ) -> NotifyOutcome {
        self.deliver(target, lotto::compose_lotto_buying_message(body)).await
    }

    #[instrument(skip_all, fields(channel = %target.channel()))]
    pub async fn send_win720_buying_message(
        &self,
        body: &Win720PurchaseResponse,
        target: &NotificationTarget,
    ) -> NotifyOutcome {
        self.deliver(target, win720::compose_win720_buying_message(body)).await
    }

    #[instrument(skip_all, fields(channel = %target.channel()))]
    pub async fn send_lotto_winning_message(
        &self,
        winning: &LottoWinning,
        target: &NotificationTarget,
    ) -> NotifyOutcome {
        let composed = lotto::compose_lotto_winning_report(winning).and_then(|report| {
            debug!(table = %report.table, "로또 당첨 내역");
            prize_only(report.headline)
        });

        self.deliver(target, composed).await
    }

    #[instrument(skip_all, fields(channel = %target.channel()))]
    pub async fn send_win720_winning_message(
        &self,
        winning: &Win720Winning,
        target: &NotificationTarget,
    ) -> NotifyOutcome {
        let composed = win720::compose_win720_winning_headline(winning).and_then(prize_only);
        self.deliver(target, composed).await
    }

    async fn deliver(&self, target: &NotificationTarget, composed: Result<String, SkipReason>) -> NotifyOutcome {
        match composed {
            Ok(message) => {
                self.send_slack_webhook(target, &message).await;
                NotifyOutcome::Sent(message)
            }
            Err(reason) => {
                debug!(?reason, "알림 전송 생략");
                NotifyOutcome::Skipped(reason)
            }
        }
    }

    async fn send_slack_webhook(&self, target: &NotificationTarget, message: &str) {
        match self.slack.post_message(target.token(), target.channel(), message).await {
            Ok(()) => info!("슬랙 메시지 전송 완료"),
            Err(err) => warn!("슬랙 메시지 전송 실패: {:?}", err),
        }
    }
}

// 낙첨 문구는 만들어 두기만 하고 보내지 않는다.
fn prize_only(headline: Headline) -> Result<String, SkipReason> {
    match headline {
        Headline::Prize(message) => Ok(message),
        Headline::NoPrize(message) => {
            debug!(%message, "낙첨 메시지는 전송하지 않음");
            Err(SkipReason::NoPrize)
        }
    }
}
