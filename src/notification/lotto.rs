use std::sync::LazyLock;

use regex::Regex;

use crate::model::{display_value, is_no_prize, LottoLine, LottoPurchaseResponse, LottoWinning};
use crate::notification::{Headline, SkipReason};

static NUMBER_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").expect("숫자 패턴"));

const MATCHED_MARKER: char = '✨';
const NUMBER_WIDTH: usize = 6;

/// 당첨 여부 문구와 게임별 번호표.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LottoWinningReport {
    pub headline: Headline,
    pub table: String,
}

pub fn compose_lotto_buying_message(body: &LottoPurchaseResponse) -> Result<String, SkipReason> {
    let result = body.result.as_ref().ok_or(SkipReason::NotSuccessful)?;

    let result_msg = result.result_msg.as_deref().unwrap_or("FAILURE");
    if result_msg.to_uppercase() != "SUCCESS" {
        return Err(SkipReason::NotSuccessful);
    }

    let numbers = result
        .arr_game_choice_num
        .as_deref()
        .ok_or(SkipReason::MissingField("result.arrGameChoiceNum"))?;
    let round = result
        .buy_round
        .as_ref()
        .ok_or(SkipReason::MissingField("result.buyRound"))?;
    let balance = body.balance.as_ref().ok_or(SkipReason::MissingField("balance"))?;

    Ok(format!(
        "{}회 로또 구매 완료 :moneybag: 남은잔액 : {}\n```{}```",
        display_value(round),
        display_value(balance),
        make_lotto_number_message(numbers),
    ))
}

/// 게임별 번호 문자열에서 마지막 태그 글자를 떼고 `|` 를 공백으로 바꾼다.
pub fn make_lotto_number_message(numbers: &[String]) -> String {
    numbers
        .iter()
        .map(|game| {
            let mut chars = game.chars();
            chars.next_back();
            chars.as_str().replace('|', " ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn compose_lotto_winning_report(winning: &LottoWinning) -> Result<LottoWinningReport, SkipReason> {
    let round = winning.round.as_ref().ok_or(SkipReason::MissingField("round"))?;
    let money = winning.money.as_ref().ok_or(SkipReason::MissingField("money"))?;
    let details = winning
        .lotto_details
        .as_deref()
        .ok_or(SkipReason::MissingField("lotto_details"))?;

    let table = format_winning_lines(details)?;
    let round = display_value(round);

    let headline = if !is_no_prize(money) {
        Headline::Prize(format!("로또 *{}회* - *{}* 당첨 되었습니다 🎉", round, display_value(money)))
    } else {
        Headline::NoPrize(format!("로또 *{}회* - 다음 기회에... 🫠", round))
    };

    Ok(LottoWinningReport { headline, table })
}

/// "라벨 상태" 열을 가장 긴 줄에 맞춰 정렬하고 번호를 6칸 오른쪽 정렬로 붙인다.
pub fn format_winning_lines(details: &[LottoLine]) -> Result<String, SkipReason> {
    let label_statuses = details
        .iter()
        .map(|line| -> Result<String, SkipReason> {
            let label = line.label.as_ref().ok_or(SkipReason::MissingField("lotto_details[].label"))?;
            let status = line.status.as_ref().ok_or(SkipReason::MissingField("lotto_details[].status"))?;
            Ok(format!("{} {}", display_value(label), display_value(status)))
        })
        .collect::<Result<Vec<_>, SkipReason>>()?;

    let width = label_statuses
        .iter()
        .map(|label_status| label_status.chars().count())
        .max()
        .unwrap_or(0);

    let mut formatted_lines = Vec::with_capacity(details.len());
    for (line, label_status) in details.iter().zip(&label_statuses) {
        let tokens = line
            .result
            .as_deref()
            .ok_or(SkipReason::MissingField("lotto_details[].result"))?;

        let numbers = tokens
            .iter()
            .map(|token| {
                format_winning_number(token)
                    .map(|number| format!("{:>width$}", number, width = NUMBER_WIDTH))
                    .ok_or(SkipReason::MalformedField("lotto_details[].result"))
            })
            .collect::<Result<Vec<_>, SkipReason>>()?;

        formatted_lines.push(format!("{:<width$} {}", label_status, numbers.join(" "), width = width));
    }

    Ok(formatted_lines.join("\n"))
}

/// 토큰의 첫 ASCII 숫자열을 두 자리로 맞춘다. 일치 표시가 있으면 `[NN]`, 없으면 ` NN `.
pub fn format_winning_number(token: &str) -> Option<String> {
    let raw = NUMBER_PATTERN.find(token)?.as_str();
    let trimmed = raw.trim_start_matches('0');
    let number = if trimmed.is_empty() { "0" } else { trimmed };

    if token.contains(MATCHED_MARKER) {
        Some(format!("[{:0>2}]", number))
    } else {
        Some(format!(" {:0>2} ", number))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LottoPurchase;
    use serde_json::json;

    fn line(label: &str, status: &str, result: &[&str]) -> LottoLine {
        LottoLine {
            label: Some(json!(label)),
            status: Some(json!(status)),
            result: Some(result.iter().map(|s| s.to_string()).collect()),
        }
    }

    #[test]
    fn strips_choice_tag_and_separators() {
        let numbers = vec!["A|01|02|03|04|05|063".to_string(), "B|07|11|19|23|38|413".to_string()];
        assert_eq!(make_lotto_number_message(&numbers), "A 01 02 03 04 05 06\nB 07 11 19 23 38 41");
    }

    #[test]
    fn buying_message_includes_round_balance_and_numbers() {
        let body = LottoPurchaseResponse {
            result: Some(LottoPurchase {
                result_msg: Some("SUCCESS".into()),
                arr_game_choice_num: Some(vec!["A|01|02|03|04|05|063".into()]),
                buy_round: Some(json!("1150")),
            }),
            balance: Some(json!(15000)),
        };

        let message = compose_lotto_buying_message(&body).unwrap();
        assert_eq!(message, "1150회 로또 구매 완료 :moneybag: 남은잔액 : 15000\n```A 01 02 03 04 05 06```");
    }

    #[test]
    fn success_check_ignores_case() {
        let body = LottoPurchaseResponse {
            result: Some(LottoPurchase {
                result_msg: Some("success".into()),
                arr_game_choice_num: Some(vec![]),
                buy_round: Some(json!(1)),
            }),
            balance: Some(json!(0)),
        };
        assert!(compose_lotto_buying_message(&body).is_ok());
    }

    #[test]
    fn missing_result_is_not_successful() {
        let body = LottoPurchaseResponse::default();
        assert_eq!(compose_lotto_buying_message(&body), Err(SkipReason::NotSuccessful));
    }

    #[test]
    fn failure_message_is_not_successful() {
        let body = LottoPurchaseResponse {
            result: Some(LottoPurchase {
                result_msg: Some("FAIL".into()),
                ..Default::default()
            }),
            balance: Some(json!(0)),
        };
        assert_eq!(compose_lotto_buying_message(&body), Err(SkipReason::NotSuccessful));
    }

    #[test]
    fn matched_number_is_bracketed() {
        assert_eq!(format_winning_number("✨05").as_deref(), Some("[05]"));
        assert_eq!(format_winning_number("12").as_deref(), Some(" 12 "));
        assert_eq!(format_winning_number("7").as_deref(), Some(" 07 "));
        assert_eq!(format_winning_number("✨"), None);
        assert_eq!(format_winning_number("00").as_deref(), Some(" 00 "));
    }

    #[test]
    fn non_ascii_digits_are_not_numbers() {
        assert_eq!(format_winning_number("x٥12").as_deref(), Some(" 12 "));
        assert_eq!(format_winning_number("✨٥"), None);
        assert_eq!(format_winning_number("１２"), None);
    }

    #[test]
    fn long_digit_runs_are_kept_whole() {
        assert_eq!(
            format_winning_number("✨000123456789012345678901234567890").as_deref(),
            Some("[123456789012345678901234567890]")
        );
    }

    #[test]
    fn numeric_money_is_rendered() {
        let winning = LottoWinning {
            round: Some(json!(1150)),
            money: Some(json!(5000)),
            lotto_details: Some(vec![line("A", "5등", &["✨1"])]),
        };

        let report = compose_lotto_winning_report(&winning).unwrap();
        assert_eq!(report.headline, Headline::Prize("로또 *1150회* - *5000* 당첨 되었습니다 🎉".into()));
    }

    #[test]
    fn lines_are_aligned() {
        let details = vec![
            line("A", "낙첨", &["✨05", "12", "3", "✨44", "40", "45"]),
            line("B", "5등 당첨", &["1", "2", "3", "4", "5", "6"]),
        ];

        let table = format_winning_lines(&details).unwrap();
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[0], "A 낙첨      [05]    12     03    [44]    40     45 ");
        assert_eq!(lines[1], "B 5등 당첨    01     02     03     04     05     06 ");
    }

    #[test]
    fn missing_label_skips() {
        let details = vec![LottoLine {
            label: None,
            status: Some(json!("낙첨")),
            result: Some(vec!["1".into()]),
        }];
        assert_eq!(
            format_winning_lines(&details),
            Err(SkipReason::MissingField("lotto_details[].label"))
        );
    }

    #[test]
    fn no_prize_headline_is_consolation() {
        let winning = LottoWinning {
            round: Some(json!(1150)),
            money: Some(json!("-")),
            lotto_details: Some(vec![line("A", "낙첨", &["1"])]),
        };

        let report = compose_lotto_winning_report(&winning).unwrap();
        assert_eq!(report.headline, Headline::NoPrize("로또 *1150회* - 다음 기회에... 🫠".into()));
    }
}
