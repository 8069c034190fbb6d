use crate::model::{display_value, is_no_prize, Win720PurchaseResponse, Win720Winning};
use crate::notification::{Headline, SkipReason};

const SUCCESS_CODE: &str = "100";
const ROUND_TOKEN_INDEX: usize = 3;

pub fn compose_win720_buying_message(body: &Win720PurchaseResponse) -> Result<String, SkipReason> {
    if body.result_code.as_ref().and_then(|code| code.as_str()) != Some(SUCCESS_CODE) {
        return Err(SkipReason::NotSuccessful);
    }

    let round = body
        .result_msg
        .as_deref()
        .ok_or(SkipReason::MissingField("resultMsg"))?
        .split('|')
        .nth(ROUND_TOKEN_INDEX)
        .ok_or(SkipReason::MalformedField("resultMsg"))?;
    let tickets = body.sale_ticket.as_deref().ok_or(SkipReason::MissingField("saleTicket"))?;
    let numbers = make_win720_number_message(tickets).ok_or(SkipReason::MalformedField("saleTicket"))?;
    let balance = body.balance.as_ref().ok_or(SkipReason::MissingField("balance"))?;

    Ok(format!(
        "{}회 연금복권 구매 완료 :moneybag: 남은잔액 : {}\n```\n{}```",
        round,
        display_value(balance),
        numbers,
    ))
}

/// "1234567" -> "1조 2 3 4 5 6 7". 빈 티켓이 섞여 있으면 None.
pub fn make_win720_number_message(tickets: &str) -> Option<String> {
    tickets
        .split(',')
        .map(|ticket| {
            let mut chars = ticket.chars();
            let group = chars.next()?;
            let digits = chars.map(String::from).collect::<Vec<_>>().join(" ");
            Some(format!("{}조 {}", group, digits))
        })
        .collect::<Option<Vec<_>>>()
        .map(|lines| lines.join("\n"))
}

pub fn compose_win720_winning_headline(winning: &Win720Winning) -> Result<Headline, SkipReason> {
    let round = winning.round.as_ref().ok_or(SkipReason::MissingField("round"))?;
    let money = winning.money.as_ref().ok_or(SkipReason::MissingField("money"))?;

    if !is_no_prize(money) {
        Ok(Headline::Prize(format!(
            "연금복권 *{}회* - *{}* 당첨 되었습니다 🎉",
            display_value(round),
            display_value(money),
        )))
    } else {
        Ok(Headline::NoPrize("연금복권 - 다음 기회에... 🫠".to_string()))
    }
}
