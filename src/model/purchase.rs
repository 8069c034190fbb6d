use serde::Deserialize;
use serde_json::Value;

/// 로또 6/45 구매 API 응답.
#[derive(Debug, Default, Deserialize)]
pub struct LottoPurchaseResponse {
    #[serde(default)]
    pub result: Option<LottoPurchase>,
    #[serde(default)]
    pub balance: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LottoPurchase {
    #[serde(default)]
    pub result_msg: Option<String>,
    /// "A|01|02|03|04|05|063" 형식, 마지막 글자는 선택 방식 태그
    #[serde(default)]
    pub arr_game_choice_num: Option<Vec<String>>,
    #[serde(default)]
    pub buy_round: Option<Value>,
}

/// 연금복권 720+ 구매 API 응답.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Win720PurchaseResponse {
    #[serde(default)]
    pub result_code: Option<Value>,
    /// 파이프 구분 문자열, 네 번째 토큰이 회차
    #[serde(default)]
    pub result_msg: Option<String>,
    /// 콤마 구분 티켓 목록 (조 1자리 + 번호 6자리)
    #[serde(default)]
    pub sale_ticket: Option<String>,
    #[serde(default)]
    pub balance: Option<Value>,
}
