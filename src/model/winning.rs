use serde::Deserialize;
use serde_json::Value;

/// 당첨금 필드에 들어오는 "낙첨" 표시.
pub const NO_PRIZE: &str = "-";

/// 문자열 "-" 만 낙첨으로 본다. 숫자 당첨금은 그대로 당첨 처리.
pub fn is_no_prize(money: &Value) -> bool {
    money.as_str() == Some(NO_PRIZE)
}

/// 로또 6/45 당첨 조회 결과.
#[derive(Debug, Default, Deserialize)]
pub struct LottoWinning {
    #[serde(default)]
    pub round: Option<Value>,
    /// 당첨금 문자열 또는 숫자, 낙첨이면 "-"
    #[serde(default)]
    pub money: Option<Value>,
    #[serde(default)]
    pub lotto_details: Option<Vec<LottoLine>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LottoLine {
    #[serde(default)]
    pub label: Option<Value>,
    #[serde(default)]
    pub status: Option<Value>,
    /// 번호 토큰, 일치한 번호에는 ✨ 표시가 붙는다
    #[serde(default)]
    pub result: Option<Vec<String>>,
}

/// 연금복권 720+ 당첨 조회 결과.
#[derive(Debug, Default, Deserialize)]
pub struct Win720Winning {
    #[serde(default)]
    pub round: Option<Value>,
    #[serde(default)]
    pub money: Option<Value>,
}
