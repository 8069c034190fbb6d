pub mod global_error;
pub mod purchase;
pub mod target;
pub mod winning;

pub use global_error::NotifyError;
pub use purchase::{LottoPurchase, LottoPurchaseResponse, Win720PurchaseResponse};
pub use target::NotificationTarget;
pub use winning::{is_no_prize, LottoLine, LottoWinning, Win720Winning, NO_PRIZE};

use serde_json::Value;

/// 회차·잔액처럼 숫자 또는 문자열로 내려오는 값을 그대로 표시한다.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
