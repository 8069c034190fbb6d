use std::env;

use crate::util::slack::SLACK_API_URL;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub slack_token: Option<String>,
    pub slack_channel: Option<String>,
    pub slack_api_url: String,
}

impl Settings {
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            slack_token: non_empty("SLACK_TOKEN"),
            slack_channel: non_empty("SLACK_CHANNEL"),
            slack_api_url: non_empty("SLACK_API_URL").unwrap_or_else(|| SLACK_API_URL.to_string()),
        }
    }
}

/// `.env` 를 읽은 뒤 환경 변수로부터 설정을 만든다.
pub fn get_configuration() -> anyhow::Result<Settings> {
    dotenv::dotenv().ok();
    Ok(Settings::from_lookup(|key| env::var(key).ok()))
}
