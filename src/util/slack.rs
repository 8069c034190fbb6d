use reqwest::Client;
use serde_json::json;

pub const SLACK_API_URL: &str = "https://slack.com";
const POST_MESSAGE_PATH: &str = "/api/chat.postMessage";

#[derive(Debug, Clone)]
pub struct SlackClient {
    http: Client,
    base_url: String,
}

impl Default for SlackClient {
    fn default() -> Self {
        Self::new(SLACK_API_URL)
    }
}

impl SlackClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            http: Client::new(),
            base_url,
        }
    }

    pub fn post_message_url(&self) -> String {
        format!("{}{}", self.base_url, POST_MESSAGE_PATH)
    }

    /// chat.postMessage 호출. 응답 상태와 본문은 확인하지 않는다.
    pub async fn post_message(&self, token: &str, channel: &str, message: &str) -> Result<(), reqwest::Error> {
        let payload = json!({ "text": message, "channel": channel });

        self.http
            .post(self.post_message_url())
            .bearer_auth(token)
            .json(&payload)
            .send()
            .await?;

        Ok(())
    }
}
