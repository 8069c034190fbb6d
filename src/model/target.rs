use crate::model::NotifyError;

/// 메시지를 받을 슬랙 채널과 봇 토큰. 호출마다 넘겨받고 저장하지 않는다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationTarget {
    token: String,
    channel: String,
}

impl NotificationTarget {
    pub fn new(token: impl Into<String>, channel: impl Into<String>) -> Result<Self, NotifyError> {
        let token = token.into();
        let channel = channel.into();

        if token.trim().is_empty() {
            return Err(NotifyError::EmptyToken);
        }
        if channel.trim().is_empty() {
            return Err(NotifyError::EmptyChannel);
        }

        Ok(Self { token, channel })
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn channel(&self) -> &str {
        &self.channel
    }
}
