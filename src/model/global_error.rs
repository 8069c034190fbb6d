use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("슬랙 토큰이 비어 있습니다")]
    EmptyToken,

    #[error("슬랙 채널이 비어 있습니다")]
    EmptyChannel,

    #[error("잘못된 페이로드입니다: {0}")]
    InvalidPayload(#[from] serde_json::Error),
}
