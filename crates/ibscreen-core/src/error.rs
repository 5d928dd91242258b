use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid attachment: {0}")]
    InvalidAttachment(String),

    #[error("unknown imaging category: {0}")]
    UnknownCategory(String),

    #[error("unknown scenario: {0}")]
    UnknownScenario(String),
}
