use thiserror::Error;

use ibscreen_core::error::CoreError;

#[derive(Debug, Error)]
pub enum ScreeningError {
    #[error("model invocation failed: {0}")]
    Invocation(String),

    #[error("the screening model returned an empty response")]
    EmptyResponse,

    /// The text payload was not a valid screening result. `detail` holds the
    /// parse error for logs and is kept out of the display message.
    #[error("the screening model returned a result that could not be read")]
    MalformedResponse { detail: String },

    #[error("unsupported attachment media type: {0}")]
    UnsupportedMediaType(String),

    #[error(transparent)]
    Attachment(#[from] CoreError),

    #[error("prompt rendering failed: {0}")]
    Prompt(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl From<tera::Error> for ScreeningError {
    fn from(e: tera::Error) -> Self {
        ScreeningError::Prompt(e.to_string())
    }
}
