use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmbedError {
    #[error("Invalid embed configuration: {0}")]
    ConfigError(String),

    #[error("Failed to parse embed settings: {0}")]
    ParseError(String),
}

impl From<serde_json::Error> for EmbedError {
    fn from(error: serde_json::Error) -> Self {
        EmbedError::ParseError(error.to_string())
    }
}
