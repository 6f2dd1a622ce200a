use thiserror::Error;

#[derive(Error, Debug)]
pub enum ZlanddocError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("streams are not supported")]
    StreamsUnsupported,

    #[error("Config error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ZlanddocError>;
