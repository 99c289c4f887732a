use thiserror::Error;

#[derive(Debug, Error)]
pub enum Context7Error {
    /// The server answered with anything other than `200 OK`.
    #[error("API Error {status}: {body}")]
    ApiError { status: u16, body: String },

    #[error("{0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Invalid authorization header: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Missing required argument: {0}")]
    MissingArgument(&'static str),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl From<anyhow::Error> for Context7Error {
    fn from(err: anyhow::Error) -> Self {
        Context7Error::ConfigError(format!("{:#}", err))
    }
}

pub type Result<T> = std::result::Result<T, Context7Error>;
