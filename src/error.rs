use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Server returned {status}: {message}")]
    Status { status: StatusCode, message: String },

    #[error("Cannot update {entity} without an identifier")]
    MissingIdentifier { entity: &'static str },

    #[error("Malformed date in `{field}`: {value:?}")]
    MalformedDate { field: &'static str, value: String },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Can't encode request body: {0}")]
    Encode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GatewayError>;
