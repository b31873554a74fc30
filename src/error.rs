use thiserror::Error;

#[derive(Error, Debug)]
pub enum FplError {
    #[error("HTTP {status} from {url}")]
    Http { status: u16, url: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("JSON parsing error: {0}")]
    Json(String),

    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("Expected a JSON object")]
    NotAnObject,

    #[error("Unknown endpoint: {0}")]
    UnknownEndpoint(String),

    #[error("Template {template} expects {expected} argument(s), got {given}")]
    Template {
        template: String,
        expected: usize,
        given: usize,
    },

    #[error("Gameweek {0} is out of range (1-47)")]
    InvalidGameweek(u8),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for FplError {
    fn from(e: serde_json::Error) -> Self {
        FplError::Json(e.to_string())
    }
}
