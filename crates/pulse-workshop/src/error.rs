use pulse_core::prelude::serde_json;
use reqwest::StatusCode;

#[derive(thiserror::Error, Debug)]
pub enum WorkshopError {
    #[error("Connection failed")]
    Connection,
    #[error("Unexpected response format")]
    UnexpectedFormat(String),
    #[error("Request failed")]
    Reqwest(reqwest::Error),
    #[error("Malformed payload")]
    Json(#[from] serde_json::Error),
    #[error("Invalid url")]
    Url(#[from] url::ParseError),
    #[error("Io error")]
    Io(#[from] std::io::Error),
    #[error("Not found")]
    NotFound,
}

impl From<reqwest::Error> for WorkshopError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_connect() {
            return Self::Connection;
        }
        if let Some(StatusCode::NOT_FOUND) = value.status() {
            Self::NotFound
        } else {
            Self::Reqwest(value)
        }
    }
}
