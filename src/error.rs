use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum AppError {
    #[error("HTTP request failed: {0}")]
    Transport(String),
    #[error("HTTP status {status} for {url}")]
    HttpStatus { status: u16, url: String },
    #[error("JSON parsing error: {0}")]
    SerdeParse(String),
    #[error("JSON serialization error: {0}")]
    SerdeSerialize(String),
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        if let Some(status) = e.status() {
            AppError::HttpStatus {
                status: status.as_u16(),
                url: e
                    .url()
                    .map(ToString::to_string)
                    .unwrap_or_else(|| "unknown".to_string()),
            }
        } else {
            AppError::Transport(e.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        if e.is_io() || e.is_eof() || e.is_syntax() || e.is_data() {
            AppError::SerdeParse(e.to_string())
        } else {
            AppError::SerdeSerialize(e.to_string())
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
