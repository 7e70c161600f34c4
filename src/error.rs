use std::io;

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("no ticket matching '{project_key}-<id>' found in branch '{branch}'")]
    NoTicketMatch { branch: String, project_key: String },
    #[error("issue tracker error: {0}")]
    IssueTracker(String),
    #[error("request failed with status {status}")]
    RequestFailed { status: StatusCode },
    #[error("malformed issue response: {0}")]
    MalformedResponse(String),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
