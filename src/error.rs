//! Error types for the settlement service

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

use crate::schemas::MemberId;

/// Result type for service operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The same member id appears twice in a snapshot
    #[error("Duplicate member id: {0}")]
    DuplicateMember(MemberId),

    /// Negative or non-finite expense amount
    #[error("Invalid amount {amount} in expense {expense}")]
    InvalidAmount { expense: String, amount: f64 },

    /// Expense without any participant
    #[error("Expense {0} has no participants")]
    NoParticipants(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::DuplicateMember(_) | Error::InvalidAmount { .. } | Error::NoParticipants(_) => {
                StatusCode::BAD_REQUEST
            }
            Error::Config(_) | Error::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}
