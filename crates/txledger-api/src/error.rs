//! Error types for txledger-api

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use txledger_core::CoreError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{message}")]
    NotFound { message: String },

    #[error("{message}")]
    BadRequest { message: String },

    #[error("Internal server error")]
    InternalError,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        let level: log::Level = error.severity().into();
        log::log!(target: "txledger::error", level, "{}", error.to_details());

        match error {
            CoreError::TransactionNotFound { .. } => ApiError::NotFound { message: error.to_string() },
            CoreError::InvalidInput { .. } | CoreError::DuplicateId { .. } => {
                ApiError::BadRequest { message: error.to_string() }
            }
            CoreError::AmountOverflow { .. } => ApiError::InternalError,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}
