use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use thiserror::Error;
use tracing::error;

use crate::models::payment::PaymentError;
use crate::utils::helpers::ApiResponse;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid UUID")]
    InvalidUuid,
    #[error("Invalid JSON")]
    InvalidJson,
    #[error("Mismatching IDs")]
    MismatchingIds,
    #[error("Payment already exists with that ID")]
    AlreadyExists,
    #[error("Payment not found")]
    NotFound,
    #[error("Internal error: {0}")]
    Internal(PaymentError),
}

impl From<PaymentError> for ApiError {
    fn from(e: PaymentError) -> Self {
        match e {
            PaymentError::NotFound { .. } => ApiError::NotFound,
            PaymentError::AlreadyExists { .. } => ApiError::AlreadyExists,
            other => ApiError::Internal(other),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidUuid
            | ApiError::InvalidJson
            | ApiError::MismatchingIds
            | ApiError::AlreadyExists => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::Internal(e) => {
                error!("Store error: {}", e);
                HttpResponse::InternalServerError().finish()
            }
            _ => ApiResponse::<()>::error(self.to_string()).to_response(self.status_code()),
        }
    }
}
