use axum::{
    extract::{rejection::JsonRejection, FromRequest},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::{error, warn};

use shared::{ErrorResponse, FieldError};

use crate::domain::models::donation::DonationServiceError;

/// Every failure a handler can return, rendered as [`ErrorResponse`] JSON
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid request body")]
    InvalidBody(#[from] JsonRejection),

    #[error("Invalid amount")]
    InvalidAmount,

    #[error("Missing required fields")]
    MissingRequiredFields,

    #[error("Validation failed")]
    Validation(Vec<FieldError>),

    #[error("Donation not found")]
    DonationNotFound,

    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody(_)
            | ApiError::InvalidAmount
            | ApiError::MissingRequiredFields
            | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::DonationNotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DonationServiceError> for ApiError {
    fn from(err: DonationServiceError) -> Self {
        match err {
            DonationServiceError::InvalidAmount => ApiError::InvalidAmount,
            DonationServiceError::MissingRequiredFields => ApiError::MissingRequiredFields,
            DonationServiceError::Validation(errors) => {
                ApiError::Validation(errors.iter().map(FieldError::from).collect())
            }
            DonationServiceError::NotFound(_) => ApiError::DonationNotFound,
            DonationServiceError::Storage(source) => ApiError::Internal(source),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::Internal(source) => error!("Request failed: {source:#}"),
            ApiError::InvalidBody(rejection) => warn!("Rejected request body: {rejection}"),
            _ => {}
        }

        let body = match self {
            ApiError::Validation(details) => ErrorResponse::with_details("Validation failed", details),
            other => ErrorResponse::new(other.to_string()),
        };
        (status, Json(body)).into_response()
    }
}

/// `Json` extractor whose rejections come back as [`ApiError::InvalidBody`]
#[derive(FromRequest)]
#[from_request(via(Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);
