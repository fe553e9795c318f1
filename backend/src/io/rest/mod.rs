//! # REST API Interface Layer
//!
//! HTTP endpoints mounted under `/api`. Handlers turn requests into domain
//! commands, and every failure leaves through [`ApiError`] so clients always
//! get an [`shared::ErrorResponse`] body.
//!
//! | Method | Path | Handler |
//! |---|---|---|
//! | POST | `/api/donations` | [`donation_apis::submit_donation`] |
//! | GET | `/api/donations/:id` | [`donation_apis::get_donation`] |
//! | GET | `/api/stats` | [`stats_apis::get_stats`] |
//! | GET | `/api/health` | [`health_apis::health`] |
//! | POST | `/api/logs` | [`logging_apis::log_message`] |

pub mod donation_apis;
pub mod error;
pub mod health_apis;
pub mod logging_apis;
pub mod mappers;
pub mod stats_apis;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};

use shared::ErrorResponse;

use crate::AppState;

pub use error::{ApiError, ApiJson};

pub fn api_router() -> Router<AppState> {
    Router::new()
        .merge(donation_apis::router())
        .route("/stats", get(stats_apis::get_stats))
        .route("/health", get(health_apis::health))
        .route("/logs", post(logging_apis::log_message))
        .fallback(api_not_found)
}

/// Unknown `/api` paths answer JSON instead of falling through to the frontend
async fn api_not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(ErrorResponse::new("Not found")))
}
