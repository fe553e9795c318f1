//! # Noël de Solidarité intake service
//!
//! Accepts donations from the web form, validates them against the schema in
//! [`shared`], and keeps them in memory for lookup and aggregate statistics.
//!
//! ## Architecture
//!
//! ```text
//! IO Layer (REST handlers, error mapping)
//!     ↓
//! Domain Layer (DonationService, commands, models)
//!     ↓
//! Storage Layer (DonationStorage trait, in-memory repository)
//! ```
//!
//! Everything outside `/api` is served from the built frontend, with
//! `index.html` as the fallback for client-side routes.

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use std::sync::Arc;

use anyhow::Result;
use axum::{
    http::{header::CONTENT_TYPE, Method},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing::info;

use crate::config::Config;
use crate::domain::DonationService;
use crate::storage::memory::MemoryConnection;
use crate::storage::Connection;

/// Services shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub donation_service: DonationService,
}

pub async fn initialize_backend() -> Result<AppState> {
    info!("Setting up in-memory storage");
    let connection = MemoryConnection::new();

    info!("Setting up domain services");
    let donation_service = DonationService::new(Arc::new(connection.create_donation_repository()));

    Ok(AppState { donation_service })
}

/// Assemble the full application: `/api` routes, the static frontend, request
/// tracing and CORS for the configured dev origin
pub fn create_router(app_state: AppState, config: &Config) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(config.cors_origin.clone())
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE]);

    let frontend = ServeDir::new(&config.static_dir).fallback(ServeFile::new(config.index_file()));

    Router::new()
        .nest("/api", io::rest::api_router())
        .fallback_service(frontend)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state)
}
