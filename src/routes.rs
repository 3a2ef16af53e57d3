//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host serves a single storefront page, the toolkit overrides it embeds,
//! and the compiled `widgets` package under `/pkg`. There is no other API.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::sync::Arc;

use axum::{Json, Router};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::{HostConfig, HostError};
use crate::page;

/// Shared, read-only host state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<HostConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(config: HostConfig) -> Self {
        Self { config: Arc::new(config) }
    }
}

impl IntoResponse for HostError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "internal error").into_response()
    }
}

pub fn app(state: AppState) -> Router {
    let pkg = ServeDir::new(&state.config.static_dir);
    Router::new()
        .route("/", get(storefront))
        .route("/api/toolkit/config", get(toolkit_config))
        .route("/healthz", get(healthz))
        .nest_service("/pkg", pkg)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn storefront(State(state): State<AppState>) -> Result<Html<String>, HostError> {
    page::render(&state.config.overrides, &state.config.shop_root).map(Html)
}

async fn toolkit_config(State(state): State<AppState>) -> Json<toolkit::config::ConfigOverrides> {
    Json(state.config.overrides.clone())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
