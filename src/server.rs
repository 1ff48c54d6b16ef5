//! HTTP surface of the dashboard.
//!
//! `GET /` runs the whole load-and-render pipeline for every request and
//! returns the page; `GET /health` answers without touching the datasets.

use crate::dashboard::BikeDashboard;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use log::error;
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Handle `GET /`.
///
/// Failures are logged and reported as a plain-text 500 carrying the error
/// message.
async fn index(State(dashboard): State<Arc<BikeDashboard>>) -> Response {
    match dashboard.render_page().await {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!("Failed to render dashboard: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to render dashboard: {}", e),
            )
                .into_response()
        }
    }
}

/// Builds the application router around a shared dashboard.
pub fn router(dashboard: Arc<BikeDashboard>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .with_state(dashboard)
}
