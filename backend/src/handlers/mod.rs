pub mod products;
pub mod shop;

use axum::{extract::State, http::StatusCode, Json};
use chrono::{SecondsFormat, Utc};
use serde_json::json;

use crate::{error::AppError, AppState};

pub const SERVICE_NAME: &str = "MNML Fashion Shop";

/// Liveness plus a few runtime facts. The timestamp changes on every call.
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Micros, false),
            "service": SERVICE_NAME,
            "products_count": state.catalog.len(),
        })),
    )
}

/// Load-balancer readiness probe. Constant body.
pub async fn ready() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::OK, Json(json!({ "status": "ready" })))
}

pub async fn not_found() -> AppError {
    AppError::RouteNotFound
}
