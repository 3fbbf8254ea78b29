use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    Json,
};
use tracing::debug;

use crate::{
    error::{AppError, AppResult},
    models::Product,
    AppState,
};

/// Parses the `{id}` path segment: one or more ASCII digits that fit a `u64`.
/// Anything else (signs, whitespace, letters, overflow) is a routing mismatch.
pub fn parse_product_id(segment: &str) -> Option<u64> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}

// ── List ──────────────────────────────────────────────────────────────────────

pub async fn list_products(State(state): State<AppState>) -> (StatusCode, Json<serde_json::Value>) {
    let products: Vec<&Product> = state.catalog.list_all().collect();

    debug!(count = products.len(), "Listed products");

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "success": true,
            "products": products,
            "count": products.len(),
        })),
    )
}

// ── Get by ID ─────────────────────────────────────────────────────────────────

pub async fn get_product(
    State(state): State<AppState>,
    segment: Result<Path<String>, PathRejection>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    // A segment that does not even decode (e.g. invalid UTF-8) is a mismatch too.
    let Path(segment) = segment.map_err(|_| AppError::RouteNotFound)?;
    let id = parse_product_id(&segment).ok_or(AppError::RouteNotFound)?;
    let product = state
        .catalog
        .get_by_id(id)
        .ok_or(AppError::ProductNotFound(id))?;

    debug!(id, "Fetched product");

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({
            "success": true,
            "product": product,
        })),
    ))
}
