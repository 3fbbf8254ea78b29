use std::path::PathBuf;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{debug, error};

pub type AppResult<T> = Result<T, AppError>;

/// Errors surfaced at the request boundary.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Product not found")]
    ProductNotFound(u64),

    /// Path matched a route shape but a parameter failed to parse.
    #[error("No route matched the request")]
    RouteNotFound,

    #[error("Template rendering failed: {0}")]
    Template(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::ProductNotFound(id) => {
                debug!(id, "Product lookup missed");
                (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "success": false, "error": self.to_string() })),
                )
                    .into_response()
            }
            AppError::RouteNotFound => StatusCode::NOT_FOUND.into_response(),
            AppError::Template(ref msg) => {
                error!(error = %msg, "Failed to render page");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "success": false, "error": "Internal server error" })),
                )
                    .into_response()
            }
        }
    }
}

/// Problems with the catalog definition. Only raised while the process starts.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("product id must be positive (got 0 for {name:?})")]
    ZeroId { name: String },

    #[error("duplicate product id {0}")]
    DuplicateId(u64),

    #[error("product {0} has an empty name")]
    EmptyName(u64),

    #[error("product {id} has an invalid price {price}")]
    InvalidPrice { id: u64, price: f64 },

    #[error("cannot read catalog file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("catalog file {path} is not a valid product list")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn product_not_found_renders_failure_envelope() {
        let (status, body) = body_json(AppError::ProductNotFound(42)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "success": false, "error": "Product not found" }));
    }

    #[tokio::test]
    async fn route_not_found_has_empty_body() {
        let response = AppError::RouteNotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(bytes.is_empty());
    }

    #[tokio::test]
    async fn template_failure_hides_details() {
        let (status, body) = body_json(AppError::Template("boom".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Internal server error");
    }
}
