//! Error types for kontak-web
//!
//! Validation failures are not errors: handlers re-render the form for
//! those. What remains is a missing record (404 page) or a store fault
//! (logged, then a generic 500 page).

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use crate::views;

/// Handler error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Record or route not found (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Store or other kontak-common failure (500)
    #[error("Store error: {0}")]
    Store(#[from] kontak_common::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(what) => {
                (StatusCode::NOT_FOUND, views::pages::not_found(&what)).into_response()
            }
            ApiError::Store(e) => {
                error!("Request failed: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, views::pages::server_error()).into_response()
            }
        }
    }
}

/// Result type for handlers
pub type ApiResult<T> = Result<T, ApiError>;
