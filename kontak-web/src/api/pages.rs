//! Informational pages

use axum::{
    http::{StatusCode, Uri},
    response::{Html, IntoResponse},
    routing::get,
    Router,
};

use crate::{views, AppState};

/// GET /
pub async fn home_page() -> Html<String> {
    views::pages::home()
}

/// GET /about
pub async fn about_page() -> Html<String> {
    views::pages::about()
}

/// Fallback for unknown routes
pub async fn not_found(uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        views::pages::not_found(&format!("No page at {}", uri.path())),
    )
}

pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home_page))
        .route("/about", get(about_page))
}
