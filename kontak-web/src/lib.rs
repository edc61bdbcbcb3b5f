//! kontak-web library - contact directory web application
//!
//! Server-rendered CRUD over three collections: contacts, study programs
//! and addresses. Forms are validated before any write; the outcome of each
//! write is reported through a one-shot flash message on the next list page.

use axum::{
    extract::Request,
    http::{Method, Uri},
    middleware, Router,
};
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use std::path::PathBuf;
use tower::util::MapRequest;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::debug;

pub mod api;
pub mod db;
pub mod error;
pub mod flash;
pub mod models;
pub mod session;
pub mod validation;
pub mod views;

use flash::FlashStore;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
    /// Pending flash messages keyed by session
    pub flash: FlashStore,
    /// Directory served under /static, if configured
    pub static_assets: Option<PathBuf>,
    /// Service startup time (for uptime calculation)
    pub startup_time: DateTime<Utc>,
}

impl AppState {
    /// Create new application state
    pub fn new(db: SqlitePool, flash: FlashStore) -> Self {
        Self {
            db,
            flash,
            static_assets: None,
            startup_time: Utc::now(),
        }
    }

    pub fn with_static_assets(mut self, dir: Option<PathBuf>) -> Self {
        self.static_assets = dir;
        self
    }
}

/// Build application router
///
/// Routes match on the true HTTP verb; see [`build_app`] for form tunnelling.
pub fn build_router(state: AppState) -> Router {
    let mut router = Router::new()
        .merge(api::page_routes())
        .merge(api::contact_routes())
        .merge(api::program_study_routes())
        .merge(api::address_routes())
        .merge(api::health_routes())
        .fallback(api::not_found);

    if let Some(dir) = &state.static_assets {
        router = router.nest_service("/static", ServeDir::new(dir));
    }

    router
        .layer(middleware::from_fn_with_state(
            state.clone(),
            session::session_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Rewrite `POST ...?_method=PUT|DELETE|PATCH` into the named verb
///
/// HTML forms can only submit GET and POST. Any other method, or an
/// unrecognised `_method` value, passes through untouched.
pub fn method_override(mut request: Request) -> Request {
    if request.method() != Method::POST {
        return request;
    }

    if let Some(method) = requested_method(request.uri()) {
        debug!("Method override: POST -> {} {}", method, request.uri().path());
        *request.method_mut() = method;
    }

    request
}

fn requested_method(uri: &Uri) -> Option<Method> {
    let value = uri
        .query()?
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(name, _)| *name == "_method")
        .map(|(_, value)| value.to_ascii_uppercase())?;

    match value.as_str() {
        "PUT" => Some(Method::PUT),
        "DELETE" => Some(Method::DELETE),
        "PATCH" => Some(Method::PATCH),
        _ => None,
    }
}

/// Router wrapped in the method override
///
/// The rewrite has to happen before routing, so it wraps the whole router
/// rather than being added with `Router::layer`.
pub type App = MapRequest<Router, fn(Request) -> Request>;

/// Build the complete application service
pub fn build_app(state: AppState) -> App {
    MapRequest::new(build_router(state), method_override as fn(Request) -> Request)
}
