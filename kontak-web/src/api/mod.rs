//! HTTP handlers for kontak-web
//!
//! Every mutating route follows the same lifecycle: validate the submitted
//! form, perform one store call, set a flash message, redirect to the list.
//! A rejected submission re-renders its form with the errors and the values
//! the user typed.

pub mod addresses;
pub mod contacts;
pub mod health;
pub mod pages;
pub mod program_studies;

pub use addresses::address_routes;
pub use contacts::contact_routes;
pub use health::health_routes;
pub use pages::{not_found, page_routes};
pub use program_studies::program_study_routes;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tracing::debug;

use crate::validation::FieldError;

/// Re-rendered form for a rejected submission
fn rejected(page: Html<String>, errors: &[FieldError]) -> Response {
    debug!(
        "Submission rejected: {}",
        errors
            .iter()
            .map(|e| e.field)
            .collect::<Vec<_>>()
            .join(", ")
    );
    (StatusCode::UNPROCESSABLE_ENTITY, page).into_response()
}
