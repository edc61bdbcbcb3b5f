//! Contact handlers
//!
//! Contacts are addressed by name in URLs. Update and delete carry their key
//! in the form body (`id` and `name` respectively).

use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Extension, Form, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

use super::rejected;
use crate::db::contacts::{self, ContactNames};
use crate::error::{ApiError, ApiResult};
use crate::models::ContactForm;
use crate::session::SessionId;
use crate::validation::{contact_validator, FieldError, MSG_CONTACT_NAME_TAKEN};
use crate::{views, AppState};

pub const MSG_ADDED: &str = "Contact added successfully!";
pub const MSG_UPDATED: &str = "Contact updated successfully!";
pub const MSG_DELETED: &str = "Contact deleted successfully!";
pub const MSG_NOT_FOUND: &str = "Contact not found!";

/// Delete request body
#[derive(Debug, Deserialize)]
pub struct DeleteContact {
    #[serde(default)]
    pub name: String,
}

fn duplicate_name() -> Vec<FieldError> {
    vec![FieldError::new("name", MSG_CONTACT_NAME_TAKEN)]
}

/// GET /contact
pub async fn list_contacts(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
) -> ApiResult<Html<String>> {
    let all = contacts::list(&state.db).await?;
    let flash = state.flash.take(&session).await;
    Ok(views::contacts::list(&all, flash.as_deref()))
}

/// GET /contact/add
pub async fn add_contact_form() -> Html<String> {
    views::contacts::add_form(&ContactForm::default(), &[])
}

/// POST /contact
pub async fn create_contact(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    Form(form): Form<ContactForm>,
) -> ApiResult<Response> {
    let form = ContactForm {
        id: None,
        ..form.normalized()
    };

    let errors = contact_validator(Arc::new(ContactNames(state.db.clone())))
        .validate(&form)
        .await?;
    if !errors.is_empty() {
        return Ok(rejected(views::contacts::add_form(&form, &errors), &errors));
    }

    match contacts::insert(&state.db, &form).await {
        Ok(contact) => {
            info!("Created contact {} ({})", contact.name, contact.id);
            state.flash.set(&session, MSG_ADDED).await;
            Ok(Redirect::to("/contact").into_response())
        }
        Err(kontak_common::Error::Conflict(_)) => {
            let errors = duplicate_name();
            Ok(rejected(views::contacts::add_form(&form, &errors), &errors))
        }
        Err(e) => Err(e.into()),
    }
}

/// GET /contact/edit/:key
pub async fn edit_contact_form(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Html<String>> {
    let contact = contacts::find_by_name(&state.db, &name)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Contact '{}'", name)))?;

    Ok(views::contacts::edit_form(&ContactForm::from(&contact), &[]))
}

/// PUT /contact
pub async fn update_contact(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    Form(form): Form<ContactForm>,
) -> ApiResult<Response> {
    let form = form.normalized();
    let id = form
        .own_id()
        .ok_or_else(|| ApiError::NotFound("Contact".to_string()))?;

    let errors = contact_validator(Arc::new(ContactNames(state.db.clone())))
        .validate(&form)
        .await?;
    if !errors.is_empty() {
        return Ok(rejected(views::contacts::edit_form(&form, &errors), &errors));
    }

    match contacts::update(&state.db, id, &form).await {
        Ok(true) => {
            info!("Updated contact {} ({})", form.name, id);
            state.flash.set(&session, MSG_UPDATED).await;
            Ok(Redirect::to("/contact").into_response())
        }
        Ok(false) => Err(ApiError::NotFound(format!("Contact {}", id))),
        Err(kontak_common::Error::Conflict(_)) => {
            let errors = duplicate_name();
            Ok(rejected(views::contacts::edit_form(&form, &errors), &errors))
        }
        Err(e) => Err(e.into()),
    }
}

/// DELETE /contact
pub async fn delete_contact(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    Form(body): Form<DeleteContact>,
) -> ApiResult<Redirect> {
    let name = body.name.trim();

    if contacts::delete_by_name(&state.db, name).await? {
        info!("Deleted contact {}", name);
        state.flash.set(&session, MSG_DELETED).await;
    } else {
        state.flash.set(&session, MSG_NOT_FOUND).await;
    }

    Ok(Redirect::to("/contact"))
}

/// GET /contact/:key
pub async fn contact_detail(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Html<String>> {
    let contact = contacts::find_by_name(&state.db, &name)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Contact '{}'", name)))?;

    Ok(views::contacts::detail(&contact))
}

pub fn contact_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/contact",
            get(list_contacts)
                .post(create_contact)
                .put(update_contact)
                .delete(delete_contact),
        )
        .route("/contact/add", get(add_contact_form))
        .route("/contact/edit/:key", get(edit_contact_form))
        .route("/contact/:key", get(contact_detail))
}
