//! Address handlers
//!
//! Addresses have no natural key; everything goes through the surrogate id.

use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Extension, Form, Router,
};
use tracing::info;
use uuid::Uuid;

use super::rejected;
use crate::db::addresses;
use crate::error::{ApiError, ApiResult};
use crate::models::{parse_id, AddressForm};
use crate::session::SessionId;
use crate::validation::address_validator;
use crate::{views, AppState};

pub const MSG_ADDED: &str = "Address added successfully!";
pub const MSG_UPDATED: &str = "Address updated successfully!";
pub const MSG_DELETED: &str = "Address deleted successfully!";
pub const MSG_NOT_FOUND: &str = "Address not found!";

fn path_id(raw: &str) -> Result<Uuid, ApiError> {
    parse_id(raw).ok_or_else(|| ApiError::NotFound(format!("Address {}", raw)))
}

/// GET /address
pub async fn list_addresses(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
) -> ApiResult<Html<String>> {
    let all = addresses::list(&state.db).await?;
    let flash = state.flash.take(&session).await;
    Ok(views::addresses::list(&all, flash.as_deref()))
}

/// GET /address/add
pub async fn add_address_form() -> Html<String> {
    views::addresses::add_form(&AddressForm::default(), &[])
}

/// POST /address
pub async fn create_address(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    Form(form): Form<AddressForm>,
) -> ApiResult<Response> {
    let form = AddressForm {
        id: None,
        ..form.normalized()
    };

    let errors = address_validator().validate(&form).await?;
    if !errors.is_empty() {
        return Ok(rejected(views::addresses::add_form(&form, &errors), &errors));
    }

    let address = addresses::insert(&state.db, &form).await?;
    info!("Created address {} in {}", address.id, address.city);
    state.flash.set(&session, MSG_ADDED).await;

    Ok(Redirect::to("/address").into_response())
}

/// GET /address/edit/:id
pub async fn edit_address_form(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Html<String>> {
    let id = path_id(&raw_id)?;
    let address = addresses::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Address {}", id)))?;

    Ok(views::addresses::edit_form(&AddressForm::from(&address), &[]))
}

/// PUT /address
pub async fn update_address(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    Form(form): Form<AddressForm>,
) -> ApiResult<Response> {
    let form = form.normalized();
    let id = form
        .own_id()
        .ok_or_else(|| ApiError::NotFound("Address".to_string()))?;

    let errors = address_validator().validate(&form).await?;
    if !errors.is_empty() {
        return Ok(rejected(views::addresses::edit_form(&form, &errors), &errors));
    }

    if !addresses::update(&state.db, id, &form).await? {
        return Err(ApiError::NotFound(format!("Address {}", id)));
    }

    info!("Updated address {}", id);
    state.flash.set(&session, MSG_UPDATED).await;
    Ok(Redirect::to("/address").into_response())
}

/// DELETE /address/:id
///
/// An unparseable id cannot match a record, so it takes the "not found" path.
pub async fn delete_address(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    Path(raw_id): Path<String>,
) -> ApiResult<Redirect> {
    let deleted = match parse_id(&raw_id) {
        Some(id) => addresses::delete_by_id(&state.db, id).await?,
        None => false,
    };

    if deleted {
        info!("Deleted address {}", raw_id);
        state.flash.set(&session, MSG_DELETED).await;
    } else {
        state.flash.set(&session, MSG_NOT_FOUND).await;
    }

    Ok(Redirect::to("/address"))
}

/// GET /address/:id
pub async fn address_detail(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Html<String>> {
    let id = path_id(&raw_id)?;
    let address = addresses::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Address {}", id)))?;

    Ok(views::addresses::detail(&address))
}

pub fn address_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/address",
            get(list_addresses).post(create_address).put(update_address),
        )
        .route("/address/add", get(add_address_form))
        .route("/address/edit/:id", get(edit_address_form))
        .route("/address/:id", get(address_detail).delete(delete_address))
}
