//! Study program handlers
//!
//! Programs are addressed by name for detail, edit and delete. Update is the
//! exception: the edit form targets `/program-study/:id` with the surrogate id.

use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Extension, Form, Router,
};
use std::sync::Arc;
use tracing::info;

use super::rejected;
use crate::db::program_studies::{self, ProgramNames};
use crate::error::{ApiError, ApiResult};
use crate::models::ProgramStudyForm;
use crate::session::SessionId;
use crate::validation::{program_study_validator, FieldError, MSG_PROGRAM_NAME_TAKEN};
use crate::{views, AppState};

pub const MSG_ADDED: &str = "Study program added successfully!";
pub const MSG_UPDATED: &str = "Study program updated successfully!";
pub const MSG_DELETED: &str = "Study program deleted successfully!";
pub const MSG_NOT_FOUND: &str = "Study program not found!";

fn duplicate_name() -> Vec<FieldError> {
    vec![FieldError::new("name", MSG_PROGRAM_NAME_TAKEN)]
}

/// GET /program-study
pub async fn list_program_studies(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
) -> ApiResult<Html<String>> {
    let all = program_studies::list(&state.db).await?;
    let flash = state.flash.take(&session).await;
    Ok(views::program_studies::list(&all, flash.as_deref()))
}

/// GET /programStudy/add
pub async fn add_program_study_form() -> Html<String> {
    views::program_studies::add_form(&ProgramStudyForm::default(), &[])
}

/// POST /program-study
pub async fn create_program_study(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    Form(form): Form<ProgramStudyForm>,
) -> ApiResult<Response> {
    let form = form.normalized();

    let errors = program_study_validator(Arc::new(ProgramNames(state.db.clone())))
        .validate(&form)
        .await?;
    if !errors.is_empty() {
        return Ok(rejected(
            views::program_studies::add_form(&form, &errors),
            &errors,
        ));
    }

    match program_studies::insert(&state.db, &form).await {
        Ok(program) => {
            info!("Created study program {} ({})", program.name, program.id);
            state.flash.set(&session, MSG_ADDED).await;
            Ok(Redirect::to("/program-study").into_response())
        }
        Err(kontak_common::Error::Conflict(_)) => {
            let errors = duplicate_name();
            Ok(rejected(
                views::program_studies::add_form(&form, &errors),
                &errors,
            ))
        }
        Err(e) => Err(e.into()),
    }
}

/// GET /program-study/edit/:key
pub async fn edit_program_study_form(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Html<String>> {
    let program = program_studies::find_by_name(&state.db, &name)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Study program '{}'", name)))?;

    Ok(views::program_studies::edit_form(
        &ProgramStudyForm::from(&program),
        &[],
    ))
}

/// PUT /program-study/:id
pub async fn update_program_study(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    Path(raw_id): Path<String>,
    Form(form): Form<ProgramStudyForm>,
) -> ApiResult<Response> {
    let form = form.normalized().with_id(&raw_id);
    let id = form
        .own_id()
        .ok_or_else(|| ApiError::NotFound(format!("Study program {}", raw_id)))?;

    let errors = program_study_validator(Arc::new(ProgramNames(state.db.clone())))
        .validate(&form)
        .await?;
    if !errors.is_empty() {
        return Ok(rejected(
            views::program_studies::edit_form(&form, &errors),
            &errors,
        ));
    }

    match program_studies::update(&state.db, id, &form).await {
        Ok(true) => {
            info!("Updated study program {} ({})", form.name, id);
            state.flash.set(&session, MSG_UPDATED).await;
            Ok(Redirect::to("/program-study").into_response())
        }
        Ok(false) => Err(ApiError::NotFound(format!("Study program {}", id))),
        Err(kontak_common::Error::Conflict(_)) => {
            let errors = duplicate_name();
            Ok(rejected(
                views::program_studies::edit_form(&form, &errors),
                &errors,
            ))
        }
        Err(e) => Err(e.into()),
    }
}

/// DELETE /program-study/:key
pub async fn delete_program_study(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    Path(name): Path<String>,
) -> ApiResult<Redirect> {
    if program_studies::delete_by_name(&state.db, &name).await? {
        info!("Deleted study program {}", name);
        state.flash.set(&session, MSG_DELETED).await;
    } else {
        state.flash.set(&session, MSG_NOT_FOUND).await;
    }

    Ok(Redirect::to("/program-study"))
}

/// GET /program-study/:key
pub async fn program_study_detail(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Html<String>> {
    let program = program_studies::find_by_name(&state.db, &name)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Study program '{}'", name)))?;

    Ok(views::program_studies::detail(&program))
}

/// Build study program routes
///
/// `/program-study/:key` serves detail and delete by name, and update by
/// surrogate id; the same segment carries both kinds of key.
pub fn program_study_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/program-study",
            get(list_program_studies).post(create_program_study),
        )
        .route("/programStudy/add", get(add_program_study_form))
        .route("/program-study/edit/:key", get(edit_program_study_form))
        .route(
            "/program-study/:key",
            get(program_study_detail)
                .put(update_program_study)
                .delete(delete_program_study),
        )
}
