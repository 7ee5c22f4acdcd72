//! Axum handlers for the server-rendered flow: home → diagnosis → magazine.
//!
//! Navigation is by 303 redirects; the session id travels in the path.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::report::magazine::PDF_NOTICE;
use crate::report::{build_report, render_diagnosis, render_home, render_magazine};
use crate::state::AppState;
use crate::survey::{validate_survey, SurveyForm};

fn session_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Session {id} not found"))
}

fn diagnosis_path(id: Uuid) -> String {
    format!("/sessions/{id}/diagnosis")
}

/// GET /
pub async fn handle_home() -> Html<String> {
    Html(render_home())
}

/// POST /sessions
///
/// Opens a session and sends the visitor to the diagnosis form.
pub async fn handle_start(State(state): State<AppState>) -> Redirect {
    let session = state.sessions.create().await;
    info!("Session {} started", session.id);
    Redirect::to(&diagnosis_path(session.id))
}

/// GET /sessions/:id/diagnosis
///
/// Pre-fills the form with the previous answers when re-diagnosing.
pub async fn handle_diagnosis_form(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Html<String>, AppError> {
    let session = state
        .sessions
        .begin_diagnosis(id)
        .await
        .ok_or_else(|| session_not_found(id))?;

    let form = session
        .survey
        .as_ref()
        .map(SurveyForm::from)
        .unwrap_or_default();

    Ok(Html(render_diagnosis(id, &form, None)))
}

/// POST /sessions/:id/diagnosis
///
/// Invalid submissions re-render the form with the message (422) and leave the
/// session untouched. Valid ones are stored after the analysis pause.
pub async fn handle_diagnosis_submit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Form(form): Form<SurveyForm>,
) -> Result<Response, AppError> {
    if state.sessions.get(id).await.is_none() {
        return Err(session_not_found(id));
    }

    let survey = match validate_survey(&form) {
        Ok(survey) => survey,
        Err(err) => {
            warn!("Session {id}: diagnosis rejected ({err})");
            let page = render_diagnosis(id, &form, Some(&err.to_string()));
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(page)).into_response());
        }
    };

    let profile = survey.profile();
    info!(
        "Session {id}: diagnosed {} / {}",
        profile.skin_type, profile.concern
    );

    let delay = state.config.analysis_delay;
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    state
        .sessions
        .submit(id, survey)
        .await
        .ok_or_else(|| session_not_found(id))?;

    Ok(Redirect::to(&format!("/sessions/{id}/magazine")).into_response())
}

async fn magazine_page(
    state: &AppState,
    id: Uuid,
    notice: Option<&str>,
) -> Result<Response, AppError> {
    let session = state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| session_not_found(id))?;

    let Some(survey) = session.report_survey() else {
        return Ok(Redirect::to(&diagnosis_path(id)).into_response());
    };

    let report = build_report(survey, &state.catalog, Utc::now().date_naive());
    Ok(Html(render_magazine(&report, id, notice)).into_response())
}

/// GET /sessions/:id/magazine
///
/// Sessions without a submitted diagnosis are sent back to the form.
pub async fn handle_magazine(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    magazine_page(&state, id, None).await
}

/// GET /sessions/:id/magazine/pdf
///
/// No PDF renderer yet: the magazine is shown again with a notice.
pub async fn handle_magazine_pdf(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    info!("Session {id}: PDF download requested");
    magazine_page(&state, id, Some(PDF_NOTICE)).await
}

/// POST /sessions/:id/reset
pub async fn handle_reset(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Redirect, AppError> {
    state
        .sessions
        .reset(id)
        .await
        .ok_or_else(|| session_not_found(id))?;
    info!("Session {id} reset");
    Ok(Redirect::to("/"))
}
