//! Axum route handlers for the JSON diagnosis API.

use std::collections::BTreeMap;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::catalog::{CatalogEntry, Category};
use crate::errors::AppError;
use crate::report::{build_report, Report};
use crate::session::{Session, Stage};
use crate::state::AppState;
use crate::survey::{validate_survey, SurveyForm};

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub products: BTreeMap<&'static str, BTreeMap<String, CatalogEntry>>,
    pub fallbacks: BTreeMap<&'static str, &'static str>,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub session_id: Uuid,
    pub stage: Stage,
}

fn session_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Session {id} not found"))
}

async fn require_session(state: &AppState, id: Uuid) -> Result<Session, AppError> {
    state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| session_not_found(id))
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/catalog
pub async fn handle_get_catalog(State(state): State<AppState>) -> Json<CatalogResponse> {
    let products = Category::ALL
        .into_iter()
        .map(|c| (c.as_str(), state.catalog.entries(c).clone()))
        .collect();
    let fallbacks = Category::ALL
        .into_iter()
        .map(|c| (c.as_str(), c.fallback_subtype()))
        .collect();

    Json(CatalogResponse {
        products,
        fallbacks,
    })
}

/// POST /api/v1/profile
///
/// Stateless: classifies and selects for a survey without touching any session.
pub async fn handle_profile(
    State(state): State<AppState>,
    Json(form): Json<SurveyForm>,
) -> Result<Json<Report>, AppError> {
    let survey = validate_survey(&form)?;
    Ok(Json(build_report(
        &survey,
        &state.catalog,
        Utc::now().date_naive(),
    )))
}

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<SessionResponse>) {
    let session = state.sessions.create().await;
    info!("Session {} started (api)", session.id);
    (
        StatusCode::CREATED,
        Json(SessionResponse {
            session_id: session.id,
            stage: session.stage,
        }),
    )
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Session>, AppError> {
    Ok(Json(require_session(&state, id).await?))
}

/// POST /api/v1/sessions/:id/diagnosis
///
/// Validates and stores the survey, then returns the report. An empty name is
/// rejected with 400 before the session is touched.
pub async fn handle_submit_diagnosis(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(form): Json<SurveyForm>,
) -> Result<Json<Report>, AppError> {
    require_session(&state, id).await?;

    let survey = validate_survey(&form)?;
    let report = build_report(&survey, &state.catalog, Utc::now().date_naive());
    info!(
        "Session {id}: diagnosed {} / {} (api)",
        report.profile.skin_type, report.profile.concern
    );

    state
        .sessions
        .submit(id, survey)
        .await
        .ok_or_else(|| session_not_found(id))?;

    Ok(Json(report))
}

/// GET /api/v1/sessions/:id/report
pub async fn handle_get_report(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Report>, AppError> {
    let session = require_session(&state, id).await?;
    let survey = session.report_survey().ok_or_else(|| {
        AppError::NotFound(format!("No diagnosis has been submitted for session {id}"))
    })?;

    Ok(Json(build_report(
        survey,
        &state.catalog,
        Utc::now().date_naive(),
    )))
}

/// DELETE /api/v1/sessions/:id
///
/// Starts over: the stored survey is dropped.
pub async fn handle_reset_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state
        .sessions
        .reset(id)
        .await
        .ok_or_else(|| session_not_found(id))?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/sessions/:id/report/pdf
///
/// PDF export is not available yet.
pub async fn handle_export_pdf(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    require_session(&state, id).await?;
    Err(AppError::NotImplemented)
}
