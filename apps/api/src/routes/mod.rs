pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::diagnosis::handlers as api;
use crate::report::handlers as pages;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Server-rendered flow
        .route("/", get(pages::handle_home))
        .route("/sessions", post(pages::handle_start))
        .route(
            "/sessions/:id/diagnosis",
            get(pages::handle_diagnosis_form).post(pages::handle_diagnosis_submit),
        )
        .route("/sessions/:id/magazine", get(pages::handle_magazine))
        .route("/sessions/:id/magazine/pdf", get(pages::handle_magazine_pdf))
        .route("/sessions/:id/reset", post(pages::handle_reset))
        // JSON API
        .route("/api/v1/catalog", get(api::handle_get_catalog))
        .route("/api/v1/profile", post(api::handle_profile))
        .route("/api/v1/sessions", post(api::handle_create_session))
        .route(
            "/api/v1/sessions/:id",
            get(api::handle_get_session).delete(api::handle_reset_session),
        )
        .route(
            "/api/v1/sessions/:id/diagnosis",
            post(api::handle_submit_diagnosis),
        )
        .route("/api/v1/sessions/:id/report", get(api::handle_get_report))
        .route(
            "/api/v1/sessions/:id/report/pdf",
            get(api::handle_export_pdf),
        )
        .with_state(state)
}
