pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::extraction::handlers as extraction;
use crate::state::AppState;
use crate::templates;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Resume ingestion
        .route("/api/v1/resumes/upload", post(extraction::handle_upload))
        .route(
            "/api/v1/resumes/normalize",
            post(extraction::handle_normalize),
        )
        .route(
            "/api/v1/resumes/update",
            post(extraction::handle_update_resume),
        )
        .route(
            "/api/v1/resumes/ats-optimize",
            post(extraction::handle_ats_optimize),
        )
        // Job-fit analysis
        .route(
            "/api/v1/analyses",
            post(analysis::handle_analyze).get(analysis::handle_list_analyses),
        )
        .route(
            "/api/v1/analyses/:id",
            get(analysis::handle_get_analysis).delete(analysis::handle_delete_analysis),
        )
        .route("/api/v1/chat", post(analysis::handle_chat))
        // Templates
        .route(
            "/api/v1/templates",
            post(templates::handle_save_template).get(templates::handle_list_templates),
        )
        .with_state(state)
}
