//! Named resume snapshots ("templates"): save and list, scoped by user.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::{ResumeData, Template};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct SaveTemplateRequest {
    pub user_id: Uuid,
    pub template_id: Uuid,
    pub name: String,
    pub data: ResumeData,
}

/// POST /api/v1/templates
///
/// Saves (or overwrites) a named snapshot of canonical resume data.
pub async fn handle_save_template(
    State(state): State<AppState>,
    Json(request): Json<SaveTemplateRequest>,
) -> Result<StatusCode, AppError> {
    if request.name.trim().is_empty() {
        return Err(AppError::Validation("template name is required".to_string()));
    }

    let template = Template {
        id: request.template_id,
        name: request.name,
        data: request.data,
    };
    state.store.save_template(request.user_id, &template).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/templates
pub async fn handle_list_templates(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<Template>>, AppError> {
    let templates = state.store.list_templates(params.user_id).await?;
    Ok(Json(templates))
}
