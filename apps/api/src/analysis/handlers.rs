//! Axum route handlers for the analysis API.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analysis::chat::chat_about_analysis;
use crate::analysis::engine::analyze_job_fit;
use crate::errors::AppError;
use crate::state::AppState;
use crate::storage::StoredAnalysis;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub user_id: Uuid,
    pub resume_text: String,
    pub job_description: String,
}

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub user_id: Uuid,
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub answer: String,
}

/// POST /api/v1/analyses
///
/// Full pipeline: prompt → model → schema validation → confidence →
/// atomic persist + usage charge.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<StoredAnalysis>, AppError> {
    // Admission control: a precondition check against the usage counter,
    // never a lock. Configured via DAILY_ANALYSIS_LIMIT.
    if let Some(limit) = state.config.daily_analysis_limit {
        let used = state.store.usage_count(request.user_id).await?;
        if used >= limit as i64 {
            return Err(AppError::Validation(format!(
                "analysis limit of {limit} reached"
            )));
        }
    }

    let stored = analyze_job_fit(
        state.store.as_ref(),
        &state.llm,
        &state.penalties,
        request.user_id,
        &request.resume_text,
        &request.job_description,
    )
    .await?;

    Ok(Json(stored))
}

/// GET /api/v1/analyses
pub async fn handle_list_analyses(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<StoredAnalysis>>, AppError> {
    let analyses = state.store.list_analyses(params.user_id).await?;
    Ok(Json(analyses))
}

/// GET /api/v1/analyses/:id
pub async fn handle_get_analysis(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<StoredAnalysis>, AppError> {
    let analysis = state
        .store
        .get_analysis(params.user_id, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Analysis {id} not found")))?;
    Ok(Json(analysis))
}

/// DELETE /api/v1/analyses/:id
pub async fn handle_delete_analysis(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<StatusCode, AppError> {
    let deleted = state.store.delete_analysis(params.user_id, id).await?;
    if !deleted {
        return Err(AppError::NotFound(format!("Analysis {id} not found")));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/chat
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let answer = chat_about_analysis(
        state.store.as_ref(),
        &state.llm,
        request.user_id,
        &request.question,
    )
    .await?;
    Ok(Json(ChatResponse { answer }))
}
