//! Axum route handlers for resume ingestion.

use axum::extract::{Multipart, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::ats::optimize_for_ats;
use crate::errors::AppError;
use crate::extraction::document::extract_document_text;
use crate::extraction::fields::extract_resume_fields;
use crate::extraction::normalizer::merge_extracted;
use crate::models::extracted::ExtractedResumeData;
use crate::models::resume::{ResumeData, ResumeDataPatch};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub extracted: ExtractedResumeData,
    pub page_count: usize,
    pub file_url: String,
}

/// POST /api/v1/resumes/upload
///
/// Multipart upload: parses the PDF, runs field extraction over the page
/// text, and retains the original file in the blob store. An unreadable
/// document is a 400; the caller falls back to manual entry.
pub async fn handle_upload(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let mut file = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart body: {e}")))?
    {
        if field.name() == Some("resume") {
            let filename = field.file_name().unwrap_or("resume.pdf").to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("could not read upload: {e}")))?;
            file = Some((filename, data));
        }
    }

    let (filename, data) =
        file.ok_or_else(|| AppError::Validation("missing 'resume' file field".to_string()))?;

    let document = extract_document_text(&data)?;
    info!(
        "Extracted {} page(s) ({} chars) from {filename}",
        document.page_count,
        document.text.len()
    );

    let extracted = extract_resume_fields(&document.text);

    let key = format!("resumes/{}/{}-{}", params.user_id, Uuid::new_v4(), filename);
    let file_url = state
        .files
        .store(data.to_vec(), &key, "application/pdf")
        .await?;

    Ok(Json(UploadResponse {
        extracted,
        page_count: document.page_count,
        file_url,
    }))
}

#[derive(Debug, Deserialize)]
pub struct NormalizeRequest {
    /// The editing session's current canonical record. Defaults to an empty
    /// resume for a fresh session.
    #[serde(default)]
    pub resume_data: ResumeData,
    pub extracted: ExtractedResumeData,
}

/// POST /api/v1/resumes/normalize
///
/// Merges an extraction into the caller-owned canonical record and returns
/// the result. Stateless: the session data travels with the request.
pub async fn handle_normalize(Json(request): Json<NormalizeRequest>) -> Json<ResumeData> {
    Json(merge_extracted(&request.resume_data, &request.extracted))
}

#[derive(Debug, Deserialize)]
pub struct UpdateResumeRequest {
    /// The editing session's current canonical record.
    #[serde(default)]
    pub resume_data: ResumeData,
    pub patch: ResumeDataPatch,
}

/// POST /api/v1/resumes/update
///
/// Applies a partial edit to a caller-owned resume record. The session
/// data travels with the request; there is no process-wide resume state.
pub async fn handle_update_resume(Json(request): Json<UpdateResumeRequest>) -> Json<ResumeData> {
    let mut resume = request.resume_data;
    resume.apply(request.patch);
    Json(resume)
}

#[derive(Debug, Deserialize)]
pub struct AtsOptimizeRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct AtsOptimizeResponse {
    pub optimized: String,
}

/// POST /api/v1/resumes/ats-optimize
pub async fn handle_ats_optimize(
    Json(request): Json<AtsOptimizeRequest>,
) -> Json<AtsOptimizeResponse> {
    Json(AtsOptimizeResponse {
        optimized: optimize_for_ats(&request.text),
    })
}
