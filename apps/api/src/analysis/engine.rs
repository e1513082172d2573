//! Analysis engine — orchestrates the job-fit pipeline.
//!
//! Flow: validate inputs → build prompt → single LLM call → schema parse →
//! clamp scores → derive confidence → attach metadata → persist atomically.
//!
//! There are no retries at any step. A failed model call or an unparseable
//! response surfaces immediately; resubmission is the caller's decision.

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::analysis::confidence::{confidence_score, ConfidencePenalties};
use crate::analysis::prompts::{ANALYSIS_PROMPT_TEMPLATE, ANALYSIS_SYSTEM};
use crate::analysis::schema::{AnalysisMetadata, AnalysisPayload, JobFitAnalysis};
use crate::errors::AppError;
use crate::llm_client::{LlmClient, LlmError, MODEL};
use crate::storage::{AnalysisStore, StoredAnalysis};

/// Interpolates resume and job description into the analysis prompt.
pub fn build_analysis_prompt(resume_text: &str, job_description: &str) -> String {
    ANALYSIS_PROMPT_TEMPLATE
        .replace("{resume}", resume_text)
        .replace("{job_description}", job_description)
}

/// A response that fails to deserialize against the schema is a schema
/// violation (422, fail closed); everything else is a model-call failure.
fn map_llm_error(e: LlmError) -> AppError {
    match e {
        LlmError::Parse(err) => AppError::SchemaValidation(err.to_string()),
        LlmError::EmptyContent => {
            AppError::SchemaValidation("model returned no text content".to_string())
        }
        other => AppError::Llm(format!("job-fit analysis failed: {other}")),
    }
}

/// Runs a full job-fit analysis and persists the result.
///
/// Persisting the record and charging the usage counter happen as one
/// atomic unit inside the store; a failure there means the caller sees an
/// error and no half-written state.
pub async fn analyze_job_fit(
    store: &dyn AnalysisStore,
    llm: &LlmClient,
    penalties: &ConfidencePenalties,
    user_id: Uuid,
    resume_text: &str,
    job_description: &str,
) -> Result<StoredAnalysis, AppError> {
    // Checked before any I/O.
    if resume_text.trim().is_empty() {
        return Err(AppError::Validation("resume text is required".to_string()));
    }
    if job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job description is required".to_string(),
        ));
    }

    let prompt = build_analysis_prompt(resume_text, job_description);
    let mut payload: AnalysisPayload = llm
        .call_json(&prompt, ANALYSIS_SYSTEM)
        .await
        .map_err(map_llm_error)?;

    payload.clamp_scores();
    let confidence = confidence_score(&payload, penalties);

    let analysis = JobFitAnalysis {
        payload,
        metadata: AnalysisMetadata {
            analysis_timestamp: Utc::now(),
            model_version: MODEL.to_string(),
            confidence_score: confidence,
        },
    };

    let created_at = analysis.metadata.analysis_timestamp;
    let id = store.record_analysis(user_id, &analysis).await?;
    info!("Analysis {id} recorded for user {user_id} (confidence {confidence})");

    Ok(StoredAnalysis {
        id,
        created_at,
        analysis,
    })
}
