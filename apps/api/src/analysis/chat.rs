//! Chat-style follow-up over the user's most recent job-fit analysis.
//!
//! Pure templated prompt construction: the stored analysis fields are
//! interpolated into a coaching prompt and the model's free-text answer is
//! returned as-is. Requires at least one persisted analysis.

use serde::Serialize;
use uuid::Uuid;

use crate::analysis::prompts::{CHAT_PROMPT_TEMPLATE, CHAT_SYSTEM};
use crate::analysis::schema::JobFitAnalysis;
use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::storage::AnalysisStore;

/// Interpolates the stored analysis and the user's question into the chat
/// prompt. Collections are embedded as pretty-printed JSON blocks.
pub fn build_chat_prompt(analysis: &JobFitAnalysis, question: &str) -> String {
    let payload = &analysis.payload;
    CHAT_PROMPT_TEMPLATE
        .replace(
            "{job_fit_percentage}",
            &payload.job_fit_percentage.to_string(),
        )
        .replace("{overall_assessment}", &payload.overall_assessment)
        .replace("{strengths}", &json_block(&payload.strengths))
        .replace(
            "{areas_for_improvement}",
            &json_block(&payload.areas_for_improvement),
        )
        .replace("{recommendations}", &json_block(&payload.recommendations))
        .replace("{skills_match}", &json_block(&payload.skills_match))
        .replace(
            "{experience_analysis}",
            &json_block(&payload.experience_analysis),
        )
        .replace("{project_analysis}", &json_block(&payload.project_analysis))
        .replace("{question}", question)
}

fn json_block<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "[]".to_string())
}

/// Answers a free-text question against the user's most recent analysis.
pub async fn chat_about_analysis(
    store: &dyn AnalysisStore,
    llm: &LlmClient,
    user_id: Uuid,
    question: &str,
) -> Result<String, AppError> {
    if question.trim().is_empty() {
        return Err(AppError::Validation("question is required".to_string()));
    }

    let latest = store.latest_analysis(user_id).await?.ok_or_else(|| {
        AppError::NotFound(
            "No prior analysis found. Run a job-fit analysis before asking follow-up questions."
                .to_string(),
        )
    })?;

    let prompt = build_chat_prompt(&latest.analysis, question);
    let response = llm
        .call(&prompt, CHAT_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("chat follow-up failed: {e}")))?;

    let answer = response
        .text()
        .ok_or_else(|| AppError::Llm("model returned no text content".to_string()))?;

    Ok(answer.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::schema::{
        AnalysisMetadata, AnalysisPayload, ExperienceRelevance, SectionFit, SkillsMatch, Strength,
    };
    use crate::storage::memory::MemoryAnalysisStore;
    use chrono::Utc;

    fn analysis_with_strength(skill: &str) -> JobFitAnalysis {
        JobFitAnalysis {
            payload: AnalysisPayload {
                job_fit_percentage: 72.0,
                overall_assessment: "Solid candidate".to_string(),
                strengths: vec![Strength {
                    skill: skill.to_string(),
                    description: "Years of production use".to_string(),
                }],
                areas_for_improvement: vec![],
                recommendations: vec![],
                skills_match: SkillsMatch {
                    technical: vec![],
                    soft: vec![],
                },
                experience_analysis: vec![],
                project_analysis: vec![],
                experience_relevance: ExperienceRelevance {
                    score: 50.0,
                    relevant_experiences: vec![],
                    missing_experiences: vec![],
                },
                education_fit: SectionFit {
                    score: 60.0,
                    comment: "Relevant degree".to_string(),
                },
                culture_fit: SectionFit {
                    score: 55.0,
                    comment: "Likely fit".to_string(),
                },
                ats_improvements: vec![],
            },
            metadata: AnalysisMetadata {
                analysis_timestamp: Utc::now(),
                model_version: "test".to_string(),
                confidence_score: 40.0,
            },
        }
    }

    #[test]
    fn test_prompt_interpolates_analysis_and_question() {
        let analysis = analysis_with_strength("Rust");
        let prompt = build_chat_prompt(&analysis, "How do I improve my chances?");
        assert!(prompt.contains("72%"));
        assert!(prompt.contains("Solid candidate"));
        assert!(prompt.contains("Rust"));
        assert!(prompt.contains("How do I improve my chances?"));
        assert!(!prompt.contains("{strengths}"));
        assert!(!prompt.contains("{question}"));
    }

    #[tokio::test]
    async fn test_no_prior_analysis_is_not_found() {
        let store = MemoryAnalysisStore::new();
        let llm = LlmClient::new("test-key".to_string());
        let result = chat_about_analysis(&store, &llm, Uuid::new_v4(), "Am I a fit?").await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_empty_question_rejected_before_any_io() {
        let store = MemoryAnalysisStore::new();
        let user = Uuid::new_v4();
        store
            .record_analysis(user, &analysis_with_strength("Rust"))
            .await
            .unwrap();
        let llm = LlmClient::new("test-key".to_string());
        let result = chat_about_analysis(&store, &llm, user, "  ").await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
