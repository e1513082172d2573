//! Confidence scoring — a derived completeness metric over a validated
//! analysis.
//!
//! The model's self-reported certainty is not trusted. Instead, the shape
//! of the structured output serves as a cheap, reproducible, auditable
//! proxy for analysis quality: start at 100 and subtract a fixed penalty
//! for every section the model left empty. The penalty values are policy
//! chosen empirically, not a law of the domain, hence the table.

use crate::analysis::schema::AnalysisPayload;

/// Per-section penalties applied when an analysis section comes back empty
/// (or zero-scored, for the fit verdicts). The defaults sum to exactly 100,
/// so a fully hollow response scores 0 and a fully populated one scores 100.
#[derive(Debug, Clone)]
pub struct ConfidencePenalties {
    pub empty_strengths: u32,
    pub empty_areas_for_improvement: u32,
    pub empty_recommendations: u32,
    pub empty_technical_skills: u32,
    pub empty_soft_skills: u32,
    pub empty_experience_analysis: u32,
    pub empty_project_analysis: u32,
    pub empty_relevant_experiences: u32,
    pub zero_education_fit: u32,
    pub zero_culture_fit: u32,
    pub empty_ats_improvements: u32,
}

impl Default for ConfidencePenalties {
    fn default() -> Self {
        Self {
            empty_strengths: 10,
            empty_areas_for_improvement: 10,
            empty_recommendations: 10,
            empty_technical_skills: 10,
            empty_soft_skills: 10,
            empty_experience_analysis: 15,
            empty_project_analysis: 10,
            empty_relevant_experiences: 10,
            zero_education_fit: 5,
            zero_culture_fit: 5,
            empty_ats_improvements: 5,
        }
    }
}

/// Computes the confidence score for a validated payload. Clamped to
/// [0, 100] regardless of how the penalty table is configured.
pub fn confidence_score(payload: &AnalysisPayload, penalties: &ConfidencePenalties) -> f64 {
    let mut score: i64 = 100;

    if payload.strengths.is_empty() {
        score -= penalties.empty_strengths as i64;
    }
    if payload.areas_for_improvement.is_empty() {
        score -= penalties.empty_areas_for_improvement as i64;
    }
    if payload.recommendations.is_empty() {
        score -= penalties.empty_recommendations as i64;
    }
    if payload.skills_match.technical.is_empty() {
        score -= penalties.empty_technical_skills as i64;
    }
    if payload.skills_match.soft.is_empty() {
        score -= penalties.empty_soft_skills as i64;
    }
    if payload.experience_analysis.is_empty() {
        score -= penalties.empty_experience_analysis as i64;
    }
    if payload.project_analysis.is_empty() {
        score -= penalties.empty_project_analysis as i64;
    }
    if payload.experience_relevance.relevant_experiences.is_empty() {
        score -= penalties.empty_relevant_experiences as i64;
    }
    if payload.education_fit.score == 0.0 {
        score -= penalties.zero_education_fit as i64;
    }
    if payload.culture_fit.score == 0.0 {
        score -= penalties.zero_culture_fit as i64;
    }
    if payload.ats_improvements.is_empty() {
        score -= penalties.empty_ats_improvements as i64;
    }

    score.clamp(0, 100) as f64
}
