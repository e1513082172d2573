//! The job-fit analysis output schema.
//!
//! The generative model is an adversarial, unreliable text source: its
//! response is deserialized against these types before any field is
//! trusted, and a response that does not match fails closed. Wire format is
//! camelCase, matching the schema embedded in the prompt.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How well a single skill from the job description is covered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchLevel {
    High,
    Medium,
    Low,
    Missing,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Strength {
    pub skill: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImprovementArea {
    pub area: String,
    pub suggestion: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillMatch {
    pub skill: String,
    pub match_level: MatchLevel,
    pub comment: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillsMatch {
    pub technical: Vec<SkillMatch>,
    pub soft: Vec<SkillMatch>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceReview {
    pub company: String,
    pub position: String,
    pub duration: String,
    pub key_points: Vec<String>,
    pub relevance: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectReview {
    pub name: String,
    pub description: String,
    pub key_points: Vec<String>,
    pub relevance: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelevantExperience {
    pub experience: String,
    pub relevance: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceRelevance {
    pub score: f64,
    pub relevant_experiences: Vec<RelevantExperience>,
    pub missing_experiences: Vec<String>,
}

/// Scored free-text verdict, used for both education and culture fit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionFit {
    pub score: f64,
    pub comment: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtsImprovement {
    pub section: String,
    pub suggestion: String,
}

/// Everything the model produces. Metadata is attached server-side; the
/// model never supplies it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisPayload {
    pub job_fit_percentage: f64,
    pub overall_assessment: String,
    pub strengths: Vec<Strength>,
    pub areas_for_improvement: Vec<ImprovementArea>,
    pub recommendations: Vec<String>,
    pub skills_match: SkillsMatch,
    pub experience_analysis: Vec<ExperienceReview>,
    pub project_analysis: Vec<ProjectReview>,
    pub experience_relevance: ExperienceRelevance,
    pub education_fit: SectionFit,
    pub culture_fit: SectionFit,
    pub ats_improvements: Vec<AtsImprovement>,
}

impl AnalysisPayload {
    /// Clamps every numeric score into [0, 100]. Structure is enforced by
    /// deserialization; range is normalized here rather than rejected.
    pub fn clamp_scores(&mut self) {
        self.job_fit_percentage = self.job_fit_percentage.clamp(0.0, 100.0);
        self.experience_relevance.score = self.experience_relevance.score.clamp(0.0, 100.0);
        self.education_fit.score = self.education_fit.score.clamp(0.0, 100.0);
        self.culture_fit.score = self.culture_fit.score.clamp(0.0, 100.0);
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisMetadata {
    pub analysis_timestamp: DateTime<Utc>,
    pub model_version: String,
    /// Derived from the shape of the validated response, never from the
    /// model's self-report. See `confidence`.
    pub confidence_score: f64,
}

/// A complete, validated job-fit assessment. Immutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobFitAnalysis {
    #[serde(flatten)]
    pub payload: AnalysisPayload,
    pub metadata: AnalysisMetadata,
}
