use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// Persisted analysis record. The full validated `JobFitAnalysis` lives in
/// the `analysis` JSONB column; the scalar columns exist for listing and
/// ordering without deserializing the whole payload.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AnalysisRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub job_fit_percentage: f64,
    pub confidence_score: f64,
    pub model_version: String,
    pub analysis: Value,
    pub created_at: DateTime<Utc>,
}
