//! Postgres-backed `AnalysisStore`.
//!
//! The analysis insert and the usage-counter increment run inside one
//! transaction: a failure at either step rolls back both.

use anyhow::anyhow;
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::analysis::schema::JobFitAnalysis;
use crate::errors::AppError;
use crate::models::analysis::AnalysisRow;
use crate::models::resume::{Template, TemplateRow};
use crate::storage::{AnalysisStore, StoredAnalysis};

pub struct PgAnalysisStore {
    pool: PgPool,
}

impl PgAnalysisStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn row_to_stored(row: AnalysisRow) -> Result<StoredAnalysis, AppError> {
    let analysis: JobFitAnalysis = serde_json::from_value(row.analysis)
        .map_err(|e| AppError::Internal(anyhow!("stored analysis is corrupt: {e}")))?;
    Ok(StoredAnalysis {
        id: row.id,
        created_at: row.created_at,
        analysis,
    })
}

#[async_trait]
impl AnalysisStore for PgAnalysisStore {
    async fn record_analysis(
        &self,
        user_id: Uuid,
        analysis: &JobFitAnalysis,
    ) -> Result<Uuid, AppError> {
        let analysis_json = serde_json::to_value(analysis)
            .map_err(|e| AppError::Internal(anyhow!("analysis serialization failed: {e}")))?;
        let id = Uuid::new_v4();

        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO analyses
                (id, user_id, job_fit_percentage, confidence_score, model_version, analysis)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(analysis.payload.job_fit_percentage)
        .bind(analysis.metadata.confidence_score)
        .bind(&analysis.metadata.model_version)
        .bind(&analysis_json)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO usage_counters (user_id, analysis_count)
            VALUES ($1, 1)
            ON CONFLICT (user_id)
            DO UPDATE SET analysis_count = usage_counters.analysis_count + 1,
                          updated_at = now()
            "#,
        )
        .bind(user_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        info!("Recorded analysis {id} for user {user_id}");
        Ok(id)
    }

    async fn list_analyses(&self, user_id: Uuid) -> Result<Vec<StoredAnalysis>, AppError> {
        let rows = sqlx::query_as::<_, AnalysisRow>(
            "SELECT * FROM analyses WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(row_to_stored).collect()
    }

    async fn get_analysis(
        &self,
        user_id: Uuid,
        id: Uuid,
    ) -> Result<Option<StoredAnalysis>, AppError> {
        let row = sqlx::query_as::<_, AnalysisRow>(
            "SELECT * FROM analyses WHERE id = $1 AND user_id = $2",
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(row_to_stored).transpose()
    }

    async fn latest_analysis(&self, user_id: Uuid) -> Result<Option<StoredAnalysis>, AppError> {
        let row = sqlx::query_as::<_, AnalysisRow>(
            "SELECT * FROM analyses WHERE user_id = $1 ORDER BY created_at DESC LIMIT 1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(row_to_stored).transpose()
    }

    async fn delete_analysis(&self, user_id: Uuid, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM analyses WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn usage_count(&self, user_id: Uuid) -> Result<i64, AppError> {
        let count: Option<i64> =
            sqlx::query_scalar("SELECT analysis_count FROM usage_counters WHERE user_id = $1")
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(count.unwrap_or(0))
    }

    async fn save_template(&self, user_id: Uuid, template: &Template) -> Result<(), AppError> {
        let data = serde_json::to_value(&template.data)
            .map_err(|e| AppError::Internal(anyhow!("template serialization failed: {e}")))?;

        sqlx::query(
            r#"
            INSERT INTO resume_templates (user_id, template_id, name, data)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (user_id, template_id)
            DO UPDATE SET name = EXCLUDED.name,
                          data = EXCLUDED.data,
                          updated_at = now()
            "#,
        )
        .bind(user_id)
        .bind(template.id)
        .bind(&template.name)
        .bind(&data)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_templates(&self, user_id: Uuid) -> Result<Vec<Template>, AppError> {
        let rows = sqlx::query_as::<_, TemplateRow>(
            "SELECT * FROM resume_templates WHERE user_id = $1 ORDER BY created_at",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|row| {
                let data = serde_json::from_value(row.data)
                    .map_err(|e| AppError::Internal(anyhow!("stored template is corrupt: {e}")))?;
                Ok(Template {
                    id: row.template_id,
                    name: row.name,
                    data,
                })
            })
            .collect()
    }
}
