//! Persistence adapter boundary.
//!
//! The core never talks to Postgres directly: handlers and the analysis
//! engine hold an `Arc<dyn AnalysisStore>` and call these contracts. Every
//! operation is scoped by `user_id`; an id that exists but belongs to
//! another user behaves as not-found, never as a distinct error.

pub mod files;
#[cfg(test)]
pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::analysis::schema::JobFitAnalysis;
use crate::errors::AppError;
use crate::models::resume::Template;

/// A persisted analysis with its storage identity.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredAnalysis {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub analysis: JobFitAnalysis,
}

#[async_trait]
pub trait AnalysisStore: Send + Sync {
    /// Persists an analysis and increments the user's usage counter as one
    /// atomic unit. Either both writes become visible or neither does; an
    /// analysis must never be recorded without the usage charge.
    async fn record_analysis(
        &self,
        user_id: Uuid,
        analysis: &JobFitAnalysis,
    ) -> Result<Uuid, AppError>;

    /// All analyses owned by the user, newest first.
    async fn list_analyses(&self, user_id: Uuid) -> Result<Vec<StoredAnalysis>, AppError>;

    async fn get_analysis(
        &self,
        user_id: Uuid,
        id: Uuid,
    ) -> Result<Option<StoredAnalysis>, AppError>;

    /// The user's most recent analysis, if any.
    async fn latest_analysis(&self, user_id: Uuid) -> Result<Option<StoredAnalysis>, AppError>;

    /// Deletes one analysis. Returns `false` when the id does not exist or
    /// is owned by someone else.
    async fn delete_analysis(&self, user_id: Uuid, id: Uuid) -> Result<bool, AppError>;

    /// Lifetime usage charge total for the user.
    async fn usage_count(&self, user_id: Uuid) -> Result<i64, AppError>;

    /// Saves (or overwrites) a named resume snapshot.
    async fn save_template(&self, user_id: Uuid, template: &Template) -> Result<(), AppError>;

    async fn list_templates(&self, user_id: Uuid) -> Result<Vec<Template>, AppError>;
}
