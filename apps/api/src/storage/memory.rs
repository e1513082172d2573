//! In-memory `AnalysisStore`.
//!
//! Backs the engine tests and the atomicity property: the usage-counter
//! increment can be forced to fail, and the contract requires that a failed
//! increment leaves no analysis record behind either.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use crate::analysis::schema::JobFitAnalysis;
use crate::errors::AppError;
use crate::models::resume::Template;
use crate::storage::{AnalysisStore, StoredAnalysis};

#[derive(Default)]
struct Inner {
    /// Per-user analyses, newest first.
    analyses: HashMap<Uuid, Vec<StoredAnalysis>>,
    usage: HashMap<Uuid, i64>,
    templates: HashMap<Uuid, Vec<Template>>,
}

#[derive(Default)]
pub struct MemoryAnalysisStore {
    inner: Mutex<Inner>,
    fail_usage_increment: AtomicBool,
}

impl MemoryAnalysisStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent `record_analysis` fail at the usage-increment
    /// step until reset.
    pub fn fail_usage_increment(&self, fail: bool) {
        self.fail_usage_increment.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl AnalysisStore for MemoryAnalysisStore {
    async fn record_analysis(
        &self,
        user_id: Uuid,
        analysis: &JobFitAnalysis,
    ) -> Result<Uuid, AppError> {
        let mut inner = self.inner.lock().expect("store lock poisoned");

        // Both writes are applied under one lock, after the failure check,
        // so a failed increment leaves no analysis behind.
        if self.fail_usage_increment.load(Ordering::SeqCst) {
            return Err(AppError::Database(sqlx::Error::PoolClosed));
        }

        let id = Uuid::new_v4();
        inner.analyses.entry(user_id).or_default().insert(
            0,
            StoredAnalysis {
                id,
                created_at: analysis.metadata.analysis_timestamp,
                analysis: analysis.clone(),
            },
        );
        *inner.usage.entry(user_id).or_insert(0) += 1;

        Ok(id)
    }

    async fn list_analyses(&self, user_id: Uuid) -> Result<Vec<StoredAnalysis>, AppError> {
        let inner = self.inner.lock().expect("store lock poisoned");
        Ok(inner.analyses.get(&user_id).cloned().unwrap_or_default())
    }

    async fn get_analysis(
        &self,
        user_id: Uuid,
        id: Uuid,
    ) -> Result<Option<StoredAnalysis>, AppError> {
        let inner = self.inner.lock().expect("store lock poisoned");
        Ok(inner
            .analyses
            .get(&user_id)
            .and_then(|list| list.iter().find(|a| a.id == id).cloned()))
    }

    async fn latest_analysis(&self, user_id: Uuid) -> Result<Option<StoredAnalysis>, AppError> {
        let inner = self.inner.lock().expect("store lock poisoned");
        Ok(inner
            .analyses
            .get(&user_id)
            .and_then(|list| list.first().cloned()))
    }

    async fn delete_analysis(&self, user_id: Uuid, id: Uuid) -> Result<bool, AppError> {
        let mut inner = self.inner.lock().expect("store lock poisoned");
        let Some(list) = inner.analyses.get_mut(&user_id) else {
            return Ok(false);
        };
        let before = list.len();
        list.retain(|a| a.id != id);
        Ok(list.len() < before)
    }

    async fn usage_count(&self, user_id: Uuid) -> Result<i64, AppError> {
        let inner = self.inner.lock().expect("store lock poisoned");
        Ok(inner.usage.get(&user_id).copied().unwrap_or(0))
    }

    async fn save_template(&self, user_id: Uuid, template: &Template) -> Result<(), AppError> {
        let mut inner = self.inner.lock().expect("store lock poisoned");
        let templates = inner.templates.entry(user_id).or_default();
        templates.retain(|t| t.id != template.id);
        templates.push(template.clone());
        Ok(())
    }

    async fn list_templates(&self, user_id: Uuid) -> Result<Vec<Template>, AppError> {
        let inner = self.inner.lock().expect("store lock poisoned");
        Ok(inner.templates.get(&user_id).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::schema::{
        AnalysisMetadata, AnalysisPayload, ExperienceRelevance, SectionFit, SkillsMatch,
    };
    use chrono::Utc;

    fn analysis() -> JobFitAnalysis {
        JobFitAnalysis {
            payload: AnalysisPayload {
                job_fit_percentage: 50.0,
                overall_assessment: "ok".to_string(),
                strengths: vec![],
                areas_for_improvement: vec![],
                recommendations: vec![],
                skills_match: SkillsMatch {
                    technical: vec![],
                    soft: vec![],
                },
                experience_analysis: vec![],
                project_analysis: vec![],
                experience_relevance: ExperienceRelevance {
                    score: 0.0,
                    relevant_experiences: vec![],
                    missing_experiences: vec![],
                },
                education_fit: SectionFit {
                    score: 0.0,
                    comment: String::new(),
                },
                culture_fit: SectionFit {
                    score: 0.0,
                    comment: String::new(),
                },
                ats_improvements: vec![],
            },
            metadata: AnalysisMetadata {
                analysis_timestamp: Utc::now(),
                model_version: "test".to_string(),
                confidence_score: 0.0,
            },
        }
    }

    #[tokio::test]
    async fn test_record_then_read_back() {
        let store = MemoryAnalysisStore::new();
        let user = Uuid::new_v4();
        let id = store.record_analysis(user, &analysis()).await.unwrap();

        assert_eq!(store.usage_count(user).await.unwrap(), 1);
        assert!(store.get_analysis(user, id).await.unwrap().is_some());
        assert_eq!(store.list_analyses(user).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_failed_usage_increment_records_nothing() {
        let store = MemoryAnalysisStore::new();
        let user = Uuid::new_v4();

        store.fail_usage_increment(true);
        let result = store.record_analysis(user, &analysis()).await;
        assert!(matches!(result, Err(AppError::Database(_))));

        // Neither write may be visible: no analysis AND no usage charge.
        assert!(store.list_analyses(user).await.unwrap().is_empty());
        assert_eq!(store.usage_count(user).await.unwrap(), 0);

        // Recovery: once the fault clears, both writes land together.
        store.fail_usage_increment(false);
        store.record_analysis(user, &analysis()).await.unwrap();
        assert_eq!(store.list_analyses(user).await.unwrap().len(), 1);
        assert_eq!(store.usage_count(user).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_cross_user_access_behaves_as_not_found() {
        let store = MemoryAnalysisStore::new();
        let owner = Uuid::new_v4();
        let intruder = Uuid::new_v4();
        let id = store.record_analysis(owner, &analysis()).await.unwrap();

        assert!(store.get_analysis(intruder, id).await.unwrap().is_none());
        assert!(!store.delete_analysis(intruder, id).await.unwrap());
        // The record must still exist for its owner.
        assert!(store.get_analysis(owner, id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_latest_returns_most_recent() {
        let store = MemoryAnalysisStore::new();
        let user = Uuid::new_v4();
        store.record_analysis(user, &analysis()).await.unwrap();
        let second = store.record_analysis(user, &analysis()).await.unwrap();

        let latest = store.latest_analysis(user).await.unwrap().unwrap();
        assert_eq!(latest.id, second);
    }

    #[tokio::test]
    async fn test_delete_removes_only_target() {
        let store = MemoryAnalysisStore::new();
        let user = Uuid::new_v4();
        let first = store.record_analysis(user, &analysis()).await.unwrap();
        let second = store.record_analysis(user, &analysis()).await.unwrap();

        assert!(store.delete_analysis(user, first).await.unwrap());
        let remaining = store.list_analyses(user).await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, second);
    }

    #[tokio::test]
    async fn test_save_template_overwrites_same_id() {
        let store = MemoryAnalysisStore::new();
        let user = Uuid::new_v4();
        let template_id = Uuid::new_v4();

        let mut template = Template {
            id: template_id,
            name: "v1".to_string(),
            data: Default::default(),
        };
        store.save_template(user, &template).await.unwrap();
        template.name = "v2".to_string();
        store.save_template(user, &template).await.unwrap();

        let templates = store.list_templates(user).await.unwrap();
        assert_eq!(templates.len(), 1);
        assert_eq!(templates[0].name, "v2");
    }
}
