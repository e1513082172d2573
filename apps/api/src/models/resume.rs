use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// Canonical resume data: the authoritative, fully-typed record used for
/// editing, preview, and export.
///
/// INVARIANT: every leaf is defaulted (empty string / empty vec), never
/// `Option`, so renderers need no null checks. `#[serde(default)]` keeps the
/// invariant across deserialization of partial JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeData {
    pub personal_info: PersonalInfo,
    pub summary: String,
    pub education: Vec<EducationItem>,
    pub experience: Vec<ExperienceItem>,
    pub projects: Vec<ProjectItem>,
    pub certifications: Vec<CertificationItem>,
    pub additional_skills: Vec<String>,
    pub languages: Vec<LanguageItem>,
    pub interests: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub github: String,
    pub portfolio: String,
    pub location: String,
}

/// Order within the vecs below is meaningful: it is the display/print order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationItem {
    pub institution: String,
    pub degree: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub gpa: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceItem {
    pub company: String,
    pub role: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub responsibilities: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectItem {
    pub name: String,
    pub description: String,
    pub points: Vec<String>,
    pub link: String,
    pub git_link: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CertificationItem {
    pub name: String,
    pub issuer: String,
    pub issue_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LanguageItem {
    pub name: String,
    pub level: String,
}

/// Partial update for a [`ResumeData`]. Fields left `None` keep their
/// current value. This is the explicit, caller-owned merge operation for an
/// editing session; there is no process-wide resume singleton.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeDataPatch {
    pub personal_info: Option<PersonalInfo>,
    pub summary: Option<String>,
    pub education: Option<Vec<EducationItem>>,
    pub experience: Option<Vec<ExperienceItem>>,
    pub projects: Option<Vec<ProjectItem>>,
    pub certifications: Option<Vec<CertificationItem>>,
    pub additional_skills: Option<Vec<String>>,
    pub languages: Option<Vec<LanguageItem>>,
    pub interests: Option<Vec<String>>,
}

impl ResumeData {
    /// Applies a partial update section-by-section.
    pub fn apply(&mut self, patch: ResumeDataPatch) {
        if let Some(personal_info) = patch.personal_info {
            self.personal_info = personal_info;
        }
        if let Some(summary) = patch.summary {
            self.summary = summary;
        }
        if let Some(education) = patch.education {
            self.education = education;
        }
        if let Some(experience) = patch.experience {
            self.experience = experience;
        }
        if let Some(projects) = patch.projects {
            self.projects = projects;
        }
        if let Some(certifications) = patch.certifications {
            self.certifications = certifications;
        }
        if let Some(additional_skills) = patch.additional_skills {
            self.additional_skills = additional_skills;
        }
        if let Some(languages) = patch.languages {
            self.languages = languages;
        }
        if let Some(interests) = patch.interests {
            self.interests = interests;
        }
    }
}

/// A named, saved snapshot of canonical resume data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    pub id: Uuid,
    pub name: String,
    pub data: ResumeData,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TemplateRow {
    pub user_id: Uuid,
    pub template_id: Uuid,
    pub name: String,
    pub data: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_resume_is_fully_defaulted() {
        let resume = ResumeData::default();
        assert_eq!(resume.personal_info.full_name, "");
        assert_eq!(resume.personal_info.portfolio, "");
        assert!(resume.education.is_empty());
        assert!(resume.additional_skills.is_empty());
        assert_eq!(resume.summary, "");
    }

    #[test]
    fn test_partial_json_deserializes_to_defaults() {
        // A renderer must never see a missing leaf, even when the stored
        // JSON predates newer fields.
        let resume: ResumeData =
            serde_json::from_str(r#"{"summary": "Backend engineer"}"#).unwrap();
        assert_eq!(resume.summary, "Backend engineer");
        assert_eq!(resume.personal_info.email, "");
        assert!(resume.languages.is_empty());
    }

    #[test]
    fn test_apply_replaces_only_present_sections() {
        let mut resume = ResumeData {
            summary: "old summary".to_string(),
            additional_skills: vec!["Rust".to_string()],
            ..Default::default()
        };

        resume.apply(ResumeDataPatch {
            summary: Some("new summary".to_string()),
            ..Default::default()
        });

        assert_eq!(resume.summary, "new summary");
        assert_eq!(resume.additional_skills, vec!["Rust".to_string()]);
    }

    #[test]
    fn test_apply_empty_patch_is_noop() {
        let mut resume = ResumeData {
            summary: "unchanged".to_string(),
            ..Default::default()
        };
        let before = resume.clone();
        resume.apply(ResumeDataPatch::default());
        assert_eq!(resume, before);
    }

    #[test]
    fn test_resume_round_trips_through_json() {
        let resume = ResumeData {
            personal_info: PersonalInfo {
                full_name: "Jane Doe".to_string(),
                email: "jane@example.com".to_string(),
                ..Default::default()
            },
            additional_skills: vec!["Python".to_string(), "Go".to_string()],
            ..Default::default()
        };
        let json = serde_json::to_string(&resume).unwrap();
        let back: ResumeData = serde_json::from_str(&json).unwrap();
        assert_eq!(resume, back);
    }
}
