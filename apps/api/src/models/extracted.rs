use serde::{Deserialize, Serialize};

/// Best-effort structured data recovered from raw resume text.
///
/// CONTRACT: every field is optional. Absence of a match is the only failure
/// signal the extractor has; it never errors. An empty input yields a record
/// with every field `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedResumeData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Every URL in the document, in document order, duplicates retained.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education: Option<Vec<ExtractedEducation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<ExtractedSkills>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience: Option<Vec<ExtractedExperience>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<ExtractedProject>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedEducation {
    pub university: Option<String>,
    pub degree: Option<String>,
    /// Raw year range as printed, e.g. "2018-2022". Split downstream.
    pub year: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedSkills {
    pub languages: Option<Vec<String>>,
    pub technologies: Option<Vec<String>>,
    pub databases: Option<Vec<String>>,
    pub tools: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedExperience {
    pub company: Option<String>,
    pub position: Option<String>,
    pub duration: Option<String>,
    pub location: Option<String>,
    pub responsibilities: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedProject {
    pub title: Option<String>,
    pub tech_stack: Option<String>,
    pub demo_link: Option<String>,
    pub github_link: Option<String>,
    pub points: Vec<String>,
}
