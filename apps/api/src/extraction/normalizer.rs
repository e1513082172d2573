//! Resume Normalizer — merges best-effort extraction output into the
//! canonical resume record.
//!
//! Merge rule: a field present in the extraction always replaces the
//! canonical value; a field absent from the extraction keeps whatever the
//! canonical record already holds. Existing data is never overwritten with
//! empty values, which also makes the merge idempotent: re-normalizing the
//! same extraction against its own output is a no-op.

use crate::models::extracted::ExtractedResumeData;
use crate::models::resume::{EducationItem, ExperienceItem, ProjectItem, ResumeData};

/// Merges `extracted` into a copy of `current` and returns the result.
pub fn merge_extracted(current: &ResumeData, extracted: &ExtractedResumeData) -> ResumeData {
    let mut merged = current.clone();

    if let Some(name) = &extracted.name {
        merged.personal_info.full_name = name.clone();
    }
    if let Some(email) = &extracted.email {
        merged.personal_info.email = email.clone();
    }
    if let Some(links) = &extracted.links {
        // First linkedin.com link, first github.com link, first link that is
        // neither. A category with no match keeps the existing value.
        if let Some(link) = links.iter().find(|l| l.contains("linkedin.com")) {
            merged.personal_info.linkedin = link.clone();
        }
        if let Some(link) = links.iter().find(|l| l.contains("github.com")) {
            merged.personal_info.github = link.clone();
        }
        if let Some(link) = links
            .iter()
            .find(|l| !l.contains("linkedin.com") && !l.contains("github.com"))
        {
            merged.personal_info.portfolio = link.clone();
        }
    }
    // phone and location are never extracted from the document; the existing
    // values always survive.

    if let Some(education) = &extracted.education {
        if !education.is_empty() {
            merged.education = education
                .iter()
                .map(|edu| {
                    let (start_date, end_date) = split_date_range(edu.year.as_deref());
                    EducationItem {
                        institution: edu.university.clone().unwrap_or_default(),
                        degree: edu.degree.clone().unwrap_or_default(),
                        location: edu.location.clone().unwrap_or_default(),
                        start_date,
                        end_date,
                        gpa: String::new(),
                    }
                })
                .collect();
        }
    }

    if let Some(experience) = &extracted.experience {
        if !experience.is_empty() {
            merged.experience = experience
                .iter()
                .map(|exp| {
                    let (start_date, end_date) = split_date_range(exp.duration.as_deref());
                    ExperienceItem {
                        company: exp.company.clone().unwrap_or_default(),
                        role: exp.position.clone().unwrap_or_default(),
                        location: exp.location.clone().unwrap_or_default(),
                        start_date,
                        end_date,
                        responsibilities: exp.responsibilities.clone(),
                    }
                })
                .collect();
        }
    }

    if let Some(projects) = &extracted.projects {
        if !projects.is_empty() {
            merged.projects = projects
                .iter()
                .map(|project| ProjectItem {
                    name: project.title.clone().unwrap_or_default(),
                    description: project.tech_stack.clone().unwrap_or_default(),
                    points: project.points.clone(),
                    link: project.demo_link.clone().unwrap_or_default(),
                    git_link: project.github_link.clone().unwrap_or_default(),
                })
                .collect();
        }
    }

    if let Some(skills) = &extracted.skills {
        let combined: Vec<String> = [
            &skills.languages,
            &skills.technologies,
            &skills.databases,
            &skills.tools,
        ]
        .into_iter()
        .flatten()
        .flatten()
        .cloned()
        .collect();
        if !combined.is_empty() {
            merged.additional_skills = combined;
        }
    }

    // summary, certifications, languages, and interests have no extracted
    // counterpart; the canonical values always survive.

    merged
}

/// Splits a `"start-end"` range on the first `-`. A missing delimiter
/// leaves the end empty.
fn split_date_range(range: Option<&str>) -> (String, String) {
    match range {
        Some(r) => match r.split_once('-') {
            Some((start, end)) => (start.trim().to_string(), end.trim().to_string()),
            None => (r.trim().to_string(), String::new()),
        },
        None => (String::new(), String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::extracted::{
        ExtractedEducation, ExtractedExperience, ExtractedSkills,
    };

    fn extraction_with_links(links: Vec<&str>) -> ExtractedResumeData {
        ExtractedResumeData {
            links: Some(links.into_iter().map(String::from).collect()),
            ..Default::default()
        }
    }

    #[test]
    fn test_link_classification() {
        let extracted = extraction_with_links(vec![
            "https://linkedin.com/in/x",
            "https://github.com/y",
            "https://mysite.dev",
        ]);
        let merged = merge_extracted(&ResumeData::default(), &extracted);
        assert_eq!(merged.personal_info.linkedin, "https://linkedin.com/in/x");
        assert_eq!(merged.personal_info.github, "https://github.com/y");
        assert_eq!(merged.personal_info.portfolio, "https://mysite.dev");
    }

    #[test]
    fn test_link_category_without_match_keeps_existing() {
        let mut current = ResumeData::default();
        current.personal_info.github = "https://github.com/old".to_string();
        let extracted = extraction_with_links(vec!["https://linkedin.com/in/x"]);
        let merged = merge_extracted(&current, &extracted);
        assert_eq!(merged.personal_info.github, "https://github.com/old");
        assert_eq!(merged.personal_info.linkedin, "https://linkedin.com/in/x");
    }

    #[test]
    fn test_absent_education_preserves_existing() {
        let current = ResumeData {
            education: vec![EducationItem {
                institution: "MIT".to_string(),
                degree: "BS".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };
        let merged = merge_extracted(&current, &ExtractedResumeData::default());
        assert_eq!(merged.education, current.education);
    }

    #[test]
    fn test_empty_extracted_education_does_not_clobber() {
        let current = ResumeData {
            education: vec![EducationItem {
                institution: "MIT".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };
        let extracted = ExtractedResumeData {
            education: Some(vec![]),
            ..Default::default()
        };
        let merged = merge_extracted(&current, &extracted);
        assert_eq!(merged.education, current.education);
    }

    #[test]
    fn test_extracted_education_replaces_existing() {
        let current = ResumeData {
            education: vec![EducationItem {
                institution: "Old U".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };
        let extracted = ExtractedResumeData {
            education: Some(vec![ExtractedEducation {
                university: Some("MIT".to_string()),
                degree: Some("BS".to_string()),
                year: Some("2018-2022".to_string()),
                location: Some("Cambridge".to_string()),
            }]),
            ..Default::default()
        };
        let merged = merge_extracted(&current, &extracted);
        assert_eq!(merged.education.len(), 1);
        assert_eq!(merged.education[0].institution, "MIT");
        assert_eq!(merged.education[0].start_date, "2018");
        assert_eq!(merged.education[0].end_date, "2022");
        assert_eq!(merged.education[0].location, "Cambridge");
    }

    #[test]
    fn test_duration_without_delimiter_leaves_end_empty() {
        let extracted = ExtractedResumeData {
            experience: Some(vec![ExtractedExperience {
                company: Some("Acme".to_string()),
                position: Some("Engineer".to_string()),
                duration: Some("2020".to_string()),
                location: None,
                responsibilities: vec!["Built things".to_string()],
            }]),
            ..Default::default()
        };
        let merged = merge_extracted(&ResumeData::default(), &extracted);
        assert_eq!(merged.experience[0].start_date, "2020");
        assert_eq!(merged.experience[0].end_date, "");
    }

    #[test]
    fn test_skill_categories_concatenate_in_order() {
        let extracted = ExtractedResumeData {
            skills: Some(ExtractedSkills {
                languages: Some(vec!["Python".to_string(), "Go".to_string()]),
                technologies: Some(vec!["Docker".to_string()]),
                databases: None,
                tools: Some(vec!["Git".to_string()]),
            }),
            ..Default::default()
        };
        let merged = merge_extracted(&ResumeData::default(), &extracted);
        assert_eq!(merged.additional_skills, vec!["Python", "Go", "Docker", "Git"]);
    }

    #[test]
    fn test_summary_and_certifications_always_survive() {
        let current = ResumeData {
            summary: "Seasoned engineer".to_string(),
            interests: vec!["chess".to_string()],
            ..Default::default()
        };
        let extracted = ExtractedResumeData {
            name: Some("Jane Doe".to_string()),
            ..Default::default()
        };
        let merged = merge_extracted(&current, &extracted);
        assert_eq!(merged.summary, "Seasoned engineer");
        assert_eq!(merged.interests, vec!["chess"]);
        assert_eq!(merged.personal_info.full_name, "Jane Doe");
    }

    #[test]
    fn test_merge_is_idempotent() {
        let extracted = ExtractedResumeData {
            name: Some("Jane Doe".to_string()),
            email: Some("jane@example.com".to_string()),
            links: Some(vec![
                "https://linkedin.com/in/jane".to_string(),
                "https://jane.dev".to_string(),
            ]),
            education: Some(vec![ExtractedEducation {
                university: Some("MIT".to_string()),
                degree: Some("BS".to_string()),
                year: Some("2018-2022".to_string()),
                location: None,
            }]),
            ..Default::default()
        };
        let current = ResumeData {
            summary: "kept".to_string(),
            ..Default::default()
        };

        let once = merge_extracted(&current, &extracted);
        let twice = merge_extracted(&once, &extracted);
        assert_eq!(once, twice);
    }
}
