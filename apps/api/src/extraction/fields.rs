//! Field Extractor — locates structured fields inside unstructured resume
//! text using heuristic, line- and section-anchored pattern matching.
//!
//! Resumes have no fixed grammar: they are visually formatted (columns,
//! whitespace alignment) rather than semantically marked up. Each
//! sub-extractor is an independent, order-sensitive pattern stage whose
//! contract is "best effort, never errors, missing structure yields fewer
//! populated fields". There is no shared parser state and no backtracking
//! across fields.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::extracted::{
    ExtractedEducation, ExtractedExperience, ExtractedProject, ExtractedResumeData,
    ExtractedSkills,
};

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z][a-z]+(?:[ \t]+[A-Z][a-z]+)+").unwrap());
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap());
static LINK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"https?://[^\s]+").unwrap());

static LANGUAGES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Languages:?\s*([^\n]+)").unwrap());
static TECHNOLOGIES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Technologies:?\s*([^\n]+)").unwrap());
static DATABASES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Databases:?\s*([^\n]+)").unwrap());
static TOOLS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Tools:?\s*([^\n]+)").unwrap());

/// Runs of >= 2 whitespace characters: the positional column separator in
/// visually aligned header lines.
static COLUMN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s{2,}").unwrap());
/// Degree lines split on a comma or a run of >= 2 spaces.
static DEGREE_SPLIT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r",|\s{2,}").unwrap());

/// Extracts every field the pipeline knows about from raw resume text.
///
/// Total over any input: an empty or unrecognizable string yields a record
/// with every field absent, never an error.
pub fn extract_resume_fields(text: &str) -> ExtractedResumeData {
    ExtractedResumeData {
        name: extract_name(text),
        email: extract_email(text),
        links: extract_links(text),
        education: extract_education(text),
        skills: extract_skills(text),
        experience: extract_experience(text),
        projects: extract_projects(text),
    }
}

/// First line-level match of two or more consecutive capitalized words.
/// The first match wins; later false positives (a section header in title
/// case, for instance) are not filtered. Known precision limit.
fn extract_name(text: &str) -> Option<String> {
    text.lines()
        .find_map(|line| NAME_RE.find(line).map(|m| m.as_str().to_string()))
}

fn extract_email(text: &str) -> Option<String> {
    EMAIL_RE.find(text).map(|m| m.as_str().to_string())
}

/// Every URL in document order. Duplicates are retained.
fn extract_links(text: &str) -> Option<Vec<String>> {
    let links: Vec<String> = LINK_RE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect();
    if links.is_empty() {
        None
    } else {
        Some(links)
    }
}

fn extract_education(text: &str) -> Option<Vec<ExtractedEducation>> {
    let block = section_block(text, "EDUCATION", &["SKILLS", "EXPERIENCE", "PROJECTS"])?;
    let entries: Vec<ExtractedEducation> = split_entries(block)
        .iter()
        .filter_map(|lines| parse_education_entry(lines))
        .collect();
    if entries.is_empty() {
        None
    } else {
        Some(entries)
    }
}

fn parse_education_entry(lines: &[&str]) -> Option<ExtractedEducation> {
    let first = lines.first()?;
    let (university, location) = match first.split_once(',') {
        Some((u, l)) => (non_empty(u), non_empty(l)),
        None => (non_empty(first), None),
    };

    let (degree, year) = match lines.get(1) {
        Some(second) => {
            let mut parts = DEGREE_SPLIT_RE.split(second);
            (
                parts.next().and_then(non_empty),
                parts.next().and_then(non_empty),
            )
        }
        None => (None, None),
    };

    // An entry with neither a university nor a degree carries no signal.
    if university.is_none() && degree.is_none() {
        return None;
    }

    Some(ExtractedEducation {
        university,
        degree,
        year,
        location,
    })
}

fn extract_skills(text: &str) -> Option<ExtractedSkills> {
    let block = section_block(text, "SKILLS", &["EXPERIENCE", "PROJECTS"])?;
    Some(ExtractedSkills {
        languages: labeled_list(&LANGUAGES_RE, block),
        technologies: labeled_list(&TECHNOLOGIES_RE, block),
        databases: labeled_list(&DATABASES_RE, block),
        tools: labeled_list(&TOOLS_RE, block),
    })
}

/// Comma-separated tokens following a `Label:` line inside a skills block.
/// A label absent from the text yields `None` for that category.
fn labeled_list(re: &Regex, block: &str) -> Option<Vec<String>> {
    let caps = re.captures(block)?;
    let items: Vec<String> = caps[1]
        .split(',')
        .filter_map(non_empty)
        .collect();
    if items.is_empty() {
        None
    } else {
        Some(items)
    }
}

fn extract_experience(text: &str) -> Option<Vec<ExtractedExperience>> {
    let block = section_block(text, "EXPERIENCE", &["PROJECTS"])?;
    let entries: Vec<ExtractedExperience> = block
        .trim()
        .split("\n\n")
        .filter(|e| !e.trim().is_empty())
        .map(parse_experience_entry)
        .collect();
    if entries.is_empty() {
        None
    } else {
        Some(entries)
    }
}

/// First line is a visually aligned header split on column runs into
/// (company, duration, position, location) positionally. Remaining lines
/// become responsibilities, one per line.
fn parse_experience_entry(entry: &str) -> ExtractedExperience {
    let mut lines = entry.trim().lines();
    let header = lines.next().unwrap_or("").trim();

    let mut columns = COLUMN_RE.split(header);
    let company = columns.next().and_then(non_empty);
    let duration = columns.next().and_then(non_empty);
    let position = columns.next().and_then(non_empty);
    let location = columns.next().and_then(non_empty);

    let responsibilities = lines.filter_map(non_empty).collect();

    ExtractedExperience {
        company,
        position,
        duration,
        location,
        responsibilities,
    }
}

fn extract_projects(text: &str) -> Option<Vec<ExtractedProject>> {
    // Projects run to the end of the document; no terminating header.
    let block = section_block(text, "PROJECTS", &[])?;
    let entries: Vec<ExtractedProject> = block
        .trim()
        .split("\n\n")
        .filter(|e| !e.trim().is_empty())
        .map(parse_project_entry)
        .collect();
    if entries.is_empty() {
        None
    } else {
        Some(entries)
    }
}

/// First line: `Title   |   TechStack   DemoLink   GithubLink`, with the
/// literal three-space-pipe delimiter and triple-space column splits.
fn parse_project_entry(entry: &str) -> ExtractedProject {
    let mut lines = entry.trim().lines();
    let header = lines.next().unwrap_or("").trim();

    let (title, rest) = match header.split_once("   |   ") {
        Some((t, r)) => (non_empty(t), Some(r)),
        None => (non_empty(header), None),
    };

    let (tech_stack, demo_link, github_link) = match rest {
        Some(r) => {
            let mut parts = r.split("   ");
            (
                parts.next().and_then(non_empty),
                parts.next().and_then(non_empty),
                parts.next().and_then(non_empty),
            )
        }
        None => (None, None, None),
    };

    let points = lines.filter_map(non_empty).collect();

    ExtractedProject {
        title,
        tech_stack,
        demo_link,
        github_link,
        points,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Section plumbing
// ────────────────────────────────────────────────────────────────────────────

/// Captures everything between a case-insensitive section header and the
/// earliest of the given terminating headers (or end of document).
fn section_block<'a>(text: &'a str, header: &str, terminators: &[&str]) -> Option<&'a str> {
    let start = find_ci(text, header)? + header.len();
    let rest = &text[start..];
    let end = terminators
        .iter()
        .filter_map(|t| find_ci(rest, t))
        .min()
        .unwrap_or(rest.len());
    Some(&rest[..end])
}

/// Byte offset of the first case-insensitive (ASCII) occurrence of `pat`.
fn find_ci(text: &str, pat: &str) -> Option<usize> {
    let haystack = text.as_bytes();
    let needle = pat.as_bytes();
    if needle.is_empty() || haystack.len() < needle.len() {
        return None;
    }
    (0..=haystack.len() - needle.len())
        .find(|&i| haystack[i..i + needle.len()].eq_ignore_ascii_case(needle))
}

/// Splits a section body into entries. A new entry starts at a line that
/// begins with a capital letter following a blank line.
fn split_entries(block: &str) -> Vec<Vec<&str>> {
    let mut entries: Vec<Vec<&str>> = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut after_blank = false;

    for line in block.lines() {
        let line = line.trim();
        if line.is_empty() {
            after_blank = true;
            continue;
        }
        let starts_upper = line.chars().next().is_some_and(|c| c.is_ascii_uppercase());
        if after_blank && starts_upper && !current.is_empty() {
            entries.push(std::mem::take(&mut current));
        }
        after_blank = false;
        current.push(line);
    }
    if !current.is_empty() {
        entries.push(current);
    }
    entries
}

fn non_empty(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
