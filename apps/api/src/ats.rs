//! ATS Text Optimizer — a pure text transform that makes resume content
//! friendlier to applicant-tracking parsers.
//!
//! Strips characters ATS parsers choke on, lowercases, then expands a fixed
//! dictionary of abbreviations with word-boundary-safe replacement.
//! Deterministic, no side effects, total over any input, and idempotent
//! under repeated application.

use std::sync::LazyLock;

use regex::Regex;

/// Abbreviation dictionary, applied in order.
const ABBREVIATIONS: &[(&str, &str)] = &[
    ("js", "javascript"),
    ("ts", "typescript"),
    ("react", "reactjs"),
    ("vue", "vuejs"),
    ("aws", "amazon web services"),
    ("ui", "user interface"),
    ("ux", "user experience"),
    ("api", "application programming interface"),
    ("db", "database"),
    ("oop", "object oriented programming"),
    ("ci", "continuous integration"),
    ("cd", "continuous deployment"),
    ("ml", "machine learning"),
    ("ai", "artificial intelligence"),
    ("qa", "quality assurance"),
    ("seo", "search engine optimization"),
];

static STRIP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s]").unwrap());

static EXPANSIONS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    ABBREVIATIONS
        .iter()
        .map(|(abbr, full)| {
            (
                Regex::new(&format!(r"(?i)\b{abbr}\b")).unwrap(),
                *full,
            )
        })
        .collect()
});

/// Optimizes text for ATS ingestion.
pub fn optimize_for_ats(text: &str) -> String {
    let stripped = STRIP_RE.replace_all(text, "");
    let mut text = stripped.to_lowercase();

    for (re, full) in EXPANSIONS.iter() {
        text = re.replace_all(&text, *full).into_owned();
    }

    text
}
