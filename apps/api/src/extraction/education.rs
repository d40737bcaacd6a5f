//! Degree detection. Each degree keyword occurrence becomes one entry carrying
//! the surrounding text as provenance; no attempt is made to verify that the
//! context really is an education line.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::extraction::models::EducationEntry;
use crate::extraction::text::context_window;

const MAX_EDUCATION_ENTRIES: usize = 5;
/// Bytes captured either side of the degree keyword.
const CONTEXT_RADIUS: usize = 50;

static DEGREE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(B\.(?:Tech|Sc|A|Com|E)|M\.(?:Tech|Sc|A|Com|E)|MBA|Ph\.?D|Bachelor(?:'s)?|Master(?:'s)?|Diploma|Associate)",
    )
    .unwrap()
});

pub fn extract_education(text: &str) -> Vec<EducationEntry> {
    let entries: Vec<EducationEntry> = DEGREE_RE
        .find_iter(text)
        .take(MAX_EDUCATION_ENTRIES)
        .map(|m| {
            let context = context_window(text, m.start(), m.end(), CONTEXT_RADIUS).trim();
            EducationEntry {
                degree: m.as_str().to_string(),
                context: (!context.is_empty()).then(|| context.to_string()),
            }
        })
        .collect();
    debug!(count = entries.len(), "extracted education entries");
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_degrees_in_order() {
        let text = "EDUCATION\nB.Tech in Computer Science, IIT Delhi, 2016\nMaster of Science, Stanford, 2018";
        let entries = extract_education(text);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].degree, "B.Tech");
        assert_eq!(entries[1].degree, "Master");
        assert!(entries[0].context.as_deref().unwrap().contains("Computer Science"));
    }

    #[test]
    fn test_case_insensitive() {
        let entries = extract_education("phd candidate in robotics");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].degree, "phd");
    }

    #[test]
    fn test_capped_at_five() {
        let text = "Bachelor ".repeat(9);
        assert_eq!(extract_education(&text).len(), MAX_EDUCATION_ENTRIES);
    }

    #[test]
    fn test_not_deduplicated_by_degree() {
        let entries = extract_education("Bachelor of Arts; Bachelor of Music");
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_no_degree() {
        assert!(extract_education("Self-taught programmer").is_empty());
        assert!(extract_education("").is_empty());
    }

    #[test]
    fn test_context_is_bounded() {
        let padding = "x".repeat(200);
        let text = format!("{padding} MBA {padding}");
        let entries = extract_education(&text);
        let context = entries[0].context.as_deref().unwrap();
        assert!(context.len() <= 3 + 2 * CONTEXT_RADIUS);
    }
}
