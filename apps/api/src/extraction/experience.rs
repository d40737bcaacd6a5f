//! Experience span inference from year ranges.
//!
//! The first plausible range anywhere in the text is trusted, with no section
//! awareness: a range inside an education line or an address is taken at face
//! value. Ranges whose end does not follow the start, or that span more than
//! `MAX_SPAN_YEARS`, are skipped.

use chrono::{Datelike, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::extraction::models::ExperienceSpan;

const MAX_SPAN_YEARS: i32 = 20;

/// Closed ranges, tried in order: `2018-2022`, `2018 – 2022`, `2018 to 2022`.
static CLOSED_RANGE_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\b((?:19|20)\d{2})\s*[-–—]\s*((?:19|20)\d{2})\b",
        r"(?i)\b((?:19|20)\d{2})\s+(?:to|until|through)\s+((?:19|20)\d{2})\b",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Open-ended range, e.g. `2019 - Present`.
static OPEN_RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b((?:19|20)\d{2})\s*(?:[-–—]|to)\s*(?:present|current|now|today)\b").unwrap()
});

/// Infers the experience span, resolving open-ended ranges against the current year.
pub fn extract_years_experience(text: &str) -> ExperienceSpan {
    extract_years_experience_as_of(text, Utc::now().year())
}

pub fn extract_years_experience_as_of(text: &str, current_year: i32) -> ExperienceSpan {
    for re in CLOSED_RANGE_RES.iter() {
        for caps in re.captures_iter(text) {
            let (Some(start), Some(end)) = (caps.get(1), caps.get(2)) else {
                continue;
            };
            if let Some(span) = parse_pair(start.as_str(), end.as_str()) {
                debug!(?span, "matched closed year range");
                return span;
            }
        }
    }

    let current = current_year.to_string();
    for caps in OPEN_RANGE_RE.captures_iter(text) {
        let Some(start) = caps.get(1) else {
            continue;
        };
        if let Some(span) = parse_pair(start.as_str(), &current) {
            debug!(?span, "matched open-ended year range");
            return span;
        }
    }

    ExperienceSpan::unknown()
}

fn parse_pair(start: &str, end: &str) -> Option<ExperienceSpan> {
    let start: i32 = start.parse().ok()?;
    let end: i32 = end.parse().ok()?;
    (end > start && end - start <= MAX_SPAN_YEARS).then(|| ExperienceSpan::new(start, end))
}
