//! Project extraction.
//!
//! Primary strategy is section-anchored: find a projects heading on its own
//! line (or, only when no such line exists, inline as `Projects: ...`), then
//! collect bullet or short lines until the next major section heading. When the résumé has no projects heading at
//! all, lines mentioning project-like verbs are kept instead.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::extraction::text::dedup_preserving_order;

const MAX_PROJECTS: usize = 10;
const MAX_KEYWORD_PROJECTS: usize = 5;
const MIN_KEYWORD_LINE_CHARS: usize = 20;
const BULLET_CHARS: &[char] = &['-', '•', '*', '·', '▪', '◦', '–'];
const PROJECT_KEYWORDS: &[&str] = &[
    "project",
    "built",
    "developed",
    "implemented",
    "created",
    "designed",
];

static HEADING_LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^[\s#*•\-]*(?:(?:academic|personal|key|relevant|selected|side|notable|major)\s+)?projects?(?:\s+(?:experience|work|portfolio))?\s*:?\s*$",
    )
    .unwrap()
});

static INLINE_HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bprojects?\s*:\s*(\S.*)$").unwrap());

static SECTION_HEADING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^[\s#*•\-]*(?:work\s+history|(?:professional\s+|work\s+)?experience|employment(?:\s+history)?|education|(?:technical\s+)?skills|summary|profile|certifications?|awards|publications)\s*(?::.*)?$",
    )
    .unwrap()
});

pub fn extract_projects(text: &str) -> Vec<String> {
    let projects = match section_projects(text) {
        Some(found) => found,
        None => keyword_projects(text),
    };
    let mut projects = dedup_preserving_order(projects);
    projects.truncate(MAX_PROJECTS);
    debug!(count = projects.len(), "extracted projects");
    projects
}

/// `None` when no projects heading exists.
fn section_projects(text: &str) -> Option<Vec<String>> {
    let lines: Vec<&str> = text.lines().collect();
    let mut projects = Vec::new();

    let start = match lines.iter().position(|line| HEADING_LINE_RE.is_match(line)) {
        Some(start) => start,
        None => {
            let (start, rest) = lines.iter().enumerate().find_map(|(i, line)| {
                let caps = INLINE_HEADING_RE.captures(line)?;
                Some((i, caps.get(1)?.as_str()))
            })?;
            push_candidate(&mut projects, rest);
            start
        }
    };

    for line in &lines[start + 1..] {
        let raw = line.trim();
        if raw.is_empty() {
            continue;
        }
        if SECTION_HEADING_RE.is_match(raw) {
            break;
        }
        push_candidate(&mut projects, raw);
    }

    Some(projects)
}

/// Keeps bullet lines and title-like lines of 2 to 12 words.
fn push_candidate(projects: &mut Vec<String>, raw: &str) {
    let raw = raw.trim();
    let is_bullet = raw.starts_with(BULLET_CHARS);
    let words = raw.split_whitespace().count();
    if !is_bullet && !(2..=12).contains(&words) {
        return;
    }
    let entry = raw.trim_start_matches(BULLET_CHARS).trim();
    if !entry.is_empty() {
        projects.push(entry.to_string());
    }
}

fn keyword_projects(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| line.chars().count() > MIN_KEYWORD_LINE_CHARS)
        .filter(|line| {
            let lower = line.to_lowercase();
            PROJECT_KEYWORDS.iter().any(|k| lower.contains(k))
        })
        .map(|line| line.trim_start_matches(BULLET_CHARS).trim().to_string())
        .take(MAX_KEYWORD_PROJECTS)
        .collect()
}
