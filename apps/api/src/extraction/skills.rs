//! Skill extraction against a fixed vocabulary grouped by theme.
//!
//! Matches are case-insensitive and must sit on word boundaries (`c++` and `c#`
//! are handled explicitly since `\b` cannot follow a symbol; a trailing version
//! number such as `Python3` is tolerated). Each match is mapped to a canonical
//! display name through `SKILL_ALIASES`; anything not in the alias table is
//! title-cased. Every canonical name matches its own
//! vocabulary term, so re-extracting from the output never grows the set.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use tracing::debug;

use crate::extraction::models::{SkillGroup, SkillSet};
use crate::extraction::text::{dedup_preserving_order, is_word_char, normalize_key, title_case};

pub const MAX_SKILLS: usize = 25;
const OTHER_THEME: &str = "Other";

pub struct SkillTheme {
    pub label: &'static str,
    pub terms: &'static [&'static str],
}

pub const SKILL_THEMES: &[SkillTheme] = &[
    SkillTheme {
        label: "Programming Languages",
        terms: &[
            "python", "java", "javascript", "js", "typescript", "c++", "c#", "golang", "rust",
            "ruby", "php", "kotlin", "swift", "scala", "sql", "bash", "html", "css",
        ],
    },
    SkillTheme {
        label: "Data Science & AI",
        terms: &[
            "machine learning", "ml", "deep learning", "neural network", "neural networks",
            "nlp", "natural language processing", "computer vision", "tensorflow", "tf",
            "pytorch", "torch", "keras", "scikit-learn", "sklearn", "pandas", "numpy",
            "transformers", "bert", "llm", "llms", "mlops", "statistics", "data analysis",
        ],
    },
    SkillTheme {
        label: "Cloud & DevOps",
        terms: &[
            "aws", "amazon web services", "azure", "gcp", "google cloud", "docker",
            "kubernetes", "k8s", "terraform", "ansible", "jenkins", "ci/cd", "linux",
            "devops", "git", "github",
        ],
    },
    SkillTheme {
        label: "Web Development",
        terms: &[
            "react", "reactjs", "react.js", "angular", "vue", "vue.js", "node", "nodejs",
            "node.js", "next.js", "django", "flask", "fastapi", "spring boot", "ruby on rails",
            "graphql", "rest api", "microservices",
        ],
    },
    SkillTheme {
        label: "Databases & Data Tooling",
        terms: &[
            "mysql", "postgresql", "postgres", "mongodb", "redis", "sqlite", "dynamodb",
            "elasticsearch", "spark", "hadoop", "kafka", "airflow", "tableau", "power bi",
            "snowflake",
        ],
    },
];

/// Lowercased vocabulary term → canonical display name.
static SKILL_ALIASES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("javascript", "JavaScript"),
        ("js", "JavaScript"),
        ("typescript", "TypeScript"),
        ("c++", "C++"),
        ("c#", "C#"),
        ("sql", "SQL"),
        ("php", "PHP"),
        ("html", "HTML"),
        ("css", "CSS"),
        ("ml", "Machine Learning"),
        ("neural network", "Deep Learning"),
        ("neural networks", "Deep Learning"),
        ("nlp", "NLP"),
        ("natural language processing", "NLP"),
        ("tensorflow", "TensorFlow"),
        ("tf", "TensorFlow"),
        ("pytorch", "PyTorch"),
        ("torch", "PyTorch"),
        ("scikit-learn", "Scikit-learn"),
        ("sklearn", "Scikit-learn"),
        ("numpy", "NumPy"),
        ("bert", "BERT"),
        ("llm", "LLM"),
        ("llms", "LLM"),
        ("mlops", "MLOps"),
        ("aws", "AWS"),
        ("amazon web services", "AWS"),
        ("gcp", "GCP"),
        ("google cloud", "GCP"),
        ("k8s", "Kubernetes"),
        ("ci/cd", "CI/CD"),
        ("devops", "DevOps"),
        ("github", "GitHub"),
        ("reactjs", "React"),
        ("react.js", "React"),
        ("vue", "Vue.js"),
        ("vue.js", "Vue.js"),
        ("node", "Node.js"),
        ("nodejs", "Node.js"),
        ("node.js", "Node.js"),
        ("next.js", "Next.js"),
        ("fastapi", "FastAPI"),
        ("ruby on rails", "Ruby on Rails"),
        ("graphql", "GraphQL"),
        ("rest api", "REST API"),
        ("mysql", "MySQL"),
        ("postgresql", "PostgreSQL"),
        ("postgres", "PostgreSQL"),
        ("mongodb", "MongoDB"),
        ("sqlite", "SQLite"),
        ("dynamodb", "DynamoDB"),
        ("power bi", "Power BI"),
    ]
    .into_iter()
    .collect()
});

fn vocabulary_alternation() -> String {
    let mut terms: Vec<&str> = SKILL_THEMES
        .iter()
        .flat_map(|theme| theme.terms.iter().copied())
        .collect();
    terms.sort_by(|a, b| b.len().cmp(&a.len()));
    terms
        .iter()
        .map(|term| regex::escape(term).replace(' ', r"\s+"))
        .collect::<Vec<_>>()
        .join("|")
}

/// One alternation over the whole vocabulary, longest terms first so that
/// `javascript` wins over `java` and `node.js` over `node` at the same offset.
static SKILL_RE: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(&format!("(?:{})", vocabulary_alternation()))
        .case_insensitive(true)
        .build()
        .unwrap()
});

/// The same vocabulary, matching only a whole string.
static WHOLE_TERM_RE: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(&format!("^(?:{})$", vocabulary_alternation()))
        .case_insensitive(true)
        .build()
        .unwrap()
});

/// Canonical name → theme label, first theme wins.
static CANONICAL_THEMES: Lazy<HashMap<String, &'static str>> = Lazy::new(|| {
    let mut themes = HashMap::new();
    for theme in SKILL_THEMES {
        for term in theme.terms {
            themes.entry(canonical_name(term)).or_insert(theme.label);
        }
    }
    themes
});

/// Returns every skill under "Technical Skills" plus the number of unique skills.
pub fn extract_skills(text: &str) -> (SkillSet, usize) {
    let mut skills = dedup_preserving_order(scan_skills(text));
    skills.truncate(MAX_SKILLS);
    let skills = SkillSet::with_technical(skills);
    let count = skills.skill_count();
    debug!(count, "extracted skills");
    (skills, count)
}

/// Regroups canonical skill names by theme. Theme order is fixed; skills keep
/// their input order; names outside the vocabulary land in "Other".
pub fn group_skills_by_theme(skills: &[String]) -> Vec<SkillGroup> {
    let labels = SKILL_THEMES
        .iter()
        .map(|theme| theme.label)
        .chain(std::iter::once(OTHER_THEME));

    labels
        .filter_map(|label| {
            let members: Vec<String> = skills
                .iter()
                .filter(|skill| {
                    CANONICAL_THEMES
                        .get(skill.as_str())
                        .copied()
                        .unwrap_or(OTHER_THEME)
                        == label
                })
                .cloned()
                .collect();
            (!members.is_empty()).then(|| SkillGroup {
                theme: label.to_string(),
                skills: members,
            })
        })
        .collect()
}

pub fn canonical_name(matched: &str) -> String {
    let key = normalize_key(matched);
    match SKILL_ALIASES.get(key.as_str()) {
        Some(name) => name.to_string(),
        None => title_case(&key),
    }
}

fn scan_skills(text: &str) -> Vec<String> {
    let mut found = Vec::new();
    let mut pos = 0;
    while pos < text.len() {
        let Some(m) = SKILL_RE.find_at(text, pos) else {
            break;
        };
        match bounded_term_end(text, m.start(), m.end()) {
            Some(end) => {
                found.push(canonical_name(&text[m.start()..end]));
                pos = end;
            }
            None => {
                pos = m.start() + text[m.start()..].chars().next().map_or(1, char::len_utf8);
            }
        }
    }
    found
}

/// End of the longest vocabulary term starting at `start` that sits on word
/// boundaries, trying shorter terms when the leftmost match does not
/// (`node` in "node.jsx").
fn bounded_term_end(text: &str, start: usize, longest_end: usize) -> Option<usize> {
    if on_word_boundaries(text, start, longest_end) {
        return Some(longest_end);
    }
    text[start..longest_end]
        .char_indices()
        .rev()
        .map(|(offset, _)| start + offset)
        .filter(|&end| end > start)
        .find(|&end| {
            WHOLE_TERM_RE.is_match(&text[start..end]) && on_word_boundaries(text, start, end)
        })
}

fn on_word_boundaries(text: &str, start: usize, end: usize) -> bool {
    let before_ok = text[..start]
        .chars()
        .next_back()
        .map_or(true, |c| !is_word_char(c));
    before_ok && trailing_boundary_ok(&text[start..end], &text[end..])
}

/// Symbol-terminated terms need no boundary ("C++17"); terms of three or more
/// characters may carry a version number ("Python3").
fn trailing_boundary_ok(term: &str, rest: &str) -> bool {
    if term.ends_with(&['+', '#'][..]) {
        return true;
    }
    match rest.chars().next() {
        None => true,
        Some(c) if c.is_ascii_digit() => term.chars().count() >= 3,
        Some(c) => !is_word_char(c) && c != '+' && c != '#',
    }
}
