use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Category key used for every skill found by `extract_skills`.
pub const TECHNICAL_SKILLS: &str = "Technical Skills";

/// Contact fields found in a résumé. Absent fields serialise as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub website: Option<String>,
}

impl ContactInfo {
    /// Number of fields that were found.
    pub fn found_count(&self) -> usize {
        [
            &self.email,
            &self.phone,
            &self.linkedin,
            &self.github,
            &self.website,
        ]
        .iter()
        .filter(|f| f.is_some())
        .count()
    }
}

/// One degree-keyword occurrence plus the surrounding text it was found in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub context: Option<String>,
}

/// Start and end year of the first plausible year range in the text.
/// Both are `Some` or both are `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceSpan {
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
}

impl ExperienceSpan {
    pub fn new(start_year: i32, end_year: i32) -> Self {
        Self {
            start_year: Some(start_year),
            end_year: Some(end_year),
        }
    }

    pub fn unknown() -> Self {
        Self::default()
    }

    pub fn is_known(&self) -> bool {
        self.start_year.is_some() && self.end_year.is_some()
    }

    /// Whole years covered by the span, 0 when it could not be inferred.
    pub fn years(&self) -> u32 {
        match (self.start_year, self.end_year) {
            (Some(start), Some(end)) if end > start => (end - start) as u32,
            _ => 0,
        }
    }
}

/// Category label → unique skill names in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillSet {
    pub categories: BTreeMap<String, Vec<String>>,
}

impl SkillSet {
    pub fn with_technical(skills: Vec<String>) -> Self {
        let mut categories = BTreeMap::new();
        if !skills.is_empty() {
            categories.insert(TECHNICAL_SKILLS.to_string(), skills);
        }
        Self { categories }
    }

    /// Every skill across all categories, deduplicated, category order then list order.
    pub fn all_skills(&self) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        self.categories
            .values()
            .flatten()
            .filter(|s| seen.insert(s.as_str()))
            .cloned()
            .collect()
    }

    pub fn skill_count(&self) -> usize {
        self.all_skills().len()
    }
}

/// Skills regrouped under a display theme such as "Cloud & DevOps".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub theme: String,
    pub skills: Vec<String>,
}
