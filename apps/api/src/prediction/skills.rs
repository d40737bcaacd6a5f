//! Likely-but-unstated skills from a fixed co-occurrence table.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

const MAX_PREDICTIONS: usize = 5;
const BASE_CONFIDENCE: f64 = 0.70;
/// Added per found skill that lists the candidate as a correlate.
const CORRELATION_BOOST: f64 = 0.05;
const MAX_CONFIDENCE: f64 = 0.95;

const SKILL_CORRELATIONS: &[(&str, &[&str])] = &[
    ("Python", &["Machine Learning", "Django", "Flask"]),
    ("Machine Learning", &["Python", "TensorFlow", "PyTorch"]),
    ("TensorFlow", &["Machine Learning", "Deep Learning", "Python"]),
    ("PyTorch", &["Machine Learning", "Deep Learning", "Python"]),
    ("React", &["JavaScript", "Node.js", "Docker"]),
    ("Docker", &["Kubernetes", "CI/CD", "Linux"]),
    ("Kubernetes", &["Docker", "Cloud", "DevOps"]),
    ("AWS", &["Cloud", "Docker", "Linux"]),
    ("Git", &["GitHub", "CI/CD"]),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictedSkill {
    pub skill_name: String,
    /// 0.0 – 1.0, two decimal places.
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NextRole {
    pub role: String,
    pub confidence: f64,
}

/// Scales prediction confidence by seniority. Non-decreasing in `years`,
/// from 0.60 at zero years to 0.90 at twenty and beyond.
pub fn experience_multiplier(years: u32) -> f64 {
    match years {
        0 => 0.60,
        1 => 0.65,
        2 => 0.70,
        3..=4 => 0.75,
        5..=9 => 0.80,
        _ => (0.5 + years as f64 * 0.02).clamp(0.85, 0.90),
    }
}

/// Predicts up to five skills correlated with `found_skills` but not in it,
/// highest confidence first (ties broken by name).
pub fn predict_skills(found_skills: &[String], years_experience: u32) -> Vec<PredictedSkill> {
    let found: Vec<String> = found_skills.iter().map(|s| s.to_lowercase()).collect();
    let is_found = |skill: &str| found.iter().any(|f| f == &skill.to_lowercase());

    let correlated_with = |skill: &str| -> &'static [&'static str] {
        SKILL_CORRELATIONS
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(skill))
            .map(|(_, correlates)| *correlates)
            .unwrap_or(&[])
    };

    let candidates: BTreeSet<&'static str> = found_skills
        .iter()
        .flat_map(|skill| correlated_with(skill).iter().copied())
        .filter(|candidate| !is_found(candidate))
        .collect();

    let multiplier = experience_multiplier(years_experience);
    let mut predicted: Vec<PredictedSkill> = candidates
        .into_iter()
        .map(|candidate| {
            let supporters = found_skills
                .iter()
                .filter(|skill| correlated_with(skill).contains(&candidate))
                .count();
            let confidence = ((BASE_CONFIDENCE + CORRELATION_BOOST * supporters as f64)
                * multiplier)
                .min(MAX_CONFIDENCE);
            PredictedSkill {
                skill_name: candidate.to_string(),
                confidence: (confidence * 100.0).round() / 100.0,
            }
        })
        .collect();

    predicted.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.skill_name.cmp(&b.skill_name))
    });
    predicted.truncate(MAX_PREDICTIONS);

    debug!(count = predicted.len(), multiplier, "predicted skills");
    predicted
}

/// Next likely role from years of experience alone.
pub fn predict_next_role(years_experience: u32) -> NextRole {
    let (role, confidence) = match years_experience {
        0..=1 => ("Senior Developer", 0.70),
        2..=4 => ("Tech Lead", 0.75),
        5..=7 => ("Engineering Manager", 0.75),
        _ => ("Director/Architect", 0.80),
    };
    NextRole {
        role: role.to_string(),
        confidence,
    }
}
