//! Résumé quality heuristics. None of these read meaning from the text: the
//! "grammar" score, for instance, only checks that long lines end in punctuation.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::quality::band::ScoreBand;

const MIN_WORDS: usize = 150;
const MAX_WORDS: usize = 1000;
/// Length score lost per 500 words beyond `MAX_WORDS`.
const OVERLENGTH_PENALTY: f64 = 20.0;

const SECTION_MARKERS: &[&str] = &["contact", "summary", "experience", "education", "skills"];

const TECH_KEYWORDS: &[&str] = &[
    "python",
    "java",
    "sql",
    "machine learning",
    "api",
    "docker",
    "git",
    "aws",
    "react",
    "node",
];

const LINE_ENDINGS: &[char] = &['.', '!', '?', ','];
const GRAMMAR_DEFAULT: f64 = 50.0;
const FORMATTING_FLOOR: f64 = 20.0;
const IDEAL_LINE_LENGTH: f64 = 70.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityWeights {
    pub length: f64,
    pub structure: f64,
    pub grammar: f64,
    pub keywords: f64,
    pub formatting: f64,
}

impl Default for QualityWeights {
    fn default() -> Self {
        Self {
            length: 0.2,
            structure: 0.2,
            grammar: 0.2,
            keywords: 0.2,
            formatting: 0.2,
        }
    }
}

/// The five sub-scores, each in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QualityBreakdown {
    pub length: f64,
    pub structure: f64,
    pub grammar: f64,
    pub keywords: f64,
    pub formatting: f64,
}

impl QualityBreakdown {
    pub fn bands(&self) -> QualityBands {
        QualityBands {
            length: ScoreBand::from_score(self.length),
            structure: ScoreBand::from_score(self.structure),
            grammar: ScoreBand::from_score(self.grammar),
            keywords: ScoreBand::from_score(self.keywords),
            formatting: ScoreBand::from_score(self.formatting),
        }
    }
}

/// Band per sub-score, mirroring `QualityBreakdown` field for field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityBands {
    pub length: ScoreBand,
    pub structure: ScoreBand,
    pub grammar: ScoreBand,
    pub keywords: ScoreBand,
    pub formatting: ScoreBand,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityScore {
    /// Weighted mean of the breakdown, one decimal place.
    pub overall: f64,
    pub band: ScoreBand,
    pub breakdown: QualityBreakdown,
    pub breakdown_bands: QualityBands,
    pub feedback: Vec<String>,
}

impl QualityScore {
    /// e.g. "🟡 Good (64.2/100)"
    pub fn headline(&self) -> String {
        format!(
            "{} {} ({:.1}/100)",
            self.band.indicator(),
            self.band.label(),
            self.overall
        )
    }
}

pub fn calculate_quality_score(text: &str) -> QualityScore {
    let breakdown = QualityBreakdown {
        length: assess_length(text),
        structure: assess_structure(text),
        grammar: assess_grammar(text),
        keywords: assess_keywords(text),
        formatting: assess_formatting(text),
    };
    let overall = compute_overall(&breakdown, &QualityWeights::default());
    debug!(overall, ?breakdown, "scored résumé quality");

    QualityScore {
        overall,
        band: ScoreBand::from_score(overall),
        breakdown,
        breakdown_bands: breakdown.bands(),
        feedback: get_quality_feedback(&breakdown),
    }
}

/// One fixed message per sub-score under its cutoff, or a single positive note.
pub fn get_quality_feedback(scores: &QualityBreakdown) -> Vec<String> {
    let checks = [
        (scores.length < 70.0, "Resume is too short. Aim for 150-1000 words."),
        (
            scores.structure < 70.0,
            "Missing key sections. Include: Contact, Summary, Experience, Education, Skills.",
        ),
        (scores.grammar < 80.0, "Review grammar and writing clarity."),
        (
            scores.keywords < 60.0,
            "Add more technical keywords relevant to your field.",
        ),
        (
            scores.formatting < 70.0,
            "Improve formatting consistency and readability.",
        ),
    ];

    let mut feedback: Vec<String> = checks
        .iter()
        .filter(|(triggered, _)| *triggered)
        .map(|(_, message)| message.to_string())
        .collect();

    if feedback.is_empty() {
        feedback.push("Resume looks great! Keep it updated.".to_string());
    }
    feedback
}

fn compute_overall(scores: &QualityBreakdown, weights: &QualityWeights) -> f64 {
    let weighted = weights.length * scores.length
        + weights.structure * scores.structure
        + weights.grammar * scores.grammar
        + weights.keywords * scores.keywords
        + weights.formatting * scores.formatting;
    round_one_decimal(weighted.clamp(0.0, 100.0))
}

fn assess_length(text: &str) -> f64 {
    let words = text.split_whitespace().count();
    if (MIN_WORDS..=MAX_WORDS).contains(&words) {
        100.0
    } else if words < MIN_WORDS {
        words as f64 * 100.0 / MIN_WORDS as f64
    } else {
        let excess = (words - MAX_WORDS) as f64;
        (100.0 - excess / 500.0 * OVERLENGTH_PENALTY).max(0.0)
    }
}

fn assess_structure(text: &str) -> f64 {
    let lower = text.to_lowercase();
    let found = SECTION_MARKERS
        .iter()
        .filter(|marker| lower.contains(*marker))
        .count();
    match found {
        0 => 20.0,
        1 => 40.0,
        2 => 70.0,
        _ => 100.0,
    }
}

/// A checked line (over 10 chars) is an issue when it has more than five words
/// and does not end in punctuation.
fn assess_grammar(text: &str) -> f64 {
    let mut checked = 0usize;
    let mut issues = 0usize;

    for line in text.split('\n') {
        let trimmed = line.trim();
        if trimmed.chars().count() <= 10 {
            continue;
        }
        checked += 1;
        if !trimmed.ends_with(LINE_ENDINGS) && line.split_whitespace().count() > 5 {
            issues += 1;
        }
    }

    if checked == 0 {
        return GRAMMAR_DEFAULT;
    }
    ((1.0 - issues as f64 / checked as f64) * 100.0).clamp(0.0, 100.0)
}

fn assess_keywords(text: &str) -> f64 {
    let lower = text.to_lowercase();
    let found = TECH_KEYWORDS
        .iter()
        .filter(|keyword| lower.contains(*keyword))
        .count();
    (found as f64 * 100.0 / TECH_KEYWORDS.len() as f64).min(100.0)
}

fn assess_formatting(text: &str) -> f64 {
    let lengths: Vec<usize> = text
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.chars().count())
        .collect();

    if lengths.is_empty() {
        return FORMATTING_FLOOR;
    }

    let mean = lengths.iter().sum::<usize>() as f64 / lengths.len() as f64;
    if (40.0..=100.0).contains(&mean) {
        100.0
    } else {
        (100.0 - (mean - IDEAL_LINE_LENGTH).abs() / IDEAL_LINE_LENGTH * 80.0)
            .clamp(FORMATTING_FLOOR, 100.0)
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_range(value: f64) -> bool {
        (0.0..=100.0).contains(&value)
    }

    fn assert_all_in_range(score: &QualityScore) {
        let b = &score.breakdown;
        for value in [score.overall, b.length, b.structure, b.grammar, b.keywords, b.formatting] {
            assert!(in_range(value), "{value} out of range");
        }
    }

    #[test]
    fn test_empty_text_uses_defaults() {
        let score = calculate_quality_score("");
        assert_eq!(score.breakdown.length, 0.0);
        assert_eq!(score.breakdown.structure, 20.0);
        assert_eq!(score.breakdown.grammar, 50.0);
        assert_eq!(score.breakdown.keywords, 0.0);
        assert_eq!(score.breakdown.formatting, 20.0);
        assert_eq!(score.overall, 18.0);
        assert_eq!(score.band, ScoreBand::Fair);
        assert_eq!(score.breakdown_bands.structure, ScoreBand::Fair);
        assert_eq!(score.headline(), "🔴 Fair (18.0/100)");
        assert_all_in_range(&score);
    }

    #[test]
    fn test_breakdown_bands_follow_each_subscore() {
        let breakdown = QualityBreakdown {
            length: 100.0,
            structure: 70.0,
            grammar: 50.0,
            keywords: 30.0,
            formatting: 80.0,
        };
        let bands = breakdown.bands();
        assert_eq!(bands.length, ScoreBand::Excellent);
        assert_eq!(bands.structure, ScoreBand::Good);
        assert_eq!(bands.grammar, ScoreBand::Fair);
        assert_eq!(bands.formatting, ScoreBand::Excellent);
    }

    #[test]
    fn test_length_scaling() {
        assert_eq!(assess_length(&"word ".repeat(75)), 50.0);
        assert_eq!(assess_length(&"word ".repeat(150)), 100.0);
        assert_eq!(assess_length(&"word ".repeat(1000)), 100.0);
        assert_eq!(assess_length(&"word ".repeat(1500)), 80.0);
        assert_eq!(assess_length(&"word ".repeat(4000)), 0.0);
    }

    #[test]
    fn test_structure_counts_markers() {
        assert_eq!(assess_structure("nothing here"), 20.0);
        assert_eq!(assess_structure("SKILLS"), 40.0);
        assert_eq!(assess_structure("Summary and Skills"), 70.0);
        assert_eq!(assess_structure("Contact / Experience / Education"), 100.0);
    }

    #[test]
    fn test_grammar_flags_long_unpunctuated_lines() {
        let text = "Led a team of five engineers on payments\nShipped the new billing system on time.";
        assert_eq!(assess_grammar(text), 50.0);
    }

    #[test]
    fn test_grammar_short_lines_are_not_issues() {
        // Over 10 chars but only three words.
        assert_eq!(assess_grammar("Senior Platform Engineer"), 100.0);
    }

    #[test]
    fn test_grammar_default_when_nothing_checkable() {
        assert_eq!(assess_grammar("Hi\nok"), GRAMMAR_DEFAULT);
    }

    #[test]
    fn test_keywords_fraction() {
        assert_eq!(assess_keywords("Python, Docker and AWS"), 30.0);
        assert_eq!(assess_keywords("none"), 0.0);
    }

    #[test]
    fn test_formatting_ideal_band() {
        let line = "x".repeat(60);
        assert_eq!(assess_formatting(&format!("{line}\n{line}")), 100.0);
    }

    #[test]
    fn test_formatting_degrades_and_floors() {
        let short = assess_formatting("abc\ndef");
        assert!(short < 100.0 && short >= FORMATTING_FLOOR);
        assert_eq!(assess_formatting(&"y".repeat(500)), FORMATTING_FLOOR);
    }

    #[test]
    fn test_overall_is_equal_weight_mean() {
        let breakdown = QualityBreakdown {
            length: 100.0,
            structure: 70.0,
            grammar: 50.0,
            keywords: 30.0,
            formatting: 100.0,
        };
        assert_eq!(compute_overall(&breakdown, &QualityWeights::default()), 70.0);
    }

    #[test]
    fn test_feedback_per_low_subscore() {
        let breakdown = QualityBreakdown {
            length: 50.0,
            structure: 100.0,
            grammar: 100.0,
            keywords: 10.0,
            formatting: 100.0,
        };
        let feedback = get_quality_feedback(&breakdown);
        assert_eq!(feedback.len(), 2);
        assert!(feedback[0].contains("too short"));
        assert!(feedback[1].contains("technical keywords"));
    }

    #[test]
    fn test_feedback_positive_when_all_pass() {
        let breakdown = QualityBreakdown {
            length: 100.0,
            structure: 100.0,
            grammar: 90.0,
            keywords: 60.0,
            formatting: 70.0,
        };
        assert_eq!(
            get_quality_feedback(&breakdown),
            vec!["Resume looks great! Keep it updated."]
        );
    }

    #[test]
    fn test_adversarial_inputs_stay_in_range() {
        let inputs = [
            "\n\n\n\n".to_string(),
            "🦀".repeat(3000),
            "a b c d e f g h i j k l m n o p".repeat(400),
            "Contact Summary Experience Education Skills python java sql".to_string(),
        ];
        for input in &inputs {
            assert_all_in_range(&calculate_quality_score(input));
        }
    }
}
