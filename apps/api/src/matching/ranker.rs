//! Job ranking: pluggable, trait-based rankers that score a résumé against every
//! job in a catalog.
//!
//! Default: `KeywordRanker` (fit score is keyword coverage alone).
//! Alternative: `BlendedRanker` (keyword coverage blended with TF-IDF similarity).
//!
//! `AppState` holds an `Arc<dyn JobRanker>`, chosen at startup via `RANKER_BACKEND`.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::JobRecord;
use crate::extraction::SkillSet;
use crate::matching::similarity::tfidf_cosine;

const KEYWORD_WEIGHT: f64 = 0.6;
const SIMILARITY_WEIGHT: f64 = 0.4;

// ────────────────────────────────────────────────────────────────────────────
// Output data model
// ────────────────────────────────────────────────────────────────────────────

/// One job scored against a résumé. `matched_keywords` and `missing_keywords`
/// partition the job's keyword list, each keyword appearing in exactly one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedJob {
    pub job_title: String,
    pub fit_score: f64,     // 0 – 100
    pub keyword_match: f64, // 0 – 100
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub matched_count: usize,
    pub keywords_count: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap ranking backends without touching handlers or the
/// analysis pipeline. Output is sorted by `fit_score` descending; ties keep
/// catalog order.
pub trait JobRanker: Send + Sync {
    fn rank(&self, resume_text: &str, skills: &SkillSet, catalog: &[JobRecord]) -> Vec<RankedJob>;

    /// Short label reported alongside results.
    fn backend(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankerBackend {
    #[default]
    Keyword,
    Blended,
}

impl RankerBackend {
    pub fn build(self) -> Box<dyn JobRanker> {
        match self {
            RankerBackend::Keyword => Box::new(KeywordRanker),
            RankerBackend::Blended => Box::new(BlendedRanker),
        }
    }
}

impl FromStr for RankerBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "keyword" => Ok(RankerBackend::Keyword),
            "blended" => Ok(RankerBackend::Blended),
            other => Err(format!(
                "unknown ranker backend '{other}' (expected 'keyword' or 'blended')"
            )),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// KeywordRanker (default)
// ────────────────────────────────────────────────────────────────────────────

/// Fit score = percentage of job keywords found in the résumé text or among
/// the extracted skill names (case-insensitive substring match).
pub struct KeywordRanker;

impl JobRanker for KeywordRanker {
    fn rank(&self, resume_text: &str, skills: &SkillSet, catalog: &[JobRecord]) -> Vec<RankedJob> {
        rank_jobs(resume_text, skills, catalog)
    }

    fn backend(&self) -> &'static str {
        "keyword"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// BlendedRanker: keyword coverage + text similarity
// ────────────────────────────────────────────────────────────────────────────

/// fit_score = 0.6 × keyword_match + 0.4 × TF-IDF cosine(résumé, job profile) × 100,
/// where the job profile is the title followed by its keywords.
pub struct BlendedRanker;

impl JobRanker for BlendedRanker {
    fn rank(&self, resume_text: &str, skills: &SkillSet, catalog: &[JobRecord]) -> Vec<RankedJob> {
        let resume = MatchContext::new(resume_text, skills);
        let ranked = catalog
            .iter()
            .map(|job| {
                let mut scored = score_job(&resume, job);
                let profile = format!("{} {}", job.title, job.keywords.join(" "));
                let similarity = tfidf_cosine(resume_text, &profile) * 100.0;
                scored.fit_score = round_one_decimal(
                    KEYWORD_WEIGHT * scored.keyword_match + SIMILARITY_WEIGHT * similarity,
                );
                scored
            })
            .collect();
        sort_by_fit(ranked)
    }

    fn backend(&self) -> &'static str {
        "blended"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core keyword algorithm
// ────────────────────────────────────────────────────────────────────────────

/// Ranks every job in `catalog` by keyword coverage. An empty catalog yields an
/// empty list; a job without keywords scores 0.
pub fn rank_jobs(resume_text: &str, skills: &SkillSet, catalog: &[JobRecord]) -> Vec<RankedJob> {
    let resume = MatchContext::new(resume_text, skills);
    let ranked = catalog.iter().map(|job| score_job(&resume, job)).collect();
    sort_by_fit(ranked)
}

/// Lowercased résumé text and skill names, computed once per ranking.
struct MatchContext {
    text: String,
    skills: Vec<String>,
}

impl MatchContext {
    fn new(resume_text: &str, skills: &SkillSet) -> Self {
        Self {
            text: resume_text.to_lowercase(),
            skills: skills
                .all_skills()
                .iter()
                .map(|s| s.to_lowercase())
                .collect(),
        }
    }

    fn covers(&self, keyword: &str) -> bool {
        let keyword = keyword.trim().to_lowercase();
        if keyword.is_empty() {
            return false;
        }
        self.text.contains(&keyword) || self.skills.iter().any(|s| s.contains(&keyword))
    }
}

fn score_job(resume: &MatchContext, job: &JobRecord) -> RankedJob {
    let (matched_keywords, missing_keywords): (Vec<String>, Vec<String>) = job
        .keywords
        .iter()
        .cloned()
        .partition(|keyword| resume.covers(keyword));

    let keywords_count = job.keywords.len();
    let matched_count = matched_keywords.len();
    let keyword_match = if keywords_count > 0 {
        round_one_decimal(matched_count as f64 * 100.0 / keywords_count as f64)
    } else {
        0.0
    };

    debug!(
        job = %job.title,
        matched_count,
        keywords_count,
        "scored job keywords"
    );

    RankedJob {
        job_title: job.title.clone(),
        fit_score: keyword_match,
        keyword_match,
        matched_keywords,
        missing_keywords,
        matched_count,
        keywords_count,
    }
}

/// Stable sort, highest fit first.
fn sort_by_fit(mut ranked: Vec<RankedJob>) -> Vec<RankedJob> {
    ranked.sort_by(|a, b| {
        b.fit_score
            .partial_cmp(&a.fit_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranked
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
