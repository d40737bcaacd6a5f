use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::extraction::{ContactInfo, EducationEntry, ExperienceSpan, SkillGroup, SkillSet};
use crate::matching::RankedJob;
use crate::prediction::{CareerInsights, PredictedSkill};
use crate::quality::QualityScore;

/// Everything derived from one résumé in a single pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub analysis_id: Uuid,
    pub analyzed_at: DateTime<Utc>,
    pub word_count: usize,
    pub char_count: usize,
    pub contact: ContactInfo,
    pub education: Vec<EducationEntry>,
    pub projects: Vec<String>,
    pub skills: SkillSet,
    pub skill_count: usize,
    pub skill_groups: Vec<SkillGroup>,
    pub experience: ExperienceSpan,
    pub years_experience: u32,
    pub quality: QualityScore,
    /// Which ranker produced `ranked_jobs`.
    pub ranker: String,
    pub ranked_jobs: Vec<RankedJob>,
    /// Improvement suggestions for the top-ranked job; empty with no jobs.
    pub job_suggestions: Vec<String>,
    pub predicted_skills: Vec<PredictedSkill>,
    pub career: CareerInsights,
}
