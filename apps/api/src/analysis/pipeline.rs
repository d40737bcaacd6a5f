//! One pass over a résumé: extraction first, then every consumer of its output.

use chrono::{DateTime, Datelike, Utc};
use tracing::info;
use uuid::Uuid;

use crate::analysis::models::AnalysisReport;
use crate::catalog::JobRecord;
use crate::extraction::{
    extract_contact_info, extract_education, extract_projects, extract_skills,
    extract_years_experience_as_of, group_skills_by_theme,
};
use crate::matching::{get_improvement_suggestions, JobRanker};
use crate::prediction::{predict_career, predict_skills};
use crate::quality::calculate_quality_score;

pub fn analyze_resume(text: &str, catalog: &[JobRecord], ranker: &dyn JobRanker) -> AnalysisReport {
    analyze_resume_at(text, catalog, ranker, Utc::now())
}

/// Same as [`analyze_resume`] with an explicit clock; open-ended date ranges
/// ("2019 - Present") resolve against `now`'s year.
pub fn analyze_resume_at(
    text: &str,
    catalog: &[JobRecord],
    ranker: &dyn JobRanker,
    now: DateTime<Utc>,
) -> AnalysisReport {
    let analysis_id = Uuid::new_v4();
    info!(
        %analysis_id,
        bytes = text.len(),
        jobs = catalog.len(),
        ranker = ranker.backend(),
        "Analyzing résumé"
    );

    let contact = extract_contact_info(text);
    let education = extract_education(text);
    let projects = extract_projects(text);
    let (skills, skill_count) = extract_skills(text);
    let found_skills = skills.all_skills();
    let skill_groups = group_skills_by_theme(&found_skills);
    let experience = extract_years_experience_as_of(text, now.year());
    let years_experience = experience.years();

    let quality = calculate_quality_score(text);

    let ranked_jobs = ranker.rank(text, &skills, catalog);
    let job_suggestions = ranked_jobs
        .first()
        .map(|top| get_improvement_suggestions(&top.missing_keywords))
        .unwrap_or_default();

    let predicted_skills = predict_skills(&found_skills, years_experience);
    let career = predict_career(text, years_experience, &found_skills);

    info!(
        %analysis_id,
        skill_count,
        experience_known = experience.is_known(),
        years_experience,
        quality = %quality.headline(),
        top_job = ranked_jobs.first().map(|j| j.job_title.as_str()).unwrap_or("-"),
        "Analysis complete"
    );

    AnalysisReport {
        analysis_id,
        analyzed_at: now,
        word_count: text.split_whitespace().count(),
        char_count: text.chars().count(),
        contact,
        education,
        projects,
        skills,
        skill_count,
        skill_groups,
        experience,
        years_experience,
        quality,
        ranker: ranker.backend().to_string(),
        ranked_jobs,
        job_suggestions,
        predicted_skills,
        career,
    }
}
