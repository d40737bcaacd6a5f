use std::sync::Arc;

use anyhow::Context;
use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::analysis::{analyze_resume, decode_resume_text, AnalysisReport};
use crate::catalog::JobRecord;
use crate::errors::AppError;
use crate::extraction::{extract_skills, extract_years_experience};
use crate::matching::{get_improvement_suggestions, RankedJob};
use crate::prediction::{predict_career, predict_skills, CareerInsights, PredictedSkill};
use crate::quality::{calculate_quality_score, QualityScore};
use crate::state::AppState;

const UPLOAD_FIELD: &str = "file";

#[derive(Deserialize)]
pub struct ResumeRequest {
    pub resume_text: String,
}

#[derive(Deserialize)]
pub struct RankRequest {
    pub resume_text: String,
    /// Overrides the configured catalog when present, even if empty.
    #[serde(default)]
    pub jobs: Option<Vec<JobRecord>>,
}

#[derive(Serialize)]
pub struct RankedJobWithSuggestions {
    #[serde(flatten)]
    pub job: RankedJob,
    pub suggestions: Vec<String>,
}

#[derive(Serialize)]
pub struct RankResponse {
    pub ranker: &'static str,
    pub jobs: Vec<RankedJobWithSuggestions>,
}

#[derive(Serialize)]
pub struct CareerResponse {
    pub years_experience: u32,
    #[serde(flatten)]
    pub insights: CareerInsights,
    pub predicted_skills: Vec<PredictedSkill>,
}

/// Rejects text the core should never see: oversized or blank.
fn validate_resume_text(text: &str, max_bytes: usize) -> Result<(), AppError> {
    if text.len() > max_bytes {
        warn!(bytes = text.len(), max_bytes, "rejected oversized résumé");
        return Err(AppError::PayloadTooLarge(max_bytes));
    }
    if text.trim().is_empty() {
        return Err(AppError::Validation("resume_text must not be empty".to_string()));
    }
    Ok(())
}

/// Runs CPU-bound analysis off the async runtime.
async fn run_blocking<T, F>(work: F) -> Result<T, AppError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    let output = tokio::task::spawn_blocking(work)
        .await
        .context("analysis task failed")?;
    Ok(output)
}

async fn analyze_text(state: &AppState, text: String) -> Result<AnalysisReport, AppError> {
    let catalog = Arc::clone(&state.catalog);
    let ranker = Arc::clone(&state.ranker);
    run_blocking(move || analyze_resume(&text, &catalog, ranker.as_ref())).await
}

/// POST /api/v1/analyze
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(req): Json<ResumeRequest>,
) -> Result<Json<AnalysisReport>, AppError> {
    validate_resume_text(&req.resume_text, state.config.max_resume_bytes)?;
    let report = analyze_text(&state, req.resume_text).await?;
    Ok(Json(report))
}

/// POST /api/v1/analyze/upload
pub async fn handle_analyze_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisReport>, AppError> {
    let max_bytes = state.config.max_resume_bytes;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart body: {e}")))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let file_name = field.file_name().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("failed to read upload: {e}")))?;
        if bytes.len() > max_bytes {
            return Err(AppError::PayloadTooLarge(max_bytes));
        }
        info!(file_name = ?file_name, bytes = bytes.len(), "received résumé upload");

        let text = decode_resume_text(&bytes, file_name.as_deref())?;
        validate_resume_text(&text, max_bytes)?;
        let report = analyze_text(&state, text).await?;
        return Ok(Json(report));
    }

    Err(AppError::Validation(format!(
        "multipart field '{UPLOAD_FIELD}' is required"
    )))
}

/// POST /api/v1/quality
pub async fn handle_quality(
    State(state): State<AppState>,
    Json(req): Json<ResumeRequest>,
) -> Result<Json<QualityScore>, AppError> {
    validate_resume_text(&req.resume_text, state.config.max_resume_bytes)?;
    let score = run_blocking(move || calculate_quality_score(&req.resume_text)).await?;
    Ok(Json(score))
}

/// GET /api/v1/jobs
pub async fn handle_list_jobs(State(state): State<AppState>) -> Json<Vec<JobRecord>> {
    Json(state.catalog.as_ref().clone())
}

/// POST /api/v1/jobs/rank
pub async fn handle_rank_jobs(
    State(state): State<AppState>,
    Json(req): Json<RankRequest>,
) -> Result<Json<RankResponse>, AppError> {
    validate_resume_text(&req.resume_text, state.config.max_resume_bytes)?;

    let catalog = match req.jobs {
        Some(jobs) => Arc::new(jobs),
        None => Arc::clone(&state.catalog),
    };
    let ranker = Arc::clone(&state.ranker);
    let text = req.resume_text;

    let jobs = run_blocking(move || {
        let (skills, _) = extract_skills(&text);
        ranker
            .rank(&text, &skills, &catalog)
            .into_iter()
            .map(|job| RankedJobWithSuggestions {
                suggestions: get_improvement_suggestions(&job.missing_keywords),
                job,
            })
            .collect::<Vec<_>>()
    })
    .await?;

    Ok(Json(RankResponse {
        ranker: state.ranker.backend(),
        jobs,
    }))
}

/// POST /api/v1/career
pub async fn handle_career(
    State(state): State<AppState>,
    Json(req): Json<ResumeRequest>,
) -> Result<Json<CareerResponse>, AppError> {
    validate_resume_text(&req.resume_text, state.config.max_resume_bytes)?;

    let response = run_blocking(move || {
        let text = req.resume_text;
        let found_skills = extract_skills(&text).0.all_skills();
        let years_experience = extract_years_experience(&text).years();
        CareerResponse {
            years_experience,
            insights: predict_career(&text, years_experience, &found_skills),
            predicted_skills: predict_skills(&found_skills, years_experience),
        }
    })
    .await?;

    Ok(Json(response))
}
