pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::errors::AppError;
use crate::state::AppState;

/// Headroom over `MAX_RESUME_BYTES` for JSON escaping and multipart framing,
/// so oversized résumés reach the handlers and get a structured 413.
const BODY_OVERHEAD_BYTES: usize = 64 * 1024;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    let body_limit = state
        .config
        .max_resume_bytes
        .saturating_mul(2)
        .saturating_add(BODY_OVERHEAD_BYTES);

    Router::new()
        .route("/health", get(health::health_handler))
        // Analysis API
        .route("/api/v1/analyze", post(handlers::handle_analyze))
        .route(
            "/api/v1/analyze/upload",
            post(handlers::handle_analyze_upload),
        )
        .route("/api/v1/quality", post(handlers::handle_quality))
        .route("/api/v1/career", post(handlers::handle_career))
        // Job catalog
        .route("/api/v1/jobs", get(handlers::handle_list_jobs))
        .route("/api/v1/jobs/rank", post(handlers::handle_rank_jobs))
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
