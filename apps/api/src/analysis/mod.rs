// Analysis Pipeline
// Composes every component into one report, plus text acquisition and the
// HTTP handlers that front it.

pub mod acquire;
pub mod handlers;
pub mod models;
pub mod pipeline;

pub use acquire::decode_resume_text;
pub use models::AnalysisReport;
pub use pipeline::{analyze_resume, analyze_resume_at};
