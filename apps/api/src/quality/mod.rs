// Quality Scorer
// Five independent 0-100 heuristics over raw résumé text, an equal-weight
// overall score, and threshold-driven feedback.

pub mod band;
pub mod scorer;

pub use band::ScoreBand;
pub use scorer::{
    calculate_quality_score, get_quality_feedback, QualityBands, QualityBreakdown, QualityScore,
};
