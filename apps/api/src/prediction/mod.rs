// Skill Predictor and Career Predictor
// Coarse, table-driven guesses built on the Extraction Engine's output.

pub mod career;
pub mod skills;

pub use career::{
    estimate_market_value, extract_job_titles, get_growth_recommendations, predict_career,
    predict_trajectory, CareerInsights, MarketEstimate, Trajectory,
};
pub use skills::{predict_next_role, predict_skills, NextRole, PredictedSkill};
