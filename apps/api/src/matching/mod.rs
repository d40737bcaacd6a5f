// Job Matcher
// Ranks a job catalog against a résumé. Keyword coverage is the default fit
// signal; the blended backend mixes in TF-IDF text similarity.

pub mod ranker;
pub mod similarity;
pub mod suggestions;

pub use ranker::{
    rank_jobs, BlendedRanker, JobRanker, KeywordRanker, RankedJob, RankerBackend,
};
pub use suggestions::get_improvement_suggestions;
