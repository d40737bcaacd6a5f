use serde::{Deserialize, Serialize};

/// Coarse label for a 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Excellent,
    Good,
    Fair,
}

impl ScoreBand {
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= 80.0 => ScoreBand::Excellent,
            s if s >= 60.0 => ScoreBand::Good,
            _ => ScoreBand::Fair,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent",
            ScoreBand::Good => "Good",
            ScoreBand::Fair => "Fair",
        }
    }

    /// Traffic-light indicator for text displays.
    pub fn indicator(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "🟢",
            ScoreBand::Good => "🟡",
            ScoreBand::Fair => "🔴",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_thresholds() {
        assert_eq!(ScoreBand::from_score(80.0), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_score(79.9), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(60.0), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(12.0), ScoreBand::Fair);
    }

    #[test]
    fn test_labels() {
        assert_eq!(ScoreBand::Excellent.label(), "Excellent");
        assert_eq!(ScoreBand::Fair.indicator(), "🔴");
    }

    #[test]
    fn test_serde_snake_case() {
        assert_eq!(serde_json::to_string(&ScoreBand::Good).unwrap(), r#""good""#);
    }
}
