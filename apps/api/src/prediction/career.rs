//! Career trajectory, market value and growth hints.
//!
//! Everything here keys off two weak signals: role phrases spotted in the
//! résumé and the inferred years of experience. The output is a conversation
//! starter, not an assessment.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::skills::{predict_next_role, NextRole};

const MAX_TITLES: usize = 5;
const MAX_RECOMMENDATIONS: usize = 6;
const UNKNOWN_LEVEL: &str = "Unknown";

static JOB_TITLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:Junior\s+Developer|Senior\s+Developer|Data\s+Scientist|ML\s+Engineer|Machine\s+Learning\s+Engineer|Software\s+Engineer|Backend\s+Developer|Frontend\s+Developer|Full\s*Stack\s+Developer|Engineering\s+Manager|Tech\s+Lead|Architect)\b",
    )
    .unwrap()
});

struct Progression {
    title: &'static str,
    next_roles: [&'static str; 3],
    years_to_next: (u32, u32),
}

const PROGRESSIONS: &[Progression] = &[
    Progression {
        title: "Junior Developer",
        next_roles: ["Senior Developer", "Full Stack Developer", "Tech Lead"],
        years_to_next: (1, 3),
    },
    Progression {
        title: "Senior Developer",
        next_roles: ["Tech Lead", "Engineering Manager", "Architect"],
        years_to_next: (2, 4),
    },
    Progression {
        title: "Data Scientist",
        next_roles: ["Senior Data Scientist", "ML Engineer", "Manager"],
        years_to_next: (2, 3),
    },
    Progression {
        title: "ML Engineer",
        next_roles: ["Senior ML Engineer", "ML Architect", "AI Lead"],
        years_to_next: (2, 4),
    },
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    pub current_level: String,
    pub next_roles: Vec<String>,
    /// e.g. "1-3 years"; absent when no level could be inferred.
    pub timeline: Option<String>,
}

impl Trajectory {
    fn unknown() -> Self {
        Self {
            current_level: UNKNOWN_LEVEL.to_string(),
            next_roles: Vec::new(),
            timeline: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketEstimate {
    pub level: String,
    pub salary_range: String,
    pub currency: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerInsights {
    pub job_titles: Vec<String>,
    pub trajectory: Trajectory,
    pub market_value: MarketEstimate,
    pub next_role: NextRole,
    pub recommendations: Vec<String>,
}

/// Role phrases in order of appearance, deduplicated case-insensitively.
pub fn extract_job_titles(text: &str) -> Vec<String> {
    let mut titles: Vec<String> = Vec::new();
    for m in JOB_TITLE_RE.find_iter(text) {
        let title = m.as_str().trim();
        if !titles.iter().any(|t| t.eq_ignore_ascii_case(title)) {
            titles.push(title.to_string());
        }
        if titles.len() == MAX_TITLES {
            break;
        }
    }
    titles
}

pub fn predict_trajectory(job_titles: &[String], years_experience: u32) -> Trajectory {
    if job_titles.is_empty() {
        return Trajectory::unknown();
    }

    let lowered: Vec<String> = job_titles.iter().map(|t| t.to_lowercase()).collect();
    let matched = PROGRESSIONS.iter().find(|p| {
        let lead_word = p
            .title
            .split_whitespace()
            .next()
            .unwrap_or(p.title)
            .to_lowercase();
        lowered.iter().any(|t| t.contains(&lead_word))
    });

    let progression = match matched {
        Some(p) => p,
        None if years_experience < 2 => &PROGRESSIONS[0],
        None => &PROGRESSIONS[1],
    };

    let (min_years, max_years) = progression.years_to_next;
    let timeline = if years_experience == 0 {
        format!("{min_years}-{max_years} years")
    } else {
        format!("{}-{max_years} years", min_years.saturating_sub(1).max(1))
    };

    Trajectory {
        current_level: progression.title.to_string(),
        next_roles: progression.next_roles.iter().map(|r| r.to_string()).collect(),
        timeline: Some(timeline),
    }
}

/// Salary band in thousands of USD, widened by up to 50% for breadth of skills.
pub fn estimate_market_value(
    job_titles: &[String],
    years_experience: u32,
    skill_count: usize,
) -> MarketEstimate {
    let (level, (base_min, base_max)) = match years_experience {
        0..=1 => ("Junior", (40u32, 70u32)),
        2..=4 => ("Mid-level", (70, 120)),
        5..=7 => ("Senior", (120, 180)),
        _ => ("Lead", (150, 220)),
    };

    // Percent form keeps the truncation exact.
    let boost_pct = (100 + 3 * skill_count.min(1_000) as u32).min(150);
    let adjusted_min = base_min * boost_pct / 100;
    let adjusted_max = base_max * boost_pct / 100;

    debug!(
        titles = job_titles.len(),
        market_level = level,
        boost_pct,
        "estimated market value"
    );

    MarketEstimate {
        level: level.to_string(),
        salary_range: format!("${adjusted_min}k - ${adjusted_max}k"),
        currency: "USD".to_string(),
    }
}

pub fn get_growth_recommendations(trajectory: &Trajectory, skills: &[String]) -> Vec<String> {
    let current = trajectory.current_level.to_lowercase();
    let has = |name: &str| skills.iter().any(|s| s.eq_ignore_ascii_case(name));

    let mut recs = vec![
        "Contribute to 2-3 real-world or open-source projects.",
        "Create a strong portfolio (GitHub/portfolio site) showcasing end-to-end work.",
        "Improve communication and documentation skills for better teamwork.",
    ];

    if current.contains("junior") {
        recs.push("Deepen fundamentals in data structures, algorithms, and system design.");
        recs.push("Pair with seniors for code reviews and mentorship at least once a week.");
    } else if current.contains("senior") {
        recs.push("Take ownership of modules/features and mentor at least one junior.");
        recs.push("Start learning high-level architecture and trade-offs for production systems.");
    } else if current.contains("manager") || current.contains("lead") {
        recs.push("Focus on leadership, stakeholder communication, and roadmap planning.");
        recs.push("Invest in hiring, interviewing, and team development skills.");
    }

    if has("python") && has("machine learning") {
        recs.push("Build end-to-end ML pipelines including deployment and monitoring.");
    }
    if !has("docker") {
        recs.push("Learn Docker for reproducible environments and deployments.");
    } else if !has("kubernetes") {
        recs.push("Explore Kubernetes for scalable microservice deployments.");
    }
    if !["cloud", "aws", "azure", "gcp"].iter().any(|c| has(c)) {
        recs.push("Pick one cloud platform (AWS/Azure/GCP) and complete one hands-on project.");
    }

    let mut unique: Vec<String> = Vec::with_capacity(recs.len());
    for rec in recs {
        if !unique.iter().any(|u| u == rec) {
            unique.push(rec.to_string());
        }
    }
    unique.truncate(MAX_RECOMMENDATIONS);
    unique
}

/// Runs every career heuristic over one résumé.
pub fn predict_career(text: &str, years_experience: u32, skills: &[String]) -> CareerInsights {
    let job_titles = extract_job_titles(text);
    let trajectory = predict_trajectory(&job_titles, years_experience);
    let market_value = estimate_market_value(&job_titles, years_experience, skills.len());
    let recommendations = get_growth_recommendations(&trajectory, skills);

    CareerInsights {
        next_role: predict_next_role(years_experience),
        job_titles,
        trajectory,
        market_value,
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_job_titles_in_text_order() {
        let text = "Tech Lead at Acme (2021-2023). Previously a software engineer, \
                    then Senior  Developer. Promoted to tech lead again.";
        assert_eq!(
            extract_job_titles(text),
            vec!["Tech Lead", "software engineer", "Senior  Developer"]
        );
    }

    #[test]
    fn test_job_titles_capped_and_word_bounded() {
        let text = "Architecture enthusiast. Junior Developer, Data Scientist, ML Engineer, \
                    Backend Developer, Frontend Developer, Fullstack Developer";
        let titles = extract_job_titles(text);
        assert_eq!(titles.len(), MAX_TITLES);
        assert_eq!(titles[0], "Junior Developer");
        assert!(!titles.iter().any(|t| t.eq_ignore_ascii_case("architect")));
    }

    #[test]
    fn test_trajectory_without_titles_is_unknown() {
        let trajectory = predict_trajectory(&[], 7);
        assert_eq!(trajectory.current_level, "Unknown");
        assert!(trajectory.next_roles.is_empty());
        assert_eq!(trajectory.timeline, None);
    }

    #[test]
    fn test_trajectory_matches_template_by_lead_word() {
        let trajectory = predict_trajectory(&strings(&["Data Scientist"]), 0);
        assert_eq!(trajectory.current_level, "Data Scientist");
        assert_eq!(
            trajectory.next_roles,
            vec!["Senior Data Scientist", "ML Engineer", "Manager"]
        );
        assert_eq!(trajectory.timeline.as_deref(), Some("2-3 years"));
    }

    #[test]
    fn test_trajectory_template_order_wins() {
        // "senior" is checked before "data".
        let trajectory = predict_trajectory(&strings(&["Data Scientist", "Senior Developer"]), 3);
        assert_eq!(trajectory.current_level, "Senior Developer");
        assert_eq!(trajectory.timeline.as_deref(), Some("1-4 years"));
    }

    #[test]
    fn test_trajectory_fallback_by_experience() {
        let junior = predict_trajectory(&strings(&["Software Engineer"]), 1);
        assert_eq!(junior.current_level, "Junior Developer");
        assert_eq!(junior.timeline.as_deref(), Some("1-3 years"));

        let senior = predict_trajectory(&strings(&["Software Engineer"]), 6);
        assert_eq!(senior.current_level, "Senior Developer");
        assert!(senior.next_roles.len() <= 3);
    }

    #[test]
    fn test_market_value_levels() {
        let junior = estimate_market_value(&[], 0, 0);
        assert_eq!(junior.level, "Junior");
        assert_eq!(junior.salary_range, "$40k - $70k");
        assert_eq!(junior.currency, "USD");

        assert_eq!(estimate_market_value(&[], 4, 0).level, "Mid-level");
        assert_eq!(estimate_market_value(&[], 5, 0).level, "Senior");
        assert_eq!(estimate_market_value(&[], 8, 0).level, "Lead");
    }

    #[test]
    fn test_market_value_skill_boost() {
        assert_eq!(estimate_market_value(&[], 0, 1).salary_range, "$41k - $72k");
        // Boost is capped at 1.5x.
        assert_eq!(estimate_market_value(&[], 6, 20).salary_range, "$180k - $270k");
        assert_eq!(
            estimate_market_value(&[], 6, usize::MAX).salary_range,
            "$180k - $270k"
        );
    }

    #[test]
    fn test_recommendations_junior_without_tooling() {
        let trajectory = predict_trajectory(&strings(&["Junior Developer"]), 1);
        let recs = get_growth_recommendations(&trajectory, &strings(&["Python"]));
        assert_eq!(recs.len(), MAX_RECOMMENDATIONS);
        assert!(recs[0].starts_with("Contribute to 2-3"));
        assert!(recs[3].starts_with("Deepen fundamentals"));
        assert!(recs[5].starts_with("Learn Docker"));
    }

    #[test]
    fn test_recommendations_docker_without_kubernetes() {
        let trajectory = Trajectory::unknown();
        let recs = get_growth_recommendations(&trajectory, &strings(&["Docker", "AWS"]));
        assert_eq!(recs.len(), 4);
        assert_eq!(
            recs[3],
            "Explore Kubernetes for scalable microservice deployments."
        );
    }

    #[test]
    fn test_recommendations_lead_branch() {
        let trajectory = Trajectory {
            current_level: "Tech Lead".to_string(),
            next_roles: Vec::new(),
            timeline: None,
        };
        let recs = get_growth_recommendations(
            &trajectory,
            &strings(&["Docker", "Kubernetes", "GCP"]),
        );
        assert_eq!(recs.len(), 5);
        assert!(recs[3].starts_with("Focus on leadership"));
    }

    #[test]
    fn test_predict_career_bundle() {
        let text = "Senior Developer with 6 years at Acme.";
        let insights = predict_career(text, 6, &strings(&["Python", "Docker"]));
        assert_eq!(insights.job_titles, vec!["Senior Developer"]);
        assert_eq!(insights.trajectory.current_level, "Senior Developer");
        assert_eq!(insights.market_value.level, "Senior");
        assert_eq!(insights.next_role.role, "Engineering Manager");
        assert!(insights.recommendations.len() <= MAX_RECOMMENDATIONS);
    }
}
