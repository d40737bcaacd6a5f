//! Improvement suggestions derived from a job's missing keywords.

const MAX_SUGGESTIONS: usize = 4;
/// More missing keywords than this adds the generic "add keywords" suggestion.
const MANY_MISSING: usize = 3;

const CLOUD_KEYWORDS: &[&str] = &[
    "aws",
    "azure",
    "gcp",
    "cloud",
    "docker",
    "kubernetes",
    "devops",
    "ci/cd",
    "terraform",
    "linux",
];
const ML_KEYWORDS: &[&str] = &[
    "tensorflow",
    "pytorch",
    "scikit-learn",
    "machine learning",
    "ml",
    "deep learning",
    "mlops",
    "nlp",
];
const WEB_KEYWORDS: &[&str] = &[
    "react",
    "node.js",
    "django",
    "flask",
    "javascript",
    "typescript",
    "css",
];

const WELL_MATCHED: &str = "Your resume already covers this role's keywords. Keep it updated.";

/// One suggestion per domain with missing keywords, a generic nudge when many
/// are missing, and a portfolio reminder; at most four.
pub fn get_improvement_suggestions(missing_keywords: &[String]) -> Vec<String> {
    if missing_keywords.is_empty() {
        return vec![WELL_MATCHED.to_string()];
    }

    let missing: Vec<String> = missing_keywords
        .iter()
        .map(|k| k.trim().to_lowercase())
        .collect();
    let misses_any = |bucket: &[&str]| missing.iter().any(|k| bucket.contains(&k.as_str()));

    let mut suggestions = Vec::new();
    if misses_any(CLOUD_KEYWORDS) {
        suggestions.push("Complete AWS/Azure certification or Docker course".to_string());
    }
    if misses_any(ML_KEYWORDS) {
        suggestions.push("Build ML projects with TensorFlow/PyTorch".to_string());
    }
    if misses_any(WEB_KEYWORDS) {
        suggestions.push("Create full-stack project (React + Node.js/Django)".to_string());
    }
    if missing_keywords.len() > MANY_MISSING {
        suggestions.push("Add 2-3 more relevant keywords to resume".to_string());
    }
    suggestions.push("Update GitHub with recent projects".to_string());

    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_missing_is_well_matched() {
        assert_eq!(get_improvement_suggestions(&[]), vec![WELL_MATCHED]);
    }

    #[test]
    fn test_cloud_bucket() {
        let suggestions = get_improvement_suggestions(&strings(&["Kubernetes"]));
        assert_eq!(
            suggestions,
            vec![
                "Complete AWS/Azure certification or Docker course",
                "Update GitHub with recent projects",
            ]
        );
    }

    #[test]
    fn test_unbucketed_keyword_gets_generic_only() {
        assert_eq!(
            get_improvement_suggestions(&strings(&["Tableau"])),
            vec!["Update GitHub with recent projects"]
        );
    }

    #[test]
    fn test_capped_at_four() {
        let missing = strings(&["AWS", "PyTorch", "React", "Tableau", "Statistics"]);
        let suggestions = get_improvement_suggestions(&missing);
        assert_eq!(suggestions.len(), MAX_SUGGESTIONS);
        assert!(suggestions[3].contains("more relevant keywords"));
    }
}
