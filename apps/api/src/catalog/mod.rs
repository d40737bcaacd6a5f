//! Job Catalog: the postings résumés are ranked against.
//!
//! The built-in catalog is used unless `JOB_CATALOG_PATH` points at a JSON file
//! with the same `{title, keywords}` shape. Keywords are stored exactly as
//! written; normalisation happens at match time.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    pub title: String,
    pub keywords: Vec<String>,
}

impl JobRecord {
    pub fn new(title: &str, keywords: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }
}

pub fn default_catalog() -> Vec<JobRecord> {
    vec![
        JobRecord::new(
            "Machine Learning Engineer",
            &[
                "Python",
                "Machine Learning",
                "Deep Learning",
                "TensorFlow",
                "PyTorch",
                "Scikit-learn",
                "Data Preprocessing",
                "Model Deployment",
                "MLOps",
                "Docker",
                "Kubernetes",
                "AWS",
            ],
        ),
        JobRecord::new(
            "Senior ML Engineer",
            &["Python", "TensorFlow", "ML", "Data Analysis", "AWS"],
        ),
        JobRecord::new(
            "Full Stack Developer",
            &["JavaScript", "React", "Node.js", "SQL", "Docker"],
        ),
        JobRecord::new(
            "Data Scientist",
            &["Python", "ML", "SQL", "Statistics", "Tableau"],
        ),
        JobRecord::new(
            "DevOps Engineer",
            &["Docker", "Kubernetes", "AWS", "CI/CD", "Linux"],
        ),
        JobRecord::new(
            "NLP Engineer",
            &["NLP", "Python", "BERT", "Transformers", "Deep Learning"],
        ),
        JobRecord::new(
            "Cloud Architect",
            &["AWS", "Cloud", "Architecture", "Terraform", "DevOps"],
        ),
        JobRecord::new(
            "Frontend Engineer",
            &["React", "JavaScript", "TypeScript", "CSS", "UI/UX"],
        ),
        JobRecord::new(
            "Backend Engineer",
            &["Python", "Java", "SQL", "REST API", "Microservices"],
        ),
        JobRecord::new(
            "AI Research Scientist",
            &["ML", "Research", "TensorFlow", "PyTorch", "Papers"],
        ),
        JobRecord::new(
            "Product Manager",
            &["Product Strategy", "Analytics", "Leadership", "Communication"],
        ),
    ]
}

/// Reads a catalog from a JSON array of `{title, keywords}` records.
pub fn load_catalog(path: &Path) -> Result<Vec<JobRecord>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read job catalog at {}", path.display()))?;
    let catalog: Vec<JobRecord> = serde_json::from_str(&raw)
        .with_context(|| format!("Job catalog at {} is not valid JSON", path.display()))?;
    info!("Loaded {} jobs from {}", catalog.len(), path.display());
    Ok(catalog)
}

/// Resolves the configured catalog: the file when a path is given, otherwise the built-in list.
pub fn resolve_catalog(path: Option<&Path>) -> Result<Vec<JobRecord>> {
    match path {
        Some(path) => load_catalog(path),
        None => {
            let catalog = default_catalog();
            info!("Using built-in job catalog ({} jobs)", catalog.len());
            Ok(catalog)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_catalog_shape() {
        let catalog = default_catalog();
        assert_eq!(catalog.len(), 11);
        assert_eq!(catalog[0].title, "Machine Learning Engineer");
        assert_eq!(catalog[0].keywords.len(), 12);
        assert!(catalog.iter().all(|job| !job.keywords.is_empty()));
    }

    #[test]
    fn test_load_catalog_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"title": "Rust Engineer", "keywords": ["Rust", "Tokio", "rust"]}}]"#
        )
        .unwrap();

        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog[0].title, "Rust Engineer");
        // Stored exactly as written
        assert_eq!(catalog[0].keywords, vec!["Rust", "Tokio", "rust"]);
    }

    #[test]
    fn test_empty_array_is_valid_catalog() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[]").unwrap();
        assert!(load_catalog(file.path()).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();
        let err = load_catalog(file.path()).unwrap_err();
        assert!(err.to_string().contains("not valid JSON"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(load_catalog(Path::new("/nonexistent/jobs.json")).is_err());
    }

    #[test]
    fn test_resolve_without_path_uses_default() {
        assert_eq!(resolve_catalog(None).unwrap(), default_catalog());
    }
}
