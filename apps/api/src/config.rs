use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};

use crate::matching::RankerBackend;

/// 1 MiB of résumé text is far beyond any real résumé.
const DEFAULT_MAX_RESUME_BYTES: usize = 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// JSON catalog to rank against instead of the built-in one.
    pub job_catalog_path: Option<PathBuf>,
    pub ranker_backend: RankerBackend,
    pub max_resume_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            job_catalog_path: None,
            ranker_backend: RankerBackend::default(),
            max_resume_bytes: DEFAULT_MAX_RESUME_BYTES,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();

        Ok(Config {
            port: match lookup("PORT") {
                Some(raw) => raw
                    .parse::<u16>()
                    .context("PORT must be a valid port number")?,
                None => defaults.port,
            },
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
            job_catalog_path: lookup("JOB_CATALOG_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            ranker_backend: match lookup("RANKER_BACKEND") {
                Some(raw) => raw.parse::<RankerBackend>().map_err(|e| anyhow!(e))?,
                None => defaults.ranker_backend,
            },
            max_resume_bytes: match lookup("MAX_RESUME_BYTES") {
                Some(raw) => raw
                    .parse::<usize>()
                    .context("MAX_RESUME_BYTES must be a byte count")?,
                None => defaults.max_resume_bytes,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_pairs(pairs: &[(&str, &str)]) -> Result<Config> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = from_pairs(&[]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert_eq!(config.job_catalog_path, None);
        assert_eq!(config.ranker_backend, RankerBackend::Keyword);
        assert_eq!(config.max_resume_bytes, 1024 * 1024);
    }

    #[test]
    fn test_overrides() {
        let config = from_pairs(&[
            ("PORT", "9000"),
            ("JOB_CATALOG_PATH", "/etc/jobs.json"),
            ("RANKER_BACKEND", "Blended"),
            ("MAX_RESUME_BYTES", "2048"),
        ])
        .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.job_catalog_path, Some(PathBuf::from("/etc/jobs.json")));
        assert_eq!(config.ranker_backend, RankerBackend::Blended);
        assert_eq!(config.max_resume_bytes, 2048);
    }

    #[test]
    fn test_invalid_values_fail() {
        assert!(from_pairs(&[("PORT", "eighty")]).is_err());
        assert!(from_pairs(&[("RANKER_BACKEND", "llm")]).is_err());
        assert!(from_pairs(&[("MAX_RESUME_BYTES", "-1")]).is_err());
    }
}
