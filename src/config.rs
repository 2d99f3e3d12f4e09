//! Runtime configuration from `.env` and the process environment.

use std::path::PathBuf;

/// Artifact path used when neither `--model` nor `EMPPERF_MODEL` is set.
pub const DEFAULT_MODEL_PATH: &str = "models/performance_pipeline.json";
/// Tracing filter used when `EMPPERF_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info";

pub const MODEL_ENV: &str = "EMPPERF_MODEL";
pub const LOG_ENV: &str = "EMPPERF_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub model_path: PathBuf,
    pub log_filter: String,
    /// Whether the log filter came from the environment rather than the default.
    pub log_filter_explicit: bool,
}

impl AppConfig {
    /// Load `.env` (if any) and read configuration from the environment.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let model_path = non_empty(MODEL_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MODEL_PATH));
        let (log_filter, log_filter_explicit) = match non_empty(LOG_ENV) {
            Some(filter) => (filter, true),
            None => (DEFAULT_LOG_FILTER.to_string(), false),
        };

        Self {
            model_path,
            log_filter,
            log_filter_explicit,
        }
    }

    /// Apply a `--model` override from the command line.
    pub fn with_model_override(mut self, model: Option<PathBuf>) -> Self {
        if let Some(path) = model {
            self.model_path = path;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_environment_is_empty() {
        let cfg = AppConfig::from_lookup(lookup(&[]));
        assert_eq!(cfg.model_path, PathBuf::from(DEFAULT_MODEL_PATH));
        assert_eq!(cfg.log_filter, "info");
        assert!(!cfg.log_filter_explicit);
    }

    #[test]
    fn environment_overrides_defaults() {
        let cfg = AppConfig::from_lookup(lookup(&[
            (MODEL_ENV, "/srv/models/perf.json"),
            (LOG_ENV, "emp_perf=debug"),
        ]));
        assert_eq!(cfg.model_path, PathBuf::from("/srv/models/perf.json"));
        assert_eq!(cfg.log_filter, "emp_perf=debug");
        assert!(cfg.log_filter_explicit);
    }

    #[test]
    fn blank_values_are_ignored() {
        let cfg = AppConfig::from_lookup(lookup(&[(MODEL_ENV, "  "), (LOG_ENV, "")]));
        assert_eq!(cfg.model_path, PathBuf::from(DEFAULT_MODEL_PATH));
        assert!(!cfg.log_filter_explicit);
    }

    #[test]
    fn cli_override_wins() {
        let cfg = AppConfig::from_lookup(lookup(&[(MODEL_ENV, "env.json")]))
            .with_model_override(Some(PathBuf::from("cli.json")));
        assert_eq!(cfg.model_path, PathBuf::from("cli.json"));

        let cfg = AppConfig::from_lookup(lookup(&[(MODEL_ENV, "env.json")])).with_model_override(None);
        assert_eq!(cfg.model_path, PathBuf::from("env.json"));
    }
}
