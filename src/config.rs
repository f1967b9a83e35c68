//! Runner configuration from environment variables.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::core::Mode;
use crate::store::DEFAULT_NAMESPACE;

/// Terminal runner configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    pub seed: u64,
    pub mode: Mode,
    /// Persisted records and the log file live here
    pub data_dir: PathBuf,
    pub namespace: String,
    /// Default log spec when `RUST_LOG` is not set
    pub log_spec: String,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            mode: Mode::Normal,
            data_dir: PathBuf::from(".water2048"),
            namespace: DEFAULT_NAMESPACE.to_string(),
            log_spec: "info".to_string(),
        }
    }
}

impl RunnerConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any variable lookup; unset, blank or unparsable values fall
    /// back to defaults (the seed falls back to the clock).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };
        let defaults = Self::default();

        let seed = get("WATER2048_SEED")
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(clock_seed);

        let mode = get("WATER2048_MODE")
            .and_then(|s| Mode::from_str(&s))
            .unwrap_or(defaults.mode);

        let data_dir = get("WATER2048_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);

        let namespace = get("WATER2048_NAMESPACE").unwrap_or(defaults.namespace);

        let log_spec = get("WATER2048_LOG").unwrap_or(defaults.log_spec);

        Self {
            seed,
            mode,
            data_dir,
            namespace,
            log_spec,
        }
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn reads_every_variable() {
        let cfg = RunnerConfig::from_lookup(lookup(&[
            ("WATER2048_SEED", "77"),
            ("WATER2048_MODE", "Hard"),
            ("WATER2048_DATA_DIR", "/tmp/w2048"),
            ("WATER2048_NAMESPACE", "test-ns"),
            ("WATER2048_LOG", "debug"),
        ]));
        assert_eq!(cfg.seed, 77);
        assert_eq!(cfg.mode, Mode::Hard);
        assert_eq!(cfg.data_dir, PathBuf::from("/tmp/w2048"));
        assert_eq!(cfg.namespace, "test-ns");
        assert_eq!(cfg.log_spec, "debug");
    }

    #[test]
    fn invalid_or_blank_values_fall_back() {
        let cfg = RunnerConfig::from_lookup(lookup(&[
            ("WATER2048_MODE", "nightmare"),
            ("WATER2048_NAMESPACE", "   "),
        ]));
        let defaults = RunnerConfig::default();
        assert_eq!(cfg.mode, defaults.mode);
        assert_eq!(cfg.namespace, defaults.namespace);
        assert_eq!(cfg.data_dir, defaults.data_dir);
        assert_eq!(cfg.log_spec, "info");
    }
}
