//! Benchmark configuration
//!
//! Every field has a default, so an empty file (or no file at all) gives
//! the stock benchmark: count primes up to one million after a 1000-wide
//! warm-up pass.
//!
//! # Example
//!
//! ```toml
//! limit = 500000
//! warmup_limit = 0
//!
//! [[case]]
//! name = "count-10k"
//! limit = 10000
//! expected = 1229
//! ```
//!
//! When a file lists any `[[case]]` entries they replace the default
//! suite rather than extending it.

use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Upper bound for the default run
pub const DEFAULT_LIMIT: u64 = 1_000_000;

/// Upper bound for the warm-up pass before the measured run
pub const DEFAULT_WARMUP_LIMIT: u64 = 1_000;

/// A named suite entry
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SuiteCase {
    /// Label printed in the `BENCH:` line (e.g. "count-10k")
    pub name: String,
    /// Upper bound to count primes up to
    pub limit: u64,
    /// Count the case must produce; unchecked when absent
    #[serde(default)]
    pub expected: Option<u64>,
}

impl SuiteCase {
    pub fn new(name: impl Into<String>, limit: u64) -> Self {
        SuiteCase {
            name: name.into(),
            limit,
            expected: None,
        }
    }

    /// Attach an expected count (builder pattern)
    pub fn expecting(mut self, count: u64) -> Self {
        self.expected = Some(count);
        self
    }
}

fn default_cases() -> Vec<SuiteCase> {
    vec![
        SuiteCase::new("count-10k", 10_000).expecting(1_229),
        SuiteCase::new("count-100k", 100_000).expecting(9_592),
        SuiteCase::new("count-1m", 1_000_000).expecting(78_498),
    ]
}

/// Configuration for a benchmark run
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BenchConfig {
    /// Upper bound for the measured count
    pub limit: u64,

    /// Upper bound for the warm-up pass (0 disables it)
    pub warmup_limit: u64,

    /// Cases run by `primebench suite`
    #[serde(rename = "case")]
    pub cases: Vec<SuiteCase>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            limit: DEFAULT_LIMIT,
            warmup_limit: DEFAULT_WARMUP_LIMIT,
            cases: default_cases(),
        }
    }
}

impl BenchConfig {
    pub fn new() -> Self {
        BenchConfig::default()
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse config: {}", e))
    }

    /// Read and parse a TOML configuration file
    pub fn from_file(path: &Path) -> Result<Self, String> {
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {}: {}", path.display(), e))?;
        Self::from_toml(&content).map_err(|e| format!("{}: {}", path.display(), e))
    }

    /// Set the measured upper bound (builder pattern)
    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = limit;
        self
    }

    /// Set the warm-up upper bound
    pub fn with_warmup_limit(mut self, limit: u64) -> Self {
        self.warmup_limit = limit;
        self
    }

    /// Append a suite case
    pub fn with_case(mut self, case: SuiteCase) -> Self {
        self.cases.push(case);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BenchConfig::default();
        assert_eq!(config.limit, 1_000_000);
        assert_eq!(config.warmup_limit, 1_000);
        assert_eq!(config.cases.len(), 3);
        assert_eq!(config.cases[2].expected, Some(78_498));
    }

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = BenchConfig::from_toml("").unwrap();
        assert_eq!(config, BenchConfig::default());
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config = BenchConfig::from_toml("limit = 100").unwrap();
        assert_eq!(config.limit, 100);
        assert_eq!(config.warmup_limit, DEFAULT_WARMUP_LIMIT);
        assert_eq!(config.cases, default_cases());
    }

    #[test]
    fn test_cases_replace_defaults() {
        let config = BenchConfig::from_toml(
            r#"
[[case]]
name = "tiny"
limit = 10
expected = 4

[[case]]
name = "unchecked"
limit = 20
"#,
        )
        .unwrap();

        assert_eq!(
            config.cases,
            vec![
                SuiteCase::new("tiny", 10).expecting(4),
                SuiteCase::new("unchecked", 20),
            ]
        );
    }

    #[test]
    fn test_rejects_negative_limit() {
        let err = BenchConfig::from_toml("limit = -5").unwrap_err();
        assert!(err.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_rejects_unknown_key() {
        assert!(BenchConfig::from_toml("limt = 5").is_err());
    }

    #[test]
    fn test_builder() {
        let config = BenchConfig::new()
            .with_limit(50)
            .with_warmup_limit(0)
            .with_case(SuiteCase::new("extra", 7));

        assert_eq!(config.limit, 50);
        assert_eq!(config.warmup_limit, 0);
        assert_eq!(config.cases.len(), 4);
        assert_eq!(config.cases[3].name, "extra");
    }

    #[test]
    fn test_from_file_missing() {
        let err = BenchConfig::from_file(Path::new("/nonexistent/primebench.toml")).unwrap_err();
        assert!(err.contains("Failed to read config"));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bench.toml");
        fs::write(&path, "limit = 1000\nwarmup_limit = 10\n").unwrap();

        let config = BenchConfig::from_file(&path).unwrap();
        assert_eq!(config.limit, 1000);
        assert_eq!(config.warmup_limit, 10);
    }
}
