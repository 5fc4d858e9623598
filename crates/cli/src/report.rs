//! At-exit report for a benchmark run
//!
//! Controlled by the `PRIMEBENCH_REPORT` env var:
//! - Unset, empty or `0` → no report
//! - `1` → human-readable to stderr
//! - `json` → JSON to stderr
//! - `json:/path` → JSON to file
//!
//! The report never touches stdout, which carries only the `RESULT:` line.

use crate::runner::Measurement;
use serde::Serialize;
use std::io::Write;
use tracing::{debug, warn};

/// Env var that enables the report
pub const REPORT_ENV: &str = "PRIMEBENCH_REPORT";

// =============================================================================
// Report Configuration
// =============================================================================

/// Output format
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportFormat {
    Human,
    Json,
}

/// Output destination
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportDestination {
    Stderr,
    File(String),
}

/// Parsed report configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub format: ReportFormat,
    pub destination: ReportDestination,
}

impl ReportConfig {
    /// Parse a `PRIMEBENCH_REPORT` value; `None` means no report
    pub fn parse(val: &str) -> Option<Self> {
        match val {
            "" | "0" => None,
            "1" => Some(ReportConfig {
                format: ReportFormat::Human,
                destination: ReportDestination::Stderr,
            }),
            "json" => Some(ReportConfig {
                format: ReportFormat::Json,
                destination: ReportDestination::Stderr,
            }),
            s if s.starts_with("json:") => {
                let path = &s["json:".len()..];
                if path.is_empty() {
                    warn!("{}='{}' has no path, ignoring", REPORT_ENV, val);
                    return None;
                }
                Some(ReportConfig {
                    format: ReportFormat::Json,
                    destination: ReportDestination::File(path.to_string()),
                })
            }
            _ => {
                warn!("{}='{}' not recognized, ignoring", REPORT_ENV, val);
                None
            }
        }
    }

    /// Read from the `PRIMEBENCH_REPORT` environment variable
    pub fn from_env() -> Option<Self> {
        let val = std::env::var(REPORT_ENV).ok()?;
        Self::parse(&val)
    }
}

// =============================================================================
// Report Data
// =============================================================================

/// Metrics for one run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportData {
    pub limit: u64,
    pub count: u64,
    pub warmup_limit: u64,
    pub elapsed_ms: u64,
}

impl ReportData {
    pub fn new(measurement: &Measurement, warmup_limit: u64) -> Self {
        ReportData {
            limit: measurement.limit,
            count: measurement.count,
            warmup_limit,
            elapsed_ms: measurement.elapsed_ms(),
        }
    }
}

// =============================================================================
// Formatting
// =============================================================================

fn format_human(data: &ReportData) -> String {
    let mut out = String::new();
    out.push_str("=== PRIMEBENCH REPORT ===\n");
    out.push_str(&format!("Limit:        {}\n", data.limit));
    out.push_str(&format!("Primes:       {}\n", data.count));
    out.push_str(&format!("Warm-up to:   {}\n", data.warmup_limit));
    out.push_str(&format!("Wall clock:   {} ms\n", data.elapsed_ms));
    out.push_str("=========================\n");
    out
}

fn format_json(data: &ReportData) -> String {
    let mut out = serde_json::to_string(data).unwrap_or_else(|_| "{}".to_string());
    out.push('\n');
    out
}

// =============================================================================
// Emit
// =============================================================================

/// Write the report described by `config`
///
/// A file that cannot be created falls back to stderr.
pub fn emit(config: &ReportConfig, data: &ReportData) {
    let output = match config.format {
        ReportFormat::Human => format_human(data),
        ReportFormat::Json => format_json(data),
    };

    match &config.destination {
        ReportDestination::Stderr => {
            let _ = std::io::stderr().write_all(output.as_bytes());
        }
        ReportDestination::File(path) => match std::fs::File::create(path) {
            Ok(mut f) => {
                if let Err(e) = f.write_all(output.as_bytes()) {
                    warn!("could not write report to {}: {}", path, e);
                } else {
                    debug!("report written to {}", path);
                }
            }
            Err(e) => {
                warn!("could not create report file {}: {}", path, e);
                let _ = std::io::stderr().write_all(output.as_bytes());
            }
        },
    }
}

/// Emit a report if `PRIMEBENCH_REPORT` asks for one
pub fn emit_from_env(data: &ReportData) {
    if let Some(config) = ReportConfig::from_env() {
        emit(&config, data);
    }
}

// =============================================================================
// Tests
// =============================================================================
