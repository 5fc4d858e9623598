//! primebench: prime counting benchmark driver
//!
//! Wraps the counting core from `primebench-core` with the pieces a
//! benchmark binary needs: TOML configuration, warm-up and timing,
//! an optional at-exit report, and a multi-case suite mode.
//!
//! # Modules
//!
//! - `config`: benchmark configuration loaded from TOML
//! - `runner`: warm-up pass and timed measurement
//! - `report`: `PRIMEBENCH_REPORT` controlled report (human or JSON)
//! - `suite`: named cases with optional expected counts

pub mod config;
pub mod report;
pub mod runner;
pub mod suite;

pub use config::{BenchConfig, DEFAULT_LIMIT, DEFAULT_WARMUP_LIMIT, SuiteCase};
pub use report::{ReportConfig, ReportData, ReportDestination, ReportFormat};
pub use runner::{Measurement, measure, result_line, warm_up};
pub use suite::{CaseOutcome, run_case};
