//! Multi-case benchmark suite
//!
//! Each case prints one line in the shared benchmark format
//! `BENCH:primes:<name>:<count>:<time_ms>`.

use crate::config::SuiteCase;
use crate::runner::{Measurement, measure};

/// Result of running a single suite case
#[derive(Debug, Clone)]
pub struct CaseOutcome {
    pub case: SuiteCase,
    pub measurement: Measurement,
}

impl CaseOutcome {
    /// False only when an expected count was given and not met
    pub fn passed(&self) -> bool {
        self.case
            .expected
            .is_none_or(|expected| expected == self.measurement.count)
    }

    pub fn bench_line(&self) -> String {
        format!(
            "BENCH:primes:{}:{}:{}",
            self.case.name,
            self.measurement.count,
            self.measurement.elapsed_ms()
        )
    }
}

/// Time one case
pub fn run_case(case: &SuiteCase) -> CaseOutcome {
    CaseOutcome {
        case: case.clone(),
        measurement: measure(case.limit),
    }
}
