//! Warm-up and timed measurement

use primebench_core::count_primes;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Outcome of one timed count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measurement {
    pub limit: u64,
    pub count: u64,
    pub elapsed: Duration,
}

impl Measurement {
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed.as_millis() as u64
    }
}

/// Run an untimed count so the measured run starts with warm caches.
///
/// A limit of 0 skips the pass and returns `None`.
pub fn warm_up(limit: u64) -> Option<u64> {
    if limit == 0 {
        debug!("warm-up disabled");
        return None;
    }
    let start = Instant::now();
    let count = count_primes(limit);
    debug!(
        limit,
        count,
        elapsed_us = start.elapsed().as_micros() as u64,
        "warm-up complete"
    );
    Some(count)
}

/// Count primes up to `limit` and time it
pub fn measure(limit: u64) -> Measurement {
    let start = Instant::now();
    let count = count_primes(limit);
    let elapsed = start.elapsed();

    let measurement = Measurement {
        limit,
        count,
        elapsed,
    };
    info!(
        limit,
        count,
        elapsed_ms = measurement.elapsed_ms(),
        "count complete"
    );
    measurement
}

/// The single stdout line of a run: `RESULT:<count>`
pub fn result_line(count: u64) -> String {
    format!("RESULT:{}", count)
}
