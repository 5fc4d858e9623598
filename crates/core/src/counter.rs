//! Counting primes over inclusive ranges
//!
//! Every function here walks its range and applies [`is_prime`] to each
//! value, so the cost is O(n·sqrt(n)) time and O(1) extra space.

use crate::primality::is_prime;
use std::ops::RangeInclusive;

/// Count the primes in `[2, limit]`.
///
/// Returns 0 when `limit < 2`.
pub fn count_primes(limit: u64) -> u64 {
    count_primes_in(2..=limit)
}

/// Count the primes in an arbitrary inclusive range.
///
/// Empty or inverted ranges count as zero.
pub fn count_primes_in(range: RangeInclusive<u64>) -> u64 {
    let mut count = 0;
    for n in range {
        if is_prime(n) {
            count += 1;
        }
    }
    count
}

/// Lazily yield the primes in `[2, limit]` in ascending order.
pub fn primes_up_to(limit: u64) -> impl Iterator<Item = u64> {
    (2..=limit).filter(|&n| is_prime(n))
}
