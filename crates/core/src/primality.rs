//! Primality by trial division
//!
//! Candidates are tested against 2 and then every odd divisor up to
//! `floor(sqrt(n))`. The bound is computed with integer arithmetic only,
//! so perfect squares are never misclassified by float rounding.

/// Returns true if `n` is prime.
///
/// Total over `u64`: the loop condition `i <= n / i` is the overflow-free
/// form of `i * i <= n`, so it holds up to `u64::MAX`.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    let mut i = 3;
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}
