//! primebench core: trial-division prime counting
//!
//! Pure arithmetic with no I/O and no shared state. The driver crate
//! (`primebench`) layers configuration, timing and reporting on top.
//!
//! # Modules
//!
//! - `primality`: scalar primality test by odd trial division
//! - `counter`: counting and enumerating primes over inclusive ranges

pub mod counter;
pub mod primality;

pub use counter::{count_primes, count_primes_in, primes_up_to};
pub use primality::is_prime;
