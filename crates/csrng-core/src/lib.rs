//! # csrng-core
//!
//! **Unbiased sampling on top of a cryptographically secure byte source.**
//!
//! Turns random bytes into uniform integers in `[0, n)`, floats in `[0, 1)`,
//! permutations and k-subsets. Range reduction uses rejection sampling, so
//! there is no modulo bias. Each draw reads the fewest whole bytes that cover the
//! range.
//!
//! ## Quick Start
//!
//! ```no_run
//! // Convenience functions read from the operating system's CSPRNG.
//! let die = csrng_core::intn(6)? + 1;
//! let p = csrng_core::float64()?;
//! let deck = csrng_core::perm(52)?;
//! let lottery = csrng_core::sample(49, 6)?;
//! # Ok::<(), csrng_core::Error>(())
//! ```
//!
//! ## Explicit sources
//!
//! Every function has a `*_from` twin that takes any [`EntropySource`]:
//!
//! ```
//! use csrng_core::{FixedSource, uint64_bits_from};
//!
//! let mut src = FixedSource::new(vec![0x12, 0x34]);
//! assert_eq!(uint64_bits_from(&mut src, 16)?, 0x3412);
//! # Ok::<(), csrng_core::Error>(())
//! ```
//!
//! ## Architecture
//!
//! Source → Bit extractor ([`bits`]) → Range reducer ([`uniform`]) → Samplers ([`seq`])
//!
//! Nothing panics: bad arguments and source failures come back as [`Error`].

pub mod bits;
pub mod error;
pub mod seq;
pub mod source;
pub mod sources;
pub mod uniform;

pub use bits::{MAX_BITS, min_bytes, uint64_bits_from};
pub use error::{Error, Result, SourceError};
pub use seq::{perm_from, sample_from};
pub use source::EntropySource;
pub use sources::{FixedSource, OsSource, ReaderSource, RngSource};
pub use uniform::{FLOAT_BITS, MAX_DRAWS, float64_from, index_from, intn_from, uint64n_from};

/// Library version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ---------------------------------------------------------------------------
// Convenience wrappers over the OS generator
// ---------------------------------------------------------------------------

/// [`uint64_bits_from`] with [`OsSource`].
pub fn uint64_bits(n: u32) -> Result<u64> {
    uint64_bits_from(&mut OsSource, n)
}

/// [`intn_from`] with [`OsSource`].
pub fn intn(n: i64) -> Result<i64> {
    intn_from(&mut OsSource, n)
}

/// [`uint64n_from`] with [`OsSource`].
pub fn uint64n(n: u64) -> Result<u64> {
    uint64n_from(&mut OsSource, n)
}

/// [`float64_from`] with [`OsSource`].
pub fn float64() -> Result<f64> {
    float64_from(&mut OsSource)
}

/// [`perm_from`] with [`OsSource`].
pub fn perm(n: usize) -> Result<Vec<usize>> {
    perm_from(&mut OsSource, n)
}

/// [`sample_from`] with [`OsSource`].
pub fn sample(n: usize, k: usize) -> Result<Vec<usize>> {
    sample_from(&mut OsSource, n, k)
}
