//! Abstract entropy source trait.
//!
//! Every entropy source implements [`EntropySource`]: fill a buffer with
//! unpredictable bytes or fail. Sampling functions take the source explicitly,
//! so tests can substitute a fixed byte stream and production code can use
//! [`OsSource`](crate::sources::OsSource).

use crate::error::SourceError;

/// Trait that every entropy source must implement.
///
/// The library never buffers, caches or reseeds: each call asks the source for
/// exactly the bytes it needs, synchronously.
pub trait EntropySource {
    /// Fill the whole of `buf` with random bytes.
    ///
    /// A short read is a failure; implementations must not return `Ok` with
    /// part of `buf` left unfilled. An empty `buf` must succeed.
    fn fill_bytes(&mut self, buf: &mut [u8]) -> Result<(), SourceError>;

    /// Identifier used in log lines.
    fn name(&self) -> &str {
        "unnamed"
    }
}

impl<S: EntropySource + ?Sized> EntropySource for &mut S {
    fn fill_bytes(&mut self, buf: &mut [u8]) -> Result<(), SourceError> {
        (**self).fill_bytes(buf)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<S: EntropySource + ?Sized> EntropySource for Box<S> {
    fn fill_bytes(&mut self, buf: &mut [u8]) -> Result<(), SourceError> {
        (**self).fill_bytes(buf)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
