//! OsSource — the operating system's CSPRNG via the `getrandom` crate.
//!
//! This is the default source behind the convenience wrappers in the crate
//! root. It may block early at boot until the kernel pool is seeded.

use crate::error::SourceError;
use crate::source::EntropySource;

/// Operating-system CSPRNG. Zero-sized; build one wherever needed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OsSource;

impl EntropySource for OsSource {
    fn fill_bytes(&mut self, buf: &mut [u8]) -> Result<(), SourceError> {
        if buf.is_empty() {
            return Ok(());
        }
        getrandom::fill(buf).map_err(SourceError::Os)
    }

    fn name(&self) -> &str {
        "os"
    }
}
