//! FixedSource — serves a fixed byte buffer in order.
//!
//! Makes sampling deterministic for tests and reproducible demos. It is not a
//! random source; never use it for secrets.

use crate::error::SourceError;
use crate::source::EntropySource;

/// Fixed byte stream with a read cursor.
#[derive(Debug, Clone, Default)]
pub struct FixedSource {
    data: Vec<u8>,
    pos: usize,
}

impl FixedSource {
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self {
            data: data.into(),
            pos: 0,
        }
    }

    /// Bytes handed out so far.
    pub fn consumed(&self) -> usize {
        self.pos
    }

    /// Bytes left before the source is exhausted.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }
}

impl EntropySource for FixedSource {
    /// A request for more than [`remaining`](Self::remaining) bytes fails and
    /// leaves the cursor where it was.
    fn fill_bytes(&mut self, buf: &mut [u8]) -> Result<(), SourceError> {
        let available = self.remaining();
        if buf.len() > available {
            return Err(SourceError::Exhausted {
                requested: buf.len(),
                available: Some(available),
            });
        }
        let end = self.pos + buf.len();
        buf.copy_from_slice(&self.data[self.pos..end]);
        self.pos = end;
        Ok(())
    }

    fn name(&self) -> &str {
        "fixed"
    }
}
