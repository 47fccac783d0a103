//! ReaderSource — entropy from any [`std::io::Read`], such as `/dev/urandom`
//! or a file of captured random bytes.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use crate::error::SourceError;
use crate::source::EntropySource;

pub struct ReaderSource<R> {
    reader: R,
    name: String,
}

impl<R: Read> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            name: "reader".to_string(),
        }
    }

    /// Give the source a name for log lines.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl ReaderSource<File> {
    /// Open a file or device as an entropy source.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        Ok(Self::new(file).with_name(path.display().to_string()))
    }
}

impl<R: Read> EntropySource for ReaderSource<R> {
    fn fill_bytes(&mut self, buf: &mut [u8]) -> Result<(), SourceError> {
        match self.reader.read_exact(buf) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Err(SourceError::Exhausted {
                requested: buf.len(),
                available: None,
            }),
            Err(e) => Err(SourceError::Io(e)),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl<R> std::fmt::Debug for ReaderSource<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReaderSource")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
