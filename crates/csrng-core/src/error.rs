//! Error taxonomy.
//!
//! Two layers: [`SourceError`] is what an [`EntropySource`](crate::EntropySource)
//! reports when it cannot deliver bytes, and [`Error`] is what every sampling
//! function returns. Neither is retried inside the library.

/// Failure of an entropy source to fill a buffer.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The source ran dry before the buffer was full.
    #[error("entropy source exhausted: requested {requested} bytes{}", available_suffix(.available))]
    Exhausted {
        requested: usize,
        /// Bytes that were left, when the source can tell.
        available: Option<usize>,
    },

    #[error("entropy source I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("OS random generator failed: {0}")]
    Os(getrandom::Error),

    #[error("random generator failed: {0}")]
    Rng(String),
}

fn available_suffix(available: &Option<usize>) -> String {
    match available {
        Some(n) => format!(", {n} available"),
        None => String::new(),
    }
}

/// Errors returned by the sampling functions.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Precondition violation by the caller (bit width above 64, empty range).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Source(#[from] SourceError),

    /// The rejection loop gave up. Only a broken source gets here.
    #[error("rejection sampling for bound {bound} gave up after {draws} draws")]
    RejectionLimit { bound: u64, draws: u32 },
}

impl Error {
    /// True when the entropy source, not the caller, is at fault.
    pub fn is_source_error(&self) -> bool {
        matches!(self, Self::Source(_) | Self::RejectionLimit { .. })
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
