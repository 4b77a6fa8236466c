//! Error types for the blob reader.

use corda_amqp_reader::ReadError;

/// Errors produced by [`BlobReader`](crate::BlobReader).
#[derive(Debug, thiserror::Error)]
pub enum BlobReaderError {
    /// I/O error while opening or memory-mapping a file.
    #[error("failed to open {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The bytes of an in-memory blob could not be decoded.
    #[error(transparent)]
    Read(#[from] ReadError),

    /// The contents of a file could not be decoded.
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: ReadError,
    },
}
