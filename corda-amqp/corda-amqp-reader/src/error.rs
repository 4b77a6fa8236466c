//! Error types for envelope decoding.

use corda_amqp_core::DecodeError;
use corda_amqp_schema::SchemaError;

/// Errors produced while splitting and decoding a serialized envelope.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReadError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The schema section could not be read.
    #[error("invalid schema section: {0}")]
    Schema(#[from] SchemaError),

    /// The blob header names a section other than the data section.
    #[error("unsupported blob section {0}")]
    UnsupportedSection(u8),

    /// The top-level value is not a described envelope.
    #[error("not an envelope: {found}")]
    NotAnEnvelope { found: String },
}
