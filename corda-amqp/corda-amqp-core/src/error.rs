//! Error types for cursor navigation and value decoding.

use crate::kind::Kind;

/// Error returned when a [`Scalar`](crate::Scalar) accessor is used on the wrong variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected {expected}, found {found}")]
pub struct ValueTypeError {
    pub expected: String,
    pub found: String,
}

impl ValueTypeError {
    pub fn new(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self {
            expected: expected.into(),
            found: found.into(),
        }
    }
}

/// Error produced while walking encoded data or decoding it against a schema.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The wire kind disagrees with the kind the schema declares at `path`.
    #[error("schema mismatch at {path}: expected {expected}, found {found}")]
    SchemaMismatch {
        path: String,
        expected: String,
        found: Kind,
    },

    /// A described value carries a descriptor other than the one the schema declares.
    #[error("descriptor mismatch at {path}: expected {expected}, found {found}")]
    DescriptorMismatch {
        path: String,
        expected: String,
        found: String,
    },

    /// A type name is neither a primitive nor present in the schema.
    #[error("unknown type '{name}' at {path}")]
    UnknownType { path: String, name: String },

    /// An enum label (or ordinal) is not part of the enum's choice set.
    #[error("unknown choice '{label}' at {path}")]
    UnknownChoice { path: String, label: String },

    /// A mandatory field was encoded as `null`.
    #[error("missing mandatory field at {path}")]
    MissingMandatory { path: String },

    /// A composite list holds fewer values than the composite declares fields.
    #[error("composite at {path} has {found} values, expected {expected}")]
    MissingFields {
        path: String,
        expected: usize,
        found: usize,
    },

    /// Nesting went deeper than the configured limit.
    #[error("maximum nesting depth {max_depth} exceeded at {path}")]
    DepthExceeded { path: String, max_depth: usize },

    #[error("unexpected end of data at offset {offset} (needed {needed} bytes)")]
    Truncated { offset: usize, needed: usize },

    #[error("invalid format code 0x{code:02x} at offset {offset}")]
    InvalidFormatCode { code: u8, offset: usize },

    /// The cursor has no current value (empty container or past the last sibling).
    #[error("no value at cursor position (offset {offset})")]
    Exhausted { offset: usize },

    #[error("{kind} is not a compound value")]
    NotCompound { kind: Kind },

    #[error("{kind} is not a scalar value")]
    NotScalar { kind: Kind },

    #[error("invalid UTF-8 at offset {offset}")]
    InvalidUtf8 { offset: usize },

    #[error("invalid char code point 0x{0:x}")]
    InvalidChar(u32),

    /// Back-references to objects serialized earlier in the stream are not resolved.
    #[error("referenced object at {path} is not supported")]
    ReferencedObject { path: String },

    #[error("unsupported encoding at offset {offset}: {detail}")]
    Unsupported { offset: usize, detail: String },

    #[error("value type mismatch: {0}")]
    ValueType(#[from] ValueTypeError),
}
