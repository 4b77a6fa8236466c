//! Error types for schema modeling and schema-section parsing.

use corda_amqp_core::DecodeError;

/// A parameterized type name that does not follow the `Outer<P1, ..., Pn>` grammar.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("type name '{name}' has no parameter list")]
    MissingParameters { name: String },

    #[error("unbalanced brackets in type name '{name}'")]
    Unbalanced { name: String },

    #[error("empty parameter in type name '{name}'")]
    EmptyParameter { name: String },

    #[error("map type '{name}' has no top-level separator")]
    MissingSeparator { name: String },

    #[error("type name '{name}' has {found} parameters, expected {expected}")]
    ParameterCount {
        name: String,
        expected: usize,
        found: usize,
    },
}

/// Error produced while building a [`Schema`](crate::Schema).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error(transparent)]
    TypeName(#[from] ParseError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// A schema element carries a descriptor other than the one its position requires.
    #[error("unexpected descriptor for {what}: {found}")]
    UnexpectedDescriptor { what: String, found: String },

    /// A restricted type's source is not one of `list` / `map`.
    #[error("unknown source '{origin}' for restricted type '{name}'")]
    UnknownSource { name: String, origin: String },

    #[error("duplicate type '{name}' in schema")]
    DuplicateType { name: String },
}
