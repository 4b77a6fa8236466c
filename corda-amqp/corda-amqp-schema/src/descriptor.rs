use std::fmt;

use corda_amqp_core::Scalar;

/// High bits shared by the numeric descriptors of every schema element.
pub const DESCRIPTOR_PREFIX: u64 = 0xc562 << 48;

/// Identifies a described type by symbolic name, numeric code, or both.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Descriptor {
    name: Option<String>,
    code: Option<u64>,
}

impl Descriptor {
    pub fn new(name: Option<String>, code: Option<u64>) -> Self {
        Self { name, code }
    }

    pub fn symbolic(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            code: None,
        }
    }

    pub fn numeric(code: u64) -> Self {
        Self {
            name: None,
            code: Some(code),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn code(&self) -> Option<u64> {
        self.code
    }

    /// Whether a wire descriptor (`symbol` or `ulong`) identifies this descriptor.
    pub fn matches(&self, wire: &Scalar) -> bool {
        match wire {
            Scalar::Symbol(s) | Scalar::String(s) => self.name.as_deref() == Some(s.as_ref()),
            Scalar::U64(code) => self.code == Some(*code),
            _ => false,
        }
    }
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.name, self.code) {
            (Some(name), Some(code)) => write!(f, "{name} (0x{code:016x})"),
            (Some(name), None) => f.write_str(name),
            (None, Some(code)) => write!(f, "0x{code:016x}"),
            (None, None) => f.write_str("<none>"),
        }
    }
}

/// Descriptors of the elements that make up a serialized envelope, each
/// with a numeric code and a symbolic name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u64)]
pub enum SchemaDescriptor {
    Envelope = 1,
    Schema = 2,
    ObjectDescriptor = 3,
    Field = 4,
    CompositeType = 5,
    RestrictedType = 6,
    Choice = 7,
    ReferencedObject = 8,
    TransformSchema = 9,
    TransformElement = 10,
    TransformElementKey = 11,
}

impl SchemaDescriptor {
    const ALL: [SchemaDescriptor; 11] = [
        Self::Envelope,
        Self::Schema,
        Self::ObjectDescriptor,
        Self::Field,
        Self::CompositeType,
        Self::RestrictedType,
        Self::Choice,
        Self::ReferencedObject,
        Self::TransformSchema,
        Self::TransformElement,
        Self::TransformElementKey,
    ];

    pub fn code(self) -> u64 {
        DESCRIPTOR_PREFIX | self as u64
    }

    pub fn from_code(code: u64) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.code() == code)
    }

    /// Symbolic form of the descriptor, e.g. `net.corda:restricted-type`.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Envelope => "net.corda:envelope",
            Self::Schema => "net.corda:schema",
            Self::ObjectDescriptor => "net.corda:object-descriptor",
            Self::Field => "net.corda:field",
            Self::CompositeType => "net.corda:composite-type",
            Self::RestrictedType => "net.corda:restricted-type",
            Self::Choice => "net.corda:choice",
            Self::ReferencedObject => "net.corda:referenced-object",
            Self::TransformSchema => "net.corda:transform-schema",
            Self::TransformElement => "net.corda:transform-element",
            Self::TransformElementKey => "net.corda:transform-element-key",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.symbol() == symbol)
    }

    /// Interpret a wire descriptor: a `ulong` code or its symbolic form.
    pub fn from_scalar(wire: &Scalar) -> Option<Self> {
        match wire {
            Scalar::U64(code) => Self::from_code(*code),
            Scalar::Symbol(s) => Self::from_symbol(s),
            _ => None,
        }
    }
}

impl fmt::Display for SchemaDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Envelope => "envelope",
            Self::Schema => "schema",
            Self::ObjectDescriptor => "object descriptor",
            Self::Field => "field",
            Self::CompositeType => "composite type",
            Self::RestrictedType => "restricted type",
            Self::Choice => "choice",
            Self::ReferencedObject => "referenced object",
            Self::TransformSchema => "transform schema",
            Self::TransformElement => "transform element",
            Self::TransformElementKey => "transform element key",
        };
        f.write_str(name)
    }
}
