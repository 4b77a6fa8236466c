//! Decoded value tree produced by schema-guided readers.

use std::sync::Arc;

use crate::error::{DecodeError, ValueTypeError};

/// A single decoded AMQP primitive.
/// All types are explicit; no lossy conversions.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    /// IEEE 754 decimal32, raw bits.
    Decimal32(u32),
    /// IEEE 754 decimal64, raw bits.
    Decimal64(u64),
    /// IEEE 754 decimal128, raw big-endian bytes.
    Decimal128([u8; 16]),
    Char(char),
    /// Milliseconds since the Unix epoch.
    Timestamp(i64),
    Uuid([u8; 16]),
    Binary(Arc<[u8]>),
    String(Arc<str>),
    Symbol(Arc<str>),
}

impl Scalar {
    pub fn string(s: impl AsRef<str>) -> Self {
        Self::String(Arc::from(s.as_ref()))
    }

    pub fn symbol(s: impl AsRef<str>) -> Self {
        Self::Symbol(Arc::from(s.as_ref()))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Scalar::Null)
    }

    pub fn try_bool(&self) -> Result<Option<bool>, ValueTypeError> {
        match self {
            Scalar::Bool(v) => Ok(Some(*v)),
            Scalar::Null => Ok(None),
            _ => Err(self.type_mismatch("Bool")),
        }
    }

    pub fn try_i32(&self) -> Result<Option<i32>, ValueTypeError> {
        match self {
            Scalar::I32(v) => Ok(Some(*v)),
            Scalar::Null => Ok(None),
            _ => Err(self.type_mismatch("I32")),
        }
    }

    pub fn try_i64(&self) -> Result<Option<i64>, ValueTypeError> {
        match self {
            Scalar::I64(v) => Ok(Some(*v)),
            Scalar::Null => Ok(None),
            _ => Err(self.type_mismatch("I64")),
        }
    }

    pub fn try_u64(&self) -> Result<Option<u64>, ValueTypeError> {
        match self {
            Scalar::U64(v) => Ok(Some(*v)),
            Scalar::Null => Ok(None),
            _ => Err(self.type_mismatch("U64")),
        }
    }

    pub fn try_f64(&self) -> Result<Option<f64>, ValueTypeError> {
        match self {
            Scalar::F64(v) => Ok(Some(*v)),
            Scalar::Null => Ok(None),
            _ => Err(self.type_mismatch("F64")),
        }
    }

    pub fn try_str(&self) -> Result<Option<&str>, ValueTypeError> {
        match self {
            Scalar::String(v) => Ok(Some(v.as_ref())),
            Scalar::Null => Ok(None),
            _ => Err(self.type_mismatch("String")),
        }
    }

    pub fn try_symbol(&self) -> Result<Option<&str>, ValueTypeError> {
        match self {
            Scalar::Symbol(v) => Ok(Some(v.as_ref())),
            Scalar::Null => Ok(None),
            _ => Err(self.type_mismatch("Symbol")),
        }
    }

    pub fn try_bytes(&self) -> Result<Option<&[u8]>, ValueTypeError> {
        match self {
            Scalar::Binary(v) => Ok(Some(v.as_ref())),
            Scalar::Null => Ok(None),
            _ => Err(self.type_mismatch("Binary")),
        }
    }

    pub fn type_mismatch(&self, expected: impl Into<String>) -> ValueTypeError {
        ValueTypeError::new(expected, self.variant_name())
    }

    pub fn variant_name(&self) -> &'static str {
        match self {
            Scalar::Null => "Null",
            Scalar::Bool(_) => "Bool",
            Scalar::I8(_) => "I8",
            Scalar::I16(_) => "I16",
            Scalar::I32(_) => "I32",
            Scalar::I64(_) => "I64",
            Scalar::U8(_) => "U8",
            Scalar::U16(_) => "U16",
            Scalar::U32(_) => "U32",
            Scalar::U64(_) => "U64",
            Scalar::F32(_) => "F32",
            Scalar::F64(_) => "F64",
            Scalar::Decimal32(_) => "Decimal32",
            Scalar::Decimal64(_) => "Decimal64",
            Scalar::Decimal128(_) => "Decimal128",
            Scalar::Char(_) => "Char",
            Scalar::Timestamp(_) => "Timestamp",
            Scalar::Uuid(_) => "Uuid",
            Scalar::Binary(_) => "Binary",
            Scalar::String(_) => "String",
            Scalar::Symbol(_) => "Symbol",
        }
    }
}

/// Conversion used by [`Cursor::get`](crate::Cursor::get).
pub trait FromScalar: Sized {
    fn from_scalar(scalar: Scalar) -> Result<Self, DecodeError>;
}

impl FromScalar for Scalar {
    fn from_scalar(scalar: Scalar) -> Result<Self, DecodeError> {
        Ok(scalar)
    }
}

macro_rules! impl_from_scalar {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl FromScalar for $ty {
                fn from_scalar(scalar: Scalar) -> Result<Self, DecodeError> {
                    match scalar {
                        Scalar::$variant(v) => Ok(v),
                        other => Err(other.type_mismatch(stringify!($variant)).into()),
                    }
                }
            }
        )*
    };
}

impl_from_scalar! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    char => Char,
}

/// Accepts both `string` and `symbol` encodings.
impl FromScalar for String {
    fn from_scalar(scalar: Scalar) -> Result<Self, DecodeError> {
        match scalar {
            Scalar::String(s) | Scalar::Symbol(s) => Ok(s.to_string()),
            other => Err(other.type_mismatch("String").into()),
        }
    }
}

/// `null` maps to `None`; anything else must convert to `T`.
impl<T: FromScalar> FromScalar for Option<T> {
    fn from_scalar(scalar: Scalar) -> Result<Self, DecodeError> {
        match scalar {
            Scalar::Null => Ok(None),
            other => T::from_scalar(other).map(Some),
        }
    }
}

/// One node of a decoded value tree.
///
/// Every node owns its children; there are no back-references.
#[derive(Debug, Clone, PartialEq)]
pub enum IValue {
    /// A primitive leaf.
    Single(Scalar),
    /// A named value, produced for each field of a composite.
    Pair(Arc<str>, Box<IValue>),
    /// An ordered sequence: the fields of a composite, the elements of a
    /// list, or the `[key, value]` entries of a map.
    Collection(Vec<IValue>),
}

impl IValue {
    pub fn pair(name: impl AsRef<str>, value: IValue) -> Self {
        Self::Pair(Arc::from(name.as_ref()), Box::new(value))
    }

    pub fn empty() -> Self {
        Self::Collection(Vec::new())
    }

    /// Name of a [`IValue::Pair`], `None` otherwise.
    pub fn name(&self) -> Option<&str> {
        match self {
            IValue::Pair(name, _) => Some(name),
            _ => None,
        }
    }

    /// The scalar of a `Single`, looking through a `Pair`.
    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            IValue::Single(s) => Some(s),
            IValue::Pair(_, v) => v.as_scalar(),
            IValue::Collection(_) => None,
        }
    }

    /// Children of a `Collection`, looking through a `Pair`.
    pub fn children(&self) -> Option<&[IValue]> {
        match self {
            IValue::Collection(items) => Some(items),
            IValue::Pair(_, v) => v.children(),
            IValue::Single(_) => None,
        }
    }

    /// Value of the first child pair named `name`.
    pub fn field(&self, name: &str) -> Option<&IValue> {
        self.children()?.iter().find_map(|child| match child {
            IValue::Pair(n, v) if n.as_ref() == name => Some(v.as_ref()),
            _ => None,
        })
    }

    /// True when this collection's children are all named pairs.
    pub fn is_record(&self) -> bool {
        match self.children() {
            Some(items) => !items.is_empty() && items.iter().all(|c| c.name().is_some()),
            None => false,
        }
    }
}
