use std::fmt;

/// AMQP 1.0 kind of an encoded value.
///
/// Several format codes share one kind (e.g. `int` may be encoded as
/// `0x71` or as the compact `smallint` `0x54`); the cursor reports the kind,
/// never the raw code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Null,
    Bool,
    UByte,
    UShort,
    UInt,
    ULong,
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
    Decimal32,
    Decimal64,
    Decimal128,
    Char,
    Timestamp,
    Uuid,
    Binary,
    String,
    Symbol,
    Described,
    List,
    Map,
    Array,
}

impl Kind {
    /// Map a constructor format code to its kind, `None` for reserved codes.
    pub fn from_code(code: u8) -> Option<Self> {
        Some(match code {
            0x00 => Kind::Described,
            0x40 => Kind::Null,
            0x41 | 0x42 | 0x56 => Kind::Bool,
            0x50 => Kind::UByte,
            0x60 => Kind::UShort,
            0x43 | 0x52 | 0x70 => Kind::UInt,
            0x44 | 0x53 | 0x80 => Kind::ULong,
            0x51 => Kind::Byte,
            0x61 => Kind::Short,
            0x54 | 0x71 => Kind::Int,
            0x55 | 0x81 => Kind::Long,
            0x72 => Kind::Float,
            0x82 => Kind::Double,
            0x74 => Kind::Decimal32,
            0x84 => Kind::Decimal64,
            0x94 => Kind::Decimal128,
            0x73 => Kind::Char,
            0x83 => Kind::Timestamp,
            0x98 => Kind::Uuid,
            0xa0 | 0xb0 => Kind::Binary,
            0xa1 | 0xb1 => Kind::String,
            0xa3 | 0xb3 => Kind::Symbol,
            0x45 | 0xc0 | 0xd0 => Kind::List,
            0xc1 | 0xd1 => Kind::Map,
            0xe0 | 0xf0 => Kind::Array,
            _ => return None,
        })
    }

    /// Resolve an AMQP primitive type name as it appears in a schema field
    /// (`"int"`, `"string"`, ...). Compound and described kinds have no
    /// primitive name.
    pub fn from_type_name(name: &str) -> Option<Self> {
        Some(match name {
            "null" => Kind::Null,
            "boolean" => Kind::Bool,
            "ubyte" => Kind::UByte,
            "ushort" => Kind::UShort,
            "uint" => Kind::UInt,
            "ulong" => Kind::ULong,
            "byte" => Kind::Byte,
            "short" => Kind::Short,
            "int" => Kind::Int,
            "long" => Kind::Long,
            "float" => Kind::Float,
            "double" => Kind::Double,
            "decimal32" => Kind::Decimal32,
            "decimal64" => Kind::Decimal64,
            "decimal128" => Kind::Decimal128,
            "char" => Kind::Char,
            "timestamp" => Kind::Timestamp,
            "uuid" => Kind::Uuid,
            "binary" => Kind::Binary,
            "string" => Kind::String,
            "symbol" => Kind::Symbol,
            _ => return None,
        })
    }

    pub fn is_compound(&self) -> bool {
        matches!(
            self,
            Kind::Described | Kind::List | Kind::Map | Kind::Array
        )
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Bool => "boolean",
            Kind::UByte => "ubyte",
            Kind::UShort => "ushort",
            Kind::UInt => "uint",
            Kind::ULong => "ulong",
            Kind::Byte => "byte",
            Kind::Short => "short",
            Kind::Int => "int",
            Kind::Long => "long",
            Kind::Float => "float",
            Kind::Double => "double",
            Kind::Decimal32 => "decimal32",
            Kind::Decimal64 => "decimal64",
            Kind::Decimal128 => "decimal128",
            Kind::Char => "char",
            Kind::Timestamp => "timestamp",
            Kind::Uuid => "uuid",
            Kind::Binary => "binary",
            Kind::String => "string",
            Kind::Symbol => "symbol",
            Kind::Described => "described",
            Kind::List => "list",
            Kind::Map => "map",
            Kind::Array => "array",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}
