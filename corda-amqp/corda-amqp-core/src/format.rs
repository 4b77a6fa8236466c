use std::fmt::{self, Display, Formatter, Result, Write as _};

use crate::value::{IValue, Scalar};

/// Format a decoded value tree in a readable style:
/// scalars are rendered inline, collections are pretty-printed as indented
/// blocks (`{ }` for records of named fields, `[ ]` otherwise).
pub fn format_value(value: &IValue) -> std::result::Result<String, fmt::Error> {
    let mut out = String::new();
    format_node(value, 0, &mut out)?;
    out.push('\n');
    Ok(out)
}

fn format_node(value: &IValue, indent: usize, out: &mut String) -> Result {
    match value {
        IValue::Single(scalar) => write!(out, "{scalar}"),
        IValue::Pair(name, inner) => {
            write!(out, "{name}: ")?;
            format_node(inner, indent, out)
        }
        IValue::Collection(items) if items.is_empty() => out.write_str("[]"),
        IValue::Collection(items) => {
            let (open, close) = if value.is_record() {
                ('{', '}')
            } else {
                ('[', ']')
            };
            let pad = " ".repeat(indent + 4);
            writeln!(out, "{open}")?;
            for item in items {
                out.write_str(&pad)?;
                format_node(item, indent + 4, out)?;
                out.push('\n');
            }
            write!(out, "{}{close}", " ".repeat(indent))
        }
    }
}

fn hex(bytes: &[u8], f: &mut Formatter<'_>) -> Result {
    for b in bytes {
        write!(f, "{b:02x}")?;
    }
    Ok(())
}

impl Display for Scalar {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Scalar::Null => f.write_str("null"),
            Scalar::Bool(v) => write!(f, "{v}"),
            Scalar::I8(v) => write!(f, "{v}"),
            Scalar::I16(v) => write!(f, "{v}"),
            Scalar::I32(v) => write!(f, "{v}"),
            Scalar::I64(v) => write!(f, "{v}"),
            Scalar::U8(v) => write!(f, "{v}"),
            Scalar::U16(v) => write!(f, "{v}"),
            Scalar::U32(v) => write!(f, "{v}"),
            Scalar::U64(v) => write!(f, "{v}"),
            Scalar::F32(v) => write!(f, "{v}"),
            Scalar::F64(v) => write!(f, "{v}"),
            Scalar::Decimal32(v) => write!(f, "decimal32(0x{v:08x})"),
            Scalar::Decimal64(v) => write!(f, "decimal64(0x{v:016x})"),
            Scalar::Decimal128(v) => {
                f.write_str("decimal128(0x")?;
                hex(v, f)?;
                f.write_str(")")
            }
            Scalar::Char(v) => write!(f, "'{v}'"),
            Scalar::Timestamp(v) => write!(f, "timestamp({v})"),
            Scalar::Uuid(v) => {
                for (i, b) in v.iter().enumerate() {
                    if matches!(i, 4 | 6 | 8 | 10) {
                        f.write_str("-")?;
                    }
                    write!(f, "{b:02x}")?;
                }
                Ok(())
            }
            Scalar::Binary(v) => {
                f.write_str("0x")?;
                hex(v, f)
            }
            Scalar::String(v) => write!(f, "{v:?}"),
            Scalar::Symbol(v) => write!(f, ":{v}"),
        }
    }
}

impl Display for IValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let mut out = String::new();
        format_node(self, 0, &mut out)?;
        f.write_str(&out)
    }
}
