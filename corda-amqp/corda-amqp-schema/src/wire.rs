//! Reading a [`Schema`] from its AMQP encoding.
//!
//! Every schema element is a described list whose descriptor is one of the
//! [`SchemaDescriptor`] codes:
//!
//! ```text
//! schema      := described(SCHEMA) [ [type-notation, ...] ]
//! composite   := described(COMPOSITE_TYPE) [name, label?, provides, descriptor, fields]
//! restricted  := described(RESTRICTED_TYPE) [name, label?, provides, source, descriptor, choices]
//! descriptor  := described(OBJECT_DESCRIPTOR) [name?: symbol, code?: ulong]
//! field       := described(FIELD) [name, type, requires, default?, label?, mandatory, multiple]
//! choice      := described(CHOICE) [name, value]
//! ```
//!
//! All readers take the cursor positioned at the element and leave it on the
//! following sibling, whether they succeed or fail.

use corda_amqp_core::{AutoEnter, AutoNext, Cursor, DecodeError, FromScalar, Kind, Scalar};
use tracing::{debug, trace};

use crate::{
    composite::{Composite, Field},
    descriptor::{Descriptor, SchemaDescriptor},
    error::SchemaError,
    notation::{TypeInfo, TypeNotation},
    restricted::{Choice, Restricted},
    schema::Schema,
};

/// Read a schema section.
pub fn read_schema<C: Cursor>(cursor: &mut C) -> Result<Schema, SchemaError> {
    let types = read_described_list(cursor, SchemaDescriptor::Schema, |c| {
        read_list_of(c, "schema types", read_type_notation)
    })?;
    debug!(types = types.len(), "read schema");
    Schema::new(types)
}

/// Read one composite or restricted type notation.
pub fn read_type_notation<C: Cursor>(cursor: &mut C) -> Result<TypeNotation, SchemaError> {
    let descriptor = peek_descriptor(cursor)?;
    let notation: TypeNotation = match descriptor.as_ref().and_then(SchemaDescriptor::from_scalar) {
        Some(SchemaDescriptor::CompositeType) => read_composite(cursor)?.into(),
        Some(SchemaDescriptor::RestrictedType) => read_restricted(cursor)?.into(),
        _ => {
            cursor.next();
            return Err(SchemaError::UnexpectedDescriptor {
                what: "type notation".to_string(),
                found: describe(descriptor.as_ref()),
            });
        }
    };
    trace!(name = notation.name(), kind = %notation.kind(), "read type notation");
    Ok(notation)
}

/// Descriptor of the current value if it is a described value, leaving the
/// cursor where it is.
pub fn peek_descriptor<C: Cursor + ?Sized>(cursor: &mut C) -> Result<Option<Scalar>, DecodeError> {
    if cursor.kind()? != Kind::Described {
        return Ok(None);
    }
    let described = AutoEnter::new(cursor)?;
    Ok(Some(described.scalar()?))
}

fn read_composite<C: Cursor>(cursor: &mut C) -> Result<Composite, SchemaError> {
    read_described_list(cursor, SchemaDescriptor::CompositeType, |c| {
        let name = read_string(c)?;
        let label = read_opt::<String, _>(c)?;
        let provides = read_string_list(c)?;
        let descriptor = read_descriptor(c)?;
        let fields = read_list_of(c, "fields", read_field)?;

        let mut info = TypeInfo::new(name, descriptor).with_provides(provides);
        info.label = label;
        Ok(Composite::new(info, fields))
    })
}

fn read_restricted<C: Cursor>(cursor: &mut C) -> Result<Restricted, SchemaError> {
    read_described_list(cursor, SchemaDescriptor::RestrictedType, |c| {
        let name = read_string(c)?;
        let label = read_opt::<String, _>(c)?;
        let provides = read_string_list(c)?;
        let source = read_string(c)?;
        let descriptor = read_descriptor(c)?;
        let choices = read_list_of(c, "choices", read_choice)?;

        let mut info = TypeInfo::new(name, descriptor).with_provides(provides);
        info.label = label;
        Restricted::make(info, &source, choices)
    })
}

fn read_descriptor<C: Cursor>(cursor: &mut C) -> Result<Descriptor, SchemaError> {
    read_described_list(cursor, SchemaDescriptor::ObjectDescriptor, |c| {
        let name = read_opt::<String, _>(c)?;
        let code = read_opt::<u64, _>(c)?;
        Ok(Descriptor::new(name, code))
    })
}

fn read_field<C: Cursor>(cursor: &mut C) -> Result<Field, SchemaError> {
    read_described_list(cursor, SchemaDescriptor::Field, |c| {
        let mut field = Field::new(read_string(c)?, read_string(c)?);
        field.requires = read_string_list(c)?;
        field.default = read_opt(c)?;
        field.label = read_opt(c)?;
        field.mandatory = read_opt(c)?.unwrap_or(false);
        field.multiple = read_opt(c)?.unwrap_or(false);
        Ok(field)
    })
}

fn read_choice<C: Cursor>(cursor: &mut C) -> Result<Choice, SchemaError> {
    read_described_list(cursor, SchemaDescriptor::Choice, |c| {
        Ok(Choice::new(read_string(c)?, read_string(c)?))
    })
}

/// Enter `described(expected) list [...]` and hand the list's first element
/// to `read`.
fn read_described_list<C, T, F>(
    cursor: &mut C,
    expected: SchemaDescriptor,
    read: F,
) -> Result<T, SchemaError>
where
    C: Cursor,
    F: FnOnce(&mut C) -> Result<T, SchemaError>,
{
    let mut c = AutoNext::new(cursor);
    expect_kind(&*c, expected, Kind::Described)?;

    let mut described = AutoEnter::new(&mut *c)?;
    let descriptor = described.scalar()?;
    if SchemaDescriptor::from_scalar(&descriptor) != Some(expected) {
        return Err(SchemaError::UnexpectedDescriptor {
            what: expected.to_string(),
            found: describe(Some(&descriptor)),
        });
    }

    described.next();
    expect_kind(&*described, expected, Kind::List)?;
    let mut body = AutoEnter::new(&mut *described)?;
    read(&mut *body)
}

/// Read a list (or array) whose elements are consumed by `read`; `null`
/// reads as empty.
fn read_list_of<C, T, F>(cursor: &mut C, what: &str, mut read: F) -> Result<Vec<T>, SchemaError>
where
    C: Cursor,
    F: FnMut(&mut C) -> Result<T, SchemaError>,
{
    let mut c = AutoNext::new(cursor);
    match c.kind()? {
        Kind::Null => return Ok(Vec::new()),
        Kind::List | Kind::Array => {}
        found => {
            return Err(DecodeError::SchemaMismatch {
                path: what.to_string(),
                expected: "list".to_string(),
                found,
            }
            .into());
        }
    }

    let mut items = AutoEnter::new(&mut *c)?;
    let mut out = Vec::new();
    while items.has_current() {
        out.push(read(&mut *items)?);
    }
    Ok(out)
}

fn read_string<C: Cursor>(cursor: &mut C) -> Result<String, SchemaError> {
    let c = AutoNext::new(cursor);
    Ok(c.get::<String>()?)
}

fn read_string_list<C: Cursor>(cursor: &mut C) -> Result<Vec<String>, SchemaError> {
    read_list_of(cursor, "names", read_string)
}

/// A trailing optional element may be `null` or missing altogether.
fn read_opt<T: FromScalar, C: Cursor>(cursor: &mut C) -> Result<Option<T>, SchemaError> {
    if !cursor.has_current() {
        return Ok(None);
    }
    let c = AutoNext::new(cursor);
    Ok(c.get::<Option<T>>()?)
}

fn expect_kind<C: Cursor + ?Sized>(
    cursor: &C,
    what: SchemaDescriptor,
    expected: Kind,
) -> Result<(), SchemaError> {
    let found = cursor.kind()?;
    if found != expected {
        return Err(DecodeError::SchemaMismatch {
            path: what.to_string(),
            expected: expected.to_string(),
            found,
        }
        .into());
    }
    Ok(())
}

fn describe(descriptor: Option<&Scalar>) -> String {
    match descriptor {
        Some(Scalar::U64(code)) => format!("0x{code:016x}"),
        Some(other) => other.to_string(),
        None => "no descriptor".to_string(),
    }
}
