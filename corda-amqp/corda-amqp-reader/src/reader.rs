//! Schema-guided decoding of the value under a cursor.
//!
//! Every decode step follows the same discipline: wrap the cursor in an
//! [`AutoNext`] so it lands on the following sibling however the step ends,
//! and enter compound values through [`AutoEnter`] so they are always left
//! again. A failed decode therefore leaves the cursor exactly where a
//! successful one would have.

use corda_amqp_core::{AutoEnter, AutoNext, Cursor, DecodeError, FromScalar, IValue, Kind, Scalar};
use corda_amqp_schema::{
    Composite, Enum, Field, Restricted, Schema, SchemaDescriptor, TypeNotation, type_name,
    wire::peek_descriptor,
};
use tracing::{debug, warn};

use crate::policy::DescriptorPolicy;

/// Nesting limit applied unless configured otherwise.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Path used for values decoded without a declared type name.
const ROOT: &str = "$";

/// Decodes AMQP values against the types of one [`Schema`].
#[derive(Debug, Clone, Copy)]
pub struct Reader<'s> {
    schema: &'s Schema,
    max_depth: usize,
    descriptor_policy: DescriptorPolicy,
}

/// Builder for configuring [`Reader`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReaderBuilder {
    max_depth: usize,
    descriptor_policy: DescriptorPolicy,
}

impl Default for ReaderBuilder {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            descriptor_policy: DescriptorPolicy::default(),
        }
    }
}

impl ReaderBuilder {
    /// Maximum nesting of described values, lists and maps.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn descriptor_policy(mut self, policy: DescriptorPolicy) -> Self {
        self.descriptor_policy = policy;
        self
    }

    pub fn build(self, schema: &Schema) -> Reader<'_> {
        Reader {
            schema,
            max_depth: self.max_depth,
            descriptor_policy: self.descriptor_policy,
        }
    }
}

impl<'s> Reader<'s> {
    /// Create a reader with the default configuration.
    pub fn new(schema: &'s Schema) -> Self {
        ReaderBuilder::default().build(schema)
    }

    /// Create a builder for [`Reader`].
    pub fn builder() -> ReaderBuilder {
        ReaderBuilder::default()
    }

    pub fn schema(&self) -> &'s Schema {
        self.schema
    }

    /// Decode the current value as `type_name` (an AMQP primitive, `*`, or a
    /// type of the schema) and advance to the next sibling.
    pub fn decode<C: Cursor + ?Sized>(
        &self,
        cursor: &mut C,
        type_name: &str,
    ) -> Result<IValue, DecodeError> {
        debug!(type_name, "decode");
        self.read_type(cursor, type_name, type_name, 0)
    }

    /// Decode the current value as `field`, producing a [`IValue::Pair`]
    /// named after it.
    pub fn decode_field<C: Cursor + ?Sized>(
        &self,
        cursor: &mut C,
        field: &Field,
    ) -> Result<IValue, DecodeError> {
        debug!(
            field = field.name.as_str(),
            type_name = field.type_name.as_str(),
            "decode field"
        );
        self.read_field(cursor, field, &field.name, 0)
    }

    /// Decode the current value as `type_name`, producing a [`IValue::Pair`]
    /// named `name`.
    pub fn decode_named<C: Cursor + ?Sized>(
        &self,
        cursor: &mut C,
        name: &str,
        type_name: &str,
    ) -> Result<IValue, DecodeError> {
        debug!(name, type_name, "decode named");
        let value = self.read_type(cursor, type_name, name, 0)?;
        Ok(IValue::pair(name, value))
    }

    /// Decode a self-describing value: a described value is decoded as the
    /// schema type its descriptor identifies, anything else structurally.
    pub fn decode_any<C: Cursor + ?Sized>(&self, cursor: &mut C) -> Result<IValue, DecodeError> {
        debug!("decode by descriptor");
        let mut c = AutoNext::new(cursor);
        self.read_any(&mut *c, ROOT, 0)
    }

    fn read_type<C: Cursor + ?Sized>(
        &self,
        cursor: &mut C,
        ty: &str,
        path: &str,
        depth: usize,
    ) -> Result<IValue, DecodeError> {
        let mut c = AutoNext::new(cursor);
        self.read_value(&mut *c, ty, path, depth)
    }

    fn read_field<C: Cursor + ?Sized>(
        &self,
        cursor: &mut C,
        field: &Field,
        path: &str,
        depth: usize,
    ) -> Result<IValue, DecodeError> {
        let mut c = AutoNext::new(cursor);
        if field.mandatory && c.kind()? == Kind::Null {
            return Err(DecodeError::MissingMandatory {
                path: path.to_string(),
            });
        }
        let value = self.read_value(&mut *c, &field.type_name, path, depth)?;
        Ok(IValue::pair(&field.name, value))
    }

    /// Decode the current value without advancing past it.
    fn read_value<C: Cursor + ?Sized>(
        &self,
        c: &mut C,
        ty: &str,
        path: &str,
        depth: usize,
    ) -> Result<IValue, DecodeError> {
        self.check_depth(path, depth)?;
        if ty == "*" {
            return self.read_any(c, path, depth);
        }
        if let Some(kind) = Kind::from_type_name(ty) {
            return read_scalar(c, kind, path);
        }
        if let Some(notation) = self.schema.get(ty) {
            return self.read_notation(c, notation, path, depth);
        }
        if let Some(elem) = type_name::array_element(ty) {
            return self.read_elements(c, elem, path, depth + 1);
        }
        Err(DecodeError::UnknownType {
            path: path.to_string(),
            name: ty.to_string(),
        })
    }

    fn read_any<C: Cursor + ?Sized>(
        &self,
        c: &mut C,
        path: &str,
        depth: usize,
    ) -> Result<IValue, DecodeError> {
        let Some(descriptor) = peek_descriptor(c)? else {
            return self.read_untyped(c, path, depth);
        };
        if let Some(notation) = self.schema.find_by_descriptor(&descriptor) {
            return self.read_notation(c, notation, path, depth);
        }
        if SchemaDescriptor::from_scalar(&descriptor) == Some(SchemaDescriptor::ReferencedObject) {
            return Err(DecodeError::ReferencedObject {
                path: path.to_string(),
            });
        }
        Err(DecodeError::UnknownType {
            path: path.to_string(),
            name: descriptor.to_string(),
        })
    }

    /// Decode a value the schema says nothing about by its wire structure.
    fn read_untyped<C: Cursor + ?Sized>(
        &self,
        c: &mut C,
        path: &str,
        depth: usize,
    ) -> Result<IValue, DecodeError> {
        match c.kind()? {
            Kind::List | Kind::Array => {
                self.check_depth(path, depth + 1)?;
                let mut items = AutoEnter::new(c)?;
                let mut out = Vec::new();
                while items.has_current() {
                    let p = format!("{path}[{}]", out.len());
                    let mut item = AutoNext::new(&mut *items);
                    out.push(self.read_any(&mut *item, &p, depth + 1)?);
                }
                Ok(IValue::Collection(out))
            }
            Kind::Map => {
                self.check_depth(path, depth + 1)?;
                let mut entries = AutoEnter::new(c)?;
                let mut out = Vec::new();
                while entries.has_current() {
                    let p = format!("{path}[{}]", out.len());
                    let key = {
                        let mut k = AutoNext::new(&mut *entries);
                        self.read_any(&mut *k, &format!("{p}.key"), depth + 1)?
                    };
                    let mut v = AutoNext::new(&mut *entries);
                    let value = self.read_any(&mut *v, &format!("{p}.value"), depth + 1)?;
                    out.push(IValue::Collection(vec![key, value]));
                }
                Ok(IValue::Collection(out))
            }
            _ => Ok(IValue::Single(c.scalar()?)),
        }
    }

    fn read_notation<C: Cursor + ?Sized>(
        &self,
        c: &mut C,
        notation: &TypeNotation,
        path: &str,
        depth: usize,
    ) -> Result<IValue, DecodeError> {
        match c.kind()? {
            Kind::Null => {
                return Ok(match notation {
                    TypeNotation::Restricted(Restricted::List(_) | Restricted::Map(_)) => {
                        IValue::empty()
                    }
                    _ => IValue::Single(Scalar::Null),
                });
            }
            Kind::Described => {}
            found => {
                return Err(DecodeError::SchemaMismatch {
                    path: path.to_string(),
                    expected: format!("described {} {}", notation.kind(), notation.name()),
                    found,
                });
            }
        }
        self.check_depth(path, depth + 1)?;

        let mut described = AutoEnter::new(c)?;
        let descriptor = described.scalar()?;
        self.check_descriptor(notation, &descriptor, path)?;
        described.next();

        let depth = depth + 1;
        match notation {
            TypeNotation::Composite(composite) => {
                self.read_composite(&mut *described, composite, path, depth)
            }
            TypeNotation::Restricted(Restricted::List(list)) => {
                self.read_elements(&mut *described, list.list_of(), path, depth)
            }
            TypeNotation::Restricted(Restricted::Map(map)) => {
                let (key, value) = map.map_of();
                self.read_entries(&mut *described, key, value, path, depth)
            }
            TypeNotation::Restricted(Restricted::Enum(e)) => read_enum(&mut *described, e, path),
        }
    }

    fn check_descriptor(
        &self,
        notation: &TypeNotation,
        found: &Scalar,
        path: &str,
    ) -> Result<(), DecodeError> {
        let expected = notation.descriptor();
        if expected.matches(found) {
            return Ok(());
        }
        match self.descriptor_policy {
            DescriptorPolicy::Strict => Err(DecodeError::DescriptorMismatch {
                path: path.to_string(),
                expected: expected.to_string(),
                found: found.to_string(),
            }),
            DescriptorPolicy::Lenient => {
                warn!(path, %expected, %found, "descriptor mismatch, decoding as declared type");
                Ok(())
            }
        }
    }

    fn check_depth(&self, path: &str, depth: usize) -> Result<(), DecodeError> {
        if depth > self.max_depth {
            return Err(DecodeError::DepthExceeded {
                path: path.to_string(),
                max_depth: self.max_depth,
            });
        }
        Ok(())
    }

    /// Fields of a composite, in declaration order, as named pairs.
    fn read_composite<C: Cursor + ?Sized>(
        &self,
        c: &mut C,
        composite: &Composite,
        path: &str,
        depth: usize,
    ) -> Result<IValue, DecodeError> {
        expect_kind(c, &[Kind::List], path)?;
        let mut items = AutoEnter::new(c)?;

        let fields = composite.fields();
        let mut out = Vec::with_capacity(fields.len());
        for (idx, field) in fields.iter().enumerate() {
            if !items.has_current() {
                return Err(DecodeError::MissingFields {
                    path: path.to_string(),
                    expected: fields.len(),
                    found: idx,
                });
            }
            let p = format!("{path}.{}", field.name);
            out.push(self.read_field(&mut *items, field, &p, depth)?);
        }
        Ok(IValue::Collection(out))
    }

    /// Elements of a list or array, each decoded as `elem`.
    fn read_elements<C: Cursor + ?Sized>(
        &self,
        c: &mut C,
        elem: &str,
        path: &str,
        depth: usize,
    ) -> Result<IValue, DecodeError> {
        if c.kind()? == Kind::Null {
            return Ok(IValue::empty());
        }
        expect_kind(c, &[Kind::List, Kind::Array], path)?;
        self.check_depth(path, depth)?;
        let mut items = AutoEnter::new(c)?;

        let mut out = Vec::new();
        while items.has_current() {
            let p = format!("{path}[{}]", out.len());
            out.push(self.read_type(&mut *items, elem, &p, depth)?);
        }
        Ok(IValue::Collection(out))
    }

    /// Entries of a map, each as a two-element `[key, value]` collection.
    fn read_entries<C: Cursor + ?Sized>(
        &self,
        c: &mut C,
        key_ty: &str,
        value_ty: &str,
        path: &str,
        depth: usize,
    ) -> Result<IValue, DecodeError> {
        if c.kind()? == Kind::Null {
            return Ok(IValue::empty());
        }
        expect_kind(c, &[Kind::Map], path)?;
        let mut entries = AutoEnter::new(c)?;

        let mut out = Vec::new();
        while entries.has_current() {
            let p = format!("{path}[{}]", out.len());
            let key = self.read_type(&mut *entries, key_ty, &format!("{p}.key"), depth)?;
            let value = self.read_type(&mut *entries, value_ty, &format!("{p}.value"), depth)?;
            out.push(IValue::Collection(vec![key, value]));
        }
        Ok(IValue::Collection(out))
    }
}

fn read_scalar<C: Cursor + ?Sized>(c: &C, expected: Kind, path: &str) -> Result<IValue, DecodeError> {
    let found = c.kind()?;
    if found != expected && found != Kind::Null {
        return Err(DecodeError::SchemaMismatch {
            path: path.to_string(),
            expected: expected.to_string(),
            found,
        });
    }
    Ok(IValue::Single(c.scalar()?))
}

/// An enum constant is encoded as `[label, ordinal]` and decodes to its label.
fn read_enum<C: Cursor + ?Sized>(c: &mut C, e: &Enum, path: &str) -> Result<IValue, DecodeError> {
    expect_kind(c, &[Kind::List], path)?;
    let mut items = AutoEnter::new(c)?;

    let label = String::from_scalar(items.scalar()?)?;
    let ordinal = if items.next() {
        Option::<i32>::from_scalar(items.scalar()?)?
    } else {
        None
    };

    let unknown = || DecodeError::UnknownChoice {
        path: path.to_string(),
        label: label.clone(),
    };
    let idx = e.ordinal_of(&label).ok_or_else(unknown)?;
    if ordinal.is_some_and(|o| usize::try_from(o).ok() != Some(idx)) {
        return Err(unknown());
    }
    Ok(IValue::Single(Scalar::string(&label)))
}

fn expect_kind<C: Cursor + ?Sized>(c: &C, allowed: &[Kind], path: &str) -> Result<(), DecodeError> {
    let found = c.kind()?;
    if allowed.contains(&found) {
        return Ok(());
    }
    let expected = allowed
        .iter()
        .map(Kind::to_string)
        .collect::<Vec<_>>()
        .join(" or ");
    Err(DecodeError::SchemaMismatch {
        path: path.to_string(),
        expected,
        found,
    })
}
