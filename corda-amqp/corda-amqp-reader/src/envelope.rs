//! Serialized envelopes: `[header] described(ENVELOPE) [object, schema, transforms?]`.

use corda_amqp_core::{AutoEnter, BinaryCursor, Cursor, DecodeError, IValue, Kind};
use corda_amqp_schema::{Schema, SchemaDescriptor, wire};
use tracing::debug;

use crate::{
    error::ReadError,
    reader::{Reader, ReaderBuilder},
};

/// Leading bytes of a serialized blob.
pub const MAGIC: &[u8; 7] = b"corda\x01\x00";

/// Section byte following [`MAGIC`] for serialized data.
pub const DATA_SECTION: u8 = 0;

/// Remove the blob header if present. Input without [`MAGIC`] is returned
/// unchanged and treated as a bare envelope.
pub fn strip_header(bytes: &[u8]) -> Result<&[u8], ReadError> {
    let Some(rest) = bytes.strip_prefix(MAGIC.as_slice()) else {
        return Ok(bytes);
    };
    match rest.split_first() {
        Some((&DATA_SECTION, body)) => Ok(body),
        Some((&section, _)) => Err(ReadError::UnsupportedSection(section)),
        None => Err(DecodeError::Truncated {
            offset: MAGIC.len(),
            needed: 1,
        }
        .into()),
    }
}

/// An envelope whose schema has been read and whose object is still encoded.
#[derive(Debug, Clone)]
pub struct Envelope<'a> {
    schema: Schema,
    object: BinaryCursor<'a>,
}

impl<'a> Envelope<'a> {
    /// Read the header and schema section of `bytes`.
    pub fn parse(bytes: &'a [u8]) -> Result<Self, ReadError> {
        let body = strip_header(bytes)?;
        let mut cursor = BinaryCursor::new(body);

        let kind = cursor.kind()?;
        if kind != Kind::Described {
            return Err(ReadError::NotAnEnvelope {
                found: kind.to_string(),
            });
        }
        let mut described = AutoEnter::new(&mut cursor)?;
        let descriptor = described.scalar()?;
        if SchemaDescriptor::from_scalar(&descriptor) != Some(SchemaDescriptor::Envelope) {
            return Err(ReadError::NotAnEnvelope {
                found: format!("descriptor {descriptor}"),
            });
        }
        described.next();

        let kind = described.kind()?;
        if kind != Kind::List {
            return Err(ReadError::NotAnEnvelope {
                found: format!("described {kind}"),
            });
        }
        let mut items = AutoEnter::new(&mut *described)?;
        let object = BinaryCursor::clone(&items);
        items.next();
        let schema = wire::read_schema(&mut *items)?;

        debug!(
            types = schema.len(),
            object_offset = object.offset(),
            "parsed envelope"
        );
        Ok(Self { schema, object })
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn into_schema(self) -> Schema {
        self.schema
    }

    /// Decode the object with the default reader configuration.
    pub fn decode(&self) -> Result<IValue, ReadError> {
        self.decode_with(&ReaderBuilder::default())
    }

    /// Decode the object, identified by its descriptor, against the schema.
    pub fn decode_with(&self, builder: &ReaderBuilder) -> Result<IValue, ReadError> {
        let reader: Reader<'_> = builder.build(&self.schema);
        let mut cursor = self.object.clone();
        Ok(reader.decode_any(&mut cursor)?)
    }
}
