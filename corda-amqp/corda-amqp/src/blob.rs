//! Serialized blob reader over in-memory bytes and memory-mapped files.

use std::{fs, path::Path};

use corda_amqp_core::IValue;
use corda_amqp_reader::{DescriptorPolicy, Envelope, ReadError, ReaderBuilder};
use corda_amqp_schema::Schema;
use memmap2::Mmap;
use rayon::prelude::*;
use tracing::debug;

use crate::error::BlobReaderError;

/// The schema carried by a blob together with its decoded object.
#[derive(Debug, Clone)]
pub struct DecodedBlob {
    pub schema: Schema,
    pub value: IValue,
}

/// Reads serialized blobs and decodes their object against the embedded schema.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlobReader {
    config: ReaderBuilder,
}

/// Builder for configuring [`BlobReader`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BlobReaderBuilder {
    config: ReaderBuilder,
}

impl BlobReaderBuilder {
    /// Set the maximum nesting depth accepted while decoding objects.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.config = self.config.max_depth(max_depth);
        self
    }

    /// Set how object descriptors that disagree with the schema are handled.
    pub fn with_descriptor_policy(mut self, policy: DescriptorPolicy) -> Self {
        self.config = self.config.descriptor_policy(policy);
        self
    }

    pub fn build(self) -> BlobReader {
        BlobReader {
            config: self.config,
        }
    }
}

impl BlobReader {
    /// Create a builder for [`BlobReader`].
    pub fn builder() -> BlobReaderBuilder {
        BlobReaderBuilder::default()
    }

    pub fn new() -> Self {
        Self::default()
    }

    /// Decode the schema and object of an in-memory blob.
    pub fn decode_bytes(&self, bytes: &[u8]) -> Result<DecodedBlob, BlobReaderError> {
        Ok(self.decode_envelope(bytes)?)
    }

    /// Read only the schema section of an in-memory blob.
    pub fn read_schema_bytes(&self, bytes: &[u8]) -> Result<Schema, BlobReaderError> {
        Ok(Envelope::parse(bytes)?.into_schema())
    }

    /// Decode the blob stored in the file at `path`.
    pub fn decode_file(&self, path: &Path) -> Result<DecodedBlob, BlobReaderError> {
        let mmap = mmap_file(path)?;
        let decoded = self
            .decode_envelope(&mmap)
            .map_err(|source| decode_error(path, source))?;
        debug!(
            path = %path.display(),
            types = decoded.schema.len(),
            "decoded blob"
        );
        Ok(decoded)
    }

    /// Read only the schema section of the blob stored at `path`.
    pub fn read_schema(&self, path: &Path) -> Result<Schema, BlobReaderError> {
        let mmap = mmap_file(path)?;
        Envelope::parse(&mmap)
            .map(Envelope::into_schema)
            .map_err(|source| decode_error(path, source))
    }

    /// Decode several files in parallel. Results are returned in the order of
    /// `paths`; a failure for one file does not affect the others.
    pub fn decode_files<P>(&self, paths: &[P]) -> Vec<Result<DecodedBlob, BlobReaderError>>
    where
        P: AsRef<Path> + Sync,
    {
        paths
            .par_iter()
            .map(|path| self.decode_file(path.as_ref()))
            .collect()
    }

    fn decode_envelope(&self, bytes: &[u8]) -> Result<DecodedBlob, ReadError> {
        let envelope = Envelope::parse(bytes)?;
        let value = envelope.decode_with(&self.config)?;
        Ok(DecodedBlob {
            schema: envelope.into_schema(),
            value,
        })
    }
}

fn mmap_file(path: &Path) -> Result<Mmap, BlobReaderError> {
    let open = || -> std::io::Result<Mmap> {
        let file = fs::File::open(path)?;
        unsafe { Mmap::map(&file) }
    };
    open().map_err(|source| BlobReaderError::Io {
        path: path.display().to_string(),
        source,
    })
}

fn decode_error(path: &Path, source: ReadError) -> BlobReaderError {
    BlobReaderError::Decode {
        path: path.display().to_string(),
        source,
    }
}
