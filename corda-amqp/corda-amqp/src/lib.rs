mod blob;
mod error;

pub use blob::{BlobReader, BlobReaderBuilder, DecodedBlob};
pub use corda_amqp_core as core;
pub use corda_amqp_reader as reader;
pub use corda_amqp_schema as schema;
pub use error::BlobReaderError;
