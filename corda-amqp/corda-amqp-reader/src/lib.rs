//! Schema-guided decoding for `corda-amqp`.
//!
//! - [`Reader`] — decodes the value under a [`Cursor`](corda_amqp_core::Cursor)
//!   against a [`Schema`](corda_amqp_schema::Schema), producing an
//!   [`IValue`](corda_amqp_core::IValue) tree
//! - [`Envelope`] — splits a serialized blob into its schema and object

mod envelope;
mod error;
mod policy;
mod reader;

pub use envelope::{DATA_SECTION, Envelope, MAGIC, strip_header};
pub use error::ReadError;
pub use policy::DescriptorPolicy;
pub use reader::{DEFAULT_MAX_DEPTH, Reader, ReaderBuilder};
