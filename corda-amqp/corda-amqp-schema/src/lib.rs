//! Schema model for Corda's AMQP type system.
//!
//! Key components:
//! - [`type_name`] — parsing of parameterized names such as `java.util.Map<K, V>`
//! - [`Restricted`] ([`List`], [`Map`], [`Enum`]) and [`Composite`] type notations
//! - [`dependency`] — the pairwise [`Dependency`] relation and the ordering built on it
//! - [`Schema`] — an immutable, name- and descriptor-indexed set of notations
//! - [`wire`] — reading a [`Schema`] from an AMQP-encoded schema section

mod composite;
pub mod dependency;
mod descriptor;
mod error;
mod format;
mod notation;
mod restricted;
mod schema;
pub mod type_name;
pub mod wire;

pub use composite::{Composite, Field};
pub use dependency::{Dependency, dependency_order, depends_on};
pub use descriptor::{DESCRIPTOR_PREFIX, Descriptor, SchemaDescriptor};
pub use error::{ParseError, SchemaError};
pub use format::{format_notations, format_schema};
pub use notation::{NotationKind, TypeInfo, TypeNotation};
pub use restricted::{Choice, Enum, List, Map, Restricted};
pub use schema::Schema;
