//! Wire-level building blocks for `corda-amqp`.
//!
//! This crate knows nothing about schemas. It provides:
//! - [`Kind`] — the AMQP primitive/compound kind of an encoded value
//! - [`Cursor`] — the positioned-reader contract, plus [`AutoNext`] /
//!   [`AutoEnter`] scope guards that restore the position on every exit path
//! - [`BinaryCursor`] — a [`Cursor`] over an AMQP 1.0 encoded byte slice
//! - [`IValue`] / [`Scalar`] — the decoded value tree

mod binary;
mod cursor;
mod error;
mod format;
mod kind;
mod value;

pub use binary::BinaryCursor;
pub use cursor::{AutoEnter, AutoNext, Cursor};
pub use error::{DecodeError, ValueTypeError};
pub use format::format_value;
pub use kind::Kind;
pub use value::{FromScalar, IValue, Scalar};
