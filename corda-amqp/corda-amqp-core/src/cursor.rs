//! Positioned-reader contract shared by schema parsing and value decoding.

use std::ops::{Deref, DerefMut};

use crate::{
    error::DecodeError,
    kind::Kind,
    value::{FromScalar, Scalar},
};

/// A positioned reader over encoded data.
///
/// The cursor always points at one *current* value inside a level. Compound
/// values (described, list, map, array) are entered with [`descend`], which
/// moves to their first child, and left with [`ascend`], which returns to
/// the compound itself. Every `descend` must be balanced by an `ascend`;
/// use [`AutoEnter`] rather than pairing the calls by hand.
///
/// [`descend`]: Cursor::descend
/// [`ascend`]: Cursor::ascend
pub trait Cursor {
    /// Kind of the current value, [`DecodeError::Exhausted`] if there is none.
    fn kind(&self) -> Result<Kind, DecodeError>;

    /// Whether the current level still has a value under the cursor.
    fn has_current(&self) -> bool;

    /// Move to the next sibling. Returns `false` once the level is exhausted.
    ///
    /// Never fails: an element whose extent cannot be determined exhausts
    /// the level, and the next [`kind`](Cursor::kind) call reports why.
    fn next(&mut self) -> bool;

    /// Enter the current compound value, positioning at its first child.
    fn descend(&mut self) -> Result<(), DecodeError>;

    /// Leave the current level, positioning at the compound that was entered.
    /// Returns `false` at the top level.
    fn ascend(&mut self) -> bool;

    /// Number of levels entered so far.
    fn depth(&self) -> usize;

    /// Decode the current value as a scalar.
    fn scalar(&self) -> Result<Scalar, DecodeError>;

    /// Decode the current value and convert it to `T`.
    fn get<T: FromScalar>(&self) -> Result<T, DecodeError>
    where
        Self: Sized,
    {
        T::from_scalar(self.scalar()?)
    }
}

/// Advances the wrapped cursor to the next sibling when dropped.
///
/// Wrap a cursor in `AutoNext` before decoding the current value so the
/// cursor lands on the following sibling whether decoding returns `Ok`, `Err`
/// or unwinds.
pub struct AutoNext<'c, C: Cursor + ?Sized> {
    cursor: &'c mut C,
}

impl<'c, C: Cursor + ?Sized> AutoNext<'c, C> {
    pub fn new(cursor: &'c mut C) -> Self {
        Self { cursor }
    }
}

impl<C: Cursor + ?Sized> Deref for AutoNext<'_, C> {
    type Target = C;

    fn deref(&self) -> &C {
        self.cursor
    }
}

impl<C: Cursor + ?Sized> DerefMut for AutoNext<'_, C> {
    fn deref_mut(&mut self) -> &mut C {
        self.cursor
    }
}

impl<C: Cursor + ?Sized> Drop for AutoNext<'_, C> {
    fn drop(&mut self) {
        self.cursor.next();
    }
}

/// Enters the current compound value on construction and ascends back to it
/// when dropped.
pub struct AutoEnter<'c, C: Cursor + ?Sized> {
    cursor: &'c mut C,
}

impl<'c, C: Cursor + ?Sized> AutoEnter<'c, C> {
    pub fn new(cursor: &'c mut C) -> Result<Self, DecodeError> {
        cursor.descend()?;
        Ok(Self { cursor })
    }
}

impl<C: Cursor + ?Sized> Deref for AutoEnter<'_, C> {
    type Target = C;

    fn deref(&self) -> &C {
        self.cursor
    }
}

impl<C: Cursor + ?Sized> DerefMut for AutoEnter<'_, C> {
    fn deref_mut(&mut self) -> &mut C {
        self.cursor
    }
}

impl<C: Cursor + ?Sized> Drop for AutoEnter<'_, C> {
    fn drop(&mut self) {
        self.cursor.ascend();
    }
}
