//! [`Cursor`] over an AMQP 1.0 encoded byte slice.

use std::sync::Arc;

use bytes::Buf;

use crate::{cursor::Cursor, error::DecodeError, kind::Kind, value::Scalar};

const DESCRIBED: u8 = 0x00;

/// Position of the current value within its level.
#[derive(Debug, Clone, Copy)]
struct Position {
    /// Byte offset of the value's constructor (or, inside an array, of its data).
    offset: usize,
    /// Index of the value among its siblings.
    index: usize,
}

/// One entered compound value.
#[derive(Debug, Clone, Copy)]
struct Level {
    /// Where the cursor was before entering; restored on ascend.
    parent: Position,
    /// One past the last byte of the compound.
    end: usize,
    /// Number of children; `usize::MAX` for the unbounded top level.
    count: usize,
    /// Shared element constructor of an array.
    element_code: Option<u8>,
}

/// A cursor over AMQP-encoded bytes.
///
/// Cloning is cheap and yields an independent cursor over the same buffer,
/// which is how callers remember a position to come back to.
#[derive(Debug, Clone)]
pub struct BinaryCursor<'a> {
    buf: &'a [u8],
    at: Position,
    level: Level,
    stack: Vec<Level>,
}

impl<'a> BinaryCursor<'a> {
    /// Create a cursor positioned at the first top-level value of `buf`.
    pub fn new(buf: &'a [u8]) -> Self {
        let start = Position {
            offset: 0,
            index: 0,
        };
        Self {
            buf,
            at: start,
            level: Level {
                parent: start,
                end: buf.len(),
                count: usize::MAX,
                element_code: None,
            },
            stack: Vec::new(),
        }
    }

    /// Byte offset of the current value.
    pub fn offset(&self) -> usize {
        self.at.offset
    }

    fn slice(&self, offset: usize, len: usize) -> Result<&'a [u8], DecodeError> {
        offset
            .checked_add(len)
            .and_then(|end| self.buf.get(offset..end))
            .ok_or(DecodeError::Truncated {
                offset,
                needed: len,
            })
    }

    fn byte(&self, offset: usize) -> Result<u8, DecodeError> {
        Ok(self.slice(offset, 1)?[0])
    }

    /// Constructor code of the current value and the offset of its data.
    fn constructor(&self) -> Result<(u8, usize), DecodeError> {
        if !self.has_current() {
            return Err(DecodeError::Exhausted {
                offset: self.at.offset,
            });
        }
        match self.level.element_code {
            Some(code) => Ok((code, self.at.offset)),
            None => Ok((self.byte(self.at.offset)?, self.at.offset + 1)),
        }
    }

    /// Length of the data following a non-described constructor.
    fn data_len(&self, code: u8, data: usize) -> Result<usize, DecodeError> {
        Ok(match code >> 4 {
            0x4 => 0,
            0x5 => 1,
            0x6 => 2,
            0x7 => 4,
            0x8 => 8,
            0x9 => 16,
            0xa | 0xc | 0xe => 1 + self.byte(data)? as usize,
            0xb | 0xd | 0xf => 4 + self.slice(data, 4)?.get_u32() as usize,
            _ => {
                return Err(DecodeError::InvalidFormatCode {
                    code,
                    offset: data.saturating_sub(1),
                });
            }
        })
    }

    /// Offset one past the end of the element whose constructor is at `offset`.
    ///
    /// A described constructor stands for two elements (descriptor, value),
    /// so `pending` counts the elements still to skip.
    fn element_end(&self, mut offset: usize) -> Result<usize, DecodeError> {
        let mut pending = 1usize;
        while pending > 0 {
            let code = self.byte(offset)?;
            if code == DESCRIBED {
                offset += 1;
                pending += 1;
            } else {
                offset += 1 + self.data_len(code, offset + 1)?;
                pending -= 1;
            }
        }
        Ok(offset)
    }

    /// End offset of the current value.
    fn current_end(&self) -> Result<usize, DecodeError> {
        match self.level.element_code {
            Some(code) => Ok(self.at.offset + self.data_len(code, self.at.offset)?),
            None => self.element_end(self.at.offset),
        }
    }

    fn exhaust(&mut self) {
        self.at.offset = self.level.end;
        self.at.index = self.level.count;
    }

    fn read_scalar(&self, code: u8, data: usize) -> Result<Scalar, DecodeError> {
        let fixed = |n: usize| self.slice(data, n);
        Ok(match code {
            0x40 => Scalar::Null,
            0x41 => Scalar::Bool(true),
            0x42 => Scalar::Bool(false),
            0x56 => Scalar::Bool(fixed(1)?[0] != 0),
            0x50 => Scalar::U8(fixed(1)?[0]),
            0x60 => Scalar::U16(fixed(2)?.get_u16()),
            0x70 => Scalar::U32(fixed(4)?.get_u32()),
            0x52 => Scalar::U32(fixed(1)?[0] as u32),
            0x43 => Scalar::U32(0),
            0x80 => Scalar::U64(fixed(8)?.get_u64()),
            0x53 => Scalar::U64(fixed(1)?[0] as u64),
            0x44 => Scalar::U64(0),
            0x51 => Scalar::I8(fixed(1)?.get_i8()),
            0x61 => Scalar::I16(fixed(2)?.get_i16()),
            0x71 => Scalar::I32(fixed(4)?.get_i32()),
            0x54 => Scalar::I32(fixed(1)?.get_i8() as i32),
            0x81 => Scalar::I64(fixed(8)?.get_i64()),
            0x55 => Scalar::I64(fixed(1)?.get_i8() as i64),
            0x72 => Scalar::F32(fixed(4)?.get_f32()),
            0x82 => Scalar::F64(fixed(8)?.get_f64()),
            0x74 => Scalar::Decimal32(fixed(4)?.get_u32()),
            0x84 => Scalar::Decimal64(fixed(8)?.get_u64()),
            0x94 => Scalar::Decimal128(array16(fixed(16)?)),
            0x73 => {
                let raw = fixed(4)?.get_u32();
                Scalar::Char(char::from_u32(raw).ok_or(DecodeError::InvalidChar(raw))?)
            }
            0x83 => Scalar::Timestamp(fixed(8)?.get_i64()),
            0x98 => Scalar::Uuid(array16(fixed(16)?)),
            0xa0 | 0xb0 => Scalar::Binary(Arc::from(self.variable(code, data)?)),
            0xa1 | 0xb1 => Scalar::String(Arc::from(self.utf8(code, data)?)),
            0xa3 | 0xb3 => Scalar::Symbol(Arc::from(self.utf8(code, data)?)),
            _ => {
                return match Kind::from_code(code) {
                    Some(kind) => Err(DecodeError::NotScalar { kind }),
                    None => Err(DecodeError::InvalidFormatCode {
                        code,
                        offset: self.at.offset,
                    }),
                };
            }
        })
    }

    /// Payload of a variable-width value (`vbin`, `str`, `sym`).
    fn variable(&self, code: u8, data: usize) -> Result<&'a [u8], DecodeError> {
        let (len, start) = if code >> 4 == 0xa {
            (self.byte(data)? as usize, data + 1)
        } else {
            (self.slice(data, 4)?.get_u32() as usize, data + 4)
        };
        self.slice(start, len)
    }

    fn utf8(&self, code: u8, data: usize) -> Result<&'a str, DecodeError> {
        std::str::from_utf8(self.variable(code, data)?)
            .map_err(|_| DecodeError::InvalidUtf8 { offset: data })
    }
}

fn array16(bytes: &[u8]) -> [u8; 16] {
    let mut out = [0u8; 16];
    out.copy_from_slice(bytes);
    out
}

impl Cursor for BinaryCursor<'_> {
    fn kind(&self) -> Result<Kind, DecodeError> {
        let (code, data) = self.constructor()?;
        Kind::from_code(code).ok_or(DecodeError::InvalidFormatCode {
            code,
            offset: data.saturating_sub(1),
        })
    }

    fn has_current(&self) -> bool {
        self.at.index < self.level.count && self.at.offset < self.level.end
    }

    fn next(&mut self) -> bool {
        if !self.has_current() {
            return false;
        }
        match self.current_end() {
            Ok(end) if end <= self.level.end => {
                self.at.offset = end;
                self.at.index += 1;
            }
            _ => self.exhaust(),
        }
        self.has_current()
    }

    fn descend(&mut self) -> Result<(), DecodeError> {
        let (code, data) = self.constructor()?;
        let end = self.current_end()?;
        if end > self.buf.len() {
            return Err(DecodeError::Truncated {
                offset: self.at.offset,
                needed: end - self.at.offset,
            });
        }

        let (first, count, element_code) = match code {
            DESCRIBED => {
                if self.level.element_code.is_some() {
                    return Err(DecodeError::Unsupported {
                        offset: self.at.offset,
                        detail: "described array elements".to_string(),
                    });
                }
                (data, 2, None)
            }
            0x45 => (data, 0, None),
            0xc0 | 0xc1 => (data + 2, self.byte(data + 1)? as usize, None),
            0xd0 | 0xd1 => (data + 8, self.slice(data + 4, 4)?.get_u32() as usize, None),
            0xe0 | 0xf0 => {
                let (count, ctor) = if code == 0xe0 {
                    (self.byte(data + 1)? as usize, data + 2)
                } else {
                    (self.slice(data + 4, 4)?.get_u32() as usize, data + 8)
                };
                let element = self.byte(ctor)?;
                if element == DESCRIBED {
                    return Err(DecodeError::Unsupported {
                        offset: ctor,
                        detail: "arrays of described values".to_string(),
                    });
                }
                (ctor + 1, count, Some(element))
            }
            _ => {
                let kind = self.kind()?;
                return Err(DecodeError::NotCompound { kind });
            }
        };

        let parent = std::mem::replace(
            &mut self.level,
            Level {
                parent: self.at,
                end,
                count,
                element_code,
            },
        );
        self.stack.push(parent);
        self.at = Position {
            offset: first,
            index: 0,
        };
        Ok(())
    }

    fn ascend(&mut self) -> bool {
        match self.stack.pop() {
            Some(parent) => {
                self.at = self.level.parent;
                self.level = parent;
                true
            }
            None => false,
        }
    }

    fn depth(&self) -> usize {
        self.stack.len()
    }

    fn scalar(&self) -> Result<Scalar, DecodeError> {
        let (code, data) = self.constructor()?;
        self.read_scalar(code, data)
    }
}
