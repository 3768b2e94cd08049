use std::str::Utf8Error;

use thiserror::Error;

/// Coarse classification shared by both error directions
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidInput,
    OutOfBounds,
    Overlong,
    IncompleteParse,
    InvalidUtf8,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SerializationError {
    /// Value does not have the exact length (expected, actual)
    #[error("expected a value of exactly {0} bytes, got {1}")]
    UnexpectedLength(usize, usize),

    /// Value is longer than the field (max, actual)
    #[error("value of {1} bytes does not fit in a field of {0} bytes")]
    TooLong(usize, usize),

    /// Length can't be represented by the prefix type (length, prefix type)
    #[error("length {0} is not representable as {1}")]
    LengthOutOfRange(usize, &'static str),
}

impl SerializationError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidInput
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DeserializationError {
    /// Not enough bytes (bytes missing)
    #[error("out of bounds: {0} more byte(s) required")]
    NotEnoughBytes(usize),

    /// Compressed integer overflows its type (type name)
    #[error("compressed integer is too large for {0}")]
    Overlong(&'static str),

    /// Trailing bytes after the last field (consumed, total)
    #[error("incomplete parse: consumed {0} of {1} bytes")]
    IncompleteParse(usize, usize),

    /// Decoded length prefix can't be used as a length (prefix type)
    #[error("decoded length is not representable as usize for {0}")]
    LengthOutOfRange(&'static str),

    /// String bytes are not UTF-8 (underlying error)
    #[error("string is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] Utf8Error),
}

impl DeserializationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotEnoughBytes(_) | Self::LengthOutOfRange(_) => ErrorKind::OutOfBounds,
            Self::Overlong(_) => ErrorKind::Overlong,
            Self::IncompleteParse(..) => ErrorKind::IncompleteParse,
            Self::InvalidUtf8(_) => ErrorKind::InvalidUtf8,
        }
    }
}

/// A stateless pack/unpack pair for one value type.
///
/// Implementors write their encoding onto the end of a buffer and read it
/// back from a shared [`Cursor`], advancing it by exactly the bytes they
/// consumed. A failed `unpack` may leave the cursor anywhere; callers discard
/// it together with the error.
pub trait Codec {
    type Value;

    fn pack_into(&self, value: &Self::Value, buffer: &mut Vec<u8>) -> Result<(), SerializationError>;

    fn unpack(&self, cursor: &mut Cursor<'_>) -> Result<Self::Value, DeserializationError>;

    fn pack(&self, value: &Self::Value) -> Result<Vec<u8>, SerializationError> {
        let mut buffer = Vec::new();
        self.pack_into(value, &mut buffer)?;
        Ok(buffer)
    }
}

mod cursor;
mod utils;
pub mod byte_order;
pub mod encodings;
pub mod integral;
pub mod dyn_int;
pub mod padding;
pub mod strings;
pub mod sequence;
pub mod format;

pub use byte_order::{BigEndian, ByteOrder, LittleEndian, NativeEndian};
pub use cursor::Cursor;
pub use dyn_int::{Compressed, SignedCompressed};
pub use format::{CodecList, Format, Position};
pub use integral::Integral;
pub use padding::{Exact, Fill, NullPadding, Padding, SpacePadding};
pub use sequence::Sequence;
pub use strings::{Bytes, FixedString, Varchar};
