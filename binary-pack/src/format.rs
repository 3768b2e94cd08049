//! Chaining codecs into a positional wire format.
//!
//! A [`Format`] wraps a tuple of codecs. Packing concatenates each codec's
//! output in declaration order; unpacking walks one shared [`Cursor`] over the
//! buffer, running codec `i + 1` only once codec `i` has advanced it.
//!
//! ```
//! use binary_pack::{BigEndian, Compressed, FixedString, Format, Integral, SpacePadding};
//!
//! let format = Format::new((
//!     Integral::<u16, BigEndian>::new(),
//!     FixedString::<2, SpacePadding>::default(),
//!     Compressed::<u32>::new(),
//! ));
//! let bytes = format.pack(&(1, "a".to_string(), 300)).unwrap();
//! assert_eq!(bytes, [0x00, 0x01, b'a', b' ', 0xAC, 0x02]);
//! assert_eq!(format.unpack(&bytes).unwrap(), (1, "a".to_string(), 300));
//! ```

use tracing::{debug, trace};

use crate::{Codec, Cursor, DeserializationError, SerializationError};

/// An ordered, fixed-arity list of codecs (implemented for tuples)
pub trait CodecList {
    type Values;

    fn pack_all(&self, values: &Self::Values, buffer: &mut Vec<u8>) -> Result<(), SerializationError>;

    fn unpack_all(&self, cursor: &mut Cursor<'_>) -> Result<Self::Values, DeserializationError>;
}

impl CodecList for () {
    type Values = ();

    fn pack_all(&self, _values: &(), _buffer: &mut Vec<u8>) -> Result<(), SerializationError> {
        Ok(())
    }

    fn unpack_all(&self, _cursor: &mut Cursor<'_>) -> Result<(), DeserializationError> {
        Ok(())
    }
}

macro_rules! impl_codec_list {
    ($($codec:ident $idx:tt),+) => {
        impl<$($codec: Codec),+> CodecList for ($($codec,)+) {
            type Values = ($($codec::Value,)+);

            fn pack_all(&self, values: &Self::Values, buffer: &mut Vec<u8>) -> Result<(), SerializationError> {
                $(
                    trace!(field = $idx, offset = buffer.len(), "packing field");
                    self.$idx
                        .pack_into(&values.$idx, buffer)
                        .inspect_err(|e| debug!(field = $idx, error = %e, "failed to pack field"))?;
                )+
                Ok(())
            }

            fn unpack_all(&self, cursor: &mut Cursor<'_>) -> Result<Self::Values, DeserializationError> {
                Ok(($(
                    {
                        trace!(field = $idx, pos = cursor.pos(), "unpacking field");
                        self.$idx.unpack(cursor).inspect_err(
                            |e| debug!(field = $idx, pos = cursor.pos(), error = %e, "failed to unpack field"),
                        )?
                    },
                )+))
            }
        }
    };
}

impl_codec_list!(C0 0);
impl_codec_list!(C0 0, C1 1);
impl_codec_list!(C0 0, C1 1, C2 2);
impl_codec_list!(C0 0, C1 1, C2 2, C3 3);
impl_codec_list!(C0 0, C1 1, C2 2, C3 3, C4 4);
impl_codec_list!(C0 0, C1 1, C2 2, C3 3, C4 4, C5 5);
impl_codec_list!(C0 0, C1 1, C2 2, C3 3, C4 4, C5 5, C6 6);
impl_codec_list!(C0 0, C1 1, C2 2, C3 3, C4 4, C5 5, C6 6, C7 7);
impl_codec_list!(C0 0, C1 1, C2 2, C3 3, C4 4, C5 5, C6 6, C7 7, C8 8);
impl_codec_list!(C0 0, C1 1, C2 2, C3 3, C4 4, C5 5, C6 6, C7 7, C8 8, C9 9);
impl_codec_list!(C0 0, C1 1, C2 2, C3 3, C4 4, C5 5, C6 6, C7 7, C8 8, C9 9, C10 10);
impl_codec_list!(C0 0, C1 1, C2 2, C3 3, C4 4, C5 5, C6 6, C7 7, C8 8, C9 9, C10 10, C11 11);

#[derive(Clone, Copy, Debug, Default)]
pub struct Format<C> {
    codecs: C,
}

impl<C: CodecList> Format<C> {
    pub fn new(codecs: C) -> Self {
        Self { codecs }
    }

    pub fn pack(&self, values: &C::Values) -> Result<Vec<u8>, SerializationError> {
        let mut buffer = Vec::new();
        self.codecs.pack_all(values, &mut buffer)?;
        Ok(buffer)
    }

    /// Unpacks every field and requires the whole buffer to be consumed
    pub fn unpack(&self, bytes: &[u8]) -> Result<C::Values, DeserializationError> {
        let mut cursor = Cursor::new(bytes);
        let values = self.codecs.unpack_all(&mut cursor)?;

        if !cursor.is_at_end() {
            debug!(consumed = cursor.pos(), total = cursor.len(), "trailing bytes after last field");
            return Err(DeserializationError::IncompleteParse(cursor.pos(), cursor.len()));
        }
        Ok(values)
    }

    /// Unpacks every field from the start of `bytes`, returning where the walk stopped
    pub fn unpack_partial(&self, bytes: &[u8]) -> Result<(C::Values, usize), DeserializationError> {
        let mut cursor = Cursor::new(bytes);
        let values = self.codecs.unpack_all(&mut cursor)?;
        Ok((values, cursor.pos()))
    }

    /// Continues an in-progress walk
    pub fn unpack_from(&self, cursor: &mut Cursor<'_>) -> Result<C::Values, DeserializationError> {
        self.codecs.unpack_all(cursor)
    }
}

impl<C: CodecList> Codec for Format<C> {
    type Value = C::Values;

    fn pack_into(&self, value: &C::Values, buffer: &mut Vec<u8>) -> Result<(), SerializationError> {
        self.codecs.pack_all(value, buffer)
    }

    fn unpack(&self, cursor: &mut Cursor<'_>) -> Result<C::Values, DeserializationError> {
        self.codecs.unpack_all(cursor)
    }
}

/// Zero-width field yielding the cursor position at its place in the walk.
/// Packing writes nothing and ignores the supplied value.
#[derive(Clone, Copy, Debug, Default)]
pub struct Position;

impl Codec for Position {
    type Value = usize;

    fn pack_into(&self, _value: &usize, _buffer: &mut Vec<u8>) -> Result<(), SerializationError> {
        Ok(())
    }

    fn unpack(&self, cursor: &mut Cursor<'_>) -> Result<usize, DeserializationError> {
        Ok(cursor.pos())
    }
}
