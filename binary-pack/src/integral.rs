use std::marker::PhantomData;

use crate::{
    Codec, Cursor, DeserializationError, SerializationError,
    byte_order::{ByteOrder, NativeEndian},
    encodings::FixedInt,
};

/// Fixed-width integer (or float) laid out in byte order `E`.
///
/// Width and signedness come from `T`: `Integral<u16, BigEndian>` is an
/// unsigned 16-bit big-endian field, always exactly two bytes on the wire.
#[derive(Clone, Copy, Debug, Default)]
pub struct Integral<T, E = NativeEndian> {
    _marker: PhantomData<(T, E)>,
}

impl<T, E> Integral<T, E> {
    pub const fn new() -> Self {
        Self { _marker: PhantomData }
    }
}

impl<T: FixedInt, E: ByteOrder> Codec for Integral<T, E> {
    type Value = T;

    fn pack_into(&self, value: &T, buffer: &mut Vec<u8>) -> Result<(), SerializationError> {
        let mut bytes = value.to_native();
        E::reorder(bytes.as_mut());
        buffer.extend_from_slice(bytes.as_ref());
        Ok(())
    }

    fn unpack(&self, cursor: &mut Cursor<'_>) -> Result<T, DeserializationError> {
        let mut bytes = T::Bytes::default();
        let slice = cursor.take(bytes.as_ref().len())?;
        bytes.as_mut().copy_from_slice(slice);
        E::reorder(bytes.as_mut());
        Ok(T::from_native(bytes))
    }
}
