//! Compressed (variable-length) integers.
//!
//! Every byte carries 7 bits of the value in its low bits and a continuation
//! flag in its high bit; the first byte with the flag clear ends the number.
//! The little-endian variant emits the least-significant group first (LEB128,
//! protobuf varints), the big-endian variant the most-significant group first.

use std::any::type_name;
use std::marker::PhantomData;

use num_traits::{PrimInt, Unsigned};

use crate::{
    Codec, Cursor, DeserializationError, SerializationError,
    byte_order::{ByteOrder, LittleEndian},
    encodings::ZigZag,
};

const CONTINUATION: u8 = 0b1000_0000;
const GROUP_MASK: u8 = 0b0111_1111;
const GROUP_BITS: usize = 7;
const BLOCK_SIZE: u8 = 128;

/// Unsigned integer usable as the value of a [`Compressed`] codec
pub trait VarUint: PrimInt + Unsigned + From<u8> {}

impl<T: PrimInt + Unsigned + From<u8>> VarUint for T {}

/// Gives encoded size in bytes, which is the same for both group orders
///
/// # Arguments
/// * `nr` - number to encode
///
/// # Returns
/// * number of bytes, at least 1
pub fn encoded_size<T: VarUint>(nr: T) -> usize {
    let mut size = 1;
    let mut nr = nr >> GROUP_BITS;
    while !nr.is_zero() {
        nr = nr >> GROUP_BITS;
        size += 1;
    }
    size
}

fn low_group<T: VarUint>(nr: T) -> u8 {
    (nr & <T as From<u8>>::from(GROUP_MASK)).to_u8().unwrap_or_default()
}

fn bit_width<T: VarUint>() -> usize {
    T::zero().count_zeros() as usize
}

fn encode_le<T: VarUint>(nr: T, buffer: &mut Vec<u8>) {
    let mut nr = nr;
    loop {
        let group = low_group(nr);
        nr = nr >> GROUP_BITS;
        if nr.is_zero() {
            buffer.push(group);
            return;
        }
        buffer.push(group | CONTINUATION);
    }
}

fn encode_be<T: VarUint>(nr: T, buffer: &mut Vec<u8>) {
    let start = buffer.len();
    let mut nr = nr;

    // Groups are produced low to high, so only the first one terminates
    buffer.push(low_group(nr));
    nr = nr >> GROUP_BITS;
    while !nr.is_zero() {
        buffer.push(low_group(nr) | CONTINUATION);
        nr = nr >> GROUP_BITS;
    }

    buffer[start..].reverse();
}

fn decode_le<T: VarUint>(cursor: &mut Cursor<'_>) -> Result<T, DeserializationError> {
    let max = T::max_value();
    let mut ret = T::zero();
    let mut shift = 0;

    loop {
        let byte = cursor.next_byte()?;
        let group = <T as From<u8>>::from(byte & GROUP_MASK);

        if shift >= bit_width::<T>() {
            if !group.is_zero() {
                return Err(DeserializationError::Overlong(type_name::<T>()));
            }
        } else {
            if group > max >> shift {
                return Err(DeserializationError::Overlong(type_name::<T>()));
            }
            ret = ret | group << shift;
        }

        if byte & CONTINUATION == 0 {
            return Ok(ret);
        }
        shift += GROUP_BITS;
    }
}

fn decode_be<T: VarUint>(cursor: &mut Cursor<'_>) -> Result<T, DeserializationError> {
    let block = <T as From<u8>>::from(BLOCK_SIZE);
    let limit = T::max_value() / block;
    let mut ret = T::zero();

    loop {
        let byte = cursor.next_byte()?;

        if ret > limit {
            return Err(DeserializationError::Overlong(type_name::<T>()));
        }
        ret = ret * block + <T as From<u8>>::from(byte & GROUP_MASK);

        if byte & CONTINUATION == 0 {
            return Ok(ret);
        }
    }
}

/// Unsigned varint of width `T` (default `u64`), group order `E`
#[derive(Clone, Copy, Debug, Default)]
pub struct Compressed<T = u64, E = LittleEndian> {
    _marker: PhantomData<(T, E)>,
}

impl<T, E> Compressed<T, E> {
    pub const fn new() -> Self {
        Self { _marker: PhantomData }
    }
}

impl<T: VarUint, E: ByteOrder> Codec for Compressed<T, E> {
    type Value = T;

    fn pack_into(&self, value: &T, buffer: &mut Vec<u8>) -> Result<(), SerializationError> {
        if E::IS_LITTLE {
            encode_le(*value, buffer);
        } else {
            encode_be(*value, buffer);
        }
        Ok(())
    }

    fn unpack(&self, cursor: &mut Cursor<'_>) -> Result<T, DeserializationError> {
        if E::IS_LITTLE {
            decode_le(cursor)
        } else {
            decode_be(cursor)
        }
    }
}

/// Signed varint: zigzag on top of the unsigned codec of the same width and order
#[derive(Clone, Copy, Debug, Default)]
pub struct SignedCompressed<T = i64, E = LittleEndian> {
    _marker: PhantomData<(T, E)>,
}

impl<T, E> SignedCompressed<T, E> {
    pub const fn new() -> Self {
        Self { _marker: PhantomData }
    }
}

impl<T, E> Codec for SignedCompressed<T, E>
where
    T: ZigZag,
    T::Unsigned: VarUint,
    E: ByteOrder,
{
    type Value = T;

    fn pack_into(&self, value: &T, buffer: &mut Vec<u8>) -> Result<(), SerializationError> {
        Compressed::<T::Unsigned, E>::new().pack_into(&value.to_unsigned(), buffer)
    }

    fn unpack(&self, cursor: &mut Cursor<'_>) -> Result<T, DeserializationError> {
        let raw = Compressed::<T::Unsigned, E>::new()
            .unpack(cursor)
            .map_err(|e| match e {
                DeserializationError::Overlong(_) => DeserializationError::Overlong(type_name::<T>()),
                other => other,
            })?;
        Ok(T::to_signed(raw))
    }
}
