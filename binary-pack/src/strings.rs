use std::str;

use crate::{
    Codec, Compressed, Cursor, DeserializationError, SerializationError,
    padding::{Exact, Padding},
    utils::{read_size, write_size},
};

/// String occupying exactly `N` bytes on the wire
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedString<const N: usize, P = Exact> {
    padding: P,
}

impl<const N: usize, P: Padding> FixedString<N, P> {
    pub fn new(padding: P) -> Self {
        Self { padding }
    }
}

impl<const N: usize, P: Padding> Codec for FixedString<N, P> {
    type Value = String;

    fn pack_into(&self, value: &String, buffer: &mut Vec<u8>) -> Result<(), SerializationError> {
        self.padding.add_padding(value.as_bytes(), N, buffer)
    }

    fn unpack(&self, cursor: &mut Cursor<'_>) -> Result<String, DeserializationError> {
        let slice = cursor.take(N)?;
        let string = str::from_utf8(self.padding.strip_padding(slice))?;
        Ok(string.to_owned())
    }
}

/// Length-prefixed string; the prefix is written by the nested codec `L`
#[derive(Clone, Copy, Debug, Default)]
pub struct Varchar<L = Compressed> {
    length: L,
}

impl<L> Varchar<L> {
    pub fn new(length: L) -> Self {
        Self { length }
    }
}

impl<L> Codec for Varchar<L>
where
    L: Codec,
    L::Value: TryFrom<usize> + TryInto<usize>,
{
    type Value = String;

    fn pack_into(&self, value: &String, buffer: &mut Vec<u8>) -> Result<(), SerializationError> {
        write_size(&self.length, value.len(), buffer)?;
        buffer.extend_from_slice(value.as_bytes());
        Ok(())
    }

    fn unpack(&self, cursor: &mut Cursor<'_>) -> Result<String, DeserializationError> {
        let len = read_size(&self.length, cursor)?;
        let string = str::from_utf8(cursor.take(len)?)?;
        Ok(string.to_owned())
    }
}

/// Length-prefixed raw bytes, same layout as [`Varchar`]
#[derive(Clone, Copy, Debug, Default)]
pub struct Bytes<L = Compressed> {
    length: L,
}

impl<L> Bytes<L> {
    pub fn new(length: L) -> Self {
        Self { length }
    }
}

impl<L> Codec for Bytes<L>
where
    L: Codec,
    L::Value: TryFrom<usize> + TryInto<usize>,
{
    type Value = Vec<u8>;

    fn pack_into(&self, value: &Vec<u8>, buffer: &mut Vec<u8>) -> Result<(), SerializationError> {
        write_size(&self.length, value.len(), buffer)?;
        buffer.extend_from_slice(value);
        Ok(())
    }

    fn unpack(&self, cursor: &mut Cursor<'_>) -> Result<Vec<u8>, DeserializationError> {
        let len = read_size(&self.length, cursor)?;
        Ok(cursor.take(len)?.to_vec())
    }
}
