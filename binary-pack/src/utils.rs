use std::any::type_name;

use crate::{Codec, Cursor, DeserializationError, SerializationError};

/// Writes `size` through a length-prefix codec
///
/// # Arguments
/// * `length` - codec writing the prefix
/// * `size` - element or byte count to write
/// * `buffer` - buffer to append to
pub fn write_size<L>(length: &L, size: usize, buffer: &mut Vec<u8>) -> Result<(), SerializationError>
where
    L: Codec,
    L::Value: TryFrom<usize>,
{
    let prefix = <L::Value as TryFrom<usize>>::try_from(size)
        .map_err(|_| SerializationError::LengthOutOfRange(size, type_name::<L::Value>()))?;
    length.pack_into(&prefix, buffer)
}

/// Reads a size through a length-prefix codec
///
/// # Arguments
/// * `length` - codec reading the prefix
/// * `cursor` - position of the prefix
///
/// # Returns
/// * the size, as a usize
pub fn read_size<L>(length: &L, cursor: &mut Cursor<'_>) -> Result<usize, DeserializationError>
where
    L: Codec,
    L::Value: TryInto<usize>,
{
    let prefix = length.unpack(cursor)?;
    prefix
        .try_into()
        .map_err(|_| DeserializationError::LengthOutOfRange(type_name::<L::Value>()))
}
