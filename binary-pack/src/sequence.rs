use crate::{
    Codec, Compressed, Cursor, DeserializationError, SerializationError,
    utils::{read_size, write_size},
};

/// Count-prefixed homogeneous list: the count goes through `L`, each element through `E`
#[derive(Clone, Copy, Debug, Default)]
pub struct Sequence<E, L = Compressed> {
    element: E,
    length: L,
}

impl<E, L> Sequence<E, L> {
    pub fn new(element: E, length: L) -> Self {
        Self { element, length }
    }
}

impl<E, L> Codec for Sequence<E, L>
where
    E: Codec,
    L: Codec,
    L::Value: TryFrom<usize> + TryInto<usize>,
{
    type Value = Vec<E::Value>;

    fn pack_into(&self, value: &Vec<E::Value>, buffer: &mut Vec<u8>) -> Result<(), SerializationError> {
        write_size(&self.length, value.len(), buffer)?;
        for element in value {
            self.element.pack_into(element, buffer)?;
        }
        Ok(())
    }

    fn unpack(&self, cursor: &mut Cursor<'_>) -> Result<Vec<E::Value>, DeserializationError> {
        let count = read_size(&self.length, cursor)?;

        // The count is untrusted; never reserve more than the bytes left could hold
        let mut elements = Vec::with_capacity(count.min(cursor.remaining()));
        for idx in 0..count {
            let start = cursor.pos();
            elements.push(self.element.unpack(cursor)?);

            // Zero-width elements can't be bounded by the buffer; cap what is still owed
            let owed = count - idx - 1;
            if cursor.pos() == start && owed > cursor.remaining() {
                return Err(DeserializationError::NotEnoughBytes(owed - cursor.remaining()));
            }
        }
        Ok(elements)
    }
}
