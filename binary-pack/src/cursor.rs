use crate::DeserializationError;

/// Read position over an immutable buffer, shared by every codec of an unpack walk
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }

    pub fn is_at_end(&self) -> bool {
        self.pos == self.bytes.len()
    }

    /// Fails unless `required` more bytes are available
    pub fn ensure_size(&self, required: usize) -> Result<(), DeserializationError> {
        if required > self.remaining() {
            return Err(DeserializationError::NotEnoughBytes(required - self.remaining()));
        }
        Ok(())
    }

    /// Consumes the next `length` bytes
    pub fn take(&mut self, length: usize) -> Result<&'a [u8], DeserializationError> {
        self.ensure_size(length)?;
        let slice = &self.bytes[self.pos..self.pos + length];
        self.pos += length;
        Ok(slice)
    }

    /// Like `take`, but for a length known at compile time
    pub fn take_array<const N: usize>(&mut self) -> Result<[u8; N], DeserializationError> {
        let mut array = [0u8; N];
        array.copy_from_slice(self.take(N)?);
        Ok(array)
    }

    pub fn next_byte(&mut self) -> Result<u8, DeserializationError> {
        let [byte] = self.take_array::<1>()?;
        Ok(byte)
    }
}
