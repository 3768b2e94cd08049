use crate::SerializationError;

/// How a fixed-length field fills its unused bytes
pub trait Padding: Copy + Default + std::fmt::Debug {
    /// Writes `value` padded to exactly `length` bytes
    fn add_padding(&self, value: &[u8], length: usize, buffer: &mut Vec<u8>) -> Result<(), SerializationError>;

    fn strip_padding<'a>(&self, bytes: &'a [u8]) -> &'a [u8];
}

/// No padding: values must already have the field's length
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Exact;

impl Padding for Exact {
    fn add_padding(&self, value: &[u8], length: usize, buffer: &mut Vec<u8>) -> Result<(), SerializationError> {
        if value.len() != length {
            return Err(SerializationError::UnexpectedLength(length, value.len()));
        }
        buffer.extend_from_slice(value);
        Ok(())
    }

    fn strip_padding<'a>(&self, bytes: &'a [u8]) -> &'a [u8] {
        bytes
    }
}

/// Pads with `BYTE` and strips every trailing `BYTE` on the way back
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Fill<const BYTE: u8>;

pub type NullPadding = Fill<0x00>;
pub type SpacePadding = Fill<b' '>;

impl<const BYTE: u8> Padding for Fill<BYTE> {
    fn add_padding(&self, value: &[u8], length: usize, buffer: &mut Vec<u8>) -> Result<(), SerializationError> {
        if value.len() > length {
            return Err(SerializationError::TooLong(length, value.len()));
        }
        buffer.extend_from_slice(value);
        buffer.resize(buffer.len() + length - value.len(), BYTE);
        Ok(())
    }

    fn strip_padding<'a>(&self, bytes: &'a [u8]) -> &'a [u8] {
        let end = bytes.iter().rposition(|b| *b != BYTE).map_or(0, |idx| idx + 1);
        &bytes[..end]
    }
}
