//! Byte-order engine for fixed-width values.
//!
//! Fixed-width values are handled as their native in-memory byte image. A
//! [`ByteOrder`] turns that image into wire order (and back) by reversing it
//! when the configured order differs from the target's order. Reversal is its
//! own inverse, so the same call serves both directions.

pub trait ByteOrder: Copy + Default + std::fmt::Debug {
    const IS_LITTLE: bool;

    fn is_native() -> bool {
        Self::IS_LITTLE == cfg!(target_endian = "little")
    }

    /// Converts between native and this order, in place
    fn reorder(bytes: &mut [u8]) {
        if !Self::is_native() {
            bytes.reverse();
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct LittleEndian;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BigEndian;

impl ByteOrder for LittleEndian {
    const IS_LITTLE: bool = true;
}

impl ByteOrder for BigEndian {
    const IS_LITTLE: bool = false;
}

#[cfg(target_endian = "little")]
pub type NativeEndian = LittleEndian;

#[cfg(target_endian = "big")]
pub type NativeEndian = BigEndian;
