// Fixed-width primitives, viewed as their native byte image
pub trait FixedInt: Copy {
    type Bytes: AsRef<[u8]> + AsMut<[u8]> + Default;

    fn to_native(self) -> Self::Bytes;
    fn from_native(bytes: Self::Bytes) -> Self;
}

macro_rules! impl_fixed_int {
    ($($ty:ty),*) => {
        $(
            impl FixedInt for $ty {
                type Bytes = [u8; std::mem::size_of::<$ty>()];

                fn to_native(self) -> Self::Bytes {
                    self.to_ne_bytes()
                }

                fn from_native(bytes: Self::Bytes) -> Self {
                    <$ty>::from_ne_bytes(bytes)
                }
            }
        )*
    };
}

impl_fixed_int!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128, f32, f64);

/// Maps signed integers onto unsigned ones so that small magnitudes of
/// either sign stay small: `0 -> 0, -1 -> 1, 1 -> 2, -2 -> 3, ...`
pub trait ZigZag: Copy {
    type Unsigned: Copy;

    fn to_unsigned(self) -> Self::Unsigned;
    fn to_signed(n: Self::Unsigned) -> Self;
}

macro_rules! impl_zigzag {
    ($($signed:ty => $unsigned:ty),*) => {
        $(
            impl ZigZag for $signed {
                type Unsigned = $unsigned;

                fn to_unsigned(self) -> $unsigned {
                    ((self << 1) ^ (self >> (<$signed>::BITS - 1))) as $unsigned
                }

                fn to_signed(n: $unsigned) -> $signed {
                    ((n >> 1) as $signed) ^ -((n & 1) as $signed)
                }
            }
        )*
    };
}

impl_zigzag!(i8 => u8, i16 => u16, i32 => u32, i64 => u64, i128 => u128);
