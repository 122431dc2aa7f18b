//! Endianness-aware conversion between fixed-width values and byte arrays.
//!
//! The codec is stateless: each call site picks a [ByteOrder] explicitly and
//! converts through [FixedWidth]. Exact-width `[u8; N]` arrays make "supply
//! exactly as many bytes as the type is wide" a compile-time guarantee.

#[cfg(not(any(target_endian = "big", target_endian = "little")))]
compile_error!("bitgrain only supports big and little endian targets");

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Byte order of a serialized multi-byte value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ByteOrder {
    /// Most significant byte first.
    Big,
    /// Least significant byte first.
    Little,
}

impl ByteOrder {
    /// The byte order of the compilation target.
    pub const NATIVE: ByteOrder = if cfg!(target_endian = "big") {
        ByteOrder::Big
    } else {
        ByteOrder::Little
    };

    /// Whether this order matches the compilation target, i.e. whether
    /// conversion through it is a plain copy rather than a byte swap.
    pub fn is_native(self) -> bool {
        self == Self::NATIVE
    }
}

/// Conversion between a fixed-width value and its serialized byte array
/// under a caller-chosen [ByteOrder].
///
/// Implemented for every primitive integer type and for `f32`/`f64` (IEEE
/// interchange representation). The `match` on the order folds to a native
/// load/store or a byte swap once inlined.
pub trait FixedWidth: Copy + Sized {
    /// Width of the serialized representation in bytes.
    const WIDTH: usize;

    /// Exact-width byte array holding the serialized value.
    type Bytes: AsRef<[u8]> + AsMut<[u8]>;

    /// Interprets `bytes` under `order`, producing the natural-order value.
    fn from_bytes(bytes: Self::Bytes, order: ByteOrder) -> Self;

    /// Serializes the value under `order`.
    fn to_bytes(self, order: ByteOrder) -> Self::Bytes;
}

macro_rules! impl_fixed_width {
    ($($ty:ty),* $(,)?) => {$(
        impl FixedWidth for $ty {
            const WIDTH: usize = std::mem::size_of::<$ty>();

            type Bytes = [u8; std::mem::size_of::<$ty>()];

            fn from_bytes(bytes: Self::Bytes, order: ByteOrder) -> Self {
                match order {
                    ByteOrder::Big => <$ty>::from_be_bytes(bytes),
                    ByteOrder::Little => <$ty>::from_le_bytes(bytes),
                }
            }

            fn to_bytes(self, order: ByteOrder) -> Self::Bytes {
                match order {
                    ByteOrder::Big => self.to_be_bytes(),
                    ByteOrder::Little => self.to_le_bytes(),
                }
            }
        }
    )*};
}

impl_fixed_width!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128, f32, f64);
