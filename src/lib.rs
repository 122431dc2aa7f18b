//! # bitgrain
//!
//! Low-level primitives for parsing and producing bit-granular binary
//! encodings such as media container and tag formats.
//!
//! Two independent pieces:
//!
//! - [reader::BitReader]: a sequential cursor over a borrowed byte slice
//!   extracting 1–64 bit values MSB-first, with peeking, skipping and
//!   byte-boundary alignment.
//! - [endian::FixedWidth]: a stateless codec between fixed-width
//!   integer/float values and `[u8; N]` arrays under an explicit
//!   [endian::ByteOrder], plus the fixed-point and synchsafe transforms
//!   in [fixed] that media tag formats layer on top.
//!
//! ## Example
//!
//! ```
//! use bitgrain::endian::{ByteOrder, FixedWidth};
//! use bitgrain::reader::BitReader;
//!
//! // Three packed fields: 2-bit version, 11-bit size, 3-bit flags.
//! let data = [0b11_000001, 0b10000_101];
//! let mut reader = BitReader::new(&data);
//!
//! assert_eq!(reader.read_bits(2).unwrap(), 3);
//! assert_eq!(reader.read_bits(11).unwrap(), 48);
//! assert_eq!(reader.read_bits(3).unwrap(), 5);
//!
//! // Byte-aligned fields go through the endian codec directly.
//! assert_eq!(u16::from_bytes([0x01, 0x02], ByteOrder::Big), 0x0102);
//! ```

pub mod endian;
pub mod errors;
pub mod fixed;
pub mod reader;
