//! Sequential bit-granular reader over a borrowed byte slice.
//!
//! Bits are consumed MSB-first: the first bit read is the high bit of the
//! first byte, and reads spanning byte boundaries concatenate in consumption
//! order. The reader never copies or mutates the underlying slice.

use crate::errors::ReadError;

/// A cursor extracting 1–64 bit values from a borrowed byte slice.
///
/// A failed read or skip leaves the reader *invalid*: the cursor does not
/// move, no partial value is returned, and every subsequent read or skip
/// fails with [ReadError::EndOfBuffer] until [BitReader::reset] re-points
/// the reader at a buffer.
///
/// Cloning captures the full cursor state, so a clone can be used to
/// save and restore a position.
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    data: &'a [u8],
    bit_pos: usize,
    invalid: bool,
}

impl<'a> BitReader<'a> {
    /// Creates a reader over `data` positioned at the first bit.
    ///
    /// Does not take ownership of the buffer. An empty slice is allowed;
    /// every read from it fails.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            bit_pos: 0,
            invalid: false,
        }
    }

    /// Reads `bit_count` bits, advancing the position by `bit_count`.
    ///
    /// The result holds the bits right-aligned in consumption order.
    /// `bit_count == 0` is a no-op returning 0.
    pub fn read_bits(&mut self, bit_count: usize) -> Result<u64, ReadError> {
        if self.invalid {
            return Err(ReadError::EndOfBuffer);
        }

        if bit_count > 64 {
            return Err(ReadError::TooManyBitsRead);
        }

        if self
            .bit_pos
            .checked_add(bit_count)
            .map_or(true, |end| end > self.data.len() * 8)
        {
            self.invalid = true;
            return Err(ReadError::EndOfBuffer);
        }

        let mut value = 0u64;

        for _ in 0..bit_count {
            let byte = self.data[self.bit_pos / 8];
            let bit = (byte >> (7 - self.bit_pos % 8)) & 1;

            value = (value << 1) | bit as u64;
            self.bit_pos += 1;
        }

        Ok(value)
    }

    /// Reads a single bit, returning whether it is set.
    pub fn read_bit(&mut self) -> Result<bool, ReadError> {
        Ok(self.read_bits(1)? == 1)
    }

    /// Reads `bit_count` bits without advancing the position.
    ///
    /// Extraction happens on a throwaway copy of the cursor state, so a
    /// peek past the end of the buffer reports the error without
    /// invalidating this reader.
    pub fn show_bits(&self, bit_count: usize) -> Result<u64, ReadError> {
        self.clone().read_bits(bit_count)
    }

    /// Advances the position by `bit_count` bits without materializing a
    /// value. Boundary and failure semantics match [BitReader::read_bits],
    /// except that skips larger than 64 bits are allowed.
    pub fn skip_bits(&mut self, bit_count: usize) -> Result<(), ReadError> {
        if self.invalid {
            return Err(ReadError::EndOfBuffer);
        }

        match self.bit_pos.checked_add(bit_count) {
            Some(end) if end <= self.data.len() * 8 => {
                self.bit_pos = end;
                Ok(())
            }
            _ => {
                self.invalid = true;
                Err(ReadError::EndOfBuffer)
            }
        }
    }

    /// Skips the remaining bits of the current byte so the next read starts
    /// at a byte boundary. A no-op when already aligned, which covers both
    /// a fresh reader and a reader that just consumed a full byte.
    pub fn align(&mut self) {
        let rem = self.bit_pos % 8;
        if rem != 0 {
            self.bit_pos += 8 - rem;
        }
    }

    /// Returns the number of bits still available to read.
    ///
    /// Pure query: decreases by exactly the consumed count on every
    /// successful read or skip and is unaffected by [BitReader::show_bits].
    pub fn bits_available(&self) -> usize {
        self.data.len() * 8 - self.bit_pos
    }

    /// Re-points the reader at a new borrowed buffer, restoring a valid
    /// cursor at the first bit.
    pub fn reset(&mut self, data: &'a [u8]) {
        self.data = data;
        self.bit_pos = 0;
        self.invalid = false;
    }
}
