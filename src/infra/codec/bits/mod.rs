//! Low-level components dedicated to bit manipulation for AIS bitstreams.
//! ITU-R M.1371 fields are packed contiguously, most significant bit first,
//! with no byte alignment, so everything here is addressed in bits.
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::error::{BitReaderError, BitStringError, BitWriterError};

/// Number of bits carried by one armored character.
pub const CHAR_BITS: usize = 6;

/// Owned, growable sequence of bits (MSB first inside each byte).
///
/// Unused bits of the last byte are always zero, so two sequences holding the
/// same bits compare equal.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Bits {
    data: Vec<u8>,
    len: usize,
}

impl Bits {
    /// Create an empty sequence.
    pub const fn new() -> Self {
        Self {
            data: Vec::new(),
            len: 0,
        }
    }

    /// Create an empty sequence able to hold `bits` without reallocating.
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            data: Vec::with_capacity(bits.div_ceil(8)),
            len: 0,
        }
    }

    /// Wrap whole bytes; the resulting length is `bytes.len() * 8`.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            data: bytes.to_vec(),
            len: bytes.len() * 8,
        }
    }

    /// Number of valid bits.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Backing bytes; the last one is zero-padded when `len` is not a multiple of 8.
    #[inline]
    pub fn as_raw_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Bit at `index`, `None` past the end.
    #[inline]
    pub fn get(&self, index: usize) -> Option<bool> {
        if index >= self.len {
            return None;
        }
        Some((self.data[index / 8] >> (7 - index % 8)) & 1 == 1)
    }

    /// Append one bit.
    pub fn push(&mut self, bit: bool) {
        if self.len % 8 == 0 {
            self.data.push(0);
        }
        if bit {
            self.data[self.len / 8] |= 0x80 >> (self.len % 8);
        }
        self.len += 1;
    }

    /// Append the low `width` bits of `value`, MSB first. No range check.
    pub(crate) fn push_uint(&mut self, value: u64, width: u8) {
        for shift in (0..width).rev() {
            self.push((value >> shift) & 1 == 1);
        }
    }

    /// Append another sequence.
    pub fn extend_from_bits(&mut self, other: &Bits) {
        for bit in other.iter() {
            self.push(bit);
        }
    }

    /// Shorten to `len` bits; no-op when already shorter.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len {
            return;
        }
        self.data.truncate(len.div_ceil(8));
        let tail = len % 8;
        if tail != 0 {
            if let Some(last) = self.data.last_mut() {
                *last &= 0xFFu8 << (8 - tail);
            }
        }
        self.len = len;
    }

    /// Iterate over the bits in order.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(move |i| (self.data[i / 8] >> (7 - i % 8)) & 1 == 1)
    }
}

impl FromStr for Bits {
    type Err = BitStringError;

    /// Parse a `0`/`1` literal; `_` and whitespace are ignored as separators.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bits = Bits::with_capacity(s.len());
        for (position, ch) in s.chars().enumerate() {
            match ch {
                '0' => bits.push(false),
                '1' => bits.push(true),
                '_' => {}
                c if c.is_whitespace() => {}
                ch => return Err(BitStringError::InvalidBitChar { ch, position }),
            }
        }
        Ok(bits)
    }
}

impl fmt::Display for Bits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl fmt::Debug for Bits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bits[{}]({})", self.len, self)
    }
}

impl fmt::LowerHex for Bits {
    /// Hex dump of the backing bytes (last byte zero-padded).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.data {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

//==================================================================================PADDED_BITS
/// Completed bitstream, zero-padded to a six-bit character boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaddedBits {
    /// Padded bits (`len()` is a multiple of 6).
    pub bits: Bits,
    /// Number of zero bits appended by `finalize()` (0..=5).
    pub padding: u8,
}

impl PaddedBits {
    /// Length of the data before padding.
    pub fn data_len(&self) -> usize {
        self.bits.len() - self.padding as usize
    }

    /// Data bits with the padding discarded.
    pub fn unpadded(&self) -> Bits {
        let mut bits = self.bits.clone();
        bits.truncate(self.data_len());
        bits
    }
}

//==================================================================================BITWRITER
/// Append-only writer used by the serialization layer to build a message
/// field by field. Every `pack_*` call checks that the value fits its width
/// before touching the buffer.
#[derive(Debug, Default)]
pub struct BitWriter {
    bits: Bits,
}

impl BitWriter {
    pub fn new() -> Self {
        Self { bits: Bits::new() }
    }

    /// Expose the cursor position in bits (number of bits written).
    pub fn bit_cursor(&self) -> usize {
        self.bits.len()
    }

    /// Write the low `width` bits of `value`, MSB first.
    pub fn pack_unsigned(&mut self, value: u64, width: u8) -> Result<(), BitWriterError> {
        check_width(width)?;
        if width < 64 && value >> width != 0 {
            return Err(BitWriterError::UnsignedOutOfRange { value, width });
        }
        self.bits.push_uint(value, width);
        Ok(())
    }

    /// Write `value` as a `width`-bit two's-complement integer.
    pub fn pack_signed(&mut self, value: i64, width: u8) -> Result<(), BitWriterError> {
        check_width(width)?;
        if width < 64 {
            let min = -(1i64 << (width - 1));
            let max = (1i64 << (width - 1)) - 1;
            if value < min || value > max {
                return Err(BitWriterError::SignedOutOfRange { value, width });
            }
        }
        let mask = if width == 64 {
            u64::MAX
        } else {
            (1u64 << width) - 1
        };
        self.bits.push_uint(value as u64 & mask, width);
        Ok(())
    }

    /// Write a one-bit flag.
    pub fn pack_bool(&mut self, value: bool) {
        self.bits.push(value);
    }

    /// Append an exact bit run.
    pub fn pack_bits(&mut self, raw: &Bits) {
        self.bits.extend_from_bits(raw);
    }

    /// Append `width` zero bits (spare/reserved fields).
    pub fn pack_zeros(&mut self, width: usize) {
        for _ in 0..width {
            self.bits.push(false);
        }
    }

    /// Return the bits written so far, without padding.
    pub fn into_bits(self) -> Bits {
        self.bits
    }

    /// Complete the bitstream: zero-pad to the next multiple of 6 bits and
    /// record how many padding bits were added.
    pub fn finalize(mut self) -> PaddedBits {
        let padding = (CHAR_BITS - self.bits.len() % CHAR_BITS) % CHAR_BITS;
        self.pack_zeros(padding);
        PaddedBits {
            bits: self.bits,
            padding: padding as u8,
        }
    }
}

//==================================================================================BITREADER
/// Cursor-based reader over a bit sequence. Reads only move forward,
/// except through an explicit `reset()`.
pub struct BitReader<'a> {
    /// Shared source sequence.
    bits: &'a Bits,
    /// Current index expressed as number of bits read from the beginning.
    bit_cursor: usize,
}

impl<'a> BitReader<'a> {
    /// Create a reader positioned at the start of the provided bits.
    pub fn new(bits: &'a Bits) -> Self {
        Self {
            bits,
            bit_cursor: 0,
        }
    }

    pub fn bit_cursor(&self) -> usize {
        self.bit_cursor
    }

    /// Bits left after the cursor.
    pub fn remaining(&self) -> usize {
        self.bits.len() - self.bit_cursor
    }

    /// Move the cursor back to the first bit.
    pub fn reset(&mut self) {
        self.bit_cursor = 0;
    }

    fn ensure_available(&self, asked: usize) -> Result<(), BitReaderError> {
        let available = self.remaining();
        if asked > available {
            return Err(BitReaderError::OutOfBounds { asked, available });
        }
        Ok(())
    }

    /// Read `width` bits (1..=64) as an unsigned integer.
    pub fn unpack_unsigned(&mut self, width: u8) -> Result<u64, BitReaderError> {
        if !(1..=64).contains(&width) {
            return Err(BitReaderError::TooLongForType {
                max: 64,
                asked: width,
            });
        }
        self.ensure_available(width as usize)?;

        let mut result: u64 = 0;
        for _ in 0..width {
            let bit = self.bits.get(self.bit_cursor).unwrap_or(false);
            result = (result << 1) | bit as u64;
            self.bit_cursor += 1;
        }
        Ok(result)
    }

    /// Read `width` bits without moving the cursor.
    pub fn peek_unsigned(&self, width: u8) -> Result<u64, BitReaderError> {
        let mut probe = BitReader {
            bits: self.bits,
            bit_cursor: self.bit_cursor,
        };
        probe.unpack_unsigned(width)
    }

    /// Read `width` bits as a two's-complement integer.
    pub fn unpack_signed(&mut self, width: u8) -> Result<i64, BitReaderError> {
        let raw = self.unpack_unsigned(width)?;
        Ok(sign_extend(raw, width))
    }

    /// Read up to 8 bits and return a `u8`.
    pub fn read_u8(&mut self, width: u8) -> Result<u8, BitReaderError> {
        if width > 8 {
            return Err(BitReaderError::TooLongForType {
                max: 8,
                asked: width,
            });
        }
        self.unpack_unsigned(width).map(|val| val as u8)
    }

    /// Read up to 16 bits and return a `u16`.
    pub fn read_u16(&mut self, width: u8) -> Result<u16, BitReaderError> {
        if width > 16 {
            return Err(BitReaderError::TooLongForType {
                max: 16,
                asked: width,
            });
        }
        self.unpack_unsigned(width).map(|val| val as u16)
    }

    /// Read up to 32 bits and return a `u32`.
    pub fn read_u32(&mut self, width: u8) -> Result<u32, BitReaderError> {
        if width > 32 {
            return Err(BitReaderError::TooLongForType {
                max: 32,
                asked: width,
            });
        }
        self.unpack_unsigned(width).map(|val| val as u32)
    }

    /// Read a one-bit flag.
    pub fn unpack_bool(&mut self) -> Result<bool, BitReaderError> {
        self.unpack_unsigned(1).map(|bit| bit == 1)
    }

    /// Copy out the next `width` bits.
    pub fn unpack_bits(&mut self, width: usize) -> Result<Bits, BitReaderError> {
        self.ensure_available(width)?;
        let mut out = Bits::with_capacity(width);
        for index in self.bit_cursor..self.bit_cursor + width {
            out.push(self.bits.get(index).unwrap_or(false));
        }
        self.bit_cursor += width;
        Ok(out)
    }

    /// Copy out everything after the cursor.
    pub fn unpack_remaining(&mut self) -> Bits {
        let mut out = Bits::with_capacity(self.remaining());
        for index in self.bit_cursor..self.bits.len() {
            out.push(self.bits.get(index).unwrap_or(false));
        }
        self.bit_cursor = self.bits.len();
        out
    }

    /// Advance the cursor by `width` bits without reading data.
    pub fn advance(&mut self, width: usize) -> Result<(), BitReaderError> {
        self.ensure_available(width)?;
        self.bit_cursor += width;
        Ok(())
    }
}

fn check_width(width: u8) -> Result<(), BitWriterError> {
    if !(1..=64).contains(&width) {
        return Err(BitWriterError::TooLongForType {
            max: 64,
            asked: width,
        });
    }
    Ok(())
}

/// Two's complement helper.
/// If the sign bit of a `bits`-wide value is set, propagate it across the
/// upper bits of the `i64`.
fn sign_extend(value: u64, bits: u8) -> i64 {
    if bits >= 64 {
        return value as i64;
    }

    let sign_bit_mask = 1u64 << (bits - 1);
    if (value & sign_bit_mask) != 0 {
        let extension_mask = u64::MAX << bits;
        (value | extension_mask) as i64
    } else {
        value as i64
    }
}

//==================================================================================TEST_BITS
#[cfg(test)]
#[path = "tests.rs"]
mod tests;
