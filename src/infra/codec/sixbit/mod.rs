//! Six-bit character handling for ITU-R M.1371.
//!
//! Two distinct mappings live here:
//!
//! - the **text alphabet** (Table 47 of Annex 8) used inside message fields
//!   such as AtoN names: 64 glyphs, `@`-`_` on codes 0-31 and ` `-`?` on 32-63;
//! - the **armoring** used to carry a whole bitstream as printable characters:
//!   each 6-bit chunk `v` becomes `v + 48`, plus 8 more when the result
//!   exceeds `'W'`, giving `0`-`W` and `` ` ``-`w`.
//!
//! # Bit layout of the armored stream
//!
//! ```text
//! bits   : 101101 00111+0
//! codes  :   45     14
//! chars  :   'e'    '>'       (1 fill bit)
//! ```
use alloc::string::String;

use super::bits::{BitReader, BitWriter, Bits, CHAR_BITS};
use crate::error::SixBitError;

/// Six-bit text alphabet indexed by code.
pub const SIXBIT_ALPHABET: &[u8; 64] =
    b"@ABCDEFGHIJKLMNOPQRSTUVWXYZ[\\]^_ !\"#$%&'()*+,-./0123456789:;<=>?";

/// Glyph meaning "no character"; pads fixed-length text fields.
pub const NO_VALUE_CHAR: char = '@';

/// Map a text character onto its six-bit code.
pub fn char_to_code(ch: char) -> Result<u8, SixBitError> {
    match ch {
        '@'..='_' => Ok(ch as u8 - b'@'),
        ' '..='?' => Ok(ch as u8),
        _ => Err(SixBitError::UnsupportedCharacter { ch }),
    }
}

/// Map a six-bit code back onto its text character.
pub fn code_to_char(code: u8) -> Result<char, SixBitError> {
    SIXBIT_ALPHABET
        .get(code as usize)
        .map(|&glyph| glyph as char)
        .ok_or(SixBitError::InvalidCode { code })
}

/// Encode a text field of exactly `char_count` characters.
///
/// The value is upper-cased first. Shorter input is right-padded with `@`;
/// longer input is **silently truncated** to `char_count` characters, following
/// the fixed-width field convention of the standard. Characters outside the
/// alphabet are rejected, never substituted.
pub fn encode_text_field(value: &str, char_count: usize) -> Result<Bits, SixBitError> {
    let mut bits = Bits::with_capacity(char_count * CHAR_BITS);
    let mut written = 0;
    for ch in value.chars().take(char_count) {
        let code = char_to_code(ch.to_ascii_uppercase())?;
        bits.push_uint(code as u64, CHAR_BITS as u8);
        written += 1;
    }
    for _ in written..char_count {
        bits.push_uint(0, CHAR_BITS as u8);
    }
    Ok(bits)
}

/// Decode `char_count` characters from the start of `bits`, trimming the
/// trailing `@` padding.
pub fn decode_text_field(bits: &Bits, char_count: usize) -> Result<String, SixBitError> {
    let needed = char_count * CHAR_BITS;
    if bits.len() < needed {
        return Err(SixBitError::TruncatedText {
            needed,
            available: bits.len(),
        });
    }

    let mut reader = BitReader::new(bits);
    let mut text = String::with_capacity(char_count);
    for _ in 0..char_count {
        let code = reader
            .read_u8(CHAR_BITS as u8)
            .map_err(|_| SixBitError::TruncatedText {
                needed,
                available: bits.len(),
            })?;
        text.push(code_to_char(code)?);
    }
    let trimmed = text.trim_end_matches(NO_VALUE_CHAR).len();
    text.truncate(trimmed);
    Ok(text)
}

//==================================================================================ARMORING
/// Armored representation of a bitstream plus the exact bit length it carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArmoredPayload {
    text: String,
    bit_len: usize,
}

impl ArmoredPayload {
    /// Printable characters.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Exact number of data bits represented.
    pub fn bit_len(&self) -> usize {
        self.bit_len
    }

    /// Padding bits in the last character (the transport's "fill bits").
    pub fn fill_bits(&self) -> u8 {
        (self.text.len() * CHAR_BITS - self.bit_len) as u8
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

/// Armor a single six-bit value.
pub fn armor_char(code: u8) -> Result<char, SixBitError> {
    if code > 63 {
        return Err(SixBitError::InvalidCode { code });
    }
    Ok(armor_six(code))
}

#[inline]
fn armor_six(code: u8) -> char {
    let code = code & 0x3F;
    if code < 40 {
        (code + 48) as char
    } else {
        (code + 56) as char
    }
}

/// Recover the six-bit value of an armored character.
pub fn dearmor_char(ch: char, position: usize) -> Result<u8, SixBitError> {
    match ch {
        '0'..='W' => Ok(ch as u8 - 48),
        '`'..='w' => Ok(ch as u8 - 56),
        _ => Err(SixBitError::InvalidArmoredCharacter { ch, position }),
    }
}

/// Group `bits` into 6-bit chunks (the last one zero-padded) and map each
/// chunk onto the printable transport alphabet.
pub fn armor(bits: &Bits) -> ArmoredPayload {
    let mut writer = BitWriter::new();
    writer.pack_bits(bits);
    let padded = writer.finalize();

    let mut text = String::with_capacity(padded.bits.len() / CHAR_BITS);
    let mut code = 0u8;
    for (index, bit) in padded.bits.iter().enumerate() {
        code = (code << 1) | bit as u8;
        if index % CHAR_BITS == CHAR_BITS - 1 {
            text.push(armor_six(code));
            code = 0;
        }
    }

    ArmoredPayload {
        text,
        bit_len: bits.len(),
    }
}

/// Inverse of [`armor`]: expand `text` into bits and keep the first
/// `total_bit_length` of them.
///
/// `total_bit_length` must leave between 0 and 5 padding bits in the last
/// character; anything else is a length mismatch.
pub fn dearmor(text: &str, total_bit_length: usize) -> Result<Bits, SixBitError> {
    let chars = text.chars().count();
    let capacity = chars * CHAR_BITS;
    if total_bit_length > capacity || capacity - total_bit_length >= CHAR_BITS {
        return Err(SixBitError::BitLengthMismatch {
            bit_len: total_bit_length,
            chars,
        });
    }

    let mut bits = Bits::with_capacity(capacity);
    for (position, ch) in text.chars().enumerate() {
        let code = dearmor_char(ch, position)?;
        bits.push_uint(code as u64, CHAR_BITS as u8);
    }
    bits.truncate(total_bit_length);
    Ok(bits)
}
