//! Field schema primitives: scaling, sentinels and text rules layered on top
//! of the raw bit writer/reader. The engine dispatches on `FieldKind` and lands
//! here for everything that is more than a plain integer.
use alloc::string::String;

use super::bits::{BitReader, BitWriter, Bits, CHAR_BITS};
use super::sixbit::{decode_text_field, encode_text_field};
use crate::core::{FieldDescriptor, FieldKind, FieldValue};
use crate::error::{CodecError, DeserializationError, SerializationError};

/// Raw LSBs per degree for positions: 1/10 000 minute.
pub const COORDINATE_SCALE: f64 = 600_000.0;
/// Longitude 181° means "not available".
pub const LONGITUDE_NOT_AVAILABLE: i64 = 181 * 600_000;
/// Latitude 91° means "not available".
pub const LATITUDE_NOT_AVAILABLE: i64 = 91 * 600_000;

/// 28-bit longitude descriptor, ±180°.
pub const fn longitude_field(id: &'static str, name: &'static str) -> FieldDescriptor {
    FieldDescriptor {
        id,
        name,
        kind: FieldKind::Coordinate,
        bits_length: 28,
        scale: Some(COORDINATE_SCALE),
        not_available: Some(LONGITUDE_NOT_AVAILABLE),
        limit: Some(180.0),
    }
}

/// 27-bit latitude descriptor, ±90°.
pub const fn latitude_field(id: &'static str, name: &'static str) -> FieldDescriptor {
    FieldDescriptor {
        id,
        name,
        kind: FieldKind::Coordinate,
        bits_length: 27,
        scale: Some(COORDINATE_SCALE),
        not_available: Some(LATITUDE_NOT_AVAILABLE),
        limit: Some(90.0),
    }
}

/// Physical value to raw integer, rounding half away from zero.
pub fn scale_to_raw(value: f64, scale: f64) -> i64 {
    let scaled = value * scale;
    // `as` truncates toward zero (and saturates), so shift by half first.
    if scaled >= 0.0 {
        (scaled + 0.5) as i64
    } else {
        (scaled - 0.5) as i64
    }
}

/// Raw integer to physical value.
pub fn raw_to_scaled(raw: i64, scale: f64) -> f64 {
    raw as f64 / scale
}

#[inline]
fn width(desc: &FieldDescriptor) -> u8 {
    desc.bits_length as u8
}

fn out_of_range(desc: &'static FieldDescriptor, value: f64) -> SerializationError {
    SerializationError::ValueOutOfRange {
        field_id: desc.id,
        value,
    }
}

//==================================================================================COORDINATES
/// Write a latitude/longitude. `None` writes the "not available" sentinel.
pub fn write_coordinate(
    writer: &mut BitWriter,
    desc: &'static FieldDescriptor,
    value: Option<f64>,
) -> Result<(), SerializationError> {
    let raw = match value {
        None => sentinel(desc)?,
        Some(degrees) => {
            // Written so that NaN fails the check as well.
            if desc.limit.is_some_and(|limit| !(-limit..=limit).contains(&degrees)) {
                return Err(out_of_range(desc, degrees));
            }
            scale_to_raw(degrees, desc.scale.unwrap_or(1.0))
        }
    };
    writer.pack_signed(raw, width(desc))?;
    Ok(())
}

/// Read a latitude/longitude. The sentinel maps to `None`; other values are
/// returned even when outside the nominal range.
pub fn read_coordinate(
    reader: &mut BitReader,
    desc: &'static FieldDescriptor,
) -> Result<Option<f64>, DeserializationError> {
    let raw = reader.unpack_signed(width(desc))?;
    if desc.not_available == Some(raw) {
        return Ok(None);
    }
    Ok(Some(raw_to_scaled(raw, desc.scale.unwrap_or(1.0))))
}

//==================================================================================SCALED
/// Write an unsigned scaled quantity. `None` writes the sentinel.
pub fn write_scaled(
    writer: &mut BitWriter,
    desc: &'static FieldDescriptor,
    value: Option<f64>,
) -> Result<(), SerializationError> {
    let raw = match value {
        None => sentinel(desc)?,
        Some(quantity) => {
            if !(quantity >= 0.0) || desc.limit.is_some_and(|limit| quantity > limit) {
                return Err(out_of_range(desc, quantity));
            }
            let raw = scale_to_raw(quantity, desc.scale.unwrap_or(1.0));
            // A regular value may not collide with the sentinel.
            if desc.not_available == Some(raw) {
                return Err(out_of_range(desc, quantity));
            }
            raw
        }
    };
    writer.pack_unsigned(raw as u64, width(desc))?;
    Ok(())
}

/// Read an unsigned scaled quantity; the sentinel maps to `None`.
pub fn read_scaled(
    reader: &mut BitReader,
    desc: &'static FieldDescriptor,
) -> Result<Option<f64>, DeserializationError> {
    let raw = reader.unpack_unsigned(width(desc))? as i64;
    if desc.not_available == Some(raw) {
        return Ok(None);
    }
    Ok(Some(raw_to_scaled(raw, desc.scale.unwrap_or(1.0))))
}

fn sentinel(desc: &'static FieldDescriptor) -> Result<i64, SerializationError> {
    desc.not_available.ok_or(SerializationError::CodecError {
        source: CodecError::DataTypeMismatch {
            value: FieldValue::Float(None),
            func: desc.id,
        },
    })
}

//==================================================================================LOOKUPS
/// Read an enumerated code. Never fails on unknown values: the raw code is
/// handed to the domain type, which keeps it as `Unknown(raw)`.
pub fn read_lookup(
    reader: &mut BitReader,
    desc: &'static FieldDescriptor,
) -> Result<u64, DeserializationError> {
    Ok(reader.unpack_unsigned(width(desc))?)
}

//==================================================================================TEXT
/// Write a fixed-length text field (padded or truncated to its width).
pub fn write_text(
    writer: &mut BitWriter,
    desc: &'static FieldDescriptor,
    value: &str,
) -> Result<(), SerializationError> {
    let bits = encode_text_field(value, desc.char_count())?;
    writer.pack_bits(&bits);
    Ok(())
}

/// Read a fixed-length text field, trimming `@` padding.
pub fn read_text(
    reader: &mut BitReader,
    desc: &'static FieldDescriptor,
) -> Result<String, DeserializationError> {
    let chars = desc.char_count();
    let bits = reader.unpack_bits(chars * CHAR_BITS)?;
    Ok(decode_text_field(&bits, chars)?)
}

/// Write a variable-length text field: exactly one six-bit group per character.
pub fn write_trailing_text(
    writer: &mut BitWriter,
    desc: &'static FieldDescriptor,
    value: &str,
) -> Result<(), SerializationError> {
    let chars = value.chars().count();
    let max_chars = desc.char_count();
    if chars > max_chars {
        return Err(SerializationError::TextTooLong {
            field_id: desc.id,
            chars,
            max_chars,
        });
    }
    let bits = encode_text_field(value, chars)?;
    writer.pack_bits(&bits);
    Ok(())
}

/// Read every complete six-bit group left; fewer than six trailing bits are fill.
/// More groups than the field holds is an error, not a longer string.
pub fn read_trailing_text(
    reader: &mut BitReader,
    desc: &'static FieldDescriptor,
) -> Result<String, DeserializationError> {
    let chars = reader.remaining() / CHAR_BITS;
    let max_chars = desc.char_count();
    if chars > max_chars {
        return Err(DeserializationError::TextTooLong {
            field_id: desc.id,
            chars,
            max_chars,
        });
    }
    let bits = reader.unpack_bits(chars * CHAR_BITS)?;
    let text = decode_text_field(&bits, chars)?;
    reader.advance(reader.remaining())?;
    Ok(text)
}

//==================================================================================BINARY
/// Write a trailing raw bit run, checking its alignment unit.
pub fn write_binary(
    writer: &mut BitWriter,
    desc: &'static FieldDescriptor,
    value: &Bits,
) -> Result<(), SerializationError> {
    let unit = desc.bits_length as usize;
    if unit > 0 && value.len() % unit != 0 {
        return Err(SerializationError::InvalidFieldBits {
            field_name: desc.id,
        });
    }
    writer.pack_bits(value);
    Ok(())
}

/// Read all remaining bits as a raw run, checking its alignment unit.
pub fn read_binary(
    reader: &mut BitReader,
    desc: &'static FieldDescriptor,
) -> Result<Bits, DeserializationError> {
    let unit = desc.bits_length as usize;
    if unit > 0 && reader.remaining() % unit != 0 {
        return Err(DeserializationError::InvalidFieldBits {
            field_name: desc.id,
        });
    }
    Ok(reader.unpack_remaining())
}

//==================================================================================TESTS
#[cfg(test)]
#[path = "tests.rs"]
mod tests;
