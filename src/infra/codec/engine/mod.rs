//! Generic serialization/deserialization engine driven by static field
//! descriptors. It controls the bit-level reader/writer and turns dynamic
//! `FieldValue`s into strongly typed message and ASM structures.
use super::bits::{BitReader, BitWriter, Bits};
use super::fields;
use super::traits::FieldAccess;
use crate::core::{FieldDescriptor, FieldKind, FieldValue};
use crate::error::{CodecError, DeserializationError, SerializationError};

/// Deserializes fields from `reader` into `instance`, in descriptor order.
///
/// # Parameters
/// * `instance` – object to populate field by field
/// * `reader` – cursor positioned on the first field
/// * `fields` – static descriptors that define the layout
///
/// # Return value
/// Returns `Ok(())` when every field is read and assigned. Decoding stops at
/// the first field that cannot be read.
pub fn deserialize_into<T: FieldAccess>(
    instance: &mut T,
    reader: &mut BitReader,
    fields: &'static [FieldDescriptor],
) -> Result<(), DeserializationError> {
    for field_desc in fields {
        if let Some(value) = read_field_value(reader, field_desc)? {
            instance
                .field_mut(field_desc.id, value)
                .ok_or(DeserializationError::FieldAssignmentFailed {
                    desc: field_desc.id,
                })?;
        }
    }
    Ok(())
}

/// Serializes `instance` into `writer`, in descriptor order.
///
/// # Parameters
/// * `instance` – domain instance to convert
/// * `writer` – append-only bit writer
/// * `fields` – static descriptors that define the layout
///
/// # Return value
/// Number of bits appended. On error the writer may hold a partial message;
/// callers discard it.
pub fn serialize<T: FieldAccess>(
    instance: &T,
    writer: &mut BitWriter,
    fields: &'static [FieldDescriptor],
) -> Result<usize, SerializationError> {
    let start = writer.bit_cursor();

    for field_desc in fields {
        if field_desc.kind == FieldKind::Spare {
            writer.pack_zeros(field_desc.bits_length as usize);
            continue;
        }

        let value = instance
            .field(field_desc.id)
            .ok_or(SerializationError::FieldNotFound {
                field_id: field_desc.id,
            })?;
        write_field(writer, field_desc, &value)?;
    }

    Ok(writer.bit_cursor() - start)
}

/// Total fixed width of a layout; trailing kinds count as zero.
#[cfg(test)]
pub(crate) fn fixed_bits(fields: &'static [FieldDescriptor]) -> usize {
    fields
        .iter()
        .filter(|desc| !matches!(desc.kind, FieldKind::TrailingText | FieldKind::Binary))
        .map(|desc| desc.bits_length as usize)
        .sum()
}

/// Shared helper to read a single field, applying signedness, scaling,
/// sentinels and text rules.
fn read_field_value(
    reader: &mut BitReader,
    field_desc: &'static FieldDescriptor,
) -> Result<Option<FieldValue>, DeserializationError> {
    let width = field_desc.bits_length as u8;

    let value = match field_desc.kind {
        FieldKind::Unsigned | FieldKind::Lookup => {
            let raw_val = if field_desc.kind == FieldKind::Lookup {
                fields::read_lookup(reader, field_desc)?
            } else {
                reader.unpack_unsigned(width)?
            };

            match field_desc.bits_length {
                1..=8 => FieldValue::U8(raw_val as u8),
                9..=16 => FieldValue::U16(raw_val as u16),
                17..=32 => FieldValue::U32(raw_val as u32),
                _ => FieldValue::U64(raw_val),
            }
        }

        FieldKind::Signed => {
            let signed_val = reader.unpack_signed(width)?;
            match field_desc.bits_length {
                1..=32 => FieldValue::I32(signed_val as i32),
                _ => FieldValue::I64(signed_val),
            }
        }

        FieldKind::Flag => FieldValue::Bool(reader.unpack_bool()?),

        FieldKind::Scaled => FieldValue::Float(fields::read_scaled(reader, field_desc)?),

        FieldKind::Coordinate => FieldValue::Float(fields::read_coordinate(reader, field_desc)?),

        FieldKind::Text => FieldValue::Text(fields::read_text(reader, field_desc)?),

        FieldKind::TrailingText => FieldValue::Text(fields::read_trailing_text(reader, field_desc)?),

        FieldKind::Binary => FieldValue::Bits(fields::read_binary(reader, field_desc)?),

        FieldKind::Spare => {
            reader.advance(field_desc.bits_length as usize)?;
            return Ok(None);
        }
    };

    Ok(Some(value))
}

/// Private helper that writes a single value according to its descriptor.
fn write_field(
    writer: &mut BitWriter,
    field_desc: &'static FieldDescriptor,
    value: &FieldValue,
) -> Result<(), SerializationError> {
    let width = field_desc.bits_length as u8;

    match field_desc.kind {
        FieldKind::Unsigned | FieldKind::Lookup => {
            writer.pack_unsigned(value_to_u64(value)?, width)?;
        }
        FieldKind::Signed => {
            writer.pack_signed(value_to_i64(value)?, width)?;
        }
        FieldKind::Flag => {
            let flag = value.as_bool().ok_or_else(|| mismatch(value, "write_field // Flag"))?;
            writer.pack_bool(flag);
        }
        FieldKind::Scaled => {
            fields::write_scaled(writer, field_desc, value_to_float(value)?)?;
        }
        FieldKind::Coordinate => {
            fields::write_coordinate(writer, field_desc, value_to_float(value)?)?;
        }
        FieldKind::Text => {
            fields::write_text(writer, field_desc, value_to_str(value)?)?;
        }
        FieldKind::TrailingText => {
            fields::write_trailing_text(writer, field_desc, value_to_str(value)?)?;
        }
        FieldKind::Binary => {
            fields::write_binary(writer, field_desc, value_to_bits(value)?)?;
        }
        FieldKind::Spare => writer.pack_zeros(field_desc.bits_length as usize),
    }
    Ok(())
}

fn mismatch(value: &FieldValue, func: &'static str) -> CodecError {
    CodecError::DataTypeMismatch {
        value: value.clone(),
        func,
    }
}

/// Converts a `FieldValue` into `u64`.
/// Covers unsigned variants; anything else indicates a misuse of the descriptor.
fn value_to_u64(value: &FieldValue) -> Result<u64, CodecError> {
    value.as_u64().ok_or_else(|| mismatch(value, "value_to_u64"))
}

/// Converts a `FieldValue` into `i64`, widening smaller signed variants.
fn value_to_i64(value: &FieldValue) -> Result<i64, CodecError> {
    value.as_i64().ok_or_else(|| mismatch(value, "value_to_i64"))
}

fn value_to_float(value: &FieldValue) -> Result<Option<f64>, CodecError> {
    value.as_float().ok_or_else(|| mismatch(value, "value_to_float"))
}

fn value_to_str(value: &FieldValue) -> Result<&str, CodecError> {
    value.as_text().ok_or_else(|| mismatch(value, "value_to_str"))
}

fn value_to_bits(value: &FieldValue) -> Result<&Bits, CodecError> {
    value.as_bits().ok_or_else(|| mismatch(value, "value_to_bits"))
}

//==================================================================================TESTS
