//! Defines the "data contract" between the static message/ASM descriptors
//! and the serialization/deserialization engine (the interpreter).
//!
//! Every message and ASM payload exposes a descriptor built from these types.
//! The `engine` module walks those descriptors to pack or unpack bitstreams;
//! bit widths, signedness, scale factors and sentinels all live here as
//! constants, never inferred from Rust struct layout.
use alloc::string::String;

use crate::infra::codec::bits::Bits;

/// Semantic type of a field within an ITU-R M.1371 message.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FieldKind {
    /// Plain unsigned integer (message type, MMSI, dimensions...).
    Unsigned,
    /// Two's-complement signed integer.
    Signed,
    /// Single-bit boolean flag.
    Flag,
    /// Unsigned code from a closed table. Unknown codes are kept as raw values.
    Lookup,
    /// Unsigned fixed-point quantity with `scale` LSBs per unit and an
    /// optional "not available" raw sentinel.
    Scaled,
    /// Signed fixed-point latitude/longitude with a sentinel for "not available".
    Coordinate,
    /// Fixed-length six-bit text, right-padded with `@`.
    Text,
    /// Variable-length six-bit text consuming the remaining bits. `bits_length`
    /// carries the maximum width.
    TrailingText,
    /// Raw bit run consuming the remaining bits. `bits_length` carries the
    /// alignment unit (0 = none).
    Binary,
    /// Spare/reserved bits: zero on write, skipped on read.
    Spare,
}

/// Descriptor for a single field.
#[derive(Debug)]
pub struct FieldDescriptor {
    /// 1. Field identifier used by `FieldAccess`.
    pub id: &'static str,
    /// 2. Human-readable name.
    pub name: &'static str,
    /// 3. Semantic type for the field.
    pub kind: FieldKind,
    /// 4. Field bit length (maximum or alignment unit for trailing kinds).
    pub bits_length: u16,
    /// 5. Raw LSBs per physical unit for `Scaled` and `Coordinate`.
    pub scale: Option<f64>,
    /// 6. Raw value meaning "not available".
    pub not_available: Option<i64>,
    /// 7. Largest admissible physical magnitude (e.g. 90° for latitude).
    pub limit: Option<f64>,
}

impl FieldDescriptor {
    /// Fixed-width field without scaling or sentinel.
    pub const fn plain(id: &'static str, name: &'static str, kind: FieldKind, bits: u16) -> Self {
        Self {
            id,
            name,
            kind,
            bits_length: bits,
            scale: None,
            not_available: None,
            limit: None,
        }
    }

    /// Spare bits.
    pub const fn spare(bits: u16) -> Self {
        Self::plain("spare", "Spare", FieldKind::Spare, bits)
    }

    /// Number of six-bit characters a text field holds.
    pub const fn char_count(&self) -> usize {
        self.bits_length as usize / 6
    }
}

/// Descriptor for a whole AIS message layout.
#[derive(Debug)]
pub struct MessageDescriptor {
    /// 1. Message type (6-bit leading field).
    pub id: u8,
    /// 2. Message name (diagnostics).
    pub name: &'static str,
    /// 3. Ordered list of field descriptors.
    pub fields: &'static [FieldDescriptor],
}

/// Descriptor for the binary data section of an Application Specific Message.
#[derive(Debug)]
pub struct AsmDescriptor {
    /// 1. Designated Area Codes sharing this layout.
    pub dacs: &'static [u16],
    /// 2. Function Identifier.
    pub fi: u8,
    /// 3. Application name (diagnostics).
    pub name: &'static str,
    /// 4. Ordered list of field descriptors following DAC/FI.
    pub fields: &'static [FieldDescriptor],
}

impl AsmDescriptor {
    /// Whether this layout is registered for the given application identifier.
    pub fn matches(&self, id: ApplicationId) -> bool {
        self.fi == id.fi && self.dacs.contains(&id.dac)
    }

    /// `true` when the last field takes whatever bits remain.
    pub fn is_open_ended(&self) -> bool {
        self.fields
            .iter()
            .any(|desc| matches!(desc.kind, FieldKind::TrailingText | FieldKind::Binary))
    }
}

/// Designated Area Code / Function Identifier pair (10 + 6 bits).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ApplicationId {
    pub dac: u16,
    pub fi: u8,
}

impl ApplicationId {
    /// Width of the DAC field.
    pub const DAC_BITS: u8 = 10;
    /// Width of the FI field.
    pub const FI_BITS: u8 = 6;

    pub const fn new(dac: u16, fi: u8) -> Self {
        Self { dac, fi }
    }
}

/// Dynamic value exchanged between the engine and domain structures.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    U64(u64),
    U32(u32),
    U16(u16),
    U8(u8),
    I64(i64),
    I32(i32),
    Bool(bool),
    /// Scaled quantity; `None` maps to the field's sentinel.
    Float(Option<f64>),
    Text(String),
    Bits(Bits),
}

impl FieldValue {
    /// Widen any unsigned variant.
    pub fn as_u64(&self) -> Option<u64> {
        match *self {
            FieldValue::U64(v) => Some(v),
            FieldValue::U32(v) => Some(v as u64),
            FieldValue::U16(v) => Some(v as u64),
            FieldValue::U8(v) => Some(v as u64),
            _ => None,
        }
    }

    /// Widen any signed variant.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            FieldValue::I64(v) => Some(v),
            FieldValue::I32(v) => Some(v as i64),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            FieldValue::Bool(v) => Some(v),
            _ => None,
        }
    }

    /// Scaled value; the inner `None` means "not available".
    pub fn as_float(&self) -> Option<Option<f64>> {
        match *self {
            FieldValue::Float(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_bits(&self) -> Option<&Bits> {
        match self {
            FieldValue::Bits(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_bits(self) -> Option<Bits> {
        match self {
            FieldValue::Bits(v) => Some(v),
            _ => None,
        }
    }
}
