//! Error definitions shared across library modules.
//! Each type models a specific failure scenario (bit packing, six-bit text,
//! armoring, serialization/deserialization of messages and ASM payloads).
use crate::core::FieldValue;
use thiserror_no_std::Error;

//==================================================================================BITWRITER_ERRORS
#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors raised while packing values into a bit buffer.
pub enum BitWriterError {
    /// Unsigned value does not fit in the requested width.
    #[error("Unsigned value {value} does not fit in {width} bits")]
    UnsignedOutOfRange { value: u64, width: u8 },
    /// Signed value falls outside the two's-complement range of the width.
    #[error("Signed value {value} does not fit in {width} bits")]
    SignedOutOfRange { value: i64, width: u8 },
    /// Field is too large for the provided type.
    #[error("Cannot write more than {max} bits. Requested: {asked}")]
    TooLongForType { max: u8, asked: u8 },
}

//==================================================================================BITREADER_ERRORS
#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors raised during bitwise buffer reads.
pub enum BitReaderError {
    /// Attempted to read past the end of the buffer.
    #[error("Attempted to read out of bounds -> asked: {asked}, available: {available}")]
    OutOfBounds { asked: usize, available: usize },
    /// Requested more bits than the target type can hold.
    #[error("Cannot read more than {max} bits. Requested: {asked}")]
    TooLongForType { max: u8, asked: u8 },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// A textual bit literal contained something other than `0`, `1` or `_`.
pub enum BitStringError {
    #[error("Invalid bit character {ch:?} at position {position}")]
    InvalidBitChar { ch: char, position: usize },
}

//==================================================================================SIXBIT_ERRORS
#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Failures of the six-bit character table and of the armoring layer.
pub enum SixBitError {
    /// Character outside the restricted six-bit alphabet.
    #[error("Unsupported character {ch:?} for six-bit text")]
    UnsupportedCharacter { ch: char },
    /// Code outside the 0-63 range of the table.
    #[error("Invalid six-bit code {code}")]
    InvalidCode { code: u8 },
    /// Armored payload contains a character outside the transport alphabet.
    #[error("Invalid armored character {ch:?} at position {position}")]
    InvalidArmoredCharacter { ch: char, position: usize },
    /// Declared bit length is incompatible with the number of armored characters.
    #[error("Bit length {bit_len} does not match {chars} armored characters")]
    BitLengthMismatch { bit_len: usize, chars: usize },
    /// Not enough bits to hold the requested number of characters.
    #[error("Text field needs {needed} bits, only {available} available")]
    TruncatedText { needed: usize, available: usize },
}

//================================================================================CODEC_ERROR
#[derive(Debug, Error, Clone, PartialEq)]
/// Shared error abstraction for conversion helpers.
pub enum CodecError {
    /// Value type is incompatible with the descriptor.
    #[error("Data type mismatch for value {value:?}, function: {func}")]
    DataTypeMismatch { value: FieldValue, func: &'static str },
}

#[derive(Debug, Error, Clone, PartialEq)]
/// Issues encountered while serializing a message or ASM payload.
pub enum SerializationError {
    /// Failed while packing bits (value does not fit its width).
    #[error("BitWrite error: {err}")]
    BitWriteError { err: BitWriterError },
    /// Text could not be mapped onto the six-bit alphabet.
    #[error("Six-bit error: {err}")]
    SixBitError { err: SixBitError },
    /// Value lies outside the domain of its field (e.g. latitude beyond 90°).
    #[error("Value {value} out of range for field {field_id}")]
    ValueOutOfRange { field_id: &'static str, value: f64 },
    /// Variable-length text exceeds the maximum character count of its field.
    #[error("Text for {field_id} holds {chars} characters, maximum is {max_chars}")]
    TextTooLong {
        field_id: &'static str,
        chars: usize,
        max_chars: usize,
    },
    /// Encoded message exceeds the configured upper bound.
    #[error("Message needs {bits} bits, configured maximum is {max}")]
    MessageTooLong { bits: usize, max: usize },
    /// Expected field was missing from the domain structure.
    #[error("Field {field_id} not found")]
    FieldNotFound { field_id: &'static str },
    /// Binary data is not a whole number of its declared unit.
    #[error("Invalid field bit length for {field_name}")]
    InvalidFieldBits { field_name: &'static str },
    /// ASM variant carries a DAC/FI pair its layout is not registered for.
    #[error("Invalid application identifier DAC {dac} FI {fi}")]
    InvalidApplicationId { dac: u16, fi: u8 },
    /// Generic conversion error bubbling up from the codec module.
    #[error("Codec Error: {source}")]
    CodecError { source: CodecError },
}

#[derive(Debug, Error, Clone, PartialEq)]
/// Errors raised while deserializing a bit buffer into a message.
pub enum DeserializationError {
    /// Leading type field names a message this codec does not handle.
    #[error("Unknown message type {msg_type}")]
    UnknownMessageType { msg_type: u8 },
    /// Input exceeds the configured upper bound.
    #[error("Message holds {bits} bits, configured maximum is {max}")]
    MessageTooLong { bits: usize, max: usize },
    /// Could not assign value into the target structure.
    #[error("Field assignment failed {desc}")]
    FieldAssignmentFailed { desc: &'static str },
    /// Field bits are not a whole number of the declared unit.
    #[error("Invalid field bit length for {field_name}")]
    InvalidFieldBits { field_name: &'static str },
    /// Variable-length text holds more characters than its field allows.
    #[error("Text for {field_id} holds {chars} characters, maximum is {max_chars}")]
    TextTooLong {
        field_id: &'static str,
        chars: usize,
        max_chars: usize,
    },
    /// Payload DAC/FI does not belong to the requested ASM variant.
    #[error("Invalid application identifier DAC {dac} FI {fi}")]
    InvalidApplicationId { dac: u16, fi: u8 },
    /// Bit-level access on the buffer failed (truncated data).
    #[error("BitReader error: {err}")]
    BitReaderError { err: BitReaderError },
    /// Armored text or six-bit characters could not be decoded.
    #[error("Six-bit error: {err}")]
    SixBitError { err: SixBitError },
    /// Error bubbled up from the generic codec engine.
    #[error("Codec Error: {source}")]
    CodecError { source: CodecError },
}

//==================================================================================CONVERSIONS
impl From<BitWriterError> for SerializationError {
    fn from(err: BitWriterError) -> Self {
        Self::BitWriteError { err }
    }
}

impl From<SixBitError> for SerializationError {
    fn from(err: SixBitError) -> Self {
        Self::SixBitError { err }
    }
}

impl From<CodecError> for SerializationError {
    fn from(source: CodecError) -> Self {
        Self::CodecError { source }
    }
}

impl From<BitReaderError> for DeserializationError {
    fn from(err: BitReaderError) -> Self {
        Self::BitReaderError { err }
    }
}

impl From<SixBitError> for DeserializationError {
    fn from(err: SixBitError) -> Self {
        Self::SixBitError { err }
    }
}

impl From<CodecError> for DeserializationError {
    fn from(source: CodecError) -> Self {
        Self::CodecError { source }
    }
}

//==================================================================================KINDS
impl SerializationError {
    /// `true` when a value did not fit its field, at bit level or at domain level.
    pub fn is_range_error(&self) -> bool {
        matches!(
            self,
            Self::BitWriteError {
                err: BitWriterError::UnsignedOutOfRange { .. }
                    | BitWriterError::SignedOutOfRange { .. }
            } | Self::ValueOutOfRange { .. }
        )
    }
}

impl DeserializationError {
    /// `true` when decoding stopped because fewer bits remained than a field requires.
    pub fn is_truncated(&self) -> bool {
        matches!(
            self,
            Self::BitReaderError {
                err: BitReaderError::OutOfBounds { .. }
            } | Self::SixBitError {
                err: SixBitError::TruncatedText { .. }
            }
        )
    }
}
