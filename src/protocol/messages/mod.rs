//! AIS message variants handled by the codec and the tagged union the driver
//! dispatches on. Every variant starts with the same prefix: message type,
//! repeat indicator and source MMSI.
use core::fmt;

use crate::core::{FieldDescriptor, FieldKind};
use crate::error::{DeserializationError, SerializationError};
use crate::infra::codec::{
    bits::{BitReader, BitWriter},
    engine::{deserialize_into, serialize},
    traits::{FromBits, MessageData, ToBits},
};

mod aton_report;
mod binary_broadcast;

pub use aton_report::{AtonReport, Dimensions};
pub use binary_broadcast::BinaryBroadcastMessage;

/// Width of the leading message type field.
pub const MESSAGE_TYPE_BITS: u8 = 6;
/// Largest MMSI the 30-bit source field holds.
pub const MMSI_MAX: u32 = (1 << 30) - 1;

pub(crate) const MESSAGE_TYPE: FieldDescriptor =
    FieldDescriptor::plain("msg_type", "Message Type", FieldKind::Unsigned, 6);
pub(crate) const REPEAT_INDICATOR: FieldDescriptor =
    FieldDescriptor::plain("repeat_indicator", "Repeat Indicator", FieldKind::Unsigned, 2);
pub(crate) const MMSI: FieldDescriptor =
    FieldDescriptor::plain("mmsi", "Source MMSI", FieldKind::Unsigned, 30);

//==================================================================================AIS_MESSAGE
/// Any AIS message this codec handles, selected by its leading type field.
#[derive(Debug, Clone, PartialEq)]
pub enum AisMessage {
    /// Message 8.
    BinaryBroadcast(BinaryBroadcastMessage),
    /// Message 21.
    AtonReport(AtonReport),
}

impl AisMessage {
    pub fn message_type(&self) -> u8 {
        match self {
            AisMessage::BinaryBroadcast(_) => BinaryBroadcastMessage::DESCRIPTOR.id,
            AisMessage::AtonReport(_) => AtonReport::DESCRIPTOR.id,
        }
    }

    pub fn mmsi(&self) -> u32 {
        match self {
            AisMessage::BinaryBroadcast(msg) => msg.mmsi,
            AisMessage::AtonReport(msg) => msg.mmsi,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AisMessage::BinaryBroadcast(_) => BinaryBroadcastMessage::DESCRIPTOR.name,
            AisMessage::AtonReport(_) => AtonReport::DESCRIPTOR.name,
        }
    }
}

impl ToBits for AisMessage {
    fn write_bits(&self, writer: &mut BitWriter) -> Result<(), SerializationError> {
        match self {
            AisMessage::BinaryBroadcast(msg) => msg.write_bits(writer),
            AisMessage::AtonReport(msg) => msg.write_bits(writer),
        }
    }
}

impl FromBits for AisMessage {
    fn read_bits(reader: &mut BitReader) -> Result<Self, DeserializationError> {
        let msg_type = reader.peek_unsigned(MESSAGE_TYPE_BITS)? as u8;

        #[cfg(feature = "defmt")]
        defmt::trace!("AIS message type {=u8}", msg_type);

        match msg_type {
            8 => Ok(AisMessage::BinaryBroadcast(BinaryBroadcastMessage::read_bits(
                reader,
            )?)),
            21 => Ok(AisMessage::AtonReport(AtonReport::read_bits(reader)?)),
            _ => Err(DeserializationError::UnknownMessageType { msg_type }),
        }
    }
}

impl From<BinaryBroadcastMessage> for AisMessage {
    fn from(msg: BinaryBroadcastMessage) -> Self {
        AisMessage::BinaryBroadcast(msg)
    }
}

impl From<AtonReport> for AisMessage {
    fn from(msg: AtonReport) -> Self {
        AisMessage::AtonReport(msg)
    }
}

impl fmt::Display for AisMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AisMessage::BinaryBroadcast(msg) => fmt::Display::fmt(msg, f),
            AisMessage::AtonReport(msg) => fmt::Display::fmt(msg, f),
        }
    }
}

//==================================================================================HELPERS
/// Fixed fields of a message, type field included.
fn write_message<T: MessageData>(msg: &T, writer: &mut BitWriter) -> Result<(), SerializationError> {
    serialize(msg, writer, T::DESCRIPTOR.fields)?;
    Ok(())
}

/// Check the type field, then read the remaining fixed fields.
fn read_message<T: MessageData>(reader: &mut BitReader) -> Result<T, DeserializationError> {
    let msg_type = reader.read_u8(MESSAGE_TYPE_BITS)?;
    if msg_type != T::DESCRIPTOR.id {
        return Err(DeserializationError::UnknownMessageType { msg_type });
    }

    let fields = T::DESCRIPTOR.fields;
    let mut msg = T::default();
    deserialize_into(&mut msg, reader, &fields[1..])?;
    Ok(msg)
}

//==================================================================================TESTS
#[cfg(test)]
#[path = "tests.rs"]
mod tests;
