use core::fmt;

use super::{read_message, write_message, MESSAGE_TYPE, MMSI, MMSI_MAX, REPEAT_INDICATOR};
use crate::core::{FieldDescriptor, FieldValue, MessageDescriptor};
use crate::error::{DeserializationError, SerializationError};
use crate::infra::codec::{
    bits::{BitReader, BitWriter},
    traits::{FieldAccess, FromBits, MessageData, ToBits},
};
use crate::protocol::asm::{AsmPayload, OpaquePayload};

/// AIS message 8: binary broadcast. The binary data section is an ASM
/// payload (DAC, FI, application data) running to the end of the message.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryBroadcastMessage {
    pub repeat_indicator: u8,
    /// Source station.
    pub mmsi: u32,
    pub payload: AsmPayload,
}

impl BinaryBroadcastMessage {
    pub fn new(mmsi: u32, payload: AsmPayload) -> Self {
        Self {
            repeat_indicator: 0,
            mmsi,
            payload,
        }
    }

    /// Re-emit a VDES ASM as an AIS message 8. VDES source IDs are 32 bits
    /// wide; the two most significant bits are dropped.
    pub fn from_vdes_asm(source_id: u32, payload: AsmPayload) -> Self {
        Self::new(source_id & MMSI_MAX, payload)
    }
}

impl Default for BinaryBroadcastMessage {
    fn default() -> Self {
        Self::new(0, AsmPayload::Opaque(OpaquePayload::default()))
    }
}

impl MessageData for BinaryBroadcastMessage {
    const DESCRIPTOR: MessageDescriptor = MessageDescriptor {
        id: 8,
        name: "Binary broadcast message",
        fields: &[
            MESSAGE_TYPE,
            REPEAT_INDICATOR,
            MMSI,
            FieldDescriptor::spare(2),
        ],
    };
}

impl FieldAccess for BinaryBroadcastMessage {
    fn field(&self, id: &'static str) -> Option<FieldValue> {
        match id {
            "msg_type" => Some(FieldValue::U8(Self::DESCRIPTOR.id)),
            "repeat_indicator" => Some(FieldValue::U8(self.repeat_indicator)),
            "mmsi" => Some(FieldValue::U32(self.mmsi)),
            _ => None,
        }
    }

    fn field_mut(&mut self, id: &'static str, value: FieldValue) -> Option<()> {
        match (id, value) {
            ("repeat_indicator", FieldValue::U8(v)) => self.repeat_indicator = v,
            ("mmsi", FieldValue::U32(v)) => self.mmsi = v,
            _ => return None,
        }
        Some(())
    }
}

impl ToBits for BinaryBroadcastMessage {
    fn write_bits(&self, writer: &mut BitWriter) -> Result<(), SerializationError> {
        write_message(self, writer)?;
        self.payload.write_bits(writer)
    }
}

impl FromBits for BinaryBroadcastMessage {
    fn read_bits(reader: &mut BitReader) -> Result<Self, DeserializationError> {
        let mut msg: Self = read_message(reader)?;
        msg.payload = AsmPayload::read_bits(reader)?;
        Ok(msg)
    }
}

impl fmt::Display for BinaryBroadcastMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "AIS Message 8: Binary Broadcast Message")?;
        writeln!(f, "Source ID: {}", self.mmsi)?;
        if let Some(name) = self.payload.name() {
            writeln!(f, "Application: {}", name)?;
        }
        write!(f, "Binary Data: {}", self.payload)
    }
}
