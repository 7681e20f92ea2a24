//! Public traits exposed by the codec engine. They decouple the message and
//! ASM structures from the serialization/deserialization logic and provide
//! a uniform API to upper layers.
use crate::core::{ApplicationId, AsmDescriptor, FieldValue, MessageDescriptor};
use crate::error::{DeserializationError, SerializationError};
use crate::infra::codec::bits::{BitReader, BitWriter, Bits, PaddedBits};

//==================================================================================MESSAGE_DATA
/// Implemented by every AIS message variant.
/// `DESCRIPTOR.fields` starts with the 6-bit message type.
pub trait MessageData: Sized + Default + FieldAccess {
    const DESCRIPTOR: MessageDescriptor;
}

//==================================================================================ASM_DATA
/// Implemented by every interpreted ASM application.
/// Acts as a bridge between its static descriptor and the interpretation engine.
pub trait AsmData: Sized + Default + FieldAccess {
    /// Layout of the binary data following DAC/FI.
    const DESCRIPTOR: AsmDescriptor;

    /// DAC/FI pair this instance is sent under.
    fn application_id(&self) -> ApplicationId;

    /// Record the DAC/FI pair read from the wire. Only variants registered
    /// under several DACs need to keep it.
    fn assign_application_id(&mut self, _id: ApplicationId) {}
}

//==================================================================================FIELD_ACCESS
/// Lets the engine reach a structure's fields by their `'static str`
/// identifier without knowing the concrete type.
///
/// ```rust, ignore
/// let mut report = AtonReport::default();
/// report.field_mut("mmsi", FieldValue::U32(992_351_000));
/// assert_eq!(report.field("mmsi"), Some(FieldValue::U32(992_351_000)));
/// ```
pub trait FieldAccess {
    /// Read the value of a field.
    ///
    /// Returns `Some(FieldValue)` if the field exists, `None` otherwise.
    fn field(&self, id: &'static str) -> Option<FieldValue>;

    /// Write the value of a field.
    ///
    /// Returns `Some(())` on success, `None` if the field does not exist or the
    /// value has the wrong shape.
    fn field_mut(&mut self, id: &'static str, value: FieldValue) -> Option<()>;
}

//==================================================================================TO_BITS
/// Serialize a structure into a bitstream.
pub trait ToBits {
    /// Append the structure's fields to `writer`.
    fn write_bits(&self, writer: &mut BitWriter) -> Result<(), SerializationError>;

    /// Serialize into a fresh buffer, padded to a character boundary.
    fn encode(&self) -> Result<PaddedBits, SerializationError> {
        let mut writer = BitWriter::new();
        self.write_bits(&mut writer)?;
        Ok(writer.finalize())
    }
}

//==================================================================================FROM_BITS
/// Rebuild a structure from a bitstream.
pub trait FromBits: Sized {
    /// Consume the structure's fields from `reader`.
    fn read_bits(reader: &mut BitReader) -> Result<Self, DeserializationError>;

    /// Deserialize from the start of `bits`.
    fn decode(bits: &Bits) -> Result<Self, DeserializationError> {
        Self::read_bits(&mut BitReader::new(bits))
    }
}
