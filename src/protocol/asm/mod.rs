//! Application Specific Message payloads: the binary data section of an AIS
//! message 8 (or of a VDES ASM), identified by its DAC/FI pair.
//!
//! Known applications are listed in a static registry keyed on DAC/FI. Any
//! other pair decodes to [`OpaquePayload`], so vendor and future applications
//! stay transportable even though they are not interpreted.
use core::fmt;

use crate::core::{ApplicationId, AsmDescriptor};
use crate::error::{DeserializationError, SerializationError};
use crate::infra::codec::{
    bits::{BitReader, BitWriter, Bits},
    engine::{deserialize_into, serialize},
    traits::{AsmData, FromBits, ToBits},
};

mod aton_monitoring;
mod sample;
mod text_description;

pub use aton_monitoring::AtonMonitoring;
pub use sample::SampleAsm;
pub use text_description::TextDescription;

//==================================================================================PAYLOAD
/// Data section of an ASM, interpreted when its DAC/FI pair is registered.
#[derive(Debug, Clone, PartialEq)]
pub enum AsmPayload {
    /// Sample ASM, DAC 0 / FI 1.
    Sample(SampleAsm),
    /// Text description, DAC 1 / FI 29.
    TextDescription(TextDescription),
    /// AtoN monitoring data, DAC 235 or 250 / FI 10.
    AtonMonitoring(AtonMonitoring),
    /// Any other application, kept as raw bits.
    Opaque(OpaquePayload),
}

/// Uninterpreted ASM: DAC/FI plus the raw bits that follow them.
///
/// Only for pairs absent from the registry; encoding one under a registered
/// pair fails with `InvalidApplicationId`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OpaquePayload {
    pub application_id: ApplicationId,
    pub data: Bits,
}

impl OpaquePayload {
    pub fn new(application_id: ApplicationId, data: Bits) -> Self {
        Self {
            application_id,
            data,
        }
    }
}

impl AsmPayload {
    /// DAC/FI pair the payload is sent under.
    pub fn application_id(&self) -> ApplicationId {
        match self {
            AsmPayload::Sample(app) => app.application_id(),
            AsmPayload::TextDescription(app) => app.application_id(),
            AsmPayload::AtonMonitoring(app) => app.application_id(),
            AsmPayload::Opaque(raw) => raw.application_id,
        }
    }

    /// Application name, `None` for opaque payloads.
    pub fn name(&self) -> Option<&'static str> {
        match self {
            AsmPayload::Sample(_) => Some(SampleAsm::DESCRIPTOR.name),
            AsmPayload::TextDescription(_) => Some(TextDescription::DESCRIPTOR.name),
            AsmPayload::AtonMonitoring(_) => Some(AtonMonitoring::DESCRIPTOR.name),
            AsmPayload::Opaque(_) => None,
        }
    }

    pub fn is_opaque(&self) -> bool {
        matches!(self, AsmPayload::Opaque(_))
    }
}

impl ToBits for AsmPayload {
    fn write_bits(&self, writer: &mut BitWriter) -> Result<(), SerializationError> {
        match self {
            AsmPayload::Sample(app) => app.write_bits(writer),
            AsmPayload::TextDescription(app) => app.write_bits(writer),
            AsmPayload::AtonMonitoring(app) => app.write_bits(writer),
            AsmPayload::Opaque(raw) => {
                // A registered pair would decode through its typed layout instead.
                if lookup_descriptor(raw.application_id).is_some() {
                    return Err(SerializationError::InvalidApplicationId {
                        dac: raw.application_id.dac,
                        fi: raw.application_id.fi,
                    });
                }
                write_application_id(writer, raw.application_id)?;
                writer.pack_bits(&raw.data);
                Ok(())
            }
        }
    }
}

impl FromBits for AsmPayload {
    fn read_bits(reader: &mut BitReader) -> Result<Self, DeserializationError> {
        let id = read_application_id(reader)?;

        match ASM_REGISTRY.iter().find(|(desc, _)| desc.matches(id)) {
            Some((_desc, read)) => {
                #[cfg(feature = "defmt")]
                defmt::trace!("ASM {=str} ({})", _desc.name, id);
                read(id, reader)
            }
            None => {
                #[cfg(feature = "defmt")]
                defmt::debug!("Unregistered ASM {}, kept opaque", id);
                Ok(AsmPayload::Opaque(OpaquePayload::new(
                    id,
                    reader.unpack_remaining(),
                )))
            }
        }
    }
}

impl fmt::Display for AsmPayload {
    /// `DAC/FI` followed by the whole data section in hex.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = self.application_id();
        let mut writer = BitWriter::new();
        let written = match self {
            AsmPayload::Opaque(raw) => write_application_id(&mut writer, raw.application_id)
                .map(|()| writer.pack_bits(&raw.data)),
            app => app.write_bits(&mut writer),
        };
        match written {
            Ok(()) => write!(f, "DAC {} FI {}: 0x{:x}", id.dac, id.fi, writer.into_bits()),
            Err(err) => write!(f, "DAC {} FI {}: not encodable ({})", id.dac, id.fi, err),
        }
    }
}

//==================================================================================REGISTRY
type AsmReader = fn(ApplicationId, &mut BitReader) -> Result<AsmPayload, DeserializationError>;

/// Every interpreted application and how to build it from the bits after DAC/FI.
static ASM_REGISTRY: [(&AsmDescriptor, AsmReader); 3] = [
    (&SampleAsm::DESCRIPTOR, read_sample),
    (&TextDescription::DESCRIPTOR, read_text_description),
    (&AtonMonitoring::DESCRIPTOR, read_aton_monitoring),
];

fn read_sample(id: ApplicationId, reader: &mut BitReader) -> Result<AsmPayload, DeserializationError> {
    Ok(AsmPayload::Sample(read_application(id, reader)?))
}

fn read_text_description(
    id: ApplicationId,
    reader: &mut BitReader,
) -> Result<AsmPayload, DeserializationError> {
    Ok(AsmPayload::TextDescription(read_application(id, reader)?))
}

fn read_aton_monitoring(
    id: ApplicationId,
    reader: &mut BitReader,
) -> Result<AsmPayload, DeserializationError> {
    Ok(AsmPayload::AtonMonitoring(read_application(id, reader)?))
}

/// Descriptor registered for a DAC/FI pair, if any.
pub fn lookup_descriptor(id: ApplicationId) -> Option<&'static AsmDescriptor> {
    ASM_REGISTRY
        .iter()
        .find(|(desc, _)| desc.matches(id))
        .map(|(desc, _)| *desc)
}

//==================================================================================HELPERS
fn write_application_id(writer: &mut BitWriter, id: ApplicationId) -> Result<(), SerializationError> {
    writer.pack_unsigned(id.dac as u64, ApplicationId::DAC_BITS)?;
    writer.pack_unsigned(id.fi as u64, ApplicationId::FI_BITS)?;
    Ok(())
}

fn read_application_id(reader: &mut BitReader) -> Result<ApplicationId, DeserializationError> {
    let dac = reader.read_u16(ApplicationId::DAC_BITS)?;
    let fi = reader.read_u8(ApplicationId::FI_BITS)?;
    Ok(ApplicationId::new(dac, fi))
}

/// DAC/FI then the application fields, in descriptor order.
fn write_application<T: AsmData>(
    app: &T,
    writer: &mut BitWriter,
) -> Result<(), SerializationError> {
    let id = app.application_id();
    if !T::DESCRIPTOR.matches(id) {
        return Err(SerializationError::InvalidApplicationId {
            dac: id.dac,
            fi: id.fi,
        });
    }
    write_application_id(writer, id)?;
    serialize(app, writer, T::DESCRIPTOR.fields)?;
    Ok(())
}

/// Application fields, once DAC/FI have been consumed and matched.
/// A fixed-length layout must use up the data section exactly.
fn read_application<T: AsmData>(
    id: ApplicationId,
    reader: &mut BitReader,
) -> Result<T, DeserializationError> {
    let mut app = T::default();
    app.assign_application_id(id);
    deserialize_into(&mut app, reader, T::DESCRIPTOR.fields)?;
    if !T::DESCRIPTOR.is_open_ended() && reader.remaining() > 0 {
        return Err(DeserializationError::InvalidFieldBits {
            field_name: T::DESCRIPTOR.name,
        });
    }
    Ok(app)
}

/// DAC/FI then the application fields, refusing any other application.
fn read_application_checked<T: AsmData>(
    reader: &mut BitReader,
) -> Result<T, DeserializationError> {
    let id = read_application_id(reader)?;
    if !T::DESCRIPTOR.matches(id) {
        return Err(DeserializationError::InvalidApplicationId {
            dac: id.dac,
            fi: id.fi,
        });
    }
    read_application(id, reader)
}

/// `ToBits`/`FromBits` for an interpreted application, DAC/FI included.
macro_rules! asm_codec {
    ($($app:ty),+ $(,)?) => {
        $(
            impl ToBits for $app {
                fn write_bits(&self, writer: &mut BitWriter) -> Result<(), SerializationError> {
                    write_application(self, writer)
                }
            }

            impl FromBits for $app {
                fn read_bits(reader: &mut BitReader) -> Result<Self, DeserializationError> {
                    read_application_checked(reader)
                }
            }
        )+
    };
}

asm_codec!(SampleAsm, TextDescription, AtonMonitoring);
