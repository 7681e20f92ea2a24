//! Codec driver: message objects to armored text and back.
//!
//! ```text
//! encode: message -> BitWriter -> Bits -> armor() -> ArmoredPayload
//! decode: text + bit length -> dearmor() -> Bits -> BitReader -> AisMessage
//! ```
//!
//! Every call builds its own buffers; a `Codec` only holds read-only limits
//! and can be shared freely between threads.
use crate::config::CodecConfig;
use crate::error::{DeserializationError, SerializationError, SixBitError};
use crate::infra::codec::{
    bits::{BitReader, BitWriter, Bits, CHAR_BITS},
    sixbit::{armor, dearmor, ArmoredPayload},
    traits::{FromBits, ToBits},
};
use crate::protocol::messages::AisMessage;

/// Entry point for encoding and decoding AIS messages under a configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Codec {
    config: CodecConfig,
}

impl Codec {
    pub const fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    //==================================================================================ENCODE
    /// Serialize `msg` and armor it. The payload also reports the exact bit
    /// length, from which the transport derives its fill bits.
    pub fn encode<T: ToBits>(&self, msg: &T) -> Result<ArmoredPayload, SerializationError> {
        let bits = self.encode_bits(msg)?;
        Ok(armor(&bits))
    }

    /// Serialize `msg` to raw, unpadded bits.
    pub fn encode_bits<T: ToBits>(&self, msg: &T) -> Result<Bits, SerializationError> {
        let mut writer = BitWriter::new();
        msg.write_bits(&mut writer)?;
        let bits = writer.into_bits();

        if bits.len() > self.config.max_message_bits {
            return Err(SerializationError::MessageTooLong {
                bits: bits.len(),
                max: self.config.max_message_bits,
            });
        }

        #[cfg(feature = "defmt")]
        defmt::trace!("Encoded {=usize} bits", bits.len());

        Ok(bits)
    }

    //==================================================================================DECODE
    /// Decode armored text carrying exactly `bit_len` bits.
    pub fn decode(&self, text: &str, bit_len: usize) -> Result<AisMessage, DeserializationError> {
        self.check_len(bit_len)?;
        let bits = dearmor(text, bit_len)?;
        self.decode_bits(&bits)
    }

    /// Decode armored text whose last character holds `fill_bits` padding bits.
    pub fn decode_with_fill(
        &self,
        text: &str,
        fill_bits: u8,
    ) -> Result<AisMessage, DeserializationError> {
        let chars = text.chars().count();
        let capacity = chars * CHAR_BITS;
        let fill = fill_bits as usize;
        if fill >= CHAR_BITS || fill > capacity {
            return Err(SixBitError::BitLengthMismatch {
                bit_len: capacity.saturating_sub(fill),
                chars,
            }
            .into());
        }
        self.decode(text, capacity - fill)
    }

    /// Decode raw bits, selecting the variant from the leading type field.
    pub fn decode_bits(&self, bits: &Bits) -> Result<AisMessage, DeserializationError> {
        self.check_len(bits.len())?;
        AisMessage::read_bits(&mut BitReader::new(bits))
    }

    fn check_len(&self, bits: usize) -> Result<(), DeserializationError> {
        if bits > self.config.max_message_bits {
            #[cfg(feature = "defmt")]
            defmt::debug!("Refusing {=usize} bits message", bits);
            return Err(DeserializationError::MessageTooLong {
                bits,
                max: self.config.max_message_bits,
            });
        }
        Ok(())
    }
}

//==================================================================================DEFAULT_CODEC
/// Default limits, see [`CodecConfig::default`].
const DEFAULT_CODEC: Codec = Codec::new(CodecConfig::new());

/// [`Codec::encode`] with default limits.
pub fn encode<T: ToBits>(msg: &T) -> Result<ArmoredPayload, SerializationError> {
    DEFAULT_CODEC.encode(msg)
}

/// [`Codec::encode_bits`] with default limits.
pub fn encode_bits<T: ToBits>(msg: &T) -> Result<Bits, SerializationError> {
    DEFAULT_CODEC.encode_bits(msg)
}

/// [`Codec::decode`] with default limits.
pub fn decode(text: &str, bit_len: usize) -> Result<AisMessage, DeserializationError> {
    DEFAULT_CODEC.decode(text, bit_len)
}

/// [`Codec::decode_with_fill`] with default limits.
pub fn decode_with_fill(text: &str, fill_bits: u8) -> Result<AisMessage, DeserializationError> {
    DEFAULT_CODEC.decode_with_fill(text, fill_bits)
}

/// [`Codec::decode_bits`] with default limits.
pub fn decode_bits(bits: &Bits) -> Result<AisMessage, DeserializationError> {
    DEFAULT_CODEC.decode_bits(bits)
}
