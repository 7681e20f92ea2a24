//! Caller-supplied bounds for the codec.
//!
//! The standard fixes every field width except the trailing variable-length
//! ones (AtoN name extension, ASM text, opaque binary data). Their upper bound
//! depends on the carrying transport, so it is configured here instead of
//! being hard-coded in the descriptors.

/// Largest AIS message a 5-slot transmission can carry (bits).
pub const DEFAULT_MAX_MESSAGE_BITS: usize = 1008;

/// Codec-wide limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecConfig {
    /// Maximum total message length, in bits, accepted on encode and decode.
    pub max_message_bits: usize,
}

impl CodecConfig {
    pub const fn new() -> Self {
        Self {
            max_message_bits: DEFAULT_MAX_MESSAGE_BITS,
        }
    }

    /// Override the maximum message length (e.g. a VDES channel or a
    /// single-sentence budget).
    pub const fn with_max_message_bits(self, max_message_bits: usize) -> Self {
        Self {
            max_message_bits,
            ..self
        }
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self::new()
    }
}
