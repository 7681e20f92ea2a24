//! `korri-ais` library: bit-level codec for ITU-R M.1371 (AIS/VDES) messages
//! in a `no_std` environment. The crate exposes the infrastructure modules
//! (bit buffer, six-bit text, field primitives, descriptor engine) and the
//! protocol layer (ASM payloads, messages 8 and 21, codec driver).
#![no_std]
extern crate alloc;
//==================================================================================
/// Data contract between static field descriptors and the codec engine.
pub mod core;
/// Caller-supplied limits (maximum message length).
pub mod config;
/// Bit-level, text, serialization and deserialization errors.
pub mod error;
/// Bit buffer, six-bit codec, field primitives and the descriptor engine.
pub mod infra;
/// ITU-R M.1371 protocol: lookup tables, ASM payloads, messages, driver.
pub mod protocol;
//==================================================================================
pub use config::CodecConfig;
pub use infra::codec::bits::{BitReader, BitWriter, Bits, PaddedBits};
pub use infra::codec::sixbit::ArmoredPayload;
pub use infra::codec::traits::{FromBits, ToBits};
pub use protocol::asm::{AsmPayload, OpaquePayload};
pub use protocol::driver::{decode, decode_bits, decode_with_fill, encode, encode_bits, Codec};
pub use protocol::messages::{AisMessage, AtonReport, BinaryBroadcastMessage};
