//! Bit-level codec: buffer, six-bit text, field primitives and the
//! descriptor-driven engine.
pub mod bits;
pub mod engine;
pub mod fields;
pub mod sixbit;
pub mod traits;
