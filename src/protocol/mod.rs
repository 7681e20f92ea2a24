//! High-level components of ITU-R M.1371: lookup tables, ASM payloads,
//! message variants and the codec driver tying them to armored text.
pub mod asm;
pub mod driver;
pub mod lookups;
pub mod messages;
