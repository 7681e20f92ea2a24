//! Shared builders for the integration scenarios.
use korri_ais::protocol::asm::{AsmPayload, OpaquePayload};
use korri_ais::protocol::lookups::AtonType;
use korri_ais::{AtonReport, BinaryBroadcastMessage, Bits};
use korri_ais::core::ApplicationId;

#[allow(dead_code)]
/// Reference-point buoy used across the AtoN scenarios.
pub fn test_buoy() -> AtonReport {
    let mut report = AtonReport::new(992_351_000, AtonType::ReferencePoint, "TEST BUOY");
    report.latitude = Some(51.5);
    report.longitude = Some(-1.2);
    report.off_position = false;
    report
}

#[allow(dead_code)]
/// Message 8 carrying an application no registry entry knows about.
pub fn unregistered_broadcast(mmsi: u32, data: Bits) -> BinaryBroadcastMessage {
    BinaryBroadcastMessage::new(
        mmsi,
        AsmPayload::Opaque(OpaquePayload::new(ApplicationId::new(1, 40), data)),
    )
}

#[allow(dead_code)]
/// Deterministic pseudo-random bit sequence (xorshift64).
pub fn pseudo_random_bits(len: usize, seed: u64) -> Bits {
    let mut state = seed | 1;
    let mut bits = Bits::with_capacity(len);
    for _ in 0..len {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        bits.push(state & 1 == 1);
    }
    bits
}
