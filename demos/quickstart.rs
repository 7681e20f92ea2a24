//! # Quickstart Example
//!
//! Minimal example demonstrating the basics of korri-ais:
//! - Build an Aid-to-Navigation report (message 21)
//! - Encode it to armored text
//! - Decode a received binary broadcast (message 8)
//!
//! ```bash
//! cargo run --example quickstart
//! ```

use korri_ais::protocol::asm::{AsmPayload, TextDescription};
use korri_ais::protocol::lookups::AtonType;
use korri_ais::{decode_with_fill, encode, AisMessage, AtonReport, BinaryBroadcastMessage};

fn main() {
    println!("=== korri-ais Quickstart ===\n");

    // ======================================================================
    // 1. Build an AtoN report
    // ======================================================================
    println!("1. Building an AtoN report (message 21)");

    let mut buoy = AtonReport::new(992_351_000, AtonType::ReferencePoint, "TEST BUOY");
    buoy.latitude = Some(51.5); // Decimal degrees, north positive
    buoy.longitude = Some(-1.2); // Decimal degrees, east positive
    buoy.virtual_aton = true;

    println!("{}\n", buoy);

    // ======================================================================
    // 2. Encode to armored text
    // ======================================================================
    println!("2. Encoding");

    match encode(&buoy) {
        Ok(armored) => {
            println!("   Payload: {}", armored.text());
            println!("   Bits: {}", armored.bit_len());
            println!("   Fill bits: {}\n", armored.fill_bits());
        }
        Err(e) => {
            eprintln!("   Serialization error: {}\n", e);
        }
    }

    // ======================================================================
    // 3. Decode a received message 8
    // ======================================================================
    println!("3. Decoding a binary broadcast");

    let broadcast = BinaryBroadcastMessage::new(
        123_456_789,
        AsmPayload::TextDescription(TextDescription::new(0, "RACON OUT OF SERVICE")),
    );
    let received = match encode(&broadcast) {
        Ok(armored) => armored,
        Err(e) => {
            eprintln!("   Serialization error: {}", e);
            return;
        }
    };

    match decode_with_fill(received.text(), received.fill_bits()) {
        Ok(AisMessage::BinaryBroadcast(msg)) => {
            println!("{}", msg);
            if let AsmPayload::TextDescription(text) = &msg.payload {
                println!("   Text: {}", text.text);
            }
        }
        Ok(other) => println!("   Unexpected message type {}", other.message_type()),
        Err(e) => eprintln!("   Deserialization error: {}", e),
    }
}
