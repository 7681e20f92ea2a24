//! Message 8 and 21 layouts, checked against reference bitstreams.
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use super::*;
use crate::core::ApplicationId;
use crate::infra::codec::bits::Bits;
use crate::protocol::asm::{AsmPayload, OpaquePayload, SampleAsm, TextDescription};
use crate::protocol::lookups::{AtonType, EpfdType};

const MSG8_HEX: &str = "201d6f345400010000";
const MSG21_HEX: &str = "54ec989a87c50274e9c0b12928a826400a879c00100c44a03b6af000101062078004";

fn hex_bits(hex: &str) -> Bits {
    let bytes: Vec<u8> = (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).unwrap())
        .collect();
    Bits::from_bytes(&bytes)
}

fn to_bits<T: ToBits>(msg: &T) -> Bits {
    let mut writer = BitWriter::new();
    msg.write_bits(&mut writer).unwrap();
    writer.into_bits()
}

fn reference_aton() -> AtonReport {
    AtonReport {
        repeat_indicator: 0,
        mmsi: 992_356_001,
        aton_type: AtonType::SpecialMark,
        name: String::from("JAN'S VIRTUAL ATON"),
        position_accuracy: true,
        longitude: Some(1.34),
        latitude: Some(51.92),
        dimensions: Dimensions::new(1, 2, 3, 4),
        epfd: EpfdType::Undefined,
        timestamp: 60,
        off_position: false,
        aton_status: 0,
        raim: false,
        virtual_aton: true,
        assigned_mode: false,
        name_extension: String::new(),
    }
}

//==================================================================================MESSAGE_8
#[test]
/// Sample ASM carried by message 8, bit for bit.
fn test_msg8_reference_bits() {
    let msg = BinaryBroadcastMessage::new(123_456_789, AsmPayload::Sample(SampleAsm::zeroed(2)));
    assert_eq!(to_bits(&msg), hex_bits(MSG8_HEX));
    assert_eq!(BinaryBroadcastMessage::decode(&hex_bits(MSG8_HEX)).unwrap(), msg);
}

#[test]
/// Unregistered applications survive message 8 untouched.
fn test_msg8_opaque_payload() {
    let data: Bits = "1100_1010_0111_0001_1".parse().unwrap();
    let msg = BinaryBroadcastMessage::new(
        123_456_789,
        AsmPayload::Opaque(OpaquePayload::new(ApplicationId::new(1, 40), data.clone())),
    );
    let bits = to_bits(&msg);
    assert_eq!(bits.len(), 40 + 16 + data.len());

    match AisMessage::decode(&bits).unwrap() {
        AisMessage::BinaryBroadcast(decoded) => {
            assert_eq!(decoded.mmsi, 123_456_789);
            assert_eq!(decoded.payload.application_id(), ApplicationId::new(1, 40));
            assert_eq!(decoded.payload, AsmPayload::Opaque(OpaquePayload::new(ApplicationId::new(1, 40), data)));
        }
        other => panic!("unexpected message {:?}", other),
    }
}

#[test]
/// VDES source IDs lose their two most significant bits.
fn test_msg8_from_vdes_asm() {
    let payload = AsmPayload::TextDescription(TextDescription::new(0, "HELLO"));
    let msg = BinaryBroadcastMessage::from_vdes_asm(0xC000_0001 | 123_456_789, payload.clone());
    assert_eq!(msg.mmsi, 123_456_789 | 1);
    assert_eq!(msg.payload, payload);
    assert_eq!(msg.repeat_indicator, 0);
}

#[test]
/// MMSI and repeat indicator are range checked like any other field.
fn test_msg8_range_errors() {
    let mut msg = BinaryBroadcastMessage::new(MMSI_MAX + 1, AsmPayload::Sample(SampleAsm::zeroed(1)));
    assert!(msg.encode().unwrap_err().is_range_error());

    msg.mmsi = MMSI_MAX;
    msg.repeat_indicator = 4;
    assert!(msg.encode().unwrap_err().is_range_error());
}

#[test]
/// A header without a data section is truncated.
fn test_msg8_truncated() {
    let mut bits = hex_bits(MSG8_HEX);
    bits.truncate(45);
    assert!(AisMessage::decode(&bits).unwrap_err().is_truncated());
}

//==================================================================================MESSAGE_21
#[test]
/// Reference AtoN report, field by field.
fn test_msg21_reference_bits() {
    let bits = hex_bits(MSG21_HEX);
    assert_eq!(bits.len(), 272);

    let decoded = AtonReport::decode(&bits).unwrap();
    assert_eq!(decoded, reference_aton());
    assert_eq!(to_bits(&reference_aton()), bits);
}

#[test]
/// Round trip at the boundaries of every field, sentinels included.
fn test_msg21_boundaries() {
    let mut report = reference_aton();
    report.repeat_indicator = 3;
    report.mmsi = MMSI_MAX;
    report.aton_type = AtonType::EmergencyWreckMarkingBuoy;
    report.name = String::from("ABCDEFGHIJKLMNOPQRST");
    report.longitude = None;
    report.latitude = Some(-90.0);
    report.dimensions = Dimensions::new(511, 511, 63, 63);
    report.epfd = EpfdType::Unknown(12);
    report.timestamp = 63;
    report.aton_status = 0xFF;
    report.raim = true;
    report.assigned_mode = true;
    report.name_extension = String::from("UVWXYZ01234567");

    let bits = to_bits(&report);
    assert_eq!(bits.len(), 272 + 14 * 6);
    assert_eq!(AtonReport::decode(&bits).unwrap(), report);

    report.longitude = Some(-180.0);
    report.latitude = None;
    assert_eq!(AtonReport::decode(&to_bits(&report)).unwrap(), report);
}

#[test]
/// The name extension emits exactly one group per character and rejects overflow.
fn test_msg21_name_extension() {
    let mut report = reference_aton();
    report.name_extension = String::from("EXT");
    let mut bits = to_bits(&report);
    assert_eq!(bits.len(), 272 + 18);

    // Fill bits after the last character are ignored.
    bits.push(false);
    bits.push(false);
    let decoded = AtonReport::decode(&bits).unwrap();
    assert_eq!(decoded.name_extension, "EXT");
    assert_eq!(decoded.full_name(), "JAN'S VIRTUAL ATONEXT");

    report.name_extension = String::from("ABCDEFGHIJKLMNO");
    assert!(matches!(
        report.encode(),
        Err(SerializationError::TextTooLong { max_chars: 14, .. })
    ));
}

#[test]
/// A fifteenth extension character is refused on decode, as on encode.
fn test_msg21_name_extension_overflow() {
    let mut report = reference_aton();
    report.name_extension = String::from("ABCDEFGHIJKLMN");
    let mut bits = to_bits(&report);
    assert_eq!(AtonReport::decode(&bits).unwrap(), report);

    for bit in [false, false, false, false, false, true] {
        bits.push(bit);
    }
    assert_eq!(bits.len(), 272 + 15 * 6);
    assert_eq!(
        AtonReport::decode(&bits),
        Err(DeserializationError::TextTooLong {
            field_id: "name_extension",
            chars: 15,
            max_chars: 14,
        })
    );
}

#[test]
/// Names longer than 20 characters are cut; positions beyond range are refused.
fn test_msg21_encode_rules() {
    let mut report = AtonReport::new(992_351_000, AtonType::ReferencePoint, "a very long aton name indeed");
    let decoded = AtonReport::decode(&to_bits(&report)).unwrap();
    assert_eq!(decoded.name, "A VERY LONG ATON NAM");
    assert_eq!(decoded.timestamp, AtonReport::TIMESTAMP_NOT_AVAILABLE);

    report.latitude = Some(91.0);
    assert!(report.encode().unwrap_err().is_range_error());

    report.latitude = Some(0.0);
    report.name = String::from("BUOY~");
    assert!(matches!(
        report.encode(),
        Err(SerializationError::SixBitError { .. })
    ));
}

#[test]
/// Decoding stops with a truncation error inside the fixed part.
fn test_msg21_truncated() {
    let mut bits = hex_bits(MSG21_HEX);
    bits.truncate(200);
    assert!(AtonReport::decode(&bits).unwrap_err().is_truncated());
}

//==================================================================================DISPATCH
#[test]
/// The leading type field selects the variant; anything else is refused.
fn test_dispatch_on_message_type() {
    let msg = AisMessage::decode(&hex_bits(MSG21_HEX)).unwrap();
    assert_eq!(msg.message_type(), 21);
    assert_eq!(msg.mmsi(), 992_356_001);
    assert_eq!(msg.name(), "Aids-to-navigation report");

    let msg = AisMessage::decode(&hex_bits(MSG8_HEX)).unwrap();
    assert_eq!(msg.message_type(), 8);

    // Type 1 position report.
    let bits: Bits = "000001_00".parse().unwrap();
    assert_eq!(
        AisMessage::decode(&bits),
        Err(DeserializationError::UnknownMessageType { msg_type: 1 })
    );
    assert_eq!(
        AtonReport::decode(&hex_bits(MSG8_HEX)),
        Err(DeserializationError::UnknownMessageType { msg_type: 8 })
    );
}

#[test]
/// Human-readable renderings of both variants.
fn test_display() {
    let text = AisMessage::from(reference_aton()).to_string();
    assert!(text.starts_with("AIS Message 21: Aids-to-navigation Report\n"));
    assert!(text.contains("Source ID: 992356001\n"));
    assert!(text.contains("AtoN name: JAN'S VIRTUAL ATON\n"));
    assert!(text.contains("Latitude (deg): 51.920000\n"));
    assert!(text.contains("Timestamp (s): 60\n"));

    let msg = BinaryBroadcastMessage::new(123_456_789, AsmPayload::Sample(SampleAsm::zeroed(2)));
    assert_eq!(
        msg.to_string(),
        "AIS Message 8: Binary Broadcast Message\nSource ID: 123456789\n\
         Application: Sample ASM 1\nBinary Data: DAC 0 FI 1: 0x00010000"
    );
}
