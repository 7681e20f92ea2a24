//! Scaling, sentinel and text rules of the field primitives.
use super::*;
use crate::error::BitWriterError;

static LONGITUDE: FieldDescriptor = longitude_field("lon", "Longitude");
static LATITUDE: FieldDescriptor = latitude_field("lat", "Latitude");
static SPEED: FieldDescriptor = FieldDescriptor {
    id: "speed",
    name: "Speed",
    kind: FieldKind::Scaled,
    bits_length: 10,
    scale: Some(10.0),
    not_available: Some(1023),
    limit: Some(102.2),
};
static VOLTAGE: FieldDescriptor = FieldDescriptor {
    id: "voltage",
    name: "Voltage",
    kind: FieldKind::Scaled,
    bits_length: 10,
    scale: Some(20.0),
    not_available: None,
    limit: None,
};
static NAME: FieldDescriptor = FieldDescriptor::plain("name", "Name", FieldKind::Text, 24);
static EXTENSION: FieldDescriptor =
    FieldDescriptor::plain("ext", "Extension", FieldKind::TrailingText, 88);
static OCTETS: FieldDescriptor = FieldDescriptor::plain("data", "Data", FieldKind::Binary, 8);

fn round_trip_coordinate(desc: &'static FieldDescriptor, value: Option<f64>) -> Option<f64> {
    let mut writer = BitWriter::new();
    write_coordinate(&mut writer, desc, value).unwrap();
    let bits = writer.into_bits();
    assert_eq!(bits.len(), desc.bits_length as usize);
    read_coordinate(&mut BitReader::new(&bits), desc).unwrap()
}

//==================================================================================ROUNDING
#[test]
/// Halves round away from zero on both sides.
fn test_scale_to_raw_rounding() {
    assert_eq!(scale_to_raw(2.5, 1.0), 3);
    assert_eq!(scale_to_raw(-2.5, 1.0), -3);
    assert_eq!(scale_to_raw(2.4999, 1.0), 2);
    assert_eq!(scale_to_raw(-1.2, COORDINATE_SCALE), -720_000);
    assert_eq!(scale_to_raw(51.5, COORDINATE_SCALE), 30_900_000);
}

//==================================================================================COORDINATES
#[test]
/// Values on the 1/10000 minute grid survive a round trip exactly.
fn test_coordinate_round_trip() {
    for value in [0.0, 1.34, -1.2, 51.92, 180.0, -180.0] {
        assert_eq!(round_trip_coordinate(&LONGITUDE, Some(value)), Some(value));
    }
    for value in [51.5, -90.0, 90.0, -33.856_785] {
        let decoded = round_trip_coordinate(&LATITUDE, Some(value)).unwrap();
        let error = decoded - value;
        assert!(-0.5 / COORDINATE_SCALE <= error && error <= 0.5 / COORDINATE_SCALE);
    }
}

#[test]
/// `None` travels as the 181°/91° sentinels.
fn test_coordinate_not_available() {
    assert_eq!(round_trip_coordinate(&LONGITUDE, None), None);
    assert_eq!(round_trip_coordinate(&LATITUDE, None), None);

    let mut writer = BitWriter::new();
    write_coordinate(&mut writer, &LATITUDE, None).unwrap();
    let bits = writer.into_bits();
    assert_eq!(
        BitReader::new(&bits).unpack_signed(27).unwrap(),
        LATITUDE_NOT_AVAILABLE
    );
}

#[test]
/// Positions beyond ±180/±90 (and NaN) are rejected before packing.
fn test_coordinate_out_of_range() {
    for (desc, value) in [
        (&LONGITUDE, 180.000_01),
        (&LONGITUDE, -181.0),
        (&LATITUDE, 90.5),
        (&LATITUDE, f64::NAN),
    ] {
        let mut writer = BitWriter::new();
        let err = write_coordinate(&mut writer, desc, Some(value)).unwrap_err();
        assert!(err.is_range_error());
        assert_eq!(writer.bit_cursor(), 0);
    }
}

#[test]
/// Decoding is permissive: a non-sentinel raw value outside ±90° is still returned.
fn test_coordinate_decode_permissive() {
    let mut writer = BitWriter::new();
    writer.pack_signed(95 * 600_000, 27).unwrap();
    let bits = writer.into_bits();
    assert_eq!(
        read_coordinate(&mut BitReader::new(&bits), &LATITUDE).unwrap(),
        Some(95.0)
    );
}

//==================================================================================SCALED
#[test]
/// Scaled quantities with and without a sentinel.
fn test_scaled_round_trip() {
    let mut writer = BitWriter::new();
    write_scaled(&mut writer, &SPEED, Some(12.3)).unwrap();
    write_scaled(&mut writer, &SPEED, None).unwrap();
    write_scaled(&mut writer, &VOLTAGE, Some(12.5)).unwrap();
    let bits = writer.into_bits();

    let mut reader = BitReader::new(&bits);
    assert_eq!(read_scaled(&mut reader, &SPEED).unwrap(), Some(12.3));
    assert_eq!(read_scaled(&mut reader, &SPEED).unwrap(), None);
    assert_eq!(read_scaled(&mut reader, &VOLTAGE).unwrap(), Some(12.5));
}

#[test]
/// Negative, over-limit and sentinel-colliding values are refused.
fn test_scaled_rejections() {
    let mut writer = BitWriter::new();
    assert!(write_scaled(&mut writer, &SPEED, Some(-0.1))
        .unwrap_err()
        .is_range_error());
    assert!(write_scaled(&mut writer, &SPEED, Some(102.3))
        .unwrap_err()
        .is_range_error());
    // 51.2 V needs 1024 LSBs: too wide for 10 bits.
    assert!(matches!(
        write_scaled(&mut writer, &VOLTAGE, Some(51.2)),
        Err(SerializationError::BitWriteError {
            err: BitWriterError::UnsignedOutOfRange { value: 1024, width: 10 }
        })
    ));
    // No sentinel declared: "not available" cannot be expressed.
    assert!(matches!(
        write_scaled(&mut writer, &VOLTAGE, None),
        Err(SerializationError::CodecError { .. })
    ));
}

//==================================================================================TEXT
#[test]
/// Fixed text is padded/truncated; trailing text is exact.
fn test_text_fields() {
    let mut writer = BitWriter::new();
    write_text(&mut writer, &NAME, "ab").unwrap();
    write_text(&mut writer, &NAME, "TOOLONG").unwrap();
    write_trailing_text(&mut writer, &EXTENSION, "EXT").unwrap();
    let bits = writer.into_bits();
    assert_eq!(bits.len(), 24 + 24 + 18);

    let mut reader = BitReader::new(&bits);
    assert_eq!(read_text(&mut reader, &NAME).unwrap(), "AB");
    assert_eq!(read_text(&mut reader, &NAME).unwrap(), "TOOL");
    assert_eq!(read_trailing_text(&mut reader, &EXTENSION).unwrap(), "EXT");
    assert_eq!(reader.remaining(), 0);
}

#[test]
/// Trailing text drops leftover fill bits and refuses to exceed its maximum.
fn test_trailing_text_limits() {
    let mut bits = encode_text_field("HI", 2).unwrap();
    bits.push(false);
    bits.push(false);
    let mut reader = BitReader::new(&bits);
    assert_eq!(read_trailing_text(&mut reader, &EXTENSION).unwrap(), "HI");
    assert_eq!(reader.remaining(), 0);

    let bits = encode_text_field("ABCDEFGHIJKLMNO", 15).unwrap();
    assert_eq!(
        read_trailing_text(&mut BitReader::new(&bits), &EXTENSION),
        Err(DeserializationError::TextTooLong {
            field_id: "ext",
            chars: 15,
            max_chars: 14,
        })
    );

    let mut writer = BitWriter::new();
    assert!(matches!(
        write_trailing_text(&mut writer, &EXTENSION, "ABCDEFGHIJKLMNO"),
        Err(SerializationError::TextTooLong {
            chars: 15,
            max_chars: 14,
            ..
        })
    ));
    assert!(write_trailing_text(&mut writer, &EXTENSION, "").is_ok());
    assert_eq!(writer.bit_cursor(), 0);
}

//==================================================================================BINARY
#[test]
/// Binary runs must respect their alignment unit in both directions.
fn test_binary_alignment() {
    let mut writer = BitWriter::new();
    let aligned = Bits::from_bytes(&[0xAB, 0xCD]);
    write_binary(&mut writer, &OCTETS, &aligned).unwrap();
    let bits = writer.into_bits();
    assert_eq!(read_binary(&mut BitReader::new(&bits), &OCTETS).unwrap(), aligned);

    let odd: Bits = "1010".parse().unwrap();
    assert!(matches!(
        write_binary(&mut BitWriter::new(), &OCTETS, &odd),
        Err(SerializationError::InvalidFieldBits { field_name: "data" })
    ));
    assert!(matches!(
        read_binary(&mut BitReader::new(&odd), &OCTETS),
        Err(DeserializationError::InvalidFieldBits { field_name: "data" })
    ));
}

#[test]
/// Lookups hand back any raw code, including ones no table defines.
fn test_lookup_is_permissive() {
    static CODE: FieldDescriptor = FieldDescriptor::plain("code", "Code", FieldKind::Lookup, 4);
    let bits: Bits = "1110".parse().unwrap();
    assert_eq!(read_lookup(&mut BitReader::new(&bits), &CODE).unwrap(), 14);
}
