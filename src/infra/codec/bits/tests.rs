//! Test suite for Bits, BitWriter and BitReader edge cases.
use super::*;
use alloc::string::ToString;

//==================================================================================BITS
#[test]
/// Bits are stored MSB first inside each byte.
fn test_bits_msb_first_layout() {
    let bits: Bits = "1011_0100_111".parse().unwrap();
    assert_eq!(bits.len(), 11);
    assert_eq!(bits.as_raw_bytes(), &[0b1011_0100, 0b1110_0000]);
    assert_eq!(bits.get(0), Some(true));
    assert_eq!(bits.get(1), Some(false));
    assert_eq!(bits.get(10), Some(true));
    assert_eq!(bits.get(11), None);
}

#[test]
/// Parsing rejects anything but 0/1 and separators.
fn test_bits_parse_invalid_char() {
    assert!(matches!(
        "10x1".parse::<Bits>(),
        Err(BitStringError::InvalidBitChar { ch: 'x', position: 2 })
    ));
}

#[test]
/// Truncation clears the dropped tail so equality stays bitwise.
fn test_bits_truncate_masks_tail() {
    let mut bits = Bits::from_bytes(&[0xFF, 0xFF]);
    bits.truncate(10);
    assert_eq!(bits.len(), 10);
    assert_eq!(bits.as_raw_bytes(), &[0xFF, 0b1100_0000]);
    assert_eq!(bits, "11111111_11".parse().unwrap());
}

#[test]
/// Display, Debug and LowerHex renderings.
fn test_bits_formatting() {
    let bits: Bits = "0010_0000_0001".parse().unwrap();
    assert_eq!(bits.to_string(), "001000000001");
    assert_eq!(alloc::format!("{:x}", bits), "2010");
    assert_eq!(alloc::format!("{:?}", bits), "Bits[12](001000000001)");
}

//==================================================================================BITWRITER
#[test]
/// Fields of odd widths are packed back to back without gaps.
fn test_write_non_aligned_fields() {
    let mut writer = BitWriter::new();
    writer.pack_unsigned(8, 6).unwrap();
    writer.pack_unsigned(0, 2).unwrap();
    writer.pack_unsigned(123_456_789, 30).unwrap();
    writer.pack_zeros(2);
    assert_eq!(writer.bit_cursor(), 40);
    assert_eq!(
        writer.into_bits().as_raw_bytes(),
        &[0x20, 0x1d, 0x6f, 0x34, 0x54]
    );
}

#[test]
/// Unsigned values must fit their width, for every width up to 32.
fn test_pack_unsigned_range() {
    for width in 1u8..=32 {
        let max = (1u64 << width) - 1;
        let mut writer = BitWriter::new();
        assert!(writer.pack_unsigned(max, width).is_ok());
        assert!(matches!(
            writer.pack_unsigned(max + 1, width),
            Err(BitWriterError::UnsignedOutOfRange { width: w, .. }) if w == width
        ));
        // Failed calls leave the buffer untouched.
        assert_eq!(writer.bit_cursor(), width as usize);
    }
}

#[test]
/// Signed values must fit the two's-complement range of their width.
fn test_pack_signed_range() {
    for width in 1u8..=32 {
        let min = -(1i64 << (width - 1));
        let max = (1i64 << (width - 1)) - 1;
        let mut writer = BitWriter::new();
        assert!(writer.pack_signed(min, width).is_ok());
        assert!(writer.pack_signed(max, width).is_ok());
        assert!(matches!(
            writer.pack_signed(max + 1, width),
            Err(BitWriterError::SignedOutOfRange { .. })
        ));
        assert!(matches!(
            writer.pack_signed(min - 1, width),
            Err(BitWriterError::SignedOutOfRange { .. })
        ));
    }
}

#[test]
/// Negative numbers are written in two's complement.
fn test_pack_signed_negative() {
    let mut writer = BitWriter::new();
    writer.pack_signed(-1, 4).unwrap();
    writer.pack_signed(-8, 4).unwrap();
    assert_eq!(writer.into_bits().as_raw_bytes(), &[0b1111_1000]);
}

#[test]
/// Widths of 0 or above 64 are rejected.
fn test_pack_width_guard() {
    let mut writer = BitWriter::new();
    assert!(matches!(
        writer.pack_unsigned(0, 0),
        Err(BitWriterError::TooLongForType { max: 64, asked: 0 })
    ));
    assert!(matches!(
        writer.pack_signed(0, 65),
        Err(BitWriterError::TooLongForType { max: 64, asked: 65 })
    ));
    assert!(writer.pack_unsigned(u64::MAX, 64).is_ok());
}

#[test]
/// finalize() pads to a six-bit boundary and records the padding.
fn test_finalize_padding() {
    for len in 0usize..=13 {
        let mut writer = BitWriter::new();
        writer.pack_zeros(len);
        let padded = writer.finalize();
        assert_eq!(padded.bits.len() % CHAR_BITS, 0);
        assert_eq!(padded.data_len(), len);
        assert_eq!(padded.padding as usize, (6 - len % 6) % 6);
        assert_eq!(padded.unpadded().len(), len);
    }
}

//==================================================================================BITREADER
#[test]
/// Sequential reads mirror the writer.
fn test_read_back_fields() {
    let bits = Bits::from_bytes(&[0x20, 0x1d, 0x6f, 0x34, 0x54]);
    let mut reader = BitReader::new(&bits);
    assert_eq!(reader.read_u8(6).unwrap(), 8);
    assert_eq!(reader.read_u8(2).unwrap(), 0);
    assert_eq!(reader.read_u32(30).unwrap(), 123_456_789);
    assert_eq!(reader.remaining(), 2);
}

#[test]
/// Signed reads extend the sign bit.
fn test_unpack_signed() {
    let bits: Bits = "1111_1000_0111".parse().unwrap();
    let mut reader = BitReader::new(&bits);
    assert_eq!(reader.unpack_signed(4).unwrap(), -1);
    assert_eq!(reader.unpack_signed(4).unwrap(), -8);
    assert_eq!(reader.unpack_signed(4).unwrap(), 7);
}

#[test]
/// Detects out-of-bounds reads and leaves the cursor in place.
fn test_read_out_of_bounds() {
    let bits: Bits = "101".parse().unwrap();
    let mut reader = BitReader::new(&bits);
    assert!(reader.unpack_bool().unwrap());
    assert!(matches!(
        reader.unpack_unsigned(3),
        Err(BitReaderError::OutOfBounds {
            asked: 3,
            available: 2
        })
    ));
    assert_eq!(reader.bit_cursor(), 1);
    assert!(matches!(
        reader.unpack_bits(5),
        Err(BitReaderError::OutOfBounds { .. })
    ));
}

#[test]
/// Reading from an empty buffer must fail immediately.
fn test_read_empty_buffer() {
    let bits = Bits::new();
    let mut reader = BitReader::new(&bits);
    assert!(matches!(
        reader.read_u8(1),
        Err(BitReaderError::OutOfBounds {
            asked: 1,
            available: 0
        })
    ));
    assert!(reader.unpack_remaining().is_empty());
}

#[test]
/// Validates guard rails for maximum bit lengths per type.
fn test_read_num_bit_too_high() {
    let bits = Bits::from_bytes(&[0xFF; 9]);
    let mut reader = BitReader::new(&bits);
    assert!(matches!(
        reader.read_u8(9),
        Err(BitReaderError::TooLongForType { max: 8, asked: 9 })
    ));
    assert!(matches!(
        reader.read_u16(17),
        Err(BitReaderError::TooLongForType { max: 16, asked: 17 })
    ));
    assert!(matches!(
        reader.read_u32(33),
        Err(BitReaderError::TooLongForType { max: 32, asked: 33 })
    ));
    assert!(matches!(
        reader.unpack_unsigned(65),
        Err(BitReaderError::TooLongForType { max: 64, asked: 65 })
    ));
    assert_eq!(reader.unpack_unsigned(64).unwrap(), u64::MAX);
}

#[test]
/// Advance, copy out a run, then reset back to the start.
fn test_advance_and_reset() {
    let bits: Bits = "0001_1011".parse().unwrap();
    let mut reader = BitReader::new(&bits);
    reader.advance(3).unwrap();
    assert_eq!(reader.unpack_bits(2).unwrap(), "11".parse().unwrap());
    assert_eq!(reader.unpack_remaining(), "011".parse().unwrap());
    assert_eq!(reader.remaining(), 0);
    reader.reset();
    assert_eq!(reader.read_u8(8).unwrap(), 0b0001_1011);
}

#[test]
/// Peeking leaves the cursor where it was.
fn test_peek_unsigned() {
    let bits: Bits = "010101_11".parse().unwrap();
    let mut reader = BitReader::new(&bits);
    assert_eq!(reader.peek_unsigned(6).unwrap(), 21);
    assert_eq!(reader.bit_cursor(), 0);
    reader.advance(6).unwrap();
    assert_eq!(reader.peek_unsigned(2).unwrap(), 3);
    assert!(matches!(
        reader.peek_unsigned(3),
        Err(BitReaderError::OutOfBounds { asked: 3, available: 2 })
    ));
}
