//! Reader scenarios: raw reads, typed decoding in both byte orders,
//! exhaustion and over-read behaviour.

use binary_reader::{BinaryReader, ByteCursor, ByteOrder, ReadError, ReaderOptions};

// ---------------------------------------------------------------------------
// Concrete scenarios
// ---------------------------------------------------------------------------

#[test]
fn two_little_endian_u16_then_done() {
    let data = [0x01, 0x00, 0x02, 0x00];
    let mut r = BinaryReader::new(&data);
    assert_eq!(r.read_u16_with(ByteOrder::Little).unwrap(), 1);
    assert_eq!(r.position(), 2);
    assert_eq!(r.read_u16_with(ByteOrder::Little).unwrap(), 2);
    assert_eq!(r.position(), 4);
    assert!(r.done());
}

#[test]
fn little_endian_f32_one() {
    let data = [0x00, 0x00, 0x80, 0x3F];
    let mut r = BinaryReader::new(&data);
    let value = r.read_f32().unwrap();
    assert_eq!(value.to_bits(), 1.0f32.to_bits());
}

#[test]
fn default_order_is_little_endian() {
    let data = [0x34, 0x12];
    let mut r = BinaryReader::new(&data);
    assert_eq!(r.options(), ReaderOptions::default());
    assert_eq!(r.read_u16().unwrap(), 0x1234);
}

// ---------------------------------------------------------------------------
// Buffer accessors
// ---------------------------------------------------------------------------

#[test]
fn buffer_left_tracks_cursor() {
    let data = [1u8, 2, 3, 4, 5];
    let mut c = ByteCursor::new(&data);
    assert_eq!(c.buffer_left(), &data);
    c.read(2).unwrap();
    assert_eq!(c.buffer_left(), &[3, 4, 5]);
    c.read(3).unwrap();
    assert!(c.buffer_left().is_empty());
    assert_eq!(c.buffer(), &data);
}

#[test]
fn empty_buffer_is_valid_and_done() {
    let mut r = BinaryReader::new(&[]);
    assert!(r.done());
    assert!(r.buffer().is_empty());
    assert!(r.buffer_left().is_empty());
    assert!(r.read_u8().is_err());
}

#[test]
fn done_only_when_every_byte_is_consumed() {
    let data = [0u8; 3];
    let mut c = ByteCursor::new(&data);
    c.read(2).unwrap();
    assert!(!c.done());
    c.read(1).unwrap();
    assert!(c.done());
}

// ---------------------------------------------------------------------------
// Typed decoding per width
// ---------------------------------------------------------------------------

#[test]
fn signed_and_unsigned_views_of_same_bytes() {
    let data = [0xFF; 8];
    let mut r = BinaryReader::new(&data);
    assert_eq!(r.read_u8().unwrap(), 0xFF);
    assert_eq!(r.read_i8().unwrap(), -1);
    assert_eq!(r.read_u16().unwrap(), u16::MAX);
    assert_eq!(r.read_i32().unwrap(), -1);

    let mut r = BinaryReader::new(&data);
    assert_eq!(r.read_u64().unwrap(), u64::MAX);
    let mut r = BinaryReader::new(&data);
    assert_eq!(r.read_i64().unwrap(), -1);
}

#[test]
fn big_endian_integers() {
    let data = [
        0x80, 0x00, // i16
        0xDE, 0xAD, 0xBE, 0xEF, // u32
        0x00, 0x20, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, // u64 > 2^53
    ];
    let mut r = BinaryReader::with_options(&data, ReaderOptions::new().byte_order(ByteOrder::Big));
    assert_eq!(r.read_i16().unwrap(), i16::MIN);
    assert_eq!(r.read_u32().unwrap(), 0xDEADBEEF);
    assert_eq!(r.read_u64().unwrap(), (1u64 << 53) + 1);
    assert!(r.done());
}

#[test]
fn half_precision_in_both_orders() {
    let data = [0x3C, 0x00, 0x00, 0xC0];
    let mut r = BinaryReader::new(&data);
    assert_eq!(r.read_f16_with(ByteOrder::Big).unwrap(), 1.0);
    assert_eq!(r.read_f16().unwrap(), -2.0);
}

#[test]
fn doubles() {
    let mut data = Vec::new();
    data.extend_from_slice(&std::f64::consts::PI.to_le_bytes());
    data.extend_from_slice(&f64::NEG_INFINITY.to_be_bytes());
    let mut r = BinaryReader::new(&data);
    assert_eq!(r.read_f64().unwrap(), std::f64::consts::PI);
    assert_eq!(r.read_f64_with(ByteOrder::Big).unwrap(), f64::NEG_INFINITY);
}

#[test]
fn mixed_sequence() {
    let mut data = vec![0x42];
    data.extend_from_slice(&0xCAFEu16.to_be_bytes());
    data.extend_from_slice(&0xDEADBEEFu32.to_le_bytes());
    data.extend_from_slice(b"hi");
    data.extend_from_slice(&(-12345678i64).to_le_bytes());

    let mut r = BinaryReader::new(&data);
    assert_eq!(r.read_u8().unwrap(), 0x42);
    assert_eq!(r.read_u16_with(ByteOrder::Big).unwrap(), 0xCAFE);
    assert_eq!(r.read_u32().unwrap(), 0xDEADBEEF);
    assert_eq!(r.read(2).unwrap(), b"hi");
    assert_eq!(r.read_i64().unwrap(), -12345678);
    assert_eq!(r.remaining(), 0);
}

// ---------------------------------------------------------------------------
// Over-reads
// ---------------------------------------------------------------------------

#[test]
fn raw_over_read_is_an_error() {
    let data = [1u8, 2];
    let mut c = ByteCursor::new(&data);
    assert_eq!(
        c.read(3),
        Err(ReadError::OutOfBounds {
            position: 0,
            requested: 3,
            remaining: 2,
        })
    );
}

#[test]
fn every_typed_read_fails_after_exhaustion() {
    let data = [0u8; 1];
    let mut r = BinaryReader::new(&data);
    r.read_u8().unwrap();
    assert!(r.done());
    assert!(r.read_u8().is_err());
    assert!(r.read_i8().is_err());
    assert!(r.read_u16().is_err());
    assert!(r.read_i16().is_err());
    assert!(r.read_u32().is_err());
    assert!(r.read_i32().is_err());
    assert!(r.read_u64().is_err());
    assert!(r.read_i64().is_err());
    assert!(r.read_f16().is_err());
    assert!(r.read_f32().is_err());
    assert!(r.read_f64().is_err());
    assert!(r.read(1).is_err());
    assert_eq!(r.position(), 1);
}

#[test]
fn partial_width_is_never_decoded() {
    let data = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07];
    let mut r = BinaryReader::new(&data);
    let err = r.read_u64().unwrap_err();
    assert_eq!(
        err,
        ReadError::OutOfBounds {
            position: 0,
            requested: 8,
            remaining: 7,
        }
    );
    assert_eq!(r.buffer_left(), &data);
    assert_eq!(r.read_u32().unwrap(), 0x04030201);
    assert!(r.read_f32().is_err());
    assert_eq!(r.position(), 4);
}

#[test]
fn skip_respects_bounds() {
    let data = [0u8, 0, 0x05];
    let mut r = BinaryReader::new(&data);
    assert!(r.skip(4).is_err());
    r.skip(2).unwrap();
    assert_eq!(r.read_one().unwrap(), 0x05);
}
