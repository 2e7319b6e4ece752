//! Typed binary reader with cursor tracking.

use crate::cursor::ByteCursor;
use crate::error::Result;
use crate::f16::decode_f16;
use crate::options::{ByteOrder, ReaderOptions};

/// Reads fixed-width numbers off the front of a byte slice.
///
/// Every typed read consumes exactly the width of its type from the
/// wrapped [`ByteCursor`] and decodes it under a byte order. The plain
/// `read_*` methods use the reader's configured order (little-endian
/// unless set otherwise); the `read_*_with` variants take the order per
/// call. A read that would run past the end fails and consumes nothing.
///
/// # Example
///
/// ```
/// use binary_reader::{BinaryReader, ByteOrder};
///
/// let data = [0x01, 0x00, 0x00, 0x02, 0x00, 0x00, 0x80, 0x3F];
/// let mut reader = BinaryReader::new(&data);
///
/// assert_eq!(reader.read_u16().unwrap(), 1);
/// assert_eq!(reader.read_u16_with(ByteOrder::Big).unwrap(), 2);
/// assert_eq!(reader.read_f32().unwrap(), 1.0);
/// assert!(reader.done());
/// assert!(reader.read_u8().is_err());
/// ```
#[derive(Debug, Clone)]
pub struct BinaryReader<'a> {
    cursor: ByteCursor<'a>,
    options: ReaderOptions,
}

/// Generates a default-order and an explicit-order read for a fixed-width
/// primitive with `from_le_bytes`/`from_be_bytes`.
macro_rules! typed_read {
    ($(#[$doc:meta])* $ty:ty, $width:literal, $read:ident, $read_with:ident) => {
        $(#[$doc])*
        #[inline]
        pub fn $read(&mut self) -> Result<$ty> {
            self.$read_with(self.options.byte_order)
        }

        $(#[$doc])*
        #[inline]
        pub fn $read_with(&mut self, order: ByteOrder) -> Result<$ty> {
            let bytes = self.cursor.read_array::<$width>()?;
            Ok(match order {
                ByteOrder::Little => <$ty>::from_le_bytes(bytes),
                ByteOrder::Big => <$ty>::from_be_bytes(bytes),
            })
        }
    };
}

impl<'a> BinaryReader<'a> {
    /// Creates a little-endian reader at the start of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self::with_options(data, ReaderOptions::default())
    }

    pub fn with_options(data: &'a [u8], options: ReaderOptions) -> Self {
        Self::from_cursor(ByteCursor::new(data), options)
    }

    /// Wraps an existing cursor, keeping its position.
    pub fn from_cursor(cursor: ByteCursor<'a>, options: ReaderOptions) -> Self {
        Self { cursor, options }
    }

    pub fn options(&self) -> ReaderOptions {
        self.options
    }

    /// Changes the byte order used by the plain `read_*` methods.
    pub fn set_byte_order(&mut self, byte_order: ByteOrder) {
        self.options.byte_order = byte_order;
    }

    pub fn cursor(&self) -> &ByteCursor<'a> {
        &self.cursor
    }

    pub fn into_cursor(self) -> ByteCursor<'a> {
        self.cursor
    }

    /// The whole buffer, regardless of the cursor position.
    pub fn buffer(&self) -> &'a [u8] {
        self.cursor.buffer()
    }

    /// The unread part of the buffer.
    pub fn buffer_left(&self) -> &'a [u8] {
        self.cursor.buffer_left()
    }

    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    pub fn remaining(&self) -> usize {
        self.cursor.remaining()
    }

    pub fn done(&self) -> bool {
        self.cursor.done()
    }

    /// Returns the next `n` raw bytes. See [`ByteCursor::read`].
    pub fn read(&mut self, n: usize) -> Result<&'a [u8]> {
        self.cursor.read(n)
    }

    pub fn read_one(&mut self) -> Result<u8> {
        self.cursor.read_one()
    }

    pub fn skip(&mut self, n: usize) -> Result<()> {
        self.cursor.skip(n)
    }

    /// Reads an unsigned 8-bit integer.
    #[inline]
    pub fn read_u8(&mut self) -> Result<u8> {
        self.cursor.read_one()
    }

    /// Reads a signed 8-bit integer.
    #[inline]
    pub fn read_i8(&mut self) -> Result<i8> {
        Ok(self.cursor.read_one()? as i8)
    }

    typed_read!(
        /// Reads an unsigned 16-bit integer.
        u16, 2, read_u16, read_u16_with
    );
    typed_read!(
        /// Reads a signed 16-bit integer.
        i16, 2, read_i16, read_i16_with
    );
    typed_read!(
        /// Reads an unsigned 32-bit integer.
        u32, 4, read_u32, read_u32_with
    );
    typed_read!(
        /// Reads a signed 32-bit integer.
        i32, 4, read_i32, read_i32_with
    );
    typed_read!(
        /// Reads an unsigned 64-bit integer.
        u64, 8, read_u64, read_u64_with
    );
    typed_read!(
        /// Reads a signed 64-bit integer.
        i64, 8, read_i64, read_i64_with
    );
    typed_read!(
        /// Reads an IEEE 754 single-precision float.
        f32, 4, read_f32, read_f32_with
    );
    typed_read!(
        /// Reads an IEEE 754 double-precision float.
        f64, 8, read_f64, read_f64_with
    );

    /// Reads an IEEE 754 half-precision float, widened to `f32`.
    #[inline]
    pub fn read_f16(&mut self) -> Result<f32> {
        self.read_f16_with(self.options.byte_order)
    }

    /// Reads an IEEE 754 half-precision float, widened to `f32`.
    #[inline]
    pub fn read_f16_with(&mut self, order: ByteOrder) -> Result<f32> {
        self.read_u16_with(order).map(decode_f16)
    }
}
