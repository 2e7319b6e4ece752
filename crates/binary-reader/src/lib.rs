//! Sequential binary buffer reader.
//!
//! This crate provides a cursor over a fixed byte buffer and a typed
//! reader on top of it, meant to be composed into file-format and
//! wire-protocol decoders.
//!
//! # Overview
//!
//! - [`ByteCursor`] - Hands out consecutive raw slices of a buffer
//! - [`BinaryReader`] - Decodes 8 to 64-bit integers and 16/32/64-bit floats
//!   in little- or big-endian byte order
//! - [`ReadError`] - Returned when a read runs past the end of the buffer
//!
//! Reads never return fewer bytes than requested: an over-read fails with
//! [`ReadError::OutOfBounds`] and leaves the cursor untouched.
//!
//! # Example
//!
//! ```
//! use binary_reader::{BinaryReader, ByteOrder};
//!
//! let data = [0x01, 0x00, 0x02, 0x00, 0xCA, 0xFE];
//! let mut reader = BinaryReader::new(&data);
//!
//! assert_eq!(reader.read_u16().unwrap(), 1);
//! assert_eq!(reader.read_u16().unwrap(), 2);
//! assert_eq!(reader.read_u16_with(ByteOrder::Big).unwrap(), 0xCAFE);
//! assert!(reader.done());
//! ```

mod cursor;
mod error;
mod f16;
mod options;
mod reader;

pub use cursor::ByteCursor;
pub use error::{ReadError, Result};
pub use f16::decode_f16;
pub use options::{ByteOrder, ReaderOptions};
pub use reader::BinaryReader;
