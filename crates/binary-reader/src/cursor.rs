//! Forward-only byte cursor over a borrowed buffer.

use crate::error::{ReadError, Result};

/// A cursor that hands out consecutive sub-slices of a fixed buffer.
///
/// The position starts at `0` and only ever moves forward. A read that
/// asks for more bytes than are left fails with
/// [`ReadError::OutOfBounds`] and does not move the cursor.
///
/// # Example
///
/// ```
/// use binary_reader::ByteCursor;
///
/// let data = [0x01, 0x02, 0x03];
/// let mut cursor = ByteCursor::new(&data);
///
/// assert_eq!(cursor.read(2).unwrap(), &[0x01, 0x02]);
/// assert_eq!(cursor.buffer_left(), &[0x03]);
/// assert!(cursor.read(2).is_err());
/// assert_eq!(cursor.read_one().unwrap(), 0x03);
/// assert!(cursor.done());
/// ```
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    x: usize,
}

impl<'a> ByteCursor<'a> {
    /// Creates a cursor at the start of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, x: 0 }
    }

    /// The whole buffer, regardless of the cursor position.
    pub fn buffer(&self) -> &'a [u8] {
        self.data
    }

    /// The unread part of the buffer. Empty once everything is consumed.
    pub fn buffer_left(&self) -> &'a [u8] {
        &self.data[self.x..]
    }

    /// Offset of the next unread byte.
    pub fn position(&self) -> usize {
        self.x
    }

    /// Number of unread bytes.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.x
    }

    /// Length of the whole buffer.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns `true` when no bytes are left to read.
    pub fn done(&self) -> bool {
        self.x == self.data.len()
    }

    fn check(&self, n: usize) -> Result<()> {
        let remaining = self.remaining();
        if n > remaining {
            tracing::debug!(
                position = self.x,
                requested = n,
                remaining,
                "read past end of buffer"
            );
            return Err(ReadError::OutOfBounds {
                position: self.x,
                requested: n,
                remaining,
            });
        }
        Ok(())
    }

    /// Returns the next `n` bytes and advances the cursor past them.
    ///
    /// The slice borrows the source buffer, not the cursor.
    pub fn read(&mut self, n: usize) -> Result<&'a [u8]> {
        self.check(n)?;
        let start = self.x;
        self.x += n;
        Ok(&self.data[start..self.x])
    }

    /// Reads a single byte.
    pub fn read_one(&mut self) -> Result<u8> {
        let [byte] = self.read_array::<1>()?;
        Ok(byte)
    }

    /// Reads exactly `N` bytes into an array.
    #[inline]
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let bytes = self.read(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    /// Advances the cursor by `n` bytes without returning them.
    pub fn skip(&mut self, n: usize) -> Result<()> {
        self.check(n)?;
        self.x += n;
        Ok(())
    }
}
