//! Byte order selection and reader configuration.

/// Order in which the bytes of a multi-byte value are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ByteOrder {
    /// Least-significant byte first.
    #[default]
    Little,
    /// Most-significant byte first (network byte order).
    Big,
}

impl ByteOrder {
    /// Byte order of the target platform.
    #[cfg(target_endian = "little")]
    pub const NATIVE: ByteOrder = ByteOrder::Little;
    /// Byte order of the target platform.
    #[cfg(target_endian = "big")]
    pub const NATIVE: ByteOrder = ByteOrder::Big;

    /// Alias for [`ByteOrder::Big`].
    pub const NETWORK: ByteOrder = ByteOrder::Big;

    /// Maps a `little_endian` flag onto a byte order.
    pub const fn from_little_endian(little_endian: bool) -> Self {
        if little_endian {
            ByteOrder::Little
        } else {
            ByteOrder::Big
        }
    }

    pub const fn is_little(self) -> bool {
        matches!(self, ByteOrder::Little)
    }

    pub const fn is_big(self) -> bool {
        matches!(self, ByteOrder::Big)
    }
}

impl From<bool> for ByteOrder {
    fn from(little_endian: bool) -> Self {
        ByteOrder::from_little_endian(little_endian)
    }
}

/// Configuration of a [`BinaryReader`](crate::BinaryReader).
///
/// ```
/// use binary_reader::{ByteOrder, ReaderOptions};
///
/// let options = ReaderOptions::new().byte_order(ByteOrder::Big);
/// assert_eq!(options.byte_order, ByteOrder::Big);
/// assert_eq!(ReaderOptions::default().byte_order, ByteOrder::Little);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReaderOptions {
    /// Byte order used by typed reads that don't name one explicitly.
    pub byte_order: ByteOrder,
}

impl ReaderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the default byte order.
    pub fn byte_order(mut self, byte_order: ByteOrder) -> Self {
        self.byte_order = byte_order;
        self
    }
}
