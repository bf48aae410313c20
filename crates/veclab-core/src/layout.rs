//! Element layout descriptors: size, alignment, and byte order.
//!
//! A described segment carries an [`ElementLayout`] and uses it both to
//! compute byte offsets (`index * size`) and to decode raw bytes in the
//! requested order. For apples-to-apples comparison against raw pointer
//! access the benchmark profiles always use the native order; the
//! non-native order exists so the codec path can be verified.

/// Byte order for encoding elements into raw bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ByteOrder {
    /// Least-significant byte first.
    Little,
    /// Most-significant byte first.
    Big,
}

impl ByteOrder {
    /// The byte order of the compilation target.
    #[inline]
    pub const fn native() -> Self {
        #[cfg(target_endian = "little")]
        {
            Self::Little
        }
        #[cfg(target_endian = "big")]
        {
            Self::Big
        }
    }

    /// Whether this order matches the compilation target's.
    #[inline]
    pub const fn is_native(self) -> bool {
        matches!(
            (self, Self::native()),
            (Self::Little, Self::Little) | (Self::Big, Self::Big)
        )
    }
}

/// The layout of one element within a byte-addressed buffer.
///
/// Immutable after construction; built once at configuration time and
/// passed explicitly to the representations that need it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ElementLayout {
    /// Encoded size of one element in bytes.
    pub size: usize,
    /// Required alignment of the backing storage's base address.
    pub align: usize,
    /// Byte order used to encode and decode elements.
    pub order: ByteOrder,
}

impl ElementLayout {
    /// Create a layout from its parts.
    pub const fn new(size: usize, align: usize, order: ByteOrder) -> Self {
        Self { size, align, order }
    }

    /// The same layout with a different byte order.
    pub const fn with_order(self, order: ByteOrder) -> Self {
        Self {
            size: self.size,
            align: self.align,
            order,
        }
    }

    /// Byte offset of element `index`.
    #[inline]
    pub const fn byte_offset(&self, index: usize) -> usize {
        index * self.size
    }

    /// Total bytes needed for `len` elements.
    #[inline]
    pub const fn byte_len(&self, len: usize) -> usize {
        len * self.size
    }
}
