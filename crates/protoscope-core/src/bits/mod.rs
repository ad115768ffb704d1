//! Bit-level primitives over packed capture buffers.
//!
//! A capture arrives as packed octets plus an exact bit count, with protocol
//! framing at an arbitrary bit offset. [`BitBuffer`] provides bounded,
//! indexed bit access; [`seek_bits`] locates literal sync patterns;
//! [`decode_line_code`] converts fixed-width channel symbols back into
//! payload bits. All three are pure, bounded-time scans.

mod linecode;
mod seek;

pub use linecode::{SymbolTable, SymbolTableError, decode_line_code};
pub use seek::seek_bits;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BitBufferError {
    #[error("bit count {bit_count} exceeds capacity: {capacity} bits available")]
    ExceedsCapacity { bit_count: usize, capacity: usize },
    #[error("invalid bit character {found:?} at position {position}")]
    InvalidBitChar { found: char, position: usize },
}

/// Immutable view over a packed bit array with a known bit length.
///
/// Bits are indexed MSB-first within each byte: bit 0 is the top bit of
/// `bytes[0]`. The view never exposes bits past `bit_count`, even when the
/// final byte is only partially used.
///
/// # Examples
/// ```
/// use protoscope_core::BitBuffer;
///
/// let bits = BitBuffer::new(&[0b1010_0000], 4).unwrap();
/// assert_eq!(bits.get(0), Some(true));
/// assert_eq!(bits.get(1), Some(false));
/// assert_eq!(bits.get(4), None);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BitBuffer<'a> {
    bytes: &'a [u8],
    bit_count: usize,
}

impl<'a> BitBuffer<'a> {
    /// Wrap `bytes`, exposing exactly `bit_count` bits.
    pub fn new(bytes: &'a [u8], bit_count: usize) -> Result<Self, BitBufferError> {
        let capacity = bytes.len() * 8;
        if bit_count > capacity {
            return Err(BitBufferError::ExceedsCapacity {
                bit_count,
                capacity,
            });
        }
        Ok(Self { bytes, bit_count })
    }

    /// Wrap `bytes`, exposing every bit.
    pub fn from_bytes(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            bit_count: bytes.len() * 8,
        }
    }

    /// Number of readable bits.
    pub fn len(&self) -> usize {
        self.bit_count
    }

    pub fn is_empty(&self) -> bool {
        self.bit_count == 0
    }

    /// Bit at `index`, or `None` past the end of the view.
    pub fn get(&self, index: usize) -> Option<bool> {
        if index >= self.bit_count {
            return None;
        }
        let byte = self.bytes[index / 8];
        Some(byte & (0x80 >> (index % 8)) != 0)
    }
}

/// Pack a `'0'`/`'1'` literal into bytes, MSB-first, returning the packed
/// octets and the exact bit count.
///
/// # Examples
/// ```
/// use protoscope_core::{BitBuffer, pack_bit_str};
///
/// let (bytes, bit_count) = pack_bit_str("10110").unwrap();
/// let bits = BitBuffer::new(&bytes, bit_count).unwrap();
/// assert_eq!(bits.len(), 5);
/// assert_eq!(bits.get(2), Some(true));
/// ```
pub fn pack_bit_str(pattern: &str) -> Result<(Vec<u8>, usize), BitBufferError> {
    let mut bytes = vec![0u8; pattern.len().div_ceil(8)];
    for (position, ch) in pattern.chars().enumerate() {
        match ch {
            '0' => {}
            '1' => bytes[position / 8] |= 0x80 >> (position % 8),
            found => return Err(BitBufferError::InvalidBitChar { found, position }),
        }
    }
    Ok((bytes, pattern.len()))
}
