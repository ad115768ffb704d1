use super::BitBuffer;

/// Find the first exact occurrence of a `'0'`/`'1'` pattern.
///
/// Scans positions `start_bit ..= search_limit_bits - pattern.len()` in
/// increasing order and returns the lowest absolute bit offset where the
/// literal matches, or `None`. Matching is exact: a single flipped bit is a
/// miss at that position. Callers pass the buffer length as
/// `search_limit_bits`; the scan never reads past the buffer's bit count.
///
/// # Examples
/// ```
/// use protoscope_core::{BitBuffer, seek_bits};
///
/// let bits = BitBuffer::from_bytes(&[0b0001_0110]);
/// assert_eq!(seek_bits(&bits, 0, bits.len(), "10110"), Some(3));
/// assert_eq!(seek_bits(&bits, 4, bits.len(), "10110"), None);
/// ```
pub fn seek_bits(
    bits: &BitBuffer<'_>,
    start_bit: usize,
    search_limit_bits: usize,
    pattern: &str,
) -> Option<usize> {
    if pattern.is_empty() {
        return None;
    }
    let limit = search_limit_bits.min(bits.len());
    let last = limit.checked_sub(pattern.len())?;

    'positions: for position in start_bit..=last {
        for (i, ch) in pattern.bytes().enumerate() {
            match bits.get(position + i) {
                Some(bit) if bit == (ch == b'1') => {}
                _ => continue 'positions,
            }
        }
        return Some(position);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::seek_bits;
    use crate::bits::{BitBuffer, pack_bit_str};

    fn planted(prefix_zeros: usize, pattern: &str, suffix_zeros: usize) -> (Vec<u8>, usize) {
        let stream = format!(
            "{}{}{}",
            "0".repeat(prefix_zeros),
            pattern,
            "0".repeat(suffix_zeros)
        );
        pack_bit_str(&stream).unwrap()
    }

    #[test]
    fn finds_pattern_at_known_offsets() {
        for offset in 0..24 {
            let (bytes, bit_count) = planted(offset, "10110", 9);
            let bits = BitBuffer::new(&bytes, bit_count).unwrap();
            assert_eq!(
                seek_bits(&bits, 0, bits.len(), "10110"),
                Some(offset),
                "offset {offset}"
            );
        }
    }

    #[test]
    fn returns_lowest_matching_offset() {
        let (bytes, bit_count) = pack_bit_str("001100110011").unwrap();
        let bits = BitBuffer::new(&bytes, bit_count).unwrap();
        assert_eq!(seek_bits(&bits, 0, bits.len(), "11"), Some(2));
    }

    #[test]
    fn honors_start_bit() {
        let (bytes, bit_count) = pack_bit_str("110000110000").unwrap();
        let bits = BitBuffer::new(&bytes, bit_count).unwrap();
        assert_eq!(seek_bits(&bits, 1, bits.len(), "11"), Some(6));
        assert_eq!(seek_bits(&bits, 7, bits.len(), "11"), None);
    }

    #[test]
    fn single_bit_error_is_a_miss() {
        let (bytes, bit_count) = planted(5, "10100", 5);
        let bits = BitBuffer::new(&bytes, bit_count).unwrap();
        assert_eq!(seek_bits(&bits, 0, bits.len(), "10110"), None);
    }

    #[test]
    fn pattern_longer_than_window_is_not_found() {
        let bits = BitBuffer::from_bytes(&[0xff]);
        assert_eq!(seek_bits(&bits, 0, bits.len(), "111111111"), None);
    }

    #[test]
    fn empty_pattern_is_not_found() {
        let bits = BitBuffer::from_bytes(&[0xff]);
        assert_eq!(seek_bits(&bits, 0, bits.len(), ""), None);
    }

    #[test]
    fn search_limit_clamps_to_bit_count() {
        let bits = BitBuffer::new(&[0b0000_0011], 6).unwrap();
        // The ones sit in bits 6..8, past the 6-bit view.
        assert_eq!(seek_bits(&bits, 0, 8, "11"), None);
    }
}
