use thiserror::Error;

use super::BitBuffer;

#[derive(Debug, Error)]
pub enum SymbolTableError {
    #[error("symbol table has no entries")]
    Empty,
    #[error("symbol {symbol:?} does not match table width {width}")]
    MismatchedWidths { symbol: String, width: usize },
    #[error("symbol {symbol:?} contains a character other than '0' or '1'")]
    NonBinarySymbol { symbol: String },
    #[error("duplicate symbol {symbol:?}")]
    DuplicateSymbol { symbol: String },
}

/// Line-code table mapping fixed-width channel symbols to output bits.
///
/// Every symbol literal must have the same non-zero width and be distinct;
/// a mismatched table is a programming error surfaced at construction, so
/// decode paths never see one.
///
/// # Examples
/// ```
/// use protoscope_core::SymbolTable;
///
/// let manchester = SymbolTable::manchester();
/// assert_eq!(manchester.width(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct SymbolTable {
    entries: Vec<(&'static str, bool)>,
    width: usize,
}

impl SymbolTable {
    /// Build a table from `(symbol literal, output bit)` pairs.
    pub fn new(entries: &[(&'static str, bool)]) -> Result<Self, SymbolTableError> {
        let width = entries
            .first()
            .map(|(symbol, _)| symbol.len())
            .ok_or(SymbolTableError::Empty)?;
        if width == 0 {
            return Err(SymbolTableError::Empty);
        }
        for (index, (symbol, _)) in entries.iter().enumerate() {
            if symbol.len() != width {
                return Err(SymbolTableError::MismatchedWidths {
                    symbol: (*symbol).to_string(),
                    width,
                });
            }
            if symbol.bytes().any(|ch| ch != b'0' && ch != b'1') {
                return Err(SymbolTableError::NonBinarySymbol {
                    symbol: (*symbol).to_string(),
                });
            }
            if entries[..index].iter().any(|(seen, _)| seen == symbol) {
                return Err(SymbolTableError::DuplicateSymbol {
                    symbol: (*symbol).to_string(),
                });
            }
        }
        Ok(Self {
            entries: entries.to_vec(),
            width,
        })
    }

    /// Manchester line code: `01` decodes to 0, `10` decodes to 1.
    pub fn manchester() -> Self {
        // Known-good literals; validated by the constructor tests below.
        Self {
            entries: vec![("01", false), ("10", true)],
            width: 2,
        }
    }

    /// Width in channel bits of every symbol in the table.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Output bit for the symbol starting at `at`, or `None` when the next
    /// chunk matches no entry or runs past the buffer.
    fn lookup(&self, bits: &BitBuffer<'_>, at: usize) -> Option<bool> {
        'entries: for (symbol, output) in &self.entries {
            for (i, ch) in symbol.bytes().enumerate() {
                match bits.get(at + i) {
                    Some(bit) if bit == (ch == b'1') => {}
                    _ => continue 'entries,
                }
            }
            return Some(*output);
        }
        None
    }
}

/// Decode line-coded symbols starting at `start_bit` into `out`.
///
/// Reads one symbol width at a time; each recognized symbol emits its output
/// bit MSB-first into `out`. Decoding stops at the first unrecognized chunk,
/// when the input runs out, or when `out` is full — whichever comes first —
/// and returns the number of output bits decoded. No backtracking and no
/// resynchronization: callers compare the count against their protocol's
/// required payload size.
///
/// # Examples
/// ```
/// use protoscope_core::{BitBuffer, SymbolTable, decode_line_code};
///
/// // Manchester encoding of 0xA5: 1010_0101 -> "10 01 10 01 01 10 01 10".
/// let bits = BitBuffer::from_bytes(&[0b1001_1001, 0b0110_0110]);
/// let mut out = [0u8; 1];
/// let decoded = decode_line_code(&mut out, &bits, 0, &SymbolTable::manchester());
/// assert_eq!(decoded, 8);
/// assert_eq!(out[0], 0xA5);
/// ```
pub fn decode_line_code(
    out: &mut [u8],
    bits: &BitBuffer<'_>,
    start_bit: usize,
    table: &SymbolTable,
) -> usize {
    let capacity_bits = out.len() * 8;
    let mut decoded = 0usize;
    let mut cursor = start_bit;
    while decoded < capacity_bits {
        let Some(bit) = table.lookup(bits, cursor) else {
            break;
        };
        if bit {
            out[decoded / 8] |= 0x80 >> (decoded % 8);
        } else {
            out[decoded / 8] &= !(0x80 >> (decoded % 8));
        }
        cursor += table.width;
        decoded += 1;
    }
    decoded
}

#[cfg(test)]
mod tests {
    use super::{SymbolTable, SymbolTableError, decode_line_code};
    use crate::bits::{BitBuffer, pack_bit_str};

    fn encode_manchester(bytes: &[u8]) -> String {
        let mut stream = String::new();
        for byte in bytes {
            for shift in (0..8).rev() {
                stream.push_str(if byte >> shift & 1 == 1 { "10" } else { "01" });
            }
        }
        stream
    }

    #[test]
    fn manchester_round_trip() {
        let sequences: &[&[u8]] = &[
            &[0x00],
            &[0xff],
            &[0xa5, 0x5a],
            &[0x00, 0x11, 0x22, 0x33, 0x44, 0x05, 0x64, 0x82, 0x0a, 0xad],
        ];
        for payload in sequences {
            let (bytes, bit_count) = pack_bit_str(&encode_manchester(payload)).unwrap();
            let bits = BitBuffer::new(&bytes, bit_count).unwrap();
            let mut out = vec![0u8; payload.len()];
            let decoded = decode_line_code(&mut out, &bits, 0, &SymbolTable::manchester());
            assert_eq!(decoded, payload.len() * 8);
            assert_eq!(&out, payload);
        }
    }

    #[test]
    fn decode_honors_start_bit() {
        let stream = format!("111{}", encode_manchester(&[0x42]));
        let (bytes, bit_count) = pack_bit_str(&stream).unwrap();
        let bits = BitBuffer::new(&bytes, bit_count).unwrap();
        let mut out = [0u8; 1];
        let decoded = decode_line_code(&mut out, &bits, 3, &SymbolTable::manchester());
        assert_eq!(decoded, 8);
        assert_eq!(out[0], 0x42);
    }

    #[test]
    fn invalid_symbol_stops_at_exactly_k_bits() {
        // 12 good bits, then "11" which is neither Manchester symbol.
        for k in 0..12 {
            let mut stream = String::new();
            for i in 0..12 {
                if i == k {
                    stream.push_str("11");
                }
                stream.push_str(if i % 2 == 0 { "10" } else { "01" });
            }
            let (bytes, bit_count) = pack_bit_str(&stream).unwrap();
            let bits = BitBuffer::new(&bytes, bit_count).unwrap();
            let mut out = [0u8; 2];
            let decoded = decode_line_code(&mut out, &bits, 0, &SymbolTable::manchester());
            assert_eq!(decoded, k, "invalid symbol at {k}");
        }
    }

    #[test]
    fn truncated_input_stops_early() {
        // 5 full symbols plus one dangling channel bit.
        let (bytes, bit_count) = pack_bit_str("10101010101").unwrap();
        let bits = BitBuffer::new(&bytes, bit_count).unwrap();
        let mut out = [0u8; 1];
        let decoded = decode_line_code(&mut out, &bits, 0, &SymbolTable::manchester());
        assert_eq!(decoded, 5);
        assert_eq!(out[0], 0b1111_1000);
    }

    #[test]
    fn output_capacity_clamps_decode() {
        let (bytes, bit_count) = pack_bit_str(&encode_manchester(&[0xaa, 0xbb, 0xcc])).unwrap();
        let bits = BitBuffer::new(&bytes, bit_count).unwrap();
        let mut out = [0u8; 2];
        let decoded = decode_line_code(&mut out, &bits, 0, &SymbolTable::manchester());
        assert_eq!(decoded, 16);
        assert_eq!(out, [0xaa, 0xbb]);
    }

    #[test]
    fn table_rejects_mismatched_widths() {
        let err = SymbolTable::new(&[("01", false), ("100", true)]).unwrap_err();
        assert!(matches!(err, SymbolTableError::MismatchedWidths { .. }));
    }

    #[test]
    fn table_rejects_duplicates_and_non_binary() {
        let err = SymbolTable::new(&[("01", false), ("01", true)]).unwrap_err();
        assert!(matches!(err, SymbolTableError::DuplicateSymbol { .. }));

        let err = SymbolTable::new(&[("0x", false), ("10", true)]).unwrap_err();
        assert!(matches!(err, SymbolTableError::NonBinarySymbol { .. }));

        let err = SymbolTable::new(&[]).unwrap_err();
        assert!(matches!(err, SymbolTableError::Empty));
    }

    #[test]
    fn manchester_matches_validated_construction() {
        let built = SymbolTable::new(&[("01", false), ("10", true)]).unwrap();
        let shorthand = SymbolTable::manchester();
        assert_eq!(built.width(), shorthand.width());
        assert_eq!(built.entries, shorthand.entries);
    }

    #[test]
    fn wider_symbol_table_decodes() {
        // A 3-bit-per-symbol code in the same table shape.
        let table = SymbolTable::new(&[("001", false), ("110", true)]).unwrap();
        let (bytes, bit_count) = pack_bit_str("110001110001110110").unwrap();
        let bits = BitBuffer::new(&bytes, bit_count).unwrap();
        let mut out = [0u8; 1];
        let decoded = decode_line_code(&mut out, &bits, 0, &table);
        assert_eq!(decoded, 6);
        assert_eq!(out[0], 0b1010_1100);
    }
}
