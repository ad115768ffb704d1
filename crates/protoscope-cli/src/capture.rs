use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use protoscope_core::pack_bit_str;

/// Owned capture data: packed bits plus the exact bit count.
#[derive(Debug)]
pub struct Capture {
    pub bytes: Vec<u8>,
    pub bit_count: usize,
}

/// Load a capture file. `.bits` files are ASCII `'0'`/`'1'` streams with
/// whitespace ignored; `.bin` files are raw packed octets, MSB-first, with
/// every bit significant.
pub fn load_capture(path: &Path) -> Result<Capture> {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    match ext.as_str() {
        "bits" => load_bits(path),
        "bin" => load_bin(path),
        other => bail!("unsupported capture format '{other}'"),
    }
}

fn load_bits(path: &Path) -> Result<Capture> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read capture: {}", path.display()))?;
    let stream: String = text.chars().filter(|ch| !ch.is_whitespace()).collect();
    if stream.is_empty() {
        bail!("capture is empty: {}", path.display());
    }
    let (bytes, bit_count) = pack_bit_str(&stream)
        .with_context(|| format!("Invalid bit stream: {}", path.display()))?;
    Ok(Capture { bytes, bit_count })
}

fn load_bin(path: &Path) -> Result<Capture> {
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read capture: {}", path.display()))?;
    if bytes.is_empty() {
        bail!("capture is empty: {}", path.display());
    }
    let bit_count = bytes.len() * 8;
    Ok(Capture { bytes, bit_count })
}

#[cfg(test)]
mod tests {
    use super::load_capture;
    use std::io::Write;

    #[test]
    fn loads_ascii_bits_ignoring_whitespace() {
        let mut file = tempfile::Builder::new()
            .suffix(".bits")
            .tempfile()
            .expect("tempfile");
        writeln!(file, "1010 1010\n1100").expect("write");

        let capture = load_capture(file.path()).expect("load");
        assert_eq!(capture.bit_count, 12);
        assert_eq!(capture.bytes, vec![0b1010_1010, 0b1100_0000]);
    }

    #[test]
    fn loads_packed_binary() {
        let mut file = tempfile::Builder::new()
            .suffix(".bin")
            .tempfile()
            .expect("tempfile");
        file.write_all(&[0xde, 0xad]).expect("write");

        let capture = load_capture(file.path()).expect("load");
        assert_eq!(capture.bit_count, 16);
        assert_eq!(capture.bytes, vec![0xde, 0xad]);
    }

    #[test]
    fn rejects_non_binary_characters() {
        let mut file = tempfile::Builder::new()
            .suffix(".bits")
            .tempfile()
            .expect("tempfile");
        writeln!(file, "01012").expect("write");

        let err = load_capture(file.path()).unwrap_err();
        assert!(err.to_string().contains("Invalid bit stream"));
    }

    #[test]
    fn rejects_unknown_extension() {
        let file = tempfile::Builder::new()
            .suffix(".wav")
            .tempfile()
            .expect("tempfile");
        let err = load_capture(file.path()).unwrap_err();
        assert!(err.to_string().contains("unsupported capture format"));
    }

    #[test]
    fn rejects_empty_capture() {
        let file = tempfile::Builder::new()
            .suffix(".bits")
            .tempfile()
            .expect("tempfile");
        let err = load_capture(file.path()).unwrap_err();
        assert!(err.to_string().contains("capture is empty"));
    }
}
