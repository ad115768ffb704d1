use crate::bits::{BitBuffer, SymbolTable, decode_line_code, seek_bits};

/// Declarative frame description shared by frame-oriented protocols: where
/// the frame starts and how its payload is line-coded. `N` is the payload
/// size in bytes.
pub(crate) struct FrameLayout<const N: usize> {
    /// Literal preamble-tail-plus-sync bit pattern.
    pub sync_pattern: &'static str,
    /// Line-code table constructor for the payload symbols.
    pub symbols: fn() -> SymbolTable,
}

/// Payload recovered after a sync match. `decoded_bits` may fall short of
/// `8 * N` when the capture was truncated or a symbol failed to decode.
pub(crate) struct RawPayload<const N: usize> {
    pub bytes: [u8; N],
    pub decoded_bits: usize,
}

impl<const N: usize> RawPayload<N> {
    /// Whether every payload bit was recovered. Protocols require the full
    /// fixed-size payload; partial payloads are rejected.
    pub fn is_complete(&self) -> bool {
        self.decoded_bits == N * 8
    }

    /// Uppercase hex dump of the whole payload.
    pub fn to_hex(&self) -> String {
        self.bytes.iter().map(|b| format!("{b:02X}")).collect()
    }
}

/// Steps shared by every frame decoder: cheap minimum-length guard, sync
/// acquisition over the whole buffer, line-code payload recovery starting
/// right after the sync. Returns `None` when the buffer cannot contain a
/// frame or the sync pattern is absent; callers still check
/// [`RawPayload::is_complete`] and their protocol checksum.
pub(crate) fn recover_payload<const N: usize>(
    bits: &BitBuffer<'_>,
    layout: &FrameLayout<N>,
) -> Option<RawPayload<N>> {
    let sync_len = layout.sync_pattern.len();
    if bits.len() < sync_len + N * 8 {
        return None;
    }

    let offset = seek_bits(bits, 0, bits.len(), layout.sync_pattern)?;

    let mut payload = RawPayload {
        bytes: [0u8; N],
        decoded_bits: 0,
    };
    let table = (layout.symbols)();
    payload.decoded_bits = decode_line_code(&mut payload.bytes, bits, offset + sync_len, &table);
    Some(payload)
}

/// XOR of all bytes in `bytes`. Protocols pick the covered range.
pub(crate) fn xor_checksum(bytes: &[u8]) -> u8 {
    bytes.iter().fold(0, |acc, byte| acc ^ byte)
}
