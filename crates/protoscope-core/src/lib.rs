//! Protoscope core library for sub-GHz capture identification.
//!
//! This crate implements the decoding engine used by the CLI: a demodulated
//! capture (packed bits plus an exact bit count) is tried against every
//! registered protocol decoder until one accepts it. Each decoder aligns on
//! its sync pattern, recovers the line-coded payload, validates the protocol
//! checksum and extracts semantic fields into a [`MessageInfo`]. Decoding is
//! byte-unaligned, bit-oriented and side-effect free; all I/O lives in the
//! CLI crate. Protocol constants (sync literals, payload sizes, scale
//! factors) are captured in per-protocol `layout` modules so parsers stay
//! minimal and data-driven.
//!
//! Invariants:
//! - `identify` is a pure function of one buffer snapshot and the static
//!   decoder table; results are deterministic across runs.
//! - Decoders are tried in registration order and the first match wins.
//! - Expected non-matches (no sync, short payload, bad checksum) are `None`,
//!   never errors; decoders share no mutable state.
//!
//! Version française (résumé):
//! Cette crate fournit le moteur de décodage : capture binaire -> recherche
//! du motif de synchronisation -> décodage du code en ligne -> somme de
//! contrôle -> champs sémantiques. Les constantes de chaque protocole vivent
//! dans leur module `layout`. Résultat déterministe, premier décodeur
//! acceptant gagne.
//!
//! # Examples
//! ```
//! use protoscope_core::{BitBuffer, identify};
//!
//! // Too short to contain any known frame: every decoder rejects.
//! let bytes = [0u8; 4];
//! let bits = BitBuffer::from_bytes(&bytes);
//! assert!(identify(&bits).is_none());
//! ```

use serde::{Deserialize, Serialize};

mod bits;
mod protocols;

pub use bits::{
    BitBuffer, BitBufferError, SymbolTable, SymbolTableError, decode_line_code, pack_bit_str,
    seek_bits,
};
pub use protocols::{DECODERS, ProtocolDecoder, identify, identify_with};

/// Result of a successful decode: protocol name, hex dump of the full
/// payload, and up to four display-ready field descriptions.
///
/// Created fresh per decode; the engine never mutates it after return.
///
/// # Examples
/// ```
/// use protoscope_core::MessageInfo;
///
/// let info = MessageInfo {
///     name: "Citroen TPMS".to_string(),
///     raw: "00112233440564820AAD".to_string(),
///     info1: Some("Tire ID 11223344".to_string()),
///     info2: None,
///     info3: None,
///     info4: None,
/// };
/// assert_eq!(info.name, "Citroen TPMS");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageInfo {
    /// Protocol label (e.g., "Citroen TPMS").
    pub name: String,
    /// Uppercase hex dump of every recovered payload byte.
    pub raw: String,
    /// First descriptive field, when the protocol extracts one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info1: Option<String>,
    /// Second descriptive field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info2: Option<String>,
    /// Third descriptive field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info3: Option<String>,
    /// Fourth descriptive field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info4: Option<String>,
}
