//! Citroen TPMS decoding. Usually 443.92 MHz FSK.
//!
//! Frames carry a preamble of ~52 us high/low pulses followed by a sync; the
//! decoder matches a 17-symbol tail of that sequence, then reads 10
//! Manchester-coded payload bytes. Integrity is a simple XOR over bytes
//! 1..=9 that must cancel to zero; byte 0 is outside the checksum and its
//! meaning is unknown, so it appears in the hex dump only. Extracted fields:
//! 32-bit tire ID, pressure (counts of 1.364 kPa), temperature (offset by
//! 50 °C), repeat counter nibble and a probable battery byte.
//!
//! Version française (résumé):
//! Décodage TPMS Citroen : synchronisation de 17 symboles, 10 octets codés
//! Manchester, somme de contrôle XOR sur les octets 1 à 9. L'octet 0 est
//! affiché mais jamais interprété.

pub mod layout;
pub mod parser;

pub use parser::decode;

use crate::MessageInfo;
use crate::bits::BitBuffer;
use crate::protocols::ProtocolDecoder;

pub struct TpmsCitroen;

impl ProtocolDecoder for TpmsCitroen {
    fn name(&self) -> &'static str {
        layout::NAME
    }

    fn decode(&self, bits: &BitBuffer<'_>) -> Option<MessageInfo> {
        parser::decode(bits)
    }
}
