//! Protocol decoding modules.
//!
//! Each protocol follows a layered structure:
//! - `layout`: sync literal, payload size, checksum range, field offsets and
//!   scales (source of truth)
//! - `parser`: domain-level decoding built on the shared frame skeleton
//!
//! Decoders are pure and contain no I/O; every expected rejection (absent
//! sync, short payload, invalid symbol, failed checksum) folds into `None`
//! so a wrong-protocol buffer looks the same no matter why it failed.

pub(crate) mod common;
pub mod tpms_citroen;

use crate::MessageInfo;
use crate::bits::BitBuffer;

/// A registered protocol decoder. One stateless value per protocol; `decode`
/// either accepts the capture and returns a populated [`MessageInfo`] or
/// rejects it with `None`.
pub trait ProtocolDecoder: Sync {
    fn name(&self) -> &'static str;
    fn decode(&self, bits: &BitBuffer<'_>) -> Option<MessageInfo>;
}

/// Registered decoders in precedence order. Adding a protocol means
/// appending its entry here; existing entries keep their position so
/// identification stays deterministic.
pub static DECODERS: &[&dyn ProtocolDecoder] = &[&tpms_citroen::TpmsCitroen];

/// Try every registered decoder against `bits`, first match wins.
///
/// # Examples
/// ```
/// use protoscope_core::{BitBuffer, identify};
///
/// let bits = BitBuffer::from_bytes(&[0x55; 4]);
/// assert!(identify(&bits).is_none());
/// ```
pub fn identify(bits: &BitBuffer<'_>) -> Option<MessageInfo> {
    identify_with(DECODERS, bits)
}

/// [`identify`] over a caller-supplied decoder set, in slice order.
pub fn identify_with(
    decoders: &[&dyn ProtocolDecoder],
    bits: &BitBuffer<'_>,
) -> Option<MessageInfo> {
    decoders.iter().find_map(|decoder| decoder.decode(bits))
}
