use crate::bits::SymbolTable;
use crate::protocols::common::frame::FrameLayout;

pub const NAME: &str = "Citroen TPMS";

/// Preamble tail plus sync, 17 symbols. The transmitter sends a longer
/// preamble, but matching only its tail makes decoding more likely when the
/// capture misses the start of the message.
pub const SYNC_PATTERN: &str = "10101010101010110";

pub const PAYLOAD_BYTES: usize = 10;

pub const FRAME: FrameLayout<PAYLOAD_BYTES> = FrameLayout {
    sync_pattern: SYNC_PATTERN,
    symbols: SymbolTable::manchester,
};

/// XOR over these bytes must cancel to zero. Byte 0 is not covered; its
/// meaning is unknown and it is never interpreted.
pub const CHECKSUM_RANGE: std::ops::Range<usize> = 1..10;

pub const TIRE_ID_RANGE: std::ops::Range<usize> = 1..5;
pub const REPEAT_OFFSET: usize = 5;
pub const PRESSURE_OFFSET: usize = 6;
pub const PRESSURE_KPA_PER_COUNT: f32 = 1.364;
pub const TEMPERATURE_OFFSET: usize = 7;
pub const TEMPERATURE_BIAS_C: i32 = 50;
/// Believed to be the battery level; not confirmed.
pub const BATTERY_OFFSET: usize = 8;
