use super::layout;
use crate::MessageInfo;
use crate::bits::BitBuffer;
use crate::protocols::common::frame::{recover_payload, xor_checksum};

pub fn decode(bits: &BitBuffer<'_>) -> Option<MessageInfo> {
    let payload = recover_payload(bits, &layout::FRAME)?;
    if !payload.is_complete() {
        return None;
    }
    let raw = &payload.bytes;

    if xor_checksum(&raw[layout::CHECKSUM_RANGE]) != 0 {
        return None;
    }

    let tire_id: String = raw[layout::TIRE_ID_RANGE]
        .iter()
        .map(|b| format!("{b:02X}"))
        .collect();
    let repeat = raw[layout::REPEAT_OFFSET] & 0x0f;
    let kpa = f32::from(raw[layout::PRESSURE_OFFSET]) * layout::PRESSURE_KPA_PER_COUNT;
    let temperature = i32::from(raw[layout::TEMPERATURE_OFFSET]) - layout::TEMPERATURE_BIAS_C;
    let battery = raw[layout::BATTERY_OFFSET];

    Some(MessageInfo {
        name: layout::NAME.to_string(),
        raw: payload.to_hex(),
        info1: Some(format!("Tire ID {tire_id}")),
        info2: Some(format!("Pressure {kpa:.2} kpa")),
        info3: Some(format!("Temperature {temperature} C")),
        info4: Some(format!("Repeat {repeat}, Bat {battery}")),
    })
}
