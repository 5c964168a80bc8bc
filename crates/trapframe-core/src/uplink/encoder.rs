use super::layout;

use crate::TrapRecord;

/// Composes the node-side uplink frame for a record.
///
/// Inverse of [`decode_frame`](super::decode_frame): field offsets and flag
/// bit positions are taken from [`layout`], so a decode of the result yields
/// the record unchanged.
pub fn encode_frame(record: &TrapRecord) -> [u8; layout::FRAME_LEN] {
    let mut frame = [0u8; layout::FRAME_LEN];

    frame[layout::ID_RANGE].copy_from_slice(&record.id.to_be_bytes());
    frame[layout::VERSION_OFFSET] = record.version;

    frame[layout::FLAGS_OFFSET] = flag_bit(record.door_status, layout::DOOR_STATUS_BIT)
        | flag_bit(record.catch_detect, layout::CATCH_DETECT_BIT)
        | flag_bit(record.trap_displacement, layout::TRAP_DISPLACEMENT_BIT);

    frame[layout::BATTERY_OFFSET] = record.battery_status;
    frame[layout::UNIX_TIME_RANGE].copy_from_slice(&record.unix_time.to_be_bytes());

    frame
}

fn flag_bit(value: bool, bit: u8) -> u8 {
    if value { 1 << bit } else { 0 }
}
