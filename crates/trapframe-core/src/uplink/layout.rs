/// Fixed frame length produced by the node firmware.
pub const FRAME_LEN: usize = 11;

pub const ID_RANGE: std::ops::Range<usize> = 0..4;
pub const VERSION_OFFSET: usize = 4;
pub const FLAGS_OFFSET: usize = 5;
pub const BATTERY_OFFSET: usize = 6;
pub const UNIX_TIME_RANGE: std::ops::Range<usize> = 7..11;

pub const DOOR_STATUS_BIT: u8 = 0;
pub const CATCH_DETECT_BIT: u8 = 1;
pub const TRAP_DISPLACEMENT_BIT: u8 = 2;
