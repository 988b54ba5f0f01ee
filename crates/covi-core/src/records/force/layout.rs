/// Byte sequence that immediately precedes the force payload.
pub const FORCE_MARKER: [u8; 10] = [0xfe, 0xf9, 0xdb, 0x22, 0xd0, 0xea, 0x00, 0x00, 0x13, 0x88];

/// Samples per force record; fixed by the device, not stored in the file.
pub const FORCE_SAMPLE_COUNT: usize = 5000;
pub const FORCE_SAMPLE_RATE_HZ: u32 = 1000;

pub const SAMPLE_WIDTH: usize = 8;
pub const PAYLOAD_LEN: usize = FORCE_SAMPLE_COUNT * SAMPLE_WIDTH;
