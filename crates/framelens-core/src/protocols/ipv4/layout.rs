pub const LAYER_NAME: &str = "IP";

pub const MIN_HEADER_LEN: usize = 20;
pub const IHL_WORD_BYTES: usize = 4;
pub const EXPECTED_VERSION: u8 = 4;

pub const VERSION_IHL_OFFSET: usize = 0;
pub const TOTAL_LEN_RANGE: std::ops::Range<usize> = 2..4;
pub const PROTOCOL_OFFSET: usize = 9;
pub const SRC_ADDR_OFFSET: usize = 12;
pub const DST_ADDR_OFFSET: usize = 16;

pub const PROTOCOL_TCP: u8 = 6;
