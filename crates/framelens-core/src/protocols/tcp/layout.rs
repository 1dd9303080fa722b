pub const LAYER_NAME: &str = "TCP";

pub const MIN_HEADER_LEN: usize = 20;
pub const DATA_OFFSET_WORD_BYTES: usize = 4;

pub const SRC_PORT_RANGE: std::ops::Range<usize> = 0..2;
pub const DST_PORT_RANGE: std::ops::Range<usize> = 2..4;
pub const SEQ_RANGE: std::ops::Range<usize> = 4..8;
pub const ACK_RANGE: std::ops::Range<usize> = 8..12;
pub const DATA_OFFSET_OFFSET: usize = 12;
pub const FLAGS_OFFSET: usize = 13;

// Control bits of the flags byte, RFC 9293 §3.1.
pub const FLAG_CWR: u8 = 0x80;
pub const FLAG_ECE: u8 = 0x40;
pub const FLAG_URG: u8 = 0x20;
pub const FLAG_ACK: u8 = 0x10;
pub const FLAG_PSH: u8 = 0x08;
pub const FLAG_RST: u8 = 0x04;
pub const FLAG_SYN: u8 = 0x02;
pub const FLAG_FIN: u8 = 0x01;
