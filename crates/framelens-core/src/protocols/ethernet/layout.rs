pub const LAYER_NAME: &str = "Ethernet";

pub const HEADER_LEN: usize = 14;

pub const DST_MAC_OFFSET: usize = 0;
pub const SRC_MAC_OFFSET: usize = 6;
pub const ETHERTYPE_RANGE: std::ops::Range<usize> = 12..14;

pub const ETHERTYPE_IPV4: u16 = 0x0800;
