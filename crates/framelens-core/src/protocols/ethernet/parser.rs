use serde::{Deserialize, Serialize};

use super::layout;
use super::mac::MacAddr;
use crate::protocols::common::reader::HeaderReader;
use crate::protocols::error::LayerError;

/// Decoded Ethernet II header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EthernetLayer {
    pub dst_mac: MacAddr,
    pub src_mac: MacAddr,
    pub ethertype: u16,
    pub bytes_consumed: usize,
}

/// Decode an Ethernet II header, returning the layer and the remaining
/// bytes as the next layer's input.
pub fn parse_ethernet(buffer: &[u8]) -> Result<(EthernetLayer, &[u8]), LayerError> {
    let reader = HeaderReader::new(layout::LAYER_NAME, buffer);
    reader.require_len(layout::HEADER_LEN)?;

    let dst_mac = MacAddr(reader.read_array(layout::DST_MAC_OFFSET)?);
    let src_mac = MacAddr(reader.read_array(layout::SRC_MAC_OFFSET)?);
    let ethertype = reader.read_u16_be(layout::ETHERTYPE_RANGE)?;
    let rest = reader.split_after_header(layout::HEADER_LEN)?;

    Ok((
        EthernetLayer {
            dst_mac,
            src_mac,
            ethertype,
            bytes_consumed: layout::HEADER_LEN,
        },
        rest,
    ))
}
