use std::fmt;

use serde::{Deserialize, Serialize};

use super::layout;
use crate::protocols::common::reader::HeaderReader;
use crate::protocols::error::LayerError;

/// TCP control-bit flag set decoded from the flags byte.
///
/// Unset bits are simply absent from the set; they are never an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TcpFlags {
    pub cwr: bool,
    pub ece: bool,
    pub urg: bool,
    pub ack: bool,
    pub psh: bool,
    pub rst: bool,
    pub syn: bool,
    pub fin: bool,
}

impl TcpFlags {
    pub fn from_bits(byte: u8) -> Self {
        Self {
            cwr: byte & layout::FLAG_CWR != 0,
            ece: byte & layout::FLAG_ECE != 0,
            urg: byte & layout::FLAG_URG != 0,
            ack: byte & layout::FLAG_ACK != 0,
            psh: byte & layout::FLAG_PSH != 0,
            rst: byte & layout::FLAG_RST != 0,
            syn: byte & layout::FLAG_SYN != 0,
            fin: byte & layout::FLAG_FIN != 0,
        }
    }

    /// Names of the set flags, in wire bit order (CWR first, FIN last).
    pub fn set_flags(&self) -> Vec<&'static str> {
        let named = [
            (self.cwr, "CWR"),
            (self.ece, "ECE"),
            (self.urg, "URG"),
            (self.ack, "ACK"),
            (self.psh, "PSH"),
            (self.rst, "RST"),
            (self.syn, "SYN"),
            (self.fin, "FIN"),
        ];
        named
            .into_iter()
            .filter_map(|(set, name)| set.then_some(name))
            .collect()
    }
}

impl fmt::Display for TcpFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.set_flags().join(" "))
    }
}

/// Decoded TCP header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TcpLayer {
    pub src_port: u16,
    pub dst_port: u16,
    pub seq: u32,
    pub ack: u32,
    pub flags: TcpFlags,
    pub bytes_consumed: usize,
}

/// Decode a TCP header, returning the layer and the application payload.
pub fn parse_tcp(buffer: &[u8]) -> Result<(TcpLayer, &[u8]), LayerError> {
    let reader = HeaderReader::new(layout::LAYER_NAME, buffer);
    reader.require_len(layout::MIN_HEADER_LEN)?;

    let src_port = reader.read_u16_be(layout::SRC_PORT_RANGE)?;
    let dst_port = reader.read_u16_be(layout::DST_PORT_RANGE)?;
    let seq = reader.read_u32_be(layout::SEQ_RANGE)?;
    let ack = reader.read_u32_be(layout::ACK_RANGE)?;

    let header_len =
        ((reader.read_u8(layout::DATA_OFFSET_OFFSET)? >> 4) as usize) * layout::DATA_OFFSET_WORD_BYTES;
    if header_len < layout::MIN_HEADER_LEN {
        return Err(LayerError::Truncated {
            layer: layout::LAYER_NAME,
            needed: layout::MIN_HEADER_LEN,
            available: header_len,
        });
    }
    reader.require_len(header_len)?;

    let flags = TcpFlags::from_bits(reader.read_u8(layout::FLAGS_OFFSET)?);
    let rest = reader.split_after_header(header_len)?;

    Ok((
        TcpLayer {
            src_port,
            dst_port,
            seq,
            ack,
            flags,
            bytes_consumed: header_len,
        },
        rest,
    ))
}
