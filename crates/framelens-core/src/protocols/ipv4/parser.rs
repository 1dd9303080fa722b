use std::net::Ipv4Addr;

use serde::{Deserialize, Serialize};

use super::layout;
use crate::protocols::common::reader::HeaderReader;
use crate::protocols::error::LayerError;

/// Decoded IPv4 header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ipv4Layer {
    pub version: u8,
    /// Header length in bytes (IHL field times four).
    pub header_len: usize,
    /// Total length as declared by the header. Recorded for reference;
    /// payload slicing always trusts the actual buffer instead.
    pub total_len: u16,
    pub protocol: u8,
    pub src: Ipv4Addr,
    pub dst: Ipv4Addr,
    pub bytes_consumed: usize,
}

/// Decode an IPv4 header, returning the layer and the bytes after it.
pub fn parse_ipv4(buffer: &[u8]) -> Result<(Ipv4Layer, &[u8]), LayerError> {
    let reader = HeaderReader::new(layout::LAYER_NAME, buffer);
    reader.require_len(layout::MIN_HEADER_LEN)?;

    let version_ihl = reader.read_u8(layout::VERSION_IHL_OFFSET)?;
    let version = version_ihl >> 4;
    if version != layout::EXPECTED_VERSION {
        return Err(LayerError::UnexpectedVersion {
            layer: layout::LAYER_NAME,
            expected: layout::EXPECTED_VERSION,
            actual: version,
        });
    }

    let header_len = ((version_ihl & 0x0f) as usize) * layout::IHL_WORD_BYTES;
    if header_len < layout::MIN_HEADER_LEN {
        return Err(LayerError::Truncated {
            layer: layout::LAYER_NAME,
            needed: layout::MIN_HEADER_LEN,
            available: header_len,
        });
    }
    reader.require_len(header_len)?;

    let total_len = reader.read_u16_be(layout::TOTAL_LEN_RANGE)?;
    let protocol = reader.read_u8(layout::PROTOCOL_OFFSET)?;
    let src = Ipv4Addr::from(reader.read_array::<4>(layout::SRC_ADDR_OFFSET)?);
    let dst = Ipv4Addr::from(reader.read_array::<4>(layout::DST_ADDR_OFFSET)?);
    let rest = reader.split_after_header(header_len)?;

    Ok((
        Ipv4Layer {
            version,
            header_len,
            total_len,
            protocol,
            src,
            dst,
            bytes_consumed: header_len,
        },
        rest,
    ))
}

#[cfg(test)]
mod tests {
    use super::parse_ipv4;
    use crate::protocols::error::LayerError;
    use crate::protocols::ipv4::layout;

    fn sample_header(ihl: u8, total_len: u16, protocol: u8) -> Vec<u8> {
        let mut header = vec![0u8; (ihl as usize) * layout::IHL_WORD_BYTES];
        header[0] = 0x40 | ihl;
        header[layout::TOTAL_LEN_RANGE].copy_from_slice(&total_len.to_be_bytes());
        header[layout::PROTOCOL_OFFSET] = protocol;
        header[layout::SRC_ADDR_OFFSET..layout::SRC_ADDR_OFFSET + 4]
            .copy_from_slice(&[192, 168, 0, 1]);
        header[layout::DST_ADDR_OFFSET..layout::DST_ADDR_OFFSET + 4]
            .copy_from_slice(&[10, 0, 0, 2]);
        header
    }

    #[test]
    fn parse_minimal_header() {
        let mut buffer = sample_header(5, 45, layout::PROTOCOL_TCP);
        buffer.extend_from_slice(&[9, 9, 9]);

        let (layer, rest) = parse_ipv4(&buffer).unwrap();
        assert_eq!(layer.version, 4);
        assert_eq!(layer.header_len, 20);
        assert_eq!(layer.total_len, 45);
        assert_eq!(layer.protocol, 6);
        assert_eq!(layer.src.to_string(), "192.168.0.1");
        assert_eq!(layer.dst.to_string(), "10.0.0.2");
        assert_eq!(layer.bytes_consumed, 20);
        assert_eq!(rest, &[9, 9, 9]);
    }

    #[test]
    fn parse_header_with_options_skips_them() {
        let mut buffer = sample_header(7, 33, 17);
        buffer.push(0xab);

        let (layer, rest) = parse_ipv4(&buffer).unwrap();
        assert_eq!(layer.header_len, 28);
        assert_eq!(layer.bytes_consumed, 28);
        assert_eq!(rest, &[0xab]);
    }

    #[test]
    fn parse_wrong_version_is_recoverable_error() {
        let mut buffer = sample_header(5, 20, 6);
        buffer[0] = 0x65;

        let err = parse_ipv4(&buffer).unwrap_err();
        assert_eq!(
            err,
            LayerError::UnexpectedVersion {
                layer: "IP",
                expected: 4,
                actual: 6,
            }
        );
    }

    #[test]
    fn parse_ihl_below_minimum_is_truncated() {
        let mut buffer = sample_header(5, 20, 6);
        buffer[0] = 0x44;

        let err = parse_ipv4(&buffer).unwrap_err();
        assert!(matches!(
            err,
            LayerError::Truncated {
                layer: "IP",
                needed: 20,
                available: 16,
            }
        ));
    }

    #[test]
    fn parse_ihl_beyond_buffer_is_truncated() {
        // IHL declares 15 words (60 bytes) but only 20 are available.
        let mut buffer = sample_header(5, 20, 6);
        buffer[0] = 0x4f;

        let err = parse_ipv4(&buffer).unwrap_err();
        assert_eq!(
            err,
            LayerError::Truncated {
                layer: "IP",
                needed: 60,
                available: 20,
            }
        );
    }

    #[test]
    fn declared_total_len_beyond_buffer_is_recorded_not_trusted() {
        let buffer = sample_header(5, 9999, 6);
        let (layer, rest) = parse_ipv4(&buffer).unwrap();
        assert_eq!(layer.total_len, 9999);
        assert!(rest.is_empty());
    }
}
