use crate::protocols::ethernet::layout as ethernet_layout;
use crate::protocols::ipv4::layout as ipv4_layout;

/// Protocol identifier inherited from the previous layer's decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtocolHint {
    /// First dispatch for a frame.
    LinkLayer,
    /// Ethertype announced by an Ethernet header.
    EtherType(u16),
    /// Protocol number announced by an IPv4 header.
    IpProtocol(u8),
    /// Nothing is decoded past the transport layer.
    Payload,
}

/// Decoder selected for the next layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerDecoder {
    Ethernet,
    Ipv4,
    Tcp,
    Raw,
}

/// Pure dispatch table: hint -> next decoder.
///
/// Unknown ethertypes and protocol numbers are not errors; they route to
/// the raw fallback by design.
pub fn select_decoder(hint: ProtocolHint) -> LayerDecoder {
    match hint {
        ProtocolHint::LinkLayer => LayerDecoder::Ethernet,
        ProtocolHint::EtherType(ethernet_layout::ETHERTYPE_IPV4) => LayerDecoder::Ipv4,
        ProtocolHint::EtherType(_) => LayerDecoder::Raw,
        ProtocolHint::IpProtocol(ipv4_layout::PROTOCOL_TCP) => LayerDecoder::Tcp,
        ProtocolHint::IpProtocol(_) => LayerDecoder::Raw,
        ProtocolHint::Payload => LayerDecoder::Raw,
    }
}
