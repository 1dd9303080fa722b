use serde::{Deserialize, Serialize};

use crate::protocols::ethernet::EthernetLayer;
use crate::protocols::ipv4::Ipv4Layer;
use crate::protocols::raw::RawLayer;
use crate::protocols::tcp::TcpLayer;

/// One decoded protocol layer of a frame.
///
/// Serializes internally tagged, so each layer object carries a `"layer"`
/// discriminant next to its fields. (The tag cannot be `"protocol"`: the
/// IPv4 layer already has a field of that name.)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "layer", rename_all = "lowercase")]
pub enum DecodedLayer {
    Ethernet(EthernetLayer),
    Ipv4(Ipv4Layer),
    Tcp(TcpLayer),
    Raw(RawLayer),
}

impl DecodedLayer {
    pub fn name(&self) -> &'static str {
        match self {
            DecodedLayer::Ethernet(_) => "Ethernet",
            DecodedLayer::Ipv4(_) => "IPv4",
            DecodedLayer::Tcp(_) => "TCP",
            DecodedLayer::Raw(_) => "Raw",
        }
    }

    /// Bytes this layer consumed from its input buffer.
    pub fn bytes_consumed(&self) -> usize {
        match self {
            DecodedLayer::Ethernet(layer) => layer.bytes_consumed,
            DecodedLayer::Ipv4(layer) => layer.bytes_consumed,
            DecodedLayer::Tcp(layer) => layer.bytes_consumed,
            DecodedLayer::Raw(layer) => layer.bytes_consumed,
        }
    }
}

/// Ordered decode result for one frame, outermost to innermost.
///
/// Never empty for a non-empty input frame, and never mutated after
/// construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecodeResult {
    pub layers: Vec<DecodedLayer>,
}

impl DecodeResult {
    /// Sum of consumed bytes across all layers; equals the frame length.
    pub fn total_consumed(&self) -> usize {
        self.layers.iter().map(DecodedLayer::bytes_consumed).sum()
    }
}
