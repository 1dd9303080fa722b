mod pcap;

pub use pcap::PcapFileSource;

use thiserror::Error;

/// One captured frame: raw bytes plus capture metadata.
#[derive(Debug, Clone)]
pub struct RawFrame {
    /// Capture timestamp in epoch seconds, when the capture recorded one.
    pub ts: Option<f64>,
    /// On-wire length declared by the capture record. May exceed
    /// `data.len()` when the snap length truncated the frame.
    pub declared_len: u32,
    /// Captured bytes, consumed read-only by the decoder.
    pub data: Vec<u8>,
}

/// External frame source feeding the decoder.
pub trait FrameSource {
    fn next_frame(&mut self) -> Result<Option<RawFrame>, SourceError>;
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("PCAP parse error: {0}")]
    Pcap(String),
}

impl From<pcap::error::PcapSourceError> for SourceError {
    fn from(value: pcap::error::PcapSourceError) -> Self {
        match value {
            pcap::error::PcapSourceError::Io(err) => SourceError::Io(err),
            pcap::error::PcapSourceError::Pcap { context, message } => {
                SourceError::Pcap(format!("{context}: {message}"))
            }
        }
    }
}
