use thiserror::Error;

/// Error raised while pulling frames out of a capture file.
///
/// `Io` covers everything the filesystem can do wrong; `Pcap` wraps a
/// pcap-parser failure together with the reader step that hit it, so a
/// bad file reports whether it died at open, refill, or mid-stream.
#[derive(Debug, Error)]
pub enum PcapSourceError {
    #[error("capture file I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed capture ({context}): {message}")]
    Pcap {
        context: &'static str,
        message: String,
    },
}
