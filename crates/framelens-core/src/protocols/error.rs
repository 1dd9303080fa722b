use thiserror::Error;

/// Recoverable structural problems raised by header decoders.
///
/// The dispatcher converts these into a terminal raw layer covering the
/// remaining bytes; they never abort the frame's decode as a whole.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LayerError {
    #[error("{layer} header truncated: need {needed} bytes, got {available}")]
    Truncated {
        layer: &'static str,
        needed: usize,
        available: usize,
    },
    #[error("{layer} version mismatch: expected {expected}, got {actual}")]
    UnexpectedVersion {
        layer: &'static str,
        expected: u8,
        actual: u8,
    },
}
