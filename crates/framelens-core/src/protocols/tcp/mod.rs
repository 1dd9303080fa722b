//! TCP transport-layer decoding.
//!
//! Ports, sequence/acknowledgment numbers and the control-bit flag set are
//! extracted from the fixed 20-byte prefix; the data-offset nibble gives
//! the real header length (options skipped), bounded the same way as the
//! IPv4 header length. Bytes past the header are the application payload.

pub mod layout;
pub mod parser;

pub use parser::{TcpFlags, TcpLayer, parse_tcp};
