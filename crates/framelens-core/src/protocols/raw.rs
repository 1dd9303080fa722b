//! Terminal raw layer for bytes not decoded further.
//!
//! Covers both genuine application payload and unrecognized protocols.
//! Both renderings (lossy UTF-8 text and hex) are always computed over the
//! first [`RENDER_PREFIX_LEN`] bytes so output stays bounded; the full byte
//! length is still recorded on the layer.

use serde::{Deserialize, Serialize};

/// Number of bytes rendered into the text and hex views.
pub const RENDER_PREFIX_LEN: usize = 100;

/// Opaque terminal layer: remaining bytes plus bounded renderings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawLayer {
    /// Full length of the undecoded bytes.
    pub len: usize,
    /// Lossy UTF-8 rendering of the first [`RENDER_PREFIX_LEN`] bytes.
    pub text: String,
    /// Hex rendering of the same prefix.
    pub hex: String,
    pub bytes_consumed: usize,
}

/// Build the terminal layer over the remaining bytes. Never fails.
pub fn build_raw_layer(bytes: &[u8]) -> RawLayer {
    let prefix = &bytes[..bytes.len().min(RENDER_PREFIX_LEN)];
    RawLayer {
        len: bytes.len(),
        text: String::from_utf8_lossy(prefix).into_owned(),
        hex: hex::encode(prefix),
        bytes_consumed: bytes.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::{RENDER_PREFIX_LEN, build_raw_layer};

    #[test]
    fn build_renders_text_and_hex() {
        let layer = build_raw_layer(b"hello");
        assert_eq!(layer.len, 5);
        assert_eq!(layer.bytes_consumed, 5);
        assert_eq!(layer.text, "hello");
        assert_eq!(layer.hex, "68656c6c6f");
    }

    #[test]
    fn build_truncates_renderings_to_prefix() {
        let bytes = vec![b'a'; 250];
        let layer = build_raw_layer(&bytes);
        assert_eq!(layer.len, 250);
        assert_eq!(layer.bytes_consumed, 250);
        assert_eq!(layer.text.len(), RENDER_PREFIX_LEN);
        assert_eq!(layer.hex.len(), RENDER_PREFIX_LEN * 2);
    }

    #[test]
    fn build_non_utf8_is_lossy_not_an_error() {
        let layer = build_raw_layer(&[0xff, 0xfe, b'o', b'k']);
        assert_eq!(layer.hex, "fffe6f6b");
        assert!(layer.text.ends_with("ok"));
    }

    #[test]
    fn build_empty_input() {
        let layer = build_raw_layer(&[]);
        assert_eq!(layer.len, 0);
        assert!(layer.text.is_empty());
        assert!(layer.hex.is_empty());
    }
}
