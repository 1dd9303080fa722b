//! FrameLens core library for layered decoding of captured frames.
//!
//! This crate implements the decoding pipeline used by the CLI: frame
//! sources feed raw captured bytes into the layer dispatcher, which drives
//! protocol decoders (layout/parser over a bounds-checked reader) and
//! collects the decoded layers of each frame into a deterministic report.
//! Decoding is byte-oriented and side-effect free; all I/O is isolated in
//! `source` modules. Byte offsets live in per-protocol `layout` modules so
//! parsers never index buffers directly.
//!
//! Invariants:
//! - Layer order in a decode result is outermost to innermost.
//! - The consumed-byte counts of all layers sum to the frame length.
//! - A structural failure in one layer ends that frame with a raw layer;
//!   it never aborts the surrounding capture.
//!
//! Version française (résumé):
//! Cette crate fournit le cœur de décodage : sources -> répartiteur de
//! couches -> décodeurs de protocoles (layout/parser) -> rapport
//! déterministe. Les E/S restent dans `source`, les positions d'octets dans
//! les modules `layout`. Garanties : ordre des couches stable, somme des
//! octets consommés égale à la taille de la trame, aucune erreur de couche
//! ne stoppe la capture.
//!
//! # Examples
//! ```no_run
//! use std::path::Path;
//!
//! use framelens_core::decode_capture_file;
//!
//! let report = decode_capture_file(Path::new("capture.pcapng"))?;
//! println!("frames decoded: {}", report.frames.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use serde::{Deserialize, Serialize};

mod decode;
mod protocols;
mod source;

pub use decode::{
    CaptureError, DecodeError, DecodeResult, DecodedLayer, decode_capture_file,
    decode_capture_source, decode_frame,
};
pub use protocols::error::LayerError;
pub use protocols::ethernet::{EthernetLayer, MacAddr};
pub use protocols::ipv4::Ipv4Layer;
pub use protocols::raw::RawLayer;
pub use protocols::tcp::{TcpFlags, TcpLayer};
pub use source::{FrameSource, PcapFileSource, RawFrame, SourceError};

/// Current report schema version.
pub const REPORT_VERSION: u32 = 1;
/// Default timestamp used when no capture time is available.
pub const DEFAULT_GENERATED_AT: &str = "1970-01-01T00:00:00Z";

/// Per-capture decode report with deterministic ordering.
///
/// # Examples
/// ```
/// use framelens_core::make_stub_report;
///
/// let report = make_stub_report("capture.pcapng", 123);
/// assert_eq!(report.report_version, framelens_core::REPORT_VERSION);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Report schema version (not the binary version).
    pub report_version: u32,
    /// Tool identification metadata.
    pub tool: ToolInfo,
    /// RFC3339 timestamp representing the report generation time.
    pub generated_at: String,

    /// Input capture metadata.
    pub input: InputInfo,

    /// Optional capture summary (may be empty when unavailable).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capture_summary: Option<CaptureSummary>,
    /// Decoded frames in capture order.
    pub frames: Vec<FrameSummary>,
}

/// Tool metadata embedded in reports.
///
/// # Examples
/// ```
/// use framelens_core::ToolInfo;
///
/// let tool = ToolInfo {
///     name: "framelens".to_string(),
///     version: "0.1.0".to_string(),
/// };
/// assert_eq!(tool.name, "framelens");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    /// Tool name (e.g., "framelens").
    pub name: String,
    /// Tool version (semver).
    pub version: String,
}

/// Input capture metadata embedded in reports.
///
/// # Examples
/// ```
/// use framelens_core::InputInfo;
///
/// let input = InputInfo {
///     path: "capture.pcapng".to_string(),
///     bytes: 1024,
/// };
/// assert_eq!(input.bytes, 1024);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputInfo {
    /// Input path as provided to the decoder.
    pub path: String,
    /// Input size in bytes.
    pub bytes: u64,
}

/// Basic capture summary (timestamps may be absent).
///
/// # Examples
/// ```
/// use framelens_core::CaptureSummary;
///
/// let summary = CaptureSummary {
///     frames_total: 10,
///     frames_skipped_empty: 0,
///     time_start: None,
///     time_end: None,
/// };
/// assert_eq!(summary.frames_total, 10);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureSummary {
    /// Total frame count read from the capture.
    pub frames_total: u64,
    /// Frames skipped because they carried no bytes.
    pub frames_skipped_empty: u64,
    /// RFC3339 timestamp of the first frame (if known).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_start: Option<String>,
    /// RFC3339 timestamp of the last frame (if known).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_end: Option<String>,
}

/// One decoded frame: capture metadata plus its ordered layers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameSummary {
    /// Zero-based position of the frame in the capture.
    pub index: u64,
    /// RFC3339 capture timestamp, when the capture recorded one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    /// On-wire length declared by the capture; may exceed `captured_len`
    /// when the snap length truncated the frame.
    pub declared_len: u32,
    /// Bytes actually present in the capture record.
    pub captured_len: usize,
    /// Decoded layers, outermost to innermost.
    pub layers: Vec<DecodedLayer>,
}

/// Build a stub report with base fields filled and no frames.
///
/// # Examples
/// ```
/// use framelens_core::make_stub_report;
///
/// let report = make_stub_report("capture.pcapng", 123);
/// assert_eq!(report.report_version, framelens_core::REPORT_VERSION);
/// assert!(report.frames.is_empty());
/// ```
pub fn make_stub_report(input_path: &str, input_bytes: u64) -> Report {
    Report {
        report_version: REPORT_VERSION,
        tool: ToolInfo {
            name: "framelens".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        generated_at: DEFAULT_GENERATED_AT.to_string(),
        input: InputInfo {
            path: input_path.to_string(),
            bytes: input_bytes,
        },
        capture_summary: None,
        frames: vec![],
    }
}
