//! Layer dispatch loop and capture-level decode driver.
//!
//! `decode_frame` runs the bounded dispatch/decode loop for one frame:
//! each iteration either strictly shrinks the remaining buffer or appends
//! the terminal raw layer, so termination is structural. Recoverable layer
//! errors (truncation, version mismatch) end the frame with a raw layer
//! over the remaining bytes; only an empty input frame is a hard error.
//!
//! `decode_capture_source` drives a frame source through the loop, one
//! frame at a time, each decoded independently so a malformed frame never
//! stops the frames after it.

use std::path::Path;

use thiserror::Error;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

use crate::source::{FrameSource, PcapFileSource, SourceError};
use crate::{CaptureSummary, DEFAULT_GENERATED_AT, FrameSummary, Report, make_stub_report};

mod dispatch;
mod layer;

pub use layer::{DecodeResult, DecodedLayer};

use dispatch::{LayerDecoder, ProtocolHint, select_decoder};

use crate::protocols::ethernet::parse_ethernet;
use crate::protocols::ipv4::parse_ipv4;
use crate::protocols::raw::build_raw_layer;
use crate::protocols::tcp::parse_tcp;

/// Fatal decode failure for a single frame.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("empty frame: no bytes to decode")]
    EmptyFrame,
}

/// Errors raised while driving a capture through the decoder.
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Source error: {0}")]
    Source(#[from] SourceError),
}

/// Decode one captured frame into its ordered layers.
///
/// # Examples
/// ```
/// use framelens_core::{DecodedLayer, decode_frame};
///
/// let result = decode_frame(&[0x00; 8])?;
/// assert!(matches!(result.layers[0], DecodedLayer::Raw(_)));
/// # Ok::<(), framelens_core::DecodeError>(())
/// ```
pub fn decode_frame(data: &[u8]) -> Result<DecodeResult, DecodeError> {
    if data.is_empty() {
        return Err(DecodeError::EmptyFrame);
    }

    let mut layers = Vec::new();
    let mut rest = data;
    let mut hint = ProtocolHint::LinkLayer;

    while !rest.is_empty() {
        match select_decoder(hint) {
            LayerDecoder::Ethernet => match parse_ethernet(rest) {
                Ok((ethernet, remaining)) => {
                    hint = ProtocolHint::EtherType(ethernet.ethertype);
                    layers.push(DecodedLayer::Ethernet(ethernet));
                    rest = remaining;
                }
                Err(_) => {
                    layers.push(DecodedLayer::Raw(build_raw_layer(rest)));
                    break;
                }
            },
            LayerDecoder::Ipv4 => match parse_ipv4(rest) {
                Ok((ipv4, remaining)) => {
                    hint = ProtocolHint::IpProtocol(ipv4.protocol);
                    layers.push(DecodedLayer::Ipv4(ipv4));
                    rest = remaining;
                }
                Err(_) => {
                    layers.push(DecodedLayer::Raw(build_raw_layer(rest)));
                    break;
                }
            },
            LayerDecoder::Tcp => match parse_tcp(rest) {
                Ok((tcp, remaining)) => {
                    hint = ProtocolHint::Payload;
                    layers.push(DecodedLayer::Tcp(tcp));
                    rest = remaining;
                }
                Err(_) => {
                    layers.push(DecodedLayer::Raw(build_raw_layer(rest)));
                    break;
                }
            },
            LayerDecoder::Raw => {
                layers.push(DecodedLayer::Raw(build_raw_layer(rest)));
                break;
            }
        }
    }

    Ok(DecodeResult { layers })
}

/// Decode every frame of a PCAP/PCAPNG file into a report.
pub fn decode_capture_file(path: &Path) -> Result<Report, CaptureError> {
    let source = PcapFileSource::open(path)?;
    decode_capture_source(path, source, None)
}

/// Drive a frame source through the decoder, one independent decode per
/// frame. `limit` caps the number of decoded frames; empty frames are
/// counted and skipped, never fatal for the capture.
pub fn decode_capture_source<S: FrameSource>(
    path: &Path,
    mut source: S,
    limit: Option<u64>,
) -> Result<Report, CaptureError> {
    let mut frames: Vec<FrameSummary> = Vec::new();
    let mut frames_total = 0u64;
    let mut frames_skipped_empty = 0u64;
    let mut first_ts = None;
    let mut last_ts = None;

    loop {
        if limit.is_some_and(|limit| frames.len() as u64 >= limit) {
            break;
        }
        let Some(frame) = source.next_frame()? else {
            break;
        };
        let index = frames_total;
        frames_total += 1;
        update_ts_bounds(&mut first_ts, &mut last_ts, frame.ts);

        match decode_frame(&frame.data) {
            Ok(result) => frames.push(FrameSummary {
                index,
                timestamp: ts_to_rfc3339(frame.ts),
                declared_len: frame.declared_len,
                captured_len: frame.data.len(),
                layers: result.layers,
            }),
            Err(DecodeError::EmptyFrame) => frames_skipped_empty += 1,
        }
    }

    let mut report = make_stub_report(&path.display().to_string(), path.metadata()?.len());
    report.capture_summary = Some(CaptureSummary {
        frames_total,
        frames_skipped_empty,
        time_start: ts_to_rfc3339(first_ts),
        time_end: ts_to_rfc3339(last_ts),
    });
    report.generated_at = report
        .capture_summary
        .as_ref()
        .and_then(|summary| summary.time_end.clone().or(summary.time_start.clone()))
        .unwrap_or_else(|| DEFAULT_GENERATED_AT.to_string());
    report.frames = frames;
    Ok(report)
}

fn update_ts_bounds(first: &mut Option<f64>, last: &mut Option<f64>, ts: Option<f64>) {
    let ts = match ts {
        Some(ts) => ts,
        None => return,
    };
    match first {
        None => *first = Some(ts),
        Some(existing) => {
            if ts < *existing {
                *first = Some(ts);
            }
        }
    }
    match last {
        None => *last = Some(ts),
        Some(existing) => {
            if ts > *existing {
                *last = Some(ts);
            }
        }
    }
}

fn ts_to_rfc3339(ts: Option<f64>) -> Option<String> {
    let ts = ts?;
    let nanos = (ts * 1_000_000_000.0) as i128;
    OffsetDateTime::from_unix_timestamp_nanos(nanos)
        .ok()
        .and_then(|dt| dt.format(&Rfc3339).ok())
}

#[cfg(test)]
mod tests {
    use super::{DecodeError, decode_frame, ts_to_rfc3339, update_ts_bounds};
    use crate::DecodedLayer;

    #[test]
    fn empty_frame_is_fatal() {
        assert_eq!(decode_frame(&[]).unwrap_err(), DecodeError::EmptyFrame);
    }

    #[test]
    fn short_frame_is_one_raw_layer() {
        let result = decode_frame(&[1, 2, 3]).unwrap();
        assert_eq!(result.layers.len(), 1);
        match &result.layers[0] {
            DecodedLayer::Raw(raw) => assert_eq!(raw.len, 3),
            other => panic!("expected raw layer, got {}", other.name()),
        }
        assert_eq!(result.total_consumed(), 3);
    }

    #[test]
    fn decode_is_deterministic() {
        let frame: Vec<u8> = (0..64).collect();
        let first = decode_frame(&frame).unwrap();
        let second = decode_frame(&frame).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn ts_bounds_track_min_and_max() {
        let mut first = None;
        let mut last = None;
        update_ts_bounds(&mut first, &mut last, Some(5.0));
        update_ts_bounds(&mut first, &mut last, Some(2.0));
        update_ts_bounds(&mut first, &mut last, None);
        update_ts_bounds(&mut first, &mut last, Some(9.0));
        assert_eq!(first, Some(2.0));
        assert_eq!(last, Some(9.0));
    }

    #[test]
    fn ts_to_rfc3339_formats_epoch() {
        assert_eq!(
            ts_to_rfc3339(Some(0.0)).as_deref(),
            Some("1970-01-01T00:00:00Z")
        );
        assert_eq!(ts_to_rfc3339(None), None);
    }
}
