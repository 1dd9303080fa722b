use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use framelens_core::{
    DecodedLayer, PcapFileSource, REPORT_VERSION, decode_capture_file, decode_capture_source,
};

fn temp_path(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    let unique = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    path.push(format!("framelens_{name}_{unique}.pcap"));
    path
}

fn write_legacy_pcap(path: &PathBuf, frames: &[(u32, Vec<u8>)]) {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&0xa1b2_c3d4u32.to_le_bytes());
    bytes.extend_from_slice(&2u16.to_le_bytes());
    bytes.extend_from_slice(&4u16.to_le_bytes());
    bytes.extend_from_slice(&0i32.to_le_bytes());
    bytes.extend_from_slice(&0u32.to_le_bytes());
    bytes.extend_from_slice(&65535u32.to_le_bytes());
    bytes.extend_from_slice(&1u32.to_le_bytes());
    for (ts_sec, data) in frames {
        bytes.extend_from_slice(&ts_sec.to_le_bytes());
        bytes.extend_from_slice(&0u32.to_le_bytes());
        bytes.extend_from_slice(&(data.len() as u32).to_le_bytes());
        bytes.extend_from_slice(&(data.len() as u32).to_le_bytes());
        bytes.extend_from_slice(data);
    }
    fs::write(path, bytes).unwrap();
}

fn syn_frame() -> Vec<u8> {
    let mut tcp = vec![0u8; 20];
    tcp[0..2].copy_from_slice(&49152u16.to_be_bytes());
    tcp[2..4].copy_from_slice(&80u16.to_be_bytes());
    tcp[12] = 5 << 4;
    tcp[13] = 0x02;
    tcp.extend_from_slice(b"hello");

    let total_len = (20 + tcp.len()) as u16;
    let mut ip = vec![0u8; 20];
    ip[0] = 0x45;
    ip[2..4].copy_from_slice(&total_len.to_be_bytes());
    ip[9] = 6;
    ip[12..16].copy_from_slice(&[192, 168, 0, 1]);
    ip[16..20].copy_from_slice(&[192, 168, 0, 2]);
    ip.extend_from_slice(&tcp);

    let mut frame = vec![0u8; 12];
    frame.extend_from_slice(&0x0800u16.to_be_bytes());
    frame.extend_from_slice(&ip);
    frame
}

#[test]
fn capture_report_decodes_each_frame_independently() {
    let path = temp_path("report");
    // A malformed frame sits between two good ones; it must not stop them.
    write_legacy_pcap(
        &path,
        &[
            (100, syn_frame()),
            (150, vec![0xde, 0xad]),
            (200, syn_frame()),
        ],
    );

    let report = decode_capture_file(&path).unwrap();
    let _ = fs::remove_file(&path);

    assert_eq!(report.report_version, REPORT_VERSION);
    assert_eq!(report.tool.name, "framelens");
    assert_eq!(report.frames.len(), 3);

    let summary = report.capture_summary.expect("capture summary");
    assert_eq!(summary.frames_total, 3);
    assert_eq!(summary.frames_skipped_empty, 0);
    assert_eq!(summary.time_start.as_deref(), Some("1970-01-01T00:01:40Z"));
    assert_eq!(summary.time_end.as_deref(), Some("1970-01-01T00:03:20Z"));
    assert_eq!(report.generated_at, "1970-01-01T00:03:20Z");

    let first = &report.frames[0];
    assert_eq!(first.index, 0);
    assert_eq!(first.captured_len, 59);
    assert_eq!(first.layers.len(), 4);

    let middle = &report.frames[1];
    assert_eq!(middle.layers.len(), 1);
    assert!(matches!(middle.layers[0], DecodedLayer::Raw(_)));

    let last = &report.frames[2];
    assert_eq!(last.index, 2);
    assert_eq!(last.layers.len(), 4);
}

#[test]
fn capture_report_skips_empty_frames() {
    let path = temp_path("empty_frames");
    write_legacy_pcap(&path, &[(1, vec![]), (2, syn_frame())]);

    let report = decode_capture_file(&path).unwrap();
    let _ = fs::remove_file(&path);

    let summary = report.capture_summary.expect("capture summary");
    assert_eq!(summary.frames_total, 2);
    assert_eq!(summary.frames_skipped_empty, 1);
    assert_eq!(report.frames.len(), 1);
    assert_eq!(report.frames[0].index, 1);
}

#[test]
fn capture_report_honors_frame_limit() {
    let path = temp_path("limit");
    write_legacy_pcap(
        &path,
        &[(1, syn_frame()), (2, syn_frame()), (3, syn_frame())],
    );

    let source = PcapFileSource::open(&path).unwrap();
    let report = decode_capture_source(&path, source, Some(2)).unwrap();
    let _ = fs::remove_file(&path);

    assert_eq!(report.frames.len(), 2);
    let summary = report.capture_summary.expect("capture summary");
    assert_eq!(summary.frames_total, 2);
}

#[test]
fn capture_report_serializes_layer_tags() {
    let path = temp_path("json");
    write_legacy_pcap(&path, &[(1, syn_frame())]);

    let report = decode_capture_file(&path).unwrap();
    let _ = fs::remove_file(&path);

    let value = serde_json::to_value(&report).unwrap();
    let layers = value["frames"][0]["layers"].as_array().unwrap();
    let tags: Vec<_> = layers
        .iter()
        .map(|layer| layer["layer"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(tags, vec!["ethernet", "ipv4", "tcp", "raw"]);
    assert_eq!(layers[3]["text"], "hello");
}
