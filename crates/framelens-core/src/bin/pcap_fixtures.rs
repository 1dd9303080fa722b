//! Regenerate the demo capture under `demos/`.
//!
//! Writes a small legacy PCAP file exercising every dispatch path: a full
//! Ethernet/IPv4/TCP frame with payload, an unknown ethertype, an unknown
//! IP protocol, and a truncated IPv4 header.

use std::fs;
use std::path::{Path, PathBuf};

const PCAP_MAGIC_LE: u32 = 0xa1b2_c3d4;
const PCAP_VERSION_MAJOR: u16 = 2;
const PCAP_VERSION_MINOR: u16 = 4;
const PCAP_SNAPLEN: u32 = 65535;
const LINKTYPE_ETHERNET: u32 = 1;

const ETHERTYPE_IPV4: u16 = 0x0800;
const ETHERTYPE_ARP: u16 = 0x0806;
const IP_PROTO_TCP: u8 = 6;
const IP_PROTO_UDP: u8 = 17;
const TCP_FLAG_SYN: u8 = 0x02;

fn main() -> Result<(), String> {
    let root = PathBuf::from("demos");
    write_capture(&root.join("sample.pcap"), sample_frames())?;
    Ok(())
}

fn sample_frames() -> Vec<Vec<u8>> {
    let tcp = ethernet_frame(
        ETHERTYPE_IPV4,
        &ipv4_packet(IP_PROTO_TCP, &tcp_segment(TCP_FLAG_SYN, b"hello")),
    );
    let arp = ethernet_frame(ETHERTYPE_ARP, &[0u8; 28]);
    let udp = ethernet_frame(ETHERTYPE_IPV4, &ipv4_packet(IP_PROTO_UDP, b"datagram"));

    // IPv4 header declaring 60 bytes (IHL 15) with only 20 present.
    let mut truncated_ip = ipv4_packet(IP_PROTO_TCP, &[]);
    truncated_ip[0] = 0x4f;
    let truncated = ethernet_frame(ETHERTYPE_IPV4, &truncated_ip);

    vec![tcp, arp, udp, truncated]
}

fn ethernet_frame(ethertype: u16, payload: &[u8]) -> Vec<u8> {
    let mut frame = Vec::with_capacity(14 + payload.len());
    frame.extend_from_slice(&[0x02, 0x00, 0x00, 0x00, 0x00, 0x01]);
    frame.extend_from_slice(&[0x02, 0x00, 0x00, 0x00, 0x00, 0x02]);
    frame.extend_from_slice(&ethertype.to_be_bytes());
    frame.extend_from_slice(payload);
    frame
}

fn ipv4_packet(protocol: u8, payload: &[u8]) -> Vec<u8> {
    let total_len = (20 + payload.len()) as u16;
    let mut packet = vec![0u8; 20];
    packet[0] = 0x45;
    packet[2..4].copy_from_slice(&total_len.to_be_bytes());
    packet[8] = 64;
    packet[9] = protocol;
    packet[12..16].copy_from_slice(&[192, 168, 0, 10]);
    packet[16..20].copy_from_slice(&[192, 168, 0, 20]);
    packet.extend_from_slice(payload);
    packet
}

fn tcp_segment(flags: u8, payload: &[u8]) -> Vec<u8> {
    let mut segment = vec![0u8; 20];
    segment[0..2].copy_from_slice(&49152u16.to_be_bytes());
    segment[2..4].copy_from_slice(&80u16.to_be_bytes());
    segment[4..8].copy_from_slice(&1u32.to_be_bytes());
    segment[12] = 5 << 4;
    segment[13] = flags;
    segment[14..16].copy_from_slice(&65535u16.to_be_bytes());
    segment.extend_from_slice(payload);
    segment
}

fn write_capture(path: &Path, frames: Vec<Vec<u8>>) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|err| format!("failed to create {}: {}", parent.display(), err))?;
    }

    let mut bytes = Vec::new();
    bytes.extend_from_slice(&PCAP_MAGIC_LE.to_le_bytes());
    bytes.extend_from_slice(&PCAP_VERSION_MAJOR.to_le_bytes());
    bytes.extend_from_slice(&PCAP_VERSION_MINOR.to_le_bytes());
    bytes.extend_from_slice(&0i32.to_le_bytes());
    bytes.extend_from_slice(&0u32.to_le_bytes());
    bytes.extend_from_slice(&PCAP_SNAPLEN.to_le_bytes());
    bytes.extend_from_slice(&LINKTYPE_ETHERNET.to_le_bytes());

    for (index, frame) in frames.iter().enumerate() {
        bytes.extend_from_slice(&(index as u32).to_le_bytes());
        bytes.extend_from_slice(&0u32.to_le_bytes());
        bytes.extend_from_slice(&(frame.len() as u32).to_le_bytes());
        bytes.extend_from_slice(&(frame.len() as u32).to_le_bytes());
        bytes.extend_from_slice(frame);
    }

    fs::write(path, bytes).map_err(|err| format!("failed to write {}: {}", path.display(), err))
}
