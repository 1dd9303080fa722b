//! PCAP/PCAPNG source implementation.
//!
//! This module provides a `FrameSource` backed by PCAP or PCAPNG files. It
//! handles file I/O and container-level parsing, emitting raw frames (bytes
//! plus timestamp and declared on-wire length) for the decode pipeline.

pub mod error;
pub mod layout;
pub mod parser;
pub mod reader;

pub use parser::PcapFileSource;
