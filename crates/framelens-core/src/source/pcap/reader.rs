use std::io::{Read, Seek, SeekFrom};

use super::error::PcapSourceError;
use super::layout;

/// Read the magic bytes and rewind the reader to the start.
///
/// # Examples
/// This helper is part of an internal module, so the example is marked as
/// text example.
/// ```text
/// use framelens_core::source::pcap::reader::read_magic_and_rewind;
/// use std::io::Cursor;
///
/// let bytes = [0x0a, 0x0d, 0x0d, 0x0a, 0x01];
/// let mut cursor = Cursor::new(bytes);
/// let magic = read_magic_and_rewind(&mut cursor).unwrap();
/// assert_eq!(magic, [0x0a, 0x0d, 0x0d, 0x0a]);
/// ```
///
/// # Errors
/// Returns `PcapSourceError` when the reader cannot be read or rewound.
pub fn read_magic_and_rewind<R: Read + Seek>(reader: &mut R) -> Result<[u8; 4], PcapSourceError> {
    let mut magic = [0u8; 4];
    reader.read_exact(&mut magic)?;
    reader.seek(SeekFrom::Start(0))?;
    Ok(magic)
}

/// Check whether the magic bytes match PCAPNG.
pub fn is_pcapng_magic(magic: &[u8; 4]) -> bool {
    magic == &layout::PCAPNG_MAGIC
}

/// Convert PCAPNG high/low timestamp to seconds.
///
/// Assumes the default microsecond interface resolution.
pub fn pcapng_ts_to_seconds(ts_high: u32, ts_low: u32) -> f64 {
    let ts = ((ts_high as u64) << 32) | (ts_low as u64);
    ts as f64 * 1e-6
}
