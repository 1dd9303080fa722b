use std::fs::File;
use std::path::Path;

use pcap_parser::{
    Block, LegacyPcapReader, PcapBlockOwned, PcapNGReader, traits::PcapReaderIterator,
};

use crate::source::{FrameSource, RawFrame, SourceError};

use super::error::PcapSourceError;
use super::layout;
use super::reader::{is_pcapng_magic, pcapng_ts_to_seconds, read_magic_and_rewind};

/// Frame source backed by a legacy PCAP or PCAPNG file.
pub struct PcapFileSource {
    inner: PcapReader,
}

enum PcapReader {
    Legacy(LegacyPcapReader<File>),
    Ng(PcapNGReader<File>),
}

impl PcapFileSource {
    pub fn open(path: &Path) -> Result<Self, SourceError> {
        let file = File::open(path).map_err(SourceError::from)?;
        let inner = create_reader(file).map_err(SourceError::from)?;
        Ok(Self { inner })
    }
}

impl FrameSource for PcapFileSource {
    fn next_frame(&mut self) -> Result<Option<RawFrame>, SourceError> {
        next_frame(&mut self.inner).map_err(SourceError::from)
    }
}

fn create_reader(file: File) -> Result<PcapReader, PcapSourceError> {
    let mut file = file;
    let magic = read_magic_and_rewind(&mut file)?;

    if is_pcapng_magic(&magic) {
        let reader = PcapNGReader::new(layout::PCAP_READER_BUFFER_SIZE, file).map_err(|e| {
            PcapSourceError::Pcap {
                context: "pcapng reader init",
                message: e.to_string(),
            }
        })?;
        Ok(PcapReader::Ng(reader))
    } else {
        let reader = LegacyPcapReader::new(layout::PCAP_READER_BUFFER_SIZE, file).map_err(|e| {
            PcapSourceError::Pcap {
                context: "pcap reader init",
                message: e.to_string(),
            }
        })?;
        Ok(PcapReader::Legacy(reader))
    }
}

fn next_frame(reader: &mut PcapReader) -> Result<Option<RawFrame>, PcapSourceError> {
    loop {
        match reader {
            PcapReader::Legacy(reader) => match reader.next() {
                Ok((offset, block)) => {
                    let frame = match block {
                        PcapBlockOwned::Legacy(packet) => {
                            let ts = packet.ts_sec as f64 + (packet.ts_usec as f64 * 1e-6);
                            Some(RawFrame {
                                ts: Some(ts),
                                declared_len: packet.origlen,
                                data: packet.data.to_vec(),
                            })
                        }
                        _ => None,
                    };
                    reader.consume(offset);
                    if frame.is_some() {
                        return Ok(frame);
                    }
                }
                Err(pcap_parser::PcapError::Eof) => return Ok(None),
                Err(pcap_parser::PcapError::Incomplete(_)) => {
                    reader.refill().map_err(|e| PcapSourceError::Pcap {
                        context: "pcap reader refill",
                        message: e.to_string(),
                    })?;
                }
                Err(e) => {
                    return Err(PcapSourceError::Pcap {
                        context: "pcap reader next",
                        message: e.to_string(),
                    });
                }
            },
            PcapReader::Ng(reader) => match reader.next() {
                Ok((offset, block)) => {
                    let frame = match block {
                        PcapBlockOwned::NG(Block::EnhancedPacket(packet)) => {
                            let ts = pcapng_ts_to_seconds(packet.ts_high, packet.ts_low);
                            // EPB data is padded to 32-bit alignment; caplen
                            // has the real captured length.
                            let caplen = packet.caplen as usize;
                            let data = packet.data.get(..caplen).unwrap_or(packet.data);
                            Some(RawFrame {
                                ts: Some(ts),
                                declared_len: packet.origlen,
                                data: data.to_vec(),
                            })
                        }
                        _ => None,
                    };
                    reader.consume(offset);
                    if frame.is_some() {
                        return Ok(frame);
                    }
                }
                Err(pcap_parser::PcapError::Eof) => return Ok(None),
                Err(pcap_parser::PcapError::Incomplete(_)) => {
                    reader.refill().map_err(|e| PcapSourceError::Pcap {
                        context: "pcapng reader refill",
                        message: e.to_string(),
                    })?;
                }
                Err(e) => {
                    return Err(PcapSourceError::Pcap {
                        context: "pcapng reader next",
                        message: e.to_string(),
                    });
                }
            },
        }
    }
}
