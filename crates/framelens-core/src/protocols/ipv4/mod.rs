//! IPv4 network-layer decoding.
//!
//! The parser validates the version nibble, derives the header length from
//! the IHL field (words of four bytes, 20..=available), and consumes
//! exactly that many bytes; options are skipped without being decoded.
//! The header-declared total length is recorded but never trusted for
//! payload slicing, so a lying header cannot cause an over-read.

pub mod layout;
pub mod parser;

pub use parser::{Ipv4Layer, parse_ipv4};
