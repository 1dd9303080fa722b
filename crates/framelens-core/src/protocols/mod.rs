//! Protocol decoding modules.
//!
//! Each protocol follows a layered structure:
//! - `layout`: byte offsets and ranges (source of truth)
//! - `parser`: domain-level decoding (no direct byte indexing)
//!
//! Byte access goes through the shared `common::reader::HeaderReader`, and
//! recoverable structural problems are reported through the shared
//! `error::LayerError`. Parsers are pure and contain no I/O; the `decode`
//! and `source` layers handle dispatch and file access.

pub(crate) mod common;
pub mod error;
pub mod ethernet;
pub mod ipv4;
pub mod raw;
pub mod tcp;
