//! # bytecursor
//!
//! Sequential, auto-expanding binary read/write cursor over a contiguous
//! byte region.
//!
//! This crate provides:
//! - [`SequentialCursor`] - one moving offset shared between reads and
//!   writes, with fixed-width integer/float codecs in both byte orders and
//!   raw-bytes/string codecs
//! - Transparent storage growth when a write would overflow, by a
//!   configurable growth factor (disable it to make overflow a hard error)
//! - [`ReadBytes`]/[`WriteBytes`] traits for bounds-checked positional
//!   access to any byte region
//! - Error types for out-of-space, out-of-bounds, and invalid-seek
//!   conditions
//!
//! The cursor interprets nothing: no framing, no schema, no checksums.
//! It is the byte-layout substrate a protocol encoder/decoder is built on.

pub mod buffer;
pub mod builder;
pub mod cursor;
pub mod error;

pub use buffer::{ReadBytes, WriteBytes};
pub use builder::CursorBuilder;
pub use cursor::{DEFAULT_CAPACITY, DEFAULT_GROWTH_FACTOR, SequentialCursor};
pub use error::{Error, Result};
