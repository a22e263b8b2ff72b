//! The sequential read/write cursor.
//!
//! [`SequentialCursor`] owns a growable byte region and a single moving
//! offset shared between reads and writes. Fixed-width codecs exist for
//! both byte orders, plus raw-bytes and UTF-8 string codecs. Writes that
//! would overflow the region grow it transparently by the configured
//! growth factor; reads past the allocated extent fail with
//! [`Error::OutOfBounds`].

use crate::buffer::{ReadBytes, WriteBytes};
use crate::builder::CursorBuilder;
use crate::error::{Error, Result};

/// Default capacity of a freshly allocated cursor, in bytes.
pub const DEFAULT_CAPACITY: usize = 1024;

/// Default growth factor applied when a write overflows the storage.
pub const DEFAULT_GROWTH_FACTOR: usize = 2;

/// Sequential, auto-expanding binary read/write cursor.
///
/// One offset is shared between reading and writing; every codec call
/// advances it by the width it consumed or produced. A write that would
/// run past the allocated region multiplies the capacity by the growth
/// factor until it fits, in a single reallocation that preserves all
/// previously written bytes. With growth disabled (factor below 2) an
/// overflowing write fails with [`Error::OutOfSpace`] and leaves the
/// cursor untouched.
///
/// A cursor is not safe for concurrent mutation; exclusive access is the
/// caller's responsibility and is enforced here by `&mut self` receivers.
///
/// # Example
/// ```
/// use bytecursor::SequentialCursor;
///
/// let mut cur = SequentialCursor::with_capacity(4);
/// cur.write_u32_be(0x0102_0304)?;
/// cur.write_string("héllo")?; // grows the storage
///
/// cur.seek(0);
/// assert_eq!(cur.next_u32_be()?, 0x0102_0304);
/// assert_eq!(cur.next_string(6)?, "héllo");
/// # Ok::<(), bytecursor::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct SequentialCursor {
    storage: Vec<u8>,
    offset: usize,
    growth_factor: usize,
}

impl SequentialCursor {
    /// Creates a cursor over a fresh zero-filled region of
    /// [`DEFAULT_CAPACITY`] bytes, with the default growth factor.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a cursor over a fresh zero-filled region of `capacity`
    /// bytes, with the default growth factor.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_parts(vec![0; capacity], DEFAULT_GROWTH_FACTOR)
    }

    /// Wraps an existing byte region without copying it.
    ///
    /// The capacity is the region's length and the offset starts at 0, so
    /// reads consume the existing content from the front.
    #[must_use]
    pub fn from_vec(storage: Vec<u8>) -> Self {
        Self::from_parts(storage, DEFAULT_GROWTH_FACTOR)
    }

    /// Returns a builder for configuring capacity and growth factor.
    #[must_use]
    pub fn builder() -> CursorBuilder {
        CursorBuilder::new()
    }

    pub(crate) fn from_parts(storage: Vec<u8>, growth_factor: usize) -> Self {
        Self {
            storage,
            offset: 0,
            growth_factor,
        }
    }

    /// Returns the current offset.
    #[must_use]
    pub const fn tell(&self) -> usize {
        self.offset
    }

    /// Returns the allocated capacity in bytes.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Returns the configured growth factor.
    #[must_use]
    pub const fn growth_factor(&self) -> usize {
        self.growth_factor
    }

    /// Returns true if an overflowing write grows the storage instead of
    /// failing.
    ///
    /// Factors 0 and 1 disable growth: 0 by convention, 1 because
    /// multiplying by it can never satisfy a larger demand.
    #[must_use]
    pub const fn is_growth_enabled(&self) -> bool {
        self.growth_factor >= 2
    }

    /// Returns the bytes between the current offset and the allocated end.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.storage.len().saturating_sub(self.offset)
    }

    /// Moves the offset to an absolute position.
    ///
    /// No bounds check is performed; an out-of-range offset is caught by
    /// the next read (as [`Error::OutOfBounds`]) or absorbed by the next
    /// write (which grows the storage as usual).
    pub fn seek(&mut self, offset: usize) {
        self.offset = offset;
    }

    /// Moves the offset by a signed displacement.
    ///
    /// # Errors
    /// Fails with [`Error::InvalidOffset`] if the resulting position would
    /// fall below zero or past `usize::MAX`; the offset is unchanged.
    pub fn seek_relative(&mut self, delta: i64) -> Result<()> {
        let target = if delta >= 0 {
            self.offset.checked_add(delta as usize)
        } else {
            self.offset.checked_sub(delta.unsigned_abs() as usize)
        };
        match target {
            Some(t) => {
                self.offset = t;
                Ok(())
            }
            None => Err(Error::InvalidOffset {
                offset: self.offset,
                delta,
            }),
        }
    }

    /// Reserves `len` bytes at the current offset and advances past them.
    ///
    /// This is the single choke point all writes funnel through. On
    /// success the returned start offset is guaranteed writable for `len`
    /// bytes. If the reservation runs past the allocated end, the capacity
    /// is multiplied by the growth factor until it fits; the single
    /// reallocation preserves all previously written bytes and zero-fills
    /// the rest. Growth never shrinks the storage.
    ///
    /// # Errors
    /// Fails with [`Error::OutOfSpace`] when growth is disabled (or the
    /// required size is not representable). The tentative offset advance
    /// is rolled back, so the cursor stays usable for a retry.
    pub fn reserve(&mut self, len: usize) -> Result<usize> {
        let start = self.offset;
        let Some(end) = start.checked_add(len) else {
            return Err(Error::OutOfSpace {
                required: usize::MAX,
                capacity: self.storage.len(),
            });
        };
        self.offset = end;

        if end <= self.storage.len() {
            return Ok(start);
        }

        if !self.is_growth_enabled() {
            self.offset = start;
            return Err(Error::OutOfSpace {
                required: end,
                capacity: self.storage.len(),
            });
        }

        let old_size = self.storage.len();
        // A wrapped zero-length region seeds the loop at 1 so it terminates.
        let mut new_size = old_size.max(1);
        while new_size < end {
            new_size = match new_size.checked_mul(self.growth_factor) {
                Some(n) => n,
                None => {
                    self.offset = start;
                    return Err(Error::OutOfSpace {
                        required: end,
                        capacity: old_size,
                    });
                }
            };
        }

        tracing::trace!(
            "growing cursor storage: {} -> {} bytes ({} reserved)",
            old_size,
            new_size,
            len
        );
        self.storage.resize(new_size, 0);
        Ok(start)
    }

    /// Reads an `i8` and advances the offset by 1.
    pub fn next_i8(&mut self) -> Result<i8> {
        let v = self.storage.get_i8(self.offset)?;
        self.offset += 1;
        Ok(v)
    }

    /// Reads a `u8` and advances the offset by 1.
    pub fn next_u8(&mut self) -> Result<u8> {
        let v = self.storage.get_u8(self.offset)?;
        self.offset += 1;
        Ok(v)
    }

    /// Reads a big-endian `i16` and advances the offset by 2.
    pub fn next_i16_be(&mut self) -> Result<i16> {
        let v = self.storage.get_i16_be(self.offset)?;
        self.offset += 2;
        Ok(v)
    }

    /// Reads a little-endian `i16` and advances the offset by 2.
    pub fn next_i16_le(&mut self) -> Result<i16> {
        let v = self.storage.get_i16_le(self.offset)?;
        self.offset += 2;
        Ok(v)
    }

    /// Reads a big-endian `u16` and advances the offset by 2.
    pub fn next_u16_be(&mut self) -> Result<u16> {
        let v = self.storage.get_u16_be(self.offset)?;
        self.offset += 2;
        Ok(v)
    }

    /// Reads a little-endian `u16` and advances the offset by 2.
    pub fn next_u16_le(&mut self) -> Result<u16> {
        let v = self.storage.get_u16_le(self.offset)?;
        self.offset += 2;
        Ok(v)
    }

    /// Reads a big-endian `i32` and advances the offset by 4.
    pub fn next_i32_be(&mut self) -> Result<i32> {
        let v = self.storage.get_i32_be(self.offset)?;
        self.offset += 4;
        Ok(v)
    }

    /// Reads a little-endian `i32` and advances the offset by 4.
    pub fn next_i32_le(&mut self) -> Result<i32> {
        let v = self.storage.get_i32_le(self.offset)?;
        self.offset += 4;
        Ok(v)
    }

    /// Reads a big-endian `u32` and advances the offset by 4.
    pub fn next_u32_be(&mut self) -> Result<u32> {
        let v = self.storage.get_u32_be(self.offset)?;
        self.offset += 4;
        Ok(v)
    }

    /// Reads a little-endian `u32` and advances the offset by 4.
    pub fn next_u32_le(&mut self) -> Result<u32> {
        let v = self.storage.get_u32_le(self.offset)?;
        self.offset += 4;
        Ok(v)
    }

    /// Reads a big-endian `f32` and advances the offset by 4.
    pub fn next_f32_be(&mut self) -> Result<f32> {
        let v = self.storage.get_f32_be(self.offset)?;
        self.offset += 4;
        Ok(v)
    }

    /// Reads a little-endian `f32` and advances the offset by 4.
    pub fn next_f32_le(&mut self) -> Result<f32> {
        let v = self.storage.get_f32_le(self.offset)?;
        self.offset += 4;
        Ok(v)
    }

    /// Reads a big-endian `f64` and advances the offset by 8.
    pub fn next_f64_be(&mut self) -> Result<f64> {
        let v = self.storage.get_f64_be(self.offset)?;
        self.offset += 8;
        Ok(v)
    }

    /// Reads a little-endian `f64` and advances the offset by 8.
    pub fn next_f64_le(&mut self) -> Result<f64> {
        let v = self.storage.get_f64_le(self.offset)?;
        self.offset += 8;
        Ok(v)
    }

    /// Reads `len` bytes into a freshly owned buffer and advances the
    /// offset by `len`.
    pub fn next_bytes(&mut self, len: usize) -> Result<Vec<u8>> {
        let v = self.storage.get_bytes(self.offset, len)?.to_vec();
        self.offset += len;
        Ok(v)
    }

    /// Returns a zero-copy view of the next `len` bytes and advances the
    /// offset by `len`.
    ///
    /// The view borrows the cursor, so it cannot outlive the next write;
    /// a growth-triggering write invalidating the storage it points into
    /// is therefore impossible to express.
    pub fn next_shadow(&mut self, len: usize) -> Result<&[u8]> {
        let start = self.offset;
        let Some(end) = start.checked_add(len) else {
            return Err(Error::OutOfBounds {
                offset: start,
                len,
                capacity: self.storage.len(),
            });
        };
        if end > self.storage.len() {
            return Err(Error::OutOfBounds {
                offset: start,
                len,
                capacity: self.storage.len(),
            });
        }
        self.offset = end;
        Ok(&self.storage[start..end])
    }

    /// Reads `len` bytes as UTF-8 text and advances the offset by `len`.
    ///
    /// Invalid sequences are replaced with U+FFFD rather than failing, per
    /// standard lossy UTF-8 decoding.
    pub fn next_string(&mut self, len: usize) -> Result<String> {
        let s = String::from_utf8_lossy(self.storage.get_bytes(self.offset, len)?).into_owned();
        self.offset += len;
        Ok(s)
    }

    /// Writes an `i8` at the current offset.
    pub fn write_i8(&mut self, value: i8) -> Result<()> {
        let o = self.reserve(1)?;
        self.storage.put_i8(o, value)
    }

    /// Writes a `u8` at the current offset.
    pub fn write_u8(&mut self, value: u8) -> Result<()> {
        let o = self.reserve(1)?;
        self.storage.put_u8(o, value)
    }

    /// Writes a big-endian `i16` at the current offset.
    pub fn write_i16_be(&mut self, value: i16) -> Result<()> {
        let o = self.reserve(2)?;
        self.storage.put_i16_be(o, value)
    }

    /// Writes a little-endian `i16` at the current offset.
    pub fn write_i16_le(&mut self, value: i16) -> Result<()> {
        let o = self.reserve(2)?;
        self.storage.put_i16_le(o, value)
    }

    /// Writes a big-endian `u16` at the current offset.
    pub fn write_u16_be(&mut self, value: u16) -> Result<()> {
        let o = self.reserve(2)?;
        self.storage.put_u16_be(o, value)
    }

    /// Writes a little-endian `u16` at the current offset.
    pub fn write_u16_le(&mut self, value: u16) -> Result<()> {
        let o = self.reserve(2)?;
        self.storage.put_u16_le(o, value)
    }

    /// Writes a big-endian `i32` at the current offset.
    pub fn write_i32_be(&mut self, value: i32) -> Result<()> {
        let o = self.reserve(4)?;
        self.storage.put_i32_be(o, value)
    }

    /// Writes a little-endian `i32` at the current offset.
    pub fn write_i32_le(&mut self, value: i32) -> Result<()> {
        let o = self.reserve(4)?;
        self.storage.put_i32_le(o, value)
    }

    /// Writes a big-endian `u32` at the current offset.
    pub fn write_u32_be(&mut self, value: u32) -> Result<()> {
        let o = self.reserve(4)?;
        self.storage.put_u32_be(o, value)
    }

    /// Writes a little-endian `u32` at the current offset.
    pub fn write_u32_le(&mut self, value: u32) -> Result<()> {
        let o = self.reserve(4)?;
        self.storage.put_u32_le(o, value)
    }

    /// Writes a big-endian `f32` at the current offset.
    pub fn write_f32_be(&mut self, value: f32) -> Result<()> {
        let o = self.reserve(4)?;
        self.storage.put_f32_be(o, value)
    }

    /// Writes a little-endian `f32` at the current offset.
    pub fn write_f32_le(&mut self, value: f32) -> Result<()> {
        let o = self.reserve(4)?;
        self.storage.put_f32_le(o, value)
    }

    /// Writes a big-endian `f64` at the current offset.
    pub fn write_f64_be(&mut self, value: f64) -> Result<()> {
        let o = self.reserve(8)?;
        self.storage.put_f64_be(o, value)
    }

    /// Writes a little-endian `f64` at the current offset.
    pub fn write_f64_le(&mut self, value: f64) -> Result<()> {
        let o = self.reserve(8)?;
        self.storage.put_f64_le(o, value)
    }

    /// Copies a byte slice in at the current offset.
    pub fn write_bytes(&mut self, src: &[u8]) -> Result<()> {
        let o = self.reserve(src.len())?;
        self.storage.put_bytes(o, src)
    }

    /// Encodes a string as UTF-8 at the current offset.
    ///
    /// Exactly the string's UTF-8 byte length is reserved, so the matching
    /// read is `next_string(text.len())` on the encoded length, not the
    /// character count.
    pub fn write_string(&mut self, text: &str) -> Result<()> {
        self.write_bytes(text.as_bytes())
    }

    /// Returns an owned copy of the logical content written so far, i.e.
    /// bytes `[0, offset)`.
    ///
    /// The copy is independent of the cursor; further writes never mutate
    /// it. The length is the logical offset regardless of how much spare
    /// capacity the storage holds (clamped to the allocated extent when
    /// the offset was seeked past the end).
    #[must_use]
    pub fn snapshot(&self) -> Vec<u8> {
        self.storage[..self.offset.min(self.storage.len())].to_vec()
    }

    /// Consumes the cursor and returns its storage truncated to the
    /// logical content, transferring ownership without a copy.
    #[must_use]
    pub fn into_vec(mut self) -> Vec<u8> {
        self.storage.truncate(self.offset);
        self.storage
    }
}

impl Default for SequentialCursor {
    fn default() -> Self {
        Self::new()
    }
}
