//! Checked primitive byte access over contiguous regions.
//!
//! This module provides:
//! - [`ReadBytes`] for positional, bounds-checked primitive reads
//! - [`WriteBytes`] for positional, bounds-checked primitive writes
//!
//! Both traits are implemented for `[u8]`, so any owned or borrowed byte
//! region can serve as backing storage. Every accessor verifies that
//! `offset + width` fits inside the region and fails with
//! [`Error::OutOfBounds`] otherwise; nothing here panics on a short buffer.
//! Multi-byte accessors come in big-endian (`_be`) and little-endian (`_le`)
//! variants. Integers are two's-complement, floats are IEEE-754.

use crate::error::{Error, Result};

#[inline(always)]
fn check(region_len: usize, offset: usize, len: usize) -> Result<()> {
    match offset.checked_add(len) {
        Some(end) if end <= region_len => Ok(()),
        _ => Err(Error::OutOfBounds {
            offset,
            len,
            capacity: region_len,
        }),
    }
}

/// Trait for bounds-checked positional reads from a byte region.
pub trait ReadBytes {
    /// Returns the region as a byte slice.
    fn as_bytes(&self) -> &[u8];

    /// Returns the length of the region in bytes.
    fn region_len(&self) -> usize {
        self.as_bytes().len()
    }

    /// Reads a `u8` at the given offset.
    #[inline(always)]
    fn get_u8(&self, offset: usize) -> Result<u8> {
        check(self.region_len(), offset, 1)?;
        Ok(self.as_bytes()[offset])
    }

    /// Reads an `i8` at the given offset.
    #[inline(always)]
    fn get_i8(&self, offset: usize) -> Result<i8> {
        Ok(self.get_u8(offset)? as i8)
    }

    /// Reads a big-endian `u16` at the given offset.
    #[inline(always)]
    fn get_u16_be(&self, offset: usize) -> Result<u16> {
        check(self.region_len(), offset, 2)?;
        let b = &self.as_bytes()[offset..offset + 2];
        Ok(u16::from_be_bytes([b[0], b[1]]))
    }

    /// Reads a little-endian `u16` at the given offset.
    #[inline(always)]
    fn get_u16_le(&self, offset: usize) -> Result<u16> {
        check(self.region_len(), offset, 2)?;
        let b = &self.as_bytes()[offset..offset + 2];
        Ok(u16::from_le_bytes([b[0], b[1]]))
    }

    /// Reads a big-endian `i16` at the given offset.
    #[inline(always)]
    fn get_i16_be(&self, offset: usize) -> Result<i16> {
        Ok(self.get_u16_be(offset)? as i16)
    }

    /// Reads a little-endian `i16` at the given offset.
    #[inline(always)]
    fn get_i16_le(&self, offset: usize) -> Result<i16> {
        Ok(self.get_u16_le(offset)? as i16)
    }

    /// Reads a big-endian `u32` at the given offset.
    #[inline(always)]
    fn get_u32_be(&self, offset: usize) -> Result<u32> {
        check(self.region_len(), offset, 4)?;
        let b = &self.as_bytes()[offset..offset + 4];
        Ok(u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
    }

    /// Reads a little-endian `u32` at the given offset.
    #[inline(always)]
    fn get_u32_le(&self, offset: usize) -> Result<u32> {
        check(self.region_len(), offset, 4)?;
        let b = &self.as_bytes()[offset..offset + 4];
        Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    /// Reads a big-endian `i32` at the given offset.
    #[inline(always)]
    fn get_i32_be(&self, offset: usize) -> Result<i32> {
        Ok(self.get_u32_be(offset)? as i32)
    }

    /// Reads a little-endian `i32` at the given offset.
    #[inline(always)]
    fn get_i32_le(&self, offset: usize) -> Result<i32> {
        Ok(self.get_u32_le(offset)? as i32)
    }

    /// Reads a big-endian `u64` at the given offset.
    #[inline(always)]
    fn get_u64_be(&self, offset: usize) -> Result<u64> {
        check(self.region_len(), offset, 8)?;
        let b = &self.as_bytes()[offset..offset + 8];
        Ok(u64::from_be_bytes(b.try_into().unwrap()))
    }

    /// Reads a little-endian `u64` at the given offset.
    #[inline(always)]
    fn get_u64_le(&self, offset: usize) -> Result<u64> {
        check(self.region_len(), offset, 8)?;
        let b = &self.as_bytes()[offset..offset + 8];
        Ok(u64::from_le_bytes(b.try_into().unwrap()))
    }

    /// Reads a big-endian IEEE-754 `f32` at the given offset.
    #[inline(always)]
    fn get_f32_be(&self, offset: usize) -> Result<f32> {
        Ok(f32::from_bits(self.get_u32_be(offset)?))
    }

    /// Reads a little-endian IEEE-754 `f32` at the given offset.
    #[inline(always)]
    fn get_f32_le(&self, offset: usize) -> Result<f32> {
        Ok(f32::from_bits(self.get_u32_le(offset)?))
    }

    /// Reads a big-endian IEEE-754 `f64` at the given offset.
    #[inline(always)]
    fn get_f64_be(&self, offset: usize) -> Result<f64> {
        Ok(f64::from_bits(self.get_u64_be(offset)?))
    }

    /// Reads a little-endian IEEE-754 `f64` at the given offset.
    #[inline(always)]
    fn get_f64_le(&self, offset: usize) -> Result<f64> {
        Ok(f64::from_bits(self.get_u64_le(offset)?))
    }

    /// Returns a slice of `len` bytes starting at the given offset.
    ///
    /// # Errors
    /// Fails with [`Error::OutOfBounds`] if the range does not fit inside
    /// the region.
    #[inline(always)]
    fn get_bytes(&self, offset: usize, len: usize) -> Result<&[u8]> {
        check(self.region_len(), offset, len)?;
        Ok(&self.as_bytes()[offset..offset + len])
    }
}

/// Trait for bounds-checked positional writes to a byte region.
///
/// Writing never resizes the region; growth is the cursor's job.
pub trait WriteBytes: ReadBytes {
    /// Returns the region as a mutable byte slice.
    fn as_bytes_mut(&mut self) -> &mut [u8];

    /// Writes a `u8` at the given offset.
    #[inline(always)]
    fn put_u8(&mut self, offset: usize, value: u8) -> Result<()> {
        check(self.region_len(), offset, 1)?;
        self.as_bytes_mut()[offset] = value;
        Ok(())
    }

    /// Writes an `i8` at the given offset.
    #[inline(always)]
    fn put_i8(&mut self, offset: usize, value: i8) -> Result<()> {
        self.put_u8(offset, value as u8)
    }

    /// Writes a big-endian `u16` at the given offset.
    #[inline(always)]
    fn put_u16_be(&mut self, offset: usize, value: u16) -> Result<()> {
        self.put_bytes(offset, &value.to_be_bytes())
    }

    /// Writes a little-endian `u16` at the given offset.
    #[inline(always)]
    fn put_u16_le(&mut self, offset: usize, value: u16) -> Result<()> {
        self.put_bytes(offset, &value.to_le_bytes())
    }

    /// Writes a big-endian `i16` at the given offset.
    #[inline(always)]
    fn put_i16_be(&mut self, offset: usize, value: i16) -> Result<()> {
        self.put_bytes(offset, &value.to_be_bytes())
    }

    /// Writes a little-endian `i16` at the given offset.
    #[inline(always)]
    fn put_i16_le(&mut self, offset: usize, value: i16) -> Result<()> {
        self.put_bytes(offset, &value.to_le_bytes())
    }

    /// Writes a big-endian `u32` at the given offset.
    #[inline(always)]
    fn put_u32_be(&mut self, offset: usize, value: u32) -> Result<()> {
        self.put_bytes(offset, &value.to_be_bytes())
    }

    /// Writes a little-endian `u32` at the given offset.
    #[inline(always)]
    fn put_u32_le(&mut self, offset: usize, value: u32) -> Result<()> {
        self.put_bytes(offset, &value.to_le_bytes())
    }

    /// Writes a big-endian `i32` at the given offset.
    #[inline(always)]
    fn put_i32_be(&mut self, offset: usize, value: i32) -> Result<()> {
        self.put_bytes(offset, &value.to_be_bytes())
    }

    /// Writes a little-endian `i32` at the given offset.
    #[inline(always)]
    fn put_i32_le(&mut self, offset: usize, value: i32) -> Result<()> {
        self.put_bytes(offset, &value.to_le_bytes())
    }

    /// Writes a big-endian `u64` at the given offset.
    #[inline(always)]
    fn put_u64_be(&mut self, offset: usize, value: u64) -> Result<()> {
        self.put_bytes(offset, &value.to_be_bytes())
    }

    /// Writes a little-endian `u64` at the given offset.
    #[inline(always)]
    fn put_u64_le(&mut self, offset: usize, value: u64) -> Result<()> {
        self.put_bytes(offset, &value.to_le_bytes())
    }

    /// Writes a big-endian IEEE-754 `f32` at the given offset.
    #[inline(always)]
    fn put_f32_be(&mut self, offset: usize, value: f32) -> Result<()> {
        self.put_u32_be(offset, value.to_bits())
    }

    /// Writes a little-endian IEEE-754 `f32` at the given offset.
    #[inline(always)]
    fn put_f32_le(&mut self, offset: usize, value: f32) -> Result<()> {
        self.put_u32_le(offset, value.to_bits())
    }

    /// Writes a big-endian IEEE-754 `f64` at the given offset.
    #[inline(always)]
    fn put_f64_be(&mut self, offset: usize, value: f64) -> Result<()> {
        self.put_u64_be(offset, value.to_bits())
    }

    /// Writes a little-endian IEEE-754 `f64` at the given offset.
    #[inline(always)]
    fn put_f64_le(&mut self, offset: usize, value: f64) -> Result<()> {
        self.put_u64_le(offset, value.to_bits())
    }

    /// Copies a byte slice into the region at the given offset.
    ///
    /// # Errors
    /// Fails with [`Error::OutOfBounds`] if the slice does not fit inside
    /// the region; nothing is written in that case.
    #[inline(always)]
    fn put_bytes(&mut self, offset: usize, src: &[u8]) -> Result<()> {
        check(self.region_len(), offset, src.len())?;
        self.as_bytes_mut()[offset..offset + src.len()].copy_from_slice(src);
        Ok(())
    }
}

impl ReadBytes for [u8] {
    #[inline(always)]
    fn as_bytes(&self) -> &[u8] {
        self
    }

    #[inline(always)]
    fn region_len(&self) -> usize {
        self.len()
    }
}

impl WriteBytes for [u8] {
    #[inline(always)]
    fn as_bytes_mut(&mut self) -> &mut [u8] {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_write_primitives() {
        let mut buf = vec![0u8; 64];
        let buf = buf.as_mut_slice();

        buf.put_u8(0, 0xFF).unwrap();
        assert_eq!(buf.get_u8(0).unwrap(), 0xFF);

        buf.put_i8(1, -42).unwrap();
        assert_eq!(buf.get_i8(1).unwrap(), -42);

        buf.put_u16_be(2, 0x1234).unwrap();
        assert_eq!(buf.get_u16_be(2).unwrap(), 0x1234);

        buf.put_u16_le(4, 0x1234).unwrap();
        assert_eq!(buf.get_u16_le(4).unwrap(), 0x1234);

        buf.put_i16_be(6, -1000).unwrap();
        assert_eq!(buf.get_i16_be(6).unwrap(), -1000);

        buf.put_i16_le(8, -1000).unwrap();
        assert_eq!(buf.get_i16_le(8).unwrap(), -1000);

        buf.put_u32_be(10, 0x1234_5678).unwrap();
        assert_eq!(buf.get_u32_be(10).unwrap(), 0x1234_5678);

        buf.put_u32_le(14, 0x1234_5678).unwrap();
        assert_eq!(buf.get_u32_le(14).unwrap(), 0x1234_5678);

        buf.put_i32_be(18, -100_000).unwrap();
        assert_eq!(buf.get_i32_be(18).unwrap(), -100_000);

        buf.put_i32_le(22, -100_000).unwrap();
        assert_eq!(buf.get_i32_le(22).unwrap(), -100_000);

        buf.put_f32_be(26, std::f32::consts::PI).unwrap();
        assert_eq!(buf.get_f32_be(26).unwrap(), std::f32::consts::PI);

        buf.put_f32_le(30, std::f32::consts::PI).unwrap();
        assert_eq!(buf.get_f32_le(30).unwrap(), std::f32::consts::PI);

        buf.put_f64_be(34, std::f64::consts::E).unwrap();
        assert_eq!(buf.get_f64_be(34).unwrap(), std::f64::consts::E);

        buf.put_f64_le(42, std::f64::consts::E).unwrap();
        assert_eq!(buf.get_f64_le(42).unwrap(), std::f64::consts::E);
    }

    #[test]
    fn test_endianness_layout() {
        let mut buf = vec![0u8; 8];
        let buf = buf.as_mut_slice();

        buf.put_u32_be(0, 0x0102_0304).unwrap();
        assert_eq!(&buf[0..4], &[0x01, 0x02, 0x03, 0x04]);

        buf.put_u32_le(4, 0x0102_0304).unwrap();
        assert_eq!(&buf[4..8], &[0x04, 0x03, 0x02, 0x01]);
    }

    #[test]
    fn test_read_write_bytes() {
        let mut buf = vec![0u8; 16];
        let buf = buf.as_mut_slice();
        buf.put_bytes(3, b"hello").unwrap();
        assert_eq!(buf.get_bytes(3, 5).unwrap(), b"hello");
    }

    #[test]
    fn test_out_of_bounds_read() {
        let buf: &[u8] = &[1, 2, 3];
        assert_eq!(
            buf.get_u32_be(0),
            Err(Error::OutOfBounds {
                offset: 0,
                len: 4,
                capacity: 3
            })
        );
        assert_eq!(
            buf.get_u8(3),
            Err(Error::OutOfBounds {
                offset: 3,
                len: 1,
                capacity: 3
            })
        );
    }

    #[test]
    fn test_out_of_bounds_write_leaves_region_untouched() {
        let mut buf = vec![0u8; 4];
        let buf = buf.as_mut_slice();
        assert!(buf.put_u64_be(0, 1).is_err());
        assert_eq!(buf, &[0, 0, 0, 0]);
    }

    #[test]
    fn test_offset_overflow_is_out_of_bounds() {
        let buf: &[u8] = &[0; 8];
        assert!(matches!(
            buf.get_u16_be(usize::MAX),
            Err(Error::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_signed_round_trip_extremes() {
        let mut buf = vec![0u8; 16];
        let buf = buf.as_mut_slice();

        buf.put_i8(0, i8::MIN).unwrap();
        assert_eq!(buf.get_i8(0).unwrap(), i8::MIN);

        buf.put_i16_le(1, i16::MIN).unwrap();
        assert_eq!(buf.get_i16_le(1).unwrap(), i16::MIN);

        buf.put_i32_be(3, i32::MAX).unwrap();
        assert_eq!(buf.get_i32_be(3).unwrap(), i32::MAX);
    }
}
