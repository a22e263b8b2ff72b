//! Benchmarking suite for bytecursor.
//!
//! The actual benchmarks live in `benches/` and run under criterion:
//!
//! ```text
//! cargo bench -p bytecursor-bench
//! ```

/// Builds a cursor pre-filled with `len` bytes of deterministic content,
/// positioned back at offset 0. Shared fixture for read benchmarks.
#[must_use]
pub fn filled_cursor(len: usize) -> bytecursor::SequentialCursor {
    let mut cur = bytecursor::SequentialCursor::with_capacity(len);
    for i in 0..len {
        cur.write_u8(i as u8).expect("fits in preallocated storage");
    }
    cur.seek(0);
    cur
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled_cursor_fixture() {
        let mut cur = filled_cursor(8);
        assert_eq!(cur.tell(), 0);
        assert_eq!(cur.capacity(), 8);
        assert_eq!(cur.next_u8().unwrap(), 0);
        assert_eq!(cur.next_u8().unwrap(), 1);
    }
}
