//! Error types for cursor operations.

use thiserror::Error;

/// Error type for cursor operations.
///
/// Every failure is local to the offending call: the cursor is left in a
/// well-defined state and remains usable (after repositioning, in the
/// [`OutOfBounds`](Error::OutOfBounds) case).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A write needs more space than the storage holds and growth is
    /// disabled (or the required size is not representable). The tentative
    /// offset advance has been rolled back.
    #[error("out of space: {required} bytes required, capacity {capacity}, growth disabled")]
    OutOfSpace {
        /// Total bytes the storage would need to hold for the write.
        required: usize,
        /// Current storage capacity in bytes.
        capacity: usize,
    },

    /// A read or view requests bytes beyond the allocated extent. The
    /// cursor offset has not been advanced.
    #[error("read of {len} bytes at offset {offset} out of bounds for capacity {capacity}")]
    OutOfBounds {
        /// Offset the access started at.
        offset: usize,
        /// Number of bytes requested.
        len: usize,
        /// Current storage capacity in bytes.
        capacity: usize,
    },

    /// A relative seek would move the offset outside the addressable
    /// range (below zero, or past `usize::MAX`). The offset is unchanged.
    #[error("seek by {delta} from offset {offset} leaves the addressable range")]
    InvalidOffset {
        /// Offset before the seek.
        offset: usize,
        /// Requested displacement.
        delta: i64,
    },
}

/// Result type alias for cursor operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_space_display() {
        let err = Error::OutOfSpace {
            required: 16,
            capacity: 8,
        };
        let msg = err.to_string();
        assert!(msg.contains("16"));
        assert!(msg.contains("8"));
        assert!(msg.contains("out of space"));
    }

    #[test]
    fn test_out_of_bounds_display() {
        let err = Error::OutOfBounds {
            offset: 4,
            len: 8,
            capacity: 10,
        };
        let msg = err.to_string();
        assert!(msg.contains("offset 4"));
        assert!(msg.contains("8 bytes"));
        assert!(msg.contains("capacity 10"));
    }

    #[test]
    fn test_invalid_offset_display() {
        let err = Error::InvalidOffset {
            offset: 2,
            delta: -5,
        };
        let msg = err.to_string();
        assert!(msg.contains("-5"));
        assert!(msg.contains("offset 2"));
    }

    #[test]
    fn test_error_equality() {
        let a = Error::OutOfSpace {
            required: 1,
            capacity: 0,
        };
        let b = Error::OutOfSpace {
            required: 1,
            capacity: 0,
        };
        assert_eq!(a, b);
        assert_ne!(
            a,
            Error::OutOfSpace {
                required: 2,
                capacity: 0
            }
        );
    }
}
