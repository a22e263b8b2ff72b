//! Builder for configuring a cursor.

use crate::cursor::{DEFAULT_CAPACITY, DEFAULT_GROWTH_FACTOR, SequentialCursor};

/// Builder for configuring and creating a [`SequentialCursor`].
///
/// All configuration is constructor-time; a built cursor's growth factor
/// cannot change afterwards.
///
/// # Example
/// ```
/// use bytecursor::SequentialCursor;
///
/// let cur = SequentialCursor::builder()
///     .capacity(256)
///     .growth_factor(4)
///     .build();
/// assert_eq!(cur.capacity(), 256);
/// ```
#[derive(Debug, Clone)]
pub struct CursorBuilder {
    capacity: usize,
    growth_factor: usize,
    storage: Option<Vec<u8>>,
}

impl CursorBuilder {
    /// Creates a builder with the default capacity and growth factor.
    #[must_use]
    pub fn new() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            growth_factor: DEFAULT_GROWTH_FACTOR,
            storage: None,
        }
    }

    /// Sets the initial capacity of the zero-filled region.
    ///
    /// Ignored when an existing region is supplied via
    /// [`storage`](Self::storage).
    #[must_use]
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the growth factor. Values below 2 disable growth, making an
    /// overflowing write a hard error.
    #[must_use]
    pub fn growth_factor(mut self, factor: usize) -> Self {
        self.growth_factor = factor;
        self
    }

    /// Wraps an existing byte region instead of allocating a fresh one.
    /// The region is taken over without copying.
    #[must_use]
    pub fn storage(mut self, storage: Vec<u8>) -> Self {
        self.storage = Some(storage);
        self
    }

    /// Builds the cursor.
    #[must_use]
    pub fn build(self) -> SequentialCursor {
        let storage = self
            .storage
            .unwrap_or_else(|| vec![0; self.capacity]);
        SequentialCursor::from_parts(storage, self.growth_factor)
    }
}

impl Default for CursorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let cur = CursorBuilder::new().build();
        assert_eq!(cur.capacity(), DEFAULT_CAPACITY);
        assert_eq!(cur.growth_factor(), DEFAULT_GROWTH_FACTOR);
        assert_eq!(cur.tell(), 0);
    }

    #[test]
    fn test_builder_custom_capacity_and_factor() {
        let cur = CursorBuilder::new().capacity(16).growth_factor(8).build();
        assert_eq!(cur.capacity(), 16);
        assert_eq!(cur.growth_factor(), 8);
    }

    #[test]
    fn test_builder_wraps_existing_storage() {
        let cur = CursorBuilder::new()
            .capacity(999) // ignored
            .storage(vec![1, 2, 3])
            .build();
        assert_eq!(cur.capacity(), 3);
    }
}
