//! Errors produced by the collection accessors.

use std::fmt;

/// A positional access outside the bounds of a sequence.
///
/// Produced by the `_fr` accessors of
/// [`Xlist`](crate::collection::Xlist) and
/// [`Xiter`](crate::collection::Xiter). For an eager list `length` is
/// the list length; for a lazy iterator it is the number of elements
/// the iterator actually produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OutOfBoundsError {
    operation: &'static str,
    index: usize,
    length: usize,
}

impl OutOfBoundsError {
    pub(crate) const fn new(operation: &'static str, index: usize, length: usize) -> Self {
        Self {
            operation,
            index,
            length,
        }
    }

    /// The accessor that failed.
    #[inline]
    pub const fn operation(&self) -> &'static str {
        self.operation
    }

    /// The requested index.
    #[inline]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// The number of elements the sequence held.
    #[inline]
    pub const fn length(&self) -> usize {
        self.length
    }
}

impl fmt::Display for OutOfBoundsError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "<{}> operation not allowed on sequence of {} elements (requested index {})",
            self.operation, self.length, self.index
        )
    }
}

impl std::error::Error for OutOfBoundsError {}

/// A lookup for a key absent from an [`Xdict`](crate::collection::Xdict).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyNotFoundError {
    key: String,
}

impl KeyNotFoundError {
    pub(crate) fn new(key: &impl fmt::Debug) -> Self {
        Self {
            key: format!("{key:?}"),
        }
    }

    /// The missing key, rendered with its `Debug` representation.
    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl fmt::Display for KeyNotFoundError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "key not found: {}", self.key)
    }
}

impl std::error::Error for KeyNotFoundError {}
