//! Errors reported by fallible grid operations.
//!
//! Most contract violations in this crate (indexing outside a grid, assigning
//! between differently shaped grids) panic. The checked variants of those
//! operations, and constructors that wrap caller-supplied buffers, report
//! [`GridError`] instead.

use crate::{Extents, Indices};

/// Errors that can occur when constructing or assigning grids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridError {
    /// The source of an assignment does not have the destination's shape.
    #[display("shape mismatch: expected extents {expected}, got {actual}")]
    ShapeMismatch {
        /// Extents of the destination.
        expected: Extents,
        /// Extents of the source.
        actual: Extents,
    },
    /// A caller-supplied buffer is too short for the requested extents.
    #[display("buffer too small: {required} cells required, {actual} provided")]
    BufferTooSmall {
        /// Number of cells the extents span.
        required: usize,
        /// Length of the buffer.
        actual: usize,
    },
    /// A position lies outside the addressed grid.
    #[display("indices {indices} out of bounds for extents {extents}")]
    OutOfBounds {
        /// The rejected position.
        indices: Indices,
        /// Extents of the addressed grid.
        extents: Extents,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = GridError::ShapeMismatch {
            expected: Extents::new(2, 2),
            actual: Extents::new(3, 1),
        };
        assert_eq!(
            err.to_string(),
            "shape mismatch: expected extents (2, 2), got (3, 1)"
        );

        let err = GridError::BufferTooSmall {
            required: 200,
            actual: 10,
        };
        assert_eq!(
            err.to_string(),
            "buffer too small: 200 cells required, 10 provided"
        );

        let err = GridError::OutOfBounds {
            indices: Indices::new(20, 0),
            extents: Extents::new(20, 10),
        };
        assert_eq!(
            err.to_string(),
            "indices (20, 0) out of bounds for extents (20, 10)"
        );
    }
}
