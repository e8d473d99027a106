use planar_core::Indices;

/// A cell value paired with the position it belongs to.
///
/// Used as the seed and candidate type of the flood fill: seeds carry the
/// value to propagate from, and candidates carry the current value of a
/// neighbouring cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SparseCell<T> {
    /// The cell value.
    pub value: T,
    /// The position of the cell.
    pub position: Indices,
}

impl<T> SparseCell<T> {
    /// Creates a new sparse cell.
    #[must_use]
    #[inline]
    pub const fn new(value: T, position: Indices) -> Self {
        Self { value, position }
    }
}

impl<T> From<SparseCell<T>> for Indices {
    #[inline]
    fn from(cell: SparseCell<T>) -> Self {
        cell.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_conversion() {
        let cell = SparseCell::new('x', Indices::new(2, 3));
        assert_eq!(Indices::from(cell), Indices::new(2, 3));
    }
}
