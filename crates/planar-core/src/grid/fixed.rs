use std::array;

use crate::{Extents, Indices};

use super::impl_storage;

/// A grid whose extents are fixed at compile time, storing its cells inline.
///
/// `FixedGrid<T, ROWS, COLS>` holds `ROWS * COLS` cells in a nested array and
/// never allocates.
///
/// # Examples
///
/// ```
/// use planar_core::{FixedGrid, GridRead, Indices};
///
/// let grid = FixedGrid::<i32, 20, 10>::new(3);
/// assert_eq!(grid[Indices::new(19, 9)], 3);
/// assert_eq!(grid.iter().count(), 200);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FixedGrid<T, const ROWS: usize, const COLS: usize> {
    cells: [[T; COLS]; ROWS],
}

impl<T, const ROWS: usize, const COLS: usize> Default for FixedGrid<T, ROWS, COLS>
where
    T: Default,
{
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const ROWS: usize, const COLS: usize> FixedGrid<T, ROWS, COLS> {
    /// The extents of every grid of this type.
    pub const EXTENTS: Extents = Extents::new(ROWS, COLS);

    /// Creates a grid with every cell set to `value`.
    #[must_use]
    pub fn new(value: T) -> Self
    where
        T: Clone,
    {
        Self::from_fn(|_| value.clone())
    }

    /// Creates a grid whose cells are produced by calling `f` with each
    /// position in row-major order.
    #[must_use]
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(Indices) -> T,
    {
        let cells = array::from_fn(|row| {
            array::from_fn(|col| f(Indices::new(row.cast_signed(), col.cast_signed())))
        });
        Self { cells }
    }

    /// Creates a grid from an array of rows.
    #[must_use]
    #[inline]
    pub const fn from_rows(cells: [[T; COLS]; ROWS]) -> Self {
        Self { cells }
    }

    /// Consumes the grid and returns its array of rows.
    #[must_use]
    pub fn into_rows(self) -> [[T; COLS]; ROWS] {
        self.cells
    }

    /// Returns the number of rows and columns.
    #[must_use]
    #[inline]
    pub fn extents(&self) -> Extents {
        Self::EXTENTS
    }

    /// Returns the cells in row-major order.
    #[must_use]
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.cells.as_flattened()
    }

    /// Returns the cells in row-major order.
    #[must_use]
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.cells.as_flattened_mut()
    }
}

impl<T, const ROWS: usize, const COLS: usize> From<[[T; COLS]; ROWS]> for FixedGrid<T, ROWS, COLS> {
    fn from(cells: [[T; COLS]; ROWS]) -> Self {
        Self::from_rows(cells)
    }
}

impl_storage!([T, const ROWS: usize, const COLS: usize] FixedGrid<T, ROWS, COLS>);
