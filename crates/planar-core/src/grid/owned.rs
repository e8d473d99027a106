use std::iter;

use crate::{Extents, GridError, Indices};

use super::impl_storage;

/// A heap-allocated grid whose extents are chosen at runtime.
///
/// Cells are stored in row-major order. The grid owns its cells and can be
/// resized after construction; the cells shared by the old and new extents
/// keep their values.
///
/// # Examples
///
/// ```
/// use planar_core::{Extents, Grid, GridRead, Indices};
///
/// let mut grid = Grid::filled(Extents::new(2, 2), 1);
/// grid[Indices::new(1, 1)] = 4;
/// grid.resize(Extents::new(3, 3), 0);
///
/// assert_eq!(grid[Indices::new(1, 1)], 4);
/// assert_eq!(grid[Indices::new(2, 2)], 0);
/// assert_eq!(grid.iter().sum::<i32>(), 7);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    cells: Vec<T>,
    extents: Extents,
}

impl<T> Default for Grid<T> {
    /// Returns an empty grid with extents `(0, 0)`.
    fn default() -> Self {
        Self {
            cells: Vec::new(),
            extents: Extents::ZERO,
        }
    }
}

impl<T> Grid<T> {
    /// Creates a grid whose cells are produced by calling `f` with each
    /// position in row-major order.
    #[must_use]
    pub fn from_fn<F>(extents: Extents, mut f: F) -> Self
    where
        F: FnMut(Indices) -> T,
    {
        let cells = (0..extents.area()).map(|i| f(extents.indices_of(i))).collect();
        Self { cells, extents }
    }

    /// Creates a grid taking ownership of a row-major cell buffer.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::ShapeMismatch`] if `cells.len()` is not
    /// `extents.area()`. The `actual` field then reports a single row holding
    /// every supplied cell.
    pub fn from_vec(extents: Extents, cells: Vec<T>) -> Result<Self, GridError> {
        if cells.len() != extents.area() {
            return Err(GridError::ShapeMismatch {
                expected: extents,
                actual: Extents::new(1, cells.len()),
            });
        }
        Ok(Self { cells, extents })
    }

    /// Returns the number of rows and columns.
    #[must_use]
    #[inline]
    pub fn extents(&self) -> Extents {
        self.extents
    }

    /// Returns the cells in row-major order.
    #[must_use]
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    /// Returns the cells in row-major order.
    #[must_use]
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.cells
    }

    /// Consumes the grid and returns its row-major cell buffer.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.cells
    }

    /// Removes every cell, leaving an empty grid with extents `(0, 0)`.
    pub fn clear(&mut self) {
        self.cells.clear();
        self.extents = Extents::ZERO;
    }

    /// Changes the extents of the grid.
    ///
    /// Cells inside both the old and the new extents keep their values and
    /// positions. Cells that become part of the grid are produced by `f`.
    /// Resizing to the current extents does nothing.
    pub fn resize_with<F>(&mut self, extents: Extents, mut f: F)
    where
        F: FnMut() -> T,
    {
        if extents == self.extents {
            return;
        }

        let old_extents = self.extents;
        let keep = old_extents.min(extents);
        let mut old_cells = std::mem::take(&mut self.cells).into_iter();
        let mut cells = Vec::with_capacity(extents.area());
        for row in 0..extents.rows {
            let mut kept = 0;
            if row < keep.rows {
                let mut old_row = old_cells.by_ref().take(old_extents.cols);
                cells.extend(old_row.by_ref().take(keep.cols));
                old_row.for_each(drop);
                kept = keep.cols;
            }
            cells.extend(iter::repeat_with(&mut f).take(extents.cols - kept));
        }

        self.cells = cells;
        self.extents = extents;
    }

    /// Changes the extents of the grid, filling new cells with `value`.
    ///
    /// See [`resize_with`](Self::resize_with).
    pub fn resize(&mut self, extents: Extents, value: T)
    where
        T: Clone,
    {
        self.resize_with(extents, || value.clone());
    }

    /// Changes the extents of the grid, filling new cells with
    /// `T::default()`.
    ///
    /// See [`resize_with`](Self::resize_with).
    pub fn resize_default(&mut self, extents: Extents)
    where
        T: Default,
    {
        self.resize_with(extents, T::default);
    }
}

impl<T> Grid<T>
where
    T: Default,
{
    /// Creates a grid with every cell set to `T::default()`.
    #[must_use]
    pub fn new(extents: Extents) -> Self {
        Self::from_fn(extents, |_| T::default())
    }
}

impl<T> Grid<T>
where
    T: Clone,
{
    /// Creates a grid with every cell set to `value`.
    #[must_use]
    pub fn filled(extents: Extents, value: T) -> Self {
        Self {
            cells: vec![value; extents.area()],
            extents,
        }
    }
}

impl_storage!([T] Grid<T>);
