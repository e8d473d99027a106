use crate::{Extents, GridError};

use super::impl_storage;

fn check_buffer<T>(buffer: &mut [T], extents: Extents) -> Result<&mut [T], GridError> {
    let required = extents.area();
    let actual = buffer.len();
    buffer
        .get_mut(..required)
        .ok_or(GridError::BufferTooSmall { required, actual })
}

/// A grid over a caller-owned buffer, with extents chosen at runtime.
///
/// The first `extents.area()` elements of the buffer are interpreted as
/// cells in row-major order; any further elements are left untouched. The
/// grid borrows the buffer for its whole lifetime, so the buffer cannot be
/// freed or accessed elsewhere while the grid is in use.
///
/// # Examples
///
/// ```
/// use planar_core::{Extents, GridWrite, Indices, MappedGrid};
///
/// let mut buffer = vec![0; 200];
/// let mut grid = MappedGrid::new(Extents::new(20, 10), &mut buffer)?;
/// grid[Indices::new(2, 3)] = 1;
///
/// assert_eq!(buffer[23], 1);
/// # Ok::<(), planar_core::GridError>(())
/// ```
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct MappedGrid<'a, T> {
    cells: &'a mut [T],
    extents: Extents,
}

impl<'a, T> MappedGrid<'a, T> {
    /// Wraps `buffer` as a grid of `extents`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::BufferTooSmall`] if `buffer` holds fewer than
    /// `extents.area()` elements.
    pub fn new(extents: Extents, buffer: &'a mut [T]) -> Result<Self, GridError> {
        let cells = check_buffer(buffer, extents)?;
        Ok(Self { cells, extents })
    }

    /// Returns a grid over the same buffer that borrows from `self`.
    #[must_use]
    pub fn reborrow(&mut self) -> MappedGrid<'_, T> {
        MappedGrid {
            cells: &mut *self.cells,
            extents: self.extents,
        }
    }

    /// Releases the grid and returns the mapped cells.
    #[must_use]
    pub fn into_inner(self) -> &'a mut [T] {
        self.cells
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
        &*self.cells
    }

    /// Returns the cells in row-major order.
    #[must_use]
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut *self.cells
    }
}

impl_storage!(['a, T] MappedGrid<'a, T>);

/// A grid over a caller-owned buffer, with extents fixed at compile time.
///
/// The compile-time counterpart of [`MappedGrid`].
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct FixedMappedGrid<'a, T, const ROWS: usize, const COLS: usize> {
    cells: &'a mut [T],
}

impl<'a, T, const ROWS: usize, const COLS: usize> FixedMappedGrid<'a, T, ROWS, COLS> {
    /// The extents of every grid of this type.
    pub const EXTENTS: Extents = Extents::new(ROWS, COLS);

    /// Wraps `buffer` as a grid of `ROWS` rows and `COLS` columns.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::BufferTooSmall`] if `buffer` holds fewer than
    /// `ROWS * COLS` elements.
    pub fn new(buffer: &'a mut [T]) -> Result<Self, GridError> {
        let cells = check_buffer(buffer, Self::EXTENTS)?;
        Ok(Self { cells })
    }

    /// Returns a grid over the same buffer that borrows from `self`.
    #[must_use]
    pub fn reborrow(&mut self) -> FixedMappedGrid<'_, T, ROWS, COLS> {
        FixedMappedGrid {
            cells: &mut *self.cells,
        }
    }

    /// Releases the grid and returns the mapped cells.
    #[must_use]
    pub fn into_inner(self) -> &'a mut [T] {
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
        &*self.cells
    }

    /// Returns the cells in row-major order.
    #[must_use]
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut *self.cells
    }
}

impl_storage!(['a, T, const ROWS: usize, const COLS: usize] FixedMappedGrid<'a, T, ROWS, COLS>);
