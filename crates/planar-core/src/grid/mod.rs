//! Grid storage and the traits shared by every grid-like type.
//!
//! A grid is a rectangular arrangement of cells addressed by [`Indices`]
//! relative to its own origin `(0, 0)`. Four storage variants are provided:
//!
//! | type                | extents       | cells                       |
//! |---------------------|---------------|-----------------------------|
//! | [`Grid`]            | runtime       | owned, heap allocated       |
//! | [`FixedGrid`]       | compile time  | owned, inline array         |
//! | [`MappedGrid`]      | runtime       | borrowed from the caller    |
//! | [`FixedMappedGrid`] | compile time  | borrowed from the caller    |
//!
//! All of them store cells in row-major order, implement [`GridRead`] and
//! [`GridWrite`], and expose their buffer through [`GridStorage`].
//! [`View`]s implement the same read and write traits, so algorithms written
//! against the traits accept whole grids and sub-regions alike.
//!
//! # Examples
//!
//! ```
//! use planar_core::{Extents, Grid, GridRead, GridWrite, Indices};
//!
//! let mut grid = Grid::<i32>::new(Extents::new(20, 10));
//! grid.fill(5);
//! grid[Indices::new(2, 3)] = 7;
//!
//! assert_eq!(grid.iter().filter(|&&v| v == 5).count(), 199);
//! assert_eq!(grid.get(Indices::new(20, 0)), None);
//! ```

use crate::{
    BoundsLike, ColMajor, Extents, FixedOriginBounds, GridError, Indices, RowMajor,
    TraversalOrder, View, ViewIter, ViewIterMut, display::DisplayGrid,
};

pub use self::{
    fixed::FixedGrid,
    mapped::{FixedMappedGrid, MappedGrid},
    owned::Grid,
};

mod fixed;
mod mapped;
mod owned;

/// Read access to a rectangular arrangement of cells.
///
/// Implementors provide [`extents`](Self::extents) and a bounds-checked
/// [`get`](Self::get); everything else is derived from those two.
pub trait GridRead {
    /// The cell type.
    type Cell;

    /// Returns the number of rows and columns.
    fn extents(&self) -> Extents;

    /// Returns the cell at `pt`, or `None` if `pt` is outside the grid.
    fn get(&self, pt: Indices) -> Option<&Self::Cell>;

    /// Returns the region `(0, 0)..extents` covered by the grid.
    #[must_use]
    #[inline]
    fn bounds(&self) -> FixedOriginBounds<0, 0> {
        FixedOriginBounds::new(self.extents())
    }

    /// Returns `true` if `pt` addresses a cell of the grid.
    #[must_use]
    #[inline]
    fn within(&self, pt: Indices) -> bool {
        self.bounds().within(pt)
    }

    /// Returns `true` if the grid has no cells.
    #[must_use]
    #[inline]
    fn is_empty(&self) -> bool {
        self.extents().is_empty()
    }

    /// Returns the cell at `pt`.
    ///
    /// # Panics
    ///
    /// Panics if `pt` is outside the grid.
    #[must_use]
    #[track_caller]
    fn cell(&self, pt: Indices) -> &Self::Cell {
        let extents = self.extents();
        match self.get(pt) {
            Some(cell) => cell,
            None => panic!("indices {pt} out of bounds for extents {extents}"),
        }
    }

    /// Returns the cell at `pt`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if `pt` is outside the grid.
    fn try_cell(&self, pt: Indices) -> Result<&Self::Cell, GridError> {
        let extents = self.extents();
        self.get(pt).ok_or(GridError::OutOfBounds {
            indices: pt,
            extents,
        })
    }

    /// Returns an iterator over the cells in row-major order.
    #[must_use]
    fn iter(&self) -> ViewIter<'_, Self, RowMajor> {
        ViewIter::new(self)
    }

    /// Returns an iterator over the cells in column-major order.
    #[must_use]
    fn iter_col_major(&self) -> ViewIter<'_, Self, ColMajor> {
        ViewIter::new(self)
    }

    /// Returns a read-only view of the region `bounds`.
    ///
    /// The region is expressed in this grid's coordinates. Reads outside the
    /// grid through the view return `None` or panic, like reads outside the
    /// view itself.
    #[must_use]
    fn view<B>(&self, bounds: B) -> View<&Self, B>
    where
        Self: Sized,
        B: BoundsLike,
    {
        View::new(self, bounds)
    }

    /// Returns a value that formats the grid as text, one line per row.
    ///
    /// Every cell is right-aligned in a column four characters wide.
    ///
    /// # Examples
    ///
    /// ```
    /// use planar_core::{FixedGrid, GridRead};
    ///
    /// let grid = FixedGrid::from_rows([[1, 2], [30, 4]]);
    /// assert_eq!(grid.display().to_string(), "   1   2\n  30   4\n");
    /// ```
    #[must_use]
    fn display(&self) -> DisplayGrid<'_, Self> {
        DisplayGrid::new(self)
    }

    /// Returns `true` if `other` has the same extents and equal cells.
    #[must_use]
    fn same_cells<G>(&self, other: &G) -> bool
    where
        G: GridRead + ?Sized,
        Self::Cell: PartialEq<G::Cell>,
    {
        self.extents() == other.extents() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

/// Write access to a rectangular arrangement of cells.
pub trait GridWrite: GridRead {
    /// Returns the cell at `pt` mutably, or `None` if `pt` is outside the grid.
    fn get_mut(&mut self, pt: Indices) -> Option<&mut Self::Cell>;

    /// Returns the cell at `pt` mutably.
    ///
    /// # Panics
    ///
    /// Panics if `pt` is outside the grid.
    #[must_use]
    #[track_caller]
    fn cell_mut(&mut self, pt: Indices) -> &mut Self::Cell {
        let extents = self.extents();
        match self.get_mut(pt) {
            Some(cell) => cell,
            None => panic!("indices {pt} out of bounds for extents {extents}"),
        }
    }

    /// Returns the cell at `pt` mutably.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if `pt` is outside the grid.
    fn try_cell_mut(&mut self, pt: Indices) -> Result<&mut Self::Cell, GridError> {
        let extents = self.extents();
        self.get_mut(pt).ok_or(GridError::OutOfBounds {
            indices: pt,
            extents,
        })
    }

    /// Sets every cell to `value`.
    fn fill(&mut self, value: Self::Cell)
    where
        Self::Cell: Clone,
    {
        self.map_in_place(|cell| *cell = value.clone());
    }

    /// Applies `f` to every cell in row-major order.
    fn map_in_place<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut Self::Cell),
    {
        self.for_each_mut(RowMajor, |_, cell| f(cell));
    }

    /// Calls `f` with the position and a mutable reference of every cell, in
    /// the traversal order `order`.
    ///
    /// # Examples
    ///
    /// ```
    /// use planar_core::{ColMajor, Extents, Grid, GridStorage, GridWrite};
    ///
    /// let mut grid = Grid::<usize>::new(Extents::new(2, 3));
    /// let mut n = 0;
    /// grid.for_each_mut(ColMajor, |_, cell| {
    ///     *cell = n;
    ///     n += 1;
    /// });
    /// assert_eq!(grid.as_slice(), [0, 2, 4, 1, 3, 5]);
    /// ```
    fn for_each_mut<O, F>(&mut self, _order: O, mut f: F)
    where
        O: TraversalOrder,
        F: FnMut(Indices, &mut Self::Cell),
    {
        let bounds = self.bounds();
        for pt in crate::BoundsIter::<O>::new(&bounds) {
            f(pt, self.cell_mut(pt));
        }
    }

    /// Copies every cell of `src` into the cell at the same position.
    ///
    /// # Panics
    ///
    /// Panics if `src` does not have the same extents as `self`.
    #[track_caller]
    fn assign<S>(&mut self, src: &S)
    where
        S: GridRead<Cell = Self::Cell> + ?Sized,
        Self::Cell: Clone,
    {
        if let Err(err) = self.try_assign(src) {
            panic!("{err}");
        }
    }

    /// Copies every cell of `src` into the cell at the same position.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::ShapeMismatch`] if `src` does not have the same
    /// extents as `self`; no cell is written in that case.
    fn try_assign<S>(&mut self, src: &S) -> Result<(), GridError>
    where
        S: GridRead<Cell = Self::Cell> + ?Sized,
        Self::Cell: Clone,
    {
        self.try_zip_apply(src, |dst, src| dst.clone_from(src))
    }

    /// Calls `f` with each cell of `self` and the cell of `src` at the same
    /// position.
    ///
    /// # Panics
    ///
    /// Panics if `src` does not have the same extents as `self`.
    #[track_caller]
    fn zip_apply<S, F>(&mut self, src: &S, f: F)
    where
        S: GridRead + ?Sized,
        F: FnMut(&mut Self::Cell, &S::Cell),
    {
        if let Err(err) = self.try_zip_apply(src, f) {
            panic!("{err}");
        }
    }

    /// Calls `f` with each cell of `self` and the cell of `src` at the same
    /// position.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::ShapeMismatch`] if `src` does not have the same
    /// extents as `self`; `f` is never called in that case.
    fn try_zip_apply<S, F>(&mut self, src: &S, mut f: F) -> Result<(), GridError>
    where
        S: GridRead + ?Sized,
        F: FnMut(&mut Self::Cell, &S::Cell),
    {
        let expected = self.extents();
        let actual = src.extents();
        if expected != actual {
            return Err(GridError::ShapeMismatch { expected, actual });
        }
        self.for_each_mut(RowMajor, |pt, dst| f(dst, src.cell(pt)));
        Ok(())
    }

    /// Returns a mutable view of the region `bounds`.
    #[must_use]
    fn view_mut<B>(&mut self, bounds: B) -> View<&mut Self, B>
    where
        Self: Sized,
        B: BoundsLike,
    {
        View::new(self, bounds)
    }
}

/// Grids whose cells live in one contiguous row-major buffer.
pub trait GridStorage: GridRead {
    /// Returns the cells as a row-major slice of length `extents().area()`.
    fn as_slice(&self) -> &[Self::Cell];
}

/// Grids whose contiguous buffer can be written through.
pub trait GridStorageMut: GridStorage + GridWrite {
    /// Returns the cells as a mutable row-major slice.
    fn as_mut_slice(&mut self) -> &mut [Self::Cell];

    /// Returns an iterator over mutable references to the cells, in
    /// row-major order.
    #[must_use]
    fn iter_mut(&mut self) -> ViewIterMut<'_, Self::Cell, RowMajor> {
        let extents = self.extents();
        ViewIterMut::new(self.as_mut_slice(), extents, &FixedOriginBounds::<0, 0>::new(extents))
    }

    /// Returns an iterator over mutable references to the cells, in
    /// column-major order.
    #[must_use]
    fn iter_mut_col_major(&mut self) -> ViewIterMut<'_, Self::Cell, ColMajor> {
        let extents = self.extents();
        ViewIterMut::new(self.as_mut_slice(), extents, &FixedOriginBounds::<0, 0>::new(extents))
    }
}

/// Implements the grid traits for a type with inherent `extents`, `as_slice`
/// and `as_mut_slice` methods over a contiguous row-major buffer.
macro_rules! impl_storage {
    ([$($generics:tt)*] $ty:ty) => {
        impl<$($generics)*> $crate::GridRead for $ty {
            type Cell = T;

            #[inline]
            fn extents(&self) -> $crate::Extents {
                self.extents()
            }

            #[inline]
            fn get(&self, pt: $crate::Indices) -> Option<&T> {
                let index = self.extents().linear_index(pt)?;
                self.as_slice().get(index)
            }
        }

        impl<$($generics)*> $crate::GridWrite for $ty {
            #[inline]
            fn get_mut(&mut self, pt: $crate::Indices) -> Option<&mut T> {
                let index = self.extents().linear_index(pt)?;
                self.as_mut_slice().get_mut(index)
            }

            fn fill(&mut self, value: T)
            where
                T: Clone,
            {
                self.as_mut_slice().fill(value);
            }

            fn map_in_place<F>(&mut self, f: F)
            where
                F: FnMut(&mut T),
            {
                self.as_mut_slice().iter_mut().for_each(f);
            }
        }

        impl<$($generics)*> $crate::GridStorage for $ty {
            #[inline]
            fn as_slice(&self) -> &[T] {
                self.as_slice()
            }
        }

        impl<$($generics)*> $crate::GridStorageMut for $ty {
            #[inline]
            fn as_mut_slice(&mut self) -> &mut [T] {
                self.as_mut_slice()
            }
        }

        impl<$($generics)*> ::std::ops::Index<$crate::Indices> for $ty {
            type Output = T;

            #[inline]
            #[track_caller]
            fn index(&self, pt: $crate::Indices) -> &T {
                $crate::GridRead::cell(self, pt)
            }
        }

        impl<$($generics)*> ::std::ops::IndexMut<$crate::Indices> for $ty {
            #[inline]
            #[track_caller]
            fn index_mut(&mut self, pt: $crate::Indices) -> &mut T {
                $crate::GridWrite::cell_mut(self, pt)
            }
        }
    };
}
use impl_storage;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Bounds, FixedOriginExtentsBounds};

    #[test]
    fn test_cell_and_try_cell() {
        let mut grid = Grid::<i32>::new(Extents::new(20, 10));
        *grid.cell_mut(Indices::new(19, 9)) = 4;
        assert_eq!(*grid.cell(Indices::new(19, 9)), 4);
        assert_eq!(grid.try_cell(Indices::new(19, 9)), Ok(&4));
        assert_eq!(
            grid.try_cell(Indices::new(20, 0)),
            Err(GridError::OutOfBounds {
                indices: Indices::new(20, 0),
                extents: Extents::new(20, 10),
            })
        );
        assert!(grid.try_cell_mut(Indices::new(0, -1)).is_err());
    }

    #[test]
    #[should_panic(expected = "indices (0, 10) out of bounds for extents (20, 10)")]
    fn test_cell_panics_out_of_range() {
        let grid = Grid::<i32>::new(Extents::new(20, 10));
        let _ = grid.cell(Indices::new(0, 10));
    }

    #[test]
    fn test_bounds_and_within() {
        let grid = FixedGrid::<u8, 3, 4>::default();
        assert_eq!(grid.bounds().extents(), Extents::new(3, 4));
        assert!(grid.within(Indices::new(2, 3)));
        assert!(!grid.within(Indices::new(3, 3)));
        assert!(!grid.within(Indices::new(-1, 0)));
    }

    #[test]
    fn test_iter_orders() {
        let grid = FixedGrid::from_rows([[1, 2, 3], [4, 5, 6]]);
        assert_eq!(grid.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 4, 5, 6]);
        assert_eq!(
            grid.iter_col_major().copied().collect::<Vec<_>>(),
            [1, 4, 2, 5, 3, 6]
        );
    }

    #[test]
    fn test_fill_is_idempotent() {
        let mut grid = Grid::<i32>::new(Extents::new(4, 3));
        grid.fill(9);
        let once = grid.clone();
        grid.fill(9);
        assert_eq!(grid, once);
        assert!(grid.iter().all(|&v| v == 9));
    }

    #[test]
    fn test_assign_between_variants() {
        let src = FixedGrid::from_rows([[1, 2], [3, 4]]);
        let mut buffer = [0; 4];
        let mut mapped = MappedGrid::new(Extents::new(2, 2), &mut buffer).unwrap();
        mapped.assign(&src);
        assert!(mapped.same_cells(&src));
        assert_eq!(buffer, [1, 2, 3, 4]);
    }

    #[test]
    fn test_try_assign_rejects_mismatch() {
        let src = Grid::filled(Extents::new(2, 3), 1);
        let mut dst = Grid::filled(Extents::new(3, 2), 0);
        assert_eq!(
            dst.try_assign(&src),
            Err(GridError::ShapeMismatch {
                expected: Extents::new(3, 2),
                actual: Extents::new(2, 3),
            })
        );
        assert!(dst.iter().all(|&v| v == 0));
    }

    #[test]
    #[should_panic(expected = "shape mismatch")]
    fn test_assign_panics_on_mismatch() {
        let src = Grid::filled(Extents::new(2, 3), 1);
        let mut dst = Grid::filled(Extents::new(2, 2), 0);
        dst.assign(&src);
    }

    #[test]
    fn test_zip_apply() {
        let mut acc = FixedGrid::<i32, 2, 2>::new(1);
        let rhs = FixedGrid::from_rows([[1, 2], [3, 4]]);
        acc.zip_apply(&rhs, |a, b| *a += b);
        assert_eq!(acc.as_slice(), [2, 3, 4, 5]);
    }

    #[test]
    fn test_for_each_mut_reports_positions() {
        let mut grid = Grid::<Indices>::new(Extents::new(3, 2));
        grid.for_each_mut(RowMajor, |pt, cell| *cell = pt);
        for pt in Bounds::from_extents(Extents::new(3, 2)).row_major() {
            assert_eq!(grid[pt], pt);
        }
    }

    #[test]
    fn test_same_cells() {
        let a = FixedGrid::from_rows([[1, 2], [3, 4]]);
        let b = Grid::from_vec(Extents::new(2, 2), vec![1, 2, 3, 4]).unwrap();
        let c = Grid::from_vec(Extents::new(1, 4), vec![1, 2, 3, 4]).unwrap();
        assert!(a.same_cells(&b));
        assert!(!a.same_cells(&c));
        assert!(
            b.view(FixedOriginExtentsBounds::<1, 0, 1, 2>::new())
                .same_cells(&FixedGrid::from_rows([[3, 4]]))
        );
    }

    #[test]
    fn test_iter_mut_orders() {
        let mut grid = Grid::<i32>::new(Extents::new(2, 3));
        for (n, cell) in (0..).zip(grid.iter_mut_col_major()) {
            *cell = n;
        }
        assert_eq!(grid.as_slice(), [0, 2, 4, 1, 3, 5]);
        for cell in grid.iter_mut() {
            *cell *= 10;
        }
        assert_eq!(grid.as_slice(), [0, 20, 40, 10, 30, 50]);
    }
}
