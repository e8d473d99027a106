//! Rectangular windows into grids.
//!
//! A [`View`] pairs a reference to a grid with a bounds region expressed in
//! that grid's coordinates. Positions passed to a view are relative to the
//! region's origin, so `(0, 0)` addresses the cell at `bounds.origin()` of the
//! underlying grid.
//!
//! Views implement [`GridRead`] (and [`GridWrite`] when they hold a mutable
//! reference), which gives them the same operations as grids: iteration,
//! filling, assignment, and further sub-views.
//!
//! The region is not required to lie inside the grid. Positions that map
//! outside the grid behave as out-of-range positions of the view: `get`
//! returns `None` and indexing panics.
//!
//! # Examples
//!
//! ```
//! use planar_core::{
//!     Extents, FixedGrid, FixedOriginExtentsBounds, Grid, GridRead, GridWrite, Indices,
//! };
//!
//! let mut grid = Grid::<i32>::new(Extents::new(6, 6));
//! let patch = FixedGrid::<i32, 2, 2>::new(7);
//!
//! let mut view = grid.view_mut(FixedOriginExtentsBounds::<2, 2, 2, 2>::new());
//! view.assign(&patch);
//! view[Indices::new(1, 1)] = 9;
//!
//! assert_eq!(grid[Indices::new(2, 2)], 7);
//! assert_eq!(grid[Indices::new(3, 3)], 9);
//! assert_eq!(grid.iter().sum::<i32>(), 30);
//! ```

use std::ops::{Deref, DerefMut, Index, IndexMut};

use crate::{
    BoundsLike, ColMajor, Extents, GridRead, GridStorageMut, GridWrite, Indices, RowMajor,
};

pub use self::iter::*;

mod iter;

/// A rectangular window into a grid.
///
/// `R` is a reference to the grid (`&G` for read-only views, `&mut G` for
/// writable ones) and `B` is any [`BoundsLike`] region. The view never owns
/// cells; it borrows the grid for as long as it lives.
///
/// Mutable iterators ([`iter_mut`](Self::iter_mut) and `for cell in &mut
/// view`) require the grid to keep its cells in one contiguous buffer, i.e.
/// to implement [`GridStorageMut`]. Every writable view, including views of
/// views and views of sparse grids, supports
/// [`for_each_mut`](GridWrite::for_each_mut), which visits each cell mutably
/// in either traversal order together with its position.
///
/// # Examples
///
/// ```
/// use planar_core::{Bounds, Extents, Grid, GridWrite, Indices, RowMajor};
///
/// let mut grid = Grid::<i32>::new(Extents::new(4, 4));
/// let mut outer = grid.view_mut(Bounds::new(Indices::new(1, 1), Extents::new(3, 3)));
/// let mut inner = outer.view_mut(Bounds::new(Indices::new(1, 1), Extents::new(2, 2)));
/// let mut n = 0;
/// inner.for_each_mut(RowMajor, |_, cell| {
///     n += 1;
///     *cell = n;
/// });
/// assert_eq!(grid.as_slice()[10..], [1, 2, 0, 0, 3, 4]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct View<R, B> {
    grid: R,
    bounds: B,
}

impl<R, B> View<R, B> {
    /// Creates a view of `grid` restricted to `bounds`.
    #[must_use]
    #[inline]
    pub const fn new(grid: R, bounds: B) -> Self {
        Self { grid, bounds }
    }

    /// Creates a view whose region is the default value of `B`.
    ///
    /// Intended for [`FixedOriginExtentsBounds`](crate::FixedOriginExtentsBounds),
    /// whose only value is the region named by its type.
    ///
    /// # Examples
    ///
    /// ```
    /// use planar_core::{FixedGrid, FixedOriginExtentsBounds, GridRead, View};
    ///
    /// let grid = FixedGrid::from_rows([[1, 2, 3], [4, 5, 6]]);
    /// let view = View::<_, FixedOriginExtentsBounds<0, 1, 2, 2>>::fixed(&grid);
    /// assert_eq!(view.iter().copied().collect::<Vec<_>>(), [2, 3, 5, 6]);
    /// ```
    #[must_use]
    pub fn fixed(grid: R) -> Self
    where
        B: Default,
    {
        Self::new(grid, B::default())
    }

    /// Returns the region of the underlying grid covered by the view.
    #[must_use]
    #[inline]
    pub fn region(&self) -> &B {
        &self.bounds
    }

    /// Returns the region mutably, allowing the view to be moved or resized.
    #[inline]
    pub fn region_mut(&mut self) -> &mut B {
        &mut self.bounds
    }

    /// Consumes the view and returns the grid reference and region.
    #[must_use]
    pub fn into_parts(self) -> (R, B) {
        (self.grid, self.bounds)
    }
}

impl<R, B> View<R, B>
where
    R: Deref,
    R::Target: GridRead,
    B: BoundsLike,
{
    /// Returns the underlying grid.
    #[must_use]
    #[inline]
    pub fn grid(&self) -> &R::Target {
        &self.grid
    }

    /// Returns `true` if every cell of the view maps to a cell of the grid.
    #[must_use]
    pub fn is_within_grid(&self) -> bool {
        self.bounds.is_empty()
            || (self.grid.within(self.bounds.origin())
                && self.grid.within(self.bounds.corner() - Indices::splat(1)))
    }
}

impl<R, B> GridRead for View<R, B>
where
    R: Deref,
    R::Target: GridRead,
    B: BoundsLike,
{
    type Cell = <R::Target as GridRead>::Cell;

    #[inline]
    fn extents(&self) -> Extents {
        self.bounds.extents()
    }

    #[inline]
    fn get(&self, pt: Indices) -> Option<&Self::Cell> {
        if !self.within(pt) {
            return None;
        }
        self.grid.get(self.bounds.origin() + pt)
    }
}

impl<R, B> GridWrite for View<R, B>
where
    R: DerefMut,
    R::Target: GridWrite,
    B: BoundsLike,
{
    #[inline]
    fn get_mut(&mut self, pt: Indices) -> Option<&mut Self::Cell> {
        if !self.within(pt) {
            return None;
        }
        let origin = self.bounds.origin();
        self.grid.get_mut(origin + pt)
    }
}

impl<G, B> View<&mut G, B>
where
    G: GridStorageMut + ?Sized,
    B: BoundsLike,
{
    /// Returns an iterator over mutable references to the cells of the view,
    /// in row-major order.
    ///
    /// # Panics
    ///
    /// Panics if the region is not fully inside the grid.
    #[must_use]
    #[track_caller]
    pub fn iter_mut(&mut self) -> ViewIterMut<'_, G::Cell, RowMajor> {
        let extents = self.grid.extents();
        ViewIterMut::new(self.grid.as_mut_slice(), extents, &self.bounds)
    }

    /// Returns an iterator over mutable references to the cells of the view,
    /// in column-major order.
    ///
    /// # Panics
    ///
    /// Panics if the region is not fully inside the grid.
    #[must_use]
    #[track_caller]
    pub fn iter_mut_col_major(&mut self) -> ViewIterMut<'_, G::Cell, ColMajor> {
        let extents = self.grid.extents();
        ViewIterMut::new(self.grid.as_mut_slice(), extents, &self.bounds)
    }
}

impl<R, B> Index<Indices> for View<R, B>
where
    R: Deref,
    R::Target: GridRead,
    B: BoundsLike,
{
    type Output = <R::Target as GridRead>::Cell;

    #[inline]
    #[track_caller]
    fn index(&self, pt: Indices) -> &Self::Output {
        self.cell(pt)
    }
}

impl<R, B> IndexMut<Indices> for View<R, B>
where
    R: DerefMut,
    R::Target: GridWrite,
    B: BoundsLike,
{
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, pt: Indices) -> &mut Self::Output {
        self.cell_mut(pt)
    }
}

impl<'a, R, B> IntoIterator for &'a View<R, B>
where
    R: Deref,
    R::Target: GridRead,
    B: BoundsLike,
{
    type Item = &'a <R::Target as GridRead>::Cell;
    type IntoIter = ViewIter<'a, View<R, B>, RowMajor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, G, B> IntoIterator for &'a mut View<&mut G, B>
where
    G: GridStorageMut + ?Sized,
    B: BoundsLike,
{
    type Item = &'a mut G::Cell;
    type IntoIter = ViewIterMut<'a, G::Cell, RowMajor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
