use std::iter::FusedIterator;

use tinyvec::TinyVec;

use crate::{BoundsIter, BoundsLike, Extents, GridRead, Indices, TraversalOrder};

/// The end marker for [`ViewIter`] and [`ViewIterMut`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewIterEnd;

/// An iterator over the cells of a grid or view.
///
/// Created by [`GridRead::iter`] and [`GridRead::iter_col_major`]. Each
/// cell is visited exactly once in the order selected by `O`.
#[derive(Debug)]
pub struct ViewIter<'a, G: ?Sized, O> {
    grid: &'a G,
    indices: BoundsIter<O>,
}

impl<'a, G, O> ViewIter<'a, G, O>
where
    G: GridRead + ?Sized,
    O: TraversalOrder,
{
    pub(crate) fn new(grid: &'a G) -> Self {
        Self {
            grid,
            indices: BoundsIter::new(&grid.bounds()),
        }
    }

    /// Returns the position, relative to the grid, of the cell the next call
    /// to `next` will produce.
    #[must_use]
    #[inline]
    pub fn coords(&self) -> Option<Indices> {
        self.indices.peek()
    }

    /// Returns `true` once every cell has been produced.
    #[must_use]
    #[inline]
    pub fn is_end(&self) -> bool {
        self.indices.is_end()
    }
}

impl<G, O> Clone for ViewIter<'_, G, O>
where
    G: ?Sized,
    O: Clone,
{
    fn clone(&self) -> Self {
        Self {
            grid: self.grid,
            indices: self.indices.clone(),
        }
    }
}

impl<'a, G, O> Iterator for ViewIter<'a, G, O>
where
    G: GridRead + ?Sized,
    O: TraversalOrder,
{
    type Item = &'a G::Cell;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let pt = self.indices.next()?;
        let grid: &'a G = self.grid;
        Some(grid.cell(pt))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indices.size_hint()
    }
}

impl<G, O> ExactSizeIterator for ViewIter<'_, G, O>
where
    G: GridRead + ?Sized,
    O: TraversalOrder,
{
}

impl<G, O> FusedIterator for ViewIter<'_, G, O>
where
    G: GridRead + ?Sized,
    O: TraversalOrder,
{
}

impl<G, O> PartialEq<ViewIterEnd> for ViewIter<'_, G, O>
where
    G: GridRead + ?Sized,
    O: TraversalOrder,
{
    #[inline]
    fn eq(&self, _: &ViewIterEnd) -> bool {
        self.is_end()
    }
}

impl<G, O> PartialEq<ViewIter<'_, G, O>> for ViewIterEnd
where
    G: GridRead + ?Sized,
    O: TraversalOrder,
{
    #[inline]
    fn eq(&self, other: &ViewIter<'_, G, O>) -> bool {
        other.is_end()
    }
}

/// Row slices for the common case of views at most this many rows tall are
/// kept inline.
const INLINE_ROWS: usize = 16;

/// An iterator over mutable references to the cells of a region of
/// contiguous storage.
///
/// Created by [`GridStorageMut::iter_mut`](crate::GridStorageMut::iter_mut)
/// and [`View::iter_mut`](crate::View::iter_mut). The region is split into
/// disjoint per-row slices up front; each call to `next` detaches the first
/// cell of the slice for the current row.
#[derive(Debug)]
pub struct ViewIterMut<'a, T, O> {
    rows: TinyVec<[&'a mut [T]; INLINE_ROWS]>,
    indices: BoundsIter<O>,
}

impl<'a, T, O> ViewIterMut<'a, T, O>
where
    O: TraversalOrder,
{
    /// Creates an iterator over `region` of a row-major buffer shaped
    /// `storage`.
    ///
    /// # Panics
    ///
    /// Panics if `region` is not fully inside `storage`.
    #[track_caller]
    pub(crate) fn new<B>(cells: &'a mut [T], storage: Extents, region: &B) -> Self
    where
        B: BoundsLike + ?Sized,
    {
        let origin = region.origin();
        let extents = region.extents();
        let indices = BoundsIter::new(&crate::Bounds::from_extents(extents));
        if extents.is_empty() {
            return Self {
                rows: TinyVec::new(),
                indices,
            };
        }

        let (Some(start), Some(end)) = (origin.to_extents(), region.corner().to_extents()) else {
            panic!("view {} exceeds grid extents {storage}", region.to_bounds());
        };
        assert!(
            end.rows <= storage.rows && end.cols <= storage.cols,
            "view {} exceeds grid extents {storage}",
            region.to_bounds()
        );

        let rows = cells[..storage.area()]
            .chunks_exact_mut(storage.cols)
            .skip(start.rows)
            .take(extents.rows)
            .map(|row| &mut row[start.cols..end.cols])
            .collect();
        Self { rows, indices }
    }

    /// Returns the position, relative to the region, of the cell the next
    /// call to `next` will produce.
    #[must_use]
    #[inline]
    pub fn coords(&self) -> Option<Indices> {
        self.indices.peek()
    }

    /// Returns `true` once every cell has been produced.
    #[must_use]
    #[inline]
    pub fn is_end(&self) -> bool {
        self.indices.is_end()
    }
}

impl<'a, T, O> Iterator for ViewIterMut<'a, T, O>
where
    O: TraversalOrder,
{
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        let pt = self.indices.next()?;
        let row = self.rows.get_mut(usize::try_from(pt.row).ok()?)?;
        let (cell, rest) = std::mem::take(row).split_first_mut()?;
        *row = rest;
        Some(cell)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indices.size_hint()
    }
}

impl<T, O> ExactSizeIterator for ViewIterMut<'_, T, O> where O: TraversalOrder {}
impl<T, O> FusedIterator for ViewIterMut<'_, T, O> where O: TraversalOrder {}

impl<T, O> PartialEq<ViewIterEnd> for ViewIterMut<'_, T, O>
where
    O: TraversalOrder,
{
    #[inline]
    fn eq(&self, _: &ViewIterEnd) -> bool {
        self.is_end()
    }
}

impl<T, O> PartialEq<ViewIterMut<'_, T, O>> for ViewIterEnd
where
    O: TraversalOrder,
{
    #[inline]
    fn eq(&self, other: &ViewIterMut<'_, T, O>) -> bool {
        other.is_end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Bounds, ColMajor, FixedGrid, FixedOriginExtentsBounds, Grid, GridWrite, RowMajor};

    fn numbered() -> Grid<usize> {
        Grid::from_fn(Extents::new(4, 5), |pt| {
            usize::try_from(pt.row * 10 + pt.col).unwrap()
        })
    }

    #[test]
    fn test_view_iter_visits_region() {
        let grid = numbered();
        let view = grid.view(Bounds::new(Indices::new(1, 2), Extents::new(2, 3)));
        assert_eq!(view.iter().copied().collect::<Vec<_>>(), [12, 13, 14, 22, 23, 24]);
        assert_eq!(
            view.iter_col_major().copied().collect::<Vec<_>>(),
            [12, 22, 13, 23, 14, 24]
        );
    }

    #[test]
    fn test_view_iter_end_and_coords() {
        let grid = FixedGrid::from_rows([[1, 2], [3, 4]]);
        let mut it = grid.iter_col_major();
        assert_eq!(it.len(), 4);
        assert_eq!(it.coords(), Some(Indices::new(0, 0)));
        it.next();
        assert_eq!(it.coords(), Some(Indices::new(1, 0)));
        assert_ne!(it, ViewIterEnd);
        assert_eq!(it.by_ref().count(), 3);
        assert_eq!(it, ViewIterEnd);
        assert_eq!(ViewIterEnd, it);
        assert_eq!(it.coords(), None);
    }

    #[test]
    fn test_iter_mut_region() {
        let mut grid = numbered();
        {
            let mut view = grid.view_mut(FixedOriginExtentsBounds::<1, 1, 2, 2>::new());
            let mut it = view.iter_mut();
            assert_eq!(it.coords(), Some(Indices::ZERO));
            it.next();
            assert_eq!(it.coords(), Some(Indices::new(0, 1)));
            for cell in it.by_ref() {
                *cell += 100;
            }
            assert_eq!(it, ViewIterEnd);
        }
        assert_eq!(
            grid.as_slice(),
            [
                0, 1, 2, 3, 4, //
                10, 11, 112, 13, 14, //
                20, 121, 122, 23, 24, //
                30, 31, 32, 33, 34,
            ]
        );
    }

    #[test]
    fn test_iter_mut_col_major_order() {
        let mut grid = Grid::<usize>::new(Extents::new(3, 4));
        let mut view = grid.view_mut(Bounds::new(Indices::new(0, 1), Extents::new(3, 2)));
        for (n, cell) in (1..).zip(view.iter_mut_col_major()) {
            *cell = n;
        }
        assert_eq!(
            grid.as_slice(),
            [
                0, 1, 4, 0, //
                0, 2, 5, 0, //
                0, 3, 6, 0,
            ]
        );
    }

    #[test]
    fn test_iter_mut_many_rows() {
        let mut grid = Grid::<u32>::new(Extents::new(40, 3));
        let mut view = grid.view_mut(Bounds::new(Indices::new(2, 1), Extents::new(36, 2)));
        let it = view.iter_mut();
        assert_eq!(it.len(), 72);
        for cell in it {
            *cell = 1;
        }
        assert_eq!(grid.as_slice().iter().sum::<u32>(), 72);
    }

    #[test]
    fn test_iter_mut_empty_region() {
        let mut grid = Grid::<u8>::new(Extents::new(2, 2));
        let mut it = ViewIterMut::<_, RowMajor>::new(
            grid.as_mut_slice(),
            Extents::new(2, 2),
            &Bounds::new(Indices::new(-5, 9), Extents::new(0, 3)),
        );
        assert_eq!(it.len(), 0);
        assert_eq!(it.next(), None);
    }

    #[test]
    #[should_panic(expected = "exceeds grid extents (4, 5)")]
    fn test_iter_mut_rejects_region_outside() {
        let mut grid = numbered();
        let _ = ViewIterMut::<_, ColMajor>::new(
            grid.as_mut_slice(),
            Extents::new(4, 5),
            &Bounds::new(Indices::new(3, 3), Extents::new(2, 2)),
        );
    }

    #[test]
    #[should_panic(expected = "exceeds grid extents")]
    fn test_iter_mut_rejects_negative_origin() {
        let mut grid = numbered();
        let _ = ViewIterMut::<_, RowMajor>::new(
            grid.as_mut_slice(),
            Extents::new(4, 5),
            &Bounds::new(Indices::new(-1, 0), Extents::new(2, 2)),
        );
    }
}
