use std::{fmt::Debug, iter::FusedIterator, marker::PhantomData};

use crate::{BoundsLike, Indices};

/// A traversal order over a rectangular region.
///
/// The two implementations are [`RowMajor`] and [`ColMajor`]. Both are
/// zero-sized markers; the order is chosen at compile time by the iterator's
/// type parameter.
pub trait TraversalOrder: Debug + Default + Clone + Copy {
    /// Moves `pt` to the next position of a region spanning `origin..corner`.
    ///
    /// `pt` must not be the last position of the region.
    fn advance(pt: &mut Indices, origin: Indices, corner: Indices);
}

/// Row-major order: the column index sweeps the full width before the row
/// index advances. This is the storage order of every grid in this crate.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowMajor;

impl TraversalOrder for RowMajor {
    #[inline]
    fn advance(pt: &mut Indices, origin: Indices, corner: Indices) {
        pt.col += 1;
        if pt.col == corner.col {
            pt.col = origin.col;
            pt.row += 1;
        }
    }
}

/// Column-major order: the row index sweeps the full height before the
/// column index advances.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColMajor;

impl TraversalOrder for ColMajor {
    #[inline]
    fn advance(pt: &mut Indices, origin: Indices, corner: Indices) {
        pt.row += 1;
        if pt.row == corner.row {
            pt.row = origin.row;
            pt.col += 1;
        }
    }
}

/// The end marker for [`BoundsIter`].
///
/// An iterator compares equal to `BoundsIterEnd` once every position has been
/// produced, so loops can terminate without building a terminal iterator.
///
/// # Examples
///
/// ```
/// use planar_core::{Bounds, BoundsIterEnd, BoundsLike, Extents, Indices};
///
/// let bounds = Bounds::new(Indices::new(1, 1), Extents::new(2, 2));
/// let mut it = bounds.row_major();
/// let mut seen = 0;
/// while it != BoundsIterEnd {
///     it.next();
///     seen += 1;
/// }
/// assert_eq!(seen, 4);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoundsIterEnd;

/// A lazy iterator over every position inside a bounds region.
///
/// Each position is produced exactly once, in the order selected by `O`.
/// Iterators are cheap to clone; a clone replays the remaining sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundsIter<O> {
    pt: Indices,
    origin: Indices,
    corner: Indices,
    remaining: usize,
    _order: PhantomData<O>,
}

/// A [`BoundsIter`] in [`RowMajor`] order.
pub type RowBoundsIter = BoundsIter<RowMajor>;

/// A [`BoundsIter`] in [`ColMajor`] order.
pub type ColBoundsIter = BoundsIter<ColMajor>;

impl<O> BoundsIter<O>
where
    O: TraversalOrder,
{
    /// Creates an iterator positioned at the origin of `bounds`.
    ///
    /// An empty region yields an iterator that is already at its end.
    #[must_use]
    pub fn new<B>(bounds: &B) -> Self
    where
        B: BoundsLike + ?Sized,
    {
        let origin = bounds.origin();
        Self {
            pt: origin,
            origin,
            corner: bounds.corner(),
            remaining: bounds.extents().area(),
            _order: PhantomData,
        }
    }

    /// Returns the position the next call to `next` will produce.
    #[must_use]
    #[inline]
    pub fn peek(&self) -> Option<Indices> {
        (self.remaining > 0).then_some(self.pt)
    }

    /// Returns `true` once every position has been produced.
    #[must_use]
    #[inline]
    pub fn is_end(&self) -> bool {
        self.remaining == 0
    }

    /// Returns the position one past the last cell along both axes.
    #[must_use]
    #[inline]
    pub fn past_corner(&self) -> Indices {
        self.corner
    }
}

impl<O> Iterator for BoundsIter<O>
where
    O: TraversalOrder,
{
    type Item = Indices;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let pt = self.pt;
        self.remaining -= 1;
        if self.remaining > 0 {
            O::advance(&mut self.pt, self.origin, self.corner);
        }
        Some(pt)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<O> ExactSizeIterator for BoundsIter<O> where O: TraversalOrder {}
impl<O> FusedIterator for BoundsIter<O> where O: TraversalOrder {}

impl<O> PartialEq<BoundsIterEnd> for BoundsIter<O>
where
    O: TraversalOrder,
{
    #[inline]
    fn eq(&self, _: &BoundsIterEnd) -> bool {
        self.is_end()
    }
}

impl<O> PartialEq<BoundsIter<O>> for BoundsIterEnd
where
    O: TraversalOrder,
{
    #[inline]
    fn eq(&self, other: &BoundsIter<O>) -> bool {
        other.is_end()
    }
}
