//! Rectangular regions of grid coordinates.
//!
//! A bounds value is an `(origin, extents)` pair describing the cells from
//! `origin` up to, but excluding, `origin + extents` along each axis. This
//! module provides one dynamic representation and three specializations that
//! move the origin, the extents, or both into const generic parameters:
//!
//! | type                                            | origin        | extents       |
//! |-------------------------------------------------|---------------|---------------|
//! | [`Bounds`]                                      | runtime       | runtime       |
//! | [`FixedExtentsBounds<ROWS, COLS>`]              | runtime       | compile time  |
//! | [`FixedOriginBounds<ROW, COL>`]                 | compile time  | runtime       |
//! | [`FixedOriginExtentsBounds<ROW, COL, ROWS, COLS>`] | compile time | compile time |
//!
//! All four implement [`BoundsLike`], which supplies the containment and
//! overlap tests once for every representation. The fully fixed variant is
//! zero-sized, so code generic over [`BoundsLike`] constant-folds its
//! arithmetic.
//!
//! # Examples
//!
//! ```
//! use planar_core::{Bounds, BoundsLike, Extents, FixedOriginExtentsBounds, Indices};
//!
//! let dynamic = Bounds::new(Indices::new(1, 1), Extents::new(5, 5));
//! let fixed = FixedOriginExtentsBounds::<1, 1, 5, 5>::new();
//!
//! for pt in [Indices::new(0, 0), Indices::new(1, 1), Indices::new(5, 5), Indices::new(6, 6)] {
//!     assert_eq!(dynamic.within(pt), fixed.within(pt));
//! }
//! assert!(dynamic.same_region(&fixed));
//! assert_eq!(std::mem::size_of_val(&fixed), 0);
//! ```

use std::fmt::{self, Display};

use crate::{Extents, Indices};

pub use self::iter::*;

mod iter;

/// The shared capability of every bounds representation.
///
/// Implementors only supply [`origin`](Self::origin) and
/// [`extents`](Self::extents); containment, overlap and traversal are
/// provided on top of those two accessors.
pub trait BoundsLike {
    /// Returns the first cell of the region.
    fn origin(&self) -> Indices;

    /// Returns the size of the region.
    fn extents(&self) -> Extents;

    /// Returns the position one past the last cell along both axes,
    /// `origin + extents`.
    #[inline]
    fn corner(&self) -> Indices {
        self.origin() + self.extents()
    }

    /// Returns the center cell of the region, rounding towards the origin.
    #[inline]
    fn center(&self) -> Indices {
        self.origin() + self.extents() / 2
    }

    /// Returns `true` if the region spans no cells.
    #[inline]
    fn is_empty(&self) -> bool {
        self.extents().is_empty()
    }

    /// Returns `true` if `pt` lies inside the region.
    ///
    /// For each axis, `origin <= pt <= origin + extents - 1`. An empty region
    /// contains no points.
    ///
    /// # Examples
    ///
    /// ```
    /// use planar_core::{Bounds, BoundsLike, Extents, Indices};
    ///
    /// let bounds = Bounds::new(Indices::new(1, 1), Extents::new(5, 5));
    /// assert!(!bounds.within(Indices::new(0, 0)));
    /// assert!(bounds.within(Indices::new(1, 1)));
    /// assert!(bounds.within(Indices::new(5, 5)));
    /// assert!(!bounds.within(Indices::new(6, 6)));
    /// ```
    #[inline]
    fn within(&self, pt: Indices) -> bool {
        pt.all_ge(self.origin()) && pt.all_lt(self.corner())
    }

    /// Returns `true` if the two regions intersect or touch.
    ///
    /// Regions whose cells share an edge or only a corner count as
    /// overlapping. Empty regions overlap nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use planar_core::{Bounds, BoundsLike, Extents, Indices};
    ///
    /// let a = Bounds::new(Indices::new(1, 1), Extents::new(1, 1));
    /// let edge = Bounds::new(Indices::new(1, 2), Extents::new(3, 3));
    /// let corner = Bounds::new(Indices::new(2, 2), Extents::new(1, 1));
    /// let apart = Bounds::new(Indices::new(3, 3), Extents::new(1, 1));
    ///
    /// assert!(a.overlaps(&edge));
    /// assert!(a.overlaps(&corner));
    /// assert!(!a.overlaps(&apart));
    /// ```
    #[inline]
    fn overlaps<B>(&self, other: &B) -> bool
    where
        B: BoundsLike + ?Sized,
    {
        !self.is_empty()
            && !other.is_empty()
            && self.origin().all_le(other.corner())
            && other.origin().all_le(self.corner())
    }

    /// Returns `true` if both values describe the same region, regardless of
    /// representation.
    #[inline]
    fn same_region<B>(&self, other: &B) -> bool
    where
        B: BoundsLike + ?Sized,
    {
        self.origin() == other.origin() && self.extents() == other.extents()
    }

    /// Returns the region as a dynamic [`Bounds`].
    #[inline]
    fn to_bounds(&self) -> Bounds {
        Bounds::new(self.origin(), self.extents())
    }

    /// Returns an iterator over every position in the region, column index
    /// innermost.
    #[inline]
    fn row_major(&self) -> RowBoundsIter {
        BoundsIter::new(self)
    }

    /// Returns an iterator over every position in the region, row index
    /// innermost.
    #[inline]
    fn col_major(&self) -> ColBoundsIter {
        BoundsIter::new(self)
    }
}

impl<B> BoundsLike for &B
where
    B: BoundsLike + ?Sized,
{
    #[inline]
    fn origin(&self) -> Indices {
        (**self).origin()
    }

    #[inline]
    fn extents(&self) -> Extents {
        (**self).extents()
    }
}

fn fmt_bounds<B>(bounds: &B, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    B: BoundsLike + ?Sized,
{
    write!(f, "({}, {})", bounds.origin(), bounds.corner())
}

/// A region whose origin and extents are both runtime values.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    origin: Indices,
    extents: Extents,
}

impl Bounds {
    /// Creates a region from its first cell and its size.
    #[must_use]
    #[inline]
    pub const fn new(origin: Indices, extents: Extents) -> Self {
        Self { origin, extents }
    }

    /// Creates a region anchored at `(0, 0)`.
    #[must_use]
    #[inline]
    pub const fn from_extents(extents: Extents) -> Self {
        Self::new(Indices::ZERO, extents)
    }

    /// Replaces the origin, keeping the extents.
    #[inline]
    pub fn set_origin(&mut self, origin: Indices) {
        self.origin = origin;
    }

    /// Replaces the extents, keeping the origin.
    #[inline]
    pub fn set_extents(&mut self, extents: Extents) {
        self.extents = extents;
    }
}

impl BoundsLike for Bounds {
    #[inline]
    fn origin(&self) -> Indices {
        self.origin
    }

    #[inline]
    fn extents(&self) -> Extents {
        self.extents
    }
}

impl Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_bounds(self, f)
    }
}

/// A region with compile-time extents and a runtime origin.
///
/// Useful for windows of a known shape that slide across a grid.
///
/// # Examples
///
/// ```
/// use planar_core::{BoundsLike, Extents, FixedExtentsBounds, Indices};
///
/// let window = FixedExtentsBounds::<3, 3>::new(Indices::new(4, 2));
/// assert_eq!(window.extents(), Extents::new(3, 3));
/// assert!(window.within(Indices::new(6, 4)));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedExtentsBounds<const ROWS: usize, const COLS: usize> {
    origin: Indices,
}

impl<const ROWS: usize, const COLS: usize> FixedExtentsBounds<ROWS, COLS> {
    /// The extents shared by every value of this type.
    pub const EXTENTS: Extents = Extents::new(ROWS, COLS);

    /// Creates a region of the fixed size anchored at `origin`.
    #[must_use]
    #[inline]
    pub const fn new(origin: Indices) -> Self {
        Self { origin }
    }

    /// Converts another bounds value, if its extents match the fixed extents.
    #[must_use]
    pub fn try_from_bounds<B>(bounds: &B) -> Option<Self>
    where
        B: BoundsLike + ?Sized,
    {
        (bounds.extents() == Self::EXTENTS).then(|| Self::new(bounds.origin()))
    }

    /// Moves the region to a new origin.
    #[inline]
    pub fn set_origin(&mut self, origin: Indices) {
        self.origin = origin;
    }
}

impl<const ROWS: usize, const COLS: usize> BoundsLike for FixedExtentsBounds<ROWS, COLS> {
    #[inline]
    fn origin(&self) -> Indices {
        self.origin
    }

    #[inline]
    fn extents(&self) -> Extents {
        Self::EXTENTS
    }
}

impl<const ROWS: usize, const COLS: usize> From<FixedExtentsBounds<ROWS, COLS>> for Bounds {
    #[inline]
    fn from(bounds: FixedExtentsBounds<ROWS, COLS>) -> Self {
        bounds.to_bounds()
    }
}

impl<const ROWS: usize, const COLS: usize> Display for FixedExtentsBounds<ROWS, COLS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_bounds(self, f)
    }
}

/// A region with a compile-time origin and runtime extents.
///
/// Owning grids use `FixedOriginBounds<0, 0>` to describe themselves.
///
/// # Examples
///
/// ```
/// use planar_core::{BoundsLike, Extents, FixedOriginBounds, Indices};
///
/// let bounds = FixedOriginBounds::<0, 0>::new(Extents::new(20, 10));
/// assert_eq!(bounds.origin(), Indices::ZERO);
/// assert!(bounds.within(Indices::new(19, 9)));
/// assert!(!bounds.within(Indices::new(20, 9)));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedOriginBounds<const ROW: isize, const COL: isize> {
    extents: Extents,
}

impl<const ROW: isize, const COL: isize> FixedOriginBounds<ROW, COL> {
    /// The origin shared by every value of this type.
    pub const ORIGIN: Indices = Indices::new(ROW, COL);

    /// Creates a region of size `extents` at the fixed origin.
    #[must_use]
    #[inline]
    pub const fn new(extents: Extents) -> Self {
        Self { extents }
    }

    /// Converts another bounds value, if its origin matches the fixed origin.
    #[must_use]
    pub fn try_from_bounds<B>(bounds: &B) -> Option<Self>
    where
        B: BoundsLike + ?Sized,
    {
        (bounds.origin() == Self::ORIGIN).then(|| Self::new(bounds.extents()))
    }

    /// Resizes the region, keeping the fixed origin.
    #[inline]
    pub fn set_extents(&mut self, extents: Extents) {
        self.extents = extents;
    }
}

impl<const ROW: isize, const COL: isize> BoundsLike for FixedOriginBounds<ROW, COL> {
    #[inline]
    fn origin(&self) -> Indices {
        Self::ORIGIN
    }

    #[inline]
    fn extents(&self) -> Extents {
        self.extents
    }
}

impl<const ROW: isize, const COL: isize> From<FixedOriginBounds<ROW, COL>> for Bounds {
    #[inline]
    fn from(bounds: FixedOriginBounds<ROW, COL>) -> Self {
        bounds.to_bounds()
    }
}

impl<const ROW: isize, const COL: isize> Display for FixedOriginBounds<ROW, COL> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_bounds(self, f)
    }
}

/// A region whose origin and extents are both compile-time constants.
///
/// This type carries no runtime state.
///
/// # Examples
///
/// ```
/// use planar_core::{BoundsLike, FixedOriginExtentsBounds, Indices};
///
/// // The 3x3 neighbourhood around (0, 0).
/// let neighbourhood = FixedOriginExtentsBounds::<-1, -1, 3, 3>::new();
/// assert_eq!(neighbourhood.row_major().count(), 9);
/// assert_eq!(neighbourhood.center(), Indices::ZERO);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedOriginExtentsBounds<const ROW: isize, const COL: isize, const ROWS: usize, const COLS: usize>;

impl<const ROW: isize, const COL: isize, const ROWS: usize, const COLS: usize>
    FixedOriginExtentsBounds<ROW, COL, ROWS, COLS>
{
    /// The origin shared by every value of this type.
    pub const ORIGIN: Indices = Indices::new(ROW, COL);

    /// The extents shared by every value of this type.
    pub const EXTENTS: Extents = Extents::new(ROWS, COLS);

    /// Creates the region.
    #[must_use]
    #[inline]
    pub const fn new() -> Self {
        Self
    }
}

impl<const ROW: isize, const COL: isize, const ROWS: usize, const COLS: usize> BoundsLike
    for FixedOriginExtentsBounds<ROW, COL, ROWS, COLS>
{
    #[inline]
    fn origin(&self) -> Indices {
        Self::ORIGIN
    }

    #[inline]
    fn extents(&self) -> Extents {
        Self::EXTENTS
    }
}

impl<const ROW: isize, const COL: isize, const ROWS: usize, const COLS: usize>
    From<FixedOriginExtentsBounds<ROW, COL, ROWS, COLS>> for Bounds
{
    #[inline]
    fn from(bounds: FixedOriginExtentsBounds<ROW, COL, ROWS, COLS>) -> Self {
        bounds.to_bounds()
    }
}

impl<const ROW: isize, const COL: isize, const ROWS: usize, const COLS: usize> Display
    for FixedOriginExtentsBounds<ROW, COL, ROWS, COLS>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_bounds(self, f)
    }
}
