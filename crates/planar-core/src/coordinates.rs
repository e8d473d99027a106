//! Coordinate primitives.
//!
//! This module provides the two value types every other part of the crate is
//! expressed in:
//!
//! - [`Indices`] - a signed position along the row and column axes
//! - [`Extents`] - an unsigned size along the row and column axes
//!
//! Axis 0 is the row axis and axis 1 is the column axis. Cell storage is
//! row-major, so the column index varies fastest.
//!
//! # Examples
//!
//! ```
//! use planar_core::{Extents, Indices};
//!
//! let origin = Indices::new(1, 2);
//! let extents = Extents::new(3, 4);
//!
//! assert_eq!(extents.area(), 12);
//! assert_eq!(origin + extents, Indices::new(4, 6));
//! assert_eq!(Indices::new(4, 6) - origin, Indices::new(3, 4));
//! ```

use std::{
    fmt::{self, Display},
    ops::{Add, AddAssign, Div, Neg, Sub, SubAssign},
};

/// A position along the row and column axes.
///
/// Positions are signed so that regions may be anchored at negative offsets,
/// e.g. a 3×3 neighbourhood centred on the origin starts at `(-1, -1)`.
///
/// The derived ordering is lexicographic (row first). Use the `all_*`
/// methods for componentwise comparisons.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Indices {
    /// Row index (axis 0).
    pub row: isize,
    /// Column index (axis 1).
    pub col: isize,
}

impl Indices {
    /// The position `(0, 0)`.
    pub const ZERO: Self = Self::new(0, 0);

    /// Creates a new position.
    #[must_use]
    #[inline]
    pub const fn new(row: isize, col: isize) -> Self {
        Self { row, col }
    }

    /// Creates a position with the same value on both axes.
    #[must_use]
    #[inline]
    pub const fn splat(value: isize) -> Self {
        Self::new(value, value)
    }

    /// Returns `true` if both components are strictly less than `other`'s.
    #[must_use]
    #[inline]
    pub const fn all_lt(self, other: Self) -> bool {
        self.row < other.row && self.col < other.col
    }

    /// Returns `true` if both components are less than or equal to `other`'s.
    #[must_use]
    #[inline]
    pub const fn all_le(self, other: Self) -> bool {
        self.row <= other.row && self.col <= other.col
    }

    /// Returns `true` if both components are strictly greater than `other`'s.
    #[must_use]
    #[inline]
    pub const fn all_gt(self, other: Self) -> bool {
        self.row > other.row && self.col > other.col
    }

    /// Returns `true` if both components are greater than or equal to `other`'s.
    #[must_use]
    #[inline]
    pub const fn all_ge(self, other: Self) -> bool {
        self.row >= other.row && self.col >= other.col
    }

    /// Returns the componentwise absolute value.
    #[must_use]
    #[inline]
    pub const fn abs(self) -> Self {
        Self::new(self.row.abs(), self.col.abs())
    }

    /// Converts a non-negative position into extents.
    ///
    /// Returns `None` if either component is negative.
    #[must_use]
    #[inline]
    pub fn to_extents(self) -> Option<Extents> {
        Some(Extents::new(
            usize::try_from(self.row).ok()?,
            usize::try_from(self.col).ok()?,
        ))
    }
}

impl From<(isize, isize)> for Indices {
    #[inline]
    fn from((row, col): (isize, isize)) -> Self {
        Self::new(row, col)
    }
}

impl Display for Indices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl Add for Indices {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl AddAssign for Indices {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Indices {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

impl SubAssign for Indices {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for Indices {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self::new(-self.row, -self.col)
    }
}

impl Add<Extents> for Indices {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Extents) -> Self::Output {
        self + rhs.to_indices()
    }
}

impl Sub<Extents> for Indices {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Extents) -> Self::Output {
        self - rhs.to_indices()
    }
}

/// A size along the row and column axes.
///
/// An extent of zero along either axis describes an empty region.
///
/// Regions are addressed with signed [`Indices`], so extents used to offset a
/// position (e.g. as the extents of a bounds region) must not exceed
/// `isize::MAX` along either axis.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Extents {
    /// Number of rows (axis 0).
    pub rows: usize,
    /// Number of columns (axis 1).
    pub cols: usize,
}

impl Extents {
    /// The canonical empty size `(0, 0)`.
    pub const ZERO: Self = Self::new(0, 0);

    /// Creates a new size.
    #[must_use]
    #[inline]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Returns the number of cells spanned, `rows * cols`.
    #[must_use]
    #[inline]
    pub const fn area(self) -> usize {
        self.rows * self.cols
    }

    /// Returns `true` if the size spans no cells.
    #[must_use]
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Returns the componentwise minimum of two sizes.
    #[must_use]
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::new(self.rows.min(other.rows), self.cols.min(other.cols))
    }

    /// Returns the componentwise maximum of two sizes.
    #[must_use]
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::new(self.rows.max(other.rows), self.cols.max(other.cols))
    }

    /// Returns the row-major offset of `pt` in a buffer of this shape.
    ///
    /// Returns `None` if `pt` lies outside `(0, 0)..(rows, cols)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use planar_core::{Extents, Indices};
    ///
    /// let extents = Extents::new(20, 10);
    /// assert_eq!(extents.linear_index(Indices::new(2, 3)), Some(23));
    /// assert_eq!(extents.linear_index(Indices::new(0, 10)), None);
    /// assert_eq!(extents.linear_index(Indices::new(-1, 0)), None);
    /// ```
    #[must_use]
    #[inline]
    pub fn linear_index(self, pt: Indices) -> Option<usize> {
        let row = usize::try_from(pt.row).ok()?;
        let col = usize::try_from(pt.col).ok()?;
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }

    /// Returns the position of a row-major offset in a buffer of this shape.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not less than [`area`](Self::area).
    #[must_use]
    #[track_caller]
    pub fn indices_of(self, index: usize) -> Indices {
        assert!(
            index < self.area(),
            "offset {index} out of range for extents {self}"
        );
        Indices::new(
            (index / self.cols).cast_signed(),
            (index % self.cols).cast_signed(),
        )
    }

    /// Reinterprets the size as a position offset.
    ///
    /// # Panics
    ///
    /// Panics if either component exceeds `isize::MAX`.
    #[must_use]
    #[inline]
    #[track_caller]
    pub const fn to_indices(self) -> Indices {
        let max = isize::MAX.cast_unsigned();
        assert!(
            self.rows <= max && self.cols <= max,
            "extents do not fit in signed indices"
        );
        Indices::new(self.rows.cast_signed(), self.cols.cast_signed())
    }
}

impl From<(usize, usize)> for Extents {
    #[inline]
    fn from((rows, cols): (usize, usize)) -> Self {
        Self::new(rows, cols)
    }
}

impl Display for Extents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.rows, self.cols)
    }
}

impl Add for Extents {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.rows + rhs.rows, self.cols + rhs.cols)
    }
}

impl Div<usize> for Extents {
    type Output = Self;

    #[inline]
    fn div(self, rhs: usize) -> Self::Output {
        Self::new(self.rows / rhs, self.cols / rhs)
    }
}
