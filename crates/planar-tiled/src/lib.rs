//! Sparse tiled grids.
//!
//! [`FixedTiledGrid`] partitions a large fixed-size grid into equally sized
//! [`FixedGrid`] tiles and allocates each tile on the first write to one of
//! its cells. Cells of tiles that were never written read as the grid's
//! default value, so mostly uniform grids cost memory only where they differ.
//!
//! The tiled grid implements [`GridRead`] and [`GridWrite`], so it works with
//! views, assignment, and every other operation of `planar-core`.
//!
//! # Examples
//!
//! ```
//! use planar_core::{FixedGrid, FixedOriginExtentsBounds, GridRead, GridWrite, Indices};
//! use planar_tiled::FixedTiledGrid;
//!
//! let mut grid = FixedTiledGrid::<i32, 20, 20, 5, 5>::new(1);
//! assert_eq!(grid.active(), 0);
//!
//! grid.view_mut(FixedOriginExtentsBounds::<1, 1, 2, 2>::new())
//!     .assign(&FixedGrid::<i32, 2, 2>::new(5));
//!
//! assert_eq!(grid[Indices::new(0, 0)], 1);
//! assert_eq!(grid[Indices::new(2, 2)], 5);
//! assert_eq!(grid.active(), 1);
//! ```

use std::ops::{Index, IndexMut};

use planar_core::{Extents, FixedGrid, Grid, GridRead, GridWrite, Indices};

/// A fixed-size grid stored as lazily allocated tiles.
///
/// The grid has `ROWS` rows and `COLS` columns split into tiles of
/// `TILE_ROWS` by `TILE_COLS` cells. Tiles are addressed by tile indices,
/// i.e. `(row / TILE_ROWS, col / TILE_COLS)`.
///
/// The tile shape must evenly divide the grid shape. Constructing a grid with
/// any other shape fails to compile.
#[derive(Debug, Clone)]
pub struct FixedTiledGrid<
    T,
    const ROWS: usize,
    const COLS: usize,
    const TILE_ROWS: usize,
    const TILE_COLS: usize,
> {
    default: T,
    tiles: Vec<Option<Box<FixedGrid<T, TILE_ROWS, TILE_COLS>>>>,
}

impl<T, const ROWS: usize, const COLS: usize, const TILE_ROWS: usize, const TILE_COLS: usize>
    FixedTiledGrid<T, ROWS, COLS, TILE_ROWS, TILE_COLS>
{
    /// The extents of every grid of this type, in cells.
    pub const EXTENTS: Extents = Extents::new(ROWS, COLS);

    /// The number of tile rows and tile columns.
    pub const TILE_EXTENTS: Extents = Extents::new(ROWS / TILE_ROWS, COLS / TILE_COLS);

    const SHAPE_CHECK: () = assert!(
        TILE_ROWS > 0 && TILE_COLS > 0 && ROWS % TILE_ROWS == 0 && COLS % TILE_COLS == 0,
        "tile shape must evenly divide the grid shape"
    );

    /// Creates a grid where every cell reads as `default` and no tile is
    /// allocated.
    #[must_use]
    pub fn new(default: T) -> Self {
        let () = Self::SHAPE_CHECK;
        let tiles = std::iter::repeat_with(|| None)
            .take(Self::tile_count())
            .collect();
        Self { default, tiles }
    }

    /// Returns the number of tile rows.
    #[must_use]
    pub const fn tile_rows() -> usize {
        Self::TILE_EXTENTS.rows
    }

    /// Returns the number of tile columns.
    #[must_use]
    pub const fn tile_cols() -> usize {
        Self::TILE_EXTENTS.cols
    }

    /// Returns the total number of tiles.
    #[must_use]
    pub const fn tile_count() -> usize {
        Self::TILE_EXTENTS.area()
    }

    /// Returns the value read from cells of unallocated tiles.
    #[must_use]
    pub fn default_value(&self) -> &T {
        &self.default
    }

    /// Returns the number of allocated tiles.
    #[must_use]
    pub fn active(&self) -> usize {
        self.tiles.iter().filter(|tile| tile.is_some()).count()
    }

    /// Returns a grid of tile indices marking which tiles are allocated.
    #[must_use]
    pub fn mask(&self) -> Grid<bool> {
        Grid::from_fn(Self::TILE_EXTENTS, |idx| self.tile(idx).is_some())
    }

    /// Returns the tile at tile index `idx`, or `None` if it is not
    /// allocated or `idx` is outside the tile grid.
    #[must_use]
    pub fn tile(&self, idx: Indices) -> Option<&FixedGrid<T, TILE_ROWS, TILE_COLS>> {
        let index = Self::TILE_EXTENTS.linear_index(idx)?;
        self.tiles.get(index)?.as_deref()
    }

    /// Returns the position of the first cell of the tile at tile index
    /// `idx`.
    #[must_use]
    pub fn tile_origin(idx: Indices) -> Indices {
        Indices::new(
            idx.row * TILE_ROWS.cast_signed(),
            idx.col * TILE_COLS.cast_signed(),
        )
    }

    /// Releases every tile, so that all cells read as the default value
    /// again.
    pub fn clear(&mut self) {
        let released = self.active();
        self.tiles.iter_mut().for_each(|tile| *tile = None);
        log::trace!("released {released} tiles");
    }

    /// Returns the tile slot and in-tile position holding `pt`.
    fn locate(pt: Indices) -> Option<(usize, Indices)> {
        let row = usize::try_from(pt.row).ok()?;
        let col = usize::try_from(pt.col).ok()?;
        if row >= ROWS || col >= COLS {
            return None;
        }
        let slot = (row / TILE_ROWS) * Self::tile_cols() + col / TILE_COLS;
        let local = Indices::new(
            (row % TILE_ROWS).cast_signed(),
            (col % TILE_COLS).cast_signed(),
        );
        Some((slot, local))
    }
}

impl<T, const ROWS: usize, const COLS: usize, const TILE_ROWS: usize, const TILE_COLS: usize>
    Default for FixedTiledGrid<T, ROWS, COLS, TILE_ROWS, TILE_COLS>
where
    T: Default,
{
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T, const ROWS: usize, const COLS: usize, const TILE_ROWS: usize, const TILE_COLS: usize>
    GridRead for FixedTiledGrid<T, ROWS, COLS, TILE_ROWS, TILE_COLS>
{
    type Cell = T;

    #[inline]
    fn extents(&self) -> Extents {
        Self::EXTENTS
    }

    fn get(&self, pt: Indices) -> Option<&T> {
        let (slot, local) = Self::locate(pt)?;
        match self.tiles.get(slot)? {
            Some(tile) => tile.get(local),
            None => Some(&self.default),
        }
    }
}

impl<T, const ROWS: usize, const COLS: usize, const TILE_ROWS: usize, const TILE_COLS: usize>
    GridWrite for FixedTiledGrid<T, ROWS, COLS, TILE_ROWS, TILE_COLS>
where
    T: Clone,
{
    fn get_mut(&mut self, pt: Indices) -> Option<&mut T> {
        let (slot, local) = Self::locate(pt)?;
        let default = &self.default;
        let tile = self.tiles.get_mut(slot)?.get_or_insert_with(|| {
            log::trace!(
                "allocating tile {} for cell {pt}",
                Self::TILE_EXTENTS.indices_of(slot)
            );
            Box::new(FixedGrid::new(default.clone()))
        });
        tile.get_mut(local)
    }
}

impl<T, const ROWS: usize, const COLS: usize, const TILE_ROWS: usize, const TILE_COLS: usize>
    Index<Indices> for FixedTiledGrid<T, ROWS, COLS, TILE_ROWS, TILE_COLS>
{
    type Output = T;

    #[inline]
    #[track_caller]
    fn index(&self, pt: Indices) -> &T {
        self.cell(pt)
    }
}

impl<T, const ROWS: usize, const COLS: usize, const TILE_ROWS: usize, const TILE_COLS: usize>
    IndexMut<Indices> for FixedTiledGrid<T, ROWS, COLS, TILE_ROWS, TILE_COLS>
where
    T: Clone,
{
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, pt: Indices) -> &mut T {
        self.cell_mut(pt)
    }
}
