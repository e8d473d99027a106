//! Core data structures for 2-dimensional grids.
//!
//! This crate provides rectangular regions, grid storage, and views into
//! grids. All of them share one coordinate model: positions are signed
//! `(row, col)` pairs, sizes are unsigned `(rows, cols)` pairs, and cells are
//! stored in row-major order.
//!
//! # Overview
//!
//! 1. **Coordinates** - [`coordinates`]: [`Indices`] (a position) and
//!    [`Extents`] (a size).
//!
//! 2. **Bounds** - [`bounds`]: rectangular regions and their iterators.
//!    - [`BoundsLike`]: the region interface (`within`, `overlaps`, iteration)
//!    - [`Bounds`], [`FixedExtentsBounds`], [`FixedOriginBounds`],
//!      [`FixedOriginExtentsBounds`]: regions whose origin and size are known
//!      at runtime or at compile time
//!    - [`RowBoundsIter`], [`ColBoundsIter`]: positions of a region in
//!      row-major or column-major order
//!
//! 3. **Grids** - [`grid`]: cell storage.
//!    - [`GridRead`], [`GridWrite`]: the grid interface shared by storage and
//!      views
//!    - [`Grid`], [`FixedGrid`]: owned cells with runtime or compile-time
//!      extents
//!    - [`MappedGrid`], [`FixedMappedGrid`]: grids over caller-owned buffers
//!
//! 4. **Views** - [`view`]: [`View`] restricts a grid to a region and is
//!    itself a grid, so views can be filled, assigned, iterated, and nested.
//!
//! # Examples
//!
//! ```
//! use planar_core::{
//!     BoundsLike, Extents, FixedOriginExtentsBounds, Grid, GridRead, GridWrite, Indices,
//! };
//!
//! let mut grid = Grid::<i32>::new(Extents::new(20, 10));
//!
//! let region = FixedOriginExtentsBounds::<1, 1, 5, 5>::new();
//! grid.view_mut(region).fill(3);
//!
//! assert_eq!(grid[Indices::new(1, 1)], 3);
//! assert_eq!(grid[Indices::new(0, 0)], 0);
//! assert!(region.within(Indices::new(5, 5)));
//! assert_eq!(grid.iter().filter(|&&v| v == 3).count(), 25);
//! ```

pub mod bounds;
pub mod coordinates;
pub mod display;
pub mod error;
pub mod grid;
pub mod view;

// Re-export commonly used types
pub use self::{
    bounds::{
        Bounds, BoundsIter, BoundsIterEnd, BoundsLike, ColBoundsIter, ColMajor,
        FixedExtentsBounds, FixedOriginBounds, FixedOriginExtentsBounds, RowBoundsIter, RowMajor,
        TraversalOrder,
    },
    coordinates::{Extents, Indices},
    error::GridError,
    grid::{
        FixedGrid, FixedMappedGrid, Grid, GridRead, GridStorage, GridStorageMut, GridWrite,
        MappedGrid,
    },
    view::{View, ViewIter, ViewIterEnd, ViewIterMut},
};
