//! Flood fills over sparse tiled grids.

use planar_core::Indices;
use planar_flood::{SparseCell, flood_fill};
use planar_tiled::FixedTiledGrid;

type Tiled = FixedTiledGrid<i32, 8, 8, 2, 2>;

#[test]
fn test_rejected_neighbours_allocate_no_tiles() {
    let mut grid = Tiled::new(0);
    grid[Indices::new(0, 0)] = 1;
    assert_eq!(grid.active(), 1);

    let written = flood_fill(
        &mut grid,
        [SparseCell::new(5, Indices::new(3, 3))],
        |s| s.value - 1,
        |_| false,
    );

    assert_eq!(written, 0);
    assert_eq!(grid.active(), 1);
    assert!(grid.tile(Indices::new(1, 1)).is_none());
}

#[test]
fn test_fill_allocates_only_written_tiles() {
    let mut grid = Tiled::new(0);
    let written = flood_fill(
        &mut grid,
        [SparseCell::new(3, Indices::new(3, 3))],
        |s| (s.value - 1).max(1),
        |c| c.value == 0 && c.position.row <= 3 && c.position.col <= 3,
    );

    assert_eq!(written, 16);
    assert_eq!(grid.active(), 4);
    let mask = grid.mask();
    for pt in [(0, 0), (0, 1), (1, 0), (1, 1)] {
        assert!(mask[Indices::from(pt)], "tile {pt:?}");
    }
    assert_eq!(grid[Indices::new(4, 4)], 0);
}
