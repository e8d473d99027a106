//! Priority flood fill over grids and views.
//!
//! The fill starts from a set of seed cells and repeatedly takes the seed
//! with the largest value, computes a new value from it, and writes that
//! value into every cell of its 3×3 neighbourhood accepted by an expansion
//! predicate. Every written cell becomes a seed itself. Because seeds are
//! processed largest first, a cell reached from several seeds receives the
//! value derived from the largest one.
//!
//! [`flood_fill_by`] takes the seed ordering as a comparator instead, e.g.
//! to spread the smallest values first.
//!
//! Every fill accepts any [`GridWrite`], so a fill can be confined to a
//! [`View`](planar_core::View); positions are then relative to the view.
//! Cells are only borrowed mutably once the expansion predicate accepts them,
//! so fills over sparse grids allocate storage only where they write.
//!
//! # Examples
//!
//! ```
//! use planar_core::{Extents, Grid, Indices};
//! use planar_flood::flood_fill_from;
//!
//! let mut grid = Grid::<i32>::new(Extents::new(5, 5));
//! grid[Indices::new(2, 2)] = 3;
//!
//! flood_fill_from(
//!     &mut grid,
//!     |&v| v > 0,
//!     |seed| (seed.value - 1).max(1),
//!     |cell| cell.value == 0,
//! );
//!
//! assert_eq!(grid[Indices::new(1, 1)], 2);
//! assert_eq!(grid[Indices::new(0, 0)], 1);
//! ```

use std::cmp::Ordering;

use planar_core::{BoundsLike, FixedOriginExtentsBounds, GridWrite};

pub use self::sparse_cell::SparseCell;

use self::queue::SeedQueue;

mod queue;
mod sparse_cell;

/// Offsets of the 3×3 neighbourhood visited around each seed.
const NEIGHBOURHOOD: FixedOriginExtentsBounds<-1, -1, 3, 3> = FixedOriginExtentsBounds::new();

/// Floods `grid` outward from `seeds`, largest value first.
///
/// Values that do not compare (e.g. NaN) are treated as equal to every other
/// value. See [`flood_fill_by`] for the traversal rules.
///
/// Returns the number of cell writes performed.
pub fn flood_fill<G, I, U, E>(grid: &mut G, seeds: I, update: U, expand: E) -> usize
where
    G: GridWrite + ?Sized,
    G::Cell: Clone + PartialOrd,
    I: IntoIterator<Item = SparseCell<G::Cell>>,
    U: FnMut(&SparseCell<G::Cell>) -> G::Cell,
    E: FnMut(&SparseCell<G::Cell>) -> bool,
{
    flood_fill_by(grid, seeds, compare_values, update, expand)
}

/// Floods `grid` outward from `seeds`, processing the greatest seed
/// according to `compare` first.
///
/// For each seed, `update` computes the value to propagate; then every
/// position of the seed's 3×3 neighbourhood (column-major, the seed itself
/// included) that lies inside the grid and for which `expand` accepts the
/// cell's current value is overwritten with that value and queued as a new
/// seed. Rejected cells are only read, never borrowed mutably.
///
/// `expand` must reject cells that already hold a propagated value, or the
/// fill does not terminate.
///
/// Returns the number of cell writes performed.
///
/// # Examples
///
/// Spreading the smallest value first:
///
/// ```
/// use planar_core::{Extents, Grid, Indices};
/// use planar_flood::{SparseCell, flood_fill_by};
///
/// let mut grid = Grid::<u32>::new(Extents::new(1, 5));
/// let seeds = [
///     SparseCell::new(1, Indices::new(0, 0)),
///     SparseCell::new(7, Indices::new(0, 4)),
/// ];
/// flood_fill_by(
///     &mut grid,
///     seeds,
///     |a, b| b.value.cmp(&a.value),
///     |seed| seed.value + 1,
///     |cell| cell.value == 0,
/// );
/// assert_eq!(grid.as_slice(), [2, 2, 3, 4, 5]);
/// ```
pub fn flood_fill_by<G, I, C, U, E>(
    grid: &mut G,
    seeds: I,
    compare: C,
    mut update: U,
    mut expand: E,
) -> usize
where
    G: GridWrite + ?Sized,
    G::Cell: Clone,
    I: IntoIterator<Item = SparseCell<G::Cell>>,
    C: FnMut(&SparseCell<G::Cell>, &SparseCell<G::Cell>) -> Ordering,
    U: FnMut(&SparseCell<G::Cell>) -> G::Cell,
    E: FnMut(&SparseCell<G::Cell>) -> bool,
{
    let mut queue = SeedQueue::new(compare);
    queue.extend(seeds);
    log::debug!(
        "flood fill over {} grid from {} seeds",
        grid.extents(),
        queue.len()
    );

    let mut written = 0;
    while let Some(current) = queue.pop() {
        let next_value = update(&current);
        for offset in NEIGHBOURHOOD.col_major() {
            let position = current.position + offset;
            let Some(value) = grid.get(position) else {
                continue;
            };
            if !expand(&SparseCell::new(value.clone(), position)) {
                continue;
            }
            let Some(cell) = grid.get_mut(position) else {
                continue;
            };
            cell.clone_from(&next_value);
            queue.push(SparseCell::new(next_value.clone(), position));
            written += 1;
        }
    }

    log::debug!("flood fill wrote {written} cells");
    written
}

/// Floods `grid` outward from every cell accepted by `is_seed`.
///
/// Seeds are collected by scanning the grid in column-major order, then the
/// fill proceeds as in [`flood_fill`].
///
/// Returns the number of cell writes performed.
pub fn flood_fill_from<G, S, U, E>(grid: &mut G, mut is_seed: S, update: U, expand: E) -> usize
where
    G: GridWrite + ?Sized,
    G::Cell: Clone + PartialOrd,
    S: FnMut(&G::Cell) -> bool,
    U: FnMut(&SparseCell<G::Cell>) -> G::Cell,
    E: FnMut(&SparseCell<G::Cell>) -> bool,
{
    let seeds: Vec<_> = grid
        .bounds()
        .col_major()
        .filter_map(|pt| {
            let value = grid.cell(pt);
            is_seed(value).then(|| SparseCell::new(value.clone(), pt))
        })
        .collect();
    log::trace!("collected {} seeds", seeds.len());
    flood_fill(grid, seeds, update, expand)
}

fn compare_values<T>(a: &SparseCell<T>, b: &SparseCell<T>) -> Ordering
where
    T: PartialOrd,
{
    a.value.partial_cmp(&b.value).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use planar_core::{Extents, Grid, GridRead, Indices};

    use super::*;

    #[test]
    fn test_no_seeds_is_noop() {
        let mut grid = Grid::<i32>::new(Extents::new(3, 3));
        let written = flood_fill(&mut grid, [], |s| s.value, |c| c.value == 0);
        assert_eq!(written, 0);
        assert!(grid.iter().all(|&v| v == 0));
    }

    #[test]
    fn test_seed_at_edge_stays_in_grid() {
        let mut grid = Grid::<i32>::new(Extents::new(2, 2));
        let written = flood_fill(
            &mut grid,
            [SparseCell::new(5, Indices::new(0, 0))],
            |s| s.value - 1,
            |c| c.value == 0,
        );
        assert_eq!(written, 4);
        assert!(grid.iter().all(|&v| v == 4));
    }

    #[test]
    fn test_rejected_cells_are_untouched() {
        let mut grid = Grid::from_vec(Extents::new(1, 5), vec![0, 0, -1, 0, 0]).unwrap();
        flood_fill(
            &mut grid,
            [SparseCell::new(9, Indices::new(0, 0))],
            |_| 1,
            |c| c.value == 0,
        );
        assert_eq!(grid.as_slice(), [1, 1, -1, 0, 0]);
    }

    #[test]
    fn test_seeds_collected_in_column_major_order() {
        let mut grid = Grid::from_vec(Extents::new(2, 2), vec![1, 2, 3, 4]).unwrap();
        let mut seen = Vec::new();
        flood_fill_from(
            &mut grid,
            |&v| {
                seen.push(v);
                false
            },
            |s| s.value,
            |_| false,
        );
        assert_eq!(seen, [1, 3, 2, 4]);
    }

    #[test]
    fn test_largest_seed_wins() {
        let mut grid = Grid::<i32>::new(Extents::new(1, 7));
        grid[Indices::new(0, 0)] = 3;
        grid[Indices::new(0, 6)] = 9;
        flood_fill_from(
            &mut grid,
            |&v| v > 0,
            |s| (s.value - 1).max(1),
            |c| c.value == 0,
        );
        assert_eq!(grid.as_slice(), [3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_incomparable_values_compare_equal() {
        let a = SparseCell::new(f32::NAN, Indices::new(0, 0));
        let b = SparseCell::new(1.0, Indices::new(0, 1));
        assert_eq!(compare_values(&a, &b), Ordering::Equal);
        assert_eq!(compare_values(&b, &a), Ordering::Equal);
        let c = SparseCell::new(2.0, Indices::new(5, 5));
        assert_eq!(compare_values(&c, &b), Ordering::Greater);
    }

    #[test]
    fn test_smallest_seed_first() {
        let mut grid = Grid::<i32>::new(Extents::new(1, 7));
        let seeds = [
            SparseCell::new(3, Indices::new(0, 0)),
            SparseCell::new(9, Indices::new(0, 6)),
        ];
        flood_fill_by(
            &mut grid,
            seeds,
            |a, b| b.value.cmp(&a.value),
            |s| s.value + 1,
            |c| c.value == 0,
        );
        assert_eq!(grid.as_slice(), [4, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_expand_sees_current_value() {
        let mut grid = Grid::from_vec(Extents::new(1, 3), vec![0, 5, 0]).unwrap();
        let mut seen = Vec::new();
        flood_fill(
            &mut grid,
            [SparseCell::new(1, Indices::new(0, 1))],
            |s| s.value,
            |c| {
                seen.push((c.position.col, c.value));
                false
            },
        );
        assert_eq!(seen, [(0, 0), (1, 5), (2, 0)]);
        assert_eq!(grid.as_slice(), [0, 5, 0]);
    }
}
