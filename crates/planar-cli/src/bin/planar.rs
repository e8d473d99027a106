//! Command-line playground for planar grids.
//!
//! Builds a grid, runs one operation on it, and prints the result.
//!
//! # Usage
//!
//! Number the cells of a view in column-major order:
//!
//! ```sh
//! cargo run --bin planar -- view --extents 6x8 --origin 1,2 --size 3x4 --order col
//! ```
//!
//! Fill a view with a value:
//!
//! ```sh
//! cargo run --bin planar -- view --extents 6x8 --origin 1,2 --size 3x4 --fill 7
//! ```
//!
//! Flood outward from seeds (`ROW,COL=VALUE`, repeatable):
//!
//! ```sh
//! cargo run --bin planar -- flood --extents 10x10 --seed 4,4=10 --seed 5,5=10
//! ```
//!
//! Write cells of a 16x16 tiled grid and show which 4x4 tiles got allocated:
//!
//! ```sh
//! RUST_LOG=trace cargo run --bin planar -- tiled --set 0,0=1 --set 9,13=2
//! ```

use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use planar_core::{
    Bounds, ColMajor, Extents, Grid, GridRead, GridWrite, Indices, RowMajor, TraversalOrder, View,
};
use planar_flood::{SparseCell, flood_fill};
use planar_tiled::FixedTiledGrid;

type DemoTiledGrid = FixedTiledGrid<i32, 16, 16, 4, 4>;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Order {
    Row,
    Col,
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Number or fill the cells of a rectangular view.
    View {
        /// Grid extents as `ROWSxCOLS`.
        #[arg(long, value_name = "EXTENTS", value_parser = parse_extents, default_value = "6x8")]
        extents: Extents,

        /// View origin as `ROW,COL`.
        #[arg(long, value_name = "INDICES", value_parser = parse_indices, default_value = "1,2")]
        origin: Indices,

        /// View extents as `ROWSxCOLS`.
        #[arg(long, value_name = "EXTENTS", value_parser = parse_extents, default_value = "3x4")]
        size: Extents,

        /// Traversal order used when numbering view cells.
        #[arg(long, value_name = "ORDER", default_value = "row")]
        order: Order,

        /// Fill the view with this value instead of numbering it.
        #[arg(long, value_name = "VALUE", allow_hyphen_values = true)]
        fill: Option<i32>,
    },
    /// Flood outward from seed cells, decreasing by one per step.
    Flood {
        /// Grid extents as `ROWSxCOLS`.
        #[arg(long, value_name = "EXTENTS", value_parser = parse_extents, default_value = "10x10")]
        extents: Extents,

        /// Seed as `ROW,COL=VALUE`. Repeatable.
        #[arg(short, long = "seed", value_name = "SEED", value_parser = parse_seed, required = true)]
        seeds: Vec<SparseCell<i32>>,

        /// Confine the fill to a view at `ROW,COL` (requires `--size`).
        #[arg(long, value_name = "INDICES", value_parser = parse_indices, requires = "size")]
        origin: Option<Indices>,

        /// Extents of the confining view as `ROWSxCOLS`.
        #[arg(long, value_name = "EXTENTS", value_parser = parse_extents, requires = "origin")]
        size: Option<Extents>,
    },
    /// Write cells of a 16x16 grid stored as lazily allocated 4x4 tiles.
    Tiled {
        /// Cell write as `ROW,COL=VALUE`. Repeatable.
        #[arg(short, long = "set", value_name = "CELL", value_parser = parse_seed)]
        cells: Vec<SparseCell<i32>>,
    },
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    match args.command {
        Command::View {
            extents,
            origin,
            size,
            order,
            fill,
        } => run_view(extents, Bounds::new(origin, size), order, fill),
        Command::Flood {
            extents,
            seeds,
            origin,
            size,
        } => {
            let region = origin.zip(size).map(|(origin, size)| Bounds::new(origin, size));
            run_flood(extents, &seeds, region);
        }
        Command::Tiled { cells } => run_tiled(&cells),
    }
}

fn run_view(extents: Extents, region: Bounds, order: Order, fill: Option<i32>) {
    let mut grid = Grid::<i32>::new(extents);
    let mut view = grid.view_mut(region);
    if !view.is_within_grid() {
        eprintln!("View {region} does not fit in a {extents} grid.");
        process::exit(1);
    }

    log::info!("operating on view {region} of a {extents} grid");
    match (fill, order) {
        (Some(value), _) => view.fill(value),
        (None, Order::Row) => number_cells(&mut view, RowMajor),
        (None, Order::Col) => number_cells(&mut view, ColMajor),
    }

    println!("View:");
    print!("{}", view.display());
    println!();
    println!("Grid:");
    print!("{}", grid.display());
}

fn number_cells<G, O>(grid: &mut G, order: O)
where
    G: GridWrite<Cell = i32>,
    O: TraversalOrder,
{
    let mut next = 1;
    grid.for_each_mut(order, |_, cell| {
        *cell = next;
        next += 1;
    });
}

fn run_flood(extents: Extents, seeds: &[SparseCell<i32>], region: Option<Bounds>) {
    let mut grid = Grid::<i32>::new(extents);
    let update = |seed: &SparseCell<i32>| (seed.value - 1).max(1);
    let expand = |cell: &SparseCell<i32>| cell.value == 0;

    let written = match region {
        Some(region) => {
            let mut view = View::new(&mut grid, region);
            if !view.is_within_grid() {
                eprintln!("View {region} does not fit in a {extents} grid.");
                process::exit(1);
            }
            let seeds = local_seeds(&view, seeds);
            flood_fill(&mut view, seeds, update, expand)
        }
        None => {
            let seeds = local_seeds(&grid, seeds);
            flood_fill(&mut grid, seeds, update, expand)
        }
    };

    log::info!("flood fill wrote {written} cells");
    println!("Grid:");
    print!("{}", grid.display());
}

/// Keeps the seeds that lie inside `grid`.
fn local_seeds<G>(grid: &G, seeds: &[SparseCell<i32>]) -> Vec<SparseCell<i32>>
where
    G: GridRead,
{
    seeds
        .iter()
        .filter(|seed| {
            let inside = grid.within(seed.position);
            if !inside {
                log::warn!("ignoring seed at {} outside the grid", seed.position);
            }
            inside
        })
        .copied()
        .collect()
}

fn run_tiled(cells: &[SparseCell<i32>]) {
    let mut grid = DemoTiledGrid::default();
    for cell in cells {
        if !grid.within(cell.position) {
            eprintln!(
                "Cell {} is outside the {} grid.",
                cell.position,
                DemoTiledGrid::EXTENTS
            );
            process::exit(1);
        }
        grid[cell.position] = cell.value;
    }

    log::info!(
        "{} of {} tiles allocated",
        grid.active(),
        DemoTiledGrid::tile_count()
    );
    println!("Tiles:");
    print!("{}", grid.mask().display());
    println!();
    println!("Grid:");
    print!("{}", grid.display());
}

fn parse_indices(s: &str) -> Result<Indices, String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `ROW,COL`, got `{s}`"))?;
    let row = row.trim().parse().map_err(|e| format!("invalid row: {e}"))?;
    let col = col.trim().parse().map_err(|e| format!("invalid column: {e}"))?;
    Ok(Indices::new(row, col))
}

fn parse_extents(s: &str) -> Result<Extents, String> {
    let (rows, cols) = s
        .split_once('x')
        .ok_or_else(|| format!("expected `ROWSxCOLS`, got `{s}`"))?;
    let rows = rows.trim().parse().map_err(|e| format!("invalid rows: {e}"))?;
    let cols = cols.trim().parse().map_err(|e| format!("invalid columns: {e}"))?;
    Ok(Extents::new(rows, cols))
}

fn parse_seed(s: &str) -> Result<SparseCell<i32>, String> {
    let (position, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected `ROW,COL=VALUE`, got `{s}`"))?;
    let position = parse_indices(position)?;
    let value = value
        .trim()
        .parse()
        .map_err(|e| format!("invalid value: {e}"))?;
    Ok(SparseCell::new(value, position))
}
