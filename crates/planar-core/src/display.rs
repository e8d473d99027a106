//! Text rendering of grids.

use std::fmt::{self, Display};

use crate::{GridRead, Indices};

/// Formats a grid as text, one line per row.
///
/// Cells are right-aligned in columns four characters wide and every row,
/// including the last, ends with a newline. Empty grids render as the empty
/// string. Created by [`GridRead::display`].
#[derive(Debug)]
pub struct DisplayGrid<'a, G: ?Sized> {
    grid: &'a G,
}

impl<'a, G> DisplayGrid<'a, G>
where
    G: GridRead + ?Sized,
{
    pub(crate) fn new(grid: &'a G) -> Self {
        Self { grid }
    }
}

impl<G> Clone for DisplayGrid<'_, G>
where
    G: ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<G> Copy for DisplayGrid<'_, G> where G: ?Sized {}

impl<G> Display for DisplayGrid<'_, G>
where
    G: GridRead + ?Sized,
    G::Cell: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let extents = self.grid.extents();
        if extents.is_empty() {
            return Ok(());
        }
        for row in 0..extents.rows.cast_signed() {
            for col in 0..extents.cols.cast_signed() {
                write!(f, "{:>4}", self.grid.cell(Indices::new(row, col)))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
