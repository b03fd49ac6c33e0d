//! Horizontal sweep lines of a cell.

use crate::core::{GridBounds, GridCoord};
use crate::error::{CoverageError, Result};
use crate::grid::OccupancyGrid;

/// One pass of the boustrophedon sweep.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HorizontalSweepLine {
    /// Row of the line
    pub y: i32,
    /// Left end, inset by the FOV radius from the first free pixel
    pub left_edge: GridCoord,
    /// Right end, inset by the FOV radius from the last free pixel
    pub right_edge: GridCoord,
}

/// Sweep lines covering a cell, top to bottom.
///
/// A cell no taller than the FOV diameter gets a single line through its
/// middle. Otherwise lines start one radius below the top and repeat every
/// radius while inside the cell. Edges are anchored on the full grid row,
/// not on the cell polygon, and pulled in by one radius without leaving the
/// free run.
pub fn sweep_lines(
    grid: &OccupancyGrid,
    cell: usize,
    bounds: &GridBounds,
    radius: i32,
) -> Result<Vec<HorizontalSweepLine>> {
    let radius = radius.max(1);
    let extent = bounds.height();
    let mut y = if extent <= 2 * radius {
        bounds.min_y + extent / 2
    } else {
        bounds.min_y + radius
    };

    let mut lines = Vec::new();
    loop {
        let (left, right) =
            row_edges(grid, bounds, y).ok_or(CoverageError::DegenerateCell { cell, row: y })?;
        lines.push(HorizontalSweepLine {
            y,
            left_edge: GridCoord::new((left + radius).min(right), y),
            right_edge: GridCoord::new((right - radius).max(left), y),
        });

        y += radius;
        if y > bounds.max_y {
            break;
        }
    }

    Ok(lines)
}

/// First free pixel at or right of `min_x`, last free pixel at or left of
/// `max_x`. `None` if either scan runs off the grid.
fn row_edges(grid: &OccupancyGrid, bounds: &GridBounds, y: i32) -> Option<(i32, i32)> {
    let width = grid.width() as i32;
    let free = |x: i32| grid.is_free(GridCoord::new(x, y));

    let left = (bounds.min_x.max(0)..width).find(|&x| free(x))?;
    let right = (0..=bounds.max_x.min(width - 1)).rev().find(|&x| free(x))?;
    Some((left, right))
}
