//! Morse-style cellular decomposition by a horizontal sweep.
//!
//! The sweep walks the rows of the map in increasing `y` and counts the
//! obstacle runs that follow the first free pixel of each row. A change of
//! that count between two rows marks a change of free-space connectivity:
//!
//! ```text
//!  count grows (IN)          count shrinks (OUT)
//!  .........                 ...#.....
//!  ...#.....  <- critical    ~~~#~~~~~  <- wall painted on the last
//!  ~~~#~~~~~     row gets       ...           row of the obstacle
//!                a wall      .........
//! ```
//!
//! At every critical point a dividing wall is painted left and right until
//! an obstacle (or the grid edge) is reached. Decisions are always read
//! from the input grid; walls are written to a separate output grid.

use log::{debug, trace};

use crate::core::{GridCoord, Occupancy};
use crate::error::{CoverageError, Result};
use crate::grid::OccupancyGrid;

/// Kind of connectivity change detected by the sweep.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SweepEvent {
    /// More free segments than in the previous row (a cell splits)
    In,
    /// Fewer free segments than in the previous row (cells merge)
    Out,
}

/// Pixel where the sweep line changes topology.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CriticalPoint {
    /// Obstacle pixel the dividing wall starts from
    pub coord: GridCoord,
    /// Event that produced it
    pub event: SweepEvent,
}

/// Map with dividing walls painted at the critical points.
///
/// Its connected free regions are the cells of the decomposition.
#[derive(Clone, Debug)]
pub struct CellMap {
    grid: OccupancyGrid,
    critical_points: Vec<CriticalPoint>,
    walls: Vec<GridCoord>,
}

impl CellMap {
    /// Painted grid
    #[inline]
    pub fn grid(&self) -> &OccupancyGrid {
        &self.grid
    }

    /// Critical points in detection order
    #[inline]
    pub fn critical_points(&self) -> &[CriticalPoint] {
        &self.critical_points
    }

    /// Pixels that were free in the input and now belong to a dividing wall
    #[inline]
    pub fn walls(&self) -> &[GridCoord] {
        &self.walls
    }
}

/// Number of obstacle runs after the first free pixel of a row.
///
/// Anything before the first free pixel is ignored and a run of adjacent
/// obstacle pixels counts once.
pub fn count_segments(row: &[Occupancy]) -> usize {
    let mut count = 0;
    let mut seen_free = false;
    let mut in_obstacle = false;

    for pixel in row {
        if !seen_free {
            seen_free = pixel.is_free();
            continue;
        }
        if pixel.is_obstacle() {
            if !in_obstacle {
                count += 1;
                in_obstacle = true;
            }
        } else {
            in_obstacle = false;
        }
    }

    count
}

/// Sweep-line cell decomposer.
#[derive(Clone, Debug, Default)]
pub struct CellDecomposer;

impl CellDecomposer {
    /// Create a decomposer
    pub fn new() -> Self {
        Self
    }

    /// Paint dividing walls at every critical point of `grid`.
    ///
    /// Fails with [`CoverageError::EmptyMap`] if the grid has no free pixel.
    pub fn decompose(&self, grid: &OccupancyGrid) -> Result<CellMap> {
        let height = grid.height() as i32;
        let first_row = (0..height)
            .find(|&y| grid.row(y).is_some_and(|row| row.iter().any(|p| p.is_free())))
            .ok_or(CoverageError::EmptyMap)?;

        let mut cell_map = CellMap {
            grid: grid.clone(),
            critical_points: Vec::new(),
            walls: Vec::new(),
        };

        let mut previous = grid.row(first_row).map(count_segments).unwrap_or(0);
        trace!(
            "[Decomposer] first free row y={} with {} segments",
            first_row, previous
        );

        for y in (first_row + 1)..height {
            let segments = grid.row(y).map(count_segments).unwrap_or(0);

            if segments > previous {
                // New obstacle tops are in this row, look at the row above
                self.scan_row(grid, &mut cell_map, y, y - 1, SweepEvent::In);
            } else if segments < previous {
                // Obstacle bottoms are in the previous row, look at this row
                self.scan_row(grid, &mut cell_map, y - 1, y, SweepEvent::Out);
            }

            previous = segments;
        }

        debug!(
            "[Decomposer] {} critical points, {} wall pixels painted",
            cell_map.critical_points.len(),
            cell_map.walls.len()
        );

        Ok(cell_map)
    }

    /// Check every obstacle pixel of `anchor_row` (after its first free
    /// pixel) for a fully free 3-pixel neighbourhood in `probe_row`.
    fn scan_row(
        &self,
        grid: &OccupancyGrid,
        cell_map: &mut CellMap,
        anchor_row: i32,
        probe_row: i32,
        event: SweepEvent,
    ) {
        let width = grid.width() as i32;
        let mut seen_free = false;

        for x in 0..width {
            let coord = GridCoord::new(x, anchor_row);
            if !seen_free {
                seen_free = grid.is_free(coord);
                continue;
            }
            if grid.is_free(coord) {
                continue;
            }

            // Out-of-bounds neighbours count as obstacles
            let critical = (x - 1..=x + 1).all(|nx| grid.is_free(GridCoord::new(nx, probe_row)));
            if critical {
                trace!("[Decomposer] {:?} critical point at ({},{})", event, x, anchor_row);
                cell_map.critical_points.push(CriticalPoint { coord, event });
                paint_wall(grid, cell_map, coord);
            }
        }
    }
}

/// Extend a wall from `origin` to the left and right until an obstacle of
/// the input grid or the grid edge is hit.
fn paint_wall(grid: &OccupancyGrid, cell_map: &mut CellMap, origin: GridCoord) {
    let width = grid.width() as i32;

    for x in (0..origin.x).rev() {
        if !paint_pixel(grid, cell_map, GridCoord::new(x, origin.y)) {
            break;
        }
    }
    for x in (origin.x + 1)..width {
        if !paint_pixel(grid, cell_map, GridCoord::new(x, origin.y)) {
            break;
        }
    }
}

/// Paint one wall pixel. Returns false when the input has an obstacle there.
fn paint_pixel(grid: &OccupancyGrid, cell_map: &mut CellMap, coord: GridCoord) -> bool {
    if !grid.is_free(coord) {
        return false;
    }
    if cell_map.grid.set(coord, Occupancy::Obstacle) {
        cell_map.walls.push(coord);
    }
    true
}
