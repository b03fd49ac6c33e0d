//! Visit Order Planner.
//!
//! Picks the cell that contains the start position and asks a
//! [`TourSolver`] for an open tour over the cell centers anchored at it.
//! The solver's answer is checked, never repaired: anything that is not a
//! permutation starting at the start cell fails the planning request.

mod solver;

pub use solver::{GreedyTourConfig, GreedyTourSolver, TourSolver};

use log::debug;

use crate::core::GridCoord;
use crate::decomposition::Cell;
use crate::error::{CoverageError, Result};
use crate::grid::OccupancyGrid;

/// Order in which the cells are covered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisitOrder {
    /// Index of the cell containing the start position
    pub start_cell: usize,
    /// Permutation of cell indices, `order[0] == start_cell`
    pub order: Vec<usize>,
}

impl VisitOrder {
    /// Number of cells in the order
    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True if there is no cell to visit
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Cells in visiting order
    pub fn iter<'a>(&'a self, cells: &'a [Cell]) -> impl Iterator<Item = &'a Cell> + 'a {
        self.order.iter().filter_map(move |&i| cells.get(i))
    }
}

/// Index of the last cell whose polygon contains `position`.
fn last_containing(cells: &[Cell], position: GridCoord) -> Option<usize> {
    cells.iter().rposition(|cell| cell.contains(position))
}

/// Index of the cell the coverage starts in.
///
/// When several polygons contain the start, the last one wins. A start that
/// sits on a dividing wall belongs to no polygon; its 4-neighbours are tried
/// instead (north, east, south, west).
pub fn find_start_cell(cells: &[Cell], start: GridCoord) -> Result<usize> {
    last_containing(cells, start)
        .or_else(|| {
            start
                .neighbors_4()
                .into_iter()
                .find_map(|neighbor| last_containing(cells, neighbor))
        })
        .ok_or(CoverageError::UnreachableStart { start })
}

/// Compute the visiting order of `cells` for a robot starting at `start`.
pub fn plan_visit_order<S>(
    cells: &[Cell],
    start: GridCoord,
    grid: &OccupancyGrid,
    solver: &S,
) -> Result<VisitOrder>
where
    S: TourSolver + ?Sized,
{
    if !grid.is_free(start) {
        return Err(CoverageError::UnreachableStart { start });
    }

    let start_cell = find_start_cell(cells, start)?;
    let centers: Vec<GridCoord> = cells.iter().map(|cell| cell.center).collect();
    let order = solver.solve(grid, &centers, start_cell)?;

    validate_order(&order, cells.len(), start_cell)?;
    debug!(
        "[VisitOrder] start cell {} of {}, order {:?}",
        start_cell,
        cells.len(),
        order
    );

    Ok(VisitOrder { start_cell, order })
}

/// Check that `order` is a permutation of `0..count` beginning at `start`.
fn validate_order(order: &[usize], count: usize, start: usize) -> Result<()> {
    if order.len() != count {
        return Err(CoverageError::OrderingFailure(format!(
            "solver returned {} indices for {} cells",
            order.len(),
            count
        )));
    }
    if order.first() != Some(&start) {
        return Err(CoverageError::OrderingFailure(format!(
            "tour does not start at cell {}",
            start
        )));
    }

    let mut seen = vec![false; count];
    for &index in order {
        match seen.get_mut(index) {
            Some(slot) if !*slot => *slot = true,
            _ => {
                return Err(CoverageError::OrderingFailure(format!(
                    "invalid or repeated cell index {}",
                    index
                )));
            }
        }
    }

    Ok(())
}
