//! A* pathfinding algorithm.
//!
//! Searches the free pixels of the occupancy grid with:
//! - 8-connected (octile) or 4-connected (Manhattan) moves
//! - Optional exemption of the endpoints, so a sweep edge inside a wall
//!   can still be reached
//! - A per-query expansion budget

mod planner;
mod types;

pub use planner::AStarPlanner;
pub use types::{AStarConfig, PathFailure};

use super::{GridPath, GridPathfinder};
use crate::core::GridCoord;
use crate::grid::OccupancyGrid;

impl GridPathfinder for AStarPlanner {
    fn plan(&self, grid: &OccupancyGrid, start: GridCoord, goal: GridCoord) -> Option<GridPath> {
        self.find_path(grid, start, goal).ok()
    }
}

/// One-off query with the default configuration
pub fn find_path(
    grid: &OccupancyGrid,
    start: GridCoord,
    goal: GridCoord,
) -> Result<GridPath, PathFailure> {
    AStarPlanner::with_defaults().find_path(grid, start, goal)
}
