//! Point-to-point pathfinding on the occupancy grid.
//!
//! The coverage generator and the tour solver only depend on the
//! [`GridPathfinder`] contract; [`AStarPlanner`] is the default implementation.

pub mod astar;

pub use astar::{AStarConfig, AStarPlanner, PathFailure};

use crate::core::GridCoord;
use crate::grid::OccupancyGrid;

/// A connected pixel path between two grid coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct GridPath {
    /// Pixels from start to goal, both included
    pub points: Vec<GridCoord>,
    /// Travel cost in pixels
    pub cost: f32,
}

/// Point-to-point grid pathfinder capability.
pub trait GridPathfinder {
    /// Plan a path from `start` to `goal`; `None` if they cannot be connected.
    fn plan(&self, grid: &OccupancyGrid, start: GridCoord, goal: GridCoord) -> Option<GridPath>;

    /// Travel distance from `start` to `goal`; `None` if unreachable.
    fn distance(&self, grid: &OccupancyGrid, start: GridCoord, goal: GridCoord) -> Option<f32> {
        self.plan(grid, start, goal).map(|path| path.cost)
    }
}
