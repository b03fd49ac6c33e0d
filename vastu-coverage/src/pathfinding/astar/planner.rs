//! Grid A* over dense per-pixel bookkeeping.

use std::collections::BinaryHeap;

use log::{debug, trace};

use super::types::{AStarConfig, OpenEntry, PathFailure};
use crate::core::GridCoord;
use crate::grid::OccupancyGrid;
use crate::pathfinding::GridPath;

const NO_PARENT: usize = usize::MAX;

/// A* pathfinder over the free pixels of an [`OccupancyGrid`]
#[derive(Clone, Debug, Default)]
pub struct AStarPlanner {
    config: AStarConfig,
}

/// Per-query search state, one slot per grid pixel.
struct Search {
    g: Vec<f32>,
    parent: Vec<usize>,
    closed: Vec<bool>,
}

impl Search {
    fn new(len: usize) -> Self {
        Self {
            g: vec![f32::INFINITY; len],
            parent: vec![NO_PARENT; len],
            closed: vec![false; len],
        }
    }

    /// Walk parents back from `goal` and return start..=goal.
    fn unwind(&self, grid: &OccupancyGrid, goal: usize) -> Vec<GridCoord> {
        let mut path = vec![grid.index_to_coord(goal)];
        let mut index = goal;
        while self.parent[index] != NO_PARENT {
            index = self.parent[index];
            path.push(grid.index_to_coord(index));
        }
        path.reverse();
        path
    }
}

impl AStarPlanner {
    /// Planner with the given configuration
    pub fn new(config: AStarConfig) -> Self {
        Self { config }
    }

    /// Planner with [`AStarConfig::default`]
    pub fn with_defaults() -> Self {
        Self::new(AStarConfig::default())
    }

    /// Current configuration
    pub fn config(&self) -> &AStarConfig {
        &self.config
    }

    /// Shortest pixel path from `start` to `goal`, both included.
    pub fn find_path(
        &self,
        grid: &OccupancyGrid,
        start: GridCoord,
        goal: GridCoord,
    ) -> Result<GridPath, PathFailure> {
        let (Some(start_index), Some(goal_index)) =
            (grid.coord_to_index(start), grid.coord_to_index(goal))
        else {
            debug!("[AStar] ({},{}) -> ({},{}) leaves the grid", start.x, start.y, goal.x, goal.y);
            return Err(PathFailure::OutOfBounds);
        };

        if !self.config.allow_blocked_endpoints {
            if !grid.is_free(start) {
                return Err(PathFailure::StartBlocked);
            }
            if !grid.is_free(goal) {
                return Err(PathFailure::GoalBlocked);
            }
        }

        let moves = self.moves();
        let mut search = Search::new(grid.width() * grid.height());
        let mut open = BinaryHeap::new();
        search.g[start_index] = 0.0;
        open.push(OpenEntry {
            index: start_index,
            g: 0.0,
            f: self.config.estimate(goal.x - start.x, goal.y - start.y),
        });

        let mut expanded = 0;
        while let Some(entry) = open.pop() {
            expanded += 1;
            if expanded > self.config.max_iterations {
                debug!("[AStar] expansion budget spent ({} nodes)", expanded);
                return Err(PathFailure::MaxIterationsExceeded { expanded });
            }

            if entry.index == goal_index {
                let points = search.unwind(grid, goal_index);
                trace!(
                    "[AStar] {} pixels, cost {:.2}, {} expansions",
                    points.len(),
                    entry.g,
                    expanded
                );
                return Ok(GridPath {
                    points,
                    cost: entry.g,
                });
            }

            if std::mem::replace(&mut search.closed[entry.index], true) {
                continue;
            }

            let current = grid.index_to_coord(entry.index);
            for &(step, cost) in &moves {
                let next = current + step;
                let Some(next_index) = grid.coord_to_index(next) else {
                    continue;
                };
                if search.closed[next_index] {
                    continue;
                }
                // The goal itself may be an obstacle; nothing else may
                if next_index != goal_index && !grid.is_free(next) {
                    continue;
                }

                let g = entry.g + cost;
                if g < search.g[next_index] {
                    search.g[next_index] = g;
                    search.parent[next_index] = entry.index;
                    open.push(OpenEntry {
                        index: next_index,
                        g,
                        f: g + self.config.estimate(goal.x - next.x, goal.y - next.y),
                    });
                }
            }
        }

        debug!(
            "[AStar] no path ({},{}) -> ({},{}) after {} expansions",
            start.x, start.y, goal.x, goal.y, expanded
        );
        Err(PathFailure::NoPath { expanded })
    }

    /// Step offsets with their costs, cardinals first.
    fn moves(&self) -> Vec<(GridCoord, f32)> {
        let count = if self.config.allow_diagonal { 8 } else { 4 };
        GridCoord::new(0, 0)
            .neighbors_8()
            .into_iter()
            .take(count)
            .enumerate()
            .map(|(i, step)| (step, if i < 4 { 1.0 } else { self.config.diagonal_cost }))
            .collect()
    }
}
