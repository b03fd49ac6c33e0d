//! Tour solvers for the cell visiting order.

use log::{debug, trace};

use crate::core::GridCoord;
use crate::error::{CoverageError, Result};
use crate::grid::OccupancyGrid;
use crate::pathfinding::{AStarPlanner, GridPathfinder};

/// Open-tour solver over grid points.
pub trait TourSolver {
    /// Visiting order of `points` as a permutation of their indices that
    /// starts with `start`.
    fn solve(&self, grid: &OccupancyGrid, points: &[GridCoord], start: usize)
    -> Result<Vec<usize>>;
}

/// Configuration for [`GreedyTourSolver`].
#[derive(Clone, Debug)]
pub struct GreedyTourConfig {
    /// Upper bound on 2-opt improvement passes (0 disables 2-opt)
    pub two_opt_passes: usize,
}

impl Default for GreedyTourConfig {
    fn default() -> Self {
        Self { two_opt_passes: 50 }
    }
}

/// Nearest-neighbour construction refined by 2-opt, on obstacle-aware
/// distances from a pathfinder.
#[derive(Clone, Debug, Default)]
pub struct GreedyTourSolver<P = AStarPlanner> {
    config: GreedyTourConfig,
    pathfinder: P,
}

impl GreedyTourSolver<AStarPlanner> {
    /// Create a solver using the default A* planner for distances
    pub fn new(config: GreedyTourConfig) -> Self {
        Self::with_pathfinder(config, AStarPlanner::with_defaults())
    }
}

impl<P: GridPathfinder> GreedyTourSolver<P> {
    /// Create a solver with a custom distance oracle
    pub fn with_pathfinder(config: GreedyTourConfig, pathfinder: P) -> Self {
        Self { config, pathfinder }
    }

    /// Solver configuration
    pub fn config(&self) -> &GreedyTourConfig {
        &self.config
    }

    /// Symmetric travel-distance matrix. Fails on the first disconnected pair.
    fn distance_matrix(
        &self,
        grid: &OccupancyGrid,
        points: &[GridCoord],
    ) -> Result<Vec<Vec<f32>>> {
        let n = points.len();
        let mut matrix = vec![vec![0.0; n]; n];

        for i in 0..n {
            for j in (i + 1)..n {
                let distance = self
                    .pathfinder
                    .distance(grid, points[i], points[j])
                    .ok_or_else(|| {
                        CoverageError::OrderingFailure(format!(
                            "no path between ({},{}) and ({},{})",
                            points[i].x, points[i].y, points[j].x, points[j].y
                        ))
                    })?;
                matrix[i][j] = distance;
                matrix[j][i] = distance;
            }
        }

        Ok(matrix)
    }
}

impl<P: GridPathfinder> TourSolver for GreedyTourSolver<P> {
    fn solve(
        &self,
        grid: &OccupancyGrid,
        points: &[GridCoord],
        start: usize,
    ) -> Result<Vec<usize>> {
        if start >= points.len() {
            return Err(CoverageError::OrderingFailure(format!(
                "start index {} out of range for {} points",
                start,
                points.len()
            )));
        }
        if points.len() == 1 {
            return Ok(vec![start]);
        }

        let matrix = self.distance_matrix(grid, points)?;
        let mut tour = nearest_neighbor_tour(&matrix, start);
        let initial = tour_length(&matrix, &tour);

        let passes = two_opt(&matrix, &mut tour, self.config.two_opt_passes);
        debug!(
            "[TourSolver] {} points, length {:.1} -> {:.1} after {} 2-opt passes",
            points.len(),
            initial,
            tour_length(&matrix, &tour),
            passes
        );

        Ok(tour)
    }
}

/// Greedy open tour from `start`; ties go to the lowest index.
fn nearest_neighbor_tour(matrix: &[Vec<f32>], start: usize) -> Vec<usize> {
    let n = matrix.len();
    let mut visited = vec![false; n];
    let mut tour = Vec::with_capacity(n);
    let mut current = start;
    visited[start] = true;
    tour.push(start);

    while tour.len() < n {
        let next = (0..n)
            .filter(|&j| !visited[j])
            .min_by(|&a, &b| {
                matrix[current][a]
                    .partial_cmp(&matrix[current][b])
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
        let Some(next) = next else { break };
        visited[next] = true;
        tour.push(next);
        current = next;
    }

    tour
}

/// Open-path length of a tour
fn tour_length(matrix: &[Vec<f32>], tour: &[usize]) -> f32 {
    tour.windows(2).map(|w| matrix[w[0]][w[1]]).sum()
}

/// 2-opt on an open path with a fixed first element. Returns passes used.
fn two_opt(matrix: &[Vec<f32>], tour: &mut [usize], max_passes: usize) -> usize {
    let n = tour.len();
    if n < 3 {
        return 0;
    }

    for pass in 0..max_passes {
        let mut improved = false;

        for i in 1..n - 1 {
            for j in (i + 1)..n {
                let before = matrix[tour[i - 1]][tour[i]];
                let after = matrix[tour[i - 1]][tour[j]];
                // The last element has no successor on an open path
                let (before_tail, after_tail) = if j + 1 < n {
                    (matrix[tour[j]][tour[j + 1]], matrix[tour[i]][tour[j + 1]])
                } else {
                    (0.0, 0.0)
                };

                if after + after_tail < before + before_tail - 1e-4 {
                    tour[i..=j].reverse();
                    improved = true;
                    trace!("[TourSolver] 2-opt reversed {}..={}", i, j);
                }
            }
        }

        if !improved {
            return pass + 1;
        }
    }

    max_passes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Occupancy, Point2D};

    fn open_grid(width: usize, height: usize) -> OccupancyGrid {
        OccupancyGrid::filled(width, height, Occupancy::Free, 1.0, Point2D::ZERO)
    }

    fn coords(points: &[(i32, i32)]) -> Vec<GridCoord> {
        points.iter().map(|&(x, y)| GridCoord::new(x, y)).collect()
    }

    #[test]
    fn test_single_point() {
        let solver = GreedyTourSolver::new(GreedyTourConfig::default());
        let tour = solver.solve(&open_grid(4, 4), &coords(&[(1, 1)]), 0).unwrap();
        assert_eq!(tour, vec![0]);
    }

    #[test]
    fn test_start_out_of_range() {
        let solver = GreedyTourSolver::new(GreedyTourConfig::default());
        let result = solver.solve(&open_grid(4, 4), &coords(&[(1, 1)]), 3);
        assert!(matches!(result, Err(CoverageError::OrderingFailure(_))));
    }

    #[test]
    fn test_collinear_points_visited_in_sweep_order() {
        let solver = GreedyTourSolver::new(GreedyTourConfig::default());
        let points = coords(&[(10, 0), (0, 0), (30, 0), (20, 0)]);
        let tour = solver.solve(&open_grid(32, 2), &points, 1).unwrap();
        assert_eq!(tour, vec![1, 0, 3, 2]);
    }

    #[test]
    fn test_tour_is_permutation_starting_at_start() {
        let solver = GreedyTourSolver::new(GreedyTourConfig::default());
        let points = coords(&[(2, 2), (17, 3), (9, 14), (1, 18), (18, 18), (10, 7)]);
        let tour = solver.solve(&open_grid(20, 20), &points, 4).unwrap();

        assert_eq!(tour[0], 4);
        let mut sorted = tour.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..points.len()).collect::<Vec<_>>());
    }

    #[test]
    fn test_two_opt_removes_crossing() {
        // Path 0 -> 1 -> 2 -> 3 crosses itself; 0 -> 2 -> 1 -> 3 does not
        let matrix = vec![
            vec![0.0, 10.0, 1.0, 10.0],
            vec![10.0, 0.0, 1.0, 1.0],
            vec![1.0, 1.0, 0.0, 10.0],
            vec![10.0, 1.0, 10.0, 0.0],
        ];
        let mut tour = vec![0, 1, 2, 3];
        two_opt(&matrix, &mut tour, 10);
        assert_eq!(tour, vec![0, 2, 1, 3]);
        assert_eq!(tour_length(&matrix, &tour), 3.0);
    }

    #[test]
    fn test_disconnected_points_fail() {
        let grid = OccupancyGrid::from_ascii(
            "
            ..#..
            ..#..
            ",
            1.0,
            Point2D::ZERO,
        )
        .unwrap();
        let solver = GreedyTourSolver::new(GreedyTourConfig::default());
        let result = solver.solve(&grid, &coords(&[(0, 0), (4, 1)]), 0);
        assert!(matches!(result, Err(CoverageError::OrderingFailure(_))));
    }
}
