//! End-to-end boustrophedon coverage planner.
//!
//! ```text
//!  OccupancyGrid ──▶ CellDecomposer ──▶ extract_cells ──▶ plan_visit_order
//!                                                             │
//!  CoveragePath ◀── PoseMapper ◀── CoverageGenerator ◀────────┘
//! ```
//!
//! Each stage is pure: it reads the previous stage's output and returns a
//! new value. Any stage error aborts the whole request.

use log::info;

use crate::config::CoverageConfig;
use crate::core::GridCoord;
use crate::coverage::{CoverageGenerator, CoverageParams};
use crate::decomposition::{
    Cell, CellDecomposer, ContourExtractor, MooreContourExtractor, extract_cells,
};
use crate::error::{CoverageError, Result};
use crate::grid::OccupancyGrid;
use crate::mapping::{CoveragePath, PoseMapper};
use crate::ordering::{GreedyTourSolver, TourSolver, VisitOrder, plan_visit_order};
use crate::pathfinding::{AStarPlanner, GridPathfinder};

/// Counters describing one planning run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlanningStats {
    /// Critical points found by the sweep
    pub critical_points: usize,
    /// Free pixels turned into dividing walls
    pub wall_pixels: usize,
    /// Cells extracted from the decomposition
    pub cells: usize,
    /// Sweep lines walked over all cells
    pub sweep_lines: usize,
    /// Waypoints in the output path
    pub waypoints: usize,
}

/// Result of a successful planning request.
#[derive(Clone, Debug)]
pub struct CoveragePlan {
    /// World-frame path
    pub path: CoveragePath,
    /// Cells in discovery order
    pub cells: Vec<Cell>,
    /// Order the cells are covered in
    pub visit_order: VisitOrder,
    /// Run counters
    pub stats: PlanningStats,
}

/// Boustrophedon coverage planner.
///
/// Generic over its collaborators: the point-to-point pathfinder used for
/// stitching, the tour solver ordering the cells, and the contour extractor
/// turning the decomposition into cells.
#[derive(Clone, Debug)]
pub struct BoustrophedonPlanner<P = AStarPlanner, S = GreedyTourSolver, E = MooreContourExtractor>
{
    decomposer: CellDecomposer,
    pathfinder: P,
    solver: S,
    extractor: E,
}

impl BoustrophedonPlanner {
    /// Planner with the default A*, greedy tour solver, and Moore tracer
    pub fn new() -> Self {
        Self::from_config(&CoverageConfig::default())
    }

    /// Planner with collaborators configured from `config`
    pub fn from_config(config: &CoverageConfig) -> Self {
        let astar = AStarPlanner::new(config.to_astar_config());
        let solver = GreedyTourSolver::with_pathfinder(config.to_tour_config(), astar.clone());
        Self::with_components(astar, solver, MooreContourExtractor::new())
    }
}

impl Default for BoustrophedonPlanner {
    fn default() -> Self {
        Self::new()
    }
}

impl<P, S, E> BoustrophedonPlanner<P, S, E>
where
    P: GridPathfinder,
    S: TourSolver,
    E: ContourExtractor,
{
    /// Planner with custom collaborators
    pub fn with_components(pathfinder: P, solver: S, extractor: E) -> Self {
        Self {
            decomposer: CellDecomposer::new(),
            pathfinder,
            solver,
            extractor,
        }
    }

    /// Plan a coverage path over `grid` starting at pixel `start`.
    pub fn plan(
        &self,
        grid: &OccupancyGrid,
        start: GridCoord,
        params: &CoverageParams,
    ) -> Result<CoveragePlan> {
        params.validate()?;

        let cell_map = self.decomposer.decompose(grid)?;
        let cells = extract_cells(&cell_map, &self.extractor);
        if cells.is_empty() {
            return Err(CoverageError::EmptyMap);
        }

        let visit_order = plan_visit_order(&cells, start, grid, &self.solver)?;

        let generator = CoverageGenerator::new(&self.pathfinder, params)?;
        let fov_path = generator.generate(grid, &cells, &visit_order, start)?;

        let path = PoseMapper::new(grid).to_path(&fov_path.waypoints, params, start)?;

        let stats = PlanningStats {
            critical_points: cell_map.critical_points().len(),
            wall_pixels: cell_map.walls().len(),
            cells: cells.len(),
            sweep_lines: fov_path.sweep_lines,
            waypoints: path.len(),
        };
        info!(
            "[Planner] {} cells, {} sweep lines, {} waypoints ({:?} frame)",
            stats.cells, stats.sweep_lines, stats.waypoints, path.frame
        );

        Ok(CoveragePlan {
            path,
            cells,
            visit_order,
            stats,
        })
    }
}
