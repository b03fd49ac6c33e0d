//! # Vastu-Coverage: Boustrophedon Coverage Path Planning
//!
//! Plans a full-coverage path for a robot whose sensor (the "field of
//! view", FOV) must sweep every reachable free pixel of a 2D occupancy grid.
//!
//! ## Quick Start
//!
//! ```rust
//! use vastu_coverage::{BoustrophedonPlanner, CoverageParams, OccupancyGrid};
//! use vastu_coverage::core::{GridCoord, Point2D};
//!
//! let grid = OccupancyGrid::from_ascii(
//!     "
//!     ###########
//!     #........#
//!     #...##...#
//!     #........#
//!     #........#
//!     ###########
//!     ",
//!     0.05,
//!     Point2D::ZERO,
//! )
//! .unwrap();
//!
//! let plan = BoustrophedonPlanner::new()
//!     .plan(&grid, GridCoord::new(1, 1), &CoverageParams::new(1.0, 1))
//!     .unwrap();
//! println!(
//!     "{} cells, {} waypoints",
//!     plan.stats.cells, plan.stats.waypoints
//! );
//! ```
//!
//! ## Pipeline
//!
//! ```text
//!                   ┌──────────────────┐
//!                   │  OccupancyGrid   │
//!                   └────────┬─────────┘
//!                            │ CellDecomposer::decompose
//!                            ▼
//!                   ┌──────────────────┐
//!                   │     CellMap      │  dividing walls at critical points
//!                   └────────┬─────────┘
//!                            │ extract_cells (ContourExtractor)
//!                            ▼
//!                   ┌──────────────────┐
//!                   │    Vec<Cell>     │  polygon, bounds, center
//!                   └────────┬─────────┘
//!                            │ plan_visit_order (TourSolver)
//!                            ▼
//!                   ┌──────────────────┐
//!                   │    VisitOrder    │
//!                   └────────┬─────────┘
//!                            │ CoverageGenerator (GridPathfinder)
//!                            ▼
//!                   ┌──────────────────┐
//!                   │     FovPath      │  pixel waypoints with heading
//!                   └────────┬─────────┘
//!                            │ PoseMapper
//!                            ▼
//!                   ┌──────────────────┐
//!                   │   CoveragePath   │  world poses
//!                   └──────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Grid coordinates, points, poses, bounds
//! - [`grid`]: Binary occupancy grid
//! - [`config`]: YAML configuration
//! - [`decomposition`]: Sweep decomposition and cell extraction
//! - [`ordering`]: Cell visiting order
//! - [`pathfinding`]: A* point-to-point planning
//! - [`coverage`]: Boustrophedon sweep generation
//! - [`mapping`]: FOV to robot pose mapping
//! - [`io`]: ROS map loading and SVG output

pub mod config;
pub mod core;
pub mod coverage;
pub mod decomposition;
pub mod error;
pub mod grid;
pub mod io;
pub mod mapping;
pub mod ordering;
pub mod pathfinding;
pub mod planner;

pub use config::CoverageConfig;
pub use coverage::CoverageParams;
pub use decomposition::{Cell, CellDecomposer, CellMap};
pub use error::{CoverageError, Result};
pub use grid::OccupancyGrid;
pub use mapping::{CoveragePath, PathFrame};
pub use ordering::VisitOrder;
pub use planner::{BoustrophedonPlanner, CoveragePlan, PlanningStats};
