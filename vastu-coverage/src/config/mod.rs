//! Unified configuration loading for the coverage planner.
//!
//! Loads all configuration from a single YAML file with sensible defaults.
//!
//! ## Example YAML
//!
//! ```yaml
//! coverage:
//!   fov_radius: 0.17          # meters
//!   path_eps: 0.1             # meters between waypoints
//!   plan_for_footprint: false
//!   robot_to_fov: [0.2, 0.0]  # meters
//!
//! pathfinding:
//!   astar:
//!     allow_diagonal: true
//!     max_iterations: 200000
//!
//! ordering:
//!   two_opt_passes: 50
//! ```

mod coverage;
mod defaults;
mod error;
mod ordering;
mod pathfinding;
mod vastu;

// Re-export main types
pub use error::ConfigLoadError;
pub use vastu::CoverageConfig;

// Re-export section types
pub use coverage::CoverageSection;
pub use ordering::OrderingSection;
pub use pathfinding::{AStarSettings, PathfindingSection};
