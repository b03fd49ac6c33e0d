//! Error types for coverage planning.
//!
//! Every variant aborts the whole planning request: callers never receive a
//! partial path.

use thiserror::Error;

use crate::config::ConfigLoadError;
use crate::core::GridCoord;

/// Result type alias
pub type Result<T> = std::result::Result<T, CoverageError>;

/// Coverage planning error
#[derive(Error, Debug)]
pub enum CoverageError {
    /// The map has no free pixel at all
    #[error("Map contains no free space")]
    EmptyMap,

    /// A cell produced a sweep row without any free pixel to anchor an edge on
    #[error("Cell {cell} is degenerate: no free pixel on sweep row {row}")]
    DegenerateCell {
        /// Index of the cell in discovery order
        cell: usize,
        /// Sweep row that could not be anchored
        row: i32,
    },

    /// The tour solver could not produce a valid visiting order
    #[error("Cell ordering failed: {0}")]
    OrderingFailure(String),

    /// The pathfinder could not connect two waypoints
    #[error("No path from ({},{}) to ({},{})", from.x, from.y, to.x, to.y)]
    StitchingFailure {
        /// Start of the failed connection
        from: GridCoord,
        /// Goal of the failed connection
        to: GridCoord,
    },

    /// The start position is not inside any cell of the free space
    #[error("Start position ({},{}) is not inside the free space", start.x, start.y)]
    UnreachableStart {
        /// Requested start position
        start: GridCoord,
    },

    /// No free robot position exists around a field-of-view waypoint
    #[error("No free robot pose around field-of-view point ({x:.2},{y:.2})")]
    NoFreeRobotPose {
        /// FOV waypoint x (grid units)
        x: f32,
        /// FOV waypoint y (grid units)
        y: f32,
    },

    /// A planning parameter is out of range
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Map could not be loaded or parsed
    #[error("Map error: {0}")]
    Map(String),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigLoadError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
