//! Core types for the coverage planner.
//!
//! - [`Occupancy`]: Binary pixel state (free / obstacle)
//! - [`GridCoord`] and [`Point2D`]: Coordinate types
//! - [`Pose2D`]: Waypoint pose (position + heading)
//! - [`GridBounds`]: Inclusive integer bounding box

mod bounds;
mod occupancy;
mod point;
mod pose;

pub use bounds::GridBounds;
pub use occupancy::Occupancy;
pub use point::{GridCoord, Point2D};
pub use pose::{Pose2D, normalize_angle};
