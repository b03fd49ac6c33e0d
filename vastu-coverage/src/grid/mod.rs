//! Occupancy grid input.
//!
//! - [`OccupancyGrid`]: Binary free/obstacle grid with resolution and origin

mod storage;

pub use storage::OccupancyGrid;
