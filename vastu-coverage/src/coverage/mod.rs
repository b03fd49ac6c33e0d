//! Coverage Path Generator.
//!
//! Each cell is covered by horizontal sweep lines spaced one FOV radius
//! apart and walked back and forth:
//!
//! ```text
//!   ●──────────────▶      line 1 (entry on the side nearest the robot)
//!   ◀──────────────●      line 2
//!   ●──────────────▶      line 3
//! ```
//!
//! Consecutive lines and consecutive cells are joined with paths from a
//! [`GridPathfinder`](crate::pathfinding::GridPathfinder), so the FOV path
//! is continuous from the start position to the end of the last cell.

mod generator;
mod lines;
mod params;

pub use generator::{CoverageGenerator, EntrySide, FovPath, SweepState, assign_headings};
pub use lines::{HorizontalSweepLine, sweep_lines};
pub use params::CoverageParams;
