//! Morse-style cellular decomposition of free space.
//!
//! [`CellDecomposer`] paints dividing walls at the sweep's critical points,
//! a [`ContourExtractor`] traces the connected free regions of the result,
//! and [`extract_cells`] turns those contours into [`Cell`]s.

mod cells;
mod contour;
mod polygon;
mod sweep;

pub use cells::{Cell, extract_cells};
pub use contour::{Contour, ContourExtractor, MooreContourExtractor, RegionLabels};
pub use polygon::Polygon;
pub use sweep::{CellDecomposer, CellMap, CriticalPoint, SweepEvent, count_segments};
