//! Integration tests for the coverage planning pipeline.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p vastu-coverage --test integration -- --nocapture
//!
//! # With planner logs
//! RUST_LOG=debug cargo test -p vastu-coverage --test integration
//! ```

mod invariants;
mod map_files;
mod robot_mapping;
mod scenarios;

use vastu_coverage::OccupancyGrid;
use vastu_coverage::core::Point2D;
use vastu_coverage::decomposition::{
    Cell, CellDecomposer, CellMap, MooreContourExtractor, extract_cells,
};

/// Office-like room with a pillar, a desk block, and a partial partition
pub const OFFICE: &str = "
    ########################
    #..........#...........#
    #..........#...........#
    #..........#...........#
    #...####...#....##.....#
    #...####...#....##.....#
    #...####...............#
    #......................#
    #..........######......#
    #..........######......#
    #......................#
    #......................#
    ########################
";

/// Room split by a wall hanging from the ceiling
pub const PARTITION: &str = "
    ############
    #....#.....#
    #....#.....#
    #....#.....#
    #....#.....#
    #..........#
    #..........#
    ############
";

/// Install a test logger once (honours RUST_LOG)
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Parse an ASCII map at 5 cm per pixel
pub fn grid(ascii: &str) -> OccupancyGrid {
    OccupancyGrid::from_ascii(ascii, 0.05, Point2D::ZERO).expect("valid test map")
}

/// Decompose and extract cells with the default collaborators
pub fn decompose(grid: &OccupancyGrid) -> (CellMap, Vec<Cell>) {
    let cell_map = CellDecomposer::new().decompose(grid).expect("map has free space");
    let cells = extract_cells(&cell_map, &MooreContourExtractor::new());
    (cell_map, cells)
}
