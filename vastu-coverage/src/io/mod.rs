//! Map loading and plan visualisation.

mod ros_map;
mod svg;

pub use ros_map::{MapMetadata, grid_from_image, load_ros_map};
pub use svg::{SvgColorScheme, SvgConfig, SvgRenderer};
