//! ROS map_server maps (YAML metadata + PGM/PNG image).

use std::path::Path;

use image::GrayImage;
use log::debug;
use serde::Deserialize;

use crate::core::{Occupancy, Point2D};
use crate::error::{CoverageError, Result};
use crate::grid::OccupancyGrid;

/// Map metadata from the YAML file.
#[derive(Clone, Debug, Deserialize)]
pub struct MapMetadata {
    /// Image filename, relative to the YAML file
    pub image: String,

    /// Meters per pixel
    pub resolution: f32,

    /// World pose [x, y, yaw] of the bottom-left pixel
    pub origin: [f32; 3],

    /// Occupancy probability above which a pixel is an obstacle
    #[serde(default = "default_occupied_thresh")]
    pub occupied_thresh: f32,

    /// Occupancy probability below which a pixel is free
    #[serde(default = "default_free_thresh")]
    pub free_thresh: f32,

    /// Non-zero if white means occupied
    #[serde(default)]
    pub negate: i32,
}

fn default_occupied_thresh() -> f32 {
    0.65
}

fn default_free_thresh() -> f32 {
    0.196
}

impl MapMetadata {
    fn occupancy(&self, value: u8) -> f32 {
        let value = if self.negate != 0 { value } else { 255 - value };
        value as f32 / 255.0
    }

    /// Classify a grey value. Unknown pixels (between the thresholds) are
    /// obstacles: they cannot be covered.
    pub fn classify(&self, value: u8) -> Occupancy {
        if self.occupancy(value) < self.free_thresh {
            Occupancy::Free
        } else {
            Occupancy::Obstacle
        }
    }

    /// Neither free nor above `occupied_thresh`.
    pub fn is_unknown(&self, value: u8) -> bool {
        let occupancy = self.occupancy(value);
        occupancy >= self.free_thresh && occupancy <= self.occupied_thresh
    }

    fn validate(&self) -> Result<()> {
        if !self.resolution.is_finite() || self.resolution <= 0.0 {
            return Err(CoverageError::Map(format!(
                "Invalid map resolution {}",
                self.resolution
            )));
        }
        if !(0.0..=1.0).contains(&self.free_thresh)
            || !(0.0..=1.0).contains(&self.occupied_thresh)
            || self.free_thresh > self.occupied_thresh
        {
            return Err(CoverageError::Map(format!(
                "Invalid thresholds: free {} occupied {}",
                self.free_thresh, self.occupied_thresh
            )));
        }
        Ok(())
    }
}

/// Load a ROS map from its YAML file.
///
/// Image rows are flipped so that pixel (0, 0) is the bottom-left pixel of
/// the image, the pixel the map origin refers to.
pub fn load_ros_map<P: AsRef<Path>>(yaml_path: P) -> Result<OccupancyGrid> {
    let yaml_path = yaml_path.as_ref();

    let yaml_content = std::fs::read_to_string(yaml_path)
        .map_err(|e| CoverageError::Map(format!("Failed to read map YAML: {}", e)))?;
    let metadata: MapMetadata = serde_yaml::from_str(&yaml_content)
        .map_err(|e| CoverageError::Map(format!("Failed to parse map YAML: {}", e)))?;

    metadata.validate()?;

    let yaml_dir = yaml_path.parent().unwrap_or(Path::new("."));
    let image_path = yaml_dir.join(&metadata.image);
    let image = image::open(&image_path)
        .map_err(|e| {
            CoverageError::Map(format!(
                "Failed to load map image {}: {}",
                image_path.display(),
                e
            ))
        })?
        .into_luma8();

    let grid = grid_from_image(&image, &metadata)?;
    let unknown = image.pixels().filter(|p| metadata.is_unknown(p.0[0])).count();
    debug!(
        "[MapLoader] {} -> {}x{} grid, {} free pixels, {} unknown as obstacles, {:.3} m/px",
        image_path.display(),
        grid.width(),
        grid.height(),
        grid.free_count(),
        unknown,
        grid.resolution()
    );
    Ok(grid)
}

/// Convert a greyscale image into a grid using the metadata thresholds.
pub fn grid_from_image(image: &GrayImage, metadata: &MapMetadata) -> Result<OccupancyGrid> {
    let (width, height) = image.dimensions();
    let cells = (0..height)
        .rev()
        .flat_map(|row| (0..width).map(move |col| (col, row)))
        .map(|(col, row)| metadata.classify(image.get_pixel(col, row).0[0]))
        .collect();

    OccupancyGrid::from_cells(
        width as usize,
        height as usize,
        cells,
        metadata.resolution,
        Point2D::new(metadata.origin[0], metadata.origin[1]),
    )
}
