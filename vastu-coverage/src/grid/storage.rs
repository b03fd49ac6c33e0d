//! Occupancy grid storage.
//!
//! A dense row-major array of [`Occupancy`] values together with the map
//! metadata needed to convert pixel positions into world coordinates.

use crate::core::{GridCoord, Occupancy, Point2D};
use crate::error::{CoverageError, Result};

/// Binary occupancy grid.
///
/// The grid uses image conventions:
/// - (0, 0) is the first pixel of the first row
/// - Positive X runs along a row, positive Y runs down the rows
/// - Pixel (x, y) maps to world `(x * resolution + origin.x, y * resolution + origin.y)`
#[derive(Clone, Debug, PartialEq)]
pub struct OccupancyGrid {
    /// Pixel states, row-major
    cells: Vec<Occupancy>,
    /// Grid width in pixels
    width: usize,
    /// Grid height in pixels
    height: usize,
    /// Resolution in meters per pixel
    resolution: f32,
    /// World coordinates of pixel (0, 0)
    origin: Point2D,
}

impl OccupancyGrid {
    /// Create a grid with every pixel set to `fill`
    pub fn filled(
        width: usize,
        height: usize,
        fill: Occupancy,
        resolution: f32,
        origin: Point2D,
    ) -> Self {
        Self {
            cells: vec![fill; width * height],
            width,
            height,
            resolution,
            origin,
        }
    }

    /// Create a grid with every pixel blocked
    pub fn new(width: usize, height: usize, resolution: f32, origin: Point2D) -> Self {
        Self::filled(width, height, Occupancy::Obstacle, resolution, origin)
    }

    /// Create a grid from row-major pixel data
    pub fn from_cells(
        width: usize,
        height: usize,
        cells: Vec<Occupancy>,
        resolution: f32,
        origin: Point2D,
    ) -> Result<Self> {
        if cells.len() != width * height {
            return Err(CoverageError::Map(format!(
                "expected {} pixels for {}x{} grid, got {}",
                width * height,
                width,
                height,
                cells.len()
            )));
        }
        Ok(Self {
            cells,
            width,
            height,
            resolution,
            origin,
        })
    }

    /// Parse an ASCII map: `.` is free, `#` is an obstacle.
    ///
    /// Leading/trailing blank lines and surrounding whitespace on each row
    /// are ignored. All rows must have the same length.
    pub fn from_ascii(text: &str, resolution: f32, origin: Point2D) -> Result<Self> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        let width = rows.first().map(|r| r.chars().count()).unwrap_or(0);
        let mut cells = Vec::with_capacity(width * rows.len());

        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                return Err(CoverageError::Map(format!(
                    "row {} has {} columns, expected {}",
                    y,
                    row.chars().count(),
                    width
                )));
            }
            for (x, c) in row.chars().enumerate() {
                let occupancy = Occupancy::from_char(c).ok_or_else(|| {
                    CoverageError::Map(format!("unexpected character '{}' at ({}, {})", c, x, y))
                })?;
                cells.push(occupancy);
            }
        }

        Self::from_cells(width, rows.len(), cells, resolution, origin)
    }

    /// Render as ASCII (inverse of [`OccupancyGrid::from_ascii`])
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for row in self.cells.chunks(self.width.max(1)) {
            out.extend(row.iter().map(|c| c.as_char()));
            out.push('\n');
        }
        out
    }

    /// Grid width in pixels
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in pixels
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Resolution in meters per pixel
    #[inline]
    pub fn resolution(&self) -> f32 {
        self.resolution
    }

    /// World coordinates of pixel (0, 0)
    #[inline]
    pub fn origin(&self) -> Point2D {
        self.origin
    }

    /// Raw pixel slice (row-major)
    #[inline]
    pub fn cells(&self) -> &[Occupancy] {
        &self.cells
    }

    /// One row of pixels, `None` if out of range
    #[inline]
    pub fn row(&self, y: i32) -> Option<&[Occupancy]> {
        if y < 0 || y as usize >= self.height {
            return None;
        }
        let start = y as usize * self.width;
        Some(&self.cells[start..start + self.width])
    }

    /// Check if grid coordinates are within bounds
    #[inline]
    pub fn is_valid_coord(&self, coord: GridCoord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as usize) < self.width
            && (coord.y as usize) < self.height
    }

    /// Convert grid coordinates to flat array index
    #[inline]
    pub fn coord_to_index(&self, coord: GridCoord) -> Option<usize> {
        if self.is_valid_coord(coord) {
            Some(coord.y as usize * self.width + coord.x as usize)
        } else {
            None
        }
    }

    /// Convert flat array index to grid coordinates
    #[inline]
    pub fn index_to_coord(&self, index: usize) -> GridCoord {
        GridCoord::new((index % self.width) as i32, (index / self.width) as i32)
    }

    /// Pixel state, `None` if out of bounds
    #[inline]
    pub fn get(&self, coord: GridCoord) -> Option<Occupancy> {
        self.coord_to_index(coord).map(|i| self.cells[i])
    }

    /// Is the pixel free? Out-of-bounds pixels count as obstacles.
    #[inline]
    pub fn is_free(&self, coord: GridCoord) -> bool {
        self.get(coord).is_some_and(Occupancy::is_free)
    }

    /// Set pixel state. Returns true if the pixel changed.
    #[inline]
    pub fn set(&mut self, coord: GridCoord, occupancy: Occupancy) -> bool {
        match self.coord_to_index(coord) {
            Some(i) if self.cells[i] != occupancy => {
                self.cells[i] = occupancy;
                true
            }
            _ => false,
        }
    }

    /// Number of free pixels
    pub fn free_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_free()).count()
    }

    /// Iterate over all free pixel coordinates in row-major order
    pub fn free_coords(&self) -> impl Iterator<Item = GridCoord> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_free())
            .map(|(i, _)| self.index_to_coord(i))
    }

    /// Convert a (sub-)pixel position to world coordinates
    #[inline]
    pub fn pixel_to_world(&self, pixel: Point2D) -> Point2D {
        Point2D::new(
            pixel.x * self.resolution + self.origin.x,
            pixel.y * self.resolution + self.origin.y,
        )
    }

    /// Convert world coordinates to the nearest pixel
    #[inline]
    pub fn world_to_grid(&self, point: Point2D) -> GridCoord {
        Point2D::new(
            (point.x - self.origin.x) / self.resolution,
            (point.y - self.origin.y) / self.resolution,
        )
        .round_to_grid()
    }
}
