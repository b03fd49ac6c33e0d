//! SVG rendering of a coverage plan.
//!
//! Draws the occupancy grid, the outline of every cell with its visiting
//! rank, and the coverage path. Image y runs upwards so the picture matches
//! the world frame.

use std::fmt::{self, Write};
use std::path::Path;

use crate::core::{GridCoord, Point2D};
use crate::decomposition::Cell;
use crate::error::Result;
use crate::grid::OccupancyGrid;
use crate::mapping::CoveragePath;

/// SVG color scheme
#[derive(Clone, Debug)]
pub struct SvgColorScheme {
    /// Obstacle color
    pub obstacle: &'static str,
    /// Free space color
    pub free: &'static str,
    /// Cell outline color
    pub cell_outline: &'static str,
    /// Coverage path color
    pub path: &'static str,
    /// Start marker color
    pub start: &'static str,
}

impl Default for SvgColorScheme {
    fn default() -> Self {
        Self {
            obstacle: "#333333",
            free: "#FFFFFF",
            cell_outline: "#2266CC",
            path: "#DD5511",
            start: "#22AA22",
        }
    }
}

/// Configuration for SVG rendering
#[derive(Clone, Debug)]
pub struct SvgConfig {
    /// SVG units per grid pixel
    pub scale: f32,
    /// Path line width
    pub path_width: f32,
    /// Start marker radius
    pub marker_radius: f32,
    /// Color scheme
    pub colors: SvgColorScheme,
    /// Padding around the map
    pub padding: f32,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            scale: 8.0,
            path_width: 1.5,
            marker_radius: 4.0,
            colors: SvgColorScheme::default(),
            padding: 10.0,
        }
    }
}

/// SVG builder for a grid and an optional plan on top of it.
pub struct SvgRenderer<'a> {
    config: SvgConfig,
    grid: &'a OccupancyGrid,
    cells: &'a [Cell],
    order: Vec<usize>,
    path: Option<&'a CoveragePath>,
    title: Option<String>,
}

impl<'a> SvgRenderer<'a> {
    /// Renderer for `grid` with nothing overlaid yet
    pub fn new(grid: &'a OccupancyGrid, config: SvgConfig) -> Self {
        Self {
            config,
            grid,
            cells: &[],
            order: Vec::new(),
            path: None,
            title: None,
        }
    }

    /// Set a title to display
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Outline `cells`, labelled with their rank in `order`
    pub fn with_cells(mut self, cells: &'a [Cell], order: &[usize]) -> Self {
        self.cells = cells;
        self.order = order.to_vec();
        self
    }

    /// Draw a world-frame coverage path
    pub fn with_path(mut self, path: &'a CoveragePath) -> Self {
        self.path = Some(path);
        self
    }

    /// Render to an SVG document
    pub fn render(&self) -> String {
        let mut svg = String::new();
        // Formatting into a String does not fail
        let _ = self.write_document(&mut svg);
        svg
    }

    /// Render and write to `path`
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, self.render())?;
        Ok(())
    }

    fn write_document(&self, svg: &mut String) -> fmt::Result {
        let scale = self.config.scale;
        let padding = self.config.padding;
        let title_height = if self.title.is_some() { 30.0 } else { 0.0 };
        let map_width = self.grid.width() as f32 * scale;
        let map_height = self.grid.height() as f32 * scale;
        let width = map_width + 2.0 * padding;
        let height = map_height + 2.0 * padding + title_height;

        writeln!(svg, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{:.0}" height="{:.0}" viewBox="0 0 {:.0} {:.0}">"#,
            width, height, width, height
        )?;
        writeln!(svg, r##"  <rect width="100%" height="100%" fill="#F8F8F8"/>"##)?;

        if let Some(title) = &self.title {
            writeln!(
                svg,
                r##"  <text x="{:.0}" y="22" font-family="sans-serif" font-size="16" font-weight="bold" text-anchor="middle" fill="#333">{}</text>"##,
                width / 2.0,
                title
            )?;
        }

        writeln!(
            svg,
            r#"  <g transform="translate({:.0}, {:.0})">"#,
            padding,
            padding + title_height
        )?;
        self.write_grid(svg)?;
        self.write_cells(svg)?;
        self.write_path(svg)?;
        writeln!(svg, "  </g>")?;
        writeln!(svg, "</svg>")
    }

    fn write_grid(&self, svg: &mut String) -> fmt::Result {
        let scale = self.config.scale;
        let colors = &self.config.colors;

        writeln!(svg, r#"    <g id="grid">"#)?;
        writeln!(
            svg,
            r#"      <rect width="{:.0}" height="{:.0}" fill="{}"/>"#,
            self.grid.width() as f32 * scale,
            self.grid.height() as f32 * scale,
            colors.obstacle
        )?;
        for coord in self.grid.free_coords() {
            let (x, y) = self.pixel_corner(coord);
            writeln!(
                svg,
                r#"      <rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}"/>"#,
                x, y, scale, scale, colors.free
            )?;
        }
        writeln!(svg, "    </g>")
    }

    fn write_cells(&self, svg: &mut String) -> fmt::Result {
        if self.cells.is_empty() {
            return Ok(());
        }

        writeln!(svg, r#"    <g id="cells">"#)?;
        for (index, cell) in self.cells.iter().enumerate() {
            let mut points = String::new();
            for vertex in cell.polygon.vertices() {
                let (x, y) = self.pixel_center(vertex.to_point());
                write!(points, "{:.1},{:.1} ", x, y)?;
            }
            writeln!(
                svg,
                r#"      <polygon points="{}" fill="none" stroke="{}" stroke-width="1"/>"#,
                points.trim_end(),
                self.config.colors.cell_outline
            )?;

            let label = match self.order.iter().position(|&i| i == index) {
                Some(rank) => rank.to_string(),
                None => format!("c{}", index),
            };
            let (x, y) = self.pixel_center(cell.center.to_point());
            writeln!(
                svg,
                r#"      <text x="{:.1}" y="{:.1}" font-family="sans-serif" font-size="10" text-anchor="middle" fill="{}">{}</text>"#,
                x, y, self.config.colors.cell_outline, label
            )?;
        }
        writeln!(svg, "    </g>")
    }

    fn write_path(&self, svg: &mut String) -> fmt::Result {
        let Some(path) = self.path else {
            return Ok(());
        };
        let Some(first) = path.poses.first() else {
            return Ok(());
        };

        let mut d = String::new();
        for (i, pose) in path.poses.iter().enumerate() {
            let (x, y) = self.pixel_center(self.world_to_pixel(pose.position()));
            let command = if i == 0 { "M" } else { " L" };
            write!(d, "{} {:.1} {:.1}", command, x, y)?;
        }
        writeln!(svg, r#"    <g id="path">"#)?;
        writeln!(
            svg,
            r#"      <path d="{}" fill="none" stroke="{}" stroke-width="{}" stroke-linecap="round" stroke-linejoin="round" opacity="0.8"/>"#,
            d, self.config.colors.path, self.config.path_width
        )?;

        let (x, y) = self.pixel_center(self.world_to_pixel(first.position()));
        writeln!(
            svg,
            r#"      <circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="{}" stroke="white" stroke-width="1"/>"#,
            x, y, self.config.marker_radius, self.config.colors.start
        )?;
        writeln!(svg, "    </g>")
    }

    /// Top-left SVG corner of a pixel (y flipped)
    fn pixel_corner(&self, coord: GridCoord) -> (f32, f32) {
        let scale = self.config.scale;
        let rows = self.grid.height() as f32;
        (coord.x as f32 * scale, (rows - 1.0 - coord.y as f32) * scale)
    }

    /// SVG position of a (sub-)pixel center (y flipped)
    fn pixel_center(&self, pixel: Point2D) -> (f32, f32) {
        let scale = self.config.scale;
        let rows = self.grid.height() as f32;
        ((pixel.x + 0.5) * scale, (rows - pixel.y - 0.5) * scale)
    }

    fn world_to_pixel(&self, world: Point2D) -> Point2D {
        let origin = self.grid.origin();
        let resolution = self.grid.resolution();
        Point2D::new(
            (world.x - origin.x) / resolution,
            (world.y - origin.y) / resolution,
        )
    }
}
