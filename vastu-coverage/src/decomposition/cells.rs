//! Cell Builder: polygonal cells from a decomposed map.

use log::debug;

use super::contour::{Contour, ContourExtractor};
use super::polygon::Polygon;
use super::sweep::CellMap;
use crate::core::{GridBounds, GridCoord};
use crate::grid::OccupancyGrid;

/// Obstacle-free region of the decomposition.
#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    /// Outer boundary
    pub polygon: Polygon,
    /// Bounding box of the boundary
    pub bounds: GridBounds,
    /// Representative interior point, always contained in `polygon`
    pub center: GridCoord,
    /// Free pixels in the region
    pub pixel_count: usize,
}

impl Cell {
    /// Build a cell from a contour traced on `grid`. `None` for an empty
    /// contour.
    pub fn from_contour(contour: Contour, grid: &OccupancyGrid) -> Option<Self> {
        let polygon = Polygon::new(contour.points);
        let bounds = polygon.bounds()?;
        let center = representative_point(&polygon, &bounds, grid)?;
        Some(Self {
            polygon,
            bounds,
            center,
            pixel_count: contour.pixel_count,
        })
    }

    /// Point-in-cell test (boundary inclusive)
    #[inline]
    pub fn contains(&self, coord: GridCoord) -> bool {
        self.bounds.contains(coord) && self.polygon.contains(coord)
    }
}

/// Extract the cells of a decomposed map in contour discovery order.
pub fn extract_cells<E>(cell_map: &CellMap, extractor: &E) -> Vec<Cell>
where
    E: ContourExtractor + ?Sized,
{
    let grid = cell_map.grid();
    let cells: Vec<Cell> = extractor
        .extract(grid)
        .into_iter()
        .filter_map(|contour| Cell::from_contour(contour, grid))
        .collect();

    debug!("[CellBuilder] extracted {} cells", cells.len());
    cells
}

/// Interior point of the polygon that is also free in `grid`.
///
/// Tries the centroid, then the bounding-box center, then the middle of the
/// first inside run on the middle row of the box, then the first vertex.
fn representative_point(
    polygon: &Polygon,
    bounds: &GridBounds,
    grid: &OccupancyGrid,
) -> Option<GridCoord> {
    let first = *polygon.vertices().first()?;
    let inside = |coord: GridCoord| polygon.contains(coord) && grid.is_free(coord);

    if let Some(centroid) = polygon.centroid().map(|c| c.round_to_grid())
        && inside(centroid)
    {
        return Some(centroid);
    }

    let box_center = bounds.center();
    if inside(box_center) {
        return Some(box_center);
    }

    let y = box_center.y;
    let run: Vec<i32> = (bounds.min_x..=bounds.max_x)
        .skip_while(|&x| !inside(GridCoord::new(x, y)))
        .take_while(|&x| inside(GridCoord::new(x, y)))
        .collect();
    if let Some(&x) = run.get(run.len() / 2) {
        return Some(GridCoord::new(x, y));
    }

    Some(first)
}
