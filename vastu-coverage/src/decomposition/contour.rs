//! Outer-contour extraction of connected free regions.
//!
//! Regions are labeled with 4-connectivity, then the outer boundary of each
//! region is traced with the Moore neighbourhood. Holes inside a region are
//! not reported; the traced boundary encloses them.

use std::collections::VecDeque;

use crate::core::GridCoord;
use crate::grid::OccupancyGrid;

/// Moore neighbourhood, clockwise (y grows downwards) starting at west.
const MOORE: [GridCoord; 8] = [
    GridCoord { x: -1, y: 0 },
    GridCoord { x: -1, y: -1 },
    GridCoord { x: 0, y: -1 },
    GridCoord { x: 1, y: -1 },
    GridCoord { x: 1, y: 0 },
    GridCoord { x: 1, y: 1 },
    GridCoord { x: 0, y: 1 },
    GridCoord { x: -1, y: 1 },
];

/// Closed outer boundary of one connected free region.
#[derive(Clone, Debug, PartialEq)]
pub struct Contour {
    /// Boundary vertices in tracing order (closing edge implied)
    pub points: Vec<GridCoord>,
    /// Number of free pixels in the region
    pub pixel_count: usize,
}

/// Extracts one outer contour per connected free region.
pub trait ContourExtractor {
    /// Contours of every free region of `grid`, in raster discovery order.
    fn extract(&self, grid: &OccupancyGrid) -> Vec<Contour>;
}

/// Connected-component labels of the free pixels of a grid.
#[derive(Clone, Debug)]
pub struct RegionLabels {
    width: usize,
    height: usize,
    labels: Vec<u32>,
    seeds: Vec<GridCoord>,
    sizes: Vec<usize>,
}

impl RegionLabels {
    /// Label free pixels with 4-connectivity.
    ///
    /// Labels start at 1 and follow raster order of each region's first
    /// pixel. Obstacles keep label 0.
    pub fn from_grid(grid: &OccupancyGrid) -> Self {
        let width = grid.width();
        let height = grid.height();
        let mut labels = vec![0u32; width * height];
        let mut seeds = Vec::new();
        let mut sizes = Vec::new();
        let mut queue = VecDeque::new();

        for seed in grid.free_coords() {
            let seed_index = seed.y as usize * width + seed.x as usize;
            if labels[seed_index] != 0 {
                continue;
            }

            let label = seeds.len() as u32 + 1;
            labels[seed_index] = label;
            queue.push_back(seed);
            let mut size = 0;

            while let Some(coord) = queue.pop_front() {
                size += 1;
                for neighbor in coord.neighbors_4() {
                    if !grid.is_free(neighbor) {
                        continue;
                    }
                    let i = neighbor.y as usize * width + neighbor.x as usize;
                    if labels[i] == 0 {
                        labels[i] = label;
                        queue.push_back(neighbor);
                    }
                }
            }

            seeds.push(seed);
            sizes.push(size);
        }

        Self {
            width,
            height,
            labels,
            seeds,
            sizes,
        }
    }

    /// Number of regions
    #[inline]
    pub fn count(&self) -> usize {
        self.seeds.len()
    }

    /// Region label of a pixel (0 for obstacles and out-of-bounds)
    #[inline]
    pub fn label_at(&self, coord: GridCoord) -> u32 {
        if coord.x < 0
            || coord.y < 0
            || coord.x as usize >= self.width
            || coord.y as usize >= self.height
        {
            return 0;
        }
        self.labels[coord.y as usize * self.width + coord.x as usize]
    }

    /// First pixel (raster order) of each region
    #[inline]
    pub fn seeds(&self) -> &[GridCoord] {
        &self.seeds
    }

    /// Pixel count of each region
    #[inline]
    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }
}

/// Moore-neighbour boundary tracer.
#[derive(Clone, Debug)]
pub struct MooreContourExtractor {
    /// Drop vertices in the middle of straight runs
    pub compress: bool,
}

impl Default for MooreContourExtractor {
    fn default() -> Self {
        Self { compress: true }
    }
}

impl MooreContourExtractor {
    /// Create an extractor that compresses straight runs
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor that keeps every boundary pixel
    pub fn uncompressed() -> Self {
        Self { compress: false }
    }
}

impl ContourExtractor for MooreContourExtractor {
    fn extract(&self, grid: &OccupancyGrid) -> Vec<Contour> {
        let labels = RegionLabels::from_grid(grid);

        labels
            .seeds()
            .iter()
            .zip(labels.sizes())
            .enumerate()
            .map(|(i, (&seed, &size))| {
                let boundary = trace_boundary(&labels, i as u32 + 1, seed, size);
                let points = if self.compress {
                    compress_runs(boundary)
                } else {
                    boundary
                };
                Contour {
                    points,
                    pixel_count: size,
                }
            })
            .collect()
    }
}

/// Trace the outer boundary of region `label` starting from its first
/// raster pixel.
///
/// Stops when the tracer is back at the start and about to repeat its first
/// move.
fn trace_boundary(
    labels: &RegionLabels,
    label: u32,
    start: GridCoord,
    size: usize,
) -> Vec<GridCoord> {
    let inside = |c: GridCoord| labels.label_at(c) == label;

    let mut contour = vec![start];
    let mut current = start;
    // The west neighbour of the first raster pixel is never in the region
    let mut backtrack = start + MOORE[0];
    let max_steps = 4 * size + 8;

    for _ in 0..max_steps {
        let Some(back_dir) = MOORE.iter().position(|&d| current + d == backtrack) else {
            break;
        };

        let next = (1..=8).find_map(|k| {
            let candidate = current + MOORE[(back_dir + k) % 8];
            inside(candidate).then(|| (candidate, current + MOORE[(back_dir + k - 1) % 8]))
        });
        let Some((next, next_backtrack)) = next else {
            // Isolated pixel
            break;
        };

        if current == start && contour.len() > 1 && contour.get(1) == Some(&next) {
            contour.pop();
            break;
        }

        contour.push(next);
        current = next;
        backtrack = next_backtrack;
    }

    contour
}

/// Keep only vertices where the step direction changes.
fn compress_runs(points: Vec<GridCoord>) -> Vec<GridCoord> {
    let n = points.len();
    if n < 3 {
        return points;
    }

    let compressed: Vec<GridCoord> = (0..n)
        .filter(|&i| {
            let prev = points[(i + n - 1) % n];
            let next = points[(i + 1) % n];
            points[i] - prev != next - points[i]
        })
        .map(|i| points[i])
        .collect();

    if compressed.is_empty() {
        vec![points[0]]
    } else {
        compressed
    }
}
