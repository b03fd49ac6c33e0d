//! Structural properties that hold for any input map.

use vastu_coverage::core::{GridCoord, Occupancy, Point2D};
use vastu_coverage::coverage::{CoverageGenerator, sweep_lines};
use vastu_coverage::decomposition::RegionLabels;
use vastu_coverage::ordering::{
    GreedyTourConfig, GreedyTourSolver, find_start_cell, plan_visit_order,
};
use vastu_coverage::pathfinding::AStarPlanner;
use vastu_coverage::{CoverageError, CoverageParams, OccupancyGrid, VisitOrder};

use super::{OFFICE, PARTITION, decompose, grid};

/// Bordered room with an irregular scatter of single-pixel obstacles
fn scatter_map() -> OccupancyGrid {
    let (width, height) = (30, 18);
    let mut grid = OccupancyGrid::filled(width, height, Occupancy::Free, 0.05, Point2D::ZERO);
    for y in 0..height as i32 {
        for x in 0..width as i32 {
            let border = x == 0 || y == 0 || x == width as i32 - 1 || y == height as i32 - 1;
            let scatter = (x * 7 + y * 13) % 11 == 0;
            if border || scatter {
                grid.set(GridCoord::new(x, y), Occupancy::Obstacle);
            }
        }
    }
    grid
}

fn test_maps() -> Vec<OccupancyGrid> {
    vec![grid(OFFICE), grid(PARTITION), scatter_map()]
}

#[test]
fn test_cells_partition_free_space() {
    for input in test_maps() {
        let (cell_map, cells) = decompose(&input);
        let labels = RegionLabels::from_grid(cell_map.grid());

        // Every free input pixel is either a wall or in exactly one region
        let region_pixels: usize = labels.sizes().iter().sum();
        assert_eq!(region_pixels + cell_map.walls().len(), input.free_count());

        assert_eq!(cells.len(), labels.count());
        for (cell, size) in cells.iter().zip(labels.sizes()) {
            assert_eq!(cell.pixel_count, *size);
        }

        for coord in cell_map.grid().free_coords() {
            let label = labels.label_at(coord);
            assert!(label > 0);
            assert!(
                cells[label as usize - 1].contains(coord),
                "{:?} outside its cell polygon",
                coord
            );

            // An enclosing region is labelled before the region it surrounds,
            // so the last polygon containing a pixel is always its own cell
            let last = cells.iter().rposition(|cell| cell.contains(coord));
            assert_eq!(last, Some(label as usize - 1), "{:?}", coord);
        }
    }
}

#[test]
fn test_cell_polygons_do_not_overlap() {
    // No room nested inside an obstacle ring here: each free pixel lies in
    // exactly one polygon
    for input in [grid(OFFICE), grid(PARTITION)] {
        let (cell_map, cells) = decompose(&input);
        for coord in cell_map.grid().free_coords() {
            let containing: Vec<usize> = cells
                .iter()
                .enumerate()
                .filter(|(_, cell)| cell.contains(coord))
                .map(|(i, _)| i)
                .collect();
            assert_eq!(containing.len(), 1, "{:?} in cells {:?}", coord, containing);
        }
    }
}

#[test]
fn test_walls_only_on_free_input_pixels() {
    for input in test_maps() {
        let (cell_map, _) = decompose(&input);
        for wall in cell_map.walls() {
            assert!(input.is_free(*wall));
            assert!(!cell_map.grid().is_free(*wall));
        }
    }
}

#[test]
fn test_cell_centers_are_free() {
    for input in test_maps() {
        let (cell_map, cells) = decompose(&input);
        for cell in &cells {
            assert!(cell.contains(cell.center));
            assert!(cell_map.grid().is_free(cell.center));
        }
    }
}

#[test]
fn test_visit_order_starts_in_start_cell() {
    let input = grid(OFFICE);
    let (cell_map, cells) = decompose(&input);
    let solver = GreedyTourSolver::new(GreedyTourConfig::default());

    let starts: Vec<GridCoord> = input
        .free_coords()
        .filter(|c| (c.x + c.y) % 5 == 0)
        .collect();
    assert!(!starts.is_empty());

    for start in starts {
        let Ok(anchor) = find_start_cell(&cells, start) else {
            // Wall pixel boxed in by other walls
            assert!(!cell_map.grid().is_free(start));
            assert!(matches!(
                plan_visit_order(&cells, start, &input, &solver),
                Err(CoverageError::UnreachableStart { .. })
            ));
            continue;
        };

        let order = plan_visit_order(&cells, start, &input, &solver).unwrap();
        assert_eq!(order.len(), cells.len());
        assert_eq!(order.order[0], order.start_cell);

        let mut sorted = order.order.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..cells.len()).collect::<Vec<_>>());

        let start_cell = &cells[order.start_cell];
        if cell_map.grid().is_free(start) {
            assert!(start_cell.contains(start));
            // Last containing polygon wins
            assert!(cells[order.start_cell + 1..].iter().all(|c| !c.contains(start)));
        } else {
            // On a dividing wall: anchored directly or through a 4-neighbour
            assert!(
                start_cell.contains(start)
                    || start.neighbors_4().iter().any(|n| start_cell.contains(*n))
            );
        }
        assert_eq!(anchor, order.start_cell);
    }
}

#[test]
fn test_sweep_lines_spaced_by_radius() {
    for input in test_maps() {
        let (_, cells) = decompose(&input);
        for radius in 1..=3 {
            for (i, cell) in cells.iter().enumerate() {
                let lines = sweep_lines(&input, i, &cell.bounds, radius).unwrap();
                assert!(!lines.is_empty());

                let first = lines[0].y;
                if cell.bounds.height() > 2 * radius {
                    assert_eq!(first, cell.bounds.min_y + radius);
                } else {
                    assert_eq!(first, cell.bounds.min_y + cell.bounds.height() / 2);
                }
                for pair in lines.windows(2) {
                    assert_eq!(pair[1].y - pair[0].y, radius);
                }
                assert!(lines.iter().all(|l| l.y <= cell.bounds.max_y));
            }
        }
    }
}

#[test]
fn test_samples_spaced_by_path_eps() {
    let input = grid(
        "
        ####################
        #..................#
        #..................#
        #..................#
        #..................#
        #..................#
        #..................#
        ####################
        ",
    );
    let (_, cells) = decompose(&input);
    assert_eq!(cells.len(), 1);

    let planner = AStarPlanner::with_defaults();
    let params = CoverageParams::new(1.0, 3);
    let generator = CoverageGenerator::new(&planner, &params).unwrap();
    let order = VisitOrder {
        start_cell: 0,
        order: vec![0],
    };
    let path = generator
        .generate(&input, &cells, &order, GridCoord::new(2, 2))
        .unwrap();

    // Group consecutive waypoints by row: one group per sweep line
    let mut rows: Vec<Vec<f32>> = Vec::new();
    let mut current_y = None;
    for pose in &path.waypoints {
        if current_y != Some(pose.y) {
            rows.push(Vec::new());
            current_y = Some(pose.y);
        }
        if let Some(row) = rows.last_mut() {
            row.push(pose.x);
        }
    }
    assert_eq!(rows.len(), path.sweep_lines);
    assert_eq!(rows.len(), 5);

    for xs in &rows {
        assert_eq!(xs.len(), 6);
        let steps: Vec<f32> = xs.windows(2).map(|w| (w[1] - w[0]).abs()).collect();
        let (last, interior) = steps.split_last().unwrap();
        assert!(interior.iter().all(|&s| s == 3.0));
        assert!(*last > 0.0 && *last <= 3.0);
    }

    // Directions alternate
    assert_eq!(rows[0][0], 2.0);
    assert_eq!(rows[1][0], 17.0);
    assert_eq!(rows[2][0], 2.0);
}
