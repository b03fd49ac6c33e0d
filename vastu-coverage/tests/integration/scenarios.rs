//! End-to-end planning scenarios with known answers.

use vastu_coverage::core::{GridCoord, Occupancy, Point2D};
use vastu_coverage::coverage::sweep_lines;
use vastu_coverage::decomposition::SweepEvent;
use vastu_coverage::{BoustrophedonPlanner, CoverageError, CoverageParams, OccupancyGrid, PathFrame};

use super::{OFFICE, PARTITION, decompose, grid, init_logging};

#[test]
fn test_open_ten_by_ten_room() {
    init_logging();
    let grid = OccupancyGrid::filled(10, 10, Occupancy::Free, 1.0, Point2D::ZERO);
    let (_, cells) = decompose(&grid);
    assert_eq!(cells.len(), 1);

    let lines = sweep_lines(&grid, 0, &cells[0].bounds, 1).unwrap();
    let ys: Vec<i32> = lines.iter().map(|l| l.y).collect();
    assert_eq!(ys, (1..=9).collect::<Vec<_>>());
    assert!(lines.iter().all(|l| l.left_edge.x == 1 && l.right_edge.x == 8));

    let plan = BoustrophedonPlanner::new()
        .plan(&grid, GridCoord::new(0, 0), &CoverageParams::new(1.0, 1))
        .unwrap();

    // 9 lines x (near edge + 6 interior samples + far edge)
    assert_eq!(plan.stats.sweep_lines, 9);
    assert_eq!(plan.path.len(), 72);
    assert_eq!(plan.path.frame, PathFrame::FieldOfView);

    for (line, poses) in plan.path.poses.chunks(8).enumerate() {
        let y = line as f32 + 1.0;
        assert!(poses.iter().all(|p| p.y == y));
        let xs: Vec<f32> = poses.iter().map(|p| p.x).collect();
        if line % 2 == 0 {
            assert_eq!(xs, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
        } else {
            assert_eq!(xs, vec![8.0, 7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0]);
        }
    }
}

#[test]
fn test_rectangular_room_is_one_cell() {
    let grid = grid(
        "
        ############
        #..........#
        #..........#
        #..........#
        #..........#
        ############
        ",
    );
    let (cell_map, cells) = decompose(&grid);
    assert_eq!(cells.len(), 1);
    assert!(cell_map.critical_points().is_empty());

    // Same input, same decomposition
    let (_, again) = decompose(&grid);
    assert_eq!(cells, again);
}

#[test]
fn test_partition_produces_single_dividing_wall() {
    let grid = grid(PARTITION);
    let (cell_map, cells) = decompose(&grid);

    assert_eq!(cell_map.critical_points().len(), 1);
    let critical = cell_map.critical_points()[0];
    assert_eq!(critical.event, SweepEvent::Out);
    assert_eq!(critical.coord, GridCoord::new(5, 4));
    assert!(cell_map.walls().iter().all(|c| c.y == 4));

    // Two columns above the merge row, one cell below it
    assert_eq!(cells.len(), 3);
    let above = cells.iter().filter(|c| c.bounds.max_y < 4).count();
    let below = cells.iter().filter(|c| c.bounds.min_y > 4).count();
    assert_eq!(above, 2);
    assert_eq!(below, 1);
}

#[test]
fn test_island_produces_two_dividing_walls() {
    let grid = grid(
        "
        ###########
        #.........#
        #.........#
        #...###...#
        #...###...#
        #.........#
        #.........#
        ###########
        ",
    );
    let (cell_map, cells) = decompose(&grid);

    let ins = cell_map
        .critical_points()
        .iter()
        .filter(|c| c.event == SweepEvent::In)
        .count();
    let outs = cell_map.critical_points().len() - ins;
    assert!(ins >= 1 && outs >= 1);
    assert_eq!(cells.len(), 2);
}

#[test]
fn test_office_plan() {
    init_logging();
    let grid = grid(OFFICE);
    let plan = BoustrophedonPlanner::new()
        .plan(&grid, GridCoord::new(1, 1), &CoverageParams::new(1.0, 1))
        .unwrap();

    assert!(plan.stats.cells > 1);
    assert!(plan.stats.critical_points > 0);
    assert_eq!(plan.stats.waypoints, plan.path.len());
    assert_eq!(plan.visit_order.len(), plan.cells.len());

    // Consecutive FOV waypoints never jump: stitches are filled in by the
    // pathfinder, so gaps stay below eps plus one diagonal step
    let max_gap = plan
        .path
        .poses
        .windows(2)
        .map(|w| w[0].distance(&w[1]) / grid.resolution())
        .fold(0.0f32, f32::max);
    assert!(max_gap <= 2.5, "max gap {}", max_gap);
}

#[test]
fn test_corridor_against_right_wall() {
    init_logging();
    // One pixel wide corridor one column from the grid border, narrower
    // than the FOV diameter
    let grid = grid(
        "
        ########
        #......#
        ######.#
        ######.#
        ######.#
        ######.#
        #......#
        ########
        ",
    );
    let (_, cells) = decompose(&grid);
    assert_eq!(cells.len(), 1);

    let params = CoverageParams::new(2.0, 1);
    let lines = sweep_lines(&grid, 0, &cells[0].bounds, 2).unwrap();
    for line in &lines {
        assert!(grid.is_free(line.left_edge), "{:?}", line);
        assert!(grid.is_free(line.right_edge), "{:?}", line);
    }

    let plan = BoustrophedonPlanner::new()
        .plan(&grid, GridCoord::new(1, 1), &params)
        .unwrap();
    assert!(!plan.path.is_empty());
    for pose in &plan.path.poses {
        let pixel = grid.world_to_grid(pose.position());
        assert!(grid.is_free(pixel), "{:?} off the free space", pixel);
    }
}

#[test]
fn test_disconnected_rooms_fail_ordering() {
    let grid = grid(
        "
        #########
        #...#...#
        #...#...#
        #########
        ",
    );
    let result = BoustrophedonPlanner::new().plan(
        &grid,
        GridCoord::new(1, 1),
        &CoverageParams::new(1.0, 1),
    );
    assert!(matches!(result, Err(CoverageError::OrderingFailure(_))));
}

#[test]
fn test_start_on_obstacle_fails() {
    let grid = grid(PARTITION);
    let result = BoustrophedonPlanner::new().plan(
        &grid,
        GridCoord::new(5, 2),
        &CoverageParams::new(1.0, 1),
    );
    assert!(matches!(
        result,
        Err(CoverageError::UnreachableStart { start }) if start == GridCoord::new(5, 2)
    ));
}
