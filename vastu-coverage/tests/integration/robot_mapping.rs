//! FOV path to robot path conversion in the full pipeline.

use approx::assert_relative_eq;
use vastu_coverage::core::{GridCoord, Point2D};
use vastu_coverage::coverage::{CoverageGenerator, FovPath};
use vastu_coverage::pathfinding::AStarPlanner;
use vastu_coverage::{
    BoustrophedonPlanner, CoverageError, CoverageParams, CoveragePlan, OccupancyGrid, PathFrame,
};

use super::{OFFICE, grid, init_logging};

/// Regenerate the FOV path of a finished plan
fn fov_path(
    grid: &OccupancyGrid,
    plan: &CoveragePlan,
    params: &CoverageParams,
    start: GridCoord,
) -> FovPath {
    let astar = AStarPlanner::with_defaults();
    CoverageGenerator::new(&astar, params)
        .unwrap()
        .generate(grid, &plan.cells, &plan.visit_order, start)
        .unwrap()
}

#[test]
fn test_footprint_path_is_scaled_fov_path() {
    init_logging();
    let origin = Point2D::new(-1.2, 0.35);
    let grid = OccupancyGrid::from_ascii(OFFICE, 0.05, origin).unwrap();
    let start = GridCoord::new(3, 2);
    let params = CoverageParams::new(2.0, 2);

    let plan = BoustrophedonPlanner::new().plan(&grid, start, &params).unwrap();
    assert_eq!(plan.path.frame, PathFrame::FieldOfView);

    let fov = fov_path(&grid, &plan, &params, start);
    assert_eq!(fov.waypoints.len(), plan.path.len());
    for (pixel, world) in fov.waypoints.iter().zip(&plan.path.poses) {
        assert_eq!(world.x, pixel.x * 0.05 + origin.x);
        assert_eq!(world.y, pixel.y * 0.05 + origin.y);
        assert_eq!(world.theta, pixel.theta);
    }
}

#[test]
fn test_robot_poses_avoid_obstacles() {
    init_logging();
    let grid = grid(OFFICE);
    let start = GridCoord::new(1, 1);
    // FOV 15 cm ahead of the robot center: 3 pixels
    let params = CoverageParams::new(1.0, 1).with_robot_to_fov(Point2D::new(0.15, 0.0));
    let offset = Point2D::new(3.0, 0.0);

    let plan = BoustrophedonPlanner::new().plan(&grid, start, &params).unwrap();
    assert_eq!(plan.path.frame, PathFrame::RobotBody);

    let fov = fov_path(&grid, &plan, &params, start);
    assert_eq!(fov.waypoints.len(), plan.path.len());

    let mut fallbacks = 0;
    for (fov_pose, robot) in fov.waypoints.iter().zip(&plan.path.poses) {
        assert_eq!(robot.theta, fov_pose.theta);

        let robot_px = Point2D::new(robot.x / 0.05, robot.y / 0.05);
        assert!(grid.is_free(robot_px.round_to_grid()), "robot pose {:?} blocked", robot_px);

        let direct = fov_pose.position() - offset;
        if grid.is_free(direct.round_to_grid()) {
            assert_relative_eq!(robot_px.x, direct.x, epsilon = 1e-3);
            assert_relative_eq!(robot_px.y, direct.y, epsilon = 1e-3);
        } else {
            // Fallback keeps the FOV distance
            fallbacks += 1;
            assert_relative_eq!(robot_px.distance(&fov_pose.position()), 3.0, epsilon = 1e-3);
        }
    }
    // Left sweep edges put the robot inside the outer wall
    assert!(fallbacks > 0);
}

#[test]
fn test_offset_outside_map_fails() {
    let grid = grid(
        "
        #######
        #.....#
        #.....#
        #.....#
        #######
        ",
    );
    // One meter is 20 pixels, further than any pixel of this map
    let params = CoverageParams::new(1.0, 1).with_robot_to_fov(Point2D::new(1.0, 0.0));
    let result = BoustrophedonPlanner::new().plan(&grid, GridCoord::new(1, 1), &params);
    assert!(matches!(result, Err(CoverageError::NoFreeRobotPose { .. })));
}
