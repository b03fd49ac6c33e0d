//! Planning from map and configuration files on disk.

use std::path::{Path, PathBuf};

use vastu_coverage::config::ConfigLoadError;
use vastu_coverage::core::GridCoord;
use vastu_coverage::io::{SvgConfig, SvgRenderer, load_ros_map};
use vastu_coverage::{BoustrophedonPlanner, CoverageConfig, OccupancyGrid};

use super::{PARTITION, grid, init_logging};

/// Write `ascii` as a ROS map (binary PGM + YAML) into `dir`.
///
/// The image is written top row first, so the loaded grid is the ASCII map
/// flipped vertically.
fn write_ros_map(dir: &Path, ascii: &OccupancyGrid) -> PathBuf {
    let (width, height) = (ascii.width(), ascii.height());
    let mut pgm = format!("P5\n{} {}\n255\n", width, height).into_bytes();
    for y in 0..height as i32 {
        for x in 0..width as i32 {
            let free = ascii.is_free(GridCoord::new(x, y));
            pgm.push(if free { 254 } else { 0 });
        }
    }
    std::fs::write(dir.join("partition.pgm"), pgm).unwrap();

    let yaml_path = dir.join("partition.yaml");
    std::fs::write(
        &yaml_path,
        "image: partition.pgm\n\
         resolution: 0.05\n\
         origin: [-0.3, -0.2, 0.0]\n\
         negate: 0\n\
         occupied_thresh: 0.65\n\
         free_thresh: 0.196\n",
    )
    .unwrap();
    yaml_path
}

const CONFIG: &str = "
coverage:
  fov_radius: 0.1
  path_eps: 0.05
  plan_for_footprint: true
pathfinding:
  astar:
    allow_diagonal: true
ordering:
  two_opt_passes: 10
";

#[test]
fn test_plan_from_files() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let ascii = grid(PARTITION);
    let map = load_ros_map(write_ros_map(dir.path(), &ascii)).unwrap();

    assert_eq!(map.width(), ascii.width());
    assert_eq!(map.height(), ascii.height());
    assert_eq!(map.free_count(), ascii.free_count());
    let top = ascii.height() as i32 - 1;
    assert!(map.is_free(GridCoord::new(1, top - 1)));
    assert_eq!(
        map.is_free(GridCoord::new(5, top - 1)),
        ascii.is_free(GridCoord::new(5, 1))
    );

    let config_path = dir.path().join("coverage.yaml");
    std::fs::write(&config_path, CONFIG).unwrap();
    let config = CoverageConfig::load(&config_path).unwrap();
    assert_eq!(config.ordering.two_opt_passes, 10);

    let params = config.coverage_params(map.resolution());
    assert_eq!(params.fov_radius_px(), 2);
    assert_eq!(params.path_eps, 1);

    let start = map.free_coords().next().unwrap();
    let plan = BoustrophedonPlanner::from_config(&config)
        .plan(&map, start, &params)
        .unwrap();
    assert_eq!(plan.cells.len(), 3);
    assert!(!plan.path.is_empty());

    // World coordinates carry the map origin
    let first = plan.path.poses[0];
    assert!(first.x > -0.3 && first.y > -0.2);

    let svg_path = dir.path().join("plan.svg");
    SvgRenderer::new(&map, SvgConfig::default())
        .with_title("partition")
        .with_cells(&plan.cells, &plan.visit_order.order)
        .with_path(&plan.path)
        .save(&svg_path)
        .unwrap();

    let svg = std::fs::read_to_string(&svg_path).unwrap();
    assert!(svg.starts_with("<?xml"));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert_eq!(svg.matches("<polygon").count(), 3);
    assert!(svg.contains("partition"));
}

#[test]
fn test_config_round_trip_and_defaults() {
    let config = CoverageConfig::from_yaml("ordering:\n  two_opt_passes: 0\n").unwrap();
    assert_eq!(config.ordering.two_opt_passes, 0);
    assert!(config.coverage.plan_for_footprint);

    let yaml = config.to_yaml().unwrap();
    let reparsed = CoverageConfig::from_yaml(&yaml).unwrap();
    assert_eq!(reparsed.ordering.two_opt_passes, 0);
    assert_eq!(reparsed.coverage.fov_radius, config.coverage.fov_radius);
}

#[test]
fn test_missing_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = CoverageConfig::load(&dir.path().join("absent.yaml"));
    assert!(matches!(result, Err(ConfigLoadError::Io(_))));
}
