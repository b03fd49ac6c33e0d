//! Plan a coverage path over a map and save it as SVG.
//!
//! Usage:
//!   cargo run --example plan_coverage -- --map maps/office.yaml --start 10,12
//!   cargo run --example plan_coverage   # Uses a built-in room

use std::path::PathBuf;

use clap::Parser;
use log::info;

use vastu_coverage::core::{GridCoord, Point2D};
use vastu_coverage::io::{SvgConfig, SvgRenderer, load_ros_map};
use vastu_coverage::{BoustrophedonPlanner, CoverageConfig, OccupancyGrid};

const DEMO_ROOM: &str = "
    ##############################
    #............#...............#
    #............#...............#
    #............#.......###.....#
    #....####....#.......###.....#
    #....####....................#
    #....####....................#
    #............................#
    #.............########.......#
    #.............########.......#
    #............................#
    #............................#
    ##############################
";

/// Coverage planning example
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "configs/coverage.yaml")]
    config: PathBuf,

    /// ROS map YAML (PGM image); built-in room if omitted
    #[arg(short, long)]
    map: Option<PathBuf>,

    /// Start pixel as "x,y"; first free pixel if omitted
    #[arg(short, long)]
    start: Option<String>,

    /// SVG output path
    #[arg(short, long, default_value = "coverage.svg")]
    output: PathBuf,
}

fn parse_start(text: &str) -> Option<GridCoord> {
    let (x, y) = text.split_once(',')?;
    Some(GridCoord::new(x.trim().parse().ok()?, y.trim().parse().ok()?))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = if args.config.exists() {
        CoverageConfig::load(&args.config)?
    } else {
        info!("Config {} not found, using defaults", args.config.display());
        CoverageConfig::default()
    };

    let grid = match &args.map {
        Some(path) => load_ros_map(path)?,
        None => OccupancyGrid::from_ascii(DEMO_ROOM, 0.05, Point2D::ZERO)?,
    };

    let start = match args.start.as_deref() {
        Some(text) => parse_start(text).ok_or("start must be \"x,y\"")?,
        None => grid.free_coords().next().ok_or("map has no free pixel")?,
    };

    let params = config.coverage_params(grid.resolution());
    let plan = BoustrophedonPlanner::from_config(&config).plan(&grid, start, &params)?;

    info!(
        "{} cells, {} sweep lines, {} waypoints, {:.2} m",
        plan.stats.cells,
        plan.stats.sweep_lines,
        plan.stats.waypoints,
        plan.path.length()
    );

    SvgRenderer::new(&grid, SvgConfig::default())
        .with_title(format!("Coverage from ({}, {})", start.x, start.y))
        .with_cells(&plan.cells, &plan.visit_order.order)
        .with_path(&plan.path)
        .save(&args.output)?;
    info!("Saved {}", args.output.display());

    Ok(())
}
