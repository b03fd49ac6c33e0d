//! Boustrophedon path generation across all cells.
//!
//! The generator is a fold over the visit order. The only state carried
//! from one cell to the next is [`SweepState`]: the current FOV position and
//! the waypoints emitted so far.

use log::{debug, trace};

use super::lines::{HorizontalSweepLine, sweep_lines};
use super::params::CoverageParams;
use crate::core::{GridCoord, Pose2D};
use crate::decomposition::Cell;
use crate::error::{CoverageError, Result};
use crate::grid::OccupancyGrid;
use crate::ordering::VisitOrder;
use crate::pathfinding::GridPathfinder;

/// Accumulator threaded through the cells.
#[derive(Clone, Debug, Default)]
pub struct SweepState {
    /// Current FOV position
    pub position: GridCoord,
    /// FOV waypoints emitted so far
    pub waypoints: Vec<GridCoord>,
    /// Sweep lines walked so far
    pub lines: usize,
}

impl SweepState {
    /// Empty state at the start position
    pub fn new(start: GridCoord) -> Self {
        Self {
            position: start,
            waypoints: Vec::new(),
            lines: 0,
        }
    }
}

/// Where the sweep of a cell begins.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EntrySide {
    /// Walk the lines bottom to top
    pub from_bottom: bool,
    /// First line starts at its left edge
    pub from_left: bool,
}

/// FOV-frame coverage path in pixel coordinates.
#[derive(Clone, Debug, Default)]
pub struct FovPath {
    /// Waypoints with heading towards the next waypoint
    pub waypoints: Vec<Pose2D>,
    /// Number of sweep lines walked
    pub sweep_lines: usize,
}

/// Coverage Path Generator.
pub struct CoverageGenerator<'a, P: ?Sized> {
    pathfinder: &'a P,
    radius: i32,
    eps: i32,
}

impl<'a, P: GridPathfinder + ?Sized> CoverageGenerator<'a, P> {
    /// Create a generator. Fails on out-of-range parameters.
    pub fn new(pathfinder: &'a P, params: &CoverageParams) -> Result<Self> {
        params.validate()?;
        Ok(Self {
            pathfinder,
            radius: params.fov_radius_px(),
            eps: params.path_eps,
        })
    }

    /// Generate the FOV path over `cells` in visiting order.
    pub fn generate(
        &self,
        grid: &OccupancyGrid,
        cells: &[Cell],
        order: &VisitOrder,
        start: GridCoord,
    ) -> Result<FovPath> {
        let state = order
            .order
            .iter()
            .try_fold(SweepState::new(start), |state, &index| {
                let cell = cells.get(index).ok_or_else(|| {
                    CoverageError::OrderingFailure(format!("no cell with index {}", index))
                })?;
                self.cover_cell(grid, index, cell, state)
            })?;

        debug!(
            "[Coverage] {} waypoints on {} sweep lines over {} cells",
            state.waypoints.len(),
            state.lines,
            order.len()
        );

        Ok(FovPath {
            waypoints: assign_headings(&state.waypoints),
            sweep_lines: state.lines,
        })
    }

    /// Sweep one cell, continuing from `state`.
    pub fn cover_cell(
        &self,
        grid: &OccupancyGrid,
        index: usize,
        cell: &Cell,
        state: SweepState,
    ) -> Result<SweepState> {
        let mut lines = sweep_lines(grid, index, &cell.bounds, self.radius)?;
        let (Some(&first), Some(&last)) = (lines.first(), lines.last()) else {
            return Err(CoverageError::DegenerateCell {
                cell: index,
                row: cell.bounds.min_y,
            });
        };

        let entry = self.entry_side(grid, state.position, &first, &last);
        if entry.from_bottom {
            lines.reverse();
        }
        trace!(
            "[Coverage] cell {}: {} lines, entry {:?}",
            index,
            lines.len(),
            entry
        );

        lines
            .iter()
            .enumerate()
            .try_fold(state, |state, (i, line)| {
                let from_left = entry.from_left == (i % 2 == 0);
                self.sweep_line(grid, state, line, from_left)
            })
    }

    /// Pick the extreme line and side closest to `position`.
    ///
    /// The bottom line is chosen only if one of its corners is strictly
    /// closer than both corners of the top line. Unreachable corners are
    /// infinitely far.
    pub fn entry_side(
        &self,
        grid: &OccupancyGrid,
        position: GridCoord,
        top: &HorizontalSweepLine,
        bottom: &HorizontalSweepLine,
    ) -> EntrySide {
        let distance = |goal: GridCoord| {
            self.pathfinder
                .distance(grid, position, goal)
                .unwrap_or(f32::INFINITY)
        };
        let top_left = distance(top.left_edge);
        let top_right = distance(top.right_edge);
        let bottom_left = distance(bottom.left_edge);
        let bottom_right = distance(bottom.right_edge);

        let beats_top = |d: f32| d < top_left && d < top_right;
        if beats_top(bottom_left) || beats_top(bottom_right) {
            EntrySide {
                from_bottom: true,
                from_left: bottom_right >= bottom_left,
            }
        } else {
            EntrySide {
                from_bottom: false,
                from_left: top_right >= top_left,
            }
        }
    }

    /// Stitch to the near edge of `line` and walk it to the far edge.
    fn sweep_line(
        &self,
        grid: &OccupancyGrid,
        state: SweepState,
        line: &HorizontalSweepLine,
        from_left: bool,
    ) -> Result<SweepState> {
        let (near, far, step) = if from_left {
            (line.left_edge, line.right_edge, self.eps)
        } else {
            (line.right_edge, line.left_edge, -self.eps)
        };

        let SweepState {
            mut position,
            mut waypoints,
            lines,
        } = state;

        let stitch = self
            .pathfinder
            .plan(grid, position, near)
            .ok_or(CoverageError::StitchingFailure {
                from: position,
                to: near,
            })?;

        // The goal itself is appended as the near edge below
        let eps = self.eps as f32;
        let intermediate = stitch.points.len().saturating_sub(1);
        for &point in &stitch.points[..intermediate] {
            if point.distance(&position) >= eps {
                waypoints.push(point);
                position = point;
            }
        }

        waypoints.push(near);
        let mut x = near.x + step;
        while (step > 0 && x < far.x) || (step < 0 && x > far.x) {
            waypoints.push(GridCoord::new(x, line.y));
            x += step;
        }
        if far != near {
            waypoints.push(far);
        }

        Ok(SweepState {
            position: far,
            waypoints,
            lines: lines + 1,
        })
    }
}

/// Attach to every waypoint the heading towards its successor. The last
/// waypoint points back at the first.
pub fn assign_headings(points: &[GridCoord]) -> Vec<Pose2D> {
    let n = points.len();
    points
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let position = point.to_point();
            Pose2D {
                x: position.x,
                y: position.y,
                theta: position.angle_to(&points[(i + 1) % n].to_point()),
            }
        })
        .collect()
}
