//! FOV-to-robot pose mapping with a circular fallback search.

use std::f32::consts::TAU;

use log::{debug, trace};

use super::{CoveragePath, PathFrame};
use crate::core::{GridCoord, Point2D, Pose2D};
use crate::coverage::CoverageParams;
use crate::error::{CoverageError, Result};
use crate::grid::OccupancyGrid;

/// Minimum number of fallback samples on the search circle
const MIN_FALLBACK_SAMPLES: usize = 16;

/// Maps FOV waypoints (pixels) to world poses on a given grid.
pub struct PoseMapper<'a> {
    grid: &'a OccupancyGrid,
}

impl<'a> PoseMapper<'a> {
    /// Mapper over `grid`
    pub fn new(grid: &'a OccupancyGrid) -> Self {
        Self { grid }
    }

    /// Convert the FOV path into the output path.
    ///
    /// In footprint mode the FOV poses are scaled and translated into the
    /// world frame unchanged. Otherwise each pose is moved back by the
    /// robot-to-FOV offset; if that lands on an obstacle, the free point on
    /// the offset circle around the FOV center closest to the previous robot
    /// position is used instead. The first previous position is `start`.
    pub fn to_path(
        &self,
        fov_waypoints: &[Pose2D],
        params: &CoverageParams,
        start: GridCoord,
    ) -> Result<CoveragePath> {
        if params.plan_for_footprint {
            let poses = fov_waypoints.iter().map(|pose| self.to_world(*pose)).collect();
            return Ok(CoveragePath {
                frame: PathFrame::FieldOfView,
                poses,
            });
        }

        let resolution = self.grid.resolution();
        if !resolution.is_finite() || resolution <= 0.0 {
            return Err(CoverageError::InvalidParameter(format!(
                "resolution must be positive, got {}",
                resolution
            )));
        }

        let offset = Point2D::new(
            params.robot_to_fov.x / resolution,
            params.robot_to_fov.y / resolution,
        );
        let mut previous = start.to_point();
        let mut fallbacks = 0usize;
        let mut poses = Vec::with_capacity(fov_waypoints.len());

        for fov in fov_waypoints {
            let center = fov.position();
            let direct = center - offset;
            let robot = if self.grid.is_free(direct.round_to_grid()) {
                direct
            } else {
                fallbacks += 1;
                self.nearest_free_on_circle(center, offset.length(), previous)
                    .ok_or(CoverageError::NoFreeRobotPose {
                        x: center.x,
                        y: center.y,
                    })?
            };

            previous = robot;
            poses.push(self.to_world(Pose2D {
                x: robot.x,
                y: robot.y,
                theta: fov.theta,
            }));
        }

        debug!(
            "[PoseMapper] mapped {} poses, {} needed the fallback search",
            poses.len(),
            fallbacks
        );

        Ok(CoveragePath {
            frame: PathFrame::RobotBody,
            poses,
        })
    }

    /// Free sample on the circle around `center` closest to `previous`.
    fn nearest_free_on_circle(
        &self,
        center: Point2D,
        radius: f32,
        previous: Point2D,
    ) -> Option<Point2D> {
        let best = fallback_samples(center, radius)
            .filter(|p| self.grid.is_free(p.round_to_grid()))
            .min_by(|a, b| {
                a.distance_squared(&previous)
                    .partial_cmp(&b.distance_squared(&previous))
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
        trace!(
            "[PoseMapper] fallback around ({:.1},{:.1}) r={:.1}: {:?}",
            center.x, center.y, radius, best
        );
        best
    }

    /// Pixel pose to world pose: `pixel * resolution + origin`
    #[inline]
    fn to_world(&self, pose: Pose2D) -> Pose2D {
        let position = self.grid.pixel_to_world(pose.position());
        Pose2D {
            x: position.x,
            y: position.y,
            theta: pose.theta,
        }
    }
}

/// Candidate points on a circle, spaced about one pixel of arc apart.
pub fn fallback_samples(center: Point2D, radius: f32) -> impl Iterator<Item = Point2D> {
    let count = ((TAU * radius).ceil() as usize).max(MIN_FALLBACK_SAMPLES);
    (0..count).map(move |k| center.point_at(TAU * k as f32 / count as f32, radius))
}
