//! Pixel-level coverage parameters.

use crate::core::Point2D;
use crate::error::{CoverageError, Result};

/// Tolerance applied before flooring the FOV radius, so that a radius of
/// `0.3 / 0.05` still counts as 6 pixels.
const RADIUS_EPSILON: f32 = 1e-4;

/// Parameters of one planning request in pixel units.
///
/// Built from [`CoverageConfig::coverage_params`](crate::config::CoverageConfig::coverage_params)
/// or directly in grid units.
#[derive(Clone, Debug, PartialEq)]
pub struct CoverageParams {
    /// Field-of-view radius in pixels (floored to an integer internally)
    pub fov_radius: f32,
    /// Waypoint spacing along sweep lines and stitches, in pixels
    pub path_eps: i32,
    /// Plan for the robot footprint: the FOV path is the robot path
    pub plan_for_footprint: bool,
    /// Vector from robot center to FOV center, in meters
    pub robot_to_fov: Point2D,
}

impl Default for CoverageParams {
    fn default() -> Self {
        Self {
            fov_radius: 1.0,
            path_eps: 1,
            plan_for_footprint: true,
            robot_to_fov: Point2D::ZERO,
        }
    }
}

impl CoverageParams {
    /// Create footprint-mode parameters
    pub fn new(fov_radius: f32, path_eps: i32) -> Self {
        Self {
            fov_radius,
            path_eps,
            ..Self::default()
        }
    }

    /// Switch to FOV mode with the given robot-to-FOV offset (meters)
    pub fn with_robot_to_fov(mut self, robot_to_fov: Point2D) -> Self {
        self.plan_for_footprint = false;
        self.robot_to_fov = robot_to_fov;
        self
    }

    /// Integer FOV radius used for sweep spacing and edge insets
    #[inline]
    pub fn fov_radius_px(&self) -> i32 {
        (self.fov_radius + RADIUS_EPSILON).floor() as i32
    }

    /// Reject radii and spacings that cannot produce a sweep.
    pub fn validate(&self) -> Result<()> {
        if !self.fov_radius.is_finite() || self.fov_radius_px() < 1 {
            return Err(CoverageError::InvalidParameter(format!(
                "FOV radius must be at least one pixel, got {}",
                self.fov_radius
            )));
        }
        if self.path_eps < 1 {
            return Err(CoverageError::InvalidParameter(format!(
                "path_eps must be at least one pixel, got {}",
                self.path_eps
            )));
        }
        if !self.robot_to_fov.x.is_finite() || !self.robot_to_fov.y.is_finite() {
            return Err(CoverageError::InvalidParameter(
                "robot_to_fov must be finite".to_string(),
            ));
        }
        Ok(())
    }
}
