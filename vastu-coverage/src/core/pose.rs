//! 2D pose type for path waypoints.

use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

use super::point::Point2D;

const TWO_PI: f32 = 2.0 * PI;

/// Normalize angle to [-π, π).
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    let mut a = angle % TWO_PI;
    if a >= PI {
        a -= TWO_PI;
    } else if a < -PI {
        a += TWO_PI;
    }
    a
}

/// A 2D pose: position plus heading.
///
/// - Position: (x, y) in grid units or meters depending on the path frame
/// - Theta: heading angle in radians, counter-clockwise from X-axis
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Pose2D {
    /// X position.
    pub x: f32,
    /// Y position.
    pub y: f32,
    /// Heading angle in radians.
    pub theta: f32,
}

impl Pose2D {
    /// Create a new pose (theta normalized to [-π, π)).
    #[inline]
    pub fn new(x: f32, y: f32, theta: f32) -> Self {
        Self {
            x,
            y,
            theta: normalize_angle(theta),
        }
    }

    /// Get the position as a Point2D.
    #[inline]
    pub fn position(self) -> Point2D {
        Point2D::new(self.x, self.y)
    }

    /// Euclidean distance between the positions of two poses.
    #[inline]
    pub fn distance(&self, other: &Pose2D) -> f32 {
        self.position().distance(&other.position())
    }
}
