//! Pose Mapper: FOV-center waypoints to world-frame poses.

mod mapper;

pub use mapper::{PoseMapper, fallback_samples};

use serde::{Deserialize, Serialize};

use crate::core::Pose2D;

/// Which point of the robot a path describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PathFrame {
    /// Poses of the field-of-view center (footprint planning)
    FieldOfView,
    /// Poses of the robot body center
    RobotBody,
}

/// World-frame coverage path.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CoveragePath {
    /// Frame every pose is expressed in
    pub frame: PathFrame,
    /// Poses in meters, heading in radians
    pub poses: Vec<Pose2D>,
}

impl CoveragePath {
    /// Number of poses
    #[inline]
    pub fn len(&self) -> usize {
        self.poses.len()
    }

    /// True if the path has no pose
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.poses.is_empty()
    }

    /// Sum of straight-line distances between consecutive poses (meters)
    pub fn length(&self) -> f32 {
        self.poses.windows(2).map(|w| w[0].distance(&w[1])).sum()
    }
}
