//! Coverage path configuration section.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Field-of-view and sampling settings (all lengths in meters)
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CoverageSection {
    /// Radius of the sensor/brush footprint that sweeps the floor
    #[serde(default = "defaults::fov_radius")]
    pub fov_radius: f32,

    /// Minimum spacing between consecutive waypoints
    #[serde(default = "defaults::path_eps")]
    pub path_eps: f32,

    /// Plan for the robot footprint directly (no FOV offset correction)
    #[serde(default = "defaults::enabled")]
    pub plan_for_footprint: bool,

    /// Vector from robot center to FOV center [x, y]
    #[serde(default = "defaults::robot_to_fov")]
    pub robot_to_fov: [f32; 2],
}

impl Default for CoverageSection {
    fn default() -> Self {
        Self {
            fov_radius: defaults::fov_radius(),
            path_eps: defaults::path_eps(),
            plan_for_footprint: true,
            robot_to_fov: defaults::robot_to_fov(),
        }
    }
}
