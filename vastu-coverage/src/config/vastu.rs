//! Main CoverageConfig and conversion methods.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::Point2D;
use crate::coverage::CoverageParams;
use crate::ordering::GreedyTourConfig;
use crate::pathfinding::AStarConfig;

use super::coverage::CoverageSection;
use super::error::ConfigLoadError;
use super::ordering::OrderingSection;
use super::pathfinding::PathfindingSection;

/// Full coverage planner configuration loaded from YAML
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct CoverageConfig {
    /// Field-of-view and sampling settings
    #[serde(default)]
    pub coverage: CoverageSection,

    /// Pathfinding settings
    #[serde(default)]
    pub pathfinding: PathfindingSection,

    /// Cell ordering settings
    #[serde(default)]
    pub ordering: OrderingSection,
}

impl CoverageConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Load from default config path (configs/coverage.yaml)
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new("configs/coverage.yaml");
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String, ConfigLoadError> {
        serde_yaml::to_string(self).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }

    /// Convert metric coverage settings to pixel parameters for a map
    /// with the given resolution (meters per pixel).
    pub fn coverage_params(&self, resolution: f32) -> CoverageParams {
        let section = &self.coverage;
        CoverageParams {
            fov_radius: section.fov_radius / resolution,
            path_eps: ((section.path_eps / resolution).round() as i32).max(1),
            plan_for_footprint: section.plan_for_footprint,
            robot_to_fov: Point2D::new(section.robot_to_fov[0], section.robot_to_fov[1]),
        }
    }

    /// A* settings for the stitching pathfinder and the tour solver
    pub fn to_astar_config(&self) -> AStarConfig {
        AStarConfig::from(&self.pathfinding.astar)
    }

    /// Convert to GreedyTourConfig
    pub fn to_tour_config(&self) -> GreedyTourConfig {
        GreedyTourConfig {
            two_opt_passes: self.ordering.two_opt_passes,
        }
    }
}
