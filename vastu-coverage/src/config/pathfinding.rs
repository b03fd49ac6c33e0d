//! Pathfinding section: settings of the A* used for stitching and for the
//! cell-to-cell distances of the tour solver.

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::pathfinding::AStarConfig;

#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct PathfindingSection {
    #[serde(default)]
    pub astar: AStarSettings,
}

/// YAML form of [`AStarConfig`]
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AStarSettings {
    /// 8-connected moves
    #[serde(default = "defaults::enabled")]
    pub allow_diagonal: bool,

    #[serde(default = "defaults::diagonal_cost")]
    pub diagonal_cost: f32,

    /// Expansion budget per query
    #[serde(default = "defaults::max_iterations")]
    pub max_iterations: usize,

    /// Sweep edges may sit on a wall pixel
    #[serde(default = "defaults::enabled")]
    pub allow_blocked_endpoints: bool,
}

impl Default for AStarSettings {
    fn default() -> Self {
        AStarConfig::default().into()
    }
}

impl From<AStarConfig> for AStarSettings {
    fn from(config: AStarConfig) -> Self {
        Self {
            allow_diagonal: config.allow_diagonal,
            diagonal_cost: config.diagonal_cost,
            max_iterations: config.max_iterations,
            allow_blocked_endpoints: config.allow_blocked_endpoints,
        }
    }
}

impl From<&AStarSettings> for AStarConfig {
    fn from(settings: &AStarSettings) -> Self {
        Self {
            allow_diagonal: settings.allow_diagonal,
            diagonal_cost: settings.diagonal_cost,
            max_iterations: settings.max_iterations,
            allow_blocked_endpoints: settings.allow_blocked_endpoints,
        }
    }
}
