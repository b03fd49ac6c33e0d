//! Cell ordering configuration section.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Tour solver settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OrderingSection {
    /// Maximum 2-opt improvement passes (0 = nearest neighbour only)
    #[serde(default = "defaults::two_opt_passes")]
    pub two_opt_passes: usize,
}

impl Default for OrderingSection {
    fn default() -> Self {
        Self {
            two_opt_passes: defaults::two_opt_passes(),
        }
    }
}
