//! Binary occupancy state of a grid pixel.

use serde::{Deserialize, Serialize};

/// Occupancy of a single grid pixel.
///
/// Coverage planning works on a binary map: anything that is not known to
/// be traversable is treated as an obstacle by the loaders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Occupancy {
    /// Blocked pixel (wall, furniture, unknown space, painted cell boundary)
    #[default]
    Obstacle = 0,

    /// Traversable pixel
    Free = 1,
}

impl Occupancy {
    /// Can the sensor footprint center sit here?
    #[inline]
    pub fn is_free(self) -> bool {
        matches!(self, Occupancy::Free)
    }

    /// Is this pixel blocked?
    #[inline]
    pub fn is_obstacle(self) -> bool {
        matches!(self, Occupancy::Obstacle)
    }

    /// Parse the debug character used by ASCII maps
    #[inline]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Occupancy::Free),
            '#' => Some(Occupancy::Obstacle),
            _ => None,
        }
    }

    /// Single character representation for debugging
    pub fn as_char(self) -> char {
        match self {
            Occupancy::Free => '.',
            Occupancy::Obstacle => '#',
        }
    }
}
