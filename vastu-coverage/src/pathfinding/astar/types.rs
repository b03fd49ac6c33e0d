//! A* search configuration, open-list entries and failure kinds.

use std::cmp::Ordering;

use thiserror::Error;

/// Open-list entry, keyed by grid index.
///
/// Ordered by `f` only, reversed so that `BinaryHeap` pops the smallest.
#[derive(Clone, Copy, Debug)]
pub(super) struct OpenEntry {
    pub index: usize,
    pub g: f32,
    pub f: f32,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl Eq for OpenEntry {}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other.f.partial_cmp(&self.f).unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A* pathfinding configuration
#[derive(Clone, Debug)]
pub struct AStarConfig {
    /// 8-connected moves; 4-connected when false
    pub allow_diagonal: bool,
    /// Cost of one diagonal step
    pub diagonal_cost: f32,
    /// Expansion budget per query
    pub max_iterations: usize,
    /// Start and goal may be obstacle pixels (a sweep edge inside a wall).
    /// Every intermediate pixel must still be free.
    pub allow_blocked_endpoints: bool,
}

impl Default for AStarConfig {
    fn default() -> Self {
        Self {
            allow_diagonal: true,
            diagonal_cost: std::f32::consts::SQRT_2,
            max_iterations: 200_000,
            allow_blocked_endpoints: true,
        }
    }
}

impl AStarConfig {
    /// Both endpoints must be free pixels
    pub fn strict() -> Self {
        Self {
            allow_blocked_endpoints: false,
            ..Default::default()
        }
    }

    /// Admissible distance estimate: octile with diagonals, Manhattan without.
    #[inline]
    pub(super) fn estimate(&self, dx: i32, dy: i32) -> f32 {
        let (dx, dy) = (dx.abs() as f32, dy.abs() as f32);
        if self.allow_diagonal {
            let (short, long) = if dx < dy { (dx, dy) } else { (dy, dx) };
            short * self.diagonal_cost + (long - short)
        } else {
            dx + dy
        }
    }
}

/// Why a query produced no path.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PathFailure {
    /// Start or goal lies outside the grid
    #[error("start or goal outside the grid")]
    OutOfBounds,
    /// Start is an obstacle and endpoints are not exempt
    #[error("start pixel is blocked")]
    StartBlocked,
    /// Goal is an obstacle and endpoints are not exempt
    #[error("goal pixel is blocked")]
    GoalBlocked,
    /// The open list ran dry
    #[error("no path after expanding {expanded} nodes")]
    NoPath { expanded: usize },
    /// Expansion budget spent
    #[error("gave up after expanding {expanded} nodes")]
    MaxIterationsExceeded { expanded: usize },
}
