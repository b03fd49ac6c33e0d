//! Integer axis-aligned bounding box over grid coordinates.

use super::point::GridCoord;

/// Inclusive bounding box of a set of grid coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridBounds {
    /// Smallest column
    pub min_x: i32,
    /// Largest column
    pub max_x: i32,
    /// Smallest row
    pub min_y: i32,
    /// Largest row
    pub max_y: i32,
}

impl GridBounds {
    /// Bounds of a single coordinate.
    #[inline]
    pub fn from_coord(coord: GridCoord) -> Self {
        Self {
            min_x: coord.x,
            max_x: coord.x,
            min_y: coord.y,
            max_y: coord.y,
        }
    }

    /// Bounds of a set of coordinates, `None` if the set is empty.
    pub fn from_coords(coords: &[GridCoord]) -> Option<Self> {
        let (first, rest) = coords.split_first()?;
        let mut bounds = Self::from_coord(*first);
        for coord in rest {
            bounds.expand_to_include(*coord);
        }
        Some(bounds)
    }

    /// Grow the box to contain `coord`.
    #[inline]
    pub fn expand_to_include(&mut self, coord: GridCoord) {
        self.min_x = self.min_x.min(coord.x);
        self.max_x = self.max_x.max(coord.x);
        self.min_y = self.min_y.min(coord.y);
        self.max_y = self.max_y.max(coord.y);
    }

    /// Horizontal extent (`max_x - min_x`).
    #[inline]
    pub fn width(&self) -> i32 {
        self.max_x - self.min_x
    }

    /// Vertical extent (`max_y - min_y`).
    #[inline]
    pub fn height(&self) -> i32 {
        self.max_y - self.min_y
    }

    /// Center of the box (integer division toward `min`).
    #[inline]
    pub fn center(&self) -> GridCoord {
        GridCoord::new(
            self.min_x + self.width() / 2,
            self.min_y + self.height() / 2,
        )
    }

    /// Is the coordinate inside the box (inclusive)?
    #[inline]
    pub fn contains(&self, coord: GridCoord) -> bool {
        coord.x >= self.min_x
            && coord.x <= self.max_x
            && coord.y >= self.min_y
            && coord.y <= self.max_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_coords() {
        let coords = [
            GridCoord::new(3, 1),
            GridCoord::new(-1, 4),
            GridCoord::new(2, 7),
        ];
        let bounds = GridBounds::from_coords(&coords).unwrap();
        assert_eq!(bounds.min_x, -1);
        assert_eq!(bounds.max_x, 3);
        assert_eq!(bounds.min_y, 1);
        assert_eq!(bounds.max_y, 7);
        assert_eq!(bounds.width(), 4);
        assert_eq!(bounds.height(), 6);
        assert_eq!(bounds.center(), GridCoord::new(1, 4));
    }

    #[test]
    fn test_empty_coords() {
        assert!(GridBounds::from_coords(&[]).is_none());
    }

    #[test]
    fn test_contains() {
        let bounds = GridBounds::from_coord(GridCoord::new(2, 2));
        assert!(bounds.contains(GridCoord::new(2, 2)));
        assert!(!bounds.contains(GridCoord::new(3, 2)));
    }
}
