//! Closed polygons over pixel-center coordinates.

use crate::core::{GridBounds, GridCoord, Point2D};

/// Closed polygon; the edge from the last vertex back to the first is implied.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    vertices: Vec<GridCoord>,
}

impl Polygon {
    /// Create a polygon from its vertices in boundary order.
    pub fn new(vertices: Vec<GridCoord>) -> Self {
        Self { vertices }
    }

    /// Vertices in boundary order
    #[inline]
    pub fn vertices(&self) -> &[GridCoord] {
        &self.vertices
    }

    /// Number of vertices
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// True if the polygon has no vertex
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Bounding box of the vertices, `None` for an empty polygon.
    pub fn bounds(&self) -> Option<GridBounds> {
        GridBounds::from_coords(&self.vertices)
    }

    /// Edges including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = (GridCoord, GridCoord)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Point-in-polygon test. Points on an edge or vertex are inside.
    ///
    /// Exact integer arithmetic: even-odd ray casting towards +x after an
    /// explicit boundary check.
    pub fn contains(&self, point: GridCoord) -> bool {
        match self.vertices.len() {
            0 => return false,
            1 => return self.vertices[0] == point,
            _ => {}
        }

        if self.edges().any(|(a, b)| on_segment(a, b, point)) {
            return true;
        }

        let mut inside = false;
        for (a, b) in self.edges() {
            if (a.y > point.y) == (b.y > point.y) {
                continue;
            }
            // Is `point` left of the edge's crossing with the ray's row?
            let lhs = (point.x - a.x) as i64 * (b.y - a.y) as i64;
            let rhs = (point.y - a.y) as i64 * (b.x - a.x) as i64;
            let left = if b.y > a.y { lhs < rhs } else { lhs > rhs };
            if left {
                inside = !inside;
            }
        }
        inside
    }

    /// Signed area (shoelace). Positive for clockwise order with y down.
    pub fn signed_area(&self) -> f64 {
        self.edges()
            .map(|(a, b)| cross(a, b))
            .sum::<f64>()
            / 2.0
    }

    /// Absolute enclosed area.
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Area centroid, or the vertex mean for polygons without area.
    pub fn centroid(&self) -> Option<Point2D> {
        if self.vertices.is_empty() {
            return None;
        }

        let area = self.signed_area();
        if area.abs() < f64::EPSILON {
            let n = self.vertices.len() as f64;
            let (sx, sy) = self
                .vertices
                .iter()
                .fold((0.0, 0.0), |(sx, sy), v| (sx + v.x as f64, sy + v.y as f64));
            return Some(Point2D::new((sx / n) as f32, (sy / n) as f32));
        }

        let (cx, cy) = self.edges().fold((0.0, 0.0), |(cx, cy), (a, b)| {
            let c = cross(a, b);
            (
                cx + (a.x + b.x) as f64 * c,
                cy + (a.y + b.y) as f64 * c,
            )
        });
        let scale = 1.0 / (6.0 * area);
        Some(Point2D::new((cx * scale) as f32, (cy * scale) as f32))
    }
}

#[inline]
fn cross(a: GridCoord, b: GridCoord) -> f64 {
    a.x as f64 * b.y as f64 - b.x as f64 * a.y as f64
}

fn on_segment(a: GridCoord, b: GridCoord, p: GridCoord) -> bool {
    let cross = (b.x - a.x) as i64 * (p.y - a.y) as i64 - (b.y - a.y) as i64 * (p.x - a.x) as i64;
    cross == 0
        && p.x >= a.x.min(b.x)
        && p.x <= a.x.max(b.x)
        && p.y >= a.y.min(b.y)
        && p.y <= a.y.max(b.y)
}
