use crate::domain::{Point, Polygon};

/// Axis-aligned bounding box in integer coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

impl Bounds {
    /// Bounds of a polygon; never empty since polygons have at least 3 points
    pub fn of_polygon(polygon: &Polygon) -> Self {
        let points = polygon.points();
        let first = points[0];
        let mut bounds = Self {
            min_x: first.x,
            max_x: first.x,
            min_y: first.y,
            max_y: first.y,
        };
        bounds.expand(&points[1..]);
        bounds
    }

    fn expand(&mut self, points: &[Point]) {
        for p in points {
            self.min_x = self.min_x.min(p.x);
            self.max_x = self.max_x.max(p.x);
            self.min_y = self.min_y.min(p.y);
            self.max_y = self.max_y.max(p.y);
        }
    }

    /// Closed-interval overlap test; boxes sharing only an edge or a corner
    /// still overlap
    pub fn overlaps(&self, other: &Bounds) -> bool {
        self.min_x <= other.max_x
            && other.min_x <= self.max_x
            && self.min_y <= other.max_y
            && other.min_y <= self.max_y
    }
}
