use std::fmt;

use super::Point;

/// Minimum number of vertices for a polygon record to be accepted
pub const MIN_VERTICES: usize = 3;

/// A closed polygon given by its ordered vertices
///
/// The first and last vertex are implicitly connected. Vertex order defines
/// edge traversal and is part of the polygon's identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    /// Build a polygon, refusing fewer than [`MIN_VERTICES`] points
    pub fn new(points: Vec<Point>) -> Option<Self> {
        if points.len() < MIN_VERTICES {
            return None;
        }
        Some(Self { points })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    #[cfg(test)]
    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        Self {
            points: self.points.iter().map(|p| p.translated(dx, dy)).collect(),
        }
    }
}

pub fn is_even(polygon: &Polygon) -> bool {
    polygon.vertex_count() % 2 == 0
}

pub fn is_odd(polygon: &Polygon) -> bool {
    !is_even(polygon)
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.points.len())?;
        for point in &self.points {
            write!(f, " {}", point)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Polygon {
        Polygon::new(vec![
            Point::new(0, 0),
            Point::new(0, 1),
            Point::new(1, 1),
            Point::new(1, 0),
        ])
        .unwrap()
    }

    #[test]
    fn test_rejects_degenerate() {
        assert!(Polygon::new(vec![]).is_none());
        assert!(Polygon::new(vec![Point::new(0, 0), Point::new(1, 1)]).is_none());
    }

    #[test]
    fn test_parity() {
        let sq = square();
        assert!(is_even(&sq));
        assert!(!is_odd(&sq));

        let tri = Polygon::new(vec![Point::new(0, 0), Point::new(0, 1), Point::new(1, 0)]).unwrap();
        assert!(is_odd(&tri));
    }

    #[test]
    fn test_equality_depends_on_order() {
        let a = square();
        let mut reversed = a.points().to_vec();
        reversed.reverse();
        let b = Polygon::new(reversed).unwrap();
        assert_ne!(a, b);
        assert_eq!(a, square());
    }

    #[test]
    fn test_display_matches_record_form() {
        assert_eq!(square().to_string(), "4 (0;0) (0;1) (1;1) (1;0)");
    }
}
