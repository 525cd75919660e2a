pub mod dispatch;
pub mod engine;
pub mod ops;

pub use dispatch::parse_command;
pub use engine::QueryEngine;

use crate::domain::Polygon;

/// Vertex-count filter used by `AREA` and `COUNT`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexFilter {
    Even,
    Odd,
    Exactly(usize),
}

impl VertexFilter {
    pub fn matches(&self, polygon: &Polygon) -> bool {
        match *self {
            VertexFilter::Even => crate::domain::is_even(polygon),
            VertexFilter::Odd => crate::domain::is_odd(polygon),
            VertexFilter::Exactly(n) => polygon.vertex_count() == n,
        }
    }
}

/// Argument of `AREA`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AreaQuery {
    Sum(VertexFilter),
    Mean,
}

/// Quantity reduced by `MAX` and `MIN`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measure {
    Area,
    Vertexes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extremum {
    Max,
    Min,
}

/// A fully parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Area(AreaQuery),
    Extremum(Extremum, Measure),
    Count(VertexFilter),
    /// Count duplicates of the polygon and append that many copies
    Echo(Polygon),
    Intersections(Polygon),
    RightShapes,
}

impl Command {
    /// Whether executing the command can change the working set
    pub fn mutates(&self) -> bool {
        matches!(self, Command::Echo(_))
    }
}

/// Result of a successful command
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reply {
    Area(f64),
    Count(usize),
}

impl Reply {
    /// Render the reply line; areas use `precision` fractional digits
    pub fn render(&self, precision: usize) -> String {
        match *self {
            Reply::Area(value) => format!("{:.*}", precision, value),
            Reply::Count(n) => n.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Point;

    #[test]
    fn test_reply_render() {
        assert_eq!(Reply::Area(4.0).render(1), "4.0");
        assert_eq!(Reply::Area(2.25).render(3), "2.250");
        assert_eq!(Reply::Area(0.4).render(0), "0");
        assert_eq!(Reply::Count(7).render(1), "7");
    }

    #[test]
    fn test_vertex_filter() {
        let tri = Polygon::new(vec![Point::new(0, 0), Point::new(0, 1), Point::new(1, 0)]).unwrap();
        assert!(VertexFilter::Odd.matches(&tri));
        assert!(!VertexFilter::Even.matches(&tri));
        assert!(VertexFilter::Exactly(3).matches(&tri));
        assert!(!VertexFilter::Exactly(4).matches(&tri));
    }
}
