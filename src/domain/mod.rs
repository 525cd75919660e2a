pub mod point;
pub mod polygon;

pub use point::Point;
pub use polygon::{MIN_VERTICES, Polygon, is_even, is_odd};
