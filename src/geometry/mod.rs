pub mod angle;
pub mod area;
pub mod bounds;

pub use angle::has_right_angle;
pub use area::{area, area_sum};
pub use bounds::Bounds;
