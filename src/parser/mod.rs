pub mod loader;
pub mod record;

pub use loader::{LoadReport, RejectedRecord, load_polygons};
pub use record::{parse_point, parse_polygon, parse_record};
