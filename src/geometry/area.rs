use geo::{Area, Coord, LineString};

use crate::domain::Polygon;

/// Convert a polygon into a `geo` polygon with f64 coordinates
///
/// `geo` closes the exterior ring itself, so the wrap-around edge from the
/// last vertex back to the first is included.
pub fn to_geo(polygon: &Polygon) -> geo::Polygon<f64> {
    let ring: LineString<f64> = polygon
        .points()
        .iter()
        .map(|p| Coord {
            x: p.x as f64,
            y: p.y as f64,
        })
        .collect();
    geo::Polygon::new(ring, Vec::new())
}

/// Shoelace area of a polygon, always non-negative
pub fn area(polygon: &Polygon) -> f64 {
    to_geo(polygon).signed_area().abs()
}

/// Sum of areas of the polygons matching `filter`
pub fn area_sum<'a, I, F>(polygons: I, filter: F) -> f64
where
    I: IntoIterator<Item = &'a Polygon>,
    F: Fn(&Polygon) -> bool,
{
    polygons
        .into_iter()
        .filter(|p| filter(p))
        .map(area)
        .sum()
}
