use crate::domain::{Point, Polygon};

/// True if the angle at `vertex` between its two neighbours is exactly 90°
///
/// A zero-length edge also yields a zero dot product and so counts as a
/// right angle.
pub fn is_right_angle(prev: &Point, vertex: &Point, next: &Point) -> bool {
    let (ax, ay) = vertex.vector_to(prev);
    let (bx, by) = vertex.vector_to(next);
    // each product can reach 2^64, so widen once more
    (ax as i128) * (bx as i128) + (ay as i128) * (by as i128) == 0
}

/// True if any vertex of the polygon (wrap-around included) is a right angle
pub fn has_right_angle(polygon: &Polygon) -> bool {
    let points = polygon.points();
    let n = points.len();
    (0..n).any(|i| {
        let prev = &points[(i + n - 1) % n];
        let next = &points[(i + 1) % n];
        is_right_angle(prev, &points[i], next)
    })
}
