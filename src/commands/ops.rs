//! Aggregate operations over the working set.
//!
//! Everything here is a pure function of `&[Polygon]` except [`echo`], which
//! appends to the set it is given.

use super::{Extremum, Measure, VertexFilter};
use crate::domain::Polygon;
use crate::error::CommandError;
use crate::geometry::{Bounds, area, area_sum, has_right_angle};

pub fn area_filtered(polygons: &[Polygon], filter: VertexFilter) -> f64 {
    area_sum(polygons, |p| filter.matches(p))
}

/// Total area divided by polygon count
pub fn area_mean(polygons: &[Polygon]) -> Result<f64, CommandError> {
    if polygons.is_empty() {
        return Err(empty_set("AREA MEAN"));
    }
    Ok(area_sum(polygons, |_| true) / polygons.len() as f64)
}

pub fn max_area(polygons: &[Polygon]) -> Result<f64, CommandError> {
    polygons
        .iter()
        .map(area)
        .reduce(f64::max)
        .ok_or_else(|| empty_set("MAX AREA"))
}

pub fn min_area(polygons: &[Polygon]) -> Result<f64, CommandError> {
    polygons
        .iter()
        .map(area)
        .reduce(f64::min)
        .ok_or_else(|| empty_set("MIN AREA"))
}

pub fn max_vertexes(polygons: &[Polygon]) -> Result<usize, CommandError> {
    polygons
        .iter()
        .map(Polygon::vertex_count)
        .max()
        .ok_or_else(|| empty_set("MAX VERTEXES"))
}

pub fn min_vertexes(polygons: &[Polygon]) -> Result<usize, CommandError> {
    polygons
        .iter()
        .map(Polygon::vertex_count)
        .min()
        .ok_or_else(|| empty_set("MIN VERTEXES"))
}

/// Area extremum as f64, vertex extremum as a count
pub fn extremum(
    polygons: &[Polygon],
    which: Extremum,
    measure: Measure,
) -> Result<Extremal, CommandError> {
    Ok(match (which, measure) {
        (Extremum::Max, Measure::Area) => Extremal::Area(max_area(polygons)?),
        (Extremum::Min, Measure::Area) => Extremal::Area(min_area(polygons)?),
        (Extremum::Max, Measure::Vertexes) => Extremal::Vertexes(max_vertexes(polygons)?),
        (Extremum::Min, Measure::Vertexes) => Extremal::Vertexes(min_vertexes(polygons)?),
    })
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Extremal {
    Area(f64),
    Vertexes(usize),
}

pub fn count_filtered(polygons: &[Polygon], filter: VertexFilter) -> usize {
    polygons.iter().filter(|p| filter.matches(p)).count()
}

/// Count exact duplicates of `target` and append that many copies
///
/// Returns the number of duplicates found, which is also how much the set
/// grew.
pub fn echo(polygons: &mut Vec<Polygon>, target: &Polygon) -> usize {
    let copies: Vec<Polygon> = polygons.iter().filter(|p| *p == target).cloned().collect();
    let found = copies.len();
    polygons.extend(copies);
    found
}

/// Number of polygons whose bounding box overlaps the bounding box of
/// `target`
///
/// This is a bounding-box approximation, not an exact polygon intersection
/// test.
pub fn intersections(polygons: &[Polygon], target: &Polygon) -> usize {
    let target_bounds = Bounds::of_polygon(target);
    polygons
        .iter()
        .filter(|p| Bounds::of_polygon(p).overlaps(&target_bounds))
        .count()
}

pub fn right_shapes(polygons: &[Polygon]) -> usize {
    polygons.iter().filter(|p| has_right_angle(p)).count()
}

fn empty_set(command: &str) -> CommandError {
    CommandError::InvalidArgument(format!("{} needs at least one polygon", command))
}
