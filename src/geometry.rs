//! Geometry engine: pure functions over a polygon's point list.
//!
//! Nothing here stores state. Every derived quantity (area, bounds, centroid,
//! edge metrics) is recomputed from the slice it is given, so callers can
//! never observe a stale value after a mutation.

use glam::{DVec2, dvec2};

use crate::types::{Angle, Meters, Point, SquareMeters};

/// Axis-aligned bounding box of a polygon.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingBox {
    pub min: Point,
    pub max: Point,
}

impl BoundingBox {
    pub fn width(&self) -> Meters {
        Meters(self.max.x - self.min.x)
    }

    pub fn height(&self) -> Meters {
        Meters(self.max.y - self.min.y)
    }

    pub fn size(&self) -> DVec2 {
        self.max - self.min
    }

    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }
}

/// One cyclic edge `start -> end` of a polygon, with its derived metrics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// Index of the start vertex; the end vertex is `(index + 1) % n`.
    pub index: usize,
    pub start: Point,
    pub end: Point,
    pub length: Meters,
    pub midpoint: Point,
    pub angle: Angle,
}

impl Edge {
    fn new(index: usize, start: Point, end: Point) -> Self {
        Self {
            index,
            start,
            end,
            length: edge_length(start, end),
            midpoint: edge_midpoint(start, end),
            angle: edge_angle_degrees(start, end),
        }
    }
}

/// Twice the signed area; positive for counter-clockwise winding in a y-up frame.
fn shoelace_sum(points: &[Point]) -> f64 {
    let n = points.len();
    (0..n)
        .map(|i| {
            let p = points[i];
            let q = points[(i + 1) % n];
            p.x * q.y - q.x * p.y
        })
        .sum()
}

/// Signed area via the shoelace formula. Zero for fewer than 3 points.
pub fn signed_area(points: &[Point]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    shoelace_sum(points) / 2.0
}

/// Absolute polygon area via the shoelace formula.
///
/// Self-intersecting outlines keep the formula's behavior: lobes with
/// opposite winding cancel each other.
pub fn area(points: &[Point]) -> SquareMeters {
    SquareMeters(signed_area(points).abs())
}

/// Componentwise min/max over all vertices. All zeros for the empty polygon.
pub fn bounding_box(points: &[Point]) -> BoundingBox {
    let Some(first) = points.first() else {
        return BoundingBox::default();
    };
    points.iter().skip(1).fold(
        BoundingBox {
            min: *first,
            max: *first,
        },
        |bb, p| BoundingBox {
            min: bb.min.min(*p),
            max: bb.max.max(*p),
        },
    )
}

/// Arithmetic mean of the vertices (not the area-weighted centroid).
/// The origin for the empty polygon.
pub fn centroid(points: &[Point]) -> Point {
    if points.is_empty() {
        return DVec2::ZERO;
    }
    points.iter().copied().sum::<DVec2>() / points.len() as f64
}

pub fn edge_length(p1: Point, p2: Point) -> Meters {
    Meters(p1.distance(p2))
}

pub fn edge_midpoint(p1: Point, p2: Point) -> Point {
    (p1 + p2) * 0.5
}

/// Orientation of the edge from horizontal, in degrees, kept within (-90, 90]
/// so a label rotated by it never reads upside-down.
pub fn edge_angle_degrees(p1: Point, p2: Point) -> Angle {
    let delta = p2 - p1;
    let raw = delta.y.atan2(delta.x).to_degrees();
    let upright = if raw > 90.0 {
        raw - 180.0
    } else if raw <= -90.0 {
        raw + 180.0
    } else {
        raw
    };
    Angle(upright)
}

/// Axis-aligned square of the given area, anchored at the origin.
/// Empty when the area is not positive.
pub fn square_from_area(area: SquareMeters) -> Vec<Point> {
    // NaN fails this comparison too
    if !(area.0 > 0.0) {
        return Vec::new();
    }
    let side = area.side().raw();
    vec![
        dvec2(0.0, 0.0),
        dvec2(side, 0.0),
        dvec2(side, side),
        dvec2(0.0, side),
    ]
}

/// Every cyclic edge `(i, (i + 1) % n)`. None for fewer than 2 points.
pub fn edges(points: &[Point]) -> impl Iterator<Item = Edge> + '_ {
    let n = points.len();
    let count = if n < 2 { 0 } else { n };
    (0..count).map(move |i| Edge::new(i, points[i], points[(i + 1) % n]))
}
