//! The editable point list.
//!
//! Insertion order is winding order and the outline is closed implicitly
//! (the last point connects back to the first). Derived quantities are
//! read-only views that call into [`crate::geometry`] on every access.

use crate::errors::EditError;
use crate::geometry::{self, BoundingBox, Edge};
use crate::types::{Hectares, Point, SquareMeters};

/// How much of a polygon there is to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// No points yet
    Empty,
    /// One or two points: handles only, no filled area
    Degenerate,
    /// Three or more points
    Area,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_points(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Axis-aligned square of the given area; empty for non-positive areas.
    pub fn square(area: SquareMeters) -> Self {
        Self::from_points(geometry::square_from_area(area))
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Point> {
        self.points.get(index).copied()
    }

    pub fn shape(&self) -> Shape {
        match self.points.len() {
            0 => Shape::Empty,
            1 | 2 => Shape::Degenerate,
            _ => Shape::Area,
        }
    }

    /// Move one vertex, leaving every other point untouched.
    pub fn set_point(&mut self, index: usize, to: Point) -> Result<(), EditError> {
        let len = self.points.len();
        let slot = self
            .points
            .get_mut(index)
            .ok_or(EditError::VertexOutOfRange { index, len })?;
        *slot = to;
        Ok(())
    }

    /// Insert the midpoint of edge `(edge, edge + 1 mod n)` right after `edge`.
    ///
    /// Returns the index of the new vertex, which is always `edge + 1`.
    pub fn insert_midpoint(&mut self, edge: usize) -> Result<usize, EditError> {
        let len = self.points.len();
        if len < 2 || edge >= len {
            return Err(EditError::EdgeOutOfRange { index: edge, len });
        }
        let mid = geometry::edge_midpoint(self.points[edge], self.points[(edge + 1) % len]);
        self.points.insert(edge + 1, mid);
        Ok(edge + 1)
    }

    /// Replace the whole outline.
    pub fn replace(&mut self, points: Vec<Point>) {
        self.points = points;
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn area(&self) -> SquareMeters {
        geometry::area(&self.points)
    }

    pub fn hectares(&self) -> Hectares {
        self.area().to_hectares()
    }

    pub fn bounding_box(&self) -> BoundingBox {
        geometry::bounding_box(&self.points)
    }

    pub fn centroid(&self) -> Point {
        geometry::centroid(&self.points)
    }

    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        geometry::edges(&self.points)
    }
}
