//! Dynamic sizes derived from the polygon's bounding box.

use std::fmt;

use glam::DVec2;

use crate::geometry::BoundingBox;
use crate::polygon::Polygon;
use crate::types::Meters;

use super::defaults;
use super::svg::fmt_num;

/// The model-space rectangle shown by the SVG (`viewBox`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    pub min: DVec2,
    pub size: DVec2,
}

impl ViewBox {
    pub fn center(&self) -> DVec2 {
        self.min + self.size * 0.5
    }

    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.size.is_finite() && self.size.x > 0.0 && self.size.y > 0.0
    }
}

impl fmt::Display for ViewBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            fmt_num(self.min.x),
            fmt_num(self.min.y),
            fmt_num(self.size.x),
            fmt_num(self.size.y)
        )
    }
}

/// View box plus every size that scales with it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub view_box: ViewBox,
    pub handle_radius: f64,
    pub stroke_width: f64,
    pub font_size: f64,
    pub label_font_size: f64,
}

impl Layout {
    pub fn for_polygon(polygon: &Polygon) -> Self {
        Self::for_bounds(&polygon.bounding_box())
    }

    pub fn for_bounds(bounds: &BoundingBox) -> Self {
        let size = bounds.size();
        let padding = size.x.max(size.y) * defaults::PADDING_RATIO + defaults::MIN_PADDING;
        let view_box = ViewBox {
            min: bounds.min - DVec2::splat(padding / 2.0),
            size: size + DVec2::splat(padding),
        };
        let font_size = (view_box.size.x * defaults::FONT_WIDTH_RATIO)
            .min(view_box.size.y * defaults::FONT_HEIGHT_RATIO);
        Self {
            view_box,
            handle_radius: view_box.size.x * defaults::HANDLE_RATIO,
            stroke_width: view_box.size.x * defaults::STROKE_RATIO,
            font_size,
            label_font_size: font_size * defaults::LABEL_FONT_RATIO,
        }
    }

    pub fn midpoint_radius(&self) -> f64 {
        self.handle_radius * defaults::MIDPOINT_RADIUS_RATIO
    }

    /// Vertical offset (`dy`) of an edge label from its edge.
    pub fn edge_label_offset(&self) -> f64 {
        -self.handle_radius * defaults::EDGE_LABEL_OFFSET_RADII
    }

    /// Whether an edge is long enough to carry a length label.
    pub fn fits_edge_label(&self, length: Meters) -> bool {
        length.raw() > self.handle_radius * defaults::EDGE_LABEL_MIN_RADII
    }

    /// Where to put text when there is nothing to draw.
    pub fn placeholder_anchor(&self) -> DVec2 {
        self.view_box.center()
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::for_bounds(&BoundingBox::default())
    }
}
