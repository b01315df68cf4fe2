//! Default sizes and settings for the plot visualizer.
//!
//! Sizes are ratios of the view box so handles and labels keep the same
//! on-screen size whatever the plot's extent in meters.

/// Padding around the polygon, as a share of its larger dimension
pub const PADDING_RATIO: f64 = 0.3;
/// Padding added on top of the ratio, in meters
pub const MIN_PADDING: f64 = 10.0;

/// Vertex handle radius, as a share of the view box width
pub const HANDLE_RATIO: f64 = 0.018;
/// Outline stroke width, as a share of the view box width
pub const STROKE_RATIO: f64 = 0.004;
/// Area label font size, as a share of the view box width...
pub const FONT_WIDTH_RATIO: f64 = 0.04;
/// ...capped by this share of the view box height
pub const FONT_HEIGHT_RATIO: f64 = 0.1;
/// Edge label font size relative to the area label
pub const LABEL_FONT_RATIO: f64 = 0.65;

/// Midpoint handle radius relative to the vertex handle
pub const MIDPOINT_RADIUS_RATIO: f64 = 0.8;
/// Edge labels only appear on edges longer than this many handle radii
pub const EDGE_LABEL_MIN_RADII: f64 = 4.0;
/// Edge labels sit this many handle radii off the edge
pub const EDGE_LABEL_OFFSET_RADII: f64 = 0.8;
/// The area label needs more than this many square meters
pub const AREA_LABEL_MIN: f64 = 1.0;

pub const PRESERVE_ASPECT_RATIO: &str = "xMidYMid meet";
pub const LABEL_FONT_FAMILY: &str = "sans-serif";
pub const AREA_FONT_FAMILY: &str = "monospace";
