//! SVG rendering for the plot visualizer
//!
//! This module is organized into submodules:
//! - `defaults`: sizing ratios and fixed settings
//! - `layout`: view box and sizes derived from the polygon's extent
//! - `scene`: draw commands in paint order, plus hit testing
//! - `view`: screen to model mapping and the SVG-backed editor surface
//! - `svg`: SVG generation

pub mod defaults;
pub mod layout;
pub mod scene;
pub mod svg;
pub mod view;

pub use layout::{Layout, ViewBox};
pub use scene::{DrawItem, EdgeLabel, Scene};
pub use svg::{Palette, to_svg};
pub use view::{SvgSurface, ViewTransform, Viewport};

use crate::app::Theme;
use crate::errors::RenderError;
use crate::locale::Language;
use crate::log;
use crate::polygon::Polygon;

/// Options for rendering a plot to SVG
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    /// Language of the placeholder, area label and tooltip
    pub language: Language,
    pub theme: Theme,
    /// Pixel width of the `<svg>` element; omitted when `None`
    pub width: Option<f64>,
    /// Pixel height of the `<svg>` element; omitted when `None`
    pub height: Option<f64>,
    /// Emit `class` hooks (`vertex vertex-{i}`, `midpoint midpoint-{i}`, ...)
    /// so a host can route pointer-downs to handles
    pub css_classes: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            language: Language::default(),
            theme: Theme::default(),
            width: None,
            height: None,
            css_classes: true,
        }
    }
}

impl RenderOptions {
    fn check_viewport(&self) -> Result<(), RenderError> {
        let usable = |v: Option<f64>| v.is_none_or(|v| v.is_finite() && v > 0.0);
        if usable(self.width) && usable(self.height) {
            return Ok(());
        }
        Err(RenderError::InvalidViewport {
            width: self.width.unwrap_or(0.0),
            height: self.height.unwrap_or(0.0),
        })
    }
}

/// Render a polygon to an SVG document.
pub fn render(polygon: &Polygon, options: &RenderOptions) -> Result<String, RenderError> {
    options.check_viewport()?;
    if !polygon.bounding_box().is_finite() {
        return Err(RenderError::InvalidBounds);
    }

    let scene = Scene::build(polygon, options.language);
    log::debug!(
        view_box = %scene.layout.view_box,
        handle_radius = scene.layout.handle_radius,
        "rendering plot"
    );
    to_svg(&scene, options)
}
