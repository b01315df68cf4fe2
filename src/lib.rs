//! Land-area and payment-fee calculators.
//!
//! The centerpiece is the hectare visualizer: an editable polygon whose area
//! (shoelace formula) is kept in sync with a hectare text field, rendered as
//! an SVG with drag handles on every vertex and insertion handles on every
//! edge midpoint. Next to it live a PayPal fee calculator and the routing and
//! chrome of the small site that hosts both.
//!
//! ```rust
//! let svg = plotcalc::render_hectares("0.25", &plotcalc::RenderOptions::default()).unwrap();
//! assert!(svg.contains("2500 m²"));
//! ```

pub mod app;
pub mod editor;
pub mod errors;
pub mod geometry;
pub mod locale;
pub mod log;
pub mod paypal;
pub mod polygon;
pub mod render;
pub mod types;

pub use app::{Route, Theme};
pub use editor::{Editor, FieldInput, Handle, HectareField, PointerCapture, Readout, Surface};
pub use errors::{EditError, RenderError};
pub use locale::Language;
pub use paypal::{FeeSchedule, PayPalCalculator};
pub use polygon::{Polygon, Shape};
pub use render::{RenderOptions, Scene, SvgSurface, Viewport, render};
pub use types::{Hectares, Meters, Point, SquareMeters};

use editor::parse_hectares;

/// Render the square for a typed hectare value to SVG.
///
/// Text that does not parse gives the empty-plot placeholder, the same as the
/// interactive editor.
pub fn render_hectares(input: &str, options: &RenderOptions) -> Result<String, miette::Report> {
    let polygon = match parse_hectares(input) {
        FieldInput::Hectares(hectares) => Polygon::square(hectares.to_square_meters()),
        FieldInput::Empty | FieldInput::Invalid => Polygon::new(),
    };
    Ok(render(&polygon, options)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_hectares_draws_a_square() {
        let svg = render_hectares("1", &RenderOptions::default()).unwrap();
        assert!(svg.contains("vertex-3"));
        assert!(!svg.contains("vertex-4"));
    }

    #[test]
    fn render_hectares_placeholder_for_garbage() {
        let options = RenderOptions {
            language: Language::En,
            ..Default::default()
        };
        let svg = render_hectares("abc", &options).unwrap();
        assert!(svg.contains("Enter a value to visualize the land"));
        assert!(!svg.contains("circle"));
    }
}
