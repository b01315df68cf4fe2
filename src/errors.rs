//! Error types with diagnostics using miette
//!
//! Invalid user input never reaches these types: the editor recovers from it
//! silently (see `editor::field`). What remains are contract violations at the
//! API boundary and rendering failures.

use miette::Diagnostic;
use thiserror::Error;

// ============================================================================
// Edit Errors
// ============================================================================

/// Errors raised by the polygon editor for requests that cannot apply
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum EditError {
    #[error("no vertex {index} in a polygon of {len} points")]
    #[diagnostic(code(plotcalc::edit::vertex_out_of_range))]
    VertexOutOfRange { index: usize, len: usize },

    #[error("no edge {index} in a polygon of {len} points")]
    #[diagnostic(
        code(plotcalc::edit::edge_out_of_range),
        help("midpoint handles exist only for polygons with at least 2 points")
    )]
    EdgeOutOfRange { index: usize, len: usize },

    #[error("vertex {index} is already being dragged")]
    #[diagnostic(
        code(plotcalc::edit::already_dragging),
        help("release the pointer before starting another drag")
    )]
    AlreadyDragging { index: usize },
}

// ============================================================================
// Render Errors
// ============================================================================

/// Errors that occur during rendering
#[derive(Error, Diagnostic, Debug)]
pub enum RenderError {
    #[error("infinite or NaN in bounds")]
    #[diagnostic(
        code(plotcalc::render::invalid_bounds),
        help("a vertex was moved to a non-finite coordinate")
    )]
    InvalidBounds,

    #[error("invalid viewport: {width}x{height}")]
    #[diagnostic(code(plotcalc::render::invalid_viewport))]
    InvalidViewport { width: f64, height: f64 },

    #[error("XML serialization error: {message}")]
    #[diagnostic(code(plotcalc::render::serialize))]
    Serialize { message: String },
}
