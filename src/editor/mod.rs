//! Interactive polygon editor
//!
//! The editor owns the polygon, the hectare text field and the drag state.
//! The host feeds it pointer and keyboard events; it never reads input on
//! its own. State machine:
//!
//! ```text
//!            pointer_down(Vertex i)          pointer_move(p)
//!   Idle ──────────────────────────▶ Dragging(i) ◀──────┐
//!    ▲   pointer_down(Midpoint i)        │  └────────────┘
//!    │   (inserts, drags i + 1)          │
//!    └───────────── pointer_up ──────────┘
//! ```
//!
//! Global move/up listeners are modelled by [`PointerCapture`]: the surface
//! hands one out when a drag starts and it is kept inside the `Dragging`
//! state, so ending the drag or dropping the editor releases it.

pub mod field;
pub mod readout;

pub use field::{FieldInput, FieldState, HectareField, parse_hectares};
pub use readout::Readout;

use std::fmt;

use glam::DVec2;

use crate::errors::EditError;
use crate::locale::Language;
use crate::log;
use crate::polygon::Polygon;
use crate::types::Point;

/// An interactive marker on the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handle {
    /// Vertex handle `i`
    Vertex(usize),
    /// Insertion handle at the midpoint of edge `(i, i + 1)`
    Midpoint(usize),
}

/// Registration of global pointer listeners, released exactly once on drop.
pub struct PointerCapture {
    release: Option<Box<dyn FnOnce()>>,
}

impl PointerCapture {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A capture with nothing to release.
    pub fn detached() -> Self {
        Self { release: None }
    }
}

impl Drop for PointerCapture {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl fmt::Debug for PointerCapture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointerCapture")
            .field("armed", &self.release.is_some())
            .finish()
    }
}

/// The rendering surface as seen by the editor.
pub trait Surface {
    /// Map a device/screen position into model space through the inverse of
    /// the current view transform. `None` when no transform is available.
    fn to_model(&self, screen: Point) -> Option<Point>;

    /// Start listening for pointer moves and releases anywhere.
    fn capture_pointer(&mut self) -> PointerCapture;

    /// Called after every polygon change so the surface can refresh its view.
    fn polygon_changed(&mut self, _polygon: &Polygon) {}
}

#[derive(Debug, Default)]
enum Drag {
    #[default]
    Idle,
    Dragging {
        index: usize,
        _capture: PointerCapture,
    },
}

pub struct Editor<S: Surface> {
    polygon: Polygon,
    field: HectareField,
    language: Language,
    drag: Drag,
    surface: S,
}

impl<S: Surface> fmt::Debug for Editor<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Editor")
            .field("polygon", &self.polygon)
            .field("field", &self.field)
            .field("language", &self.language)
            .field("drag", &self.drag)
            .finish_non_exhaustive()
    }
}

impl<S: Surface> Editor<S> {
    /// A new editor seeded with one hectare, in the default language.
    pub fn new(surface: S) -> Self {
        Self::with_language(surface, Language::default())
    }

    pub fn with_language(surface: S, language: Language) -> Self {
        let mut editor = Self {
            polygon: Polygon::new(),
            field: HectareField::new(""),
            language,
            drag: Drag::Idle,
            surface,
        };
        editor.input("1");
        editor
    }

    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    pub fn field(&self) -> &HectareField {
        &self.field
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Index of the vertex being dragged, if any.
    pub fn drag_target(&self) -> Option<usize> {
        match self.drag {
            Drag::Idle => None,
            Drag::Dragging { index, .. } => Some(index),
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_target().is_some()
    }

    /// Info-card values for the current polygon.
    pub fn readout(&self) -> Readout {
        Readout::new(&self.polygon, self.language)
    }

    /// Begin a drag on a handle. Returns the index of the dragged vertex.
    ///
    /// A midpoint handle first inserts the edge's midpoint after vertex `i`
    /// and then drags the new vertex `i + 1`.
    pub fn pointer_down(&mut self, handle: Handle) -> Result<usize, EditError> {
        if let Some(index) = self.drag_target() {
            return Err(EditError::AlreadyDragging { index });
        }

        let index = match handle {
            Handle::Vertex(index) => {
                let len = self.polygon.len();
                if index >= len {
                    return Err(EditError::VertexOutOfRange { index, len });
                }
                index
            }
            Handle::Midpoint(edge) => {
                let index = self.polygon.insert_midpoint(edge)?;
                log::debug!(edge, index, "inserted midpoint vertex");
                self.polygon_changed();
                index
            }
        };

        let capture = self.surface.capture_pointer();
        self.drag = Drag::Dragging {
            index,
            _capture: capture,
        };
        log::debug!(index, "drag started");
        Ok(index)
    }

    /// Move the dragged vertex to the pointer. Ignored while idle.
    pub fn pointer_move(&mut self, screen: Point) {
        let Some(index) = self.drag_target() else {
            return;
        };

        let model = self.surface.to_model(screen).unwrap_or_else(|| {
            log::warn!("view transform unavailable, pointer mapped to origin");
            DVec2::ZERO
        });
        log::trace!(index, x = model.x, y = model.y, "drag move");

        if let Err(_err) = self.polygon.set_point(index, model) {
            log::warn!(error = %_err, "drag target vanished, ending drag");
            self.drag = Drag::Idle;
            return;
        }
        self.polygon_changed();
    }

    /// End the drag wherever the pointer is. Returns the released vertex.
    pub fn pointer_up(&mut self) -> Option<usize> {
        let released = self.drag_target();
        self.drag = Drag::Idle;
        if let Some(_index) = released {
            log::debug!(index = _index, "drag ended");
        }
        released
    }

    /// Text typed into the hectare field.
    ///
    /// A valid value replaces the polygon with a fresh square of that area,
    /// discarding any custom shape; empty or invalid text clears it.
    pub fn input(&mut self, text: impl Into<String>) -> FieldInput {
        // The drag target would no longer refer to the same vertex
        self.pointer_up();

        let request = self.field.input(text);
        match request {
            FieldInput::Hectares(hectares) => {
                self.polygon = Polygon::square(hectares.to_square_meters());
            }
            FieldInput::Empty | FieldInput::Invalid => self.polygon.clear(),
        }
        self.polygon_changed();
        request
    }

    pub fn focus_field(&mut self) {
        self.field.focus();
    }

    pub fn blur_field(&mut self) {
        self.field.blur();
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        self.field.resync(&self.polygon, self.language);
    }

    fn polygon_changed(&mut self) {
        self.surface.polygon_changed(&self.polygon);
        self.field.resync(&self.polygon, self.language);
    }
}
