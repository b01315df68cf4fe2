//! Screen <-> model mapping for an SVG shown with `xMidYMid meet`.

use std::cell::Cell;
use std::rc::Rc;

use glam::DVec2;

use crate::editor::{PointerCapture, Surface};
use crate::log;
use crate::polygon::Polygon;
use crate::types::Point;

use super::layout::{Layout, ViewBox};

/// On-screen rectangle the SVG element occupies, in device pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub origin: DVec2,
    pub size: DVec2,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            origin: DVec2::ZERO,
            size: DVec2::new(width, height),
        }
    }

    pub fn at(mut self, origin: DVec2) -> Self {
        self.origin = origin;
        self
    }

    pub fn is_valid(&self) -> bool {
        self.origin.is_finite() && self.size.is_finite() && self.size.x > 0.0 && self.size.y > 0.0
    }
}

/// Uniform scale plus centering offset from a view box to a viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    view_min: DVec2,
    scale: f64,
    offset: DVec2,
}

impl ViewTransform {
    /// `None` when either rectangle is empty or not finite.
    pub fn new(viewport: Viewport, view_box: ViewBox) -> Option<Self> {
        if !viewport.is_valid() || !view_box.is_valid() {
            return None;
        }
        let scale = (viewport.size.x / view_box.size.x).min(viewport.size.y / view_box.size.y);
        let slack = viewport.size - view_box.size * scale;
        Some(Self {
            view_min: view_box.min,
            scale,
            offset: viewport.origin + slack * 0.5,
        })
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn to_screen(&self, model: Point) -> DVec2 {
        self.offset + (model - self.view_min) * self.scale
    }

    pub fn to_model(&self, screen: DVec2) -> Point {
        (screen - self.offset) / self.scale + self.view_min
    }
}

/// A [`Surface`] for an SVG element of a known on-screen size.
///
/// The view box follows the polygon, so the transform is rebuilt on every
/// change. Captures are counted; the count drops back when they are released.
#[derive(Debug)]
pub struct SvgSurface {
    viewport: Viewport,
    view: Option<ViewTransform>,
    live: Rc<Cell<usize>>,
}

impl SvgSurface {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            view: None,
            live: Rc::new(Cell::new(0)),
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// The element was resized or moved.
    pub fn set_viewport(&mut self, viewport: Viewport, polygon: &Polygon) {
        self.viewport = viewport;
        self.refresh(polygon);
    }

    pub fn view(&self) -> Option<ViewTransform> {
        self.view
    }

    /// Whether global pointer listeners are currently registered.
    pub fn is_capturing(&self) -> bool {
        self.live.get() > 0
    }

    fn refresh(&mut self, polygon: &Polygon) {
        let layout = Layout::for_polygon(polygon);
        self.view = ViewTransform::new(self.viewport, layout.view_box);
        if self.view.is_none() {
            log::warn!(
                width = self.viewport.size.x,
                height = self.viewport.size.y,
                "no usable view transform"
            );
        }
    }
}

impl Surface for SvgSurface {
    fn to_model(&self, screen: Point) -> Option<Point> {
        self.view.map(|view| view.to_model(screen))
    }

    fn capture_pointer(&mut self) -> PointerCapture {
        self.live.set(self.live.get() + 1);
        let live = Rc::clone(&self.live);
        PointerCapture::new(move || live.set(live.get().saturating_sub(1)))
    }

    fn polygon_changed(&mut self, polygon: &Polygon) {
        self.refresh(polygon);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::{Editor, Handle};
    use crate::types::SquareMeters;
    use glam::dvec2;

    fn one_hectare_box() -> ViewBox {
        Layout::for_polygon(&Polygon::square(SquareMeters(10_000.0))).view_box
    }

    #[test]
    fn square_viewport_maps_corners() {
        // view box -20 -20 140 140 into 280 x 280 px: scale 2
        let view = ViewTransform::new(Viewport::new(280.0, 280.0), one_hectare_box()).unwrap();
        assert_eq!(view.scale(), 2.0);
        assert_eq!(view.to_screen(dvec2(-20.0, -20.0)), dvec2(0.0, 0.0));
        assert_eq!(view.to_screen(dvec2(0.0, 0.0)), dvec2(40.0, 40.0));
        assert_eq!(view.to_model(dvec2(240.0, 240.0)), dvec2(100.0, 100.0));
    }

    #[test]
    fn wide_viewport_centers_horizontally() {
        // height limits: scale 2, 280 px of content centered in 480 px
        let view = ViewTransform::new(Viewport::new(480.0, 280.0), one_hectare_box()).unwrap();
        assert_eq!(view.scale(), 2.0);
        assert_eq!(view.to_screen(dvec2(-20.0, -20.0)), dvec2(100.0, 0.0));
        assert_eq!(view.to_model(dvec2(140.0, 40.0)), dvec2(0.0, 0.0));
    }

    #[test]
    fn viewport_origin_is_subtracted() {
        let viewport = Viewport::new(140.0, 140.0).at(dvec2(10.0, 30.0));
        let view = ViewTransform::new(viewport, one_hectare_box()).unwrap();
        assert_eq!(view.to_model(dvec2(30.0, 50.0)), dvec2(0.0, 0.0));
    }

    #[test]
    fn degenerate_viewport_has_no_transform() {
        assert!(ViewTransform::new(Viewport::new(0.0, 100.0), one_hectare_box()).is_none());
        assert!(ViewTransform::new(Viewport::new(f64::NAN, 100.0), one_hectare_box()).is_none());
    }

    #[test]
    fn editor_drags_through_the_svg_surface() {
        let mut ed = Editor::new(SvgSurface::new(Viewport::new(280.0, 280.0)));
        assert!(ed.surface().view().is_some());

        assert_eq!(ed.pointer_down(Handle::Vertex(2)), Ok(2));
        assert!(ed.surface().is_capturing());

        // (240, 240) px is (100, 100) m under the current view box
        ed.pointer_move(dvec2(240.0, 240.0));
        assert_eq!(ed.polygon().get(2), Some(dvec2(100.0, 100.0)));

        ed.pointer_up();
        assert!(!ed.surface().is_capturing());
    }

    #[test]
    fn unmount_mid_drag_releases_capture() {
        let surface = SvgSurface::new(Viewport::new(280.0, 280.0));
        let live = Rc::clone(&surface.live);
        let mut ed = Editor::new(surface);
        ed.pointer_down(Handle::Midpoint(0)).unwrap();
        assert_eq!(live.get(), 1);
        drop(ed);
        assert_eq!(live.get(), 0);
    }

    #[test]
    fn zero_sized_surface_drags_to_origin() {
        let mut ed = Editor::new(SvgSurface::new(Viewport::new(0.0, 0.0)));
        assert!(ed.surface().view().is_none());
        ed.pointer_down(Handle::Vertex(1)).unwrap();
        ed.pointer_move(dvec2(500.0, 500.0));
        assert_eq!(ed.polygon().get(1), Some(DVec2::ZERO));
    }
}
