//! Draw commands for one frame of the plot visualizer.

use crate::editor::Handle;
use crate::locale::{Language, round_half_away};
use crate::log;
use crate::polygon::Polygon;
use crate::types::{Angle, Point};

use super::defaults;
use super::layout::Layout;

/// Length label of one edge.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeLabel {
    /// Anchor, the edge midpoint
    pub at: Point,
    /// Rotation so the text follows the edge, never upside down
    pub angle: Angle,
    /// Offset off the edge along the rotated y axis
    pub offset: f64,
    pub text: String,
}

/// One drawable element, in paint order.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawItem {
    /// Filled outline of a polygon with at least three points
    Outline { points: Vec<Point> },
    /// Insertion handle of edge `(index, index + 1)`, with its length label
    /// when the edge is long enough
    Edge {
        index: usize,
        midpoint: Point,
        label: Option<EdgeLabel>,
    },
    /// Drag handle of a vertex
    Vertex { index: usize, at: Point },
    /// Total area, centered in the shape
    AreaLabel { at: Point, text: String },
    /// Shown instead of everything else for an empty polygon
    Placeholder { at: Point, text: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub layout: Layout,
    pub items: Vec<DrawItem>,
    /// Hover text for the whole visualizer
    pub tooltip: String,
}

impl Scene {
    pub fn build(polygon: &Polygon, language: Language) -> Self {
        let layout = Layout::for_polygon(polygon);
        let strings = language.strings();
        let tooltip = format!(
            "{} {}",
            language.format_number(polygon.hectares().raw(), 4),
            strings.hectares_unit
        );

        if polygon.is_empty() {
            return Self {
                layout,
                items: vec![DrawItem::Placeholder {
                    at: layout.placeholder_anchor(),
                    text: strings.visualizer_placeholder.to_string(),
                }],
                tooltip,
            };
        }

        let points = polygon.points();
        let mut items = Vec::with_capacity(points.len() * 2 + 2);

        if points.len() > 2 {
            items.push(DrawItem::Outline {
                points: points.to_vec(),
            });
        }

        for edge in polygon.edges() {
            let label = layout.fits_edge_label(edge.length).then(|| EdgeLabel {
                at: edge.midpoint,
                angle: edge.angle,
                offset: layout.edge_label_offset(),
                text: format!("{:.1}m", round_half_away(edge.length.raw(), 1)),
            });
            items.push(DrawItem::Edge {
                index: edge.index,
                midpoint: edge.midpoint,
                label,
            });
        }

        items.extend(
            points
                .iter()
                .enumerate()
                .map(|(index, &at)| DrawItem::Vertex { index, at }),
        );

        let area = polygon.area().raw();
        if area > defaults::AREA_LABEL_MIN && points.len() > 2 {
            items.push(DrawItem::AreaLabel {
                at: polygon.centroid(),
                text: format!("{} m²", language.format_number(area, 0)),
            });
        }

        log::debug!(points = points.len(), items = items.len(), "scene built");
        Self {
            layout,
            items,
            tooltip,
        }
    }

    /// The topmost handle under a model-space point.
    ///
    /// Vertices are painted above midpoints, and later vertices above
    /// earlier ones, so they win in that order.
    pub fn hit_test(&self, at: Point) -> Option<Handle> {
        let vertex_r = self.layout.handle_radius;
        let midpoint_r = self.layout.midpoint_radius();

        let vertex = self.items.iter().rev().find_map(|item| match item {
            DrawItem::Vertex { index, at: center } if center.distance(at) <= vertex_r => {
                Some(Handle::Vertex(*index))
            }
            _ => None,
        });
        vertex.or_else(|| {
            self.items.iter().rev().find_map(|item| match item {
                DrawItem::Edge {
                    index, midpoint, ..
                } if midpoint.distance(at) <= midpoint_r => Some(Handle::Midpoint(*index)),
                _ => None,
            })
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.items
            .iter()
            .filter(|item| matches!(item, DrawItem::Vertex { .. }))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SquareMeters;
    use glam::dvec2;

    fn labels(scene: &Scene) -> Vec<String> {
        scene
            .items
            .iter()
            .filter_map(|item| match item {
                DrawItem::Edge {
                    label: Some(label), ..
                } => Some(label.text.clone()),
                DrawItem::AreaLabel { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn one_hectare_scene() {
        let scene = Scene::build(&Polygon::square(SquareMeters(10_000.0)), Language::En);
        assert!(matches!(scene.items[0], DrawItem::Outline { ref points } if points.len() == 4));
        assert_eq!(scene.vertex_count(), 4);
        insta::assert_debug_snapshot!(labels(&scene), @r#"
        [
            "100.0m",
            "100.0m",
            "100.0m",
            "100.0m",
            "10,000 m²",
        ]
        "#);
        assert_eq!(scene.tooltip, "1 hectares");
    }

    #[test]
    fn edge_lengths_round_half_up() {
        let rect = Polygon::from_points(vec![
            dvec2(0.0, 0.0),
            dvec2(100.25, 0.0),
            dvec2(100.25, 100.0),
            dvec2(0.0, 100.0),
        ]);
        let scene = Scene::build(&rect, Language::En);
        assert_eq!(labels(&scene)[..2], ["100.3m", "100.0m"]);
    }

    #[test]
    fn paint_order_is_outline_edges_vertices_area() {
        let scene = Scene::build(&Polygon::square(SquareMeters(10_000.0)), Language::Es);
        let kinds: Vec<&str> = scene
            .items
            .iter()
            .map(|item| match item {
                DrawItem::Outline { .. } => "outline",
                DrawItem::Edge { .. } => "edge",
                DrawItem::Vertex { .. } => "vertex",
                DrawItem::AreaLabel { .. } => "area",
                DrawItem::Placeholder { .. } => "placeholder",
            })
            .collect();
        assert_eq!(
            kinds,
            [
                "outline", "edge", "edge", "edge", "edge", "vertex", "vertex", "vertex",
                "vertex", "area"
            ]
        );
    }

    #[test]
    fn edge_labels_follow_the_edge_upright() {
        let scene = Scene::build(&Polygon::square(SquareMeters(10_000.0)), Language::En);
        let angles: Vec<f64> = scene
            .items
            .iter()
            .filter_map(|item| match item {
                DrawItem::Edge {
                    label: Some(label), ..
                } => Some(label.angle.raw()),
                _ => None,
            })
            .collect();
        // right, up, left (flipped), down (flipped)
        assert_eq!(angles, [0.0, 90.0, 0.0, 90.0]);
    }

    #[test]
    fn two_points_have_edges_but_no_outline_or_area() {
        let line = Polygon::from_points(vec![dvec2(0.0, 0.0), dvec2(50.0, 0.0)]);
        let scene = Scene::build(&line, Language::En);
        assert!(!scene.items.iter().any(|i| matches!(i, DrawItem::Outline { .. })));
        assert!(!scene.items.iter().any(|i| matches!(i, DrawItem::AreaLabel { .. })));
        let edges = scene
            .items
            .iter()
            .filter(|i| matches!(i, DrawItem::Edge { .. }))
            .count();
        assert_eq!(edges, 2);
        assert_eq!(scene.vertex_count(), 2);
    }

    #[test]
    fn single_point_is_just_a_handle() {
        let dot = Polygon::from_points(vec![dvec2(3.0, 4.0)]);
        let scene = Scene::build(&dot, Language::En);
        assert_eq!(
            scene.items,
            vec![DrawItem::Vertex {
                index: 0,
                at: dvec2(3.0, 4.0)
            }]
        );
    }

    #[test]
    fn short_edges_lose_their_label() {
        let poly = Polygon::from_points(vec![
            dvec2(0.0, 0.0),
            dvec2(100.0, 0.0),
            dvec2(100.0, 100.0),
            dvec2(99.0, 100.0),
        ]);
        let scene = Scene::build(&poly, Language::En);
        let short = scene.items.iter().find_map(|item| match item {
            DrawItem::Edge { index: 2, label, .. } => Some(label.clone()),
            _ => None,
        });
        assert_eq!(short, Some(None));
    }

    #[test]
    fn tiny_area_has_no_area_label() {
        let speck = Polygon::square(SquareMeters(0.5));
        let scene = Scene::build(&speck, Language::En);
        assert!(!scene.items.iter().any(|i| matches!(i, DrawItem::AreaLabel { .. })));
    }

    #[test]
    fn empty_polygon_shows_localized_placeholder() {
        let scene = Scene::build(&Polygon::new(), Language::Es);
        assert_eq!(
            scene.items,
            vec![DrawItem::Placeholder {
                at: dvec2(0.0, 0.0),
                text: "Introduce un valor para visualizar el terreno".to_string(),
            }]
        );
        assert_eq!(scene.tooltip, "0 hectáreas");
    }

    #[test]
    fn hit_test_prefers_vertices() {
        let scene = Scene::build(&Polygon::square(SquareMeters(10_000.0)), Language::En);
        // handle radius 2.52, midpoint radius 2.016
        assert_eq!(scene.hit_test(dvec2(100.0, 1.0)), Some(Handle::Vertex(1)));
        assert_eq!(scene.hit_test(dvec2(50.0, 0.0)), Some(Handle::Midpoint(0)));
        assert_eq!(scene.hit_test(dvec2(0.0, 51.5)), Some(Handle::Midpoint(3)));
        assert_eq!(scene.hit_test(dvec2(50.0, 50.0)), None);
    }
}
