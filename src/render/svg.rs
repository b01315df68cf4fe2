//! SVG generation

use glam::DVec2;
use plotcalc_svg::facet_xml::{self, SerializeOptions};
use plotcalc_svg::{Circle, Group, Points, Polygon, SVG_NS, Svg, SvgNode, Text, Title};

use super::RenderOptions;
use super::defaults;
use super::scene::{DrawItem, EdgeLabel, Scene};
use crate::errors::RenderError;
use crate::log;

/// Fill and stroke colors for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub outline_fill: &'static str,
    pub outline_stroke: &'static str,
    pub vertex_fill: &'static str,
    pub midpoint_fill: &'static str,
    pub label: &'static str,
    pub area_label: &'static str,
    pub placeholder: &'static str,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        outline_fill: "rgb(37,99,235)",
        outline_stroke: "rgb(29,78,216)",
        vertex_fill: "white",
        midpoint_fill: "rgb(229,231,235)",
        label: "rgb(31,41,55)",
        area_label: "white",
        placeholder: "rgb(107,114,128)",
    };

    pub const DARK: Palette = Palette {
        outline_fill: "rgb(59,130,246)",
        outline_stroke: "rgb(96,165,250)",
        vertex_fill: "white",
        midpoint_fill: "rgb(55,65,81)",
        label: "rgb(229,231,235)",
        area_label: "white",
        placeholder: "rgb(156,163,175)",
    };
}

const OUTLINE_OPACITY: f64 = 0.8;
const MIDPOINT_OPACITY: f64 = 0.6;

/// Serialize a scene to an SVG document.
pub fn to_svg(scene: &Scene, options: &RenderOptions) -> Result<String, RenderError> {
    let layout = &scene.layout;
    if !layout.view_box.is_valid() {
        return Err(RenderError::InvalidBounds);
    }

    let palette = options.theme.palette();
    let class = |name: String| options.css_classes.then_some(name);

    let mut children = Vec::with_capacity(scene.items.len() + 1);
    if !scene.tooltip.is_empty() {
        children.push(SvgNode::Title(Title {
            content: scene.tooltip.clone(),
        }));
    }

    for item in &scene.items {
        let node = match item {
            DrawItem::Outline { points } => {
                let points = points
                    .iter()
                    .fold(Points::new(), |acc, p| acc.push(p.x, p.y));
                SvgNode::Polygon(Polygon {
                    class: class("outline".to_string()),
                    points: Some(points.into()),
                    fill: Some(palette.outline_fill.to_string()),
                    fill_opacity: Some(OUTLINE_OPACITY),
                    stroke: Some(palette.outline_stroke.to_string()),
                    stroke_width: Some(layout.stroke_width),
                })
            }
            DrawItem::Edge {
                index,
                midpoint,
                label,
            } => {
                let mut edge = Vec::with_capacity(2);
                if let Some(label) = label {
                    edge.push(SvgNode::Text(edge_label(
                        label,
                        layout.label_font_size,
                        palette.label,
                        class(format!("edge-label edge-label-{index}")),
                    )));
                }
                edge.push(SvgNode::Circle(Circle {
                    class: class(format!("midpoint midpoint-{index}")),
                    cx: Some(midpoint.x),
                    cy: Some(midpoint.y),
                    r: Some(layout.midpoint_radius()),
                    fill: Some(palette.midpoint_fill.to_string()),
                    fill_opacity: Some(MIDPOINT_OPACITY),
                    ..Default::default()
                }));
                SvgNode::G(Group {
                    id: None,
                    class: class(format!("edge edge-{index}")),
                    transform: None,
                    children: edge,
                })
            }
            DrawItem::Vertex { index, at } => SvgNode::Circle(Circle {
                class: class(format!("vertex vertex-{index}")),
                cx: Some(at.x),
                cy: Some(at.y),
                r: Some(layout.handle_radius),
                fill: Some(palette.vertex_fill.to_string()),
                fill_opacity: None,
                stroke: Some(palette.outline_stroke.to_string()),
                stroke_width: Some(layout.stroke_width),
            }),
            DrawItem::AreaLabel { at, text } => SvgNode::Text(Text {
                class: class("area-label".to_string()),
                x: Some(at.x),
                y: Some(at.y),
                fill: Some(palette.area_label.to_string()),
                font_family: Some(defaults::AREA_FONT_FAMILY.to_string()),
                font_size: Some(layout.font_size),
                font_weight: Some("bold".to_string()),
                text_anchor: Some("middle".to_string()),
                dominant_baseline: Some("central".to_string()),
                content: text.clone(),
                ..Default::default()
            }),
            DrawItem::Placeholder { at, text } => SvgNode::Text(Text {
                class: class("placeholder".to_string()),
                x: Some(at.x),
                y: Some(at.y),
                fill: Some(palette.placeholder.to_string()),
                font_family: Some(defaults::LABEL_FONT_FAMILY.to_string()),
                font_size: Some(layout.label_font_size),
                text_anchor: Some("middle".to_string()),
                dominant_baseline: Some("middle".to_string()),
                content: text.clone(),
                ..Default::default()
            }),
        };
        children.push(node);
    }

    let svg = Svg {
        xmlns: Some(SVG_NS.to_string()),
        class: class("plot".to_string()),
        width: options.width.map(fmt_num),
        height: options.height.map(fmt_num),
        view_box: Some(layout.view_box.to_string()),
        preserve_aspect_ratio: Some(defaults::PRESERVE_ASPECT_RATIO.to_string()),
        children,
    };

    fn format_float(value: f64, writer: &mut dyn std::io::Write) -> Result<(), std::io::Error> {
        write!(writer, "{}", fmt_num(value))
    }

    let ser = SerializeOptions {
        float_formatter: Some(format_float),
        ..Default::default()
    };
    let out = facet_xml::to_string_with_options(&svg, &ser).map_err(|e| RenderError::Serialize {
        message: e.to_string(),
    })?;
    log::debug!(bytes = out.len(), items = scene.items.len(), "svg serialized");
    Ok(out)
}

/// Edge length text, rotated to follow the edge and lifted off it.
fn edge_label(label: &EdgeLabel, font_size: f64, fill: &str, class: Option<String>) -> Text {
    let DVec2 { x, y } = label.at;
    Text {
        class,
        x: Some(x),
        y: Some(y),
        dy: Some(label.offset),
        transform: Some(format!(
            "rotate({}, {}, {})",
            fmt_num(label.angle.raw()),
            fmt_num(x),
            fmt_num(y)
        )),
        fill: Some(fill.to_string()),
        font_family: Some(defaults::LABEL_FONT_FAMILY.to_string()),
        font_size: Some(font_size),
        font_weight: Some("500".to_string()),
        text_anchor: Some("middle".to_string()),
        dominant_baseline: Some("central".to_string()),
        content: label.text.clone(),
    }
}

/// Format a number with 6 significant figures, trailing zeros trimmed.
pub(crate) fn fmt_num(value: f64) -> String {
    fmt_num_precision(value, 6)
}

fn fmt_num_precision(value: f64, sig_figs: i32) -> String {
    if value == 0.0 || !value.is_finite() {
        return "0".to_string();
    }

    let magnitude = value.abs().log10().floor() as i32;
    let scale = 10_f64.powi(sig_figs - 1 - magnitude);
    let rounded = (value * scale).round() / scale;

    let decimals = (sig_figs - 1 - magnitude).max(0) as usize;
    let s = format!("{:.prec$}", rounded, prec = decimals);
    let s = if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s.as_str()
    };
    if s == "-0" { "0".to_string() } else { s.to_string() }
}
