//! Info-card values shown next to the plot.

use crate::locale::Language;
use crate::polygon::Polygon;

/// Formatted measurements of the current polygon in the active language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Readout {
    /// "Total Area" card value, in m²
    pub total_area: String,
    /// "Max Width" card value, in meters
    pub max_width: String,
    /// "Max Length" card value, in meters
    pub max_length: String,
    /// Tooltip over the visualizer, e.g. "1,5 hectáreas"
    pub tooltip: String,
}

impl Readout {
    pub fn new(polygon: &Polygon, language: Language) -> Self {
        let bounds = polygon.bounding_box();
        let strings = language.strings();
        Self {
            total_area: language.format_number(polygon.area().raw(), 2),
            max_width: language.format_number(bounds.width().raw(), 2),
            max_length: language.format_number(bounds.height().raw(), 2),
            tooltip: format!(
                "{} {}",
                language.format_number(polygon.hectares().raw(), 4),
                strings.hectares_unit
            ),
        }
    }
}
