//! Languages, the static string table and locale-aware number formatting.

use std::fmt;
use std::str::FromStr;

/// Display language of the hectare calculator. Spanish is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    Es,
    En,
}

/// One "how it works" step: a bold lead-in followed by the explanation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub lead: &'static str,
    pub body: &'static str,
}

/// Every user-visible string of the hectare page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub hectares_label: &'static str,
    pub hectares_placeholder: &'static str,
    pub total_area: &'static str,
    pub max_width: &'static str,
    pub max_length: &'static str,
    pub meters_unit: &'static str,
    pub hectare_conversion: &'static str,
    pub how_to_title: &'static str,
    pub how_to_steps: [Step; 3],
    pub visualizer_placeholder: &'static str,
    pub hectares_unit: &'static str,
}

static ES: Strings = Strings {
    title: "Calculadora Visual de Hectáreas",
    subtitle: "¿Alguna vez te has preguntado cómo se ve una hectárea? Ingresa un valor, visualiza el terreno y ajusta su forma interactivamente.",
    hectares_label: "Introduce la cantidad de hectáreas (ha)",
    hectares_placeholder: "Ej: 1.5",
    total_area: "Área Total",
    max_width: "Ancho Máx.",
    max_length: "Largo Máx.",
    meters_unit: "metros",
    hectare_conversion: "*1 hectárea (ha) equivale a 10,000 metros cuadrados (m²).",
    how_to_title: "¿Cómo funciona?",
    how_to_steps: [
        Step {
            lead: "1. Ingresa Hectáreas:",
            body: "Empieza escribiendo un valor en el campo de entrada para ver un terreno cuadrado.",
        },
        Step {
            lead: "2. Arrastra los Vértices:",
            body: "Mueve los círculos blancos para cambiar la forma del polígono.",
        },
        Step {
            lead: "3. Añade Puntos:",
            body: "Haz clic en un círculo semitransparente en medio de una línea para crear un nuevo vértice.",
        },
    ],
    visualizer_placeholder: "Introduce un valor para visualizar el terreno",
    hectares_unit: "hectáreas",
};

static EN: Strings = Strings {
    title: "Visual Hectare Calculator",
    subtitle: "Ever wondered what a hectare looks like? Enter a value, see the plot of land, and adjust its shape interactively.",
    hectares_label: "Enter the amount of hectares (ha)",
    hectares_placeholder: "Ex: 1.5",
    total_area: "Total Area",
    max_width: "Max Width",
    max_length: "Max Length",
    meters_unit: "meters",
    hectare_conversion: "*1 hectare (ha) equals 10,000 square meters (m²).",
    how_to_title: "How It Works",
    how_to_steps: [
        Step {
            lead: "1. Enter Hectares:",
            body: "Start by typing a value in the input field to see a square plot.",
        },
        Step {
            lead: "2. Drag the Corners:",
            body: "Move the white circles to change the polygon's shape.",
        },
        Step {
            lead: "3. Add Points:",
            body: "Click a semi-transparent circle on a line's midpoint to create a new corner.",
        },
    ],
    visualizer_placeholder: "Enter a value to visualize the land",
    hectares_unit: "hectares",
};

impl Language {
    pub const ALL: [Language; 2] = [Language::Es, Language::En];

    pub fn strings(self) -> &'static Strings {
        match self {
            Language::Es => &ES,
            Language::En => &EN,
        }
    }

    /// BCP 47 tag
    pub fn code(self) -> &'static str {
        match self {
            Language::Es => "es",
            Language::En => "en",
        }
    }

    fn decimal_separator(self) -> char {
        match self {
            Language::Es => ',',
            Language::En => '.',
        }
    }

    fn group_separator(self) -> char {
        match self {
            Language::Es => '.',
            Language::En => ',',
        }
    }

    /// Spanish only groups integers of five digits or more ("1234" but "12.345").
    fn min_grouped_digits(self) -> usize {
        match self {
            Language::Es => 5,
            Language::En => 4,
        }
    }

    /// Format with grouping and at most `max_fraction` fractional digits,
    /// trailing zeros trimmed.
    pub fn format_number(self, value: f64, max_fraction: usize) -> String {
        self.format(value, max_fraction, true)
    }

    /// Same as [`Language::format_number`] without thousands separators.
    ///
    /// Used to echo values back into a text field, where a grouping separator
    /// would be read back as a decimal point.
    pub fn format_plain(self, value: f64, max_fraction: usize) -> String {
        self.format(value, max_fraction, false)
    }

    fn format(self, value: f64, max_fraction: usize, grouping: bool) -> String {
        if value.is_nan() {
            return "NaN".to_string();
        }
        if value.is_infinite() {
            return if value > 0.0 { "∞" } else { "-∞" }.to_string();
        }

        let fixed = format!("{:.*}", max_fraction, round_half_away(value.abs(), max_fraction));
        let (int_part, frac_part) = match fixed.split_once('.') {
            Some((int_part, frac)) => (int_part, frac.trim_end_matches('0')),
            None => (fixed.as_str(), ""),
        };
        let is_zero = int_part.bytes().all(|b| b == b'0') && frac_part.is_empty();

        let mut out = String::with_capacity(fixed.len() + 4);
        if value < 0.0 && !is_zero {
            out.push('-');
        }
        if grouping && int_part.len() >= self.min_grouped_digits() {
            let sep = self.group_separator();
            for (i, digit) in int_part.chars().enumerate() {
                if i > 0 && (int_part.len() - i) % 3 == 0 {
                    out.push(sep);
                }
                out.push(digit);
            }
        } else {
            out.push_str(int_part);
        }
        if !frac_part.is_empty() {
            out.push(self.decimal_separator());
            out.push_str(frac_part);
        }
        out
    }
}

/// Round to `digits` fractional digits, ties away from zero.
///
/// `format!("{:.N}")` breaks exact ties to even, so 2.5 would print as 2.
pub(crate) fn round_half_away(value: f64, digits: usize) -> f64 {
    let scale = 10f64.powi(digits as i32);
    let scaled = value * scale;
    if scaled.is_finite() {
        scaled.round() / scale
    } else {
        value
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error for an unsupported language tag
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported language: {0}")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "es" => Ok(Language::Es),
            "en" => Ok(Language::En),
            _ => Err(UnknownLanguage(s.to_string())),
        }
    }
}
