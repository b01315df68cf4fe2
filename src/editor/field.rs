//! The hectare text field and its write-back policy.
//!
//! Data flows one way at a time. Typing produces a [`FieldInput`] that the
//! editor turns into a new polygon; polygon changes flow back into the text
//! only through [`HectareField::resync`], which refuses while the field is
//! being edited or when the value already matches.

use crate::locale::Language;
use crate::log;
use crate::polygon::Polygon;
use crate::types::Hectares;

/// Smallest hectare difference worth rewriting the field for.
pub const RESYNC_EPSILON: f64 = 1e-5;

/// Fractional digits of the echoed hectare value.
pub const ECHO_FRACTION_DIGITS: usize = 4;

/// Focus state of the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldState {
    #[default]
    Idle,
    Editing,
}

/// What a piece of typed text asks the editor to do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldInput {
    /// A valid non-negative number: reset to a square of this area.
    Hectares(Hectares),
    /// Nothing typed: clear the polygon.
    Empty,
    /// No leading number, or a negative or non-finite one: also clears the
    /// polygon.
    Invalid,
}

/// Read the leading decimal number, accepting a comma as the decimal
/// separator and a trailing separator (`"1."`, `"1,"`).
///
/// Anything after the number is ignored, so `"1.5 ha"` reads as 1.5 and
/// `"1.000,5"` as 1.
fn parse_decimal(text: &str) -> Option<f64> {
    let normalized = text.trim().replacen(',', ".", 1);
    let number = numeric_prefix(&normalized)?;
    number.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Longest prefix of the form `[+-]digits[.digits][(e|E)[+-]digits]` with at
/// least one mantissa digit.
fn numeric_prefix(text: &str) -> Option<&str> {
    let bytes = text.as_bytes();
    let digits_from = |mut i: usize| {
        while bytes.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
        i
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_end = digits_from(end);
    let mut has_digits = int_end > end;
    end = int_end;
    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        has_digits |= frac_end > end + 1;
        end = frac_end;
    }
    if !has_digits {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }
    Some(&text[..end])
}

/// Classify typed hectare text.
pub fn parse_hectares(text: &str) -> FieldInput {
    if text.trim().is_empty() {
        return FieldInput::Empty;
    }
    match parse_decimal(text).map(Hectares::try_new) {
        Some(Ok(hectares)) => FieldInput::Hectares(hectares),
        _ => FieldInput::Invalid,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HectareField {
    text: String,
    state: FieldState,
}

impl Default for HectareField {
    fn default() -> Self {
        Self::new("1")
    }
}

impl HectareField {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            state: FieldState::Idle,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn state(&self) -> FieldState {
        self.state
    }

    pub fn is_editing(&self) -> bool {
        self.state == FieldState::Editing
    }

    pub fn focus(&mut self) {
        self.state = FieldState::Editing;
    }

    pub fn blur(&mut self) {
        self.state = FieldState::Idle;
    }

    /// Store the typed text verbatim and classify it.
    pub fn input(&mut self, text: impl Into<String>) -> FieldInput {
        self.text = text.into();
        let parsed = parse_hectares(&self.text);
        if parsed == FieldInput::Invalid {
            log::warn!(text = %self.text, "unparseable hectare input, clearing plot");
        }
        parsed
    }

    /// Write the polygon's area back into the text when allowed.
    ///
    /// Returns whether the text changed.
    pub fn resync(&mut self, polygon: &Polygon, language: Language) -> bool {
        if self.is_editing() {
            return false;
        }

        let hectares = polygon.hectares().raw();
        let differs = match parse_decimal(&self.text) {
            Some(current) => (current - hectares).abs() > RESYNC_EPSILON,
            None => hectares != 0.0,
        };
        if !differs {
            return false;
        }

        let scale = 10f64.powi(ECHO_FRACTION_DIGITS as i32);
        let rounded = (hectares * scale).round() / scale;
        let next = if rounded > 0.0 {
            language.format_plain(rounded, ECHO_FRACTION_DIGITS)
        } else if !polygon.is_empty() {
            "0".to_string()
        } else {
            return false;
        };

        if next == self.text {
            return false;
        }
        log::debug!(from = %self.text, to = %next, "hectare field resynced");
        self.text = next;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SquareMeters;
    use glam::dvec2;

    #[test]
    fn parse_valid_numbers() {
        assert_eq!(parse_hectares("1"), FieldInput::Hectares(Hectares(1.0)));
        assert_eq!(parse_hectares("0.25"), FieldInput::Hectares(Hectares(0.25)));
        assert_eq!(parse_hectares("1,5"), FieldInput::Hectares(Hectares(1.5)));
        assert_eq!(parse_hectares(" 2 "), FieldInput::Hectares(Hectares(2.0)));
        assert_eq!(parse_hectares("0"), FieldInput::Hectares(Hectares(0.0)));
    }

    #[test]
    fn parse_tolerates_trailing_separator() {
        assert_eq!(parse_hectares("1."), FieldInput::Hectares(Hectares(1.0)));
        assert_eq!(parse_hectares("3,"), FieldInput::Hectares(Hectares(3.0)));
    }

    #[test]
    fn parse_empty_and_invalid() {
        assert_eq!(parse_hectares(""), FieldInput::Empty);
        assert_eq!(parse_hectares("   "), FieldInput::Empty);
        assert_eq!(parse_hectares("abc"), FieldInput::Invalid);
        assert_eq!(parse_hectares("-1"), FieldInput::Invalid);
        assert_eq!(parse_hectares("inf"), FieldInput::Invalid);
        assert_eq!(parse_hectares("NaN"), FieldInput::Invalid);
        assert_eq!(parse_hectares("ha 1"), FieldInput::Invalid);
        assert_eq!(parse_hectares(".e5"), FieldInput::Invalid);
        assert_eq!(parse_hectares("-"), FieldInput::Invalid);
        assert_eq!(parse_hectares("1e400"), FieldInput::Invalid);
    }

    #[test]
    fn parse_reads_the_leading_number() {
        assert_eq!(parse_hectares("1.5 ha"), FieldInput::Hectares(Hectares(1.5)));
        assert_eq!(parse_hectares("12abc"), FieldInput::Hectares(Hectares(12.0)));
        assert_eq!(parse_hectares("1.000,5"), FieldInput::Hectares(Hectares(1.0)));
        assert_eq!(parse_hectares("1.2.3"), FieldInput::Hectares(Hectares(1.2)));
        assert_eq!(parse_hectares(",5"), FieldInput::Hectares(Hectares(0.5)));
        assert_eq!(parse_hectares("+2e1x"), FieldInput::Hectares(Hectares(20.0)));
        assert_eq!(parse_hectares("3e"), FieldInput::Hectares(Hectares(3.0)));
        assert_eq!(parse_hectares("-0,5 ha"), FieldInput::Invalid);
    }

    #[test]
    fn resync_writes_back_when_idle() {
        let mut field = HectareField::new("1");
        let poly = Polygon::square(SquareMeters(15_000.0));
        assert!(field.resync(&poly, Language::En));
        assert_eq!(field.text(), "1.5");
    }

    #[test]
    fn resync_uses_locale_decimal_separator() {
        let mut field = HectareField::new("1");
        let poly = Polygon::square(SquareMeters(12_345.0));
        assert!(field.resync(&poly, Language::Es));
        assert_eq!(field.text(), "1,2345");
    }

    #[test]
    fn resync_never_overwrites_while_editing() {
        let mut field = HectareField::new("1.");
        field.focus();
        let poly = Polygon::square(SquareMeters(30_000.0));
        assert!(!field.resync(&poly, Language::En));
        assert_eq!(field.text(), "1.");

        field.blur();
        assert!(field.resync(&poly, Language::En));
        assert_eq!(field.text(), "3");
    }

    #[test]
    fn resync_ignores_floating_point_noise() {
        let mut field = HectareField::new("1");
        let poly = Polygon::square(SquareMeters(10_000.000_01));
        assert!(!field.resync(&poly, Language::En));
        assert_eq!(field.text(), "1");
    }

    #[test]
    fn resync_keeps_partial_input_that_parses_equal() {
        let mut field = HectareField::new("1.");
        let poly = Polygon::square(SquareMeters(10_000.0));
        assert!(!field.resync(&poly, Language::En));
        assert_eq!(field.text(), "1.");
    }

    #[test]
    fn degenerate_nonempty_polygon_shows_literal_zero() {
        let mut field = HectareField::new("2");
        let line = Polygon::from_points(vec![dvec2(0.0, 0.0), dvec2(10.0, 0.0)]);
        assert!(field.resync(&line, Language::Es));
        assert_eq!(field.text(), "0");

        let mut tiny = HectareField::new("2");
        let speck = Polygon::square(SquareMeters(0.1));
        assert!(tiny.resync(&speck, Language::En));
        assert_eq!(tiny.text(), "0");
    }

    #[test]
    fn empty_polygon_leaves_text_alone() {
        let mut field = HectareField::new("abc");
        assert!(!field.resync(&Polygon::new(), Language::En));
        assert_eq!(field.text(), "abc");

        let mut field = HectareField::new("5");
        assert!(!field.resync(&Polygon::new(), Language::En));
        assert_eq!(field.text(), "5");
    }

    #[test]
    fn invalid_text_is_replaced_when_area_exists() {
        let mut field = HectareField::new("abc");
        let poly = Polygon::square(SquareMeters(20_000.0));
        assert!(field.resync(&poly, Language::En));
        assert_eq!(field.text(), "2");
    }
}
