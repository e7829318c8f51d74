//! Value formatting — typed property values to report strings.
//!
//! Pure and total: every [`PropertyValue`] has exactly one printable form.
//! Color wrappers print their resolved custom color, never their own
//! structure.

use std::borrow::Cow;

use super::PropertyValue;

/// Written in place of a value that could not be read from the session.
pub const NOT_EXTRACTED: &str = "Not extracted";

/// Property keys misspelled upstream, with the spelling the report uses.
const LEGACY_KEYS: &[(&str, &str)] = &[
    ("node.label.proportinalSize", "node.label.proportionalSize"),
];

/// Format a property value for the report.
pub fn format_value(value: &PropertyValue) -> String {
    match value {
        // Wrappers resolve to their custom color; without one, the mode is all there is.
        PropertyValue::DependentColor(c) => match c.custom {
            Some(color) => color.to_string(),
            None => c.mode_label().to_string(),
        },
        PropertyValue::DependentOriginalColor(c) => match c.custom {
            Some(color) => color.to_string(),
            None => c.mode_label().to_string(),
        },
        PropertyValue::EdgeColor(c) => match c.custom {
            Some(color) => color.to_string(),
            None => c.mode_label().to_string(),
        },
        PropertyValue::Color(color) => color.to_string(),
        PropertyValue::Bool(b) => b.to_string(),
        PropertyValue::Int(i) => i.to_string(),
        PropertyValue::Float(f) => f.to_string(),
        PropertyValue::Text(s) => s.clone(),
        PropertyValue::Range(r) => r.to_string(),
    }
}

/// Rewrite a known-misspelled property key to its corrected spelling.
pub fn normalize_key(name: &str) -> Cow<'_, str> {
    LEGACY_KEYS
        .iter()
        .find(|(legacy, _)| *legacy == name)
        .map(|(_, fixed)| Cow::Borrowed(*fixed))
        .unwrap_or(Cow::Borrowed(name))
}
