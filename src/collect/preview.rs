//! Rendering and preview properties.

use crate::model::{format_value, normalize_key, Section, SectionKind};
use crate::session::PreviewModel;
use super::skipped;

/// One entry per preview property, keys normalized, colors unwrapped.
pub fn collect(model: &dyn PreviewModel) -> Section {
    let mut section = Section::new(SectionKind::Preview);

    for name in model.property_names() {
        match model.value(&name) {
            Ok(value) => section.insert(normalize_key(&name), format_value(&value)),
            Err(e) => skipped(SectionKind::Preview, &name, &e),
        }
    }

    section
}
