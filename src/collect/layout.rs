//! The selected layout algorithm and its parameters.

use crate::model::{format_value, Section, SectionKind, NOT_EXTRACTED};
use crate::session::LayoutModel;
use crate::Error;
use super::skipped;

/// Emits `# layout` → algorithm name, then one entry per parameter keyed by
/// the middle segment of its canonical name. Empty when nothing is selected.
pub fn collect(model: &dyn LayoutModel) -> Section {
    let mut section = Section::new(SectionKind::Layout);

    let Some(layout) = model.selected_layout() else {
        return section;
    };
    section.insert("# layout", layout.name());

    for property in layout.properties() {
        let key = match display_key(&property.canonical_name) {
            Ok(key) => key,
            Err(e) => {
                skipped(SectionKind::Layout, &property.canonical_name, &e);
                continue;
            }
        };
        let value = property.value.as_ref()
            .map(format_value)
            .unwrap_or_else(|| NOT_EXTRACTED.to_string());
        section.insert(key, value);
    }

    section
}

/// `"forceAtlas2.gravity.name"` → `"gravity"`.
fn display_key(canonical_name: &str) -> crate::Result<&str> {
    canonical_name
        .split('.')
        .nth(1)
        .filter(|segment| !segment.is_empty())
        .ok_or_else(|| Error::ConfigurationRead {
            key: canonical_name.to_string(),
            message: "canonical name has no property segment".into(),
        })
}
