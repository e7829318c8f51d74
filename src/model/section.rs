//! Sections and the assembled snapshot document.

use indexmap::IndexMap;
use serde::Serialize;

/// The fixed sections of a snapshot, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SectionKind {
    General,
    Filter,
    Layout,
    Appearance,
    Statistics,
    Preview,
}

impl SectionKind {
    /// Every kind in presentation order.
    pub const ORDER: [SectionKind; 6] = [
        SectionKind::General,
        SectionKind::Filter,
        SectionKind::Layout,
        SectionKind::Appearance,
        SectionKind::Statistics,
        SectionKind::Preview,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            SectionKind::General => "General settings",
            SectionKind::Filter => "Filter settings",
            SectionKind::Layout => "Layout settings",
            SectionKind::Appearance => "Appearance settings",
            SectionKind::Statistics => "Statistics settings",
            SectionKind::Preview => "Preview settings",
        }
    }
}

/// One named block of `key → value` entries. Insertion order is presentation order.
///
/// Re-inserting an existing key replaces its value in place; the entry keeps
/// its original position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub kind: SectionKind,
    entries: IndexMap<String, String>,
}

impl Section {
    pub fn new(kind: SectionKind) -> Self {
        Self { kind, entries: IndexMap::new() }
    }

    pub fn title(&self) -> &'static str {
        self.kind.title()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The ordered sections of one export. Built once, written once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnapshotDocument {
    sections: Vec<Section>,
}

impl SnapshotDocument {
    /// Sections are sorted into [`SectionKind::ORDER`] regardless of the order given.
    pub fn new(mut sections: Vec<Section>) -> Self {
        sections.sort_by_key(|s| SectionKind::ORDER.iter().position(|k| *k == s.kind));
        Self { sections }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, kind: SectionKind) -> Option<&Section> {
        self.sections.iter().find(|s| s.kind == kind)
    }

    pub fn kinds(&self) -> Vec<SectionKind> {
        self.sections.iter().map(|s| s.kind).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_preserves_insertion_order() {
        let mut section = Section::new(SectionKind::Preview);
        section.insert("z", "1");
        section.insert("a", "2");
        section.insert("m", "3");
        let keys: Vec<&str> = section.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["z", "a", "m"]);
    }

    #[test]
    fn test_reinsert_keeps_position() {
        let mut section = Section::new(SectionKind::Filter);
        section.insert("range", "1–2");
        section.insert("# filter 1", "Degree Range");
        section.insert("range", "3–4");
        let entries: Vec<(&str, &str)> = section.iter().collect();
        assert_eq!(entries, [("range", "3–4"), ("# filter 1", "Degree Range")]);
    }

    #[test]
    fn test_document_orders_sections() {
        let doc = SnapshotDocument::new(vec![
            Section::new(SectionKind::Preview),
            Section::new(SectionKind::General),
            Section::new(SectionKind::Statistics),
            Section::new(SectionKind::Filter),
            Section::new(SectionKind::Layout),
        ]);
        assert_eq!(
            doc.kinds(),
            [
                SectionKind::General,
                SectionKind::Filter,
                SectionKind::Layout,
                SectionKind::Statistics,
                SectionKind::Preview,
            ]
        );
        assert!(doc.section(SectionKind::Appearance).is_none());
    }
}
