//! Active filter queries and their parameters.

use crate::model::{format_value, Section, SectionKind, NOT_EXTRACTED};
use crate::session::FilterModel;
use super::skipped;

/// Emits `# filter {i}` → query name, then one entry per query parameter.
///
/// Parameter names are shared across queries: a later query's `range`
/// overwrites an earlier one's value in place.
pub fn collect(model: &dyn FilterModel) -> Section {
    let mut section = Section::new(SectionKind::Filter);

    for (i, query) in model.queries().into_iter().enumerate() {
        section.insert(format!("# filter {i}"), query.name());

        for j in 0..query.property_count() {
            let name = match query.property_name(j) {
                Ok(name) => name,
                Err(e) => {
                    skipped(SectionKind::Filter, &format!("{}[{j}]", query.name()), &e);
                    continue;
                }
            };
            match query.property_value(j) {
                Ok(value) => section.insert(name, format_value(&value)),
                Err(e) => {
                    skipped(SectionKind::Filter, &name, &e);
                    section.insert(name, NOT_EXTRACTED);
                }
            }
        }
    }

    section
}
