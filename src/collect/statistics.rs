//! Opaque summary of the statistics model.

use crate::model::{Section, SectionKind, NOT_EXTRACTED};
use crate::session::StatisticsModel;
use super::skipped;

pub const STATISTICS_KEY: &str = "statisticsModel";

pub fn collect(model: &dyn StatisticsModel) -> Section {
    let mut section = Section::new(SectionKind::Statistics);
    match model.summary() {
        Ok(summary) => section.insert(STATISTICS_KEY, summary),
        Err(e) => {
            skipped(SectionKind::Statistics, STATISTICS_KEY, &e);
            section.insert(STATISTICS_KEY, NOT_EXTRACTED);
        }
    }
    section
}
