//! Snapshot assembly — collectors in fixed order, plus the export timestamp.
//!
//! ```text
//! GraphView + SubsystemModels → SnapshotAssembler::assemble() → SnapshotDocument
//!   General, Filter, Layout, (Appearance), Statistics, Preview
//! ```

use chrono::{DateTime, Local};
use tracing::debug;

use crate::collect;
use crate::config::ExportConfig;
use crate::model::{Section, SnapshotDocument};
use crate::session::{GraphView, SubsystemModels};

/// `yyyy-MM-dd_HH_mm_ss`, shared by both output filenames.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H_%M_%S";

/// One point in time per export, used to correlate the two output files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportTimestamp(DateTime<Local>);

impl ExportTimestamp {
    pub fn now() -> Self {
        Self(Local::now())
    }

    pub fn at(time: DateTime<Local>) -> Self {
        Self(time)
    }

    pub fn time(&self) -> DateTime<Local> {
        self.0
    }

    pub fn stamp(&self) -> String {
        self.0.format(TIMESTAMP_FORMAT).to_string()
    }

    /// `{prefix}{stamp}.txt`
    pub fn settings_file_name(&self, prefix: &str) -> String {
        format!("{prefix}{}.txt", self.stamp())
    }

    /// `{prefix}{stamp}.gexf`
    pub fn graph_file_name(&self, prefix: &str) -> String {
        format!("{prefix}{}.gexf", self.stamp())
    }
}

/// Runs the collectors in presentation order.
#[derive(Debug, Clone, Default)]
pub struct SnapshotAssembler {
    include_appearance: bool,
}

impl SnapshotAssembler {
    pub fn new(config: &ExportConfig) -> Self {
        Self { include_appearance: config.include_appearance }
    }

    pub fn with_appearance(include_appearance: bool) -> Self {
        Self { include_appearance }
    }

    pub fn assemble(&self, graph: &dyn GraphView, models: &SubsystemModels<'_>) -> SnapshotDocument {
        let mut sections: Vec<Section> = Vec::with_capacity(6);
        sections.push(collect::general::collect(graph));
        sections.push(collect::filter::collect(models.filters));
        sections.push(collect::layout::collect(models.layout));
        if self.include_appearance {
            sections.push(collect::appearance::collect(models.appearance, graph));
        }
        sections.push(collect::statistics::collect(models.statistics));
        sections.push(collect::preview::collect(models.preview));

        for section in &sections {
            debug!(section = section.title(), entries = section.len(), "section collected");
        }
        SnapshotDocument::new(sections)
    }
}
