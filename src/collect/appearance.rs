//! Partition coloring of the edge table's representative column.

use tracing::debug;

use crate::model::{Section, SectionKind};
use crate::session::{AppearanceModel, ElementKind, GraphView};
use super::skipped;

pub const EDGE_PARTITION_COLOR: &str = "edgePartitionColor";

/// Emits `edgePartitionColor` → the color of the first partition value of
/// the first edge column. Absent when there is no column, no partition, or
/// an empty one.
pub fn collect(model: &dyn AppearanceModel, graph: &dyn GraphView) -> Section {
    let mut section = Section::new(SectionKind::Appearance);

    let Some(column) = graph.edge_columns().into_iter().next() else {
        debug!("edge table has no columns; no partition to report");
        return section;
    };

    match model.partition(ElementKind::Edge, &column) {
        Ok(Some(partition)) => {
            if let Some((_, color)) = partition.first() {
                section.insert(EDGE_PARTITION_COLOR, color.to_string());
            }
        }
        Ok(None) => debug!(column = %column, "no partition computed"),
        Err(e) => skipped(SectionKind::Appearance, &column, &e),
    }

    section
}
