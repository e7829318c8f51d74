//! General graph facts: directedness and size.

use crate::model::{Section, SectionKind};
use crate::session::GraphView;

pub fn collect(graph: &dyn GraphView) -> Section {
    let mut section = Section::new(SectionKind::General);
    section.insert("isDirectedGraph", graph.is_directed().to_string());
    section.insert("edgeCount", graph.edge_count().to_string());
    section.insert("nodeCount", graph.node_count().to_string());
    section
}
