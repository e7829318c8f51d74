//! # Session Collaborators
//!
//! The contract between the export pipeline and the editing session that
//! owns the graph and its subsystem models. The pipeline only reads.
//!
//! ## Implementations
//!
//! | Type | Module | Description |
//! |------|--------|-------------|
//! | `SharedGraph` | `memory` | `parking_lot::RwLock`-guarded graph for embedding and tests |
//! | `FilterSet`, `LayoutSelection`, `PartitionTable`, `StatisticsSummary`, `PreviewProperties` | `memory` | Plain-data subsystem models |

pub mod memory;

use crate::model::PropertyValue;
use crate::Result;

pub use memory::{
    GraphData, SharedGraph, SharedGraphView, FilterSet, FilterQuery, LayoutSelection, LayoutAlgorithm,
    LayoutProperty, PartitionTable, Partition, StatisticsSummary, PreviewProperties,
};

// ============================================================================
// Graph resource
// ============================================================================

/// A shared, mutable graph that can be observed under a read lock.
///
/// The returned view holds the lock until it is dropped: no writer is
/// admitted while any view is alive, other readers are.
pub trait GraphResource: Send + Sync {
    fn read_lock(&self) -> Result<Box<dyn GraphView + '_>>;
}

/// Read-only access to a locked graph.
pub trait GraphView {
    fn is_directed(&self) -> bool;
    fn node_count(&self) -> usize;
    fn edge_count(&self) -> usize;
    /// Column titles of the edge table, in table order.
    fn edge_columns(&self) -> Vec<String>;
}

/// Which attribute table a column or partition belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Node,
    Edge,
}

// ============================================================================
// Subsystem models
// ============================================================================

/// Active filter queries, in registration order.
pub trait FilterModel {
    fn queries(&self) -> Vec<&dyn Query>;
}

/// One filter query and its parameters.
pub trait Query {
    fn name(&self) -> String;
    fn property_count(&self) -> usize;
    fn property_name(&self, index: usize) -> Result<String>;
    fn property_value(&self, index: usize) -> Result<PropertyValue>;
}

/// The currently selected layout, if any.
pub trait LayoutModel {
    fn selected_layout(&self) -> Option<&dyn Layout>;
}

pub trait Layout {
    /// Display name of the algorithm.
    fn name(&self) -> String;
    fn properties(&self) -> Vec<&LayoutProperty>;
}

/// Computed attribute-to-color partitions.
pub trait AppearanceModel {
    /// `Ok(None)` when no partition has been computed for the column.
    fn partition(&self, element: ElementKind, column: &str) -> Result<Option<&Partition>>;
}

pub trait StatisticsModel {
    /// An opaque, human-readable summary of the statistics state.
    fn summary(&self) -> Result<String>;
}

/// Rendering and preview properties, by name.
pub trait PreviewModel {
    fn property_names(&self) -> Vec<String>;
    fn value(&self, name: &str) -> Result<PropertyValue>;
}

/// The five subsystem models of one session, borrowed for a single snapshot.
#[derive(Clone, Copy)]
pub struct SubsystemModels<'a> {
    pub filters: &'a dyn FilterModel,
    pub layout: &'a dyn LayoutModel,
    pub appearance: &'a dyn AppearanceModel,
    pub statistics: &'a dyn StatisticsModel,
    pub preview: &'a dyn PreviewModel,
}
