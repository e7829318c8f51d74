//! In-memory session collaborators.
//!
//! This is the reference implementation of the session traits. The graph
//! lives behind a single `parking_lot::RwLock`, so a view observes one
//! consistent state for as long as it is held.
//!
//! Use these types for:
//! - Embedding the exporter in applications that keep their own session state
//! - Testing collectors, the assembler and the orchestrator

use std::collections::HashMap;
use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use serde::{Deserialize, Serialize};

use crate::model::*;
use crate::{Error, Result};
use super::{
    AppearanceModel, ElementKind, FilterModel, GraphResource, GraphView, Layout, LayoutModel,
    PreviewModel, Query, StatisticsModel,
};

// ============================================================================
// SharedGraph
// ============================================================================

/// Graph contents: directedness, node and edge records, and the edge table schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphData {
    pub directed: bool,
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    pub edge_columns: Vec<String>,
}

impl GraphData {
    pub fn new(directed: bool) -> Self {
        Self { directed, ..Default::default() }
    }

    /// Append a node labelled `label` and return its id.
    pub fn add_node(&mut self, label: impl Into<String>) -> NodeId {
        let id = NodeId(self.nodes.len() as u64 + 1);
        self.nodes.push(Node::new(id, label));
        id
    }

    /// Append an edge between two existing nodes.
    pub fn add_edge(&mut self, source: NodeId, target: NodeId) -> Result<EdgeId> {
        for end in [source, target] {
            if !self.nodes.iter().any(|n| n.id == end) {
                return Err(Error::NotFound(format!("node {end}")));
            }
        }
        let id = EdgeId(self.edges.len() as u64 + 1);
        self.edges.push(Edge::new(id, source, target));
        Ok(id)
    }
}

/// A graph shared between the editing session and its readers.
#[derive(Debug, Clone, Default)]
pub struct SharedGraph {
    inner: Arc<RwLock<GraphData>>,
}

impl SharedGraph {
    pub fn new(data: GraphData) -> Self {
        Self { inner: Arc::new(RwLock::new(data)) }
    }

    /// Exclusive access for the editing session. Blocks while any view is held.
    pub fn write(&self) -> RwLockWriteGuard<'_, GraphData> {
        self.inner.write()
    }

    /// `None` while a reader holds the lock.
    pub fn try_write(&self) -> Option<RwLockWriteGuard<'_, GraphData>> {
        self.inner.try_write()
    }
}

/// A read-locked view of a [`SharedGraph`]; the lock is released on drop.
pub struct SharedGraphView<'a> {
    data: RwLockReadGuard<'a, GraphData>,
}

impl GraphResource for SharedGraph {
    fn read_lock(&self) -> Result<Box<dyn GraphView + '_>> {
        Ok(Box::new(SharedGraphView { data: self.inner.read() }))
    }
}

impl GraphView for SharedGraphView<'_> {
    fn is_directed(&self) -> bool { self.data.directed }
    fn node_count(&self) -> usize { self.data.nodes.len() }
    fn edge_count(&self) -> usize { self.data.edges.len() }
    fn edge_columns(&self) -> Vec<String> { self.data.edge_columns.clone() }
}

// ============================================================================
// Filters
// ============================================================================

/// A filter query with ordered, named parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterQuery {
    pub name: String,
    pub properties: Vec<(String, PropertyValue)>,
}

impl FilterQuery {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), properties: Vec::new() }
    }

    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties.push((name.into(), value.into()));
        self
    }

    fn property(&self, index: usize) -> Result<&(String, PropertyValue)> {
        self.properties.get(index).ok_or_else(|| Error::ConfigurationRead {
            key: format!("{}[{index}]", self.name),
            message: format!("query has {} properties", self.properties.len()),
        })
    }
}

impl Query for FilterQuery {
    fn name(&self) -> String { self.name.clone() }
    fn property_count(&self) -> usize { self.properties.len() }

    fn property_name(&self, index: usize) -> Result<String> {
        Ok(self.property(index)?.0.clone())
    }

    fn property_value(&self, index: usize) -> Result<PropertyValue> {
        Ok(self.property(index)?.1.clone())
    }
}

/// Active queries in registration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSet {
    pub queries: Vec<FilterQuery>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, query: FilterQuery) {
        self.queries.push(query);
    }
}

impl FilterModel for FilterSet {
    fn queries(&self) -> Vec<&dyn Query> {
        self.queries.iter().map(|q| q as &dyn Query).collect()
    }
}

// ============================================================================
// Layout
// ============================================================================

/// A layout parameter, addressed by its canonical dotted name
/// (`algorithm.property.name`). The value may not be readable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutProperty {
    pub canonical_name: String,
    pub value: Option<PropertyValue>,
}

impl LayoutProperty {
    pub fn new(canonical_name: impl Into<String>, value: Option<PropertyValue>) -> Self {
        Self { canonical_name: canonical_name.into(), value }
    }
}

/// A layout algorithm with its parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutAlgorithm {
    pub name: String,
    pub properties: Vec<LayoutProperty>,
}

impl Layout for LayoutAlgorithm {
    fn name(&self) -> String { self.name.clone() }
    fn properties(&self) -> Vec<&LayoutProperty> { self.properties.iter().collect() }
}

/// The session's layout choice; empty until an algorithm is selected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutSelection {
    pub selected: Option<LayoutAlgorithm>,
}

impl LayoutSelection {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn select(name: impl Into<String>, properties: Vec<LayoutProperty>) -> Self {
        Self { selected: Some(LayoutAlgorithm { name: name.into(), properties }) }
    }
}

impl LayoutModel for LayoutSelection {
    fn selected_layout(&self) -> Option<&dyn Layout> {
        self.selected.as_ref().map(|l| l as &dyn Layout)
    }
}

// ============================================================================
// Appearance
// ============================================================================

/// Attribute values of one column and the color assigned to each, in value order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Partition {
    pub colors: IndexMap<String, Color>,
}

impl Partition {
    pub fn first(&self) -> Option<(&str, Color)> {
        self.colors.first().map(|(v, c)| (v.as_str(), *c))
    }
}

/// Computed partitions keyed by element kind and column title.
#[derive(Debug, Clone, Default)]
pub struct PartitionTable {
    partitions: HashMap<(ElementKind, String), Partition>,
}

impl PartitionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, element: ElementKind, column: impl Into<String>, partition: Partition) {
        self.partitions.insert((element, column.into()), partition);
    }
}

impl AppearanceModel for PartitionTable {
    fn partition(&self, element: ElementKind, column: &str) -> Result<Option<&Partition>> {
        Ok(self.partitions.get(&(element, column.to_string())))
    }
}

// ============================================================================
// Statistics
// ============================================================================

/// Names of the statistics that have been run, with their reports.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatisticsSummary {
    pub results: IndexMap<String, String>,
}

impl StatisticsSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, statistic: impl Into<String>, report: impl Into<String>) {
        self.results.insert(statistic.into(), report.into());
    }
}

impl StatisticsModel for StatisticsSummary {
    fn summary(&self) -> Result<String> {
        if self.results.is_empty() {
            return Ok("no statistics computed".to_string());
        }
        let parts: Vec<String> = self.results.iter()
            .map(|(name, report)| format!("{name}={report}"))
            .collect();
        Ok(parts.join("; "))
    }
}

// ============================================================================
// Preview
// ============================================================================

/// Preview properties in definition order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreviewProperties {
    pub values: IndexMap<String, PropertyValue>,
}

impl PreviewProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property, keeping its position if it already exists.
    pub fn put(&mut self, name: impl Into<String>, value: impl Into<PropertyValue>) {
        self.values.insert(name.into(), value.into());
    }
}

impl PreviewModel for PreviewProperties {
    fn property_names(&self) -> Vec<String> {
        self.values.keys().cloned().collect()
    }

    fn value(&self, name: &str) -> Result<PropertyValue> {
        self.values.get(name).cloned().ok_or_else(|| Error::ConfigurationRead {
            key: name.to_string(),
            message: "no such preview property".into(),
        })
    }
}
