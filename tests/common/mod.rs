//! Test doubles for the session and the user-facing collaborators.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use fieldnotes::model::{Color, EdgeColor, Range};
use fieldnotes::session::*;
use fieldnotes::{GraphExporter, Notifier, TargetPrompt};

/// Everything one session owns, built for the reference scenario:
/// directed, 10 nodes, 12 edges, one degree filter, gray edges.
pub struct Fixture {
    pub graph: SharedGraph,
    pub filters: FilterSet,
    pub layout: LayoutSelection,
    pub appearance: PartitionTable,
    pub statistics: StatisticsSummary,
    pub preview: PreviewProperties,
}

impl Fixture {
    pub fn scenario() -> Self {
        let mut data = GraphData::new(true);
        let nodes: Vec<_> = (0..10).map(|i| data.add_node(format!("n{i}"))).collect();
        for i in 0..12 {
            data.add_edge(nodes[i % 10], nodes[(i * 3 + 1) % 10]).unwrap();
        }
        data.edge_columns = vec!["kind".into(), "weight".into()];

        let mut filters = FilterSet::new();
        filters.register(FilterQuery::new("Degree Range").with_property("range", Range::at_least(30.0)));

        let mut preview = PreviewProperties::new();
        preview.put("edge.color", EdgeColor::custom(Color::GRAY));

        Self {
            graph: SharedGraph::new(data),
            filters,
            layout: LayoutSelection::none(),
            appearance: PartitionTable::new(),
            statistics: StatisticsSummary::new(),
            preview,
        }
    }

    pub fn models(&self) -> SubsystemModels<'_> {
        SubsystemModels {
            filters: &self.filters,
            layout: &self.layout,
            appearance: &self.appearance,
            statistics: &self.statistics,
            preview: &self.preview,
        }
    }
}

/// Answers prompts from a script and remembers where each one started.
#[derive(Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<Option<PathBuf>>,
    pub started_at: Vec<PathBuf>,
}

impl ScriptedPrompt {
    pub fn new(answers: impl IntoIterator<Item = Option<PathBuf>>) -> Self {
        Self { answers: answers.into_iter().collect(), started_at: Vec::new() }
    }
}

impl TargetPrompt for ScriptedPrompt {
    fn choose_directory(&mut self, start: &Path) -> Option<PathBuf> {
        self.started_at.push(start.to_path_buf());
        self.answers.pop_front().flatten()
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub infos: Vec<(String, String)>,
    pub errors: Vec<(String, String)>,
}

impl Notifier for RecordingNotifier {
    fn info(&mut self, title: &str, message: &str) {
        self.infos.push((title.into(), message.into()));
    }

    fn error(&mut self, title: &str, message: &str) {
        self.errors.push((title.into(), message.into()));
    }
}

/// Writes a one-line stand-in for the graph file. Can be told to fail, and
/// can check that the session graph is write-locked out while it runs.
#[derive(Default)]
pub struct StubExporter {
    pub fail: bool,
    pub watch: Option<SharedGraph>,
    pub writer_was_blocked: Cell<Option<bool>>,
    pub exported: RefCell<Vec<PathBuf>>,
}

impl GraphExporter for StubExporter {
    fn export_to(&self, graph: &dyn GraphView, path: &Path) -> io::Result<()> {
        if let Some(watched) = &self.watch {
            self.writer_was_blocked.set(Some(watched.try_write().is_none()));
        }
        if self.fail {
            return Err(io::Error::other("disk full"));
        }
        std::fs::write(path, format!("<gexf nodes=\"{}\" edges=\"{}\"/>\n", graph.node_count(), graph.edge_count()))?;
        self.exported.borrow_mut().push(path.to_path_buf());
        Ok(())
    }
}

/// Wraps a graph and counts how often its read lock is taken and released.
pub struct CountingGraph {
    pub inner: SharedGraph,
    pub acquired: AtomicUsize,
    pub released: AtomicUsize,
}

impl CountingGraph {
    pub fn new(inner: SharedGraph) -> Self {
        Self { inner, acquired: AtomicUsize::new(0), released: AtomicUsize::new(0) }
    }

    pub fn acquired(&self) -> usize {
        self.acquired.load(Ordering::SeqCst)
    }

    pub fn released(&self) -> usize {
        self.released.load(Ordering::SeqCst)
    }
}

struct CountingView<'a> {
    inner: Box<dyn GraphView + 'a>,
    released: &'a AtomicUsize,
}

impl GraphView for CountingView<'_> {
    fn is_directed(&self) -> bool { self.inner.is_directed() }
    fn node_count(&self) -> usize { self.inner.node_count() }
    fn edge_count(&self) -> usize { self.inner.edge_count() }
    fn edge_columns(&self) -> Vec<String> { self.inner.edge_columns() }
}

impl Drop for CountingView<'_> {
    fn drop(&mut self) {
        self.released.fetch_add(1, Ordering::SeqCst);
    }
}

impl GraphResource for CountingGraph {
    fn read_lock(&self) -> fieldnotes::Result<Box<dyn GraphView + '_>> {
        let inner = self.inner.read_lock()?;
        self.acquired.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(CountingView { inner, released: &self.released }))
    }
}

/// A graph whose lock can never be taken.
pub struct PoisonedGraph;

impl GraphResource for PoisonedGraph {
    fn read_lock(&self) -> fieldnotes::Result<Box<dyn GraphView + '_>> {
        Err(fieldnotes::Error::LockAcquisition("graph is being replaced".into()))
    }
}

/// Names of the files in `dir`, sorted.
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
