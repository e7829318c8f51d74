//! # fieldnotes — Settings Snapshots for Graph-Analysis Sessions
//!
//! Captures the configurable state of an editing session (active filters,
//! the selected layout, statistics, appearance partitions, preview
//! properties) as an ordered plain-text report, written next to an export
//! of the graph itself under one shared timestamp.
//!
//! ## Design Principles
//!
//! 1. **Collaborators are injected**: the graph and its subsystem models arrive as trait objects
//! 2. **Formatting is pure**: `PropertyValue` → `String` has no failure path
//! 3. **One property never sinks a snapshot**: unreadable entries are logged and skipped
//! 4. **The read lock spans both files**: report and graph describe the same state
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fieldnotes::session::*;
//! use fieldnotes::{ExportConfig, SnapshotAssembler, ReportWriter};
//! use fieldnotes::model::{Color, EdgeColor, Range};
//!
//! # fn example() -> fieldnotes::Result<()> {
//! let graph = SharedGraph::new(GraphData::new(true));
//! let mut filters = FilterSet::new();
//! filters.register(FilterQuery::new("Degree Range").with_property("range", Range::at_least(30.0)));
//! let mut preview = PreviewProperties::new();
//! preview.put("edge.color", EdgeColor::custom(Color::GRAY));
//!
//! let (layout, appearance, statistics) =
//!     (LayoutSelection::none(), PartitionTable::new(), StatisticsSummary::new());
//! let models = SubsystemModels {
//!     filters: &filters,
//!     layout: &layout,
//!     appearance: &appearance,
//!     statistics: &statistics,
//!     preview: &preview,
//! };
//!
//! let view = graph.read_lock()?;
//! let document = SnapshotAssembler::new(&ExportConfig::default()).assemble(view.as_ref(), &models);
//! ReportWriter::default().write(&document, &mut std::io::stdout())?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Report Sections
//!
//! | Section | Source | Notes |
//! |---------|--------|-------|
//! | General | graph view | directedness, edge and node counts |
//! | Filter | `FilterModel` | `# filter {i}` then the query's parameters |
//! | Layout | `LayoutModel` | empty when no layout is selected |
//! | Appearance | `AppearanceModel` | only with `include_appearance` |
//! | Statistics | `StatisticsModel` | one opaque summary |
//! | Preview | `PreviewModel` | colors unwrapped, legacy keys corrected |

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod session;
pub mod collect;
pub mod snapshot;
pub mod report;
pub mod orchestrator;
pub mod config;

// ============================================================================
// Re-exports: Model
// ============================================================================

pub use model::{
    PropertyValue, Color, Section, SectionKind, SnapshotDocument,
    format_value, normalize_key, NOT_EXTRACTED,
};

// ============================================================================
// Re-exports: Pipeline
// ============================================================================

pub use config::ExportConfig;
pub use snapshot::{ExportTimestamp, SnapshotAssembler};
pub use report::{ReportWriter, ParsedSection, parse_report};
pub use orchestrator::{
    ExportOrchestrator, ExportOutcome, ExportState,
    GraphExporter, Notifier, TargetPrompt,
};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Could not read '{key}': {message}")]
    ConfigurationRead { key: String, message: String },

    #[error("Cannot create files in '{}'", .0.display())]
    TargetUnwritable(std::path::PathBuf),

    #[error("Could not write '{}': {source}", .path.display())]
    IoWrite {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not lock graph for reading: {0}")]
    LockAcquisition(String),

    #[error("Malformed report at line {line}: {message}")]
    MalformedReport { line: usize, message: String },

    #[error("Invalid export configuration: {0}")]
    Config(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
