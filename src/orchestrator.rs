//! Export orchestration — prompt, lock, snapshot, write, report.
//!
//! ```text
//! Idle → AwaitingTarget ⟲ (unwritable) → Collecting → Writing → Done
//!                                                            ↘ Failed
//! ```
//!
//! The graph is read-locked from the start of collection until both files
//! are written, so the report and the graph file describe the same state.
//! The lock is released before the user is told the outcome.

use std::io;
use std::path::{Path, PathBuf};

use tracing::{error, info, warn};

use crate::config::ExportConfig;
use crate::report::ReportWriter;
use crate::session::{GraphResource, GraphView, SubsystemModels};
use crate::snapshot::{ExportTimestamp, SnapshotAssembler};
use crate::{Error, Result};

// ============================================================================
// Collaborators
// ============================================================================

/// Asks the user where to put the export.
pub trait TargetPrompt {
    /// `None` when the user cancels.
    fn choose_directory(&mut self, start: &Path) -> Option<PathBuf>;
}

/// Writes the graph itself in an interchange format.
pub trait GraphExporter {
    fn export_to(&self, graph: &dyn GraphView, path: &Path) -> io::Result<()>;
}

/// User-facing messages.
pub trait Notifier {
    fn info(&mut self, title: &str, message: &str);
    fn error(&mut self, title: &str, message: &str);
}

pub const EXPORT_COMPLETE_TITLE: &str = "Export Complete";
pub const EXPORT_COMPLETE_MESSAGE: &str = "Fieldnotes export complete";
pub const NO_PERMISSION_TITLE: &str = "No permission";
pub const SAVE_ERROR_TITLE: &str = "Error Saving";

// ============================================================================
// State machine
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportState {
    Idle,
    AwaitingTarget,
    Collecting,
    Writing,
    Done,
    Failed,
}

/// What an export produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Completed { settings: PathBuf, graph: PathBuf },
    Cancelled,
}

/// Drives one export at a time against injected collaborators.
pub struct ExportOrchestrator<'a> {
    config: ExportConfig,
    prompt: &'a mut dyn TargetPrompt,
    exporter: &'a dyn GraphExporter,
    notifier: &'a mut dyn Notifier,
    state: ExportState,
}

impl<'a> ExportOrchestrator<'a> {
    pub fn new(
        config: ExportConfig,
        prompt: &'a mut dyn TargetPrompt,
        exporter: &'a dyn GraphExporter,
        notifier: &'a mut dyn Notifier,
    ) -> Self {
        Self { config, prompt, exporter, notifier, state: ExportState::Idle }
    }

    pub fn state(&self) -> ExportState {
        self.state
    }

    fn transition(&mut self, next: ExportState) {
        info!(from = ?self.state, to = ?next, "export state");
        self.state = next;
    }

    /// Run a full export: choose a directory, snapshot the session, write
    /// `settings_{stamp}.txt` and `graph_{stamp}.gexf`.
    ///
    /// I/O and lock failures are shown to the user and returned; nothing is
    /// retried.
    pub fn run(&mut self, graph: &dyn GraphResource, models: &SubsystemModels<'_>) -> Result<ExportOutcome> {
        self.transition(ExportState::AwaitingTarget);
        let Some(dir) = self.await_target() else {
            info!("export cancelled");
            self.transition(ExportState::Idle);
            return Ok(ExportOutcome::Cancelled);
        };

        match self.export_locked(graph, models, &dir) {
            Ok((settings, graph)) => {
                self.transition(ExportState::Done);
                self.notifier.info(EXPORT_COMPLETE_TITLE, EXPORT_COMPLETE_MESSAGE);
                Ok(ExportOutcome::Completed { settings, graph })
            }
            Err(e) => {
                error!(error = %e, "export failed");
                self.transition(ExportState::Failed);
                self.notifier.error(SAVE_ERROR_TITLE, &e.to_string());
                Err(e)
            }
        }
    }

    /// Prompt until the user picks a writable directory or cancels.
    fn await_target(&mut self) -> Option<PathBuf> {
        let mut start = self.config.start_directory.clone();
        loop {
            let dir = self.prompt.choose_directory(&start)?;
            match ensure_writable(&dir) {
                Ok(()) => {
                    info!(dir = %dir.display(), "export target selected");
                    return Some(dir);
                }
                Err(e) => {
                    warn!(dir = %dir.display(), error = %e, "export target rejected");
                    self.notifier.error(
                        NO_PERMISSION_TITLE,
                        &format!(
                            "Cannot create files in folder '{}'. Please choose a different folder.",
                            dir.display()
                        ),
                    );
                    start = dir;
                }
            }
        }
    }

    /// Everything that happens under the read lock. The view is dropped,
    /// and the lock released, when this returns.
    fn export_locked(
        &mut self,
        graph: &dyn GraphResource,
        models: &SubsystemModels<'_>,
        dir: &Path,
    ) -> Result<(PathBuf, PathBuf)> {
        self.transition(ExportState::Collecting);
        let view = graph.read_lock()?;
        let timestamp = ExportTimestamp::now();
        let settings_path = dir.join(timestamp.settings_file_name(&self.config.settings_prefix));
        let graph_path = dir.join(timestamp.graph_file_name(&self.config.graph_prefix));

        let document = SnapshotAssembler::new(&self.config).assemble(view.as_ref(), models);

        self.transition(ExportState::Writing);
        ReportWriter::new(self.config.rule_width).write_file(&document, &settings_path)?;

        info!(path = %graph_path.display(), "exporting graph");
        self.exporter
            .export_to(view.as_ref(), &graph_path)
            .map_err(|source| Error::IoWrite { path: graph_path.clone(), source })?;
        info!(path = %graph_path.display(), "graph exported");

        Ok((settings_path, graph_path))
    }
}

/// A directory is writable when a probe file can be created in it.
pub fn ensure_writable(dir: &Path) -> Result<()> {
    if !dir.is_dir() {
        return Err(Error::TargetUnwritable(dir.to_path_buf()));
    }
    tempfile::Builder::new()
        .prefix(".fieldnotes-probe")
        .tempfile_in(dir)
        .map(drop)
        .map_err(|_| Error::TargetUnwritable(dir.to_path_buf()))
}
