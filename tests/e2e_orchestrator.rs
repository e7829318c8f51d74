//! Orchestrator control flow: re-prompting, cancellation, and failures with
//! the read lock released on every path.

mod common;

use common::*;
use fieldnotes::{Error, ExportConfig, ExportOrchestrator, ExportOutcome, ExportState};

#[test]
fn test_unwritable_target_reprompts_without_writing() {
    let fixture = Fixture::scenario();
    let root = tempfile::tempdir().unwrap();
    let missing = root.path().join("does-not-exist");
    let target = root.path().join("out");
    std::fs::create_dir(&target).unwrap();

    let mut prompt = ScriptedPrompt::new([Some(missing.clone()), Some(target.clone())]);
    let exporter = StubExporter::default();
    let mut notifier = RecordingNotifier::default();
    let config = ExportConfig::default().with_start_directory(root.path());
    let outcome = ExportOrchestrator::new(config, &mut prompt, &exporter, &mut notifier)
        .run(&fixture.graph, &fixture.models())
        .unwrap();

    assert!(matches!(outcome, ExportOutcome::Completed { .. }));
    assert_eq!(prompt.started_at, [root.path().to_path_buf(), missing.clone()]);
    assert!(!missing.exists());
    assert_eq!(file_names(root.path()), ["out"]);
    assert_eq!(file_names(&target).len(), 2);
    assert_eq!(notifier.errors.len(), 1);
    assert_eq!(notifier.errors[0].0, "No permission");
    assert!(notifier.errors[0].1.contains("does-not-exist"));
}

#[test]
fn test_cancel_writes_nothing_and_never_locks() {
    let fixture = Fixture::scenario();
    let graph = CountingGraph::new(fixture.graph.clone());
    let root = tempfile::tempdir().unwrap();
    let missing = root.path().join("nope");

    let mut prompt = ScriptedPrompt::new([Some(missing), None]);
    let exporter = StubExporter::default();
    let mut notifier = RecordingNotifier::default();
    let mut orchestrator =
        ExportOrchestrator::new(ExportConfig::default(), &mut prompt, &exporter, &mut notifier);

    assert_eq!(orchestrator.run(&graph, &fixture.models()).unwrap(), ExportOutcome::Cancelled);
    assert_eq!(orchestrator.state(), ExportState::Idle);
    drop(orchestrator);

    assert_eq!(graph.acquired(), 0);
    assert!(file_names(root.path()).is_empty());
    assert!(notifier.infos.is_empty());
}

#[test]
fn test_settings_write_failure_releases_lock_once() {
    let fixture = Fixture::scenario();
    let graph = CountingGraph::new(fixture.graph.clone());
    let out = tempfile::tempdir().unwrap();

    let config = ExportConfig {
        settings_prefix: "missing-subdir/settings_".into(),
        ..ExportConfig::default()
    };
    let mut prompt = ScriptedPrompt::new([Some(out.path().to_path_buf())]);
    let exporter = StubExporter::default();
    let mut notifier = RecordingNotifier::default();
    let mut orchestrator = ExportOrchestrator::new(config, &mut prompt, &exporter, &mut notifier);

    let err = orchestrator.run(&graph, &fixture.models()).unwrap_err();
    assert!(matches!(err, Error::IoWrite { .. }));
    assert_eq!(orchestrator.state(), ExportState::Failed);
    drop(orchestrator);

    assert_eq!(graph.acquired(), 1);
    assert_eq!(graph.released(), 1);
    assert!(fixture.graph.try_write().is_some());
    assert!(exporter.exported.borrow().is_empty());
    assert!(file_names(out.path()).is_empty());
    assert_eq!(notifier.errors.len(), 1);
    assert_eq!(notifier.errors[0].0, "Error Saving");
    assert!(notifier.errors[0].1.contains("missing-subdir"));
    assert!(notifier.infos.is_empty());
}

#[test]
fn test_graph_export_failure_is_fatal() {
    let fixture = Fixture::scenario();
    let graph = CountingGraph::new(fixture.graph.clone());
    let out = tempfile::tempdir().unwrap();

    let mut prompt = ScriptedPrompt::new([Some(out.path().to_path_buf())]);
    let exporter = StubExporter { fail: true, ..StubExporter::default() };
    let mut notifier = RecordingNotifier::default();
    let err = ExportOrchestrator::new(ExportConfig::default(), &mut prompt, &exporter, &mut notifier)
        .run(&graph, &fixture.models())
        .unwrap_err();

    match err {
        Error::IoWrite { path, source } => {
            assert!(path.to_string_lossy().ends_with(".gexf"));
            assert_eq!(source.to_string(), "disk full");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(graph.released(), 1);
    assert_eq!(notifier.errors.len(), 1);
    assert!(notifier.errors[0].1.contains("disk full"));
    // The settings report was complete before the graph export started.
    assert_eq!(file_names(out.path()).len(), 1);
}

#[test]
fn test_lock_failure_is_reported() {
    let fixture = Fixture::scenario();
    let out = tempfile::tempdir().unwrap();

    let mut prompt = ScriptedPrompt::new([Some(out.path().to_path_buf())]);
    let exporter = StubExporter::default();
    let mut notifier = RecordingNotifier::default();
    let err = ExportOrchestrator::new(ExportConfig::default(), &mut prompt, &exporter, &mut notifier)
        .run(&PoisonedGraph, &fixture.models())
        .unwrap_err();

    assert!(matches!(err, Error::LockAcquisition(_)));
    assert!(file_names(out.path()).is_empty());
    assert_eq!(notifier.errors.len(), 1);
}

#[test]
fn test_writers_excluded_during_export_and_admitted_after() {
    let fixture = Fixture::scenario();
    let graph = CountingGraph::new(fixture.graph.clone());
    let out = tempfile::tempdir().unwrap();

    let mut prompt = ScriptedPrompt::new([Some(out.path().to_path_buf())]);
    let exporter = StubExporter { watch: Some(fixture.graph.clone()), ..StubExporter::default() };
    let mut notifier = RecordingNotifier::default();
    ExportOrchestrator::new(ExportConfig::default(), &mut prompt, &exporter, &mut notifier)
        .run(&graph, &fixture.models())
        .unwrap();

    assert_eq!(exporter.writer_was_blocked.get(), Some(true));
    assert_eq!(graph.acquired(), 1);
    assert_eq!(graph.released(), 1);
    assert!(fixture.graph.try_write().is_some());
}
