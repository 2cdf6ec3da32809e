// エラーハンドリングの統合テスト
use crate::fixtures::{fast_config, RecordingReporter};
use bounded_buffer::cli::Cli;
use bounded_buffer::core::ExecutionMode;
use bounded_buffer::{NoOpReporter, RunCoordinator, SequentialSimulator, SimulationError};
use clap::Parser;
use std::sync::Arc;

#[test]
fn test_invalid_mode_error() {
    let cli = Cli::try_parse_from(["bounded_buffer", "bogus", "3", "5"]).unwrap();

    let error = cli.to_config().unwrap_err();
    assert!(matches!(error, SimulationError::InvalidMode { ref value } if value == "bogus"));
}

#[test]
fn test_zero_capacity_is_a_parse_failure() {
    let result = Cli::try_parse_from(["bounded_buffer", "seq", "0", "5"]);
    assert!(result.is_err());
}

#[test]
fn test_negative_delay_is_a_parse_failure() {
    let result = Cli::try_parse_from(["bounded_buffer", "seq", "3", "5", "-1"]);
    assert!(result.is_err());
}

#[test]
fn test_coordinator_validates_config() {
    let result = RunCoordinator::new(
        fast_config(ExecutionMode::Both, 3, 0),
        NoOpReporter::new(),
    );

    match result {
        Err(SimulationError::ValidationError { field, .. }) => assert_eq!(field, "items"),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("items=0 must be rejected"),
    }
}

#[test]
fn test_zero_capacity_rejected_by_sequential_simulator() {
    let config = fast_config(ExecutionMode::Sequential, 0, 5);

    match SequentialSimulator::new(&config) {
        Err(SimulationError::ValidationError { field, .. }) => assert_eq!(field, "capacity"),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("capacity=0 must be rejected"),
    }
}

#[tokio::test]
async fn test_reset_while_shared_leaves_no_side_effects() {
    let reporter = Arc::new(RecordingReporter::new());
    let mut coordinator = RunCoordinator::with_shared_reporter(
        fast_config(ExecutionMode::Parallel, 2, 3),
        Arc::clone(&reporter),
    )
    .unwrap();

    let held = coordinator.queue_handle();
    let error = coordinator.run().await.unwrap_err();

    assert!(matches!(error, SimulationError::QueueInUse));
    // タスクは起動されていない
    assert!(!reporter.has_queue_events());

    drop(held);
    let report = coordinator.run().await.unwrap();
    assert_eq!(report.parallel.unwrap().observed, vec![1, 2, 3]);
}
