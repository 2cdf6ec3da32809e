// モード別のエンドツーエンドテスト
use crate::fixtures::{fast_config, Recorded, RecordingReporter};
use bounded_buffer::core::{Actor, ExecutionMode, Phase, QueueEvent};
use bounded_buffer::RunCoordinator;
use std::sync::Arc;
use tokio::time::{timeout, Duration};

const GUARD: Duration = Duration::from_secs(10);

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_parallel_capacity_one_three_items() {
    let reporter = Arc::new(RecordingReporter::new());
    let mut coordinator = RunCoordinator::with_shared_reporter(
        fast_config(ExecutionMode::Parallel, 1, 3),
        Arc::clone(&reporter),
    )
    .unwrap();

    let report = timeout(GUARD, coordinator.run()).await.unwrap().unwrap();
    let parallel = report.parallel.unwrap();

    assert_eq!(parallel.consumed, 3);
    assert_eq!(parallel.observed, vec![1, 2, 3]);
    assert_eq!(reporter.consumed_items(Actor::Consumer), vec![1, 2, 3]);

    // 占有数は常に [0, 1]
    for actor in [Actor::Producer, Actor::Consumer] {
        for (_, occupancy, capacity) in reporter.events_of(actor) {
            assert_eq!(capacity, 1);
            assert!(occupancy <= 1);
        }
    }

    let consumer_events = reporter.events_of(Actor::Consumer);
    assert_eq!(
        consumer_events.last().unwrap().0,
        QueueEvent::ProductionEnded { total: 3 }
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_parallel_all_items_in_order_for_many_shapes() {
    for capacity in [1usize, 2, 3, 7] {
        for items in [1u64, 2, 5, 23] {
            let reporter = Arc::new(RecordingReporter::new());
            let mut coordinator = RunCoordinator::with_shared_reporter(
                fast_config(ExecutionMode::Parallel, capacity, items),
                Arc::clone(&reporter),
            )
            .unwrap();

            let outcome = timeout(GUARD, coordinator.run_parallel())
                .await
                .unwrap()
                .unwrap();

            let expected: Vec<u64> = (1..=items).collect();
            assert_eq!(outcome.consumed, items, "capacity={capacity} items={items}");
            assert_eq!(outcome.observed, expected);

            for (_, occupancy, _) in reporter.events_of(Actor::Producer) {
                assert!(occupancy <= capacity);
            }
        }
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_parallel_with_slow_consumer_blocks_producer() {
    let config = fast_config(ExecutionMode::Parallel, 2, 6).with_consumer_delay(10);
    let reporter = Arc::new(RecordingReporter::new());
    let mut coordinator =
        RunCoordinator::with_shared_reporter(config, Arc::clone(&reporter)).unwrap();

    let outcome = timeout(GUARD, coordinator.run_parallel())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(outcome.observed, vec![1, 2, 3, 4, 5, 6]);

    // 消費が遅いので生産者は満杯で待たされる
    let producer_waits: Vec<_> = reporter
        .events_of(Actor::Producer)
        .into_iter()
        .filter(|(event, _, _)| *event == QueueEvent::Waiting)
        .collect();
    assert!(!producer_waits.is_empty());
    for (_, occupancy, capacity) in producer_waits {
        assert_eq!(occupancy, capacity);
    }
}

#[tokio::test]
async fn test_sequential_capacity_three_five_items() {
    let reporter = Arc::new(RecordingReporter::new());
    let mut coordinator = RunCoordinator::with_shared_reporter(
        fast_config(ExecutionMode::Sequential, 3, 5),
        Arc::clone(&reporter),
    )
    .unwrap();

    let report = coordinator.run().await.unwrap();
    assert!(report.parallel.is_none());
    assert_eq!(report.sequential.unwrap().consumed, 5);

    // 充填は最大3個ずつ、次の充填前に完全に排出する
    let mut run_lengths = Vec::new();
    let mut current: Option<(Actor, usize)> = None;
    for record in reporter.snapshot() {
        if let Recorded::Event { actor, event, .. } = record {
            if matches!(event, QueueEvent::TotalConsumed { .. }) {
                continue;
            }
            current = match current {
                Some((a, n)) if a == actor => Some((a, n + 1)),
                Some(previous) => {
                    run_lengths.push(previous);
                    Some((actor, 1))
                }
                None => Some((actor, 1)),
            };
        }
    }
    run_lengths.extend(current);

    assert_eq!(
        run_lengths,
        vec![
            (Actor::SequentialProducer, 3),
            (Actor::SequentialConsumer, 3),
            (Actor::SequentialProducer, 2),
            (Actor::SequentialConsumer, 2),
        ]
    );

    let last = reporter.events_of(Actor::SequentialConsumer).pop().unwrap();
    assert_eq!(last, (QueueEvent::TotalConsumed { total: 5 }, 0, 3));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_both_mode_reports_exact_difference() {
    let config = fast_config(ExecutionMode::Both, 2, 4)
        .with_producer_delay(2)
        .with_consumer_delay(3);
    let reporter = Arc::new(RecordingReporter::new());
    let mut coordinator =
        RunCoordinator::with_shared_reporter(config, Arc::clone(&reporter)).unwrap();

    let report = timeout(GUARD, coordinator.run()).await.unwrap().unwrap();

    let seq_ms = report.sequential_ms().unwrap();
    let par_ms = report.parallel_ms().unwrap();
    assert_eq!(report.difference_ms(), Some(seq_ms as i64 - par_ms as i64));

    let records = reporter.snapshot();
    assert_eq!(records.first(), Some(&Recorded::Parameters));
    assert_eq!(
        records.last(),
        Some(&Recorded::Summary(Some(seq_ms as i64 - par_ms as i64)))
    );

    // 逐次フェーズが並列フェーズより先に完了する
    let seq_end = records
        .iter()
        .position(|r| *r == Recorded::PhaseFinished(Phase::Sequential))
        .unwrap();
    let par_start = records
        .iter()
        .position(|r| *r == Recorded::PhaseStarted(Phase::Parallel))
        .unwrap();
    assert!(seq_end < par_start);

    assert_eq!(reporter.consumed_items(Actor::SequentialConsumer), vec![1, 2, 3, 4]);
    assert_eq!(reporter.consumed_items(Actor::Consumer), vec![1, 2, 3, 4]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_parallel_tasks_announce_start_and_finish() {
    let reporter = Arc::new(RecordingReporter::new());
    let mut coordinator = RunCoordinator::with_shared_reporter(
        fast_config(ExecutionMode::Parallel, 2, 3),
        Arc::clone(&reporter),
    )
    .unwrap();

    coordinator.run_parallel().await.unwrap();

    let records = reporter.snapshot();
    for actor in [Actor::Producer, Actor::Consumer] {
        let started = records
            .iter()
            .filter(|r| **r == Recorded::TaskStarted(actor))
            .count();
        let finished = records
            .iter()
            .filter(|r| **r == Recorded::TaskFinished(actor))
            .count();
        assert_eq!((started, finished), (1, 1));
    }
}
