// RunCoordinator - 実行モードの選択とフェーズのオーケストレーション

use super::{
    bounded_queue::BoundedQueue, consumer::spawn_consumer, producer::spawn_producer,
    sequential::SequentialSimulator,
};
use crate::{
    core::{Phase, PhaseOutcome, RunReport, SimulationError, SimulationReporter, SimulationResult},
    services::config::SimulationConfig,
};
use std::sync::Arc;
use std::time::Instant;
use tokio::task::JoinHandle;

/// 逐次・並列・両方の実行を管理するコーディネーター
///
/// 共有キューはここが所有し、各タスクには `Arc` のクローンを渡す。
/// リセットは `Arc::get_mut` 経由でしか行えないため、タスクが保持する
/// クローンが全て解放される（= join 済み）まではリセットできない。
pub struct RunCoordinator<R: ?Sized> {
    config: SimulationConfig,
    queue: Arc<BoundedQueue>,
    reporter: Arc<R>,
}

impl<R> RunCoordinator<R>
where
    R: SimulationReporter + 'static,
{
    /// 新しいコーディネーターを作成（設定は検証済みであること）
    pub fn new(config: SimulationConfig, reporter: R) -> SimulationResult<Self> {
        Self::with_shared_reporter(config, Arc::new(reporter))
    }
}

impl<R> RunCoordinator<R>
where
    R: SimulationReporter + ?Sized + 'static,
{
    /// 報告先を他と共有する場合のコンストラクタ
    pub fn with_shared_reporter(config: SimulationConfig, reporter: Arc<R>) -> SimulationResult<Self> {
        config.validate()?;
        let queue = Arc::new(BoundedQueue::new(config.capacity())?);

        Ok(Self {
            config,
            queue,
            reporter,
        })
    }

    /// 共有キューへのハンドル
    ///
    /// 保持している間は `run_parallel` のリセットが `QueueInUse` で失敗する。
    pub fn queue_handle(&self) -> Arc<BoundedQueue> {
        Arc::clone(&self.queue)
    }

    /// 設定されたモードの全フェーズを実行し、サマリーを報告する
    pub async fn run(&mut self) -> SimulationResult<RunReport> {
        self.reporter.report_parameters(&self.config).await;

        let mut report = RunReport::default();
        for phase in self.config.mode().phases() {
            match phase {
                Phase::Sequential => report.sequential = Some(self.run_sequential().await?),
                Phase::Parallel => report.parallel = Some(self.run_parallel().await?),
            }
        }

        self.reporter.report_summary(&report).await;
        Ok(report)
    }

    /// 逐次シミュレーションを1回実行
    pub async fn run_sequential(&self) -> SimulationResult<PhaseOutcome> {
        let simulator = SequentialSimulator::new(&self.config)?;
        self.reporter.report_phase_started(Phase::Sequential).await;

        let start_time = Instant::now();
        let outcome = simulator.run(self.reporter.as_ref()).await;
        let elapsed = start_time.elapsed();

        self.reporter.report_phase_finished(Phase::Sequential).await;

        Ok(PhaseOutcome {
            phase: Phase::Sequential,
            elapsed,
            consumed: outcome.consumed,
            observed: outcome.observed,
        })
    }

    /// キューをリセットし、生産者・消費者を並行実行して両方の完了を待つ
    pub async fn run_parallel(&mut self) -> SimulationResult<PhaseOutcome> {
        self.reset_queue()?;
        self.reporter.report_phase_started(Phase::Parallel).await;

        let start_time = Instant::now();

        let mut producer_handle = spawn_producer(
            Arc::clone(&self.queue),
            self.config.items(),
            self.config.producer_delay(),
            Arc::clone(&self.reporter),
        );
        let mut consumer_handle = spawn_consumer(
            Arc::clone(&self.queue),
            self.config.consumer_delay(),
            Arc::clone(&self.reporter),
        );

        // 両タスクの完了を待機。片方が失敗したら残りを中断し、
        // キューのクローンが解放されてからエラーを返す
        let joined = tokio::try_join!(
            join_task(&mut producer_handle),
            join_task(&mut consumer_handle)
        );
        let (_, summary) = match joined {
            Ok(results) => results,
            Err(error) => {
                cancel_task(producer_handle).await;
                cancel_task(consumer_handle).await;
                return Err(error);
            }
        };

        let elapsed = start_time.elapsed();
        self.reporter.report_phase_finished(Phase::Parallel).await;

        Ok(PhaseOutcome {
            phase: Phase::Parallel,
            elapsed,
            consumed: summary.consumed,
            observed: summary.observed,
        })
    }

    /// 排他アクセスが取れる場合のみキューをリセット
    fn reset_queue(&mut self) -> SimulationResult<()> {
        let queue = Arc::get_mut(&mut self.queue).ok_or_else(SimulationError::queue_in_use)?;
        queue.reset();
        Ok(())
    }
}

async fn join_task<T>(handle: &mut JoinHandle<SimulationResult<T>>) -> SimulationResult<T> {
    handle.await?
}

/// 未完了のタスクを中断し、終了するまで待つ
async fn cancel_task<T>(handle: JoinHandle<T>) {
    if !handle.is_finished() {
        handle.abort();
        let _ = handle.await;
    }
}
