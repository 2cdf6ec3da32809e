// Producer - 連番アイテムの生産

use super::bounded_queue::BoundedQueue;
use crate::core::{Actor, QueueEvent, SimulationReporter, SimulationResult};
use std::sync::Arc;
use std::time::Duration;

/// Producer: 1..=items を順に push し、最後に終了を通知する
///
/// push 後はロックを持たずに `delay` だけ休止する。終了通知はちょうど一度。
pub fn spawn_producer<R>(
    queue: Arc<BoundedQueue>,
    items: u64,
    delay: Duration,
    reporter: Arc<R>,
) -> tokio::task::JoinHandle<SimulationResult<u64>>
where
    R: SimulationReporter + ?Sized + 'static,
{
    tokio::spawn(async move {
        reporter.report_task_started(Actor::Producer).await;

        for item in 1..=items {
            let occupancy = queue.push(item, reporter.as_ref()).await;
            reporter
                .report_event(
                    Actor::Producer,
                    &QueueEvent::Produced(item),
                    occupancy,
                    queue.capacity(),
                )
                .await;

            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
        }

        queue.mark_finished();
        reporter.report_task_finished(Actor::Producer).await;
        Ok(items)
    })
}
