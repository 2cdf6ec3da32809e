// Consumer - バッファからの消費

use super::bounded_queue::{BoundedQueue, PopOutcome};
use crate::core::{Actor, Item, QueueEvent, SimulationError, SimulationReporter, SimulationResult};
use std::sync::Arc;
use std::time::Duration;

/// 消費側が観測した結果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsumptionSummary {
    pub consumed: u64,
    pub observed: Vec<Item>,
}

/// Consumer: 終了通知かつバッファ空を観測するまで pop し続ける
///
/// アイテムは 1 から連番で届くはず。順序違反を見つけても最後まで排出してから
/// エラーを返す（途中で抜けると生産者が満杯のまま待ち続けるため）。
pub fn spawn_consumer<R>(
    queue: Arc<BoundedQueue>,
    delay: Duration,
    reporter: Arc<R>,
) -> tokio::task::JoinHandle<SimulationResult<ConsumptionSummary>>
where
    R: SimulationReporter + ?Sized + 'static,
{
    tokio::spawn(async move {
        reporter.report_task_started(Actor::Consumer).await;

        let mut summary = ConsumptionSummary::default();
        let mut violation = None;

        loop {
            match queue.pop(reporter.as_ref()).await {
                PopOutcome::Item { item, occupancy } => {
                    let expected = summary.consumed + 1;
                    if item != expected && violation.is_none() {
                        violation = Some(SimulationError::order_violation(expected, item));
                    }

                    summary.consumed += 1;
                    summary.observed.push(item);
                    reporter
                        .report_event(
                            Actor::Consumer,
                            &QueueEvent::Consumed(item),
                            occupancy,
                            queue.capacity(),
                        )
                        .await;

                    if !delay.is_zero() {
                        tokio::time::sleep(delay).await;
                    }
                }
                PopOutcome::Finished => {
                    reporter
                        .report_event(
                            Actor::Consumer,
                            &QueueEvent::ProductionEnded {
                                total: summary.consumed,
                            },
                            0,
                            queue.capacity(),
                        )
                        .await;
                    reporter.report_task_finished(Actor::Consumer).await;
                    break;
                }
            }
        }

        match violation {
            Some(error) => Err(error),
            None => Ok(summary),
        }
    })
}
