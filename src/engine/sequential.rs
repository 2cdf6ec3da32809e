// SequentialSimulator - 単一制御フローでのベースライン
// 共有キューも並行プリミティブも使わず、ローカルバッファで充填と排出を交互に行う

use crate::core::{Actor, Item, QueueEvent, SimulationReporter, SimulationResult};
use crate::services::config::SimulationConfig;
use std::collections::VecDeque;
use std::time::Duration;

/// 逐次シミュレーションの結果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SequentialOutcome {
    pub consumed: u64,
    pub observed: Vec<Item>,
    /// 各充填サイクルで生産した個数
    pub batches: Vec<usize>,
}

/// 生産と消費の休止が重ならない逐次シミュレーター
pub struct SequentialSimulator {
    capacity: usize,
    items: u64,
    producer_delay: Duration,
    consumer_delay: Duration,
}

impl SequentialSimulator {
    /// 設定を検証してから作成する。容量・アイテム数の置き換えは行わない
    pub fn new(config: &SimulationConfig) -> SimulationResult<Self> {
        config.validate()?;

        Ok(Self {
            capacity: config.capacity(),
            items: config.items(),
            producer_delay: config.producer_delay(),
            consumer_delay: config.consumer_delay(),
        })
    }

    /// 全アイテムを生産・消費し終えるまで充填/排出サイクルを繰り返す
    pub async fn run<R>(&self, reporter: &R) -> SequentialOutcome
    where
        R: SimulationReporter + ?Sized,
    {
        let mut buffer: VecDeque<Item> = VecDeque::new();
        let mut outcome = SequentialOutcome::default();
        let mut next: Item = 1;

        while next <= self.items || !buffer.is_empty() {
            // 充填: 容量いっぱいか、アイテムが尽きるまで
            let mut batch = 0;
            while next <= self.items && buffer.len() < self.capacity {
                buffer.push_back(next);
                batch += 1;
                reporter
                    .report_event(
                        Actor::SequentialProducer,
                        &QueueEvent::Produced(next),
                        buffer.len(),
                        self.capacity,
                    )
                    .await;
                next += 1;
                pause(self.producer_delay).await;
            }
            if batch > 0 {
                outcome.batches.push(batch);
            }

            // 排出: バッファが空になるまで
            while let Some(item) = buffer.pop_front() {
                outcome.consumed += 1;
                outcome.observed.push(item);
                reporter
                    .report_event(
                        Actor::SequentialConsumer,
                        &QueueEvent::Consumed(item),
                        buffer.len(),
                        self.capacity,
                    )
                    .await;
                pause(self.consumer_delay).await;
            }
        }

        reporter
            .report_event(
                Actor::SequentialConsumer,
                &QueueEvent::TotalConsumed {
                    total: outcome.consumed,
                },
                0,
                self.capacity,
            )
            .await;

        outcome
    }
}

async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
