// BoundedQueue - 容量固定のFIFOバッファ
// 生産者・消費者の両タスクがArc経由で共有する唯一の可変状態

use crate::core::{Actor, Item, QueueEvent, SimulationError, SimulationReporter, SimulationResult};
use parking_lot::Mutex;
use std::collections::VecDeque;
use tokio::sync::Notify;

/// pop の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopOutcome {
    /// 先頭アイテムと取り出し直後の占有数
    Item { item: Item, occupancy: usize },
    /// 生産終了かつバッファ空。以降アイテムは届かない
    Finished,
}

#[derive(Debug, Default)]
struct QueueState {
    items: VecDeque<Item>,
    finished: bool,
}

/// ブロッキング push/pop を持つ容量固定のFIFO
///
/// 中身と終了フラグは単一のロックで保護する。ロックはキュー操作の間だけ保持し、
/// `.await` をまたいで保持しない。待機は `Notify` で行い、待機者は
/// 述語を確認する前に `Notified` を登録するため、確認と待機の間の通知を取りこぼさない。
#[derive(Debug)]
pub struct BoundedQueue {
    state: Mutex<QueueState>,
    capacity: usize,
    /// 生産者側: 空きができた
    space_available: Notify,
    /// 消費者側: アイテムが入った、または生産が終了した
    item_available: Notify,
}

impl BoundedQueue {
    pub fn new(capacity: usize) -> SimulationResult<Self> {
        if capacity == 0 {
            return Err(SimulationError::validation(
                "capacity",
                "buffer capacity must be at least 1",
            ));
        }

        Ok(Self {
            state: Mutex::new(QueueState {
                items: VecDeque::new(),
                finished: false,
            }),
            capacity,
            space_available: Notify::new(),
            item_available: Notify::new(),
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.state.lock().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.lock().items.is_empty()
    }

    pub fn is_finished(&self) -> bool {
        self.state.lock().finished
    }

    /// 末尾に追加し、追加直後の占有数を返す
    ///
    /// 満杯の間はブロックする。最初に待機へ入る直前に一度だけ `Waiting` を報告する。
    pub async fn push<R>(&self, item: Item, reporter: &R) -> usize
    where
        R: SimulationReporter + ?Sized,
    {
        let mut reported = false;

        loop {
            let space = self.space_available.notified();

            let occupancy = {
                let mut state = self.state.lock();
                if state.items.len() < self.capacity {
                    state.items.push_back(item);
                    let occupancy = state.items.len();
                    drop(state);
                    self.item_available.notify_one();
                    return occupancy;
                }
                state.items.len()
            };

            if !reported {
                reporter
                    .report_event(Actor::Producer, &QueueEvent::Waiting, occupancy, self.capacity)
                    .await;
                reported = true;
            }

            space.await;
        }
    }

    /// 先頭を取り出す
    ///
    /// 空かつ未終了の間はブロックする。空かつ終了済みなら `Finished` を返す。
    /// 起床のたびに両方の条件をロック下で再評価する。
    pub async fn pop<R>(&self, reporter: &R) -> PopOutcome
    where
        R: SimulationReporter + ?Sized,
    {
        let mut reported = false;

        loop {
            let available = self.item_available.notified();

            {
                let mut state = self.state.lock();
                if let Some(item) = state.items.pop_front() {
                    let occupancy = state.items.len();
                    drop(state);
                    self.space_available.notify_one();
                    return PopOutcome::Item { item, occupancy };
                }
                if state.finished {
                    return PopOutcome::Finished;
                }
            }

            if !reported {
                reporter
                    .report_event(Actor::Consumer, &QueueEvent::Waiting, 0, self.capacity)
                    .await;
                reported = true;
            }

            available.await;
        }
    }

    /// 生産終了を通知し、待機中の消費者を全て起こす（冪等）
    pub fn mark_finished(&self) {
        self.state.lock().finished = true;
        self.item_available.notify_waiters();
    }

    /// 中身と終了フラグをクリアする
    ///
    /// `&mut self` を要求するため、`Arc` を他タスクと共有している間は呼べない。
    pub fn reset(&mut self) {
        let state = self.state.get_mut();
        state.items.clear();
        state.finished = false;
        // 前回実行で溜まった通知許可を破棄
        self.space_available = Notify::new();
        self.item_available = Notify::new();
    }
}
