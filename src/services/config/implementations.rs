// 設定管理の具象実装

use crate::core::{ExecutionMode, SimulationError, SimulationResult};
use std::time::Duration;

pub const DEFAULT_CAPACITY: usize = 3;
pub const DEFAULT_ITEMS: u64 = 12;
pub const DEFAULT_PRODUCER_DELAY_MS: u64 = 120;
pub const DEFAULT_CONSUMER_DELAY_MS: u64 = 150;

/// 1回の実行に使う不変パラメータ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    mode: ExecutionMode,
    capacity: usize,
    items: u64,
    producer_delay_ms: u64,
    consumer_delay_ms: u64,
}

impl SimulationConfig {
    pub fn new(mode: ExecutionMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_items(mut self, items: u64) -> Self {
        self.items = items;
        self
    }

    pub fn with_producer_delay(mut self, millis: u64) -> Self {
        self.producer_delay_ms = millis;
        self
    }

    pub fn with_consumer_delay(mut self, millis: u64) -> Self {
        self.consumer_delay_ms = millis;
        self
    }

    /// 容量・アイテム数はいずれも1以上
    pub fn validate(&self) -> SimulationResult<()> {
        if self.capacity == 0 {
            return Err(SimulationError::validation(
                "capacity",
                "buffer capacity must be at least 1",
            ));
        }

        if self.items == 0 {
            return Err(SimulationError::validation(
                "items",
                "item count must be at least 1",
            ));
        }

        Ok(())
    }

    pub fn mode(&self) -> ExecutionMode {
        self.mode
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn items(&self) -> u64 {
        self.items
    }

    pub fn producer_delay(&self) -> Duration {
        Duration::from_millis(self.producer_delay_ms)
    }

    pub fn consumer_delay(&self) -> Duration {
        Duration::from_millis(self.consumer_delay_ms)
    }

    pub fn producer_delay_ms(&self) -> u64 {
        self.producer_delay_ms
    }

    pub fn consumer_delay_ms(&self) -> u64 {
        self.consumer_delay_ms
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            mode: ExecutionMode::Both,
            capacity: DEFAULT_CAPACITY,
            items: DEFAULT_ITEMS,
            producer_delay_ms: DEFAULT_PRODUCER_DELAY_MS,
            consumer_delay_ms: DEFAULT_CONSUMER_DELAY_MS,
        }
    }
}
