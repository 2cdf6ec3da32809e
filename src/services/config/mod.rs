// 設定管理
// 実行パラメータの保持と検証

pub mod implementations;

// 公開API
pub use implementations::{
    SimulationConfig, DEFAULT_CAPACITY, DEFAULT_CONSUMER_DELAY_MS, DEFAULT_ITEMS,
    DEFAULT_PRODUCER_DELAY_MS,
};
