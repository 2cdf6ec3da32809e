// エンジン層 - 同期プロトコルとオーケストレーション
// 共有バッファ、生産者・消費者タスク、逐次ベースライン、実行コーディネーター

pub mod bounded_queue;
pub mod consumer;
pub mod coordinator;
pub mod producer;
pub mod sequential;

// 公開API - 主要エンジンクラス
pub use bounded_queue::{BoundedQueue, PopOutcome};
pub use consumer::{spawn_consumer, ConsumptionSummary};
pub use coordinator::RunCoordinator;
pub use producer::spawn_producer;
pub use sequential::{SequentialOutcome, SequentialSimulator};
