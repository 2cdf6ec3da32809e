// サービス層 - 機能別の周辺ロジック
// 設定と報告はエンジンから疎結合に保つ

pub mod config;
pub mod monitoring;

// 公開API - 各サービスの主要機能を明示的にエクスポート
pub use config::SimulationConfig;
pub use monitoring::{ConsoleReporter, NoOpReporter};
