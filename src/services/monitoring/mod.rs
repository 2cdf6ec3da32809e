// 実行状況の監視
// パラメータ・フェーズ・バッファイベント・サマリーの報告

pub mod implementations;

// 公開API
pub use implementations::{format_event_line, format_summary_lines, ConsoleReporter, NoOpReporter};
