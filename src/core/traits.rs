// シミュレーションのトレイト定義
// 出力先を抽象化し、テストでは差し替え可能にする

use super::types::{Actor, Phase, QueueEvent, RunReport};
use crate::services::config::SimulationConfig;
use async_trait::async_trait;
use mockall::automock;

/// 実行状況の報告を抽象化するトレイト
#[automock]
#[async_trait]
pub trait SimulationReporter: Send + Sync {
    /// 実行パラメータのバナー
    async fn report_parameters(&self, config: &SimulationConfig);

    /// フェーズ開始時の報告
    async fn report_phase_started(&self, phase: Phase);

    /// フェーズ終了時の報告
    async fn report_phase_finished(&self, phase: Phase);

    /// タスク（スレッド）開始時の報告
    async fn report_task_started(&self, actor: Actor);

    /// タスク（スレッド）終了時の報告
    async fn report_task_finished(&self, actor: Actor);

    /// バッファ操作イベントの報告（occupancyは操作直後の占有数）
    async fn report_event(&self, actor: Actor, event: &QueueEvent, occupancy: usize, capacity: usize);

    /// 最終サマリーの報告
    async fn report_summary(&self, report: &RunReport);
}
