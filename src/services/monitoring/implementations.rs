// 実行状況報告の具象実装

use crate::core::{Actor, Phase, QueueEvent, RunReport, SimulationReporter};
use crate::services::config::SimulationConfig;
use async_trait::async_trait;

/// 固定幅で整列したイベント行を組み立てる
pub fn format_event_line(actor: Actor, event: &QueueEvent, occupancy: usize, capacity: usize) -> String {
    format!(
        "{:<18} | {:<28} | buffer={:<2}/{}",
        actor.tag(),
        event.message(actor),
        occupancy,
        capacity
    )
}

/// サマリー行を組み立てる（出力順）
pub fn format_summary_lines(report: &RunReport) -> Vec<String> {
    let mut lines = Vec::new();

    match (report.sequential_ms(), report.parallel_ms()) {
        (Some(seq), Some(par)) => {
            lines.push(format!("[Summary] SEQUENTIAL total: {seq} ms"));
            lines.push(format!("[Summary] PARALLEL   total: {par} ms"));
            if let Some(diff) = report.difference_ms() {
                lines.push(format!("[Summary] Difference (seq-par): {diff} ms"));
            }
        }
        (Some(seq), None) => lines.push(format!("[Summary] SEQUENTIAL total: {seq} ms")),
        (None, Some(par)) => lines.push(format!("[Summary] PARALLEL total: {par} ms")),
        (None, None) => {}
    }

    lines
}

/// コンソール出力による報告実装
#[derive(Debug, Default, Clone)]
pub struct ConsoleReporter {
    quiet: bool,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quiet() -> Self {
        Self { quiet: true }
    }
}

#[async_trait]
impl SimulationReporter for ConsoleReporter {
    async fn report_parameters(&self, config: &SimulationConfig) {
        if !self.quiet {
            println!("\n=== Run parameters ===");
            println!(
                "Mode={} | Capacity={} | Items={} | P={}ms | C={}ms\n",
                config.mode(),
                config.capacity(),
                config.items(),
                config.producer_delay_ms(),
                config.consumer_delay_ms()
            );
        }
    }

    async fn report_phase_started(&self, phase: Phase) {
        if !self.quiet {
            println!("===== {} run started =====\n", phase.label());
        }
    }

    async fn report_phase_finished(&self, phase: Phase) {
        if !self.quiet {
            println!("\n===== {} run finished =====\n", phase.label());
        }
    }

    async fn report_task_started(&self, actor: Actor) {
        if !self.quiet {
            let name = if actor.is_producer() { "Producer" } else { "Consumer" };
            println!("[INFO] {name} thread started.");
        }
    }

    async fn report_task_finished(&self, actor: Actor) {
        if !self.quiet {
            let name = if actor.is_producer() { "Producer" } else { "Consumer" };
            println!("[INFO] {name} thread finished.");
        }
    }

    async fn report_event(&self, actor: Actor, event: &QueueEvent, occupancy: usize, capacity: usize) {
        if !self.quiet {
            println!("{}", format_event_line(actor, event, occupancy, capacity));
        }
    }

    async fn report_summary(&self, report: &RunReport) {
        if !self.quiet {
            for line in format_summary_lines(report) {
                println!("{line}");
            }
        }
    }
}

/// 何もしない報告実装（テスト・ベンチマーク用）
#[derive(Debug, Default, Clone)]
pub struct NoOpReporter;

impl NoOpReporter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SimulationReporter for NoOpReporter {
    async fn report_parameters(&self, _config: &SimulationConfig) {}

    async fn report_phase_started(&self, _phase: Phase) {}

    async fn report_phase_finished(&self, _phase: Phase) {}

    async fn report_task_started(&self, _actor: Actor) {}

    async fn report_task_finished(&self, _actor: Actor) {}

    async fn report_event(&self, _actor: Actor, _event: &QueueEvent, _occupancy: usize, _capacity: usize) {}

    async fn report_summary(&self, _report: &RunReport) {}
}
