// シミュレーションに関連するデータ型定義

use super::error::SimulationError;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// バッファを流れるアイテム（1..=N の連番。値そのものが順序の監査証跡になる）
pub type Item = u64;

/// 実行モード
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    Sequential,
    Parallel,
    Both,
}

impl ExecutionMode {
    /// このモードで実行するフェーズ（実行順）
    pub fn phases(&self) -> &'static [Phase] {
        match self {
            Self::Sequential => &[Phase::Sequential],
            Self::Parallel => &[Phase::Parallel],
            Self::Both => &[Phase::Sequential, Phase::Parallel],
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sequential => "seq",
            Self::Parallel => "par",
            Self::Both => "both",
        }
    }
}

impl FromStr for ExecutionMode {
    type Err = SimulationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "seq" => Ok(Self::Sequential),
            "par" => Ok(Self::Parallel),
            "both" => Ok(Self::Both),
            other => Err(SimulationError::invalid_mode(other)),
        }
    }
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 単一の実行フェーズ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Sequential,
    Parallel,
}

impl Phase {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Sequential => "SEQUENTIAL",
            Self::Parallel => "PARALLEL",
        }
    }
}

/// ログ行の発信者
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Actor {
    Producer,
    Consumer,
    SequentialProducer,
    SequentialConsumer,
}

impl Actor {
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Producer => "[Producer]",
            Self::Consumer => "[Consumer]",
            Self::SequentialProducer => "[Producer-SEQ]",
            Self::SequentialConsumer => "[Consumer-SEQ]",
        }
    }

    pub const fn is_producer(&self) -> bool {
        matches!(self, Self::Producer | Self::SequentialProducer)
    }
}

/// バッファ操作にまつわるイベント
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueueEvent {
    /// ブロッキング待機に入る直前
    Waiting,
    Produced(Item),
    Consumed(Item),
    /// 生産終了かつバッファ空を観測した
    ProductionEnded { total: u64 },
    /// 逐次シミュレーションの最終集計
    TotalConsumed { total: u64 },
}

impl QueueEvent {
    /// 発信者に応じた人間向けメッセージ
    pub fn message(&self, actor: Actor) -> String {
        match self {
            Self::Waiting if actor.is_producer() => "Buffer full, waiting...".to_string(),
            Self::Waiting => "Buffer empty, waiting...".to_string(),
            Self::Produced(item) => format!("Produced item {item}"),
            Self::Consumed(item) => format!("Consumed item {item}"),
            Self::ProductionEnded { total } => format!("End of production, total={total}"),
            Self::TotalConsumed { total } => format!("Total consumed={total}"),
        }
    }
}

/// 1フェーズ分の実行結果
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseOutcome {
    pub phase: Phase,
    pub elapsed: Duration,
    pub consumed: u64,
    /// 消費側が観測した順のアイテム列
    pub observed: Vec<Item>,
}

impl PhaseOutcome {
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed.as_millis() as u64
    }
}

/// 実行全体のレポート
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunReport {
    pub sequential: Option<PhaseOutcome>,
    pub parallel: Option<PhaseOutcome>,
}

impl RunReport {
    pub fn sequential_ms(&self) -> Option<u64> {
        self.sequential.as_ref().map(PhaseOutcome::elapsed_ms)
    }

    pub fn parallel_ms(&self) -> Option<u64> {
        self.parallel.as_ref().map(PhaseOutcome::elapsed_ms)
    }

    /// 逐次 - 並列（正なら並列の方が速い）。報告値と同じミリ秒整数から計算する
    pub fn difference_ms(&self) -> Option<i64> {
        match (self.sequential_ms(), self.parallel_ms()) {
            (Some(seq), Some(par)) => Some(seq as i64 - par as i64),
            _ => None,
        }
    }
}
