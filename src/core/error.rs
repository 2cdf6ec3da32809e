// シミュレーション専用のカスタムエラー型定義

use super::types::Item;
use thiserror::Error;

/// シミュレーション固有のエラー型
#[derive(Error, Debug)]
pub enum SimulationError {
    #[error("invalid mode: {value} (expected one of: seq, par, both)")]
    InvalidMode { value: String },

    #[error("validation error: {field} - {reason}")]
    ValidationError { field: String, reason: String },

    #[error("queue is still shared with an active task; reset refused")]
    QueueInUse,

    #[error("task error: {source}")]
    TaskError {
        #[source]
        source: tokio::task::JoinError,
    },

    #[error("order violation: expected item {expected}, observed {actual}")]
    OrderViolation { expected: Item, actual: Item },
}

impl SimulationError {
    /// 不正なモード文字列エラーの作成
    pub fn invalid_mode(value: impl Into<String>) -> Self {
        Self::InvalidMode {
            value: value.into(),
        }
    }

    /// バリデーションエラーの作成
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// キュー共有中エラーの作成
    pub fn queue_in_use() -> Self {
        Self::QueueInUse
    }

    /// 順序違反エラーの作成
    pub fn order_violation(expected: Item, actual: Item) -> Self {
        Self::OrderViolation { expected, actual }
    }
}

/// シミュレーションの結果型
pub type SimulationResult<T> = std::result::Result<T, SimulationError>;

impl From<tokio::task::JoinError> for SimulationError {
    fn from(error: tokio::task::JoinError) -> Self {
        SimulationError::TaskError { source: error }
    }
}
