//! 計分錯誤
//!
//! 所有錯誤皆可在本地恢復：被拒絕的指令不會改動狀態。

use thiserror::Error;

use super::teams::Team;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// 尚未選擇第一位發牌者
    #[error("choose who deals first before scoring a hand")]
    DealerNotSet,
    #[error("the dealer has already been chosen for this game")]
    DealerAlreadySet,
    #[error("choose a game mode first")]
    ModeNotSelected,
    /// 手動輸入為空或 <= 0
    #[error("enter the hand's points")]
    EmptyPoints,
    /// 加分後超出可表示範圍
    #[error("the entered points are too large")]
    PointsOutOfRange,
    #[error("there is no hand waiting for confirmation")]
    NoPendingHand,
    #[error("{0:?} has won; acknowledge the victory to start a new game")]
    VictoryPending(Team),
    #[error("{command} is not available while {stage}")]
    WrongStage {
        command: &'static str,
        stage: &'static str,
    },

    // 解碼錯誤（wire 指令格式不正確）
    #[error("unknown command type {0}")]
    UnknownCommand(i32),
    #[error("invalid {field} value {value}")]
    InvalidArgument { field: &'static str, value: i64 },
}

impl ScoreError {
    pub fn invalid(field: &'static str, value: i64) -> Self {
        Self::InvalidArgument { field, value }
    }

    /// 指令本身格式錯誤，而非前置條件不滿足
    pub fn is_malformed(&self) -> bool {
        matches!(self, ScoreError::UnknownCommand(_) | ScoreError::InvalidArgument { .. })
    }
}
