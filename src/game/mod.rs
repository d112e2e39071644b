//! 計分核心模組
//!
//! 包含 Belot 計分的核心定義：
//! - `constants`: 規則與指令常量
//! - `modes`: 叫牌模式、Contra/Recontra
//! - `scoring`: 進位計分引擎
//! - `bonuses`: 宣告加分、暫存點數
//! - `teams`: 隊伍與兩格分數表
//! - `dealer`: 發牌者輪轉
//! - `history`: 每手紀錄
//! - `match_state`: 比賽狀態（加分、撤銷、勝負）
//! - `errors`: 錯誤類型

pub mod constants;
pub mod modes;
pub mod scoring;
pub mod bonuses;
pub mod teams;
pub mod dealer;
pub mod history;
pub mod match_state;
pub mod errors;

pub use constants::*;
pub use modes::{GameMode, Modifier, Modifiers, MODE_DEFS};
pub use scoring::{compute_final_points, round_belot_points, FinalPoints};
pub use bonuses::{Bonus, EntrySource, PendingPoints};
pub use teams::{Team, TeamScores};
pub use dealer::{DealerState, Seat};
pub use history::{HandRecord, HistoryLedger};
pub use match_state::{HandOutcome, MatchState};
pub use errors::ScoreError;
