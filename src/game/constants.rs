//! 計分常量定義

// ============================================================================
// 比賽規則常量
// ============================================================================

pub const WIN_THRESHOLD: i64 = 151;      // 達到此分數即獲勝
pub const SEAT_COUNT: usize = 4;         // 發牌座位數 (N, E, S, W)
pub const TEAM_COUNT: usize = 2;         // 固定兩隊

pub const CONTRA_MULTIPLIER: f64 = 2.0;
pub const RECONTRA_MULTIPLIER: f64 = 4.0;
pub const NO_TRUMP_MULTIPLIER: f64 = 2.0;

pub const SCAN_SPREAD_OFFSET: i64 = 40;  // 模擬掃描的下限偏移
pub const MAX_MANUAL_POINTS: i64 = 9_999; // 手動輸入上限

// ============================================================================
// Command 常量
// ============================================================================

pub const COMMAND_TYPE_BEGIN_ENTRY: i32 = 0;
pub const COMMAND_TYPE_SELECT_MODE: i32 = 1;
pub const COMMAND_TYPE_TOGGLE_MODIFIER: i32 = 2;
pub const COMMAND_TYPE_PROCEED: i32 = 3;
pub const COMMAND_TYPE_SET_MANUAL_POINTS: i32 = 4;
pub const COMMAND_TYPE_ADD_BONUS: i32 = 5;
pub const COMMAND_TYPE_SUBMIT: i32 = 6;
pub const COMMAND_TYPE_CONFIRM: i32 = 7;
pub const COMMAND_TYPE_CANCEL_ENTRY: i32 = 8;
pub const COMMAND_TYPE_SELECT_DEALER: i32 = 9;
pub const COMMAND_TYPE_UNDO: i32 = 10;
pub const COMMAND_TYPE_CLEAR_HISTORY: i32 = 11;
pub const COMMAND_TYPE_RESET_GAME: i32 = 12;
pub const COMMAND_TYPE_ACKNOWLEDGE_VICTORY: i32 = 13;
pub const COMMAND_TYPE_TOGGLE_DARK_MODE: i32 = 14;

pub const COMMAND_TYPE_COUNT: i32 = 15;

pub const BONUS_COUNT: usize = 6;

// Command mask layout:
// [0..15]: Command types (15)
// [15..21]: Bonus buttons (6)
// [21..25]: Dealer seats (4)
pub const COMMAND_MASK_SIZE: i32 = COMMAND_TYPE_COUNT + BONUS_COUNT as i32 + SEAT_COUNT as i32;
