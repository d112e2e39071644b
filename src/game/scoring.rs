//! 計分引擎
//!
//! 將原始點數加上修飾（Contra/Recontra、模式）換算成計入隊伍的整數分。
//! 計入的是「十位數桶」本身，不會再乘回 10。

use super::constants::NO_TRUMP_MULTIPLIER;
use super::modes::{GameMode, Modifiers};

/// 計分結果
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FinalPoints {
    /// 未加倍的原始點數（四捨五入，僅供顯示）
    pub raw: i64,
    /// 實際計入隊伍的分數
    pub rounded: i64,
}

/// 四捨五入，.5 一律往正方向進位
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// 加倍後、進位前的點數
pub fn multiplied_points(raw_points: f64, mode: GameMode, modifiers: Modifiers) -> f64 {
    let mut final_points = raw_points * modifiers.multiplier();
    if mode == GameMode::NoTrump {
        final_points *= NO_TRUMP_MULTIPLIER;
    }
    final_points
}

/// Belot 進位：取十位數，個位數超過模式門檻才進一
///
/// NoTrump 門檻為 > 4，其他模式為 > 5。
pub fn round_belot_points(raw: f64, mode: GameMode) -> i64 {
    let points = round_half_up(raw);
    let last_digit = points % 10;
    let base = points.div_euclid(10);
    if last_digit > mode.round_up_above() {
        base + 1
    } else {
        base
    }
}

/// 計算一手牌的最終分數
pub fn compute_final_points(raw_points: f64, mode: GameMode, modifiers: Modifiers) -> FinalPoints {
    let final_points = multiplied_points(raw_points, mode, modifiers);
    FinalPoints {
        raw: round_half_up(raw_points),
        rounded: round_belot_points(final_points, mode),
    }
}

// ============================================================================
// 單元測試
// ============================================================================
