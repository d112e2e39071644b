//! 遊戲模式與加倍修飾
//!
//! 三種叫牌模式（На боя / Без коз / Всичко коз）各自有總分池與進位門檻。
//!
//! # 架構
//!
//! 使用聲明式 `MODE_DEFS` 表定義所有模式的元數據。

// ============================================================================
// Mode 定義系統
// ============================================================================

/// Mode 定義結構
#[derive(Clone, Copy)]
pub struct ModeDef {
    pub name: &'static str,
    pub total_game_points: i64,
    pub round_up_above: i64,
    pub allows_declarations: bool,
}

/// Mode 定義表（順序與 GameMode 枚舉值一致）
pub static MODE_DEFS: [ModeDef; 3] = [
    // 0: OnSuit - 個位數 > 5 才進位
    ModeDef { name: "On Suit", total_game_points: 162, round_up_above: 5, allows_declarations: true },
    // 1: NoTrump - 已加倍，個位數 > 4 即進位，不可宣告
    ModeDef { name: "No Trump", total_game_points: 260, round_up_above: 4, allows_declarations: false },
    // 2: AllTrump
    ModeDef { name: "All Trump", total_game_points: 258, round_up_above: 5, allows_declarations: true },
];

/// 叫牌模式
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameMode {
    OnSuit = 0,
    NoTrump = 1,
    AllTrump = 2,
}

impl GameMode {
    pub fn all() -> &'static [GameMode] {
        &[GameMode::OnSuit, GameMode::NoTrump, GameMode::AllTrump]
    }

    pub fn name(&self) -> &'static str {
        MODE_DEFS[self.to_index()].name
    }

    /// 整局總分（只用於模擬掃描）
    pub fn total_game_points(&self) -> i64 {
        MODE_DEFS[self.to_index()].total_game_points
    }

    /// 個位數超過此值時進位
    pub fn round_up_above(&self) -> i64 {
        MODE_DEFS[self.to_index()].round_up_above
    }

    /// 是否允許宣告加分（Belot、Terca 等）
    pub fn allows_declarations(&self) -> bool {
        MODE_DEFS[self.to_index()].allows_declarations
    }

    pub fn to_index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::all().get(index).copied()
    }
}

/// 單一修飾（用於切換事件）
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Modifier {
    Contra = 0,
    Recontra = 1,
}

impl Modifier {
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Modifier::Contra),
            1 => Some(Modifier::Recontra),
            _ => None,
        }
    }
}

/// Contra / Recontra 狀態，兩者互斥
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    contra: bool,
    recontra: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contra(&self) -> bool {
        self.contra
    }

    pub fn recontra(&self) -> bool {
        self.recontra
    }

    pub fn is_active(&self, modifier: Modifier) -> bool {
        match modifier {
            Modifier::Contra => self.contra,
            Modifier::Recontra => self.recontra,
        }
    }

    /// 切換修飾：先清除兩者，原本未啟用的才設為啟用
    pub fn toggle(&mut self, modifier: Modifier) {
        let was_active = self.is_active(modifier);
        self.contra = false;
        self.recontra = false;
        if !was_active {
            match modifier {
                Modifier::Contra => self.contra = true,
                Modifier::Recontra => self.recontra = true,
            }
        }
    }

    /// 分數倍率（無修飾時為 1）
    pub fn multiplier(&self) -> f64 {
        use super::constants::{CONTRA_MULTIPLIER, RECONTRA_MULTIPLIER};
        if self.recontra {
            RECONTRA_MULTIPLIER
        } else if self.contra {
            CONTRA_MULTIPLIER
        } else {
            1.0
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

// ============================================================================
// 單元測試
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_mode_table() {
        assert_eq!(GameMode::OnSuit.total_game_points(), 162);
        assert_eq!(GameMode::AllTrump.total_game_points(), 258);
        assert_eq!(GameMode::NoTrump.total_game_points(), 260);
        assert_eq!(GameMode::NoTrump.round_up_above(), 4);
        assert_eq!(GameMode::OnSuit.round_up_above(), 5);
        assert!(!GameMode::NoTrump.allows_declarations());
        assert!(GameMode::AllTrump.allows_declarations());
    }

    #[test]
    fn test_mode_indices() {
        for mode in GameMode::all() {
            assert_eq!(Some(*mode), GameMode::from_index(mode.to_index()));
        }
        assert_eq!(GameMode::from_index(3), None);
    }

    #[test]
    fn test_toggle_switches_and_clears() {
        let mut mods = Modifiers::new();
        mods.toggle(Modifier::Contra);
        assert!(mods.contra() && !mods.recontra());
        assert_eq!(mods.multiplier(), 2.0);

        mods.toggle(Modifier::Recontra);
        assert!(!mods.contra() && mods.recontra());
        assert_eq!(mods.multiplier(), 4.0);

        mods.toggle(Modifier::Recontra);
        assert_eq!(mods, Modifiers::default());
        assert_eq!(mods.multiplier(), 1.0);
    }

    proptest! {
        #[test]
        fn prop_modifiers_never_both_active(toggles in proptest::collection::vec(0usize..2, 0..40)) {
            let mut mods = Modifiers::new();
            for t in toggles {
                mods.toggle(Modifier::from_index(t).unwrap());
                prop_assert!(!(mods.contra() && mods.recontra()));
            }
        }
    }
}
