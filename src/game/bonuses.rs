//! 宣告加分與待確認點數

/// 宣告加分按鈕
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bonus {
    Belot,      // +20
    Terca,      // +20
    Quarta,     // +50
    Hundred,    // +100 (Quint / 四條)
    FourNines,  // +150
    FourJacks,  // +200
}

impl Bonus {
    pub fn all() -> &'static [Bonus] {
        &[
            Bonus::Belot,
            Bonus::Terca,
            Bonus::Quarta,
            Bonus::Hundred,
            Bonus::FourNines,
            Bonus::FourJacks,
        ]
    }

    pub fn points(&self) -> i64 {
        match self {
            Bonus::Belot => 20,
            Bonus::Terca => 20,
            Bonus::Quarta => 50,
            Bonus::Hundred => 100,
            Bonus::FourNines => 150,
            Bonus::FourJacks => 200,
        }
    }

    pub fn to_index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::all().get(index).copied()
    }
}

/// 點數輸入來源
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntrySource {
    Scan = 0,
    Manual = 1,
}

impl EntrySource {
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(EntrySource::Scan),
            1 => Some(EntrySource::Manual),
            _ => None,
        }
    }
}

/// 輸入到確認之間的暫存點數，每手牌覆寫
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PendingPoints {
    pub raw: i64,
    pub rounded: i64,
    pub from_scan: i64,
    pub bonus: i64,
}

impl PendingPoints {
    /// 掃描路徑的顯示值
    pub fn scanned_total(&self) -> i64 {
        self.from_scan + self.bonus
    }

    pub fn start_scan(&mut self, from_scan: i64) {
        self.from_scan = from_scan;
        self.bonus = 0;
    }
}

// ============================================================================
// 單元測試
// ============================================================================
