//! 掃描點數來源
//!
//! 相機辨識尚未實作，預設以亂數模擬掃描結果。

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game::{GameMode, SCAN_SPREAD_OFFSET};

pub trait ScanSource: Send {
    /// 讀取一手牌的原始點數
    fn scan(&mut self, mode: GameMode) -> i64;
}

/// 模擬掃描：floor(random * total/2) + (total/2 - 40)
pub struct SimulatedScanner {
    rng: StdRng,
}

impl SimulatedScanner {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl ScanSource for SimulatedScanner {
    fn scan(&mut self, mode: GameMode) -> i64 {
        let half = mode.total_game_points() / 2;
        self.rng.gen_range(0..half) + (half - SCAN_SPREAD_OFFSET)
    }
}

/// 固定序列（測試用），用完即 panic
#[cfg(test)]
pub struct ScriptedScanner {
    values: Vec<i64>,
    next: usize,
}

#[cfg(test)]
impl ScriptedScanner {
    pub fn new(values: Vec<i64>) -> Self {
        Self { values, next: 0 }
    }
}

#[cfg(test)]
impl ScanSource for ScriptedScanner {
    fn scan(&mut self, _mode: GameMode) -> i64 {
        let value = *self
            .values
            .get(self.next)
            .unwrap_or_else(|| panic!("scripted scanner exhausted after {} scans", self.next));
        self.next += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulated_scan_range() {
        let mut scanner = SimulatedScanner::new(11);
        for mode in GameMode::all() {
            let half = mode.total_game_points() / 2;
            for _ in 0..200 {
                let value = scanner.scan(*mode);
                assert!(value >= half - 40 && value < 2 * half - 40, "{mode:?} {value}");
            }
        }
    }

    #[test]
    fn test_simulated_scan_is_seeded() {
        let mut a = SimulatedScanner::new(5);
        let mut b = SimulatedScanner::new(5);
        for _ in 0..10 {
            assert_eq!(a.scan(GameMode::OnSuit), b.scan(GameMode::OnSuit));
        }
    }

    #[test]
    fn test_scripted_scan() {
        let mut scanner = ScriptedScanner::new(vec![90, 72]);
        assert_eq!(scanner.scan(GameMode::OnSuit), 90);
        assert_eq!(scanner.scan(GameMode::AllTrump), 72);
    }

    #[test]
    #[should_panic(expected = "exhausted")]
    fn test_scripted_scan_exhausted() {
        let mut scanner = ScriptedScanner::new(vec![90]);
        scanner.scan(GameMode::OnSuit);
        scanner.scan(GameMode::OnSuit);
    }
}
