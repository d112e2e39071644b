//! 比賽狀態
//!
//! 隊伍總分、勝場、發牌者與紀錄簿。所有改動都經由下列操作，
//! 每個操作要嘛完整生效、要嘛完全不動。

use super::constants::WIN_THRESHOLD;
use super::dealer::{DealerState, Seat};
use super::errors::ScoreError;
use super::history::{HandRecord, HistoryLedger};
use super::teams::{Team, TeamScores};

/// 計入一手牌的結果
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HandOutcome {
    pub team: Team,
    pub points: i64,
    pub victory: Option<Team>,
}

#[derive(Clone, Debug, Default)]
pub struct MatchState {
    scores: TeamScores<i64>,
    wins: TeamScores<u32>,
    history: HistoryLedger,
    dealer: DealerState,
}

impl MatchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score(&self, team: Team) -> i64 {
        self.scores[team]
    }

    pub fn wins(&self, team: Team) -> u32 {
        self.wins[team]
    }

    pub fn history(&self) -> &HistoryLedger {
        &self.history
    }

    pub fn dealer(&self) -> &DealerState {
        &self.dealer
    }

    /// 選擇第一位發牌者（重設前只能一次）
    pub fn select_dealer(&mut self, seat: Seat) -> Result<(), ScoreError> {
        if self.dealer.is_set() {
            return Err(ScoreError::DealerAlreadySet);
        }
        self.dealer.select(seat);
        Ok(())
    }

    /// 將分數計入隊伍：加分 → 寫紀錄 → 輪轉發牌者 → 判定勝負
    pub fn apply_hand(&mut self, team: Team, rounded: i64) -> Result<HandOutcome, ScoreError> {
        self.apply_record(HandRecord::now(team, rounded))
    }

    pub fn apply_record(&mut self, record: HandRecord) -> Result<HandOutcome, ScoreError> {
        if !self.dealer.is_set() {
            return Err(ScoreError::DealerNotSet);
        }
        let team = record.team;
        let points = record.points;
        self.scores[team] += points;
        self.history.push(record);
        self.dealer.advance();

        let victory = self.check_victory();
        if let Some(winner) = victory {
            self.wins[winner] += 1;
        }
        Ok(HandOutcome { team, points, victory })
    }

    /// 第一個達標的隊伍（MyTeam 優先）
    pub fn check_victory(&self) -> Option<Team> {
        Team::all()
            .iter()
            .copied()
            .find(|team| self.scores[*team] >= WIN_THRESHOLD)
    }

    /// 撤銷最近一手；紀錄為空時回傳 false
    pub fn undo_last_hand(&mut self) -> bool {
        let Some(last) = self.history.pop() else {
            return false;
        };
        self.scores[last.team] -= last.points;
        self.dealer.rewind();
        true
    }

    /// 只清空紀錄，分數不變
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// 勝利確認後開新局：保留勝場與發牌者
    pub fn start_next_game(&mut self) {
        self.scores.reset();
        self.history.clear();
    }

    /// 手動重設：另外清除發牌者
    pub fn reset_game(&mut self) {
        self.start_next_game();
        self.dealer.clear();
    }
}

// ============================================================================
// 單元測試
// ============================================================================
