//! Snapshot 構建
//!
//! 給呈現層的唯讀檢視，包含：
//! - 隊伍分數、勝場、發牌者
//! - 模式、修飾、輸入階段與暫存點數
//! - 深色模式
//! - command mask
//! - 紀錄（最新在前）

use super::command_mask::command_mask_from_session;
use super::state::Session;
use crate::game::{EntrySource, Team};
use crate::proto::{HandEntry, Snapshot};

/// 從工作階段構建 snapshot
pub fn snapshot_from_session(session: &Session) -> Snapshot {
    let match_state = session.match_state();
    let dealer = match_state.dealer();
    let modifiers = session.modifiers();
    let pending = session.pending();

    let history = match_state
        .history()
        .recent_first()
        .map(|record| HandEntry {
            team: record.team.to_index() as i32,
            points: record.points,
            timestamp: record.timestamp.clone(),
        })
        .collect();

    Snapshot {
        my_team_score: match_state.score(Team::MyTeam),
        opponent_score: match_state.score(Team::Opponent),
        my_team_wins: match_state.wins(Team::MyTeam),
        opponent_wins: match_state.wins(Team::Opponent),
        dealer_seat: dealer.current().map(|s| s.to_index() as i32).unwrap_or(-1),
        dealer_set: dealer.is_set(),
        victory_team: session.pending_victory().map(|t| t.to_index() as i32).unwrap_or(-1),

        mode: session.mode().map(|m| m.to_index() as i32).unwrap_or(-1),
        contra: modifiers.contra(),
        recontra: modifiers.recontra(),
        stage: session.stage().to_int(),
        entry_source: match session.entry() {
            Some(EntrySource::Scan) => 0,
            Some(EntrySource::Manual) => 1,
            None => -1,
        },
        pending_raw: pending.raw,
        pending_rounded: pending.rounded,
        pending_from_scan: pending.from_scan,
        pending_bonus: pending.bonus,
        manual_points: session.manual_points(),
        displayed_points: session.displayed_points(),

        dark_mode: session.dark_mode(),
        command_mask: command_mask_from_session(session),
        history,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Seat, COMMAND_MASK_SIZE};
    use crate::service::preferences::PreferencesStore;

    #[test]
    fn test_fresh_session_snapshot() {
        let session = Session::new(0, PreferencesStore::in_memory());
        let snapshot = snapshot_from_session(&session);
        assert_eq!(snapshot.dealer_seat, -1);
        assert_eq!(snapshot.mode, -1);
        assert_eq!(snapshot.victory_team, -1);
        assert_eq!(snapshot.entry_source, -1);
        assert!(snapshot.history.is_empty());
        assert_eq!(snapshot.command_mask.len(), COMMAND_MASK_SIZE as usize);
    }

    #[test]
    fn test_dealer_seat_in_snapshot() {
        let mut session = Session::new(0, PreferencesStore::in_memory());
        session.select_dealer(Seat::South).unwrap();
        let snapshot = snapshot_from_session(&session);
        assert_eq!(snapshot.dealer_seat, 2);
        assert!(snapshot.dealer_set);
    }
}
