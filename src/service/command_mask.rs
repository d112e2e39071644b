//! Command Mask 構建
//!
//! 告訴呈現層哪些按鈕目前有效。

use super::state::{EntryStage, Session};
use crate::game::{Bonus, Seat, BONUS_COUNT, COMMAND_MASK_SIZE, COMMAND_TYPE_COUNT};

/// 從工作階段構建 command mask
pub fn command_mask_from_session(session: &Session) -> Vec<bool> {
    let mut data = vec![false; COMMAND_MASK_SIZE as usize];

    let stage = session.stage();
    let match_state = session.match_state();
    let choosing = matches!(stage, EntryStage::ChoosingMode(_));
    let entering = matches!(stage, EntryStage::Bonuses(_) | EntryStage::ManualInput(_));
    let dealer_set = match_state.dealer().is_set();
    let victory_pending = session.pending_victory().is_some();
    let bonuses_enabled = entering && session.bonuses_enabled();

    // Command types (15)
    data[0] = true; // BEGIN_ENTRY
    data[1] = choosing; // SELECT_MODE
    data[2] = choosing; // TOGGLE_MODIFIER
    data[3] = choosing && session.mode().is_some(); // PROCEED
    data[4] = matches!(stage, EntryStage::ManualInput(_)); // SET_MANUAL_POINTS
    data[5] = bonuses_enabled; // ADD_BONUS
    data[6] = match stage {
        EntryStage::ManualInput(_) => session.manual_points() > 0,
        EntryStage::Bonuses(_) => true,
        _ => false,
    }; // SUBMIT
    // CONFIRM：需要待確認分數、已選發牌者、且沒有未確認的勝利
    data[7] = matches!(stage, EntryStage::Confirm(_)) && dealer_set && !victory_pending;
    data[8] = stage != EntryStage::Idle; // CANCEL_ENTRY
    data[9] = !dealer_set; // SELECT_DEALER
    data[10] = !match_state.history().is_empty() && !victory_pending; // UNDO
    data[11] = !match_state.history().is_empty(); // CLEAR_HISTORY
    data[12] = true; // RESET_GAME
    data[13] = victory_pending; // ACKNOWLEDGE_VICTORY
    data[14] = true; // TOGGLE_DARK_MODE
    let mut offset = COMMAND_TYPE_COUNT as usize;

    // Bonus buttons (6)
    for bonus in Bonus::all() {
        data[offset + bonus.to_index()] = bonuses_enabled;
    }
    offset += BONUS_COUNT;

    // Dealer seats (4)
    for seat in Seat::all() {
        data[offset + seat.to_index()] = !dealer_set;
    }

    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{
        EntrySource, GameMode, Team, COMMAND_TYPE_ACKNOWLEDGE_VICTORY, COMMAND_TYPE_ADD_BONUS,
        COMMAND_TYPE_CONFIRM, COMMAND_TYPE_SELECT_DEALER, COMMAND_TYPE_UNDO,
    };
    use crate::service::commands::Command;
    use crate::service::preferences::PreferencesStore;

    fn manual_session(mode: GameMode) -> Session {
        let mut session = Session::new(0, PreferencesStore::in_memory());
        session.dispatch(Command::BeginEntry(EntrySource::Manual)).unwrap();
        session.dispatch(Command::SelectMode(mode)).unwrap();
        session.dispatch(Command::Proceed).unwrap();
        session
    }

    #[test]
    fn test_mask_size() {
        let session = Session::new(0, PreferencesStore::in_memory());
        assert_eq!(command_mask_from_session(&session).len(), COMMAND_MASK_SIZE as usize);
    }

    #[test]
    fn test_bonus_slots_inert_under_no_trump() {
        let mask = command_mask_from_session(&manual_session(GameMode::NoTrump));
        assert!(!mask[COMMAND_TYPE_ADD_BONUS as usize]);
        let bonus_start = COMMAND_TYPE_COUNT as usize;
        assert!(mask[bonus_start..bonus_start + BONUS_COUNT].iter().all(|b| !b));

        let mask = command_mask_from_session(&manual_session(GameMode::OnSuit));
        assert!(mask[COMMAND_TYPE_ADD_BONUS as usize]);
        assert!(mask[bonus_start..bonus_start + BONUS_COUNT].iter().all(|b| *b));
    }

    #[test]
    fn test_confirm_needs_dealer() {
        let mut session = manual_session(GameMode::OnSuit);
        session.dispatch(Command::SetManualPoints(100)).unwrap();
        session.dispatch(Command::Submit).unwrap();
        let mask = command_mask_from_session(&session);
        assert!(!mask[COMMAND_TYPE_CONFIRM as usize]);
        assert!(mask[COMMAND_TYPE_SELECT_DEALER as usize]);
        assert!(!mask[COMMAND_TYPE_UNDO as usize]);

        session.dispatch(Command::SelectDealer(Seat::North)).unwrap();
        let mask = command_mask_from_session(&session);
        assert!(mask[COMMAND_TYPE_CONFIRM as usize]);
        assert!(!mask[COMMAND_TYPE_SELECT_DEALER as usize]);
    }

    #[test]
    fn test_undo_masked_while_victory_pending() {
        let mut session = manual_session(GameMode::OnSuit);
        session.dispatch(Command::SelectDealer(Seat::North)).unwrap();
        session.dispatch(Command::SetManualPoints(1510)).unwrap();
        session.dispatch(Command::Submit).unwrap();
        session.dispatch(Command::Confirm(Team::MyTeam)).unwrap();
        assert!(session.pending_victory().is_some());

        let mask = command_mask_from_session(&session);
        assert!(!mask[COMMAND_TYPE_UNDO as usize]);
        assert!(mask[COMMAND_TYPE_ACKNOWLEDGE_VICTORY as usize]);
    }
}
