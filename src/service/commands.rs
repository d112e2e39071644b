//! 使用者指令
//!
//! 每個操作對應一個指令，與任何畫面細節無關。

use crate::game::{
    Bonus, EntrySource, GameMode, Modifier, ScoreError, Seat, Team,
    COMMAND_TYPE_ACKNOWLEDGE_VICTORY, COMMAND_TYPE_ADD_BONUS, COMMAND_TYPE_BEGIN_ENTRY,
    COMMAND_TYPE_CANCEL_ENTRY, COMMAND_TYPE_CLEAR_HISTORY, COMMAND_TYPE_CONFIRM,
    COMMAND_TYPE_PROCEED, COMMAND_TYPE_RESET_GAME, COMMAND_TYPE_SELECT_DEALER,
    COMMAND_TYPE_SELECT_MODE, COMMAND_TYPE_SET_MANUAL_POINTS, COMMAND_TYPE_SUBMIT,
    COMMAND_TYPE_TOGGLE_DARK_MODE, COMMAND_TYPE_TOGGLE_MODIFIER, COMMAND_TYPE_UNDO,
    MAX_MANUAL_POINTS,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    BeginEntry(EntrySource),
    SelectMode(GameMode),
    ToggleModifier(Modifier),
    Proceed,
    SetManualPoints(i64),
    AddBonus(Bonus),
    Submit,
    Confirm(Team),
    CancelEntry,
    SelectDealer(Seat),
    Undo,
    ClearHistory,
    ResetGame,
    AcknowledgeVictory,
    ToggleDarkMode,
}

impl Command {
    /// 從 wire 格式 (command_type, value) 解碼
    pub fn from_wire(command_type: i32, value: i64) -> Result<Self, ScoreError> {
        let command = match command_type {
            COMMAND_TYPE_BEGIN_ENTRY => Command::BeginEntry(
                index(value).and_then(EntrySource::from_index)
                    .ok_or(ScoreError::invalid("source", value))?,
            ),
            COMMAND_TYPE_SELECT_MODE => Command::SelectMode(
                index(value).and_then(GameMode::from_index)
                    .ok_or(ScoreError::invalid("mode", value))?,
            ),
            COMMAND_TYPE_TOGGLE_MODIFIER => Command::ToggleModifier(
                index(value).and_then(Modifier::from_index)
                    .ok_or(ScoreError::invalid("modifier", value))?,
            ),
            COMMAND_TYPE_PROCEED => Command::Proceed,
            COMMAND_TYPE_SET_MANUAL_POINTS => {
                if !(0..=MAX_MANUAL_POINTS).contains(&value) {
                    return Err(ScoreError::invalid("points", value));
                }
                Command::SetManualPoints(value)
            }
            COMMAND_TYPE_ADD_BONUS => Command::AddBonus(
                index(value).and_then(Bonus::from_index)
                    .ok_or(ScoreError::invalid("bonus", value))?,
            ),
            COMMAND_TYPE_SUBMIT => Command::Submit,
            COMMAND_TYPE_CONFIRM => Command::Confirm(
                index(value).and_then(Team::from_index)
                    .ok_or(ScoreError::invalid("team", value))?,
            ),
            COMMAND_TYPE_CANCEL_ENTRY => Command::CancelEntry,
            COMMAND_TYPE_SELECT_DEALER => Command::SelectDealer(
                index(value).and_then(Seat::from_index)
                    .ok_or(ScoreError::invalid("seat", value))?,
            ),
            COMMAND_TYPE_UNDO => Command::Undo,
            COMMAND_TYPE_CLEAR_HISTORY => Command::ClearHistory,
            COMMAND_TYPE_RESET_GAME => Command::ResetGame,
            COMMAND_TYPE_ACKNOWLEDGE_VICTORY => Command::AcknowledgeVictory,
            COMMAND_TYPE_TOGGLE_DARK_MODE => Command::ToggleDarkMode,
            other => return Err(ScoreError::UnknownCommand(other)),
        };
        Ok(command)
    }

    pub fn command_type(&self) -> i32 {
        match self {
            Command::BeginEntry(_) => COMMAND_TYPE_BEGIN_ENTRY,
            Command::SelectMode(_) => COMMAND_TYPE_SELECT_MODE,
            Command::ToggleModifier(_) => COMMAND_TYPE_TOGGLE_MODIFIER,
            Command::Proceed => COMMAND_TYPE_PROCEED,
            Command::SetManualPoints(_) => COMMAND_TYPE_SET_MANUAL_POINTS,
            Command::AddBonus(_) => COMMAND_TYPE_ADD_BONUS,
            Command::Submit => COMMAND_TYPE_SUBMIT,
            Command::Confirm(_) => COMMAND_TYPE_CONFIRM,
            Command::CancelEntry => COMMAND_TYPE_CANCEL_ENTRY,
            Command::SelectDealer(_) => COMMAND_TYPE_SELECT_DEALER,
            Command::Undo => COMMAND_TYPE_UNDO,
            Command::ClearHistory => COMMAND_TYPE_CLEAR_HISTORY,
            Command::ResetGame => COMMAND_TYPE_RESET_GAME,
            Command::AcknowledgeVictory => COMMAND_TYPE_ACKNOWLEDGE_VICTORY,
            Command::ToggleDarkMode => COMMAND_TYPE_TOGGLE_DARK_MODE,
        }
    }

    /// 日誌用名稱
    pub fn name(&self) -> &'static str {
        match self {
            Command::BeginEntry(_) => "begin_entry",
            Command::SelectMode(_) => "select_mode",
            Command::ToggleModifier(_) => "toggle_modifier",
            Command::Proceed => "proceed",
            Command::SetManualPoints(_) => "set_manual_points",
            Command::AddBonus(_) => "add_bonus",
            Command::Submit => "submit",
            Command::Confirm(_) => "confirm",
            Command::CancelEntry => "cancel_entry",
            Command::SelectDealer(_) => "select_dealer",
            Command::Undo => "undo",
            Command::ClearHistory => "clear_history",
            Command::ResetGame => "reset_game",
            Command::AcknowledgeVictory => "acknowledge_victory",
            Command::ToggleDarkMode => "toggle_dark_mode",
        }
    }
}

fn index(value: i64) -> Option<usize> {
    usize::try_from(value).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::COMMAND_TYPE_COUNT;

    #[test]
    fn test_decode_with_values() {
        assert_eq!(Command::from_wire(COMMAND_TYPE_SELECT_MODE, 1), Ok(Command::SelectMode(GameMode::NoTrump)));
        assert_eq!(Command::from_wire(COMMAND_TYPE_CONFIRM, 0), Ok(Command::Confirm(Team::MyTeam)));
        assert_eq!(Command::from_wire(COMMAND_TYPE_SELECT_DEALER, 3), Ok(Command::SelectDealer(Seat::West)));
        assert_eq!(Command::from_wire(COMMAND_TYPE_ADD_BONUS, 5), Ok(Command::AddBonus(Bonus::FourJacks)));
        assert_eq!(Command::from_wire(COMMAND_TYPE_SET_MANUAL_POINTS, 87), Ok(Command::SetManualPoints(87)));
    }

    #[test]
    fn test_decode_rejects_out_of_range() {
        assert_eq!(Command::from_wire(COMMAND_TYPE_SELECT_DEALER, 4), Err(ScoreError::invalid("seat", 4)));
        assert_eq!(Command::from_wire(COMMAND_TYPE_CONFIRM, -1), Err(ScoreError::invalid("team", -1)));
        assert_eq!(Command::from_wire(COMMAND_TYPE_COUNT, 0), Err(ScoreError::UnknownCommand(COMMAND_TYPE_COUNT)));
        assert!(Command::from_wire(99, 0).unwrap_err().is_malformed());
    }

    #[test]
    fn test_decode_bounds_manual_points() {
        assert_eq!(
            Command::from_wire(COMMAND_TYPE_SET_MANUAL_POINTS, MAX_MANUAL_POINTS),
            Ok(Command::SetManualPoints(MAX_MANUAL_POINTS))
        );
        assert_eq!(
            Command::from_wire(COMMAND_TYPE_SET_MANUAL_POINTS, i64::MAX - 5),
            Err(ScoreError::invalid("points", i64::MAX - 5))
        );
        assert_eq!(
            Command::from_wire(COMMAND_TYPE_SET_MANUAL_POINTS, -1),
            Err(ScoreError::invalid("points", -1))
        );
    }

    #[test]
    fn test_command_type_roundtrip_for_unit_commands() {
        for t in [COMMAND_TYPE_PROCEED, COMMAND_TYPE_SUBMIT, COMMAND_TYPE_UNDO, COMMAND_TYPE_TOGGLE_DARK_MODE] {
            assert_eq!(Command::from_wire(t, 0).unwrap().command_type(), t);
        }
    }
}
