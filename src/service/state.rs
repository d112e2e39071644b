//! 計分工作階段
//!
//! 每個工作階段擁有唯一一份狀態，所有改動都經由 `dispatch`。

use tracing::{debug, info, warn};

use super::commands::Command;
use super::preferences::{Preferences, PreferencesStore};
use super::scan::{ScanSource, SimulatedScanner};
use crate::game::{
    compute_final_points, Bonus, EntrySource, FinalPoints, GameMode, HandOutcome, MatchState,
    Modifier, Modifiers, PendingPoints, ScoreError, Seat, Team, MAX_MANUAL_POINTS,
};

/// 輸入流程階段（對應呈現層的畫面順序）
///
/// 模式確定後的階段帶著該模式，確認階段帶著點數來源。
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryStage {
    Idle,
    ChoosingMode(EntrySource),
    /// 掃描後加宣告分
    Bonuses(GameMode),
    ManualInput(GameMode),
    Confirm(EntrySource),
}

impl EntryStage {
    pub fn to_int(&self) -> i32 {
        match self {
            EntryStage::Idle => 0,
            EntryStage::ChoosingMode(_) => 1,
            EntryStage::Bonuses(_) => 2,
            EntryStage::ManualInput(_) => 3,
            EntryStage::Confirm(_) => 4,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            EntryStage::Idle => "idle",
            EntryStage::ChoosingMode(_) => "choosing a mode",
            EntryStage::Bonuses(_) => "adding bonuses",
            EntryStage::ManualInput(_) => "entering points",
            EntryStage::Confirm(_) => "confirming a hand",
        }
    }

    pub fn entry_source(&self) -> Option<EntrySource> {
        match self {
            EntryStage::Idle => None,
            EntryStage::ChoosingMode(source) | EntryStage::Confirm(source) => Some(*source),
            EntryStage::Bonuses(_) => Some(EntrySource::Scan),
            EntryStage::ManualInput(_) => Some(EntrySource::Manual),
        }
    }
}

/// 指令執行結果
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandOutcome {
    Updated,
    /// 加分後的顯示值
    Displayed(i64),
    /// NoTrump 下加分按鈕無效
    BonusIgnored,
    Scored(FinalPoints),
    HandApplied(HandOutcome),
    Undone(bool),
    DarkMode(bool),
}

pub struct Session {
    match_state: MatchState,
    mode: Option<GameMode>,
    modifiers: Modifiers,
    pending: PendingPoints,
    manual_points: i64,
    stage: EntryStage,
    pending_victory: Option<Team>,
    preferences: Preferences,
    store: PreferencesStore,
    scanner: Box<dyn ScanSource>,
}

impl Session {
    pub fn new(seed: u64, store: PreferencesStore) -> Self {
        Self::with_scanner(Box::new(SimulatedScanner::new(seed)), store)
    }

    pub fn with_scanner(scanner: Box<dyn ScanSource>, store: PreferencesStore) -> Self {
        let preferences = store.load().unwrap_or_else(|err| {
            warn!(error = %err, "failed to load preferences, using defaults");
            Preferences::default()
        });

        Self {
            match_state: MatchState::new(),
            mode: None,
            modifiers: Modifiers::new(),
            pending: PendingPoints::default(),
            manual_points: 0,
            stage: EntryStage::Idle,
            pending_victory: None,
            preferences,
            store,
            scanner,
        }
    }

    // ========================================================================
    // 唯讀存取
    // ========================================================================

    pub fn match_state(&self) -> &MatchState {
        &self.match_state
    }

    pub fn mode(&self) -> Option<GameMode> {
        self.mode
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    pub fn pending(&self) -> PendingPoints {
        self.pending
    }

    pub fn manual_points(&self) -> i64 {
        self.manual_points
    }

    pub fn stage(&self) -> EntryStage {
        self.stage
    }

    pub fn entry(&self) -> Option<EntrySource> {
        self.stage.entry_source()
    }

    pub fn pending_victory(&self) -> Option<Team> {
        self.pending_victory
    }

    pub fn dark_mode(&self) -> bool {
        self.preferences.dark_mode
    }

    /// 目前畫面上應顯示的點數
    pub fn displayed_points(&self) -> i64 {
        match self.stage {
            EntryStage::ManualInput(_) => self.manual_points,
            EntryStage::Bonuses(_) => self.pending.scanned_total(),
            EntryStage::Confirm(_) => self.pending.rounded,
            EntryStage::Idle | EntryStage::ChoosingMode(_) => 0,
        }
    }

    /// 目前模式下加分按鈕是否有效
    pub fn bonuses_enabled(&self) -> bool {
        self.mode.map(|m| m.allows_declarations()).unwrap_or(true)
    }

    // ========================================================================
    // 指令分派
    // ========================================================================

    pub fn dispatch(&mut self, command: Command) -> Result<CommandOutcome, ScoreError> {
        let result = match command {
            Command::BeginEntry(source) => Ok(self.begin_entry(source)),
            Command::SelectMode(mode) => self.select_mode(mode),
            Command::ToggleModifier(modifier) => self.toggle_modifier(modifier),
            Command::Proceed => self.proceed(),
            Command::SetManualPoints(points) => self.set_manual_points(points),
            Command::AddBonus(bonus) => self.add_bonus(bonus),
            Command::Submit => self.submit(),
            Command::Confirm(team) => self.confirm(team),
            Command::CancelEntry => Ok(self.cancel_entry()),
            Command::SelectDealer(seat) => self.select_dealer(seat),
            Command::Undo => self.undo_last_hand(),
            Command::ClearHistory => Ok(self.clear_history()),
            Command::ResetGame => Ok(self.reset_game()),
            Command::AcknowledgeVictory => Ok(self.acknowledge_victory()),
            Command::ToggleDarkMode => Ok(self.toggle_dark_mode()),
        };

        if let Err(err) = &result {
            debug!(command = command.name(), error = %err, "command refused");
        }
        result
    }

    fn wrong_stage(&self, command: &'static str) -> ScoreError {
        ScoreError::WrongStage {
            command,
            stage: self.stage.name(),
        }
    }

    /// 進入模式選擇：重設模式與修飾
    pub fn begin_entry(&mut self, source: EntrySource) -> CommandOutcome {
        self.mode = None;
        self.modifiers.clear();
        self.stage = EntryStage::ChoosingMode(source);
        CommandOutcome::Updated
    }

    pub fn select_mode(&mut self, mode: GameMode) -> Result<CommandOutcome, ScoreError> {
        if !matches!(self.stage, EntryStage::ChoosingMode(_)) {
            return Err(self.wrong_stage("select_mode"));
        }
        self.mode = Some(mode);
        Ok(CommandOutcome::Updated)
    }

    pub fn toggle_modifier(&mut self, modifier: Modifier) -> Result<CommandOutcome, ScoreError> {
        if !matches!(self.stage, EntryStage::ChoosingMode(_)) {
            return Err(self.wrong_stage("toggle_modifier"));
        }
        self.modifiers.toggle(modifier);
        Ok(CommandOutcome::Updated)
    }

    /// 模式確定後：掃描取點數，或進入手動輸入
    pub fn proceed(&mut self) -> Result<CommandOutcome, ScoreError> {
        let EntryStage::ChoosingMode(source) = self.stage else {
            return Err(self.wrong_stage("proceed"));
        };
        let mode = self.mode.ok_or(ScoreError::ModeNotSelected)?;

        match source {
            EntrySource::Scan => {
                let scanned = self.scanner.scan(mode);
                self.pending.start_scan(scanned);
                debug!(mode = mode.name(), scanned, "scanned points");
                if mode.allows_declarations() {
                    self.stage = EntryStage::Bonuses(mode);
                    Ok(CommandOutcome::Displayed(self.pending.scanned_total()))
                } else {
                    Ok(CommandOutcome::Scored(self.score_pending(mode, EntrySource::Scan, scanned)))
                }
            }
            EntrySource::Manual => {
                self.manual_points = 0;
                self.stage = EntryStage::ManualInput(mode);
                Ok(CommandOutcome::Updated)
            }
        }
    }

    pub fn set_manual_points(&mut self, points: i64) -> Result<CommandOutcome, ScoreError> {
        if !matches!(self.stage, EntryStage::ManualInput(_)) {
            return Err(self.wrong_stage("set_manual_points"));
        }
        if !(0..=MAX_MANUAL_POINTS).contains(&points) {
            return Err(ScoreError::invalid("points", points));
        }
        self.manual_points = points;
        Ok(CommandOutcome::Displayed(points))
    }

    /// 宣告加分：手動輸入直接加到欄位；掃描另外累計
    pub fn add_bonus(&mut self, bonus: Bonus) -> Result<CommandOutcome, ScoreError> {
        match self.stage {
            EntryStage::ManualInput(mode) | EntryStage::Bonuses(mode)
                if !mode.allows_declarations() =>
            {
                Ok(CommandOutcome::BonusIgnored)
            }
            EntryStage::ManualInput(_) => {
                let total = self
                    .manual_points
                    .checked_add(bonus.points())
                    .ok_or(ScoreError::PointsOutOfRange)?;
                self.manual_points = total;
                Ok(CommandOutcome::Displayed(total))
            }
            EntryStage::Bonuses(_) => {
                let bonus_total = self
                    .pending
                    .bonus
                    .checked_add(bonus.points())
                    .filter(|b| self.pending.from_scan.checked_add(*b).is_some())
                    .ok_or(ScoreError::PointsOutOfRange)?;
                self.pending.bonus = bonus_total;
                Ok(CommandOutcome::Displayed(self.pending.scanned_total()))
            }
            _ => Err(self.wrong_stage("add_bonus")),
        }
    }

    pub fn submit(&mut self) -> Result<CommandOutcome, ScoreError> {
        let (mode, source, raw_points) = match self.stage {
            EntryStage::ManualInput(mode) => {
                if self.manual_points <= 0 {
                    return Err(ScoreError::EmptyPoints);
                }
                (mode, EntrySource::Manual, self.manual_points)
            }
            EntryStage::Bonuses(mode) => (mode, EntrySource::Scan, self.pending.scanned_total()),
            _ => return Err(self.wrong_stage("submit")),
        };
        Ok(CommandOutcome::Scored(self.score_pending(mode, source, raw_points)))
    }

    fn score_pending(&mut self, mode: GameMode, source: EntrySource, raw_points: i64) -> FinalPoints {
        let result = compute_final_points(raw_points as f64, mode, self.modifiers);
        self.pending.raw = result.raw;
        self.pending.rounded = result.rounded;
        self.stage = EntryStage::Confirm(source);
        result
    }

    /// 將待確認分數計入隊伍
    pub fn confirm(&mut self, team: Team) -> Result<CommandOutcome, ScoreError> {
        if let Some(winner) = self.pending_victory {
            return Err(ScoreError::VictoryPending(winner));
        }
        if !matches!(self.stage, EntryStage::Confirm(_)) {
            return Err(ScoreError::NoPendingHand);
        }

        let outcome = self.match_state.apply_hand(team, self.pending.rounded)?;
        info!(
            team = ?team,
            points = outcome.points,
            total = self.match_state.score(team),
            "hand applied"
        );
        if let Some(winner) = outcome.victory {
            info!(winner = ?winner, score = self.match_state.score(winner), "victory");
            self.pending_victory = Some(winner);
        }
        self.reset_entry();
        Ok(CommandOutcome::HandApplied(outcome))
    }

    /// 放棄目前輸入，不影響比賽狀態
    pub fn cancel_entry(&mut self) -> CommandOutcome {
        self.reset_entry();
        CommandOutcome::Updated
    }

    fn reset_entry(&mut self) {
        self.pending = PendingPoints::default();
        self.manual_points = 0;
        self.stage = EntryStage::Idle;
    }

    pub fn select_dealer(&mut self, seat: Seat) -> Result<CommandOutcome, ScoreError> {
        self.match_state.select_dealer(seat)?;
        info!(seat = seat.label(), "dealer selected");
        Ok(CommandOutcome::Updated)
    }

    /// 撤銷上一手；勝利未確認前不可撤銷
    pub fn undo_last_hand(&mut self) -> Result<CommandOutcome, ScoreError> {
        if let Some(winner) = self.pending_victory {
            return Err(ScoreError::VictoryPending(winner));
        }
        let undone = self.match_state.undo_last_hand();
        if undone {
            info!("last hand undone");
        }
        Ok(CommandOutcome::Undone(undone))
    }

    pub fn clear_history(&mut self) -> CommandOutcome {
        self.match_state.clear_history();
        CommandOutcome::Updated
    }

    /// 手動重設：分數、紀錄、發牌者歸零，勝場保留
    pub fn reset_game(&mut self) -> CommandOutcome {
        self.match_state.reset_game();
        self.pending_victory = None;
        self.reset_entry();
        info!("game reset");
        CommandOutcome::Updated
    }

    /// 確認勝利後開新局
    pub fn acknowledge_victory(&mut self) -> CommandOutcome {
        if self.pending_victory.take().is_some() {
            self.match_state.start_next_game();
            self.reset_entry();
        }
        CommandOutcome::Updated
    }

    pub fn toggle_dark_mode(&mut self) -> CommandOutcome {
        self.preferences.dark_mode = !self.preferences.dark_mode;
        if let Err(err) = self.store.save(&self.preferences) {
            warn!(error = %err, "failed to save preferences");
        }
        CommandOutcome::DarkMode(self.preferences.dark_mode)
    }
}

// ============================================================================
// 單元測試
// ============================================================================
