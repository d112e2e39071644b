//! 每手計分紀錄

use time::macros::format_description;
use time::OffsetDateTime;

use super::teams::Team;

/// 一手牌的紀錄，建立後不可變
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HandRecord {
    pub team: Team,
    pub points: i64,
    pub timestamp: String,
}

impl HandRecord {
    pub fn new(team: Team, points: i64, timestamp: impl Into<String>) -> Self {
        Self {
            team,
            points,
            timestamp: timestamp.into(),
        }
    }

    /// 以目前本地時間（HH:MM:SS）建立紀錄
    pub fn now(team: Team, points: i64) -> Self {
        Self::new(team, points, local_time_label())
    }
}

/// 取不到本地時區時退回 UTC
pub fn local_time_label() -> String {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    now.format(format_description!("[hour]:[minute]:[second]"))
        .unwrap_or_default()
}

/// 依時間順序的紀錄簿
///
/// 只提供唯讀檢視；新增與移除由 `MatchState` 負責。
#[derive(Clone, Debug, Default)]
pub struct HistoryLedger {
    records: Vec<HandRecord>,
}

impl HistoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn last(&self) -> Option<&HandRecord> {
        self.records.last()
    }

    /// 最新在前
    pub fn recent_first(&self) -> impl Iterator<Item = &HandRecord> + '_ {
        self.records.iter().rev()
    }

    pub(crate) fn push(&mut self, record: HandRecord) {
        self.records.push(record);
    }

    pub(crate) fn pop(&mut self) -> Option<HandRecord> {
        self.records.pop()
    }

    pub(crate) fn clear(&mut self) {
        self.records.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recent_first_order() {
        let mut ledger = HistoryLedger::new();
        ledger.push(HandRecord::new(Team::MyTeam, 8, "20:00:01"));
        ledger.push(HandRecord::new(Team::Opponent, 12, "20:05:40"));
        let points: Vec<i64> = ledger.recent_first().map(|r| r.points).collect();
        assert_eq!(points, vec![12, 8]);
        assert_eq!(ledger.pop().map(|r| r.team), Some(Team::Opponent));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_time_label_shape() {
        let label = local_time_label();
        assert_eq!(label.len(), 8);
        assert_eq!(label.matches(':').count(), 2);
    }
}
