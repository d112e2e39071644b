//! 隊伍定義

use std::ops::{Index, IndexMut};

/// 兩支隊伍
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Team {
    MyTeam = 0,
    Opponent = 1,
}

impl Team {
    /// 勝負判定的優先順序
    pub fn all() -> &'static [Team] {
        &[Team::MyTeam, Team::Opponent]
    }

    pub fn to_index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::all().get(index).copied()
    }
}

/// 以 Team 為索引的兩格表
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TeamScores<T> {
    slots: [T; 2],
}

impl<T: Copy + Default> TeamScores<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Team, T)> + '_ {
        Team::all().iter().map(move |team| (*team, self.slots[team.to_index()]))
    }

    pub fn reset(&mut self) {
        self.slots = [T::default(); 2];
    }
}

impl<T> Index<Team> for TeamScores<T> {
    type Output = T;

    fn index(&self, team: Team) -> &T {
        &self.slots[team.to_index()]
    }
}

impl<T> IndexMut<Team> for TeamScores<T> {
    fn index_mut(&mut self, team: Team) -> &mut T {
        &mut self.slots[team.to_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_scores_index_and_reset() {
        let mut scores: TeamScores<i64> = TeamScores::new();
        scores[Team::Opponent] += 12;
        scores[Team::MyTeam] -= 3;
        assert_eq!(scores.iter().collect::<Vec<_>>(), vec![(Team::MyTeam, -3), (Team::Opponent, 12)]);
        scores.reset();
        assert_eq!(scores[Team::Opponent], 0);
    }
}
