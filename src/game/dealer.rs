//! 發牌者輪轉

use super::constants::SEAT_COUNT;

/// 座位，循環順序 N → E → S → W
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Seat {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

impl Seat {
    pub fn all() -> &'static [Seat] {
        &[Seat::North, Seat::East, Seat::South, Seat::West]
    }

    pub fn to_index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::all().get(index).copied()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Seat::North => "N",
            Seat::East => "E",
            Seat::South => "S",
            Seat::West => "W",
        }
    }

    pub fn next(&self) -> Seat {
        Self::all()[(self.to_index() + 1) % SEAT_COUNT]
    }

    pub fn previous(&self) -> Seat {
        Self::all()[(self.to_index() + SEAT_COUNT - 1) % SEAT_COUNT]
    }
}

/// 發牌者狀態
///
/// `is_set` 只能由明確選擇設為 true；未設定前不可計分。
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DealerState {
    current: Option<Seat>,
    is_set: bool,
}

impl DealerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<Seat> {
        self.current
    }

    pub fn is_set(&self) -> bool {
        self.is_set
    }

    pub fn select(&mut self, seat: Seat) {
        self.current = Some(seat);
        self.is_set = true;
    }

    /// 計分後輪到下一位
    pub fn advance(&mut self) {
        self.current = self.current.map(|seat| seat.next());
    }

    /// 撤銷時退回上一位
    pub fn rewind(&mut self) {
        self.current = self.current.map(|seat| seat.previous());
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seat_wraps() {
        assert_eq!(Seat::West.next(), Seat::North);
        assert_eq!(Seat::North.previous(), Seat::West);
        assert_eq!(Seat::East.label(), "E");
    }

    #[test]
    fn test_dealer_advance_and_rewind() {
        let mut dealer = DealerState::new();
        dealer.advance();
        assert_eq!(dealer.current(), None);
        assert!(!dealer.is_set());

        dealer.select(Seat::South);
        dealer.advance();
        dealer.advance();
        assert_eq!(dealer.current(), Some(Seat::North));
        dealer.rewind();
        assert_eq!(dealer.current(), Some(Seat::West));

        dealer.clear();
        assert_eq!(dealer, DealerState::default());
    }
}
