use crate::cards::Rank;

/// Information about whether a hand contains a straight and its top rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub is_straight: bool,
    pub top_rank: Option<Rank>,
}

impl StraightInfo {
    /// Detect a straight from 5 ranks in any order.
    /// Handles both regular straights and the wheel (A-2-3-4-5).
    pub fn detect(ranks: &[Rank; 5]) -> Self {
        let mut values = ranks.map(|r| r.poker_value().unwrap_or(0));
        values.sort_by(|a, b| b.cmp(a));

        let top = if (0..4).all(|i| values[i] == values[i + 1] + 1) {
            Some(values[0])
        } else if values == [14, 5, 4, 3, 2] {
            Some(5)
        } else {
            None
        };

        match top.and_then(Rank::from_poker_value) {
            Some(rank) => StraightInfo { is_straight: true, top_rank: Some(rank) },
            None => StraightInfo { is_straight: false, top_rank: None },
        }
    }

    /// The straight's ranks from the top down; the wheel ends with the ace.
    pub fn sequence(&self) -> Option<[Rank; 5]> {
        let top = self.top_rank?.poker_value()?;
        let mut out = [Rank::Ace; 5];
        for (i, slot) in out.iter_mut().enumerate() {
            let v = top - i as u8;
            *slot = if v == 1 { Rank::Ace } else { Rank::from_poker_value(v)? };
        }
        Some(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regular_straight() {
        let info = StraightInfo::detect(&[Rank::King, Rank::Queen, Rank::Jack, Rank::Ten, Rank::Nine]);
        assert!(info.is_straight);
        assert_eq!(info.top_rank, Some(Rank::King));
        assert_eq!(
            info.sequence(),
            Some([Rank::King, Rank::Queen, Rank::Jack, Rank::Ten, Rank::Nine])
        );
    }

    #[test]
    fn wheel() {
        let info = StraightInfo::detect(&[Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five]);
        assert!(info.is_straight);
        assert_eq!(info.top_rank, Some(Rank::Five));
        assert_eq!(
            info.sequence(),
            Some([Rank::Five, Rank::Four, Rank::Three, Rank::Two, Rank::Ace])
        );
    }

    #[test]
    fn not_straight() {
        let info = StraightInfo::detect(&[Rank::Ace, Rank::King, Rank::Queen, Rank::Jack, Rank::Nine]);
        assert!(!info.is_straight);
        assert_eq!(info.sequence(), None);

        let pair = StraightInfo::detect(&[Rank::Ace, Rank::Ace, Rank::King, Rank::Queen, Rank::Jack]);
        assert!(!pair.is_straight);
    }

    #[test]
    fn unsorted_input() {
        let info = StraightInfo::detect(&[Rank::Nine, Rank::King, Rank::Ten, Rank::Jack, Rank::Queen]);
        assert_eq!(info.top_rank, Some(Rank::King));
    }
}
