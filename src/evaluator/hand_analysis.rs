use super::rank_groups::RankGroups;
use super::straight_info::StraightInfo;
use super::suit_info::SuitInfo;
use crate::cards::{Rank, Suit};

/// Pre-computed analysis of a 5-card hand.
/// Built once and shared by all category detectors.
///
/// Ranks are expected on the high-ace scale; low aces must be mapped to [`Rank::Ace`]
/// before analysis.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    /// Ranks sorted descending.
    pub ranks: [Rank; 5],
    pub rank_groups: RankGroups,
    pub suit_info: SuitInfo,
    pub straight_info: StraightInfo,
}

impl HandAnalysis {
    pub fn new(cards: &[(Rank, Suit); 5]) -> Self {
        let mut ranks = cards.map(|(rank, _)| rank);
        ranks.sort_by(|a, b| b.cmp(a));

        let mut rank_counts = [0u8; 16];
        for rank in ranks {
            rank_counts[usize::from(rank.value())] += 1;
        }

        let rank_groups = RankGroups::from_counts(&rank_counts);
        let suit_info = SuitInfo::detect(&cards.map(|(_, suit)| suit));
        let straight_info = StraightInfo::detect(&ranks);

        Self { ranks, rank_groups, suit_info, straight_info }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Rank::*;
    use Suit::*;

    #[test]
    fn royal_flush_analysis() {
        let a = HandAnalysis::new(&[
            (Ace, Spades),
            (King, Spades),
            (Queen, Spades),
            (Jack, Spades),
            (Ten, Spades),
        ]);
        assert!(a.suit_info.is_flush);
        assert!(a.straight_info.is_straight);
        assert_eq!(a.straight_info.top_rank, Some(Ace));
        assert_eq!(a.rank_groups.quad(), None);
        assert_eq!(a.rank_groups.pairs(), vec![]);
    }

    #[test]
    fn full_house_analysis() {
        let a = HandAnalysis::new(&[
            (Queen, Clubs),
            (King, Spades),
            (King, Hearts),
            (Queen, Spades),
            (King, Diamonds),
        ]);
        assert!(a.rank_groups.has_full_house());
        assert_eq!(a.rank_groups.trips(), Some(King));
        assert_eq!(a.rank_groups.pairs(), vec![Queen]);
        assert!(!a.suit_info.is_flush);
    }

    #[test]
    fn straight_across_the_knight_gap() {
        let a = HandAnalysis::new(&[
            (King, Spades),
            (Queen, Hearts),
            (Jack, Diamonds),
            (Ten, Clubs),
            (Nine, Spades),
        ]);
        assert!(a.straight_info.is_straight);
        assert_eq!(a.straight_info.top_rank, Some(King));
    }

    #[test]
    fn wheel_analysis() {
        let a = HandAnalysis::new(&[
            (Ace, Spades),
            (Two, Hearts),
            (Three, Diamonds),
            (Four, Clubs),
            (Five, Spades),
        ]);
        assert!(a.straight_info.is_straight);
        assert_eq!(a.straight_info.top_rank, Some(Five));
    }

    #[test]
    fn ranks_sorted_descending() {
        let a = HandAnalysis::new(&[
            (Three, Spades),
            (Ace, Hearts),
            (Five, Diamonds),
            (King, Clubs),
            (Nine, Spades),
        ]);
        assert_eq!(a.ranks, [Ace, King, Nine, Five, Three]);
        assert_eq!(a.rank_groups.kickers().len(), 5);
    }
}
