use crate::cards::Rank;

/// Groups ranks by their frequency in a hand, sorted by (count desc, rank desc).
///
/// Example: AAAKQ groups as [(Ace, 3), (King, 1), (Queen, 1)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    groups: Vec<(Rank, u8)>,
}

impl RankGroups {
    /// Create RankGroups from a rank count array indexed by [`Rank::value`].
    pub fn from_counts(rank_counts: &[u8; 16]) -> Self {
        let mut groups: Vec<(Rank, u8)> = Rank::ALL
            .iter()
            .map(|&rank| (rank, rank_counts[usize::from(rank.value())]))
            .filter(|&(_, count)| count > 0)
            .collect();

        groups.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));

        Self { groups }
    }

    /// Rank of a four-of-a-kind, if present.
    pub fn quad(&self) -> Option<Rank> {
        self.with_count(4).next()
    }

    /// Rank of a three-of-a-kind, if present.
    pub fn trips(&self) -> Option<Rank> {
        self.with_count(3).next()
    }

    /// All pair ranks, in descending order.
    pub fn pairs(&self) -> Vec<Rank> {
        self.with_count(2).collect()
    }

    /// All singleton (kicker) ranks, in descending order.
    pub fn kickers(&self) -> Vec<Rank> {
        self.with_count(1).collect()
    }

    pub fn has_full_house(&self) -> bool {
        self.trips().is_some() && self.with_count(2).next().is_some()
    }

    fn with_count(&self, n: u8) -> impl Iterator<Item = Rank> + '_ {
        self.groups.iter().filter(move |(_, count)| *count == n).map(|(rank, _)| *rank)
    }

    #[cfg(test)]
    pub fn groups(&self) -> &[(Rank, u8)] {
        &self.groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_counts(pairs: &[(Rank, u8)]) -> [u8; 16] {
        let mut counts = [0u8; 16];
        for &(rank, count) in pairs {
            counts[usize::from(rank.value())] = count;
        }
        counts
    }

    #[test]
    fn quad() {
        let groups = RankGroups::from_counts(&make_counts(&[(Rank::Ace, 4), (Rank::King, 1)]));
        assert_eq!(groups.quad(), Some(Rank::Ace));
        assert_eq!(groups.trips(), None);
        assert_eq!(groups.kickers(), vec![Rank::King]);
    }

    #[test]
    fn full_house() {
        let groups = RankGroups::from_counts(&make_counts(&[(Rank::Two, 3), (Rank::King, 2)]));
        assert!(groups.has_full_house());
        assert_eq!(groups.trips(), Some(Rank::Two));
        assert_eq!(groups.pairs(), vec![Rank::King]);
    }

    #[test]
    fn two_pair() {
        let counts = make_counts(&[(Rank::Ace, 2), (Rank::Queen, 2), (Rank::Ten, 1)]);
        let groups = RankGroups::from_counts(&counts);
        assert_eq!(groups.pairs(), vec![Rank::Ace, Rank::Queen]);
        assert_eq!(groups.kickers(), vec![Rank::Ten]);
        assert!(!groups.has_full_house());
    }

    #[test]
    fn sorting() {
        let counts = make_counts(&[(Rank::Five, 1), (Rank::Ace, 1), (Rank::Ten, 2)]);
        let groups = RankGroups::from_counts(&counts);
        let ranks: Vec<Rank> = groups.groups().iter().map(|(r, _)| *r).collect();
        assert_eq!(ranks, vec![Rank::Ten, Rank::Ace, Rank::Five]);
    }
}
