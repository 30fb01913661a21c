use super::eclass::Category;
use super::hand_analysis::HandAnalysis;
use crate::cards::{Rank, Suit};

/// Compact, comparable hand strength. Higher is better.
/// Encodes the category and the representative ranks in significance order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandValue(u64);

impl HandValue {
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Pack a category and five ranks into a comparable value.
    pub fn from_parts(category: Category, ranks: &[Rank; 5]) -> Self {
        // [ category (8 bits) | r0 (6) | r1 (6) | r2 (6) | r3 (6) | r4 (6) | 10 zero bits ]
        const CAT_SHIFT: u32 = 48;
        const RANK_STRIDE: u32 = 6;
        let mut v: u64 = u64::from(category.ordinal()) << CAT_SHIFT;
        for (i, r) in ranks.iter().enumerate() {
            let offset = CAT_SHIFT - RANK_STRIDE * (i as u32 + 1);
            v |= u64::from(r.value()) << offset;
        }
        HandValue(v)
    }
}

/// Result of classifying one five-card hand by rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classified {
    pub category: Category,
    /// Ranks in significance order, e.g. `[K, K, K, 2, 2]`.
    pub ranks: [Rank; 5],
    pub value: HandValue,
}

impl Classified {
    fn new(category: Category, ranks: [Rank; 5]) -> Self {
        Self { category, ranks, value: HandValue::from_parts(category, &ranks) }
    }
}

/// Strategy pattern: each detector recognizes one category and lays out its ranks.
pub trait CategoryDetector {
    fn category(&self) -> Category;

    /// Representative ranks if the hand belongs to this category.
    fn detect(&self, analysis: &HandAnalysis) -> Option<[Rank; 5]>;
}

// Detectors are listed strongest first; the first match wins.

pub struct StraightFlushDetector;

impl CategoryDetector for StraightFlushDetector {
    fn category(&self) -> Category {
        Category::StraightFlush
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<[Rank; 5]> {
        if !analysis.suit_info.is_flush {
            return None;
        }
        analysis.straight_info.sequence()
    }
}

pub struct FourOfAKindDetector;

impl CategoryDetector for FourOfAKindDetector {
    fn category(&self) -> Category {
        Category::FourOfAKind
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<[Rank; 5]> {
        let q = analysis.rank_groups.quad()?;
        let k = *analysis.rank_groups.kickers().first()?;
        Some([q, q, q, q, k])
    }
}

pub struct FullHouseDetector;

impl CategoryDetector for FullHouseDetector {
    fn category(&self) -> Category {
        Category::FullHouse
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<[Rank; 5]> {
        let t = analysis.rank_groups.trips()?;
        let p = *analysis.rank_groups.pairs().first()?;
        Some([t, t, t, p, p])
    }
}

pub struct FlushDetector;

impl CategoryDetector for FlushDetector {
    fn category(&self) -> Category {
        Category::Flush
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<[Rank; 5]> {
        analysis.suit_info.is_flush.then_some(analysis.ranks)
    }
}

pub struct StraightDetector;

impl CategoryDetector for StraightDetector {
    fn category(&self) -> Category {
        Category::Straight
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<[Rank; 5]> {
        analysis.straight_info.sequence()
    }
}

pub struct ThreeOfAKindDetector;

impl CategoryDetector for ThreeOfAKindDetector {
    fn category(&self) -> Category {
        Category::ThreeOfAKind
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<[Rank; 5]> {
        let t = analysis.rank_groups.trips()?;
        match analysis.rank_groups.kickers()[..] {
            [k0, k1] => Some([t, t, t, k0, k1]),
            _ => None,
        }
    }
}

pub struct TwoPairDetector;

impl CategoryDetector for TwoPairDetector {
    fn category(&self) -> Category {
        Category::TwoPair
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<[Rank; 5]> {
        match (&analysis.rank_groups.pairs()[..], &analysis.rank_groups.kickers()[..]) {
            (&[p0, p1], &[k]) => Some([p0, p0, p1, p1, k]),
            _ => None,
        }
    }
}

pub struct OnePairDetector;

impl CategoryDetector for OnePairDetector {
    fn category(&self) -> Category {
        Category::Pair
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<[Rank; 5]> {
        match (&analysis.rank_groups.pairs()[..], &analysis.rank_groups.kickers()[..]) {
            (&[p], &[k0, k1, k2]) => Some([p, p, k0, k1, k2]),
            _ => None,
        }
    }
}

pub struct HighCardDetector;

impl CategoryDetector for HighCardDetector {
    fn category(&self) -> Category {
        Category::HighCard
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<[Rank; 5]> {
        Some(analysis.ranks)
    }
}

pub const DETECTORS: [&dyn CategoryDetector; 9] = [
    &StraightFlushDetector,
    &FourOfAKindDetector,
    &FullHouseDetector,
    &FlushDetector,
    &StraightDetector,
    &ThreeOfAKindDetector,
    &TwoPairDetector,
    &OnePairDetector,
    &HighCardDetector,
];

/// Classify five cards (high-ace ranks) by direct rule evaluation.
pub fn classify(cards: &[(Rank, Suit); 5]) -> Classified {
    let analysis = HandAnalysis::new(cards);
    DETECTORS
        .iter()
        .find_map(|d| d.detect(&analysis).map(|ranks| Classified::new(d.category(), ranks)))
        .unwrap_or_else(|| Classified::new(Category::HighCard, analysis.ranks))
}

#[cfg(test)]
mod tests {
    use super::*;
    use Rank::*;
    use Suit::*;

    fn offsuit(ranks: [Rank; 5]) -> [(Rank, Suit); 5] {
        let suits = [Clubs, Diamonds, Hearts, Spades, Clubs];
        [
            (ranks[0], suits[0]),
            (ranks[1], suits[1]),
            (ranks[2], suits[2]),
            (ranks[3], suits[3]),
            (ranks[4], suits[4]),
        ]
    }

    fn suited(ranks: [Rank; 5]) -> [(Rank, Suit); 5] {
        ranks.map(|r| (r, Hearts))
    }

    #[test]
    fn every_category_is_detected() {
        let cases = [
            (suited([Nine, Eight, Seven, Six, Five]), Category::StraightFlush, [Nine, Eight, Seven, Six, Five]),
            (offsuit([Two, Ace, Ace, Ace, Ace]), Category::FourOfAKind, [Ace, Ace, Ace, Ace, Two]),
            (offsuit([Two, King, Two, King, King]), Category::FullHouse, [King, King, King, Two, Two]),
            (suited([Two, Jack, Nine, Ace, Five]), Category::Flush, [Ace, Jack, Nine, Five, Two]),
            (offsuit([Ace, Two, Three, Four, Five]), Category::Straight, [Five, Four, Three, Two, Ace]),
            (offsuit([Nine, Jack, Jack, Seven, Jack]), Category::ThreeOfAKind, [Jack, Jack, Jack, Nine, Seven]),
            (offsuit([Queen, Ace, King, Ace, King]), Category::TwoPair, [Ace, Ace, King, King, Queen]),
            (offsuit([Three, Jack, Nine, Jack, Seven]), Category::Pair, [Jack, Jack, Nine, Seven, Three]),
            (offsuit([Seven, Ace, King, Jack, Nine]), Category::HighCard, [Ace, King, Jack, Nine, Seven]),
        ];
        for (cards, category, ranks) in cases {
            let c = classify(&cards);
            assert_eq!(c.category, category);
            assert_eq!(c.ranks, ranks);
        }
    }

    #[test]
    fn straight_flush_beats_flush_and_straight() {
        let analysis = HandAnalysis::new(&suited([Nine, Eight, Seven, Six, Five]));
        assert!(StraightFlushDetector.detect(&analysis).is_some());
        assert!(FlushDetector.detect(&analysis).is_some());
        assert!(StraightDetector.detect(&analysis).is_some());
        assert_eq!(classify(&suited([Nine, Eight, Seven, Six, Five])).category, Category::StraightFlush);
    }

    #[test]
    fn full_house_is_not_trips() {
        let analysis = HandAnalysis::new(&offsuit([Two, King, Two, King, King]));
        assert!(ThreeOfAKindDetector.detect(&analysis).is_none());
        assert!(OnePairDetector.detect(&analysis).is_none());
    }

    #[test]
    fn values_order_within_and_across_categories() {
        let wheel = classify(&offsuit([Ace, Two, Three, Four, Five]));
        let six_high = classify(&offsuit([Six, Two, Three, Four, Five]));
        assert!(six_high.value > wheel.value);

        let trips = classify(&offsuit([Two, Two, Two, Four, Three]));
        assert!(wheel.value > trips.value);

        let aces_up = classify(&offsuit([Ace, Ace, Three, Three, Two]));
        let kings_up = classify(&offsuit([King, King, Queen, Queen, Jack]));
        assert!(aces_up.value > kings_up.value);
    }
}
