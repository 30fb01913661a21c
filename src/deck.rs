use crate::cards::{Card, Rank, Suit};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::fmt;
use std::str::FromStr;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("unknown deck type: '{0}'")]
    UnknownType(String),
}

/// Which cards a deck contains and how they may be combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DeckType {
    /// The standard 52-card deck.
    #[default]
    English,
    OneJoker,
    TwoJokers,
    /// 52 cards with aces ranked low.
    Low,
    LowJoker,
    /// Two English decks and four jokers; duplicates are expected.
    Canasta,
}

impl DeckType {
    pub const ALL: [DeckType; 6] = [
        DeckType::English,
        DeckType::OneJoker,
        DeckType::TwoJokers,
        DeckType::Low,
        DeckType::LowJoker,
        DeckType::Canasta,
    ];

    /// Look up a deck type by canonical name or alias (`"poker"`, `"razz"`, `"54"`, ...).
    pub fn from_name(name: &str) -> Result<Self, DeckError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "english" | "poker" | "52" | "bridge" => Ok(DeckType::English),
            "onejoker" | "joker" | "53" => Ok(DeckType::OneJoker),
            "twojokers" | "54" => Ok(DeckType::TwoJokers),
            "low" | "ace-to-five" | "razz" => Ok(DeckType::Low),
            "lowjoker" => Ok(DeckType::LowJoker),
            "canasta" => Ok(DeckType::Canasta),
            _ => Err(DeckError::UnknownType(name.to_string())),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            DeckType::English => "english",
            DeckType::OneJoker => "onejoker",
            DeckType::TwoJokers => "twojokers",
            DeckType::Low => "low",
            DeckType::LowJoker => "lowjoker",
            DeckType::Canasta => "canasta",
        }
    }

    pub const fn low_aces(self) -> bool {
        matches!(self, DeckType::Low | DeckType::LowJoker)
    }

    pub const fn dups_allowed(self) -> bool {
        matches!(self, DeckType::Canasta)
    }

    pub const fn jokers(self) -> &'static [Card] {
        match self {
            DeckType::English | DeckType::Low => &[],
            DeckType::OneJoker | DeckType::LowJoker => &[Card::JOKER],
            DeckType::TwoJokers => &[Card::BLACK_JOKER, Card::WHITE_JOKER],
            DeckType::Canasta => &[Card::JOKER, Card::JOKER, Card::JOKER, Card::JOKER],
        }
    }

    pub const fn size(self) -> usize {
        let copies = if self.dups_allowed() { 2 } else { 1 };
        copies * 52 + self.jokers().len()
    }

    /// Whether `card` belongs to this deck at all.
    pub fn contains(self, card: Card) -> bool {
        if card.is_joker() {
            return self.jokers().contains(&card);
        }
        match card.rank() {
            Some(Rank::Knight) | None => false,
            Some(Rank::LowAce) => self.low_aces(),
            Some(Rank::Ace) => !self.low_aces(),
            Some(_) => true,
        }
    }

    /// Every card of a fresh deck, suit by suit, jokers last.
    pub fn cards(self) -> Vec<Card> {
        let copies = if self.dups_allowed() { 2 } else { 1 };
        let mut cards = Vec::with_capacity(self.size());
        for _ in 0..copies {
            for s in Suit::ALL {
                for r in Rank::ALL {
                    let r = if r == Rank::Ace && self.low_aces() { Rank::LowAce } else { r };
                    cards.push(Card::new(r, s));
                }
            }
        }
        cards.extend_from_slice(self.jokers());
        cards
    }
}

impl fmt::Display for DeckType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DeckType {
    type Err = DeckError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DeckType::from_name(s)
    }
}

/// A deck of cards of a given [`DeckType`].
#[derive(Debug, Clone)]
pub struct Deck {
    deck_type: DeckType,
    cards: Vec<Card>,
}

impl Deck {
    /// ```
    /// use primeval::deck::{Deck, DeckType};
    ///
    /// assert_eq!(Deck::standard().len(), 52);
    /// assert_eq!(Deck::new(DeckType::Canasta).len(), 108);
    /// ```
    pub fn new(deck_type: DeckType) -> Self {
        Self { deck_type, cards: deck_type.cards() }
    }

    pub fn standard() -> Self {
        Self::new(DeckType::English)
    }

    pub fn deck_type(&self) -> DeckType {
        self.deck_type
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
    }

    /// Shuffle using the provided RNG implementing Rng.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Draw one card from the top of the deck.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Draw `n` cards from the top of the deck.
    pub fn draw_n(&mut self, n: usize) -> Vec<Card> {
        (0..n).filter_map(|_| self.draw()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn deck_sizes_match_types() {
        for t in DeckType::ALL {
            assert_eq!(Deck::new(t).len(), t.size(), "{t}");
        }
        assert_eq!(DeckType::English.size(), 52);
        assert_eq!(DeckType::OneJoker.size(), 53);
        assert_eq!(DeckType::TwoJokers.size(), 54);
        assert_eq!(DeckType::Canasta.size(), 108);
    }

    #[test]
    fn standard_deck_has_distinct_cards() {
        let d = Deck::standard();
        let set: HashSet<Card> = d.as_slice().iter().copied().collect();
        assert_eq!(set.len(), 52);
        assert!(d.as_slice().iter().all(|c| DeckType::English.contains(*c)));
    }

    #[test]
    fn low_decks_use_low_aces() {
        let d = Deck::new(DeckType::Low);
        assert!(d.as_slice().contains(&Card::new(Rank::LowAce, Suit::Spades)));
        assert!(!d.as_slice().contains(&Card::new(Rank::Ace, Suit::Spades)));
        assert!(!DeckType::Low.contains(Card::new(Rank::Ace, Suit::Spades)));
        assert!(!DeckType::English.contains(Card::new(Rank::LowAce, Suit::Spades)));
    }

    #[test]
    fn jokers_and_knights_membership() {
        assert!(!DeckType::English.contains(Card::JOKER));
        assert!(DeckType::OneJoker.contains(Card::JOKER));
        assert!(!DeckType::OneJoker.contains(Card::WHITE_JOKER));
        assert!(DeckType::TwoJokers.contains(Card::WHITE_JOKER));
        assert!(!DeckType::Canasta.contains(Card::new(Rank::Knight, Suit::Clubs)));
    }

    #[test]
    fn names_and_aliases() {
        assert_eq!(DeckType::from_name("poker").unwrap(), DeckType::English);
        assert_eq!(DeckType::from_name("Razz").unwrap(), DeckType::Low);
        assert_eq!("53".parse::<DeckType>().unwrap(), DeckType::OneJoker);
        for t in DeckType::ALL {
            assert_eq!(DeckType::from_name(t.name()).unwrap(), t);
        }
        assert!(matches!(DeckType::from_name("tarot"), Err(DeckError::UnknownType(_))));
    }

    #[test]
    fn seeded_shuffle_is_reproducible() {
        let mut d1 = Deck::standard();
        let mut d2 = Deck::standard();
        d1.shuffle_seeded(42);
        d2.shuffle_seeded(42);
        assert_eq!(d1.cards, d2.cards);
    }

    #[test]
    fn draw_reduces_length_and_returns_cards() {
        let mut d = Deck::standard();
        d.shuffle_seeded(7);
        let c1 = d.draw().unwrap();
        let c2 = d.draw().unwrap();
        assert_ne!(c1, c2);
        assert_eq!(d.len(), 50);
        let hand = d.draw_n(5);
        assert_eq!(hand.len(), 5);
        assert_eq!(d.len(), 45);
    }
}
