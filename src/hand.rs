use crate::cards::{parse_cards, Card};
use crate::deck::DeckType;
use std::collections::HashSet;
use std::str::FromStr;

/// Fewest cards a hand may hold.
pub const MIN_CARDS: usize = 5;
/// Most cards a hand may hold.
pub const MAX_CARDS: usize = 7;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("a hand holds 5 to 7 cards, got {0}")]
    Size(usize),
    #[error("card {card} is not part of a {deck} deck")]
    NotInDeck { card: Card, deck: DeckType },
    #[error("duplicate card {0}")]
    Duplicate(Card),
    #[error("card parse error: {0}")]
    CardParse(String),
}

/// Five to seven cards dealt from a deck of a known type.
///
/// ```
/// use primeval::deck::DeckType;
/// use primeval::hand::Hand;
///
/// let hand = Hand::parse("As Ks Qs Js Ts 2d 3c", DeckType::English).unwrap();
/// assert_eq!(hand.len(), 7);
/// assert!(Hand::parse("As As Qs Js Ts", DeckType::English).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
    deck_type: DeckType,
}

impl Hand {
    pub fn try_new(cards: Vec<Card>, deck_type: DeckType) -> Result<Self, HandError> {
        if !(MIN_CARDS..=MAX_CARDS).contains(&cards.len()) {
            return Err(HandError::Size(cards.len()));
        }
        if let Some(&card) = cards.iter().find(|c| !deck_type.contains(**c)) {
            return Err(HandError::NotInDeck { card, deck: deck_type });
        }
        if !deck_type.dups_allowed() {
            let mut seen = HashSet::with_capacity(cards.len());
            if let Some(&card) = cards.iter().find(|c| !seen.insert(**c)) {
                return Err(HandError::Duplicate(card));
            }
        }
        Ok(Self { cards, deck_type })
    }

    pub fn parse(s: &str, deck_type: DeckType) -> Result<Self, HandError> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Self::try_new(cards, deck_type)
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

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

impl FromStr for Hand {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Hand::parse(s, DeckType::English)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn size_limits_are_enforced() {
        assert!(matches!("As Ks Qs Js".parse::<Hand>(), Err(HandError::Size(4))));
        assert!(matches!("As Ks Qs Js Ts 9s 8s 7s".parse::<Hand>(), Err(HandError::Size(8))));
        assert_eq!("As Ks Qs Js Ts 9s".parse::<Hand>().unwrap().len(), 6);
    }

    #[test]
    fn duplicates_depend_on_deck_type() {
        let cards = parse_cards("As As Kd Qc Jh").unwrap();
        let ace = Card::new(Rank::Ace, Suit::Spades);
        assert_eq!(Hand::try_new(cards.clone(), DeckType::English), Err(HandError::Duplicate(ace)));
        assert!(Hand::try_new(cards, DeckType::Canasta).is_ok());
    }

    #[test]
    fn cards_must_belong_to_the_deck() {
        let cards = parse_cards("Jk As Kd Qc Jh").unwrap();
        assert!(matches!(
            Hand::try_new(cards.clone(), DeckType::English),
            Err(HandError::NotInDeck { card: Card::JOKER, .. })
        ));
        assert!(Hand::try_new(cards, DeckType::OneJoker).is_ok());

        let low = Hand::parse("1s 2d 3c 4h 5s", DeckType::Low).unwrap();
        assert_eq!(low.deck_type(), DeckType::Low);
        assert!(Hand::parse("As 2d 3c 4h 5s", DeckType::Low).is_err());
    }

    #[test]
    fn parse_errors_are_reported() {
        assert!(matches!("As Kx Qs Js Ts".parse::<Hand>(), Err(HandError::CardParse(_))));
    }
}
