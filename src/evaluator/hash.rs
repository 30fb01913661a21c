use super::primes::PRIMES;
use super::EvalError;
use crate::cards::{Card, Suit};

/// Most cards [`rank_product`] accepts; 41^10 still fits in a `u64`.
pub const MAX_HASH_CARDS: usize = 10;

/// Fingerprint of a five-card hand: the prime product of its ranks plus the suits seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandHash {
    product: u64,
    suits: u8,
}

impl HandHash {
    pub const fn product(self) -> u64 {
        self.product
    }

    /// Bit set of the suits present, bit 0 = clubs.
    pub const fn suits(self) -> u8 {
        self.suits
    }

    pub const fn is_flush(self) -> bool {
        self.suits.count_ones() == 1
    }

    /// Single lookup key: `product << 1 | is_flush`.
    pub const fn key(self) -> u64 {
        (self.product << 1) | self.is_flush() as u64
    }
}

/// Split a lookup key back into `(product, is_flush)`.
pub const fn split_key(key: u64) -> (u64, bool) {
    (key >> 1, key & 1 == 1)
}

/// Poker value (2..=14) and suit of a card. Low aces count as aces.
pub(crate) fn rank_and_suit(card: Card) -> Result<(u8, Suit), EvalError> {
    match (card.rank().and_then(|r| r.poker_value()), card.suit()) {
        (Some(value), Some(suit)) => Ok((value, suit)),
        _ => Err(EvalError::InvalidCard(card)),
    }
}

/// Hash exactly five cards.
///
/// ```
/// use primeval::cards::parse_cards;
/// use primeval::evaluator::hash::hash_five;
///
/// let royal = hash_five(&parse_cards("AsKsQsJsTs").unwrap()).unwrap();
/// assert_eq!(royal.product(), 41 * 37 * 31 * 29 * 23);
/// assert!(royal.is_flush());
/// ```
pub fn hash_five(cards: &[Card]) -> Result<HandHash, EvalError> {
    if cards.len() != 5 {
        return Err(EvalError::InvalidHandSize(cards.len()));
    }
    let mut product = 1u64;
    let mut suits = 0u8;
    for &card in cards {
        let (value, suit) = rank_and_suit(card)?;
        product *= PRIMES[usize::from(value - 2)];
        suits |= 1 << (suit.value() - 1);
    }
    Ok(HandHash { product, suits })
}

/// Suit- and order-independent rank fingerprint of 1..=10 cards.
pub fn rank_product(cards: &[Card]) -> Result<u64, EvalError> {
    if cards.is_empty() || cards.len() > MAX_HASH_CARDS {
        return Err(EvalError::InvalidHandSize(cards.len()));
    }
    cards.iter().try_fold(1u64, |acc, &card| {
        let (value, _) = rank_and_suit(card)?;
        Ok(acc * PRIMES[usize::from(value - 2)])
    })
}
