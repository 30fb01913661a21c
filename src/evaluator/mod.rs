pub mod builder;
pub(crate) mod combinations;
pub(crate) mod detector;
pub mod eclass;
pub(crate) mod hand_analysis;
pub mod hash;
pub mod lookup;
pub mod primes;
pub(crate) mod rank_groups;
pub(crate) mod straight_info;
pub(crate) mod suit_info;

pub use eclass::{Category, EclassTable, EquivalenceClass, CLASS_COUNT};
pub use hash::{hash_five, rank_product, HandHash};
pub use lookup::HashLookup;
pub use primes::{prime_for_rank, PRIMES};

use crate::cards::Card;
use crate::config::{Config, TableSource};
use crate::hand::{Hand, MAX_CARDS, MIN_CARDS};
use crate::table::{PersistedTables, TableError};
use combinations::Combinations;
use core::cmp::Ordering;
use std::path::Path;
use std::sync::OnceLock;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    #[error("card {0} has no poker rank or suit")]
    InvalidCard(Card),
    #[error("card {0} appears more than once")]
    DuplicateCard(Card),
    #[error("cannot evaluate {0} cards")]
    InvalidHandSize(usize),
    #[error("no hand class for prime product {product} (flush: {flush})")]
    UnknownHash { product: u64, flush: bool },
    #[error("class index {0} out of range")]
    IndexOutOfRange(usize),
    #[error("rank {0} out of range")]
    RankOutOfRange(u8),
}

/// Evaluation behavior switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvalOptions {
    /// Reject hands that contain the same card twice (`DuplicateCard`).
    pub reject_duplicates: bool,
}

/// Best five-card class found in a hand. Ordering follows the class: stronger is greater.
#[derive(Debug, Clone, Copy)]
#[non_exhaustive]
pub struct Evaluation {
    pub class: EquivalenceClass,
    pub best_five: [Card; 5],
}

impl Evaluation {
    pub const fn category(&self) -> Category {
        self.class.category()
    }

    /// Class index; lower is stronger.
    pub const fn strength(&self) -> u16 {
        self.class.index()
    }
}

impl Ord for Evaluation {
    fn cmp(&self, other: &Self) -> Ordering {
        self.class.cmp(&other.class)
    }
}

impl PartialOrd for Evaluation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Evaluation {
    fn eq(&self, other: &Self) -> bool {
        self.class == other.class
    }
}

impl Eq for Evaluation {}

/// Hand counts per category over an exhaustive enumeration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Census {
    pub hands: u64,
    by_category: [u64; 9],
}

impl Census {
    pub fn count(&self, category: Category) -> u64 {
        self.by_category[usize::from(category.ordinal())]
    }
}

/// Immutable evaluator over a pair of lookup tables.
///
/// ```
/// use primeval::cards::parse_cards;
/// use primeval::evaluator::{Category, HandEvaluator};
///
/// let ev = HandEvaluator::global();
/// let hand = parse_cards("As Ah Qc Jd 9h 3s 2c").unwrap();
/// let eval = ev.evaluate(&hand).unwrap();
/// assert_eq!(eval.category(), Category::Pair);
/// ```
#[derive(Debug, Clone)]
pub struct HandEvaluator {
    eclasses: EclassTable,
    lookup: HashLookup,
    options: EvalOptions,
}

static GLOBAL: OnceLock<HandEvaluator> = OnceLock::new();

impl HandEvaluator {
    /// Enumerate all five-card hands and build the tables in memory.
    pub fn build() -> Result<Self, TableError> {
        let tables = builder::build_tables()?;
        Self::from_tables(tables.eclasses, tables.lookup)
    }

    pub fn from_tables(eclasses: EclassTable, lookup: HashLookup) -> Result<Self, TableError> {
        if eclasses.len() != CLASS_COUNT {
            return Err(TableError::CountMismatch {
                what: "eclasses",
                expected: CLASS_COUNT,
                actual: eclasses.len(),
            });
        }
        Ok(Self { eclasses, lookup, options: EvalOptions::default() })
    }

    /// Load persisted tables; the format follows the file extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TableError> {
        let (eclasses, lookup) = PersistedTables::load(path)?.into_tables()?;
        Self::from_tables(eclasses, lookup)
    }

    pub fn from_config(config: &Config) -> Result<Self, TableError> {
        let evaluator = match &config.table {
            TableSource::Build => Self::build()?,
            TableSource::File(path) => Self::load(path)?,
        };
        Ok(evaluator.with_options(config.options))
    }

    pub fn with_options(mut self, options: EvalOptions) -> Self {
        self.options = options;
        self
    }

    /// Process-wide evaluator, built on first use.
    ///
    /// # Panics
    ///
    /// Panics if the in-memory enumeration fails, which indicates a bug rather
    /// than a recoverable condition.
    pub fn global() -> &'static HandEvaluator {
        GLOBAL.get_or_init(|| match HandEvaluator::build() {
            Ok(evaluator) => evaluator,
            Err(e) => panic!("building hand evaluator tables failed: {e}"),
        })
    }

    /// Publish this evaluator as the process-wide one. Fails if one is already in place.
    pub fn install(self) -> Result<&'static HandEvaluator, TableError> {
        let mut installed = false;
        let evaluator = GLOBAL.get_or_init(|| {
            installed = true;
            self
        });
        if installed {
            Ok(evaluator)
        } else {
            Err(TableError::AlreadyInstalled)
        }
    }

    pub fn options(&self) -> EvalOptions {
        self.options
    }

    pub fn eclasses(&self) -> &EclassTable {
        &self.eclasses
    }

    pub fn lookup(&self) -> &HashLookup {
        &self.lookup
    }

    pub fn class_of(&self, hash: HandHash) -> Result<&EquivalenceClass, EvalError> {
        let index = self.lookup.get(hash)?;
        self.eclasses.class_by_index(usize::from(index))
    }

    /// Evaluate exactly five cards.
    pub fn evaluate_five(&self, cards: &[Card]) -> Result<Evaluation, EvalError> {
        if cards.len() != 5 {
            return Err(EvalError::InvalidHandSize(cards.len()));
        }
        self.evaluate(cards)
    }

    /// Evaluate 5 to 7 cards, returning the best five-card class among all subsets.
    pub fn evaluate(&self, cards: &[Card]) -> Result<Evaluation, EvalError> {
        if !(MIN_CARDS..=MAX_CARDS).contains(&cards.len()) {
            return Err(EvalError::InvalidHandSize(cards.len()));
        }
        if self.options.reject_duplicates {
            check_duplicates(cards)?;
        }

        // Subsets without a class (a suited pair from a deck with duplicates) are
        // skipped; the hand fails only when none resolves.
        let mut best: Option<(u16, [Card; 5])> = None;
        let mut unresolved: Option<EvalError> = None;
        for idx in Combinations::<5>::new(cards.len()) {
            let five = idx.map(|i| cards[i]);
            let index = match self.lookup.get(hash_five(&five)?) {
                Ok(index) => index,
                Err(err @ EvalError::UnknownHash { .. }) => {
                    unresolved.get_or_insert(err);
                    continue;
                }
                Err(err) => return Err(err),
            };
            if best.map_or(true, |(b, _)| index < b) {
                best = Some((index, five));
            }
        }

        let (index, best_five) = match best {
            Some(found) => found,
            None => return Err(unresolved.unwrap_or(EvalError::InvalidHandSize(cards.len()))),
        };
        let class = *self.eclasses.class_by_index(usize::from(index))?;
        Ok(Evaluation { class, best_five })
    }

    /// Class index of the best five cards; lower is stronger.
    pub fn strength(&self, cards: &[Card]) -> Result<u16, EvalError> {
        self.evaluate(cards).map(|e| e.strength())
    }

    pub fn evaluate_hand(&self, hand: &Hand) -> Result<Evaluation, EvalError> {
        self.evaluate(hand.as_slice())
    }

    /// Evaluate every five-card hand of a standard deck and count them by category.
    pub fn census(&self) -> Result<Census, EvalError> {
        let deck = crate::deck::DeckType::English.cards();
        let mut census = Census::default();
        for idx in Combinations::<5>::new(deck.len()) {
            let five = idx.map(|i| deck[i]);
            let eval = self.evaluate_five(&five)?;
            census.hands += 1;
            census.by_category[usize::from(eval.category().ordinal())] += 1;
        }
        Ok(census)
    }
}

fn check_duplicates(cards: &[Card]) -> Result<(), EvalError> {
    let mut seen = 0u64;
    for &card in cards {
        let bit = 1u64 << card.ordinal();
        if seen & bit != 0 {
            return Err(EvalError::DuplicateCard(card));
        }
        seen |= bit;
    }
    Ok(())
}
