use super::combinations::{binomial, Combinations};
use super::detector::{classify, Classified};
use super::eclass::{Category, EclassTable, EquivalenceClass, CLASS_COUNT};
use super::hash::hash_five;
use super::lookup::HashLookup;
use super::EvalError;
use crate::cards::{Card, Rank, Suit};
use crate::deck::DeckType;
use crate::table::TableError;
use ahash::AHashMap;
use log::{debug, info};
use rayon::prelude::*;
use std::collections::hash_map::Entry;
use std::time::Instant;

/// Both lookup tables, freshly enumerated.
#[derive(Debug, Clone)]
pub struct Tables {
    pub eclasses: EclassTable,
    pub lookup: HashLookup,
}

/// Enumerate every five-card hand of a 52-card deck and derive both tables.
///
/// Each distinct hash key is classified by rule, the distinct classes are sorted
/// strongest first and numbered from 1. One rayon task handles each first card.
pub fn build_tables() -> Result<Tables, TableError> {
    let start = Instant::now();
    let deck = DeckType::English.cards();

    let partials = (0..deck.len() - 4)
        .into_par_iter()
        .map(|first| classify_from(&deck, first))
        .collect::<Result<Vec<_>, EvalError>>()?;

    let mut merged: AHashMap<u64, Classified> = AHashMap::with_capacity(CLASS_COUNT);
    let mut hands = 0usize;
    for (part, count) in partials {
        hands += count;
        for (key, classified) in part {
            match merged.entry(key) {
                Entry::Vacant(slot) => {
                    slot.insert(classified);
                }
                Entry::Occupied(seen) if seen.get().value != classified.value => {
                    return Err(TableError::InconsistentHash(key));
                }
                Entry::Occupied(_) => {}
            }
        }
    }

    let expected_hands = binomial(deck.len(), 5);
    if hands != expected_hands {
        return Err(TableError::CountMismatch { what: "hands", expected: expected_hands, actual: hands });
    }
    if merged.len() != CLASS_COUNT {
        return Err(TableError::CountMismatch {
            what: "eclasses",
            expected: CLASS_COUNT,
            actual: merged.len(),
        });
    }

    let mut ordered: Vec<(u64, Classified)> = merged.into_iter().collect();
    ordered.sort_unstable_by(|a, b| b.1.value.cmp(&a.1.value));

    let mut classes = Vec::with_capacity(CLASS_COUNT);
    let mut hashes = Vec::with_capacity(CLASS_COUNT);
    for (index, (key, classified)) in (1u16..).zip(ordered) {
        if Category::from_class_index(index) != Some(classified.category) {
            return Err(TableError::ClassShape { index });
        }
        classes.push(EquivalenceClass::new(index, classified.category, classified.ranks));
        hashes.push((key, index));
    }
    hashes.sort_unstable_by_key(|&(key, _)| key);

    let lookup = HashLookup::from_entries(hashes, CLASS_COUNT)?;
    let eclasses = EclassTable::from_classes(classes);
    info!(
        "built {} classes and {} hash entries from {} hands in {:.2?}",
        eclasses.len(),
        lookup.len(),
        hands,
        start.elapsed()
    );
    Ok(Tables { eclasses, lookup })
}

/// Classify every hand whose lowest deck position is `first`.
fn classify_from(deck: &[Card], first: usize) -> Result<(AHashMap<u64, Classified>, usize), EvalError> {
    let rest = &deck[first + 1..];
    let mut seen: AHashMap<u64, Classified> = AHashMap::new();
    let mut hands = 0usize;
    for idx in Combinations::<4>::new(rest.len()) {
        let cards = [deck[first], rest[idx[0]], rest[idx[1]], rest[idx[2]], rest[idx[3]]];
        let key = hash_five(&cards)?.key();
        hands += 1;
        if let Entry::Vacant(slot) = seen.entry(key) {
            slot.insert(classify(&decode(&cards)?));
        }
    }
    debug!("first card {}: {} hands, {} distinct keys", deck[first], hands, seen.len());
    Ok((seen, hands))
}

fn decode(cards: &[Card; 5]) -> Result<[(Rank, Suit); 5], EvalError> {
    let mut out = [(Rank::Two, Suit::Clubs); 5];
    for (slot, &card) in out.iter_mut().zip(cards) {
        let (rank, suit) = card.high_ace_fix().to_tuple().ok_or(EvalError::InvalidCard(card))?;
        *slot = (rank, suit);
    }
    Ok(out)
}
