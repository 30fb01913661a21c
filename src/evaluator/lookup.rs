use super::hash::{split_key, HandHash};
use super::EvalError;
use crate::table::TableError;

/// Maps a prime product and flush flag to a class index.
///
/// Flush and non-flush entries live in separate arrays sorted by product and are
/// searched with a binary search.
#[derive(Debug, Clone, Default)]
pub struct HashLookup {
    plain: Vec<(u64, u16)>,
    flush: Vec<(u64, u16)>,
}

impl HashLookup {
    /// Build from `(key, class_index)` pairs sorted by strictly ascending key.
    ///
    /// Every class index must lie in `1..=class_count`.
    pub fn from_entries<I>(entries: I, class_count: usize) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (u64, u16)>,
    {
        let mut lookup = HashLookup::default();
        let mut previous: Option<u64> = None;
        for (key, class) in entries {
            match previous {
                Some(prev) if prev == key => return Err(TableError::DuplicateHash(key)),
                Some(prev) if prev > key => return Err(TableError::UnsortedHashes(key)),
                _ => {}
            }
            previous = Some(key);
            if class == 0 || usize::from(class) > class_count {
                return Err(TableError::UnknownClass { key, class });
            }
            let (product, is_flush) = split_key(key);
            if is_flush {
                lookup.flush.push((product, class));
            } else {
                lookup.plain.push((product, class));
            }
        }
        Ok(lookup)
    }

    /// Class index for a prime product, or `UnknownHash` if no five-card hand produces it.
    pub fn lookup(&self, product: u64, is_flush: bool) -> Result<u16, EvalError> {
        let table = if is_flush { &self.flush } else { &self.plain };
        table
            .binary_search_by_key(&product, |&(p, _)| p)
            .map(|i| table[i].1)
            .map_err(|_| EvalError::UnknownHash { product, flush: is_flush })
    }

    pub fn get(&self, hash: HandHash) -> Result<u16, EvalError> {
        self.lookup(hash.product(), hash.is_flush())
    }

    pub fn len(&self) -> usize {
        self.plain.len() + self.flush.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `(key, class_index)` pairs sorted by key, the persisted form.
    pub fn entries(&self) -> Vec<(u64, u16)> {
        let mut entries: Vec<(u64, u16)> = self
            .plain
            .iter()
            .map(|&(p, c)| (p << 1, c))
            .chain(self.flush.iter().map(|&(p, c)| ((p << 1) | 1, c)))
            .collect();
        entries.sort_unstable_by_key(|&(key, _)| key);
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> HashLookup {
        // royal flush, ace-high straight, and the worst high card
        let royal = 41 * 37 * 31 * 29 * 23;
        let worst = 13 * 7 * 5 * 3 * 2;
        let entries = vec![(worst << 1, 7462), (royal << 1, 1600), ((royal << 1) | 1, 1)];
        HashLookup::from_entries(entries, 7462).unwrap()
    }

    #[test]
    fn lookup_splits_on_flush_flag() {
        let lookup = small();
        let royal = 41 * 37 * 31 * 29 * 23;
        assert_eq!(lookup.lookup(royal, true).unwrap(), 1);
        assert_eq!(lookup.lookup(royal, false).unwrap(), 1600);
        assert_eq!(lookup.len(), 3);
    }

    #[test]
    fn missing_products_are_unknown() {
        let lookup = small();
        let err = lookup.lookup(41u64.pow(5), false).unwrap_err();
        assert!(matches!(err, EvalError::UnknownHash { flush: false, .. }));
        let worst = 13 * 7 * 5 * 3 * 2;
        assert!(matches!(lookup.lookup(worst, true), Err(EvalError::UnknownHash { flush: true, .. })));
    }

    #[test]
    fn entries_round_trip() {
        let lookup = small();
        let again = HashLookup::from_entries(lookup.entries(), 7462).unwrap();
        assert_eq!(again.entries(), lookup.entries());
    }

    #[test]
    fn rejects_bad_entries() {
        assert!(matches!(
            HashLookup::from_entries(vec![(10, 1), (10, 2)], 7462),
            Err(TableError::DuplicateHash(10))
        ));
        assert!(matches!(
            HashLookup::from_entries(vec![(10, 1), (8, 2)], 7462),
            Err(TableError::UnsortedHashes(8))
        ));
        assert!(matches!(
            HashLookup::from_entries(vec![(10, 7463)], 7462),
            Err(TableError::UnknownClass { key: 10, class: 7463 })
        ));
        assert!(matches!(
            HashLookup::from_entries(vec![(10, 0)], 7462),
            Err(TableError::UnknownClass { class: 0, .. })
        ));
    }
}
