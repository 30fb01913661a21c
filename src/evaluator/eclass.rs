use super::EvalError;
use crate::cards::Rank;
use crate::table::TableError;
use core::cmp::Ordering;
use std::fmt;

/// Number of distinct five-card high-poker hands once suits are ignored (except for flushes).
pub const CLASS_COUNT: usize = 7462;

/// Poker hand category from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl Category {
    /// Strongest first, matching class index order.
    pub const ALL: [Category; 9] = [
        Category::StraightFlush,
        Category::FourOfAKind,
        Category::FullHouse,
        Category::Flush,
        Category::Straight,
        Category::ThreeOfAKind,
        Category::TwoPair,
        Category::Pair,
        Category::HighCard,
    ];

    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Inclusive range of class indices belonging to this category.
    pub const fn class_range(self) -> (u16, u16) {
        match self {
            Category::StraightFlush => (1, 10),
            Category::FourOfAKind => (11, 166),
            Category::FullHouse => (167, 322),
            Category::Flush => (323, 1599),
            Category::Straight => (1600, 1609),
            Category::ThreeOfAKind => (1610, 2467),
            Category::TwoPair => (2468, 3325),
            Category::Pair => (3326, 6185),
            Category::HighCard => (6186, 7462),
        }
    }

    pub fn from_class_index(index: u16) -> Option<Category> {
        Category::ALL.into_iter().find(|c| {
            let (lo, hi) = c.class_range();
            (lo..=hi).contains(&index)
        })
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::HighCard => "high card",
            Category::Pair => "pair",
            Category::TwoPair => "two pair",
            Category::ThreeOfAKind => "three of a kind",
            Category::Straight => "straight",
            Category::Flush => "flush",
            Category::FullHouse => "full house",
            Category::FourOfAKind => "four of a kind",
            Category::StraightFlush => "straight flush",
        }
    }

    /// Lengths of the runs of equal ranks in significance order.
    const fn run_lengths(self) -> &'static [usize] {
        match self {
            Category::FourOfAKind => &[4, 1],
            Category::FullHouse => &[3, 2],
            Category::ThreeOfAKind => &[3, 1, 1],
            Category::TwoPair => &[2, 2, 1],
            Category::Pair => &[2, 1, 1, 1],
            _ => &[1, 1, 1, 1, 1],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One of the 7462 canonical hand classes.
///
/// `index` doubles as the strength rank: 1 is the royal flush, 7462 is 7-5-4-3-2
/// offsuit. Ordering follows strength, so a stronger class compares greater.
#[derive(Debug, Clone, Copy, Hash)]
pub struct EquivalenceClass {
    index: u16,
    category: Category,
    ranks: [Rank; 5],
}

impl EquivalenceClass {
    pub(crate) const fn new(index: u16, category: Category, ranks: [Rank; 5]) -> Self {
        Self { index, category, ranks }
    }

    pub const fn index(&self) -> u16 {
        self.index
    }

    pub const fn category(&self) -> Category {
        self.category
    }

    /// Representative ranks in significance order, e.g. `[K, K, K, 2, 2]`.
    /// The wheel is `[5, 4, 3, 2, A]`.
    pub const fn ranks(&self) -> [Rank; 5] {
        self.ranks
    }

    pub fn beats(&self, other: &EquivalenceClass) -> bool {
        self.index < other.index
    }

    /// English description of the class.
    ///
    /// ```
    /// use primeval::cards::parse_cards;
    /// use primeval::evaluator::HandEvaluator;
    ///
    /// let ev = HandEvaluator::global();
    /// let hand = parse_cards("KsKhKd2c2h").unwrap();
    /// let class = ev.evaluate(&hand).unwrap().class;
    /// assert_eq!(class.description(), "kings full of deuces");
    /// ```
    pub fn description(&self) -> String {
        let r = &self.ranks;
        let names = |xs: &[Rank]| xs.iter().map(|x| x.name()).collect::<Vec<_>>().join(", ");
        match self.category {
            Category::StraightFlush if r[0] == Rank::Ace => "royal flush".to_string(),
            Category::StraightFlush => format!("{}-high straight flush", r[0].name()),
            Category::FourOfAKind => {
                format!("four {} with {} {}", r[0].plural(), r[4].article(), r[4].name())
            }
            Category::FullHouse => format!("{} full of {}", r[0].plural(), r[3].plural()),
            Category::Flush => format!("flush: {}", names(&r[..])),
            Category::Straight => format!("{}-high straight", r[0].name()),
            Category::ThreeOfAKind => format!("three {}, {}", r[0].plural(), names(&r[3..])),
            Category::TwoPair => format!(
                "{} and {} with {} {}",
                r[0].plural(),
                r[2].plural(),
                r[4].article(),
                r[4].name()
            ),
            Category::Pair => format!("pair of {}, {}", r[0].plural(), names(&r[2..])),
            Category::HighCard => format!("no pair: {}", names(&r[..])),
        }
    }
}

impl PartialEq for EquivalenceClass {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl Eq for EquivalenceClass {}

impl Ord for EquivalenceClass {
    fn cmp(&self, other: &Self) -> Ordering {
        other.index.cmp(&self.index)
    }
}

impl PartialOrd for EquivalenceClass {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for EquivalenceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {}", self.index, self.description())
    }
}

/// Whether `values` (poker values, significance order) are five consecutive ranks.
fn is_straight(values: &[u8; 5]) -> bool {
    *values == [5, 4, 3, 2, 14] || (0..4).all(|i| values[i] == values[i + 1] + 1)
}

/// Check that representative ranks fit the category's shape.
fn shape_matches(category: Category, values: &[u8; 5]) -> bool {
    let mut runs: Vec<(u8, usize)> = Vec::with_capacity(5);
    for &v in values {
        match runs.last_mut() {
            Some((last, len)) if *last == v => *len += 1,
            _ => runs.push((v, 1)),
        }
    }
    let lengths: Vec<usize> = runs.iter().map(|(_, len)| *len).collect();
    if lengths != category.run_lengths() {
        return false;
    }
    // every run is a different rank, and kickers after the leading group descend
    let mut seen = 0u16;
    for (v, _) in &runs {
        if seen & (1u16 << v) != 0 {
            return false;
        }
        seen |= 1u16 << v;
    }
    let first_single = runs.iter().position(|(_, len)| *len == 1).unwrap_or(runs.len());
    let multi_desc = runs[..first_single].windows(2).all(|w| w[0].1 > w[1].1 || w[0].0 > w[1].0);
    let singles_desc = runs[first_single..].windows(2).all(|w| w[0].0 > w[1].0);
    match category {
        Category::StraightFlush | Category::Straight => is_straight(values),
        Category::Flush | Category::HighCard => singles_desc && !is_straight(values),
        _ => multi_desc && singles_desc,
    }
}

/// The full set of equivalence classes, indexed 1..=n.
#[derive(Debug, Clone)]
pub struct EclassTable {
    classes: Vec<EquivalenceClass>,
}

impl EclassTable {
    /// Wrap classes already produced in index order by the builder.
    pub(crate) fn from_classes(classes: Vec<EquivalenceClass>) -> Self {
        debug_assert!(classes.iter().enumerate().all(|(i, c)| usize::from(c.index) == i + 1));
        Self { classes }
    }

    /// Materialize the persisted `(index, [poker values])` form.
    pub fn from_entries<I>(entries: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (u16, [u8; 5])>,
    {
        let mut classes = Vec::with_capacity(CLASS_COUNT);
        for (position, (index, values)) in entries.into_iter().enumerate() {
            let expected = position + 1;
            if usize::from(index) != expected {
                return Err(TableError::ClassIndexGap { expected, found: index });
            }
            let category =
                Category::from_class_index(index).ok_or(TableError::ClassShape { index })?;
            let mut ranks = [Rank::Two; 5];
            for (slot, &v) in ranks.iter_mut().zip(&values) {
                *slot = Rank::from_poker_value(v).ok_or(TableError::ClassShape { index })?;
            }
            if !shape_matches(category, &values) {
                return Err(TableError::ClassShape { index });
            }
            classes.push(EquivalenceClass::new(index, category, ranks));
        }
        if classes.len() != CLASS_COUNT {
            return Err(TableError::CountMismatch {
                what: "eclasses",
                expected: CLASS_COUNT,
                actual: classes.len(),
            });
        }
        Ok(Self { classes })
    }

    /// Persisted form, inverse of [`EclassTable::from_entries`].
    pub fn entries(&self) -> impl Iterator<Item = (u16, [u8; 5])> + '_ {
        self.classes.iter().map(|c| (c.index, c.ranks.map(|r| r.poker_value().unwrap_or(0))))
    }

    /// Class for an index in 1..=n.
    pub fn class_by_index(&self, index: usize) -> Result<&EquivalenceClass, EvalError> {
        index
            .checked_sub(1)
            .and_then(|i| self.classes.get(i))
            .ok_or(EvalError::IndexOutOfRange(index))
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EquivalenceClass> {
        self.classes.iter()
    }
}
