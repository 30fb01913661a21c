/// Iterator over all `K`-element index combinations drawn from `0..n`, in lexicographic order.
///
/// Used for the best-of-N search (`Combinations::<5>::new(7)` yields the 21 five-card
/// subsets of a seven-card hand) and for enumerating every five-card hand of a deck.
#[derive(Debug, Clone)]
pub struct Combinations<const K: usize> {
    n: usize,
    indices: [usize; K],
    done: bool,
}

impl<const K: usize> Combinations<K> {
    pub fn new(n: usize) -> Self {
        let mut indices = [0usize; K];
        for (i, slot) in indices.iter_mut().enumerate() {
            *slot = i;
        }
        Self { n, indices, done: K == 0 || K > n }
    }
}

impl<const K: usize> Iterator for Combinations<K> {
    type Item = [usize; K];

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let result = self.indices;

        // Find the rightmost index that can be incremented
        let mut i = K - 1;
        loop {
            if self.indices[i] < self.n - (K - i) {
                self.indices[i] += 1;

                // Reset all indices to the right
                for j in (i + 1)..K {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
                break;
            }

            if i == 0 {
                self.done = true;
                break;
            }
            i -= 1;
        }

        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            (1, Some(binomial(self.n, K)))
        }
    }
}

/// Number of ways to choose `k` items from `n`.
pub const fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let mut acc = 1usize;
    let mut i = 0;
    while i < k {
        acc = acc * (n - i) / (i + 1);
        i += 1;
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn counts_match_binomial() {
        assert_eq!(Combinations::<5>::new(5).count(), 1);
        assert_eq!(Combinations::<5>::new(6).count(), 6);
        assert_eq!(Combinations::<5>::new(7).count(), 21);
        assert_eq!(Combinations::<4>::new(10).count(), binomial(10, 4));
        assert_eq!(binomial(52, 5), 2_598_960);
    }

    #[test]
    fn too_few_elements_yield_nothing() {
        assert_eq!(Combinations::<5>::new(4).next(), None);
        assert_eq!(Combinations::<3>::new(0).count(), 0);
    }

    #[test]
    fn all_combinations_valid() {
        for combo in Combinations::<5>::new(7) {
            assert!(combo.iter().all(|&i| i < 7));
            for i in 1..5 {
                assert!(combo[i] > combo[i - 1]);
            }
        }
    }

    #[test]
    fn first_and_last_combination() {
        let combos: Vec<[usize; 5]> = Combinations::<5>::new(7).collect();
        assert_eq!(combos.first(), Some(&[0, 1, 2, 3, 4]));
        assert_eq!(combos.last(), Some(&[2, 3, 4, 5, 6]));
    }

    #[test]
    fn specific_small_case() {
        let combos: Vec<[usize; 2]> = Combinations::<2>::new(4).collect();
        assert_eq!(combos, vec![[0, 1], [0, 2], [0, 3], [1, 2], [1, 3], [2, 3]]);
    }

    #[test]
    fn no_duplicates_and_lexicographic() {
        let combos: Vec<[usize; 3]> = Combinations::<3>::new(8).collect();
        let seen: HashSet<[usize; 3]> = combos.iter().copied().collect();
        assert_eq!(seen.len(), combos.len());
        for w in combos.windows(2) {
            assert!(w[0] < w[1], "{:?} should come before {:?}", w[0], w[1]);
        }
    }

    #[test]
    fn iterator_exhausts() {
        let mut iter = Combinations::<5>::new(6);
        for _ in 0..6 {
            assert!(iter.next().is_some());
        }
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }
}
