use super::EvalError;
use crate::cards::Rank;

/// One distinct prime per poker rank, deuce first, ace last.
///
/// A multiset of ranks maps to the product of their primes; unique factorization
/// makes the product independent of card order and unique per rank multiset.
pub const PRIMES: [u64; 13] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41];

/// Prime for a poker rank value in 2..=14.
pub fn prime_for_rank(rank: u8) -> Result<u64, EvalError> {
    match rank {
        2..=14 => Ok(PRIMES[usize::from(rank - 2)]),
        _ => Err(EvalError::RankOutOfRange(rank)),
    }
}

impl Rank {
    /// Prime for this rank. Low aces share the ace's prime; knights have none.
    pub const fn prime(self) -> Option<u64> {
        match self.poker_value() {
            Some(v) => Some(PRIMES[(v - 2) as usize]),
            None => None,
        }
    }
}
