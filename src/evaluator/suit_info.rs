use crate::cards::Suit;

/// Information about whether all cards share the same suit (flush).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuitInfo {
    pub is_flush: bool,
    pub flush_suit: Option<Suit>,
}

impl SuitInfo {
    pub fn detect(suits: &[Suit; 5]) -> Self {
        let first = suits[0];
        if suits.iter().all(|&s| s == first) {
            SuitInfo { is_flush: true, flush_suit: Some(first) }
        } else {
            SuitInfo { is_flush: false, flush_suit: None }
        }
    }
}
