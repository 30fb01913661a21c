//! primeval: prime-product poker hand evaluation
//!
//! Every five-card poker hand falls into one of 7462 equivalence classes, numbered
//! from 1 (royal flush) to 7462 (7-5-4-3-2 offsuit). A hand is fingerprinted by the
//! product of one prime per rank plus a flush flag, and that fingerprint is looked
//! up in a pre-computed table.
//!
//! Goals:
//! - Fast evaluation of 5, 6 and 7 card hands
//! - Tables either built in memory or loaded from JSON/binary files
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start
//! ```
//! use primeval::cards::parse_cards;
//! use primeval::evaluator::{Category, HandEvaluator};
//!
//! let ev = HandEvaluator::global();
//! let royal = ev.evaluate(&parse_cards("As Ks Qs Js Ts").unwrap()).unwrap();
//! assert_eq!(royal.strength(), 1);
//! assert_eq!(royal.class.description(), "royal flush");
//!
//! let seven = ev.evaluate(&parse_cards("2c 2d 2h 2s 5c 9d Jh").unwrap()).unwrap();
//! assert_eq!(seven.category(), Category::FourOfAKind);
//! assert!(royal > seven);
//! ```
//!
//! ## CLI
//! ```sh
//! cargo run --bin primeval -- build --out tables.bin
//! cargo run --bin primeval -- --tables tables.bin eval "As Ks Qs Js Ts"
//! ```

pub mod cards;
pub mod config;
pub mod deck;
pub mod evaluator;
pub mod hand;
pub mod table;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
