//! Cards and decks.
//!
//! ## Key Types
//!
//! - `Card`: immutable rank/suit value with ace-high comparison
//! - `Suit`: the four decorative suits
//! - `Deck`: ordered sequence with shuffle, top-draw and bottom-insert

pub mod card;
pub mod deck;

pub use card::{ace_high, Card, Suit, ACE, KING};
pub use deck::{Deck, STANDARD_DECK_SIZE};
