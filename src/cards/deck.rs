//! Ordered card sequences.
//!
//! The top of a deck is its front: cards are drawn from the top and won cards
//! go under the bottom. Backed by `im::Vector` so cloning a deck (and with it a
//! whole game) is O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use super::card::{Card, Suit, ACE, KING};
use crate::core::error::{Result, WarError};
use crate::core::rng::GameRng;

/// Number of cards in a standard deck.
pub const STANDARD_DECK_SIZE: usize = 52;

/// An ordered sequence of cards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vector<Card>,
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a deck holding the 52 standard cards, unshuffled.
    #[must_use]
    pub fn standard() -> Self {
        let mut deck = Self::new();
        deck.create_standard();
        deck
    }

    /// Append Ace through King of each suit (Spades, Hearts, Clubs, Diamonds).
    ///
    /// Meant for an empty deck. Calling it on a non-empty deck appends a
    /// second set; nothing is deduplicated.
    pub fn create_standard(&mut self) {
        for suit in Suit::ALL {
            for rank in ACE..=KING {
                self.cards.push_back(Card { rank, suit });
            }
        }
    }

    /// Uniformly permute the deck.
    ///
    /// Picks a random remaining card, moves it to a fresh sequence, and
    /// repeats until the source is exhausted.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        let mut source = std::mem::take(&mut self.cards);
        while !source.is_empty() {
            let index = rng.gen_range_usize(0..source.len());
            self.cards.push_back(source.remove(index));
        }
    }

    /// Remove and return the top card, `None` if the deck is empty.
    pub fn remove_from_top(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Remove and return the top card, failing on an empty deck.
    pub fn draw(&mut self) -> Result<Card> {
        self.remove_from_top().ok_or(WarError::EmptyDeckDraw)
    }

    /// Put a card under the bottom of the deck.
    pub fn add_to_bottom(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Current card count.
    #[must_use]
    pub fn size(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Top card without removing it.
    #[must_use]
    pub fn peek_top(&self) -> Option<&Card> {
        self.cards.front()
    }

    /// Iterate from top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl Extend<Card> for Deck {
    fn extend<I: IntoIterator<Item = Card>>(&mut self, iter: I) {
        for card in iter {
            self.add_to_bottom(card);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_create_standard() {
        let deck = Deck::standard();
        assert_eq!(deck.size(), STANDARD_DECK_SIZE);

        let unique: HashSet<_> = deck.iter().collect();
        assert_eq!(unique.len(), STANDARD_DECK_SIZE);

        // Suit-major, rank-minor
        let cards: Vec<_> = deck.iter().map(|c| c.to_string()).collect();
        assert_eq!(cards[0], "AS");
        assert_eq!(cards[12], "KS");
        assert_eq!(cards[13], "AH");
        assert_eq!(cards[51], "KD");
    }

    #[test]
    fn test_create_standard_twice_duplicates() {
        let mut deck = Deck::standard();
        deck.create_standard();
        assert_eq!(deck.size(), 104);
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut deck = Deck::standard();
        let mut rng = GameRng::new(42);
        deck.shuffle(&mut rng);

        assert_eq!(deck.size(), STANDARD_DECK_SIZE);
        assert_ne!(deck, Deck::standard());

        let shuffled: HashSet<_> = deck.iter().copied().collect();
        let original: HashSet<_> = Deck::standard().iter().copied().collect();
        assert_eq!(shuffled, original);
    }

    #[test]
    fn test_shuffle_is_deterministic() {
        let mut a = Deck::standard();
        let mut b = Deck::standard();
        a.shuffle(&mut GameRng::new(7));
        b.shuffle(&mut GameRng::new(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_shuffle_empty_deck() {
        let mut deck = Deck::new();
        deck.shuffle(&mut GameRng::new(1));
        assert!(deck.is_empty());
    }

    #[test]
    fn test_remove_from_top_is_fifo() {
        let mut deck = Deck::new();
        let a: Card = "AS".parse().unwrap();
        let b: Card = "2H".parse().unwrap();
        deck.add_to_bottom(a);
        deck.add_to_bottom(b);

        assert_eq!(deck.peek_top(), Some(&a));
        assert_eq!(deck.remove_from_top(), Some(a));
        assert_eq!(deck.remove_from_top(), Some(b));
        assert_eq!(deck.remove_from_top(), None);
    }

    #[test]
    fn test_draw_empty_deck() {
        let mut deck = Deck::new();
        assert!(matches!(deck.draw(), Err(WarError::EmptyDeckDraw)));
        assert_eq!(deck.size(), 0);
    }
}
