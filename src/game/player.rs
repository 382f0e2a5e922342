//! A seat at the table.
//!
//! A `Player` owns its deck and an alive flag. It starts empty and alive,
//! receives a hand at the deal, trades cards every round, and dies for good the
//! first time a win check finds its deck empty.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, Deck};

/// Cards taken from a deck in one go: a single card, or a war ante.
pub type Ante = SmallVec<[Card; 3]>;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    deck: Deck,
    alive: bool,
}

impl Player {
    /// Create an alive player with an empty deck.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_deck(name, Deck::new())
    }

    /// Create an alive player holding `deck`.
    pub fn with_deck(name: impl Into<String>, deck: Deck) -> Self {
        Self {
            name: name.into(),
            deck,
            alive: true,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn card_count(&self) -> usize {
        self.deck.size()
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Take up to `how_many` cards from the top of the deck.
    ///
    /// A multi-card take never empties the deck: if it would leave zero
    /// cards, it takes `size - 1` instead, so the last card stays behind.
    /// A single-card take may empty the deck, and on an empty deck returns
    /// nothing.
    pub fn take(&mut self, how_many: usize) -> Ante {
        let size = self.deck.size();
        let count = if how_many > 1 && how_many >= size {
            size.saturating_sub(1)
        } else {
            how_many
        };

        (0..count).map_while(|_| self.deck.remove_from_top()).collect()
    }

    /// Put cards under the bottom of the deck in the order given.
    ///
    /// Empty slots (`None`) are skipped.
    pub fn receive<I, C>(&mut self, cards: I)
    where
        I: IntoIterator<Item = C>,
        C: Into<Option<Card>>,
    {
        for slot in cards {
            let slot: Option<Card> = slot.into();
            if let Some(card) = slot {
                self.deck.add_to_bottom(card);
            }
        }
    }

    /// Mark the player dead. There is no way back.
    pub fn kill(&mut self) {
        self.alive = false;
    }
}
