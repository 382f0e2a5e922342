//! Playing cards.
//!
//! A `Card` is an immutable rank/suit pair. Ranks run 1-13 with 1 as the Ace;
//! suits are purely decorative in War. Cards compare by rank only, ace-high,
//! through [`Card::compare`]. Structural equality (`==`, hashing) is card
//! identity, which is what deck bookkeeping needs.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::core::error::{Result, WarError};

/// Rank of the Ace.
pub const ACE: u8 = 1;

/// Rank of the King.
pub const KING: u8 = 13;

/// Comparison value of a rank with the Ace moved above the King.
///
/// ```
/// use war_engine::cards::ace_high;
///
/// assert_eq!(ace_high(1), 14);
/// assert_eq!(ace_high(13), 13);
/// assert_eq!(ace_high(2), 2);
/// ```
#[must_use]
pub const fn ace_high(rank: u8) -> i32 {
    if rank == ACE {
        14
    } else {
        rank as i32
    }
}

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Spades,
    Hearts,
    Clubs,
    Diamonds,
}

impl Suit {
    /// All suits, in standard deck order.
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Clubs, Suit::Diamonds];

    /// Single-character code.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Suit::Spades => 'S',
            Suit::Hearts => 'H',
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
        }
    }
}

impl TryFrom<char> for Suit {
    type Error = WarError;

    fn try_from(code: char) -> Result<Self> {
        match code.to_ascii_uppercase() {
            'S' => Ok(Suit::Spades),
            'H' => Ok(Suit::Hearts),
            'C' => Ok(Suit::Clubs),
            'D' => Ok(Suit::Diamonds),
            _ => Err(WarError::InvalidSuit(code)),
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A single playing card.
///
/// Decoding goes through [`Card::new`], so a snapshot cannot smuggle in a
/// rank outside 1-13.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCard")]
pub struct Card {
    pub(crate) rank: u8,
    pub(crate) suit: Suit,
}

/// Unchecked wire form of a `Card`.
#[derive(Deserialize)]
struct RawCard {
    rank: u8,
    suit: Suit,
}

impl TryFrom<RawCard> for Card {
    type Error = WarError;

    fn try_from(raw: RawCard) -> Result<Self> {
        Card::new(raw.rank, raw.suit)
    }
}

impl Card {
    /// Create a card, rejecting ranks outside 1-13.
    pub fn new(rank: u8, suit: Suit) -> Result<Self> {
        if !(ACE..=KING).contains(&rank) {
            return Err(WarError::InvalidCard { rank });
        }
        Ok(Self { rank, suit })
    }

    /// Rank, 1 (Ace) through 13 (King).
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    #[must_use]
    pub const fn suit(self) -> Suit {
        self.suit
    }

    /// Compare by rank only, ace-high.
    ///
    /// Returns a positive number if `self` outranks `other`, negative if
    /// `other` outranks `self`, and zero for the same rank in any suit.
    ///
    /// ```
    /// use war_engine::cards::{Card, Suit};
    ///
    /// let ace = Card::new(1, Suit::Spades).unwrap();
    /// let king = Card::new(13, Suit::Clubs).unwrap();
    /// assert!(ace.compare(&king) > 0);
    /// assert!(king.compare(&ace) < 0);
    /// ```
    #[must_use]
    pub const fn compare(&self, other: &Card) -> i32 {
        ace_high(self.rank) - ace_high(other.rank)
    }

    /// `compare` as an `Ordering`.
    #[must_use]
    pub fn cmp_rank(&self, other: &Card) -> Ordering {
        self.compare(other).cmp(&0)
    }
}

/// Rank label: A, J, Q, K or decimal digits.
fn rank_label(rank: u8) -> String {
    match rank {
        1 => "A".to_string(),
        11 => "J".to_string(),
        12 => "Q".to_string(),
        13 => "K".to_string(),
        n => n.to_string(),
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", rank_label(self.rank), self.suit)
    }
}

/// Parses the `Display` notation: `AS`, `10H`, `qd`.
impl FromStr for Card {
    type Err = WarError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let mut chars = s.chars();
        let suit_code = chars.next_back().ok_or_else(|| WarError::ParseCard(s.to_string()))?;
        let label = chars.as_str();

        let rank = match label.to_ascii_uppercase().as_str() {
            "A" => ACE,
            "J" => 11,
            "Q" => 12,
            "K" => KING,
            digits => digits.parse::<u8>().map_err(|_| WarError::ParseCard(s.to_string()))?,
        };
        let suit = Suit::try_from(suit_code)?;

        Card::new(rank, suit)
    }
}
