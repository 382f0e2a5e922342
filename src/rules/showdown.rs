//! Board resolution.
//!
//! A board holds one optional face-up card per seat. Resolution scans it left
//! to right, tracking the best and second-best cards seen so far. Equal ranks
//! never displace an earlier card, so among ties the lowest seat wins its
//! place. Empty slots (dead players, or a player who had nothing left to
//! turn over) are skipped.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::player::{PlayerId, PlayerMap};

/// Outcome of comparing the cards on a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Showdown {
    /// No card on the board.
    Empty,
    /// One card strictly outranks every other.
    Winner { player: PlayerId, card: Card },
    /// The two highest cards share a rank.
    Tie {
        first: PlayerId,
        second: PlayerId,
        rank: u8,
    },
}

/// Compare the cards on a board.
///
/// ```
/// use war_engine::core::{PlayerId, PlayerMap};
/// use war_engine::rules::{resolve, Showdown};
///
/// let board: PlayerMap<_> = ["9S", "KD", "2C"]
///     .iter()
///     .map(|c| Some(c.parse().unwrap()))
///     .collect();
///
/// assert!(matches!(
///     resolve(&board),
///     Showdown::Winner { player, .. } if player == PlayerId::new(1)
/// ));
/// ```
#[must_use]
pub fn resolve(board: &PlayerMap<Option<Card>>) -> Showdown {
    let mut first: Option<(PlayerId, Card)> = None;
    let mut second: Option<(PlayerId, Card)> = None;

    for (player, slot) in board.iter() {
        let Some(card) = *slot else { continue };

        match first {
            None => first = Some((player, card)),
            Some((_, best)) if card.compare(&best) > 0 => {
                second = first;
                first = Some((player, card));
            }
            _ => match second {
                Some((_, runner_up)) if card.compare(&runner_up) <= 0 => {}
                _ => second = Some((player, card)),
            },
        }
    }

    match (first, second) {
        (None, _) => Showdown::Empty,
        (Some((a, best)), Some((b, runner_up))) if best.compare(&runner_up) == 0 => Showdown::Tie {
            first: a,
            second: b,
            rank: best.rank(),
        },
        (Some((player, card)), _) => Showdown::Winner { player, card },
    }
}
