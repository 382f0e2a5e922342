//! Game event types.
//!
//! Events describe what a single `play()` call did. They are returned with
//! every call and may also be forwarded to a caller-owned observer; the engine
//! keeps no listeners of its own.

use serde::{Deserialize, Serialize};

use crate::core::player::PlayerId;
use crate::rules::GameResult;

/// Something that happened during a `play()` call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// War ante collected from every live player.
    AnteCollected {
        /// Cards added to the war chest by this ante.
        cards: usize,
    },

    /// The two highest cards on the board tied.
    WarStarted {
        /// Seats holding the tied cards, in board order.
        contenders: [PlayerId; 2],
        /// The tied rank (1 = Ace).
        rank: u8,
    },

    /// A hand was resolved and its cards awarded.
    HandComplete {
        winner: PlayerId,
        /// Board cards plus war chest cards won.
        cards_won: usize,
    },

    /// A player ran out of cards.
    PlayerEliminated(PlayerId),

    /// Only one player has cards left.
    GameWon(PlayerId),

    /// Nobody has cards left.
    GameDrawn,
}

impl GameEvent {
    /// The event that ends the match for a given result.
    #[must_use]
    pub fn for_result(result: GameResult) -> Self {
        match result {
            GameResult::Winner(p) => GameEvent::GameWon(p),
            GameResult::Draw => GameEvent::GameDrawn,
        }
    }

    /// Whether this event ends the match.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameEvent::GameWon(_) | GameEvent::GameDrawn)
    }
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::AnteCollected { cards } => write!(f, "{} cards added to the war chest", cards),
            GameEvent::WarStarted { contenders, rank } => write!(
                f,
                "War! {} and {} both turned a {}",
                contenders[0],
                contenders[1],
                rank_name(*rank)
            ),
            GameEvent::HandComplete { winner, cards_won } => {
                write!(f, "{} wins the hand ({} cards)", winner, cards_won)
            }
            GameEvent::PlayerEliminated(p) => write!(f, "{} is out of cards", p),
            GameEvent::GameWon(p) => write!(f, "{} wins the game!", p),
            GameEvent::GameDrawn => write!(f, "Nobody has cards left, the game is a draw"),
        }
    }
}

fn rank_name(rank: u8) -> &'static str {
    match rank {
        1 => "Ace",
        2 => "Two",
        3 => "Three",
        4 => "Four",
        5 => "Five",
        6 => "Six",
        7 => "Seven",
        8 => "Eight",
        9 => "Nine",
        10 => "Ten",
        11 => "Jack",
        12 => "Queen",
        13 => "King",
        _ => "?",
    }
}
