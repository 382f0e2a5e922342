//! Engine error type.
//!
//! Every fallible engine operation returns `Result<T, WarError>`. None of these
//! conditions are fatal: a caller (an autoplay loop, a UI) can inspect the
//! variant and keep going.

use thiserror::Error;

/// Errors raised by the engine.
#[derive(Debug, Error)]
pub enum WarError {
    /// Rank outside 1-13.
    #[error("invalid card rank {rank}, expected 1-13")]
    InvalidCard { rank: u8 },

    /// Unrecognized suit code.
    #[error("invalid suit code {0:?}, expected one of S, H, C, D")]
    InvalidSuit(char),

    /// Card notation that could not be parsed (e.g. "1X", "").
    #[error("cannot parse card from {0:?}")]
    ParseCard(String),

    /// Draw requested from a deck with zero cards.
    #[error("cannot draw from an empty deck")]
    EmptyDeckDraw,

    /// `play()` called after the match ended.
    #[error("the game is over")]
    GameOver,

    /// `play()` called with fewer than two seats.
    #[error("at least 2 players are needed to play, found {count}")]
    NotEnoughPlayers { count: usize },

    /// Player count outside the supported range.
    #[error("player count must be {min}-{max}, got {count}", min = crate::core::config::MIN_PLAYERS, max = crate::core::config::MAX_PLAYERS)]
    InvalidPlayerCount { count: usize },

    /// War ante must be at least one card.
    #[error("ante size must be at least 1, got {ante}")]
    InvalidAnte { ante: usize },

    /// Seats are fixed once the first round has been played.
    #[error("players cannot join after the game has started")]
    SeatingClosed,

    /// Seat ids are `u8`.
    #[error("at most 255 players supported")]
    TooManyPlayers,

    /// Snapshot encode/decode failure.
    #[error("snapshot error: {0}")]
    Snapshot(#[from] bincode::Error),

    /// Snapshot decoded but describes a table `play()` could not run.
    #[error("snapshot is inconsistent: {0}")]
    InvalidSnapshot(&'static str),
}

/// Engine result alias.
pub type Result<T> = std::result::Result<T, WarError>;
