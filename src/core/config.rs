//! Match configuration.
//!
//! A `GameConfig` describes the table: how many seats, how many cards each
//! live player antes when a war starts, and how many rounds a driver will run
//! before calling the match a stall. Seeds are passed separately so the same
//! config can be replayed across many deals.

use serde::{Deserialize, Serialize};

use super::error::{Result, WarError};

/// Fewest seats a dealt match supports.
pub const MIN_PLAYERS: usize = 2;

/// Most seats a dealt match supports.
pub const MAX_PLAYERS: usize = 8;

/// Cards each live player adds to the war chest when a war starts.
pub const DEFAULT_ANTE: usize = 3;

/// Round limit used by the autoplay driver.
pub const DEFAULT_MAX_ROUNDS: u32 = 100_000;

/// Configuration for a single match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of seats dealt in (2-8).
    pub player_count: usize,

    /// War ante per live player.
    pub ante_size: usize,

    /// Calls to `play()` after which a driver gives up.
    /// Counts ante-collection calls as well as resolved hands.
    pub max_rounds: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: MIN_PLAYERS,
            ante_size: DEFAULT_ANTE,
            max_rounds: DEFAULT_MAX_ROUNDS,
        }
    }
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_player_count(mut self, count: usize) -> Self {
        self.player_count = count;
        self
    }

    #[must_use]
    pub fn with_ante_size(mut self, ante: usize) -> Self {
        self.ante_size = ante;
        self
    }

    #[must_use]
    pub fn with_max_rounds(mut self, rounds: u32) -> Self {
        self.max_rounds = rounds;
        self
    }

    /// Check the config describes a playable table.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.player_count) {
            return Err(WarError::InvalidPlayerCount {
                count: self.player_count,
            });
        }
        if self.ante_size == 0 {
            return Err(WarError::InvalidAnte { ante: 0 });
        }
        Ok(())
    }
}
