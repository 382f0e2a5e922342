//! Core engine types: seat ids, RNG, configuration, errors.
//!
//! These are the building blocks every other module leans on. Nothing here
//! knows about cards or rounds.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{GameConfig, DEFAULT_ANTE, DEFAULT_MAX_ROUNDS, MAX_PLAYERS, MIN_PLAYERS};
pub use error::{Result, WarError};
pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
