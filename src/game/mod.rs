//! The War game: seats, the round state machine, and table setup.
//!
//! - `Player`: a seat owning a deck, with take/receive/kill
//! - `Game`: players, board, war chest and the NORMAL/WAR state machine
//! - `GameBuilder`: seats N players and deals a shuffled standard deck
//!
//! Supports 2-8 dealt players; any number of hand-built seats (up to 255)
//! can be added directly with `Game::add_player`.

mod builder;
mod player;
mod state;

pub use builder::GameBuilder;
pub use player::{Ante, Player};
pub use state::{ChestEntry, Game, PlayReport};
