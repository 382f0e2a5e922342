//! # war-engine
//!
//! A deterministic engine for the card game War, for 2-8 players.
//!
//! ## Design Principles
//!
//! 1. **Caller-Driven**: the engine never schedules itself. Each call to
//!    `Game::play` runs one step to completion; the caller decides when (or
//!    whether) the next one happens.
//!
//! 2. **Observable State**: after any call, the board, war chest, war flag,
//!    deck sizes and alive flags can be read directly. Each call also returns
//!    the events it produced.
//!
//! 3. **Reproducible**: shuffles run on a seeded ChaCha8 stream, so a seed
//!    fully determines a match.
//!
//! ## Playing a match
//!
//! ```
//! use war_engine::{GameBuilder, GameEvent};
//!
//! let mut game = GameBuilder::new().player_count(3).build(42).unwrap();
//! while game.is_playing() && game.round() < 10_000 {
//!     let report = game.play().unwrap();
//!     for event in &report.events {
//!         if let GameEvent::WarStarted { .. } = event {
//!             // a front end would start its war animation here
//!         }
//!     }
//!     assert_eq!(game.total_cards(), 52);
//! }
//! ```
//!
//! ## Modules
//!
//! - `core`: seat ids, RNG, configuration, errors
//! - `cards`: cards and decks
//! - `rules`: board resolution and match results
//! - `events`: per-call events and observers
//! - `game`: players, the round state machine, table setup
//! - `driver`: autoplay loops and multi-match series

pub mod cards;
pub mod core;
pub mod driver;
pub mod events;
pub mod game;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameRng, PlayerId, PlayerMap, Result, WarError};

pub use crate::cards::{Card, Deck, Suit};

pub use crate::rules::{GameResult, Showdown};

pub use crate::events::{EventLog, GameEvent, GameObserver};

pub use crate::game::{Game, GameBuilder, PlayReport, Player};

pub use crate::driver::{autoplay, run_match, run_series, MatchReport, SeriesStats};
