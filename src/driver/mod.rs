//! Caller-side drivers.
//!
//! The engine only ever advances when `Game::play` is called. These helpers
//! are the loops a front end would otherwise write itself:
//!
//! - `autoplay`: run one game to completion or a round limit
//! - `run_match`: deal from a seed and autoplay
//! - `run_series`: many matches with forked seeds and aggregated stats

mod autoplay;
mod series;

pub use autoplay::{autoplay, run_match, run_match_observed, MatchReport};
pub use series::{run_series, SeriesStats};
