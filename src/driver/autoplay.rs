//! Autoplay: call `play()` until the match ends or a round limit is hit.
//!
//! The loop is owned by the caller; the engine never schedules anything. A
//! front end wanting a timed autoplay calls `Game::play` from its own timer
//! instead.

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::core::config::GameConfig;
use crate::core::error::Result;
use crate::events::{GameObserver, NullObserver};
use crate::game::{Game, GameBuilder};
use crate::rules::GameResult;

/// Summary of one driven match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchReport {
    /// Seed the deck was shuffled with.
    pub seed: u64,

    /// Final outcome. `None` when the round limit was reached first.
    pub result: Option<GameResult>,

    /// `play()` calls made.
    pub rounds: u32,

    /// Wars declared.
    pub wars: u32,

    /// Deck sizes in seat order when the driver stopped.
    pub final_counts: Vec<usize>,
}

impl MatchReport {
    fn from_game(seed: u64, game: &Game) -> Self {
        Self {
            seed,
            result: game.result(),
            rounds: game.round(),
            wars: game.wars(),
            final_counts: game.card_counts(),
        }
    }

    /// Whether the match hit the round limit without a result.
    #[must_use]
    pub fn is_stalled(&self) -> bool {
        self.result.is_none()
    }
}

/// Drive `game` until it ends or `game.round()` reaches `max_rounds`.
///
/// Returns the result, or `None` if the limit was hit first.
pub fn autoplay<O: GameObserver + ?Sized>(
    game: &mut Game,
    max_rounds: u32,
    observer: &mut O,
) -> Result<Option<GameResult>> {
    while game.is_playing() && game.round() < max_rounds {
        game.play_observed(observer)?;
    }

    if game.is_playing() {
        warn!(
            "stopped after {} rounds without a winner, decks {:?}",
            game.round(),
            game.card_counts()
        );
    }
    Ok(game.result())
}

/// Deal a match with `seed` and autoplay it.
pub fn run_match(config: &GameConfig, seed: u64) -> Result<MatchReport> {
    run_match_observed(config, seed, &mut NullObserver)
}

/// `run_match`, forwarding every event to `observer`.
pub fn run_match_observed<O: GameObserver + ?Sized>(
    config: &GameConfig,
    seed: u64,
    observer: &mut O,
) -> Result<MatchReport> {
    let mut game = GameBuilder::from_config(config.clone()).build(seed)?;
    autoplay(&mut game, config.max_rounds, observer)?;

    let report = MatchReport::from_game(seed, &game);
    info!(
        "seed {}: {:?} after {} rounds ({} wars)",
        seed, report.result, report.rounds, report.wars
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::STANDARD_DECK_SIZE;
    use crate::events::{EventLog, GameEvent};

    #[test]
    fn test_round_limit_stalls() {
        let config = GameConfig::new().with_max_rounds(3);
        let report = run_match(&config, 42).unwrap();

        assert_eq!(report.rounds, 3);
        assert!(report.is_stalled());
        assert_eq!(report.final_counts.len(), 2);
    }

    #[test]
    fn test_autoplay_conserves_cards() {
        let mut game = GameBuilder::new().player_count(3).build(11).unwrap();
        let mut checks = 0;
        let mut observer = |_: &GameEvent| checks += 1;

        autoplay(&mut game, 200, &mut observer).unwrap();
        assert!(checks > 0);
        assert_eq!(game.total_cards(), STANDARD_DECK_SIZE);
    }

    #[test]
    fn test_observed_events_match_report() {
        let config = GameConfig::new().with_max_rounds(500);
        let mut log = EventLog::new();
        let report = run_match_observed(&config, 3, &mut log).unwrap();

        assert_eq!(log.war_count() as u32, report.wars);
        if let Some(result) = report.result {
            assert_eq!(log.events().last(), Some(&GameEvent::for_result(result)));
        }
    }

    #[test]
    fn test_autoplay_on_finished_game_is_noop() {
        let mut game = GameBuilder::new().build(8).unwrap();
        autoplay(&mut game, 100_000, &mut NullObserver).unwrap();
        let rounds = game.round();

        autoplay(&mut game, 100_000, &mut NullObserver).unwrap();
        assert_eq!(game.round(), rounds);
    }
}
