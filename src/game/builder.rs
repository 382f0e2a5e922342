//! Table setup: seats, a shuffled standard deck, and the deal.

use log::debug;

use super::player::Player;
use super::state::Game;
use crate::cards::Deck;
use crate::core::config::GameConfig;
use crate::core::error::Result;
use crate::core::player::PlayerId;
use crate::core::rng::GameRng;

/// Builder for a freshly dealt match.
///
/// ```
/// use war_engine::game::GameBuilder;
///
/// let game = GameBuilder::new().player_count(4).build(42).unwrap();
/// assert_eq!(game.player_count(), 4);
/// assert_eq!(game.card_counts(), vec![13, 13, 13, 13]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    config: GameConfig,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: GameConfig) -> Self {
        Self { config }
    }

    /// Number of seats, 2-8. Checked by `build`.
    pub fn player_count(mut self, count: usize) -> Self {
        self.config.player_count = count;
        self
    }

    /// Cards each live player antes when a war starts.
    pub fn ante_size(mut self, ante: usize) -> Self {
        self.config.ante_size = ante;
        self
    }

    /// Seat `Player 1..n`, shuffle a standard deck with `seed`, and deal it.
    ///
    /// The game's pickup stream is forked from the same seed.
    pub fn build(self, seed: u64) -> Result<Game> {
        self.config.validate()?;

        let mut rng = GameRng::new(seed);
        let mut game = Game::with_ante(self.config.ante_size)?.with_rng(rng.fork());
        for seat in PlayerId::all(self.config.player_count) {
            game.add_player(Player::new(seat.to_string()))?;
        }

        let mut deck = Deck::standard();
        deck.shuffle(&mut rng);
        game.deal(deck)?;

        debug!(
            "dealt seed {} to {} players: {:?}",
            seed,
            self.config.player_count,
            game.card_counts()
        );
        Ok(game)
    }
}
