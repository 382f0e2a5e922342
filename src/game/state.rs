//! The War state machine.
//!
//! ## States
//!
//! - NORMAL (`war_mode == false`): `play()` turns one card per live player
//!   onto the board and resolves the hand.
//! - WAR (`war_mode == true`): `play()` only collects the ante from every
//!   live player into the war chest, then returns to NORMAL. The next call
//!   resolves the contested hand.
//! - Terminal (`playing == false`): one player (or nobody) has cards left.
//!
//! ## Pickup order
//!
//! A hand winner's cards (board plus war chest) are shuffled with the game's
//! own `GameRng` before going under its deck. A fixed pickup order lets a
//! match fall into a cycle that never ends.
//!
//! ## Card conservation
//!
//! Cards only ever move between decks, the board and the war chest, so
//! `total_cards()` is constant across `play()` calls.

use log::debug;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::Player;
use crate::cards::{Card, Deck};
use crate::core::config::{DEFAULT_ANTE, MIN_PLAYERS};
use crate::core::error::{Result, WarError};
use crate::core::player::{PlayerId, PlayerMap};
use crate::core::rng::GameRng;
use crate::events::{GameEvent, GameObserver};
use crate::rules::{resolve, GameResult, Showdown};

/// One batch of contested cards: a whole board, or the combined ante of all
/// seats. Dead seats leave an empty slot.
pub type ChestEntry = Vec<Option<Card>>;

/// What a single `play()` call did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayReport {
    /// Round number of this call (1-based).
    pub round: u32,
    /// Events in the order they happened.
    pub events: SmallVec<[GameEvent; 4]>,
}

impl PlayReport {
    /// Whether this call declared a war.
    #[must_use]
    pub fn started_war(&self) -> bool {
        self.events.iter().any(|e| matches!(e, GameEvent::WarStarted { .. }))
    }

    /// Whether this call ended the match.
    #[must_use]
    pub fn ended_game(&self) -> bool {
        self.events.iter().any(GameEvent::is_terminal)
    }
}

/// A single match of War.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    players: PlayerMap<Player>,
    board: PlayerMap<Option<Card>>,
    last_board: PlayerMap<Option<Card>>,
    war_chest: Vec<ChestEntry>,
    war_mode: bool,
    playing: bool,
    result: Option<GameResult>,
    ante_size: usize,
    round: u32,
    wars: u32,
    rng: GameRng,
}

impl Default for Game {
    fn default() -> Self {
        Self {
            players: PlayerMap::empty(),
            board: PlayerMap::empty(),
            last_board: PlayerMap::empty(),
            war_chest: Vec::new(),
            war_mode: false,
            playing: true,
            result: None,
            ante_size: DEFAULT_ANTE,
            round: 0,
            wars: 0,
            rng: GameRng::new(0),
        }
    }
}

impl Game {
    /// Create a game with no seats and the default ante.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a game with no seats and a custom war ante.
    pub fn with_ante(ante_size: usize) -> Result<Self> {
        if ante_size == 0 {
            return Err(WarError::InvalidAnte { ante: 0 });
        }
        Ok(Self {
            ante_size,
            ..Self::default()
        })
    }

    /// Use `rng` to order the cards each hand winner picks up.
    ///
    /// Games start on a stream seeded with 0; `GameBuilder` forks one from
    /// the deal seed.
    #[must_use]
    pub fn with_rng(mut self, rng: GameRng) -> Self {
        self.rng = rng;
        self
    }

    // === Setup ===

    /// Seat a player. Seats close once the first round has been played.
    pub fn add_player(&mut self, player: Player) -> Result<PlayerId> {
        if self.round > 0 {
            return Err(WarError::SeatingClosed);
        }
        self.players.push(player)
    }

    /// Deal `deck` one card at a time round-robin, starting with seat 0,
    /// until it is exhausted.
    pub fn deal(&mut self, mut deck: Deck) -> Result<()> {
        if self.round > 0 {
            return Err(WarError::SeatingClosed);
        }
        let seats = self.players.player_count();
        if seats == 0 {
            return Err(WarError::NotEnoughPlayers { count: 0 });
        }

        let mut seat = 0;
        while let Some(card) = deck.remove_from_top() {
            self.players[PlayerId::new(seat as u8)].receive([card]);
            seat = (seat + 1) % seats;
        }
        Ok(())
    }

    // === Play ===

    /// Advance the match by one step.
    ///
    /// In NORMAL mode this turns a card for every live player and resolves
    /// the hand. In WAR mode it collects the ante and switches back to
    /// NORMAL without comparing anything.
    pub fn play(&mut self) -> Result<PlayReport> {
        if !self.playing {
            return Err(WarError::GameOver);
        }
        let count = self.players.player_count();
        if count < MIN_PLAYERS {
            return Err(WarError::NotEnoughPlayers { count });
        }

        self.round += 1;
        let mut events = SmallVec::new();

        if self.war_mode {
            self.collect_ante(&mut events);
        } else {
            self.play_hand(&mut events);
        }

        Ok(PlayReport {
            round: self.round,
            events,
        })
    }

    /// `play()`, then hand each event to `observer` in order.
    pub fn play_observed<O: GameObserver + ?Sized>(&mut self, observer: &mut O) -> Result<PlayReport> {
        let report = self.play()?;
        for event in &report.events {
            observer.on_event(event);
        }
        Ok(report)
    }

    fn collect_ante(&mut self, events: &mut SmallVec<[GameEvent; 4]>) {
        let ante_size = self.ante_size;
        let mut contribution = ChestEntry::new();

        for (_, player) in self.players.iter_mut() {
            if player.is_alive() {
                contribution.extend(player.take(ante_size).into_iter().map(Some));
            } else {
                contribution.push(None);
            }
        }

        let cards = contribution.iter().flatten().count();
        self.war_chest.push(contribution);
        self.war_mode = false;

        debug!("round {}: ante of {} cards, chest holds {}", self.round, cards, self.war_chest_size());
        events.push(GameEvent::AnteCollected { cards });
    }

    fn play_hand(&mut self, events: &mut SmallVec<[GameEvent; 4]>) {
        self.board = self
            .players
            .iter_mut()
            .map(|(_, player)| {
                if player.is_alive() {
                    player.take(1).into_iter().next()
                } else {
                    None
                }
            })
            .collect();
        self.last_board = self.board.clone();

        match resolve(&self.board) {
            Showdown::Tie { first, second, rank } => {
                let board = std::mem::take(&mut self.board);
                self.war_chest.push(board.values().copied().collect());
                self.war_mode = true;
                self.wars += 1;

                debug!("round {}: war between {} and {}", self.round, first, second);
                events.push(GameEvent::WarStarted {
                    contenders: [first, second],
                    rank,
                });
                // No win check until the war is settled.
                return;
            }
            Showdown::Winner { player, card } => {
                let board = std::mem::take(&mut self.board);
                let chest = std::mem::take(&mut self.war_chest);
                let mut winnings: Deck = board
                    .values()
                    .flatten()
                    .copied()
                    .chain(chest.into_iter().flatten().flatten())
                    .collect();
                winnings.shuffle(&mut self.rng);
                let cards_won = winnings.size();
                self.players[player].receive(winnings.iter().copied());

                debug!("round {}: {} wins {} cards with {}", self.round, player, cards_won, card);
                events.push(GameEvent::HandComplete {
                    winner: player,
                    cards_won,
                });
            }
            Showdown::Empty => {
                self.board.clear();
                debug!("round {}: nobody had a card to play", self.round);
            }
        }

        self.check_win(events);
    }

    /// Kill every live player with an empty deck, then end the match if at
    /// most one player is left.
    fn check_win(&mut self, events: &mut SmallVec<[GameEvent; 4]>) {
        for (id, player) in self.players.iter_mut() {
            if player.is_alive() && player.deck().is_empty() {
                player.kill();
                debug!("{} is out of cards", id);
                events.push(GameEvent::PlayerEliminated(id));
            }
        }

        let result = match self.alive_players().as_slice() {
            [] => GameResult::Draw,
            [winner] => GameResult::Winner(*winner),
            _ => return,
        };

        self.playing = false;
        self.result = Some(result);
        debug!("round {}: {}", self.round, result);
        events.push(GameEvent::for_result(result));
    }

    // === Snapshots ===

    /// Encode the full game state.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Restore a game encoded with `to_bytes`.
    ///
    /// Cards are range-checked while decoding; the table itself is checked
    /// afterwards so a restored game can always be played.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let game: Self = bincode::deserialize(bytes)?;
        game.check_consistent()?;
        Ok(game)
    }

    fn check_consistent(&self) -> Result<()> {
        if self.ante_size == 0 {
            return Err(WarError::InvalidAnte { ante: 0 });
        }
        let seats = self.players.player_count();
        if !self.board.is_empty() {
            return Err(WarError::InvalidSnapshot("board holds cards between rounds"));
        }
        if !self.last_board.is_empty() && self.last_board.player_count() != seats {
            return Err(WarError::InvalidSnapshot("last board does not match the seat count"));
        }
        if self.war_mode && self.war_chest.is_empty() {
            return Err(WarError::InvalidSnapshot("war declared with an empty war chest"));
        }
        if !self.playing && self.result.is_none() {
            return Err(WarError::InvalidSnapshot("finished game without a result"));
        }
        Ok(())
    }

    // === Accessors ===

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id)
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// Seats still in the game, in seat order.
    #[must_use]
    pub fn alive_players(&self) -> Vec<PlayerId> {
        self.players
            .iter()
            .filter(|(_, p)| p.is_alive())
            .map(|(id, _)| id)
            .collect()
    }

    /// Cards face up on the board. Empty between hands and during a war.
    #[must_use]
    pub fn board(&self) -> &PlayerMap<Option<Card>> {
        &self.board
    }

    /// Cards turned over in the most recent hand, kept for display after the
    /// board itself has been cleared.
    #[must_use]
    pub fn last_board(&self) -> &PlayerMap<Option<Card>> {
        &self.last_board
    }

    /// Contested batches waiting for the next hand winner, oldest first.
    #[must_use]
    pub fn war_chest(&self) -> &[ChestEntry] {
        &self.war_chest
    }

    /// Number of cards in the war chest.
    #[must_use]
    pub fn war_chest_size(&self) -> usize {
        self.war_chest.iter().flatten().flatten().count()
    }

    #[must_use]
    pub fn is_war_mode(&self) -> bool {
        self.war_mode
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Final outcome, set once `is_playing()` turns false.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    #[must_use]
    pub fn ante_size(&self) -> usize {
        self.ante_size
    }

    /// Number of `play()` calls so far.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Number of wars declared so far.
    #[must_use]
    pub fn wars(&self) -> u32 {
        self.wars
    }

    /// Deck sizes in seat order.
    #[must_use]
    pub fn card_counts(&self) -> Vec<usize> {
        self.players.values().map(Player::card_count).collect()
    }

    /// Cards in all decks, on the board and in the war chest.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        let in_decks: usize = self.players.values().map(Player::card_count).sum();
        let on_board = self.board.values().flatten().count();
        in_decks + on_board + self.war_chest_size()
    }
}
