//! N-player verification tests.
//!
//! These tests check that nothing in the engine assumes two players: deals,
//! showdowns, wars and eliminations all work for every table size 2-8.

use war_engine::cards::{Card, Deck, STANDARD_DECK_SIZE};
use war_engine::core::{GameConfig, PlayerId, PlayerMap, WarError, DEFAULT_MAX_ROUNDS, MAX_PLAYERS, MIN_PLAYERS};
use war_engine::driver::autoplay;
use war_engine::events::{EventLog, GameEvent, NullObserver};
use war_engine::game::{Game, GameBuilder, Player};
use war_engine::rules::{resolve, Showdown};

fn card(s: &str) -> Card {
    s.parse().expect("valid card")
}

fn hand(cards: &[&str]) -> Deck {
    cards.iter().map(|s| card(s)).collect()
}

/// Test that every supported table size gets a fair deal.
#[test]
fn test_deal_every_table_size() {
    for player_count in MIN_PLAYERS..=MAX_PLAYERS {
        let game = GameBuilder::new().player_count(player_count).build(42).unwrap();
        let counts = game.card_counts();

        assert_eq!(counts.len(), player_count);
        assert_eq!(counts.iter().sum::<usize>(), STANDARD_DECK_SIZE);

        // Earlier seats get the remainder
        let max = *counts.iter().max().unwrap();
        let min = *counts.iter().min().unwrap();
        assert!(max - min <= 1, "{} players: {:?}", player_count, counts);
        assert!(counts.windows(2).all(|w| w[0] >= w[1]));
    }
}

/// Test that table sizes outside 2-8 are rejected by the builder.
#[test]
fn test_builder_rejects_bad_table_sizes() {
    for player_count in [0, 1, 9, 20] {
        let result = GameBuilder::new().player_count(player_count).build(1);
        assert!(matches!(
            result,
            Err(WarError::InvalidPlayerCount { count }) if count == player_count
        ));
    }
}

/// Test that seats are named and numbered from 1 for display.
#[test]
fn test_seat_names() {
    let game = GameBuilder::new().player_count(6).build(5).unwrap();
    for (id, player) in game.players().iter() {
        assert_eq!(player.name(), format!("Player {}", id.index() + 1));
        assert_eq!(id.to_string(), player.name());
    }
}

/// Test that only the top two cards matter in a showdown.
#[test]
fn test_showdown_ignores_lower_ties() {
    // Two pairs of fours below a lone Jack
    let board: PlayerMap<Option<Card>> =
        [Some(card("4S")), Some(card("JD")), Some(card("4H")), Some(card("2C")), Some(card("2D"))]
            .into_iter()
            .collect();

    assert_eq!(
        resolve(&board),
        Showdown::Winner {
            player: PlayerId::new(1),
            card: card("JD"),
        }
    );
}

/// Test that a six-player tie between seats far apart starts a war.
#[test]
fn test_six_player_war_between_distant_seats() {
    let mut game = Game::new();
    let hands: [&[&str]; 6] = [
        &["QS", "2S", "3S", "4S", "AS"],
        &["5H", "6H"],
        &["3C", "7C"],
        &["9D", "8D"],
        &["10S", "9S"],
        &["QH", "2H", "3H", "4H", "KH"],
    ];
    for (i, cards) in hands.iter().enumerate() {
        game.add_player(Player::with_deck(format!("P{}", i), hand(cards))).unwrap();
    }

    let report = game.play().unwrap();
    assert_eq!(
        report.events.as_slice(),
        &[GameEvent::WarStarted {
            contenders: [PlayerId::new(0), PlayerId::new(5)],
            rank: 12,
        }]
    );

    // Everyone with cards antes; single-card decks keep their last card
    game.play().unwrap();
    assert_eq!(game.card_counts(), vec![1, 1, 1, 1, 1, 1]);
    assert_eq!(game.war_chest_size(), 6 + 3 + 3);

    // Ace takes the six boards' worth of cards plus everything else turned
    let report = game.play().unwrap();
    assert!(report.events.contains(&GameEvent::HandComplete {
        winner: PlayerId::new(0),
        cards_won: 18,
    }));

    // Everyone but the Ace is out of cards
    for seat in 1..6 {
        assert!(report.events.contains(&GameEvent::PlayerEliminated(PlayerId::new(seat))));
    }
    assert_eq!(report.events.last(), Some(&GameEvent::GameWon(PlayerId::new(0))));
    assert_eq!(game.total_cards(), 18);
}

/// Test that eliminations happen one seat at a time and never reverse.
#[test]
fn test_eight_player_match_eliminations_are_final() {
    let mut game = GameBuilder::new().player_count(8).build(99).unwrap();
    let mut log = EventLog::new();
    let mut eliminated: Vec<PlayerId> = Vec::new();

    while game.is_playing() && game.round() < 50_000 {
        let report = game.play_observed(&mut log).unwrap();
        for event in &report.events {
            if let GameEvent::PlayerEliminated(id) = event {
                assert!(!eliminated.contains(id), "{} eliminated twice", id);
                eliminated.push(*id);
            }
        }
        for id in &eliminated {
            assert!(!game.player(*id).unwrap().is_alive());
        }
        assert_eq!(game.total_cards(), STANDARD_DECK_SIZE);
    }

    assert!(!game.is_playing(), "no result after {} rounds", game.round());
    assert_eq!(game.alive_players().len() + eliminated.len(), 8);
}

/// Test that every dealt match ends, for every table size.
#[test]
fn test_every_deal_finishes() {
    for player_count in MIN_PLAYERS..=MAX_PLAYERS {
        let config = GameConfig::new().with_player_count(player_count);
        for seed in 0..100 {
            let mut game = GameBuilder::from_config(config.clone()).build(seed).unwrap();
            let result = autoplay(&mut game, DEFAULT_MAX_ROUNDS, &mut NullObserver).unwrap();

            assert!(
                result.is_some(),
                "{} players, seed {}: still playing after {} rounds",
                player_count,
                seed,
                game.round()
            );
            assert!(!game.is_playing());
        }
    }
}

/// Test that dead seats keep their slot on the board but never play.
#[test]
fn test_dead_seats_leave_empty_slots() {
    let mut game = Game::new();
    game.add_player(Player::with_deck("A", hand(&["9S", "2S", "3S"]))).unwrap();
    game.add_player(Player::with_deck("B", hand(&["4H"]))).unwrap();
    game.add_player(Player::with_deck("C", hand(&["8C", "5C"]))).unwrap();
    game.add_player(Player::with_deck("D", hand(&["3D"]))).unwrap();

    let report = game.play().unwrap();
    assert!(report.events.contains(&GameEvent::PlayerEliminated(PlayerId::new(1))));
    assert!(report.events.contains(&GameEvent::PlayerEliminated(PlayerId::new(3))));

    game.play().unwrap();
    let board = game.last_board();
    assert_eq!(board.player_count(), 4);
    assert_eq!(board[PlayerId::new(1)], None);
    assert_eq!(board[PlayerId::new(3)], None);
    assert!(board[PlayerId::new(0)].is_some());
    assert!(board[PlayerId::new(2)].is_some());
}
