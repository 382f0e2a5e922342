//! War Binary
//!
//! Deals a match and narrates it, or plays a series and prints the tallies.
//!
//! Options: --players, --seed, --ante, --max-rounds, --series, --quiet

use clap::Parser;
use war_engine::core::{DEFAULT_ANTE, DEFAULT_MAX_ROUNDS, MIN_PLAYERS};
use war_engine::{autoplay, run_series, GameBuilder, GameConfig, GameEvent, PlayerId, Result};

#[derive(Parser, Debug)]
#[command(author, version, about = "Play the card game War", long_about = None)]
struct Args {
    /// Number of players (2-8)
    #[arg(short, long, default_value_t = MIN_PLAYERS)]
    players: usize,

    /// Shuffle seed; random when omitted
    #[arg(short, long)]
    seed: Option<u64>,

    /// Cards each player antes when a war starts
    #[arg(long, default_value_t = DEFAULT_ANTE)]
    ante: usize,

    /// Give up after this many rounds
    #[arg(long, default_value_t = DEFAULT_MAX_ROUNDS)]
    max_rounds: u32,

    /// Play this many matches and print totals instead of narrating one
    #[arg(long)]
    series: Option<u32>,

    /// Only print the outcome
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    log(args.quiet);

    let config = GameConfig::new()
        .with_player_count(args.players)
        .with_ante_size(args.ante)
        .with_max_rounds(args.max_rounds);
    let seed = args.seed.unwrap_or_else(rand::random);

    match args.series {
        Some(matches) => series(&config, seed, matches),
        None => single(&config, seed, args.quiet),
    }
}

fn log(quiet: bool) {
    let level = if quiet { "warn" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn single(config: &GameConfig, seed: u64, quiet: bool) -> Result<()> {
    println!("seed {}", seed);

    let mut game = GameBuilder::from_config(config.clone()).build(seed)?;
    let mut narrate = |event: &GameEvent| {
        if !quiet || event.is_terminal() {
            println!("{}", event);
        }
    };
    autoplay(&mut game, config.max_rounds, &mut narrate)?;

    if game.result().is_none() {
        println!("no winner after {} rounds", game.round());
    }
    for (id, player) in game.players().iter() {
        println!("{:<10} {:>3} cards  {}", id, player.card_count(), if player.is_alive() { "" } else { "out" });
    }
    println!("{} rounds, {} wars", game.round(), game.wars());
    Ok(())
}

fn series(config: &GameConfig, seed: u64, matches: u32) -> Result<()> {
    let stats = run_series(config, seed, matches)?;

    println!("{} matches from base seed {}", stats.matches, seed);
    for id in PlayerId::all(config.player_count) {
        println!("{:<10} {:>6} wins", id, stats.wins_for(id));
    }
    println!("{:<10} {:>6}", "draws", stats.draws);
    println!("{:<10} {:>6}", "stalls", stats.stalls);
    println!("mean {:.1} rounds, {} wars", stats.mean_rounds(), stats.total_wars);
    if let Some(longest) = &stats.longest {
        println!("longest: seed {} with {} rounds", longest.seed, longest.rounds);
    }
    Ok(())
}
