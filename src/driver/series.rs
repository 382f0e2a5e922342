//! Many seeded matches in a row, with tallies.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::autoplay::{run_match, MatchReport};
use crate::core::config::GameConfig;
use crate::core::error::Result;
use crate::core::player::PlayerId;
use crate::core::rng::GameRng;
use crate::rules::GameResult;

/// Aggregate outcome of a series.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesStats {
    pub matches: u32,
    /// Wins per seat. Seats without a win are absent.
    pub wins: FxHashMap<PlayerId, u32>,
    pub draws: u32,
    /// Matches that hit the round limit.
    pub stalls: u32,
    pub total_rounds: u64,
    pub total_wars: u64,
    /// The match with the most rounds.
    pub longest: Option<MatchReport>,
}

impl SeriesStats {
    pub fn record(&mut self, report: &MatchReport) {
        self.matches += 1;
        self.total_rounds += u64::from(report.rounds);
        self.total_wars += u64::from(report.wars);

        match report.result {
            Some(GameResult::Winner(p)) => *self.wins.entry(p).or_insert(0) += 1,
            Some(GameResult::Draw) => self.draws += 1,
            None => self.stalls += 1,
        }

        if self.longest.as_ref().map_or(true, |l| report.rounds > l.rounds) {
            self.longest = Some(report.clone());
        }
    }

    #[must_use]
    pub fn wins_for(&self, player: PlayerId) -> u32 {
        self.wins.get(&player).copied().unwrap_or(0)
    }

    /// Matches that ended with a winner or a draw.
    #[must_use]
    pub fn completed(&self) -> u32 {
        self.matches - self.stalls
    }

    #[must_use]
    pub fn mean_rounds(&self) -> f64 {
        if self.matches == 0 {
            0.0
        } else {
            self.total_rounds as f64 / f64::from(self.matches)
        }
    }
}

/// Play `matches` matches, each dealt with a seed forked from `base_seed`.
pub fn run_series(config: &GameConfig, base_seed: u64, matches: u32) -> Result<SeriesStats> {
    config.validate()?;

    let mut rng = GameRng::new(base_seed);
    let mut stats = SeriesStats::default();
    for _ in 0..matches {
        let seed = rng.fork().seed();
        stats.record(&run_match(config, seed)?);
    }
    Ok(stats)
}
