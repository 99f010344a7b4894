//! Configuration types for grid mixing
//!
//! Level 4 - Utilities and configuration

use chrono::{Duration, NaiveDateTime};
use fixturegen_core::{Colour, FixtureError, Result};

// ============================================================================
// Constants
// ============================================================================

/// Scores at or below this are good enough to stop spending time
pub const ACCEPTABLE_SCORE: f64 = 10_000.0;

/// Cost of each hard-constraint violation (self-play, lane repeat, missing player)
pub const HARD_PENALTY: f64 = 100_000.0;

/// Mutations tried before the time budget is consulted
pub const FIXED_ITERATIONS: u64 = 20_000;

/// Shuffle passes applied to a fresh grid before mixing
pub const SHUFFLE_PASSES: usize = 5_000;

/// Default time budget once the fixed batch is done
pub const DEFAULT_MAX_TIME: std::time::Duration = std::time::Duration::from_secs(10);

// ============================================================================
// Score weights
// ============================================================================

/// Penalty magnitudes used by the score function
#[derive(Clone, Debug, PartialEq)]
pub struct ScoreWeights {
    /// Per self-play occurrence
    pub self_play: f64,
    /// Per slot over a team's fair share of one lane
    pub lane_repeat: f64,
    /// Per missing (or duplicated) team in a game
    pub missing_player: f64,
    /// Per team appearing in two consecutive games (halved for referee slots)
    pub back_to_back: f64,
    /// Scores at or below this are acceptable
    pub acceptable_threshold: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            self_play: HARD_PENALTY,
            lane_repeat: HARD_PENALTY,
            missing_player: HARD_PENALTY,
            back_to_back: 0.0,
            acceptable_threshold: ACCEPTABLE_SCORE,
        }
    }
}

impl ScoreWeights {
    /// Set the back-to-back penalty
    pub fn with_back_to_back(mut self, penalty: f64) -> Self {
        self.back_to_back = penalty;
        self
    }

    pub fn is_acceptable(&self, score: f64) -> bool {
        score <= self.acceptable_threshold
    }
}

// ============================================================================
// Fixture layout
// ============================================================================

/// How a grid becomes a fixture: lane colours and game times
#[derive(Clone, Debug, PartialEq)]
pub struct FixtureLayout {
    /// Colour of each lane, in grid column order; a referee lane comes last
    pub lanes: Vec<Colour>,
    pub first_game: NaiveDateTime,
    pub game_interval: Duration,
}

impl FixtureLayout {
    pub fn has_referee(&self) -> bool {
        self.lanes.last() == Some(&Colour::Referee)
    }

    /// Check the lanes describe a playable game
    pub fn validate(&self) -> Result<()> {
        if self.lanes.is_empty() {
            return Err(FixtureError::NoLanes);
        }
        for (i, lane) in self.lanes.iter().enumerate() {
            match lane {
                Colour::None => return Err(FixtureError::ByeLane(i)),
                Colour::Referee if i + 1 != self.lanes.len() => {
                    return Err(FixtureError::MisplacedReferee(i))
                }
                _ => {}
            }
        }
        if !self.lanes.iter().any(|l| l.is_competing()) {
            return Err(FixtureError::NoCompetingLanes);
        }
        Ok(())
    }
}

// ============================================================================
// Mix configuration
// ============================================================================

/// Configuration for generating a team grid
#[derive(Clone, Debug)]
pub struct MixConfig {
    pub layout: FixtureLayout,
    /// Games each team should play (refereeing not included)
    pub games_per_team: u32,
    /// Wall-clock budget for mixing beyond the fixed batch
    pub max_time: std::time::Duration,
    pub fixed_iterations: u64,
    pub shuffle_passes: usize,
    pub weights: ScoreWeights,
    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,
}

impl Default for MixConfig {
    fn default() -> Self {
        Self {
            layout: FixtureLayout {
                lanes: vec![Colour::Red, Colour::Blue, Colour::Green, Colour::Yellow],
                first_game: NaiveDateTime::default(),
                game_interval: Duration::minutes(15),
            },
            games_per_team: 4,
            max_time: DEFAULT_MAX_TIME,
            fixed_iterations: FIXED_ITERATIONS,
            shuffle_passes: SHUFFLE_PASSES,
            weights: ScoreWeights::default(),
            seed: None,
        }
    }
}

impl MixConfig {
    /// Create config for the given lanes and games per team
    pub fn new(lanes: Vec<Colour>, games_per_team: u32) -> Self {
        Self {
            layout: FixtureLayout {
                lanes,
                ..Self::default().layout
            },
            games_per_team,
            ..Default::default()
        }
    }

    /// Set first game time and gap between games
    pub fn with_schedule(mut self, first_game: NaiveDateTime, game_interval: Duration) -> Self {
        self.layout.first_game = first_game;
        self.layout.game_interval = game_interval;
        self
    }

    pub fn with_max_time(mut self, max_time: std::time::Duration) -> Self {
        self.max_time = max_time;
        self
    }

    pub fn with_back_to_back_penalty(mut self, penalty: f64) -> Self {
        self.weights.back_to_back = penalty;
        self
    }

    pub fn with_fixed_iterations(mut self, iterations: u64) -> Self {
        self.fixed_iterations = iterations;
        self
    }

    pub fn with_shuffle_passes(mut self, passes: usize) -> Self {
        self.shuffle_passes = passes;
        self
    }

    /// Set random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn lanes_per_game(&self) -> usize {
        self.layout.lanes.len()
    }

    /// Slots each team should fill, counting referee duty.
    ///
    /// With a referee lane every team also referees roughly one game in
    /// every `lanes - 1` it plays.
    pub fn effective_games_per_team(&self) -> f64 {
        let games = self.games_per_team as f64;
        if self.layout.has_referee() {
            games + games / (self.lanes_per_game() as f64 - 1.0)
        } else {
            games
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.layout.validate()?;
        if self.games_per_team == 0 {
            return Err(FixtureError::ZeroGamesPerTeam);
        }
        Ok(())
    }
}
