//! Configuration types for ring fixtures
//!
//! Level 4 - Utilities and configuration

use chrono::{Duration, NaiveDateTime};

/// Rings used when none are specified
pub const DEFAULT_RINGS: usize = 5;

/// Configuration for assembling a ring fixture
#[derive(Clone, Debug, PartialEq)]
pub struct RingConfig {
    /// Rings running in parallel each round (5 or 6)
    pub rings: usize,
    /// Requested games per player. Every design plays each player six
    /// times, so this only appears in diagnostics.
    pub games_per_team: u32,
    pub first_game: NaiveDateTime,
    pub game_interval: Duration,
    /// Assign referees from players sitting out each round
    pub referees: bool,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            rings: DEFAULT_RINGS,
            games_per_team: 6,
            first_game: NaiveDateTime::default(),
            game_interval: Duration::minutes(15),
            referees: false,
        }
    }
}

impl RingConfig {
    /// Create config for the given number of rings
    pub fn new(rings: usize) -> Self {
        Self {
            rings,
            ..Default::default()
        }
    }

    /// Set first game time and gap between games
    pub fn with_schedule(mut self, first_game: NaiveDateTime, game_interval: Duration) -> Self {
        self.first_game = first_game;
        self.game_interval = game_interval;
        self
    }

    pub fn with_games_per_team(mut self, games_per_team: u32) -> Self {
        self.games_per_team = games_per_team;
        self
    }

    /// Enable referee assignment
    pub fn with_referees(mut self) -> Self {
        self.referees = true;
        self
    }
}
