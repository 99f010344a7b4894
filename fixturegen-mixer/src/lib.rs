//! Fixturegen Mixer - Team grids by local search
//!
//! This crate builds fixtures where any team can meet any other:
//! - Initial grid dealing and shuffling
//! - Grid scoring (pair balance, lane fairness, back-to-back games)
//! - Hill-climbing with a fixed batch plus a time budget
//! - Resumable sessions for "mix some more"
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: generate_team_grid, continue_mixing (orchestration)
//! - Level 2: mix, grid_to_fixture (phases)
//! - Level 3: setup_grid, mutate, score_grid (steps)
//! - Level 4: utilities, configuration

mod config;
mod optimizer;
mod score;
mod setup;
mod team_grid;

pub use config::{
    FixtureLayout, MixConfig, ScoreWeights, ACCEPTABLE_SCORE, DEFAULT_MAX_TIME, FIXED_ITERATIONS,
    HARD_PENALTY, SHUFFLE_PASSES,
};
pub use optimizer::{mix, mix_with_callback, mutate, MixReport, MixSession, MixStatus};
pub use score::{
    explain_back_to_back, normalized_plays, score_breakdown, score_grid, ScoreBreakdown,
    ScoreContext,
};
pub use setup::{games_needed, setup_grid};
pub use team_grid::{continue_mixing, generate_team_grid, grid_to_fixture, TeamGridOutcome};
