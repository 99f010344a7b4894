//! Team grid generation - from roster to fixture
//!
//! Level 1 - Orchestration

use std::time::Duration;

use fixturegen_core::{
    history_matrix, Fixture, FixtureError, FixtureGame, Grid, PlayHistory, Result, Team,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::{FixtureLayout, MixConfig};
use crate::optimizer::{mix, MixReport, MixSession};
use crate::score::explain_back_to_back;
use crate::setup::setup_grid;

/// Result of generating or continuing a team grid
#[derive(Clone, Debug)]
pub struct TeamGridOutcome {
    /// Best fixture found so far
    pub fixture: Fixture,
    /// State to pass to [`continue_mixing`] for another round
    pub session: MixSession,
    pub report: MixReport,
}

/// Generate a fixture by hill-climbing over a random starting grid.
///
/// This function reads like a table of contents:
/// 1. Validate the lanes and targets
/// 2. Count prior meetings from the history
/// 3. Deal and shuffle a starting grid
/// 4. Mix (fixed batch, then the time budget while the score is bad)
/// 5. Turn the best grid into timestamped games
///
/// # Arguments
/// * `teams` - Roster; grid slots index into it
/// * `config` - Lanes, targets, timing and search budget
/// * `history` - Previously played games used to balance meetings
pub fn generate_team_grid<H>(teams: &[Team], config: &MixConfig, history: &H) -> Result<TeamGridOutcome>
where
    H: PlayHistory + ?Sized,
{
    if teams.is_empty() {
        return Err(FixtureError::EmptyRoster);
    }
    config.validate()?;

    let team_count = teams.len();
    let games_per_team = config.effective_games_per_team();
    let mut rng = create_rng(config.seed);

    let history = history_matrix(history, team_count);
    tracing::debug!("Existing plays:\n{}", history);

    let grid = setup_grid(
        team_count,
        config.lanes_per_game(),
        games_per_team,
        config.shuffle_passes,
        &mut rng,
    );

    let mut session = MixSession::new(
        grid,
        games_per_team,
        team_count,
        history,
        config.weights.clone(),
        config.layout.clone(),
        rng,
    );
    let report = mix(&mut session, config.fixed_iterations, config.max_time);

    Ok(finish(session, teams, report))
}

/// Resume a previous session for up to `max_time` more.
///
/// Mixing only happens while the stored score is still above the
/// acceptable threshold; an acceptable session comes straight back.
pub fn continue_mixing(mut session: MixSession, teams: &[Team], max_time: Duration) -> TeamGridOutcome {
    let report = mix(&mut session, 0, max_time);
    finish(session, teams, report)
}

// ============================================================================
// Level 2 - Fixture building
// ============================================================================

fn finish(session: MixSession, teams: &[Team], report: MixReport) -> TeamGridOutcome {
    explain_back_to_back(session.grid(), &session.context());
    tracing::debug!("Plays:\n{}", crate::score::normalized_plays(session.grid(), &session.context()));

    let fixture = grid_to_fixture(session.grid(), teams, session.layout());
    TeamGridOutcome {
        fixture,
        session,
        report,
    }
}

/// Convert a grid to timestamped games.
///
/// Lane `i` of each game gets `layout.lanes[i]`. A team listed twice in one
/// game keeps its first lane; the repeat is logged and dropped.
pub fn grid_to_fixture(grid: &Grid, teams: &[Team], layout: &FixtureLayout) -> Fixture {
    let mut fixture = Fixture::new(teams.to_vec());
    let mut time = layout.first_game;

    for row in grid.rows() {
        let mut game = FixtureGame::new(time);
        for (team, colour) in row.iter().zip(&layout.lanes) {
            let Some(team) = team else { continue };
            if team.get() >= teams.len() {
                tracing::warn!("Team index {} is outside the roster of {}", team, teams.len());
                continue;
            }
            if !game.add(*team, *colour) {
                tracing::warn!(
                    "Team {} is already in the game at {}; dropping its {} slot",
                    teams[team.get()],
                    time,
                    colour
                );
            }
        }
        fixture.games.push(game);
        time += layout.game_interval;
    }

    fixture
}

/// Create RNG from seed or random
fn create_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    }
}
