//! Hill-climbing over grids
//!
//! Each step swaps two random cells of the best grid so far and keeps the
//! result if it scores no worse. A fixed batch of steps always runs; after
//! that the search continues only while the score is still unacceptable and
//! the time budget lasts.
//!
//! All state lives in a [`MixSession`] value, so a caller can stop, look at
//! the result, and hand the session back to mix some more.

use std::time::{Duration, Instant};

use fixturegen_core::{Grid, PlayMatrix};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::config::{FixtureLayout, ScoreWeights};
use crate::score::{score_grid, ScoreContext};

/// Whether a session's best grid is good enough
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MixStatus {
    /// Score at or below the acceptable threshold
    Acceptable,
    /// Budget ran out first; mixing longer may help
    NeedsMoreTime,
}

/// Resumable mixing state
#[derive(Clone, Debug)]
pub struct MixSession {
    grid: Grid,
    best_score: f64,
    games_per_team: f64,
    has_referee: bool,
    team_count: usize,
    history: PlayMatrix,
    weights: ScoreWeights,
    layout: FixtureLayout,
    rng: ChaCha8Rng,
    iterations: u64,
}

impl MixSession {
    /// Start a session from an initial grid
    ///
    /// # Arguments
    /// * `grid` - Starting grid (becomes the best grid)
    /// * `games_per_team` - Slots each team should fill
    /// * `team_count` - Roster size
    /// * `history` - Meetings from previous games
    /// * `weights` - Score penalties
    /// * `layout` - Lanes and times used when the grid becomes a fixture
    /// * `rng` - Random source for mutations
    pub fn new(
        grid: Grid,
        games_per_team: f64,
        team_count: usize,
        history: PlayMatrix,
        weights: ScoreWeights,
        layout: FixtureLayout,
        rng: ChaCha8Rng,
    ) -> Self {
        let has_referee = layout.has_referee();
        let mut session = Self {
            grid,
            best_score: 0.0,
            games_per_team,
            has_referee,
            team_count,
            history,
            weights,
            layout,
            rng,
            iterations: 0,
        };
        session.best_score = score_grid(&session.grid, &session.context());
        session
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn best_score(&self) -> f64 {
        self.best_score
    }

    pub fn games_per_team(&self) -> f64 {
        self.games_per_team
    }

    pub fn has_referee(&self) -> bool {
        self.has_referee
    }

    pub fn team_count(&self) -> usize {
        self.team_count
    }

    pub fn history(&self) -> &PlayMatrix {
        &self.history
    }

    pub fn weights(&self) -> &ScoreWeights {
        &self.weights
    }

    pub fn layout(&self) -> &FixtureLayout {
        &self.layout
    }

    /// Mutations tried over the life of the session
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    pub fn status(&self) -> MixStatus {
        if self.weights.is_acceptable(self.best_score) {
            MixStatus::Acceptable
        } else {
            MixStatus::NeedsMoreTime
        }
    }

    pub fn context(&self) -> ScoreContext<'_> {
        ScoreContext {
            games_per_team: self.games_per_team,
            has_referee: self.has_referee,
            team_count: self.team_count,
            history: &self.history,
            weights: &self.weights,
        }
    }
}

/// Summary of one mixing call
#[derive(Clone, Debug)]
pub struct MixReport {
    pub start_score: f64,
    pub best_score: f64,
    /// Mutations tried during this call
    pub iterations: u64,
    /// Mutations accepted during this call
    pub accepted: u64,
    pub elapsed: Duration,
    pub status: MixStatus,
}

// ============================================================================
// Level 2 - Mixing loop
// ============================================================================

/// Mix a session.
///
/// Runs `fixed_iterations` mutations unconditionally, then keeps going while
/// the best score is unacceptable and less than `max_time` has passed since
/// the call started.
pub fn mix(session: &mut MixSession, fixed_iterations: u64, max_time: Duration) -> MixReport {
    mix_with_callback(session, fixed_iterations, max_time, |_, _| {})
}

/// Mix a session, calling `on_accept(iteration, score)` for each accepted mutation.
///
/// `iteration` counts from the start of the session, not the call.
pub fn mix_with_callback<F>(
    session: &mut MixSession,
    fixed_iterations: u64,
    max_time: Duration,
    mut on_accept: F,
) -> MixReport
where
    F: FnMut(u64, f64),
{
    let start = Instant::now();
    let start_score = session.best_score;
    let mut iterations = 0u64;
    let mut accepted = 0u64;

    tracing::info!(
        "Mixing: start score {:.0}, {} fixed iterations, budget {} ms",
        start_score,
        fixed_iterations,
        max_time.as_millis()
    );
    tracing::debug!("Starting grid:\n{}", session.grid);

    let ctx = ScoreContext {
        games_per_team: session.games_per_team,
        has_referee: session.has_referee,
        team_count: session.team_count,
        history: &session.history,
        weights: &session.weights,
    };

    loop {
        if iterations >= fixed_iterations
            && (ctx.weights.is_acceptable(session.best_score) || start.elapsed() >= max_time)
        {
            break;
        }
        iterations += 1;

        let candidate = mutate(&session.grid, &mut session.rng);
        let score = score_grid(&candidate, &ctx);
        if score <= session.best_score {
            session.best_score = score;
            session.grid = candidate;
            accepted += 1;
            on_accept(session.iterations + iterations, score);
        }
    }

    session.iterations += iterations;

    let report = MixReport {
        start_score,
        best_score: session.best_score,
        iterations,
        accepted,
        elapsed: start.elapsed(),
        status: session.status(),
    };

    tracing::info!(
        "Mixing done: best score {:.0} after {} iterations ({} accepted) in {} ms",
        report.best_score,
        report.iterations,
        report.accepted,
        report.elapsed.as_millis()
    );
    tracing::debug!("Best grid:\n{}", session.grid);

    report
}

// ============================================================================
// Level 3 - Mutation
// ============================================================================

/// Copy of `grid` with two uniformly chosen cells swapped.
///
/// The cells may be in the same game, or even be the same cell.
pub fn mutate<R: Rng>(grid: &Grid, rng: &mut R) -> Grid {
    let mut mixed = grid.clone();
    let games = grid.games();
    let lanes = grid.lanes();
    if games == 0 || lanes == 0 {
        return mixed;
    }

    let a = (rng.gen_range(0..games), rng.gen_range(0..lanes));
    let b = (rng.gen_range(0..games), rng.gen_range(0..lanes));
    mixed.swap(a, b);
    mixed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::setup_grid;
    use chrono::NaiveDateTime;
    use fixturegen_core::Colour;
    use rand::SeedableRng;

    fn layout() -> FixtureLayout {
        FixtureLayout {
            lanes: vec![Colour::Red, Colour::Blue, Colour::Green, Colour::Yellow],
            first_game: NaiveDateTime::default(),
            game_interval: chrono::Duration::minutes(15),
        }
    }

    fn session(seed: u64) -> MixSession {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let grid = setup_grid(8, 4, 4.0, 100, &mut rng);
        MixSession::new(
            grid,
            4.0,
            8,
            PlayMatrix::zeros(8),
            ScoreWeights::default(),
            layout(),
            rng,
        )
    }

    #[test]
    fn test_mutate_keeps_multiset() {
        let grid = Grid::from_indices(vec![vec![0, 1, 2], vec![3, 4, 5]]);
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..20 {
            let mixed = mutate(&grid, &mut rng);
            let mut teams: Vec<usize> = mixed.rows().iter().flatten().flatten().map(|t| t.get()).collect();
            teams.sort_unstable();
            assert_eq!(teams, vec![0, 1, 2, 3, 4, 5]);
        }
    }

    #[test]
    fn test_mutate_empty_grid() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        assert!(mutate(&Grid::default(), &mut rng).is_empty());
    }

    #[test]
    fn test_accepted_scores_never_increase() {
        let mut session = session(42);
        let start = session.best_score();
        let mut scores = Vec::new();

        mix_with_callback(&mut session, 2_000, Duration::ZERO, |_, score| scores.push(score));

        assert!(scores.windows(2).all(|w| w[1] <= w[0]));
        assert!(scores.iter().all(|&s| s <= start));
        assert_eq!(scores.last().copied().unwrap_or(start), session.best_score());
    }

    #[test]
    fn test_fixed_batch_runs_without_budget() {
        let mut session = session(42);
        let report = mix(&mut session, 500, Duration::ZERO);
        assert_eq!(report.iterations, 500);
        assert_eq!(session.iterations(), 500);
        assert!(report.best_score <= report.start_score);
    }

    #[test]
    fn test_resume_continues_from_best() {
        let mut session = session(7);
        mix(&mut session, 1_000, Duration::ZERO);
        let after_first = session.best_score();
        let grid_after_first = session.grid().clone();

        let report = mix(&mut session, 1_000, Duration::ZERO);
        assert_eq!(report.start_score, after_first);
        assert!(session.best_score() <= after_first);
        assert!(report.accepted > 0 || session.grid() == &grid_after_first);
        // The kept grid is always the one the best score belongs to
        assert_eq!(score_grid(session.grid(), &session.context()), session.best_score());
        assert_eq!(session.iterations(), 2_000);
    }

    #[test]
    fn test_status_reflects_threshold() {
        let mut session = session(42);
        let report = mix(&mut session, 20_000, Duration::from_secs(10));
        assert!(session.best_score() <= 10_000.0);
        assert_eq!(session.status(), MixStatus::Acceptable);
        assert_eq!(report.status, MixStatus::Acceptable);
    }

    #[test]
    fn test_status_needs_more_time_above_threshold() {
        // Team 0 twice in the first game
        let grid = Grid::from_indices(vec![
            vec![0, 0, 1, 2],
            vec![3, 4, 5, 6],
            vec![7, 1, 2, 3],
            vec![4, 5, 6, 7],
        ]);
        let session = MixSession::new(
            grid,
            2.0,
            8,
            PlayMatrix::zeros(8),
            ScoreWeights::default(),
            layout(),
            ChaCha8Rng::seed_from_u64(42),
        );
        assert!(session.best_score() >= 100_000.0);
        assert_eq!(session.iterations(), 0);
        assert_eq!(session.status(), MixStatus::NeedsMoreTime);
    }
}
