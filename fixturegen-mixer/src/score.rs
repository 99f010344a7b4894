//! Grid scoring - lower is better
//!
//! A grid is scored on five additive components:
//! - self-play: a team listed twice in one game
//! - imbalance: pairs meeting more or less often than average (4th power)
//! - lane repetition: a team stuck in the same lane too often
//! - missing players: games without the full set of distinct teams
//! - back-to-back: a team in two consecutive games

use fixturegen_core::{distinct_teams, Grid, PlayMatrix, TeamIndex};
use rustc_hash::FxHashMap;

use crate::config::ScoreWeights;

/// Everything the score function needs besides the grid
#[derive(Clone, Copy, Debug)]
pub struct ScoreContext<'a> {
    /// Slots each team should fill (including referee duty)
    pub games_per_team: f64,
    /// Whether the last lane is a referee lane
    pub has_referee: bool,
    pub team_count: usize,
    /// Meetings from previous games
    pub history: &'a PlayMatrix,
    pub weights: &'a ScoreWeights,
}

/// Score split into its components
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScoreBreakdown {
    pub self_play: f64,
    pub imbalance: f64,
    pub lane_repeat: f64,
    pub missing_players: f64,
    pub back_to_back: f64,
}

impl ScoreBreakdown {
    pub fn total(&self) -> f64 {
        self.self_play + self.imbalance + self.lane_repeat + self.missing_players + self.back_to_back
    }
}

/// Score a grid (lower is better)
pub fn score_grid(grid: &Grid, ctx: &ScoreContext<'_>) -> f64 {
    score_breakdown(grid, ctx).total()
}

/// Score a grid, keeping each component separate
pub fn score_breakdown(grid: &Grid, ctx: &ScoreContext<'_>) -> ScoreBreakdown {
    let plays = normalized_plays(grid, ctx);
    let (self_play, imbalance) = pairing_penalties(&plays, ctx.weights);

    ScoreBreakdown {
        self_play,
        imbalance,
        lane_repeat: lane_repeat_penalty(grid, ctx),
        missing_players: missing_player_penalty(grid, ctx.weights),
        back_to_back: back_to_back_penalty(grid, ctx),
    }
}

/// Meetings in the grid plus history, normalized for unequal game totals
pub fn normalized_plays(grid: &Grid, ctx: &ScoreContext<'_>) -> PlayMatrix {
    PlayMatrix::from_grid(grid, ctx.team_count, ctx.has_referee)
        .merged(ctx.history)
        .normalized()
}

/// Log every back-to-back appearance in the grid at debug level
pub fn explain_back_to_back(grid: &Grid, ctx: &ScoreContext<'_>) {
    for_each_back_to_back(grid, ctx.has_referee, |game, team, referee| {
        tracing::debug!(
            "team {} is in games {} and {} back to back{}",
            team,
            game,
            game + 1,
            if referee { " but one is a referee slot" } else { "" }
        );
    });
}

// ============================================================================
// Components
// ============================================================================

/// Self-play and imbalance penalties from a normalized play matrix
fn pairing_penalties(plays: &PlayMatrix, weights: &ScoreWeights) -> (f64, f64) {
    let average = plays.average_off_diagonal();
    let mut self_play = 0.0;
    let mut imbalance = 0.0;

    for a in 0..plays.size() {
        self_play += plays.get(a, a) as f64 * weights.self_play;
        for b in (a + 1)..plays.size() {
            imbalance += (plays.get(a, b) as f64 - average).powi(4);
        }
    }

    (self_play, imbalance)
}

/// Slots where a team exceeds its fair share of one lane
fn lane_repeat_penalty(grid: &Grid, ctx: &ScoreContext<'_>) -> f64 {
    let columns = grid.transpose();
    let lanes = columns.games();
    if lanes == 0 {
        return 0.0;
    }
    let fair_share = ctx.games_per_team / lanes as f64;

    let mut counts: FxHashMap<TeamIndex, u32> = FxHashMap::default();
    let mut excess = 0usize;
    for column in columns.rows() {
        counts.clear();
        for team in column.iter().flatten() {
            *counts.entry(*team).or_insert(0) += 1;
        }
        excess += column
            .iter()
            .flatten()
            .filter(|team| counts[*team] as f64 > fair_share)
            .count();
    }

    excess as f64 * ctx.weights.lane_repeat
}

/// Games that do not hold one distinct team per lane
fn missing_player_penalty(grid: &Grid, weights: &ScoreWeights) -> f64 {
    let lanes = grid.lanes();
    grid.rows()
        .iter()
        .map(|row| distinct_teams(row).abs_diff(lanes) as f64 * weights.missing_player)
        .sum()
}

fn back_to_back_penalty(grid: &Grid, ctx: &ScoreContext<'_>) -> f64 {
    let penalty = ctx.weights.back_to_back;
    let mut total = 0.0;
    for_each_back_to_back(grid, ctx.has_referee, |_, _, referee| {
        total += if referee { penalty * 0.5 } else { penalty };
    });
    total
}

/// Visit every slot whose team also appears in the following game.
///
/// The callback gets the game index, the team, and whether either of the
/// two appearances is in the referee lane.
fn for_each_back_to_back<F>(grid: &Grid, has_referee: bool, mut visit: F)
where
    F: FnMut(usize, TeamIndex, bool),
{
    let rows = grid.rows();
    for game in 0..rows.len().saturating_sub(1) {
        let this = &rows[game];
        let next = &rows[game + 1];
        for team in this.iter().flatten() {
            let Some(next_pos) = next.iter().position(|s| *s == Some(*team)) else {
                continue;
            };
            let referee = has_referee && {
                let this_pos = this.iter().position(|s| *s == Some(*team));
                next_pos + 1 == next.len() || this_pos == Some(this.len() - 1)
            };
            visit(game, *team, referee);
        }
    }
}
