//! Referee assignment for ring fixtures
//!
//! Every game wants one referee per competitor. Referees come from players
//! who are not in the game, and never from inexperienced players (names
//! ending in `*`).
//!
//! Three passes:
//! 1. Each player referees the game just before one they play in
//! 2. The last game takes players from a chosen roster offset
//! 3. Games still short are topped up with the least-used referees

use fixturegen_core::{Colour, FixtureGame, Team, TeamIndex};

/// How many games a team was given to referee
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RefereeCount {
    pub team: TeamIndex,
    pub count: usize,
}

/// Outcome of referee assignment
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RefereeReport {
    /// Referee slots filled across all games
    pub assigned: usize,
    /// Every experienced team with its referee count, least used first
    pub tally: Vec<RefereeCount>,
    /// `(game index, referees still missing)` for games left short
    pub shortfalls: Vec<(usize, usize)>,
}

impl RefereeReport {
    /// True when every game has one referee per competitor
    pub fn is_complete(&self) -> bool {
        self.shortfalls.is_empty()
    }

    pub fn count_for(&self, team: TeamIndex) -> Option<usize> {
        self.tally.iter().find(|c| c.team == team).map(|c| c.count)
    }
}

/// Add referees to `games` in place.
///
/// # Arguments
/// * `games` - Games in schedule order, competitors already filled in
/// * `teams` - Roster the games index into
/// * `last_game_offset` - First roster position to draw referees from for
///   the last game
pub fn assign_referees(games: &mut [FixtureGame], teams: &[Team], last_game_offset: usize) -> RefereeReport {
    let mut counts = vec![0usize; teams.len()];
    let mut order: Vec<TeamIndex> = teams
        .iter()
        .enumerate()
        .filter(|(_, team)| !team.is_inexperienced())
        .map(|(i, _)| TeamIndex::new(i))
        .collect();
    let mut assigned = 0;

    // Phase 1: referee the game before you play
    for game in 0..games.len().saturating_sub(1) {
        let (head, tail) = games.split_at_mut(game + 1);
        let this = &mut head[game];
        let next = &tail[0];
        for player in next.competitors() {
            if can_referee(this, teams, player) {
                this.add(player, Colour::Referee);
                counts[player.get()] += 1;
                assigned += 1;
            }
        }
    }

    // Phase 2: the last game
    if let Some(last) = games.last_mut() {
        let start = last_game_offset.min(teams.len());
        let end = (last_game_offset + last.competitor_count()).min(teams.len());
        for position in start..end {
            let player = TeamIndex::new(position);
            if can_referee(last, teams, player) {
                last.add(player, Colour::Referee);
                counts[position] += 1;
                assigned += 1;
            }
        }
    }

    // Phase 3: top up short games with the least-used referees
    let mut short: Vec<usize> = (0..games.len()).filter(|&g| missing(&games[g]) > 0).collect();
    while !short.is_empty() {
        let mut assigned_any = false;
        let mut i = 0;
        while i < short.len() {
            let g = short[i];
            let desired = missing(&games[g]);

            order.sort_by_key(|team| counts[team.get()]);
            let available: Vec<TeamIndex> = order
                .iter()
                .copied()
                .filter(|&team| can_referee(&games[g], teams, team))
                .take(desired)
                .collect();

            let game = &mut games[g];
            for team in available {
                game.add(team, Colour::Referee);
                counts[team.get()] += 1;
                assigned += 1;
                assigned_any = true;
            }

            if missing(game) == 0 {
                short.remove(i);
            } else {
                i += 1;
            }
        }
        if !assigned_any {
            break;
        }
    }

    let shortfalls: Vec<(usize, usize)> = short.iter().map(|&g| (g, missing(&games[g]))).collect();
    for (game, needed) in &shortfalls {
        tracing::debug!("Game {} is short of {} referee(s); nobody else can referee it", game, needed);
    }

    order.sort_by_key(|team| counts[team.get()]);
    RefereeReport {
        assigned,
        tally: order
            .into_iter()
            .map(|team| RefereeCount {
                team,
                count: counts[team.get()],
            })
            .collect(),
        shortfalls,
    }
}

/// Free to referee: not already in the game, and experienced
pub fn can_referee(game: &FixtureGame, teams: &[Team], team: TeamIndex) -> bool {
    !game.contains(team) && teams.get(team.get()).map_or(false, |t| !t.is_inexperienced())
}

fn missing(game: &FixtureGame) -> usize {
    game.competitor_count().saturating_sub(game.referee_count())
}
