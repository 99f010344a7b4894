//! Ring fixture assembly
//!
//! Level 1 - Orchestration

use std::fmt;

use fixturegen_core::{stamp_times, Colour, Fixture, FixtureGame, Team, TeamIndex};

use crate::blocks::{block, block_sizes, is_supported_ring_count, Block};
use crate::config::RingConfig;
use crate::partition::partition_block_sizes;
use crate::referee::{assign_referees, RefereeReport};

/// An assembled ring fixture
#[derive(Clone, Debug)]
pub struct RingFixture {
    pub fixture: Fixture,
    /// Players per block, largest first
    pub block_sizes: Vec<usize>,
    /// Present when referees were requested
    pub referee_report: Option<RefereeReport>,
}

/// Why no fixture was produced
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RingRejection {
    #[error("no ring designs for {rings} rings (supported: 5, 6)")]
    UnsupportedRingCount { rings: usize },

    #[error("cannot generate ring grid for {teams} teams, {rings} rings: need {min} to {max} players, or enough for two blocks of {min}")]
    TeamCountUnreachable {
        teams: usize,
        rings: usize,
        min: usize,
        max: usize,
    },

    #[error("could not generate ring grid for {teams} teams, {rings} rings, {games_per_team} games each")]
    NoBlockPartition {
        teams: usize,
        rings: usize,
        games_per_team: u32,
    },
}

/// Result of [`generate_ring_grid`]
#[derive(Clone, Debug)]
pub enum RingOutcome {
    Assembled(RingFixture),
    Rejected(RingRejection),
}

impl RingOutcome {
    pub fn is_assembled(&self) -> bool {
        matches!(self, RingOutcome::Assembled(_))
    }

    pub fn fixture(&self) -> Option<&Fixture> {
        match self {
            RingOutcome::Assembled(ring) => Some(&ring.fixture),
            RingOutcome::Rejected(_) => None,
        }
    }

    pub fn assembled(self) -> Option<RingFixture> {
        match self {
            RingOutcome::Assembled(ring) => Some(ring),
            RingOutcome::Rejected(_) => None,
        }
    }

    pub fn rejection(&self) -> Option<&RingRejection> {
        match self {
            RingOutcome::Assembled(_) => None,
            RingOutcome::Rejected(reason) => Some(reason),
        }
    }
}

impl fmt::Display for RingOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RingOutcome::Assembled(ring) => write!(f, "{}", ring.fixture),
            RingOutcome::Rejected(reason) => write!(f, "{}", reason),
        }
    }
}

/// Build a ring fixture from precomputed block designs.
///
/// The roster is split into blocks, each block is played out on its own
/// contiguous slice of the roster, and the blocks' rounds are interleaved
/// so every block plays in turn.
///
/// # Arguments
/// * `teams` - Roster; one player per team
/// * `config` - Rings, timing and whether to assign referees
pub fn generate_ring_grid(teams: &[Team], config: &RingConfig) -> RingOutcome {
    match assemble(teams, config) {
        Ok(ring) => RingOutcome::Assembled(ring),
        Err(reason) => {
            tracing::warn!("{}", reason);
            RingOutcome::Rejected(reason)
        }
    }
}

// ============================================================================
// Level 2 - Phases
// ============================================================================

fn assemble(teams: &[Team], config: &RingConfig) -> Result<RingFixture, RingRejection> {
    let rings = config.rings;
    let team_count = teams.len();

    if !is_supported_ring_count(rings) {
        return Err(RingRejection::UnsupportedRingCount { rings });
    }

    let sizes = block_sizes(rings);
    let (min, max) = match (sizes.first(), sizes.last()) {
        (Some(&min), Some(&max)) => (min, max),
        _ => return Err(RingRejection::UnsupportedRingCount { rings }),
    };
    if !((min <= team_count && team_count <= max) || team_count >= 2 * min) {
        return Err(RingRejection::TeamCountUnreachable {
            teams: team_count,
            rings,
            min,
            max,
        });
    }

    let no_partition = || RingRejection::NoBlockPartition {
        teams: team_count,
        rings,
        games_per_team: config.games_per_team,
    };
    let block_sizes = partition_block_sizes(team_count, rings).ok_or_else(no_partition)?;
    tracing::debug!(
        "Block sizes for {} players in {} rings: {:?}",
        team_count,
        rings,
        block_sizes
    );

    let mut blocks = Vec::with_capacity(block_sizes.len());
    let mut offset = 0;
    for &size in &block_sizes {
        let design = block(rings, size).ok_or_else(no_partition)?;
        blocks.push(instantiate(&design, offset));
        offset += size;
    }

    let last_game_offset = match (blocks.first(), blocks.get(1)) {
        (Some(first), Some(second)) if first.len() > second.len() => block_sizes[0],
        _ => 0,
    };

    let mut games = interleave(blocks);
    stamp_times(&mut games, config.first_game, config.game_interval);

    let referee_report = if config.referees {
        Some(assign_referees(&mut games, teams, last_game_offset))
    } else {
        None
    };

    let mut fixture = Fixture::new(teams.to_vec());
    fixture.games = games;

    tracing::info!(
        "Ring grid: {} players in {} rings, {} games from {} block(s)",
        team_count,
        rings,
        fixture.games.len(),
        block_sizes.len()
    );

    Ok(RingFixture {
        fixture,
        block_sizes,
        referee_report,
    })
}

// ============================================================================
// Level 3 - Steps
// ============================================================================

/// Play a design on the roster slice starting at `offset`; byes are left out
fn instantiate(design: &Block, offset: usize) -> Vec<FixtureGame> {
    design
        .rows()
        .map(|row| {
            let mut game = FixtureGame::new(Default::default());
            for (player, &code) in row.iter().enumerate() {
                match Colour::from_code(code) {
                    Some(colour) if colour.is_competing() => {
                        game.add(TeamIndex::new(offset + player), colour);
                    }
                    _ => {}
                }
            }
            game
        })
        .collect()
}

/// Round 0 of every block, then round 1 of every block, and so on
fn interleave(blocks: Vec<Vec<FixtureGame>>) -> Vec<FixtureGame> {
    let rounds = blocks.iter().map(Vec::len).max().unwrap_or(0);
    let total = blocks.iter().map(Vec::len).sum();
    let mut blocks: Vec<_> = blocks.into_iter().map(Vec::into_iter).collect();

    let mut games = Vec::with_capacity(total);
    for _ in 0..rounds {
        games.extend(blocks.iter_mut().filter_map(Iterator::next));
    }
    games
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    fn roster(n: usize) -> Vec<Team> {
        (1..=n as u32).map(|i| Team::new(i, format!("P{}", i))).collect()
    }

    #[test]
    fn test_interleave_alternates_blocks() {
        let a: Vec<FixtureGame> = (0..3)
            .map(|i| {
                let mut g = FixtureGame::new(Default::default());
                g.add(TeamIndex::new(i), Colour::Red);
                g
            })
            .collect();
        let b: Vec<FixtureGame> = (10..12)
            .map(|i| {
                let mut g = FixtureGame::new(Default::default());
                g.add(TeamIndex::new(i), Colour::Blue);
                g
            })
            .collect();

        let games = interleave(vec![a, b]);
        let firsts: Vec<usize> = games.iter().map(|g| g.entries()[0].0.get()).collect();
        assert_eq!(firsts, vec![0, 10, 1, 11, 2]);
    }

    #[test]
    fn test_instantiate_skips_byes() {
        let design = block(5, 16).unwrap();
        let games = instantiate(&design, 4);
        assert_eq!(games.len(), 7);
        // Row 0: players 0..15 play, player 15 has a bye
        assert_eq!(games[0].competitor_count(), 15);
        assert!(!games[0].contains(TeamIndex::new(4 + 15)));
        assert_eq!(games[0].colour_of(TeamIndex::new(4)), Some(Colour::Red));
        // Row 6: players 2, 3, 8, 11, 14 and 15 play
        assert_eq!(games[6].competitor_count(), 6);
        let players: Vec<usize> = games[6].competitors().map(|t| t.get() - 4).collect();
        assert_eq!(players, vec![2, 3, 8, 11, 14, 15]);

        for game in &games {
            let colours: FxHashSet<Colour> = game.entries().iter().map(|(_, c)| *c).collect();
            assert!(colours.len() <= 5);
        }
    }

    #[test]
    fn test_unsupported_rings_rejected() {
        let outcome = generate_ring_grid(&roster(16), &RingConfig::new(4));
        assert_eq!(
            outcome.rejection(),
            Some(&RingRejection::UnsupportedRingCount { rings: 4 })
        );
        assert!(outcome.fixture().is_none());
    }

    #[test]
    fn test_unreachable_team_count_rejected() {
        let outcome = generate_ring_grid(&roster(25), &RingConfig::new(5));
        assert_eq!(
            outcome.rejection(),
            Some(&RingRejection::TeamCountUnreachable {
                teams: 25,
                rings: 5,
                min: 16,
                max: 24
            })
        );
        let message = outcome.to_string();
        assert!(message.contains("25 teams"));
        assert!(message.contains("two blocks of 16"));
    }

    #[test]
    fn test_last_game_offset_uses_second_block() {
        // 22 + 21 players: the 22-player block has one more round, so its
        // players are busy in the last game
        let teams = roster(43);
        let ring = generate_ring_grid(&teams, &RingConfig::new(6).with_referees())
            .assembled()
            .unwrap();
        assert_eq!(ring.block_sizes, vec![22, 21]);
        assert_eq!(ring.fixture.games.len(), 15);

        let last = ring.fixture.games.last().unwrap();
        assert_eq!(last.competitor_count(), 6);
        assert!(last.competitors().all(|t| t.get() < 22));
        let refs: Vec<usize> = last.referees().map(|t| t.get()).collect();
        assert_eq!(refs, (22..28).collect::<Vec<_>>());
    }
}
