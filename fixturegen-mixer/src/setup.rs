//! Initial grid construction
//!
//! Level 3 - Steps

use fixturegen_core::{Grid, Slot, TeamIndex};
use rand::Rng;

/// Number of games needed for every team to fill `games_per_team` slots
pub fn games_needed(team_count: usize, lanes_per_game: usize, games_per_team: f64) -> usize {
    (team_count as f64 / lanes_per_game as f64 * games_per_team).ceil() as usize
}

/// Build a starting grid for mixing.
///
/// Team indices are dealt cyclically into `games_needed(..)` games of
/// `lanes_per_game` slots, then the grid is shuffled `shuffle_passes` times
/// so no team starts tied to a lane or a position in the schedule.
///
/// # Arguments
/// * `team_count` - Number of teams in the roster
/// * `lanes_per_game` - Slots per game (including a referee lane if any)
/// * `games_per_team` - Slots each team should fill
/// * `shuffle_passes` - Shuffle passes over the dealt grid
/// * `rng` - Random number generator
pub fn setup_grid<R: Rng>(
    team_count: usize,
    lanes_per_game: usize,
    games_per_team: f64,
    shuffle_passes: usize,
    rng: &mut R,
) -> Grid {
    if team_count == 0 || lanes_per_game == 0 {
        return Grid::default();
    }

    let games = games_needed(team_count, lanes_per_game, games_per_team);
    let cells: Vec<Slot> = (0..games * lanes_per_game)
        .map(|i| Some(TeamIndex::new(i % team_count)))
        .collect();
    let mut grid = Grid::new(cells.chunks(lanes_per_game).map(<[Slot]>::to_vec).collect());

    for _ in 0..shuffle_passes {
        grid.shuffle(rng);
    }

    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_games_needed() {
        assert_eq!(games_needed(8, 4, 4.0), 8);
        assert_eq!(games_needed(10, 4, 4.0), 10);
        assert_eq!(games_needed(9, 4, 3.0), 7);
    }

    #[test]
    fn test_setup_grid_shape() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let grid = setup_grid(9, 4, 3.0, 100, &mut rng);
        assert_eq!(grid.games(), 7);
        assert!(grid.rows().iter().all(|row| row.len() == 4));
        assert!(grid.rows().iter().flatten().all(Option::is_some));
    }

    #[test]
    fn test_setup_grid_deals_evenly() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let grid = setup_grid(8, 4, 4.0, 100, &mut rng);

        let mut counts = vec![0; 8];
        for team in grid.rows().iter().flatten().flatten() {
            counts[team.get()] += 1;
        }
        assert_eq!(counts, vec![4; 8]);
    }

    #[test]
    fn test_setup_grid_seeded_is_deterministic() {
        let a = setup_grid(12, 3, 4.0, 50, &mut ChaCha8Rng::seed_from_u64(7));
        let b = setup_grid(12, 3, 4.0, 50, &mut ChaCha8Rng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_setup_grid_empty_roster() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        assert!(setup_grid(0, 4, 4.0, 10, &mut rng).is_empty());
    }
}
