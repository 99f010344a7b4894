//! Abstract game grid
//!
//! One row per game, one column per lane. A slot holds the index of the
//! team playing that lane, or `None` for a bye.

use rand::seq::SliceRandom;
use rand::Rng;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::team::TeamIndex;

/// Content of one lane in one game
pub type Slot = Option<TeamIndex>;

/// Games x lanes grid of team indices
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    rows: Vec<Vec<Slot>>,
}

impl Grid {
    pub fn new(rows: Vec<Vec<Slot>>) -> Self {
        Self { rows }
    }

    /// Build a grid where every slot is filled
    pub fn from_indices(rows: Vec<Vec<usize>>) -> Self {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(|i| Some(TeamIndex::new(i))).collect())
                .collect(),
        }
    }

    /// Build a grid from external team ids (1-based); missing ids are byes
    pub fn from_team_ids(rows: &[Vec<Option<u32>>]) -> Self {
        Self {
            rows: rows
                .iter()
                .map(|row| {
                    row.iter()
                        .map(|id| match id {
                            Some(id) if *id > 0 => Some(TeamIndex::new(*id as usize - 1)),
                            _ => None,
                        })
                        .collect()
                })
                .collect(),
        }
    }

    pub fn rows(&self) -> &[Vec<Slot>] {
        &self.rows
    }

    pub fn row(&self, game: usize) -> &[Slot] {
        &self.rows[game]
    }

    pub fn games(&self) -> usize {
        self.rows.len()
    }

    /// Lanes per game (width of the first row)
    pub fn lanes(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, game: usize, lane: usize) -> Slot {
        self.rows.get(game).and_then(|row| row.get(lane)).copied().flatten()
    }

    /// Swap the contents of two cells (which may share a row)
    pub fn swap(&mut self, a: (usize, usize), b: (usize, usize)) {
        let first = self.rows[a.0][a.1];
        self.rows[a.0][a.1] = self.rows[b.0][b.1];
        self.rows[b.0][b.1] = first;
    }

    /// Columns become rows. Ragged rows contribute only the lanes they have.
    pub fn transpose(&self) -> Grid {
        let width = self.rows.iter().map(Vec::len).max().unwrap_or(0);
        let columns = (0..width)
            .map(|lane| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(lane).copied())
                    .collect()
            })
            .collect();
        Grid { rows: columns }
    }

    /// Number of distinct teams anywhere in the grid (byes excluded)
    pub fn count_distinct(&self) -> usize {
        self.rows
            .iter()
            .flatten()
            .flatten()
            .collect::<FxHashSet<_>>()
            .len()
    }

    /// Number of distinct teams in one game (byes excluded)
    pub fn distinct_in_row(&self, game: usize) -> usize {
        distinct_teams(&self.rows[game])
    }

    /// Highest team index present, if any
    pub fn max_index(&self) -> Option<TeamIndex> {
        self.rows.iter().flatten().flatten().copied().max()
    }

    /// True when some game lists the same team twice
    pub fn has_duplicate_in_row(&self) -> bool {
        (0..self.rows.len()).any(|g| {
            let filled = self.rows[g].iter().filter(|s| s.is_some()).count();
            self.distinct_in_row(g) != filled
        })
    }

    /// Shuffle the slots within every game, then the order of the games.
    ///
    /// Each game keeps the same set of teams.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        for row in &mut self.rows {
            row.shuffle(rng);
        }
        self.rows.shuffle(rng);
    }
}

/// Distinct non-bye teams in a row of slots
pub fn distinct_teams(row: &[Slot]) -> usize {
    let mut seen: FxHashSet<TeamIndex> = FxHashSet::default();
    row.iter().flatten().filter(|t| seen.insert(**t)).count()
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            let cells: Vec<String> = row
                .iter()
                .map(|slot| match slot {
                    Some(team) => team.to_string(),
                    None => "-".to_string(),
                })
                .collect();
            writeln!(f, "{}", cells.join("\t"))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_transpose() {
        let grid = Grid::from_indices(vec![vec![0, 1, 2], vec![3, 4, 5]]);
        let t = grid.transpose();
        assert_eq!(t, Grid::from_indices(vec![vec![0, 3], vec![1, 4], vec![2, 5]]));
        assert_eq!(t.transpose(), grid);
    }

    #[test]
    fn test_count_distinct_ignores_byes() {
        let grid = Grid::new(vec![
            vec![Some(TeamIndex::new(0)), None, Some(TeamIndex::new(1))],
            vec![Some(TeamIndex::new(1)), Some(TeamIndex::new(2)), None],
        ]);
        assert_eq!(grid.count_distinct(), 3);
        assert_eq!(grid.distinct_in_row(0), 2);
        assert_eq!(grid.max_index(), Some(TeamIndex::new(2)));
    }

    #[test]
    fn test_swap_across_rows() {
        let mut grid = Grid::from_indices(vec![vec![0, 1], vec![2, 3]]);
        grid.swap((0, 1), (1, 0));
        assert_eq!(grid, Grid::from_indices(vec![vec![0, 2], vec![1, 3]]));
    }

    #[test]
    fn test_duplicate_detection() {
        let ok = Grid::from_indices(vec![vec![0, 1], vec![1, 0]]);
        assert!(!ok.has_duplicate_in_row());
        let bad = Grid::from_indices(vec![vec![0, 0], vec![1, 2]]);
        assert!(bad.has_duplicate_in_row());
    }

    #[test]
    fn test_shuffle_keeps_row_contents() {
        let mut grid = Grid::from_indices(vec![vec![0, 1, 2], vec![3, 4, 5], vec![6, 7, 8]]);
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..50 {
            grid.shuffle(&mut rng);
        }

        let mut rows: Vec<Vec<usize>> = grid
            .rows()
            .iter()
            .map(|row| {
                let mut r: Vec<usize> = row.iter().flatten().map(|t| t.get()).collect();
                r.sort_unstable();
                r
            })
            .collect();
        rows.sort();
        assert_eq!(rows, vec![vec![0, 1, 2], vec![3, 4, 5], vec![6, 7, 8]]);
    }

    #[test]
    fn test_from_team_ids() {
        let grid = Grid::from_team_ids(&[vec![Some(1), Some(3), None]]);
        assert_eq!(grid.get(0, 0), Some(TeamIndex::new(0)));
        assert_eq!(grid.get(0, 1), Some(TeamIndex::new(2)));
        assert_eq!(grid.get(0, 2), None);
    }
}
