//! Play matrices - how often each pair of teams has met
//!
//! The matrix is square and symmetric. Off-diagonal cells count games two
//! different teams shared; diagonal cells count games in which a team was
//! listed more than once, which a valid schedule never does.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::grid::Grid;
use crate::team::TeamIndex;

/// Symmetric team x team meeting counts
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayMatrix {
    size: usize,
    cells: Vec<u32>,
}

impl PlayMatrix {
    /// All-zero matrix for `size` teams
    pub fn zeros(size: usize) -> Self {
        Self {
            size,
            cells: vec![0; size * size],
        }
    }

    /// Count meetings in a grid.
    ///
    /// # Arguments
    /// * `grid` - Games to count
    /// * `team_count` - Minimum matrix size (grown if the grid holds higher indices)
    /// * `exclude_last_lane` - Ignore the last lane (the referee lane)
    pub fn from_grid(grid: &Grid, team_count: usize, exclude_last_lane: bool) -> Self {
        let size = grid
            .max_index()
            .map_or(team_count, |max| team_count.max(max.get() + 1));
        let mut matrix = Self::zeros(size);

        let mut counts: FxHashMap<TeamIndex, u32> = FxHashMap::default();
        let mut present: Vec<usize> = Vec::new();

        for row in grid.rows() {
            let lanes = if exclude_last_lane {
                row.len().saturating_sub(1)
            } else {
                row.len()
            };

            counts.clear();
            for team in row[..lanes].iter().flatten() {
                *counts.entry(*team).or_insert(0) += 1;
            }

            present.clear();
            for (team, &count) in &counts {
                if count > 1 {
                    matrix.increment(team.get(), team.get());
                }
                present.push(team.get());
            }

            for (k, &a) in present.iter().enumerate() {
                for &b in &present[k + 1..] {
                    matrix.increment(a, b);
                    matrix.increment(b, a);
                }
            }
        }

        matrix
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.cells[row * self.size + col]
    }

    fn increment(&mut self, row: usize, col: usize) {
        self.cells[row * self.size + col] += 1;
    }

    /// Copy grown to `size` teams with zero rows and columns.
    /// A matrix already at least that large is returned unchanged.
    pub fn padded(&self, size: usize) -> Self {
        if size <= self.size {
            return self.clone();
        }
        let mut out = Self::zeros(size);
        for r in 0..self.size {
            for c in 0..self.size {
                out.cells[r * size + c] = self.get(r, c);
            }
        }
        out
    }

    /// Element-wise sum, padding the smaller matrix first
    pub fn merged(&self, other: &PlayMatrix) -> Self {
        let size = self.size.max(other.size);
        let mut out = self.padded(size);
        let other = other.padded(size);
        for (cell, add) in out.cells.iter_mut().zip(&other.cells) {
            *cell += add;
        }
        out
    }

    /// Total of each team's row (meetings plus self-play)
    pub fn team_totals(&self) -> Vec<u32> {
        self.cells
            .chunks(self.size.max(1))
            .take(self.size)
            .map(|row| row.iter().sum())
            .collect()
    }

    /// Scale counts so teams with fewer prior games are not under-weighted.
    ///
    /// Each cell is multiplied by `most / min(total_i, total_j)`, where
    /// `most` is the largest team total, then rounded. Teams with no games
    /// keep a multiplier of 1.
    pub fn normalized(&self) -> Self {
        let totals = self.team_totals();
        let most = totals.iter().copied().max().unwrap_or(0) as f64;
        let multipliers: Vec<f64> = totals
            .iter()
            .map(|&t| {
                if t == 0 || most == 0.0 {
                    1.0
                } else {
                    most / t as f64
                }
            })
            .collect();

        let mut out = Self::zeros(self.size);
        for r in 0..self.size {
            for c in 0..self.size {
                let mult = multipliers[r].max(multipliers[c]);
                out.cells[r * self.size + c] = (mult * self.get(r, c) as f64).round() as u32;
            }
        }
        out
    }

    /// Mean of all off-diagonal cells (0 when there are none)
    pub fn average_off_diagonal(&self) -> f64 {
        if self.size < 2 {
            return 0.0;
        }
        let diagonal: u64 = (0..self.size).map(|i| self.get(i, i) as u64).sum();
        let total: u64 = self.cells.iter().map(|&c| c as u64).sum();
        let count = (self.size * self.size - self.size) as f64;
        (total - diagonal) as f64 / count
    }

    /// Sum of the diagonal (self-play occurrences)
    pub fn self_plays(&self) -> u32 {
        (0..self.size).map(|i| self.get(i, i)).sum()
    }

    pub fn is_symmetric(&self) -> bool {
        (0..self.size).all(|r| (r + 1..self.size).all(|c| self.get(r, c) == self.get(c, r)))
    }
}

impl fmt::Display for PlayMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.size {
            let cells: Vec<String> = (0..self.size).map(|c| self.get(r, c).to_string()).collect();
            writeln!(f, "{}", cells.join("\t"))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::team::TeamIndex;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_from_grid_counts_pairs() {
        let grid = Grid::from_indices(vec![vec![0, 1, 2], vec![0, 1, 3]]);
        let plays = PlayMatrix::from_grid(&grid, 4, false);

        assert_eq!(plays.get(0, 1), 2);
        assert_eq!(plays.get(1, 0), 2);
        assert_eq!(plays.get(0, 2), 1);
        assert_eq!(plays.get(2, 3), 0);
        assert_eq!(plays.self_plays(), 0);
    }

    #[test]
    fn test_from_grid_self_play_on_diagonal() {
        let grid = Grid::from_indices(vec![vec![0, 0, 1]]);
        let plays = PlayMatrix::from_grid(&grid, 2, false);

        assert_eq!(plays.get(0, 0), 1);
        assert_eq!(plays.get(0, 1), 1);
        assert_eq!(plays.get(1, 1), 0);
    }

    #[test]
    fn test_from_grid_excludes_referee_lane() {
        let grid = Grid::from_indices(vec![vec![0, 1, 2]]);
        let plays = PlayMatrix::from_grid(&grid, 3, true);

        assert_eq!(plays.get(0, 1), 1);
        assert_eq!(plays.get(0, 2), 0);
        assert_eq!(plays.get(1, 2), 0);
    }

    #[test]
    fn test_from_grid_ignores_byes() {
        let grid = Grid::new(vec![vec![Some(TeamIndex::new(0)), None, Some(TeamIndex::new(1))]]);
        let plays = PlayMatrix::from_grid(&grid, 2, false);
        assert_eq!(plays.get(0, 1), 1);
        assert_eq!(plays.size(), 2);
    }

    #[test]
    fn test_from_grid_symmetric_for_random_grids() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..20 {
            let rows = (0..6)
                .map(|_| (0..4).map(|_| rng.gen_range(0..7)).collect())
                .collect();
            let plays = PlayMatrix::from_grid(&Grid::from_indices(rows), 7, false);
            assert!(plays.is_symmetric());
        }
    }

    #[test]
    fn test_merged_pads_smaller() {
        let small = PlayMatrix::from_grid(&Grid::from_indices(vec![vec![0, 1]]), 2, false);
        let large = PlayMatrix::from_grid(&Grid::from_indices(vec![vec![0, 1], vec![1, 2]]), 3, false);

        let merged = small.merged(&large);
        assert_eq!(merged.size(), 3);
        assert_eq!(merged.get(0, 1), 2);
        assert_eq!(merged.get(1, 2), 1);
        assert_eq!(large.merged(&small), merged);
    }

    #[test]
    fn test_padded_never_shrinks() {
        let plays = PlayMatrix::zeros(4);
        assert_eq!(plays.padded(2).size(), 4);
        assert_eq!(plays.padded(6).size(), 6);
    }

    #[test]
    fn test_normalized_scales_light_teams() {
        // Team 0 and 1 met twice; team 2 only met team 0 once.
        let grid = Grid::from_indices(vec![vec![0, 1], vec![0, 1], vec![0, 2]]);
        let plays = PlayMatrix::from_grid(&grid, 3, false);
        assert_eq!(plays.team_totals(), vec![3, 2, 1]);

        let norm = plays.normalized();
        // max(3/3, 3/1) * 1
        assert_eq!(norm.get(0, 2), 3);
        // max(3/3, 3/2) * 2
        assert_eq!(norm.get(0, 1), 3);
        assert!(norm.is_symmetric());
    }

    #[test]
    fn test_average_off_diagonal() {
        let grid = Grid::from_indices(vec![vec![0, 1]]);
        let plays = PlayMatrix::from_grid(&grid, 2, false);
        assert_eq!(plays.average_off_diagonal(), 1.0);
        assert_eq!(PlayMatrix::zeros(1).average_off_diagonal(), 0.0);
    }
}
