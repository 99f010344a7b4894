//! Prior matchups supplied by the caller's league

use crate::grid::Grid;
use crate::plays::PlayMatrix;

/// Source of previously played games.
///
/// Each game is a row of team indices into the same roster the generator
/// is given; byes are `None`.
pub trait PlayHistory {
    fn prior_games(&self) -> Grid;
}

/// A league with no previous games
#[derive(Clone, Copy, Debug, Default)]
pub struct NoHistory;

impl PlayHistory for NoHistory {
    fn prior_games(&self) -> Grid {
        Grid::default()
    }
}

impl PlayHistory for Grid {
    fn prior_games(&self) -> Grid {
        self.clone()
    }
}

/// Meeting counts from a history, padded to at least `team_count` teams
pub fn history_matrix<H: PlayHistory + ?Sized>(history: &H, team_count: usize) -> PlayMatrix {
    let games = history.prior_games();
    PlayMatrix::from_grid(&games, 0, false).padded(team_count)
}
