//! Teams and roster indices

use serde::{Deserialize, Serialize};
use std::fmt;

/// Marker at the end of a team name that flags a first-time player
pub const INEXPERIENCED_MARKER: char = '*';

/// Position of a team in the roster slice handed to a generator.
///
/// This is an arena index, not the team's external id: grids and play
/// matrices are indexed by it, and `roster[index.get()]` is the team.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TeamIndex(usize);

impl TeamIndex {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    pub const fn get(self) -> usize {
        self.0
    }
}

impl From<usize> for TeamIndex {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl fmt::Display for TeamIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A team taking part in a fixture
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// External id (1-based, stable across leagues)
    pub id: u32,
    pub name: String,
}

impl Team {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// First-time players are never asked to referee
    pub fn is_inexperienced(&self) -> bool {
        self.name.ends_with(INEXPERIENCED_MARKER)
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
