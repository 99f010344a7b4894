//! Errors for invalid generator input
//!
//! Expected shortfalls (a schedule that still scores badly, a ring layout
//! that cannot be built, games left short of referees) are reported as
//! values by the generators. Only input that cannot describe a fixture at
//! all ends up here.

/// Invalid input to a fixture generator
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FixtureError {
    #[error("no teams to schedule")]
    EmptyRoster,

    #[error("a game needs at least one lane")]
    NoLanes,

    #[error("a game needs at least one competing lane")]
    NoCompetingLanes,

    #[error("lane {0} is a bye; every lane must be a colour or the referee")]
    ByeLane(usize),

    #[error("the referee lane must be the single last lane (found at lane {0})")]
    MisplacedReferee(usize),

    #[error("games per team must be positive")]
    ZeroGamesPerTeam,
}

pub type Result<T> = std::result::Result<T, FixtureError>;
