//! Concrete fixtures - timestamped games referencing real teams

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::colour::Colour;
use crate::team::{Team, TeamIndex};

/// A single scheduled game
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureGame {
    pub time: NaiveDateTime,
    /// Teams in insertion order with the lane each one takes
    entries: Vec<(TeamIndex, Colour)>,
}

impl FixtureGame {
    pub fn new(time: NaiveDateTime) -> Self {
        Self {
            time,
            entries: Vec::new(),
        }
    }

    /// Add a team to this game.
    ///
    /// Returns false (and leaves the game unchanged) if the team is
    /// already in it.
    pub fn add(&mut self, team: TeamIndex, colour: Colour) -> bool {
        if self.contains(team) {
            return false;
        }
        self.entries.push((team, colour));
        true
    }

    pub fn contains(&self, team: TeamIndex) -> bool {
        self.entries.iter().any(|(t, _)| *t == team)
    }

    pub fn colour_of(&self, team: TeamIndex) -> Option<Colour> {
        self.entries.iter().find(|(t, _)| *t == team).map(|(_, c)| *c)
    }

    pub fn entries(&self) -> &[(TeamIndex, Colour)] {
        &self.entries
    }

    /// Teams playing (any lane other than referee)
    pub fn competitors(&self) -> impl Iterator<Item = TeamIndex> + '_ {
        self.entries
            .iter()
            .filter(|(_, c)| *c != Colour::Referee)
            .map(|(t, _)| *t)
    }

    pub fn referees(&self) -> impl Iterator<Item = TeamIndex> + '_ {
        self.entries
            .iter()
            .filter(|(_, c)| *c == Colour::Referee)
            .map(|(t, _)| *t)
    }

    pub fn competitor_count(&self) -> usize {
        self.competitors().count()
    }

    pub fn referee_count(&self) -> usize {
        self.referees().count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A complete generated schedule
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    pub teams: Vec<Team>,
    pub games: Vec<FixtureGame>,
}

impl Fixture {
    pub fn new(teams: Vec<Team>) -> Self {
        Self {
            teams,
            games: Vec::new(),
        }
    }

    pub fn team(&self, index: TeamIndex) -> Option<&Team> {
        self.teams.get(index.get())
    }

    /// Number of games each team appears in as a competitor
    pub fn games_per_team(&self) -> Vec<usize> {
        let mut counts = vec![0; self.teams.len()];
        for game in &self.games {
            for team in game.competitors() {
                if let Some(count) = counts.get_mut(team.get()) {
                    *count += 1;
                }
            }
        }
        counts
    }
}

impl fmt::Display for Fixture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for game in &self.games {
            write!(f, "{}", game.time.format("%Y-%m-%d %H:%M"))?;
            for (team, colour) in game.entries() {
                let name = self.team(*team).map_or("?", |t| t.name.as_str());
                write!(f, "\t{} ({})", name, colour)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Set game start times `first`, `first + interval`, ... in order
pub fn stamp_times(games: &mut [FixtureGame], first: NaiveDateTime, interval: Duration) {
    let mut time = first;
    for game in games {
        game.time = time;
        time += interval;
    }
}
