//! Fixturegen Core - Shared data model for fixture generation
//!
//! This crate provides the types both generators build on:
//! - Teams and roster indices
//! - Lane colours (including bye and referee)
//! - The abstract game grid (games x lane slots)
//! - Play matrices (who has met whom, and how often)
//! - Concrete fixtures with timestamped games

pub mod colour;
pub mod error;
pub mod fixture;
pub mod grid;
pub mod history;
pub mod plays;
pub mod team;

// Re-exports for convenient access
pub use colour::Colour;
pub use error::{FixtureError, Result};
pub use fixture::{stamp_times, Fixture, FixtureGame};
pub use grid::{distinct_teams, Grid, Slot};
pub use history::{history_matrix, NoHistory, PlayHistory};
pub use plays::PlayMatrix;
pub use team::{Team, TeamIndex, INEXPERIENCED_MARKER};
