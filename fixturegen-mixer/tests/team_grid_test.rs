//! Integration tests for team grid generation
//!
//! Tests the full path: roster and lanes in, mixed fixture and session out

use std::time::Duration;

use chrono::NaiveDate;
use fixturegen_core::{Colour, FixtureError, Grid, NoHistory, PlayMatrix, Team, TeamIndex};
use fixturegen_mixer::{
    continue_mixing, generate_team_grid, normalized_plays, score_breakdown, MixConfig, MixStatus,
};

// ============================================================================
// TEST FIXTURES
// ============================================================================

fn roster(n: u32) -> Vec<Team> {
    (1..=n).map(|i| Team::new(i, format!("Team {}", i))).collect()
}

fn four_lanes() -> Vec<Colour> {
    vec![Colour::Red, Colour::Blue, Colour::Green, Colour::Yellow]
}

fn slot_counts(grid: &Grid, teams: usize) -> Vec<usize> {
    let mut counts = vec![0; teams];
    for team in grid.rows().iter().flatten().flatten() {
        counts[team.get()] += 1;
    }
    counts
}

// ============================================================================
// GENERATION
// ============================================================================

#[test]
fn test_eight_teams_four_lanes_mixes_to_acceptable() {
    let teams = roster(8);
    let config = MixConfig::new(four_lanes(), 4)
        .with_seed(42)
        .with_max_time(Duration::from_secs(10));

    let outcome = generate_team_grid(&teams, &config, &NoHistory).unwrap();
    let grid = outcome.session.grid();

    assert_eq!(grid.games(), 8);
    assert_eq!(slot_counts(grid, 8), vec![4; 8]);
    assert_eq!(outcome.session.status(), MixStatus::Acceptable);
    assert_eq!(outcome.report.status, MixStatus::Acceptable);

    // Acceptable rules out every hard penalty
    for game in 0..grid.games() {
        assert_eq!(grid.distinct_in_row(game), 4);
    }
    let breakdown = score_breakdown(grid, &outcome.session.context());
    assert_eq!(breakdown.lane_repeat, 0.0);
    assert_eq!(breakdown.self_play, 0.0);

    // Meetings between distinct teams cluster within one of each other
    let plays = normalized_plays(grid, &outcome.session.context());
    let meetings: Vec<u32> = (0..plays.size())
        .flat_map(|a| (0..plays.size()).filter(move |&b| b != a).map(move |b| (a, b)))
        .map(|(a, b)| plays.get(a, b))
        .collect();
    let most = meetings.iter().copied().max().unwrap();
    let least = meetings.iter().copied().min().unwrap();
    assert!(most - least <= 1, "meetings range {}..={}", least, most);

    assert_eq!(outcome.fixture.games.len(), 8);
    assert!(outcome.fixture.games.iter().all(|g| g.competitor_count() == 4));
    assert_eq!(outcome.fixture.games_per_team(), vec![4; 8]);
}

#[test]
fn test_fixture_times_follow_schedule() {
    let first = NaiveDate::from_ymd_opt(2024, 3, 9)
        .unwrap()
        .and_hms_opt(19, 0, 0)
        .unwrap();
    let config = MixConfig::new(vec![Colour::Red, Colour::Blue], 2)
        .with_schedule(first, chrono::Duration::minutes(12))
        .with_seed(42)
        .with_fixed_iterations(100)
        .with_max_time(Duration::ZERO);

    let outcome = generate_team_grid(&roster(4), &config, &NoHistory).unwrap();

    for (i, game) in outcome.fixture.games.iter().enumerate() {
        assert_eq!(game.time, first + chrono::Duration::minutes(12 * i as i64));
    }
}

#[test]
fn test_referee_lane_adds_duty_slots() {
    let teams = roster(6);
    let lanes = vec![Colour::Red, Colour::Green, Colour::Referee];
    let config = MixConfig::new(lanes, 4)
        .with_seed(42)
        .with_max_time(Duration::from_millis(500));

    let outcome = generate_team_grid(&teams, &config, &NoHistory).unwrap();

    // 4 games plus 4 / 2 referee turns each
    assert!(outcome.session.has_referee());
    assert_eq!(outcome.session.games_per_team(), 6.0);
    assert_eq!(outcome.session.grid().games(), 12);
    assert_eq!(slot_counts(outcome.session.grid(), 6), vec![6; 6]);
    assert!(outcome.fixture.games.iter().all(|g| g.referee_count() <= 1));
}

#[test]
fn test_history_is_counted() {
    let teams = roster(4);
    let history = Grid::from_indices(vec![vec![0, 1], vec![0, 1], vec![0, 1]]);
    let config = MixConfig::new(vec![Colour::Red, Colour::Blue], 4)
        .with_seed(42)
        .with_fixed_iterations(200)
        .with_max_time(Duration::ZERO);

    let with_history = generate_team_grid(&teams, &config, &history).unwrap();
    assert_eq!(with_history.session.history().get(0, 1), 3);
    assert_eq!(with_history.session.history().get(2, 3), 0);

    let without = generate_team_grid(&teams, &config, &NoHistory).unwrap();
    assert_eq!(without.session.history(), &PlayMatrix::zeros(4));
}

#[test]
fn test_seeded_runs_are_reproducible() {
    let config = MixConfig::new(four_lanes(), 3)
        .with_seed(7)
        .with_fixed_iterations(1_000)
        .with_max_time(Duration::ZERO);

    let a = generate_team_grid(&roster(10), &config, &NoHistory).unwrap();
    let b = generate_team_grid(&roster(10), &config, &NoHistory).unwrap();
    assert_eq!(a.session.grid(), b.session.grid());
    assert_eq!(a.session.best_score(), b.session.best_score());
}

#[test]
fn test_invalid_config_is_rejected() {
    let teams = roster(4);

    let config = MixConfig::new(vec![Colour::Red, Colour::Referee, Colour::Blue], 4);
    assert_eq!(
        generate_team_grid(&teams, &config, &NoHistory).err(),
        Some(FixtureError::MisplacedReferee(1))
    );

    let config = MixConfig::new(four_lanes(), 0);
    assert_eq!(
        generate_team_grid(&teams, &config, &NoHistory).err(),
        Some(FixtureError::ZeroGamesPerTeam)
    );
}

// ============================================================================
// CONTINUE MIXING
// ============================================================================

#[test]
fn test_continue_mixing_never_worsens() {
    let teams = roster(11);
    let config = MixConfig::new(four_lanes(), 5)
        .with_seed(42)
        .with_fixed_iterations(10)
        .with_max_time(Duration::ZERO);

    let first = generate_team_grid(&teams, &config, &NoHistory).unwrap();
    let score_1 = first.session.best_score();

    let second = continue_mixing(first.session, &teams, Duration::from_millis(50));
    let score_2 = second.session.best_score();
    assert!(score_2 <= score_1);
    assert_eq!(second.report.start_score, score_1);

    let third = continue_mixing(second.session, &teams, Duration::from_millis(50));
    assert!(third.session.best_score() <= score_2);
    assert_eq!(third.fixture.games.len(), third.session.grid().games());
}

#[test]
fn test_continue_mixing_keeps_slot_counts() {
    let teams = roster(9);
    let config = MixConfig::new(four_lanes(), 4)
        .with_seed(3)
        .with_fixed_iterations(50)
        .with_max_time(Duration::ZERO);

    let first = generate_team_grid(&teams, &config, &NoHistory).unwrap();
    let before = slot_counts(first.session.grid(), 9);

    let again = continue_mixing(first.session, &teams, Duration::from_millis(50));
    assert_eq!(slot_counts(again.session.grid(), 9), before);
    assert!(again
        .fixture
        .games
        .iter()
        .flat_map(|g| g.competitors())
        .all(|t: TeamIndex| t.get() < 9));
}
