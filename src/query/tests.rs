//! Unit tests for query composition

use super::*;
use crate::filter::item::{Player, Season, Team};
use crate::filter::scalar::ClockTime;
use crate::filter::{FilterSession, ReferenceData};
use chrono::NaiveDate;

fn reference() -> ReferenceData {
    ReferenceData {
        teams: vec![Team {
            id: "5".to_string(),
            name: "Los Angeles Lakers".to_string(),
            abbreviation: "LAL".to_string(),
        }],
        seasons: vec![Season {
            id: "2020".to_string(),
            season_years: "2019-20".to_string(),
        }],
    }
}

#[test]
fn test_empty_session_is_suppressed() {
    let session = FilterSession::new();
    assert_eq!(QueryDescriptor::from_session(&session), None);
}

#[test]
fn test_refinements_alone_are_suppressed() {
    let reference = reference();
    let mut session = FilterSession::new();

    // Opponent, date, location, quarter, clock: all refinement-only facets.
    session.select_opponent(&reference, "5");
    session.select_start_date(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
    session.select_location(GameLocation::Home);
    session.select_quarter("1");
    session.select_start_time_left(ClockTime::new(10, 0).unwrap());

    assert_eq!(QueryDescriptor::from_session(&session), None);
}

#[test]
fn test_any_primary_facet_unlocks_composition() {
    let reference = reference();

    let mut by_player = FilterSession::new();
    by_player.select_player(Player {
        id: "1".to_string(),
        name: "LeBron James".to_string(),
    });
    assert!(QueryDescriptor::from_session(&by_player).is_some());

    let mut by_team = FilterSession::new();
    by_team.select_team(&reference, "5");
    assert!(QueryDescriptor::from_session(&by_team).is_some());

    let mut by_season = FilterSession::new();
    by_season.select_season(&reference, "2020");
    assert!(QueryDescriptor::from_session(&by_season).is_some());
}

#[test]
fn test_absent_filters_are_omitted_from_pairs() {
    let reference = reference();
    let mut session = FilterSession::new();
    session.select_season(&reference, "2020");

    let query = QueryDescriptor::from_session(&session).unwrap();
    assert_eq!(query.query_pairs(), vec![("season", "2020".to_string())]);
}

#[test]
fn test_default_clock_values_contribute_nothing() {
    let reference = reference();
    let mut session = FilterSession::new();
    session.select_season(&reference, "2020");
    session.select_start_time_left(ClockTime::QUARTER_START);
    session.select_end_time_left(ClockTime::QUARTER_END);

    let query = QueryDescriptor::from_session(&session).unwrap();
    assert_eq!(query.start_time_left, None);
    assert_eq!(query.end_time_left, None);
}

#[test]
fn test_full_session_pairs_in_fixed_order() {
    let reference = reference();
    let mut session = FilterSession::new();
    session.select_player(Player {
        id: "1".to_string(),
        name: "LeBron James".to_string(),
    });
    session.select_team(&reference, "5");
    session.select_season(&reference, "2020");
    session.select_opponent(&reference, "5");
    session.select_start_date(NaiveDate::from_ymd_opt(2020, 1, 15).unwrap());
    session.select_end_date(NaiveDate::from_ymd_opt(2020, 4, 1).unwrap());
    session.select_location(GameLocation::Away);
    session.select_quarter("4");
    session.select_start_time_left(ClockTime::new(2, 0).unwrap());
    session.select_end_time_left(ClockTime::new(0, 30).unwrap());

    let query = QueryDescriptor::from_session(&session).unwrap();
    let pairs = query.query_pairs();
    let keys: Vec<&str> = pairs.iter().map(|(k, _)| *k).collect();
    assert_eq!(
        keys,
        vec![
            "player_id",
            "team_id",
            "season",
            "opposing_team_id",
            "start_game_date",
            "end_game_date",
            "game_location",
            "quarter",
            "start_time_left",
            "end_time_left",
        ]
    );
    assert_eq!(pairs[4].1, "2020-01-15");
    assert_eq!(pairs[6].1, "away");
    assert_eq!(pairs[8].1, "02:00");
}

#[test]
fn test_compose_is_deterministic() {
    let reference = reference();
    let mut session = FilterSession::new();
    session.select_season(&reference, "2020");
    session.select_team(&reference, "5");
    session.select_location(GameLocation::Home);

    let first = QueryDescriptor::from_session(&session).unwrap();
    let second = QueryDescriptor::from_session(&session).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.cache_key(), second.cache_key());
    assert_eq!(
        first.cache_key(),
        "team_id=5&season=2020&game_location=home"
    );
}
