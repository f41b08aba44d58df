//! Wire-contract tests: backend JSON deserializes into domain types.

use nba_shots::api::types::{PlayerRow, SeasonRow, ShotsPayload, TeamRow};
use nba_shots::{Player, Season, Team};

#[test]
fn test_player_rows_deserialize_and_convert() {
    let json = r#"[{"id": 1, "name": "LeBron James"}, {"id": 2, "name": "Stephen Curry"}]"#;
    let rows: Vec<PlayerRow> = serde_json::from_str(json).unwrap();
    let players: Vec<Player> = rows.into_iter().map(Player::from).collect();

    assert_eq!(players.len(), 2);
    assert_eq!(players[0].id, "1");
    assert_eq!(players[0].name, "LeBron James");
}

#[test]
fn test_team_row_converts_numeric_id_to_string() {
    let json = r#"{"id": 14, "name": "Los Angeles Lakers", "abbreviation": "LAL"}"#;
    let row: TeamRow = serde_json::from_str(json).unwrap();
    let team = Team::from(row);

    assert_eq!(team.id, "14");
    assert_eq!(team.abbreviation, "LAL");
}

#[test]
fn test_season_row_keeps_year_span() {
    let json = r#"{"id": 2020, "season_years": "2019-20"}"#;
    let row: SeasonRow = serde_json::from_str(json).unwrap();
    let season = Season::from(row);

    assert_eq!(season.id, "2020");
    assert_eq!(season.season_years, "2019-20");
}

#[test]
fn test_shots_payload_full_response() {
    let json = r#"{
        "total_made_shots": 2,
        "total_missed_shots": 1,
        "made_2pt_shots": 1,
        "missed_2pt_shots": 1,
        "made_3pt_shots": 1,
        "missed_3pt_shots": 0,
        "shots": [
            {"id": 7, "loc_x": -12.5, "loc_y": 3.0, "shot_made": true, "shot_type": "2PT Field Goal"},
            {"id": 8, "loc_x": 23.0, "loc_y": 6.5, "shot_made": true, "shot_type": "3PT Field Goal"},
            {"id": 9, "loc_x": 0.0, "loc_y": 15.0, "shot_made": false, "shot_type": "2PT Field Goal"}
        ]
    }"#;
    let payload: ShotsPayload = serde_json::from_str(json).unwrap();

    assert_eq!(payload.total_made_shots, 2);
    assert_eq!(payload.shots.len(), 3);
    assert_eq!(payload.shots[0].loc_x, -12.5);
    assert!(payload.shots[1].shot_made);
    assert!(!payload.shots[2].shot_made);
}

#[test]
fn test_empty_shots_payload() {
    let json = r#"{
        "total_made_shots": 0,
        "total_missed_shots": 0,
        "made_2pt_shots": 0,
        "missed_2pt_shots": 0,
        "made_3pt_shots": 0,
        "missed_3pt_shots": 0,
        "shots": []
    }"#;
    let payload: ShotsPayload = serde_json::from_str(json).unwrap();
    assert!(payload.shots.is_empty());

    let statistics = nba_shots::stats::reduce(&payload);
    assert_eq!(statistics.pct_total, 0);
}
