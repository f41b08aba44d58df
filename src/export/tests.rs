//! Unit tests for file exports

use super::*;
use crate::court::raster::{Canvas, WHITE};
use crate::court::{svg, ShotDisplay};
use crate::filter::ReferenceData;

fn session_with_selections() -> FilterSession {
    let reference = ReferenceData {
        teams: vec![Team {
            id: "5".to_string(),
            name: "Los Angeles Lakers".to_string(),
            abbreviation: "LAL".to_string(),
        }],
        seasons: vec![Season {
            id: "2020".to_string(),
            season_years: "2019-20".to_string(),
        }],
    };
    let mut session = FilterSession::new();
    session.select_player(Player {
        id: "1".to_string(),
        name: "LeBron James".to_string(),
    });
    session.select_team(&reference, "5");
    session.select_season(&reference, "2020");
    session
}

fn sample_shots() -> Vec<Shot> {
    vec![Shot {
        id: "10".to_string(),
        loc_x: -8.0,
        loc_y: 14.0,
        shot_made: true,
        shot_type: "2PT Field Goal".to_string(),
    }]
}

#[test]
fn test_json_bundle_contains_selections_and_shots() {
    let session = session_with_selections();
    let shots = sample_shots();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shot-data.json");

    let bundle = ExportBundle::new(&session, &shots);
    write_json(&path, &bundle).unwrap();

    let raw = fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

    assert_eq!(value["players"][0]["name"], "LeBron James");
    assert_eq!(value["teams"][0]["abbreviation"], "LAL");
    assert_eq!(value["seasons"][0]["season_years"], "2019-20");
    assert_eq!(value["opp_teams"].as_array().unwrap().len(), 0);
    assert_eq!(value["shots"][0]["loc_x"], -8.0);
    assert_eq!(value["shots"][0]["shot_made"], true);
}

#[test]
fn test_svg_written_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("court.svg");

    let document = svg::render(&sample_shots(), &ShotDisplay::default());
    write_svg(&path, &document).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), document);
}

#[test]
fn test_ppm_written_as_binary() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("court.ppm");

    let canvas = Canvas::new(2, 2, WHITE);
    write_ppm(&path, &canvas).unwrap();

    let bytes = fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"P6\n2 2\n255\n"));
    assert_eq!(bytes.len(), b"P6\n2 2\n255\n".len() + 12);
}
