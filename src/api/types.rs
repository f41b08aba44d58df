//! Wire types for the shots backend REST API.

use serde::Deserialize;

use crate::filter::item::{Player, Season, Team};

/// `GET /player` and `GET /player/multi` row.
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerRow {
    pub id: i64,
    pub name: String,
}

impl From<PlayerRow> for Player {
    fn from(row: PlayerRow) -> Self {
        Player {
            id: row.id.to_string(),
            name: row.name,
        }
    }
}

/// `GET /team/all` row.
#[derive(Debug, Clone, Deserialize)]
pub struct TeamRow {
    pub id: i64,
    pub name: String,
    pub abbreviation: String,
}

impl From<TeamRow> for Team {
    fn from(row: TeamRow) -> Self {
        Team {
            id: row.id.to_string(),
            name: row.name,
            abbreviation: row.abbreviation,
        }
    }
}

/// `GET /season/all` row.
#[derive(Debug, Clone, Deserialize)]
pub struct SeasonRow {
    pub id: i64,
    pub season_years: String,
}

impl From<SeasonRow> for Season {
    fn from(row: SeasonRow) -> Self {
        Season {
            id: row.id.to_string(),
            season_years: row.season_years,
        }
    }
}

/// One shot from the `/shots` response.
#[derive(Debug, Clone, Deserialize)]
pub struct ShotRow {
    pub id: i64,
    pub loc_x: f64,
    pub loc_y: f64,
    pub shot_made: bool,
    pub shot_type: String,
}

/// Full `GET /shots` response: aggregate counts plus the shot list.
#[derive(Debug, Clone, Deserialize)]
pub struct ShotsPayload {
    pub total_made_shots: u32,
    pub total_missed_shots: u32,
    pub made_2pt_shots: u32,
    pub missed_2pt_shots: u32,
    pub made_3pt_shots: u32,
    pub missed_3pt_shots: u32,
    pub shots: Vec<ShotRow>,
}
