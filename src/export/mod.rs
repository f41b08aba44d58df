//! File exports: JSON filter+shot bundle, SVG document, raster PPM.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::court::raster::Canvas;
use crate::error::Result;
use crate::filter::item::{Player, Quarter, Season, Team};
use crate::filter::FilterSession;
use crate::stats::Shot;

#[cfg(test)]
mod tests;

/// The JSON export payload: current selections plus the plotted shots.
#[derive(Debug, Serialize)]
pub struct ExportBundle<'a> {
    pub players: &'a [Player],
    pub teams: &'a [Team],
    pub seasons: &'a [Season],
    pub opp_teams: &'a [Team],
    pub quarters: &'a [Quarter],
    pub shots: &'a [Shot],
}

impl<'a> ExportBundle<'a> {
    pub fn new(session: &'a FilterSession, shots: &'a [Shot]) -> Self {
        Self {
            players: session.players.items(),
            teams: session.teams.items(),
            seasons: session.seasons.items(),
            opp_teams: session.opponents.items(),
            quarters: session.quarters.items(),
            shots,
        }
    }
}

pub fn write_json(path: &Path, bundle: &ExportBundle<'_>) -> Result<()> {
    let json = serde_json::to_string_pretty(bundle)?;
    fs::write(path, json)?;
    Ok(())
}

pub fn write_svg(path: &Path, svg: &str) -> Result<()> {
    fs::write(path, svg)?;
    Ok(())
}

pub fn write_ppm(path: &Path, canvas: &Canvas) -> Result<()> {
    fs::write(path, canvas.to_ppm())?;
    Ok(())
}
