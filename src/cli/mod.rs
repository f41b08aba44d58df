//! CLI argument definitions and parsing.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use crate::filter::scalar::{ClockTime, GameLocation};

/// Common filtering arguments for chart generation.
#[derive(Debug, Args)]
pub struct ChartFilters {
    /// Select a player by id (repeatable): `--player 1 --player 2`.
    #[clap(long = "player")]
    pub players: Vec<String>,

    /// Select a team by id (repeatable).
    #[clap(long = "team")]
    pub teams: Vec<String>,

    /// Select a season by id (repeatable).
    #[clap(long = "season")]
    pub seasons: Vec<String>,

    /// Select an opposing team by id (repeatable).
    #[clap(long = "opponent")]
    pub opponents: Vec<String>,

    /// Earliest game date, yyyy-MM-dd.
    #[clap(long)]
    pub start_date: Option<NaiveDate>,

    /// Latest game date, yyyy-MM-dd.
    #[clap(long)]
    pub end_date: Option<NaiveDate>,

    /// Game location: home or away.
    #[clap(long, value_enum)]
    pub location: Option<GameLocation>,

    /// Quarter id 1-4, or 5-8 for OT periods (repeatable).
    #[clap(long = "quarter")]
    pub quarters: Vec<String>,

    /// Most time remaining in the quarter, mm:ss (12:00 = not filtering).
    #[clap(long)]
    pub start_time_left: Option<ClockTime>,

    /// Least time remaining in the quarter, mm:ss (00:00 = not filtering).
    #[clap(long)]
    pub end_time_left: Option<ClockTime>,
}

#[derive(Debug, Parser)]
#[clap(name = "nba-shots", about = "NBA shot querying and visualization CLI")]
pub struct NbaShots {
    /// Backend base URL (or set `NBA_SHOTS_API_URL` env var).
    #[clap(long, global = true)]
    pub api_url: Option<String>,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Search players by name substring.
    Players {
        /// Name fragment to search for; empty matches nothing.
        name: String,
    },

    /// List all teams.
    Teams,

    /// List all seasons.
    Seasons,

    /// Compose a filter set, query shots, and render the chart.
    ///
    /// At least one player, team or season must be selected (directly or via
    /// `--link`) before the query fires; the other filters only refine.
    Chart {
        #[clap(flatten)]
        filters: ChartFilters,

        /// Restore filter state from a shared link's query string,
        /// e.g. `"players=1&seasons=2020"`.
        #[clap(long)]
        link: Option<String>,

        /// Write the chart as an SVG document.
        #[clap(long)]
        svg: Option<PathBuf>,

        /// Write the chart as a binary PPM raster.
        #[clap(long)]
        raster: Option<PathBuf>,

        /// Viewport width in pixels used to pick the raster surface size.
        #[clap(long, default_value_t = 1280)]
        viewport_width: u32,

        /// Write selections and shot data as a JSON bundle.
        #[clap(long)]
        json: Option<PathBuf>,

        /// Leave made shots off the chart.
        #[clap(long)]
        hide_made: bool,

        /// Leave missed shots off the chart.
        #[clap(long)]
        hide_missed: bool,

        /// Print statistics as JSON instead of the text table.
        #[clap(long)]
        json_output: bool,
    },
}
