//! The `chart` command: compose filters, query shots, render and export.

use std::path::PathBuf;

use log::{debug, info};
use reqwest::Client;

use crate::api;
use crate::cli::ChartFilters;
use crate::court::{raster, svg, ShotDisplay};
use crate::error::Result;
use crate::export::{self, ExportBundle};
use crate::filter::{FilterSession, ReferenceData};
use crate::query::QueryDescriptor;
use crate::stats::{self, ShotStatistics};

/// Everything the `chart` subcommand parsed.
pub struct ChartParams {
    pub filters: ChartFilters,
    pub link: Option<String>,
    pub svg: Option<PathBuf>,
    pub raster: Option<PathBuf>,
    pub viewport_width: u32,
    pub json: Option<PathBuf>,
    pub hide_made: bool,
    pub hide_missed: bool,
    pub json_output: bool,
}

pub async fn handle_chart(base_url: &str, params: ChartParams) -> Result<()> {
    let client = Client::new();

    // Reference datasets load concurrently; selections resolve against them.
    let (teams, seasons) = tokio::join!(
        api::fetch_all_teams(&client, base_url),
        api::fetch_all_seasons(&client, base_url),
    );
    let reference = ReferenceData {
        teams: teams?,
        seasons: seasons?,
    };

    let mut session = match &params.link {
        Some(link) => FilterSession::from_query_string(link),
        None => FilterSession::new(),
    };

    // One batch lookup covers both the link's player ids and --player args,
    // since player names aren't available locally.
    let mut wanted_ids = session.pending_player_ids();
    for id in &params.filters.players {
        if !wanted_ids.contains(id) {
            wanted_ids.push(id.clone());
        }
    }
    let resolved_players = api::fetch_players_by_ids(&client, base_url, &wanted_ids).await?;

    // Restore link state first (runs at most once), then layer CLI edits on
    // top as ordinary user-driven mutations.
    let link_ids = session.pending_player_ids();
    let url_players: Vec<_> = resolved_players
        .iter()
        .filter(|p| link_ids.contains(&p.id))
        .cloned()
        .collect();
    session.restore_from_url(&reference, &url_players);

    for id in &params.filters.players {
        if let Some(player) = resolved_players.iter().find(|p| &p.id == id) {
            session.select_player(player.clone());
        } else {
            debug!("player id {} not found, skipping", id);
        }
    }
    for id in &params.filters.teams {
        session.select_team(&reference, id);
    }
    for id in &params.filters.seasons {
        session.select_season(&reference, id);
    }
    for id in &params.filters.opponents {
        session.select_opponent(&reference, id);
    }
    for id in &params.filters.quarters {
        session.select_quarter(id);
    }
    if let Some(date) = params.filters.start_date {
        session.select_start_date(date);
    }
    if let Some(date) = params.filters.end_date {
        session.select_end_date(date);
    }
    if let Some(location) = params.filters.location {
        session.select_location(location);
    }
    if let Some(time) = params.filters.start_time_left {
        session.select_start_time_left(time);
    }
    if let Some(time) = params.filters.end_time_left {
        session.select_end_time_left(time);
    }

    let Some(query) = QueryDescriptor::from_session(&session) else {
        println!("Nothing to chart: select at least one player, team, or season.");
        return Ok(());
    };
    info!("querying shots: {}", query.cache_key());

    let payload = api::fetch_shots(&client, base_url, &query).await?;
    let statistics = stats::reduce(&payload);

    if params.json_output {
        println!("{}", serde_json::to_string_pretty(&statistics)?);
    } else {
        print_stats(&statistics);
    }

    let display = ShotDisplay {
        show_made: !params.hide_made,
        show_missed: !params.hide_missed,
        ..ShotDisplay::default()
    };

    if let Some(path) = &params.svg {
        let document = svg::render(&statistics.shots, &display);
        export::write_svg(path, &document)?;
        println!("Wrote {}", path.display());
    }
    if let Some(path) = &params.raster {
        let canvas = raster::render(&statistics.shots, &display, params.viewport_width);
        export::write_ppm(path, &canvas)?;
        println!("Wrote {}", path.display());
    }
    if let Some(path) = &params.json {
        let bundle = ExportBundle::new(&session, &statistics.shots);
        export::write_json(path, &bundle)?;
        println!("Wrote {}", path.display());
    }

    println!("Share link: ?{}", session.share_link());
    Ok(())
}

fn print_stats(statistics: &ShotStatistics) {
    println!(
        "{:<8} {:>6} {:>7} {:>6} {:>5}",
        "", "Made", "Missed", "Total", "Pct"
    );
    println!(
        "{:<8} {:>6} {:>7} {:>6} {:>4}%",
        "2PT", statistics.made_2pt, statistics.missed_2pt, statistics.total_2pt, statistics.pct_2pt
    );
    println!(
        "{:<8} {:>6} {:>7} {:>6} {:>4}%",
        "3PT", statistics.made_3pt, statistics.missed_3pt, statistics.total_3pt, statistics.pct_3pt
    );
    println!(
        "{:<8} {:>6} {:>7} {:>6} {:>4}%",
        "Total",
        statistics.total_made,
        statistics.total_missed,
        statistics.total_shots,
        statistics.pct_total
    );
}
