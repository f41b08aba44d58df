//! HTTP client functions for the shots backend.
//!
//! All endpoints are simple GETs returning JSON; each function tags transport
//! failures with the resource name so the CLI can report "Error fetching
//! players: ..." without a retry loop.

pub mod types;

use reqwest::Client;

use crate::error::{Result, ShotsError};
use crate::filter::item::{Player, Season, Team};
use crate::query::QueryDescriptor;
use types::{PlayerRow, SeasonRow, ShotsPayload, TeamRow};

/// Env var consulted when `--api-url` is not passed.
pub const API_URL_ENV_VAR: &str = "NBA_SHOTS_API_URL";

/// Resolve the backend base URL from the CLI option or the environment.
pub fn resolve_base_url(cli_url: Option<String>) -> Result<String> {
    cli_url
        .or_else(|| std::env::var(API_URL_ENV_VAR).ok())
        .map(|url| url.trim_end_matches('/').to_string())
        .ok_or_else(|| ShotsError::MissingBaseUrl {
            env_var: API_URL_ENV_VAR.to_string(),
        })
}

async fn get_rows<T: serde::de::DeserializeOwned>(
    client: &Client,
    resource: &'static str,
    url: &str,
    query: &[(&str, String)],
) -> Result<T> {
    client
        .get(url)
        .query(query)
        .send()
        .await
        .map_err(|e| ShotsError::fetch(resource, e))?
        .error_for_status()
        .map_err(|e| ShotsError::fetch(resource, e))?
        .json::<T>()
        .await
        .map_err(|e| ShotsError::fetch(resource, e))
}

/// `GET /player?name={substring}` — substring search on player names.
pub async fn fetch_players_by_name(
    client: &Client,
    base_url: &str,
    name: &str,
) -> Result<Vec<Player>> {
    let url = format!("{base_url}/player");
    let rows: Vec<PlayerRow> =
        get_rows(client, "players", &url, &[("name", name.to_string())]).await?;
    Ok(rows.into_iter().map(Player::from).collect())
}

/// `GET /player/multi?player_id={csv}` — batch resolution by id, used for
/// link restore and `--player` selections where no name search happened.
pub async fn fetch_players_by_ids(
    client: &Client,
    base_url: &str,
    ids: &[String],
) -> Result<Vec<Player>> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    let url = format!("{base_url}/player/multi");
    let rows: Vec<PlayerRow> =
        get_rows(client, "players", &url, &[("player_id", ids.join(","))]).await?;
    Ok(rows.into_iter().map(Player::from).collect())
}

/// `GET /team/all`
pub async fn fetch_all_teams(client: &Client, base_url: &str) -> Result<Vec<Team>> {
    let url = format!("{base_url}/team/all");
    let rows: Vec<TeamRow> = get_rows(client, "teams", &url, &[]).await?;
    Ok(rows.into_iter().map(Team::from).collect())
}

/// `GET /season/all`
pub async fn fetch_all_seasons(client: &Client, base_url: &str) -> Result<Vec<Season>> {
    let url = format!("{base_url}/season/all");
    let rows: Vec<SeasonRow> = get_rows(client, "seasons", &url, &[]).await?;
    Ok(rows.into_iter().map(Season::from).collect())
}

/// `GET /shots` with the composed query's parameters.
pub async fn fetch_shots(
    client: &Client,
    base_url: &str,
    query: &QueryDescriptor,
) -> Result<ShotsPayload> {
    let url = format!("{base_url}/shots");
    get_rows(client, "shots", &url, &query.query_pairs()).await
}
