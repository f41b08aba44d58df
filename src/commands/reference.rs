//! Reference-dataset listing commands: players, teams, seasons.

use reqwest::Client;

use crate::api;
use crate::error::Result;

/// `players <name>`: substring search against the backend.
///
/// An empty search prints nothing rather than dumping every player.
pub async fn handle_players(base_url: &str, name: &str) -> Result<()> {
    if name.is_empty() {
        println!("No search text given");
        return Ok(());
    }

    let client = Client::new();
    let players = api::fetch_players_by_name(&client, base_url, name).await?;

    if players.is_empty() {
        println!("No players matching '{}'", name);
        return Ok(());
    }
    for player in players {
        println!("{:>8}  {}", player.id, player.name);
    }
    Ok(())
}

/// `teams`: the full team table.
pub async fn handle_teams(base_url: &str) -> Result<()> {
    let client = Client::new();
    let teams = api::fetch_all_teams(&client, base_url).await?;

    for team in teams {
        println!("{:>4}  {:<4} {}", team.id, team.abbreviation, team.name);
    }
    Ok(())
}

/// `seasons`: the full season table.
pub async fn handle_seasons(base_url: &str) -> Result<()> {
    let client = Client::new();
    let seasons = api::fetch_all_seasons(&client, base_url).await?;

    for season in seasons {
        println!("{:>6}  {}", season.id, season.season_years);
    }
    Ok(())
}
