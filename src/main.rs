//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use nba_shots::{
    api::resolve_base_url,
    cli::{Commands, NbaShots},
    commands::{
        chart::{handle_chart, ChartParams},
        reference::{handle_players, handle_seasons, handle_teams},
    },
    Result,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    sensible_env_logger::init!();

    let app = NbaShots::parse();
    let base_url = resolve_base_url(app.api_url)?;

    match app.command {
        Commands::Players { name } => handle_players(&base_url, &name).await?,

        Commands::Teams => handle_teams(&base_url).await?,

        Commands::Seasons => handle_seasons(&base_url).await?,

        Commands::Chart {
            filters,
            link,
            svg,
            raster,
            viewport_width,
            json,
            hide_made,
            hide_missed,
            json_output,
        } => {
            handle_chart(
                &base_url,
                ChartParams {
                    filters,
                    link,
                    svg,
                    raster,
                    viewport_width,
                    json,
                    hide_made,
                    hide_missed,
                    json_output,
                },
            )
            .await?
        }
    }

    Ok(())
}
