//! Map each subcommand onto its accessor and print the response.

use serde_json::Value;
use tracing::info;

use super::resolve_base_url;
use crate::{
    cli::{Commands, GlobalOpts},
    core::emit_json,
    fpl::{FixturesParams, FplClient, StandingsParams},
    Result,
};

/// Run one subcommand end to end: build the client, fetch, write the JSON out.
pub async fn handle_command(opts: &GlobalOpts, command: &Commands) -> Result<()> {
    let base_url = resolve_base_url(opts.base_url.clone());
    let client = FplClient::with_base_url(&base_url)?;

    let value = fetch_command(&client, command).await?;

    if let Some(path) = &opts.output {
        info!(path = %path.display(), "writing response");
    }
    emit_json(&value, opts.compact, opts.output.as_deref())
}

/// Call the accessor behind `command` and return its response unchanged.
pub async fn fetch_command(client: &FplClient, command: &Commands) -> Result<Value> {
    match *command {
        Commands::Status => client.status().await,
        Commands::Bootstrap => client.fpl_data().await,
        Commands::Fixtures { event, future } => {
            let params = FixturesParams { event, future };
            client.fixtures(&params).await
        }
        Commands::Manager { manager_id } => client.manager_data(manager_id).await,
        Commands::Picks {
            manager_id,
            event_id,
        } => client.manager_gameweek_data(manager_id, event_id).await,
        Commands::History { manager_id } => client.manager_history_data(manager_id).await,
        Commands::MyTeam { manager_id } => client.manager_my_team(manager_id).await,
        Commands::DreamTeam { event_id } => client.team_dream_gameweek(event_id).await,
        Commands::Live { event_id } => client.player_gameweek_data(event_id).await,
        Commands::Player { element_id } => client.player_detailed_data(element_id).await,
        Commands::ClassicStandings { league_id, page } => {
            let params = StandingsParams {
                page_standing: page,
            };
            client.league_standing_classic(league_id, &params).await
        }
        Commands::H2hStandings { league_id, page } => {
            let params = StandingsParams {
                page_standing: page,
            };
            client.league_standing_h2h(league_id, &params).await
        }
        Commands::SetPieceNotes => client.set_piece_notes().await,
    }
}
