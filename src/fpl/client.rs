//! Typed accessors for every FPL endpoint.
//!
//! Each accessor supplies its path template and optional query, then hands
//! off to [`get_json`]. Responses come back as the decoded JSON, untouched.

use reqwest::{Client, Url};
use serde_json::Value;

use super::{
    http::{check_base_url, get_json, parse_base_url, NO_QUERY},
    Endpoint, FixturesParams, StandingsParams, FPL_BASE_URL,
};
use crate::{ElementId, EventId, LeagueId, ManagerId, Result};


const USER_AGENT: &str = concat!("fpl-api/", env!("CARGO_PKG_VERSION"));

/// Client for the Fantasy Premier League API.
///
/// The base URL is fixed at construction. Cloning is cheap and clones share
/// the underlying connection pool.
///
/// ```rust,no_run
/// use fpl_api::{FplClient, ManagerId};
///
/// # async fn example() -> fpl_api::Result<()> {
/// let client = FplClient::new()?;
/// let manager = client.manager_data(ManagerId::new(12345)).await?;
/// println!("{}", manager["name"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct FplClient {
    http: Client,
    base_url: Url,
}

impl FplClient {
    /// Client against the public API. Takes no configuration.
    ///
    /// Returns `Result` because building the underlying `reqwest::Client`
    /// can fail (TLS backend initialisation); that surfaces as
    /// [`FplError::Http`](crate::FplError::Http) rather than a panic.
    pub fn new() -> Result<Self> {
        Self::with_base_url(FPL_BASE_URL)
    }

    /// Client against another host, e.g. a mirror or a local test server.
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Self::from_parts(http, parse_base_url(base_url)?)
    }

    /// Client from a preconfigured `reqwest::Client`.
    pub fn from_parts(http: Client, base_url: Url) -> Result<Self> {
        Ok(Self {
            http,
            base_url: check_base_url(base_url)?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// GET an endpoint that takes no query parameters.
    pub async fn fetch(&self, endpoint: Endpoint) -> Result<Value> {
        get_json(&self.http, &self.base_url, endpoint, NO_QUERY).await
    }

    /// Update status for the active gameweek: bonus points, league tables.
    pub async fn status(&self) -> Result<Value> {
        self.fetch(Endpoint::Status).await
    }

    /// General game information: events, game settings, phases, teams,
    /// total players, elements and element types.
    pub async fn fpl_data(&self) -> Result<Value> {
        self.fetch(Endpoint::Bootstrap).await
    }

    /// Fixtures of the season, optionally narrowed to one gameweek or to
    /// future fixtures only.
    pub async fn fixtures(&self, params: &FixturesParams) -> Result<Value> {
        get_json(&self.http, &self.base_url, Endpoint::Fixtures, params).await
    }

    /// Basic information about a manager.
    pub async fn manager_data(&self, manager_id: ManagerId) -> Result<Value> {
        self.fetch(Endpoint::Manager(manager_id)).await
    }

    /// A manager's picks, chip, automatic subs and entry history for one gameweek.
    pub async fn manager_gameweek_data(
        &self,
        manager_id: ManagerId,
        event_id: EventId,
    ) -> Result<Value> {
        self.fetch(Endpoint::ManagerPicks(manager_id, event_id)).await
    }

    /// Current season, past seasons and chips used by a manager.
    pub async fn manager_history_data(&self, manager_id: ManagerId) -> Result<Value> {
        self.fetch(Endpoint::ManagerHistory(manager_id)).await
    }

    /// The manager's own team. Upstream only answers this for an
    /// authenticated session; otherwise its error payload is returned.
    pub async fn manager_my_team(&self, manager_id: ManagerId) -> Result<Value> {
        self.fetch(Endpoint::MyTeam(manager_id)).await
    }

    /// Best performers of a gameweek.
    pub async fn team_dream_gameweek(&self, event_id: EventId) -> Result<Value> {
        self.fetch(Endpoint::DreamTeam(event_id)).await
    }

    /// Live stats and points breakdown of every player in a gameweek.
    pub async fn player_gameweek_data(&self, event_id: EventId) -> Result<Value> {
        self.fetch(Endpoint::EventLive(event_id)).await
    }

    /// Remaining fixtures, this season's history and past seasons of one player.
    pub async fn player_detailed_data(&self, element_id: ElementId) -> Result<Value> {
        self.fetch(Endpoint::ElementSummary(element_id)).await
    }

    pub async fn league_standing_classic(
        &self,
        league_id: LeagueId,
        params: &StandingsParams,
    ) -> Result<Value> {
        get_json(
            &self.http,
            &self.base_url,
            Endpoint::ClassicStandings(league_id),
            params,
        )
        .await
    }

    pub async fn league_standing_h2h(
        &self,
        league_id: LeagueId,
        params: &StandingsParams,
    ) -> Result<Value> {
        get_json(
            &self.http,
            &self.base_url,
            Endpoint::H2hStandings(league_id),
            params,
        )
        .await
    }

    /// Set-piece takers per team, with notes and confirmations.
    pub async fn set_piece_notes(&self) -> Result<Value> {
        self.fetch(Endpoint::SetPieceNotes).await
    }
}
