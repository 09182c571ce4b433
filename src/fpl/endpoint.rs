//! Path templates for the FPL endpoints.

use crate::{ElementId, EventId, LeagueId, ManagerId};

/// One remote endpoint with its path arguments filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// `event-status`
    Status,
    /// `bootstrap-static`
    Bootstrap,
    /// `fixtures`
    Fixtures,
    /// `entry/{manager_id}`
    Manager(ManagerId),
    /// `entry/{manager_id}/event/{event_id}/picks`
    ManagerPicks(ManagerId, EventId),
    /// `entry/{manager_id}/history`
    ManagerHistory(ManagerId),
    /// `my-team/{manager_id}`
    MyTeam(ManagerId),
    /// `dream-team/{event_id}`
    DreamTeam(EventId),
    /// `event/{event_id}/live`
    EventLive(EventId),
    /// `element-summary/{element_id}`
    ElementSummary(ElementId),
    /// `leagues-classic/{league_id}/standings`
    ClassicStandings(LeagueId),
    /// `leagues-h2h/{league_id}/standings`
    H2hStandings(LeagueId),
    /// `team/set-piece-notes`
    SetPieceNotes,
}

impl Endpoint {
    /// Path segments in request order, ids substituted positionally.
    pub fn segments(&self) -> Vec<String> {
        match *self {
            Endpoint::Status => vec!["event-status".into()],
            Endpoint::Bootstrap => vec!["bootstrap-static".into()],
            Endpoint::Fixtures => vec!["fixtures".into()],
            Endpoint::Manager(manager) => vec!["entry".into(), manager.to_string()],
            Endpoint::ManagerPicks(manager, event) => vec![
                "entry".into(),
                manager.to_string(),
                "event".into(),
                event.to_string(),
                "picks".into(),
            ],
            Endpoint::ManagerHistory(manager) => {
                vec!["entry".into(), manager.to_string(), "history".into()]
            }
            Endpoint::MyTeam(manager) => vec!["my-team".into(), manager.to_string()],
            Endpoint::DreamTeam(event) => vec!["dream-team".into(), event.to_string()],
            Endpoint::EventLive(event) => vec!["event".into(), event.to_string(), "live".into()],
            Endpoint::ElementSummary(element) => {
                vec!["element-summary".into(), element.to_string()]
            }
            Endpoint::ClassicStandings(league) => vec![
                "leagues-classic".into(),
                league.to_string(),
                "standings".into(),
            ],
            Endpoint::H2hStandings(league) => {
                vec!["leagues-h2h".into(), league.to_string(), "standings".into()]
            }
            Endpoint::SetPieceNotes => vec!["team".into(), "set-piece-notes".into()],
        }
    }

    /// Segments joined with `/`, relative to the base URL.
    pub fn path(&self) -> String {
        self.segments().join("/")
    }

    /// Stable name used in log events.
    pub fn name(&self) -> &'static str {
        match self {
            Endpoint::Status => "status",
            Endpoint::Bootstrap => "bootstrap",
            Endpoint::Fixtures => "fixtures",
            Endpoint::Manager(_) => "manager",
            Endpoint::ManagerPicks(..) => "manager-picks",
            Endpoint::ManagerHistory(_) => "manager-history",
            Endpoint::MyTeam(_) => "my-team",
            Endpoint::DreamTeam(_) => "dream-team",
            Endpoint::EventLive(_) => "event-live",
            Endpoint::ElementSummary(_) => "element-summary",
            Endpoint::ClassicStandings(_) => "classic-standings",
            Endpoint::H2hStandings(_) => "h2h-standings",
            Endpoint::SetPieceNotes => "set-piece-notes",
        }
    }
}
