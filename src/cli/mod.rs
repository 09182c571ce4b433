//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::ids::{ElementId, EventId, LeagueId, ManagerId};

/// Output and connection options shared by every subcommand.
#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// API base URL (or set `FPL_API_BASE_URL` env var).
    #[clap(long, global = true)]
    pub base_url: Option<String>,

    /// Print single-line JSON instead of pretty-printed.
    #[clap(long, global = true)]
    pub compact: bool,

    /// Write the response to this file instead of stdout.
    #[clap(long, short, global = true)]
    pub output: Option<PathBuf>,

    /// Log request URLs and response status to stderr.
    #[clap(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Update status of the active gameweek (bonus points, league tables).
    Status,

    /// General game data: gameweeks, teams, players, positions, settings.
    #[clap(alias = "fpl-data")]
    Bootstrap,

    /// Season fixtures.
    Fixtures {
        /// Only fixtures of this gameweek.
        #[clap(long, short)]
        event: Option<EventId>,

        /// `true` for future fixtures only, `false` for all.
        #[clap(long)]
        future: Option<bool>,
    },

    /// Basic information about a manager.
    Manager {
        manager_id: ManagerId,
    },

    /// A manager's picks for one gameweek.
    Picks {
        manager_id: ManagerId,
        event_id: EventId,
    },

    /// A manager's current and past seasons.
    History {
        manager_id: ManagerId,
    },

    /// A manager's own team (requires an authenticated session upstream).
    MyTeam {
        manager_id: ManagerId,
    },

    /// Best performers of a gameweek.
    DreamTeam {
        event_id: EventId,
    },

    /// Live stats of every player in a gameweek.
    Live {
        event_id: EventId,
    },

    /// Fixtures and history of one player.
    Player {
        element_id: ElementId,
    },

    /// Standings of a classic league.
    ClassicStandings {
        league_id: LeagueId,

        /// Standings page, for leagues spanning several pages.
        #[clap(long)]
        page: Option<u32>,
    },

    /// Standings of a head-to-head league.
    H2hStandings {
        league_id: LeagueId,

        /// Standings page, for leagues spanning several pages.
        #[clap(long)]
        page: Option<u32>,
    },

    /// Set-piece takers for every team.
    SetPieceNotes,
}

#[derive(Debug, Parser)]
#[clap(name = "fpl", about = "Fantasy Premier League API client", version)]
pub struct Fpl {
    #[clap(flatten)]
    pub opts: GlobalOpts,

    #[clap(subcommand)]
    pub command: Commands,
}
