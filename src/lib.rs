//! Fantasy Premier League API Client
//!
//! A thin Rust client for the public Fantasy Premier League web API. Each
//! accessor formats one endpoint path, issues a single GET and returns the
//! decoded JSON body exactly as the server sent it.
//!
//! ## Features
//!
//! - **Typed accessors**: one method per endpoint, ids as distinct newtypes
//! - **Optional parameters**: absent values never reach the query string
//! - **Verbatim responses**: objects and arrays are passed through untouched,
//!   including upstream error payloads
//! - **CLI**: the `fpl` binary exposes every accessor as a subcommand
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fpl_api::{EventId, FixturesParams, FplClient, ManagerId};
//!
//! # async fn example() -> fpl_api::Result<()> {
//! let client = FplClient::new()?;
//!
//! let picks = client
//!     .manager_gameweek_data(ManagerId::new(12345), EventId::new(10))
//!     .await?;
//! println!("{}", picks["entry_history"]["points"]);
//!
//! let fixtures = client
//!     .fixtures(&FixturesParams::new().with_event(EventId::new(5)))
//!     .await?;
//! # let _ = fixtures;
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! The CLI talks to the public API unless told otherwise:
//! ```bash
//! export FPL_API_BASE_URL=http://localhost:8000/api/
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod fpl;

// Re-export commonly used types
pub use cli::types::ids::{ElementId, EventId, LeagueId, ManagerId};
pub use error::{FplError, Result};
pub use fpl::{Endpoint, FixturesParams, FplClient, StandingsParams, FPL_BASE_URL};

pub const BASE_URL_ENV_VAR: &str = "FPL_API_BASE_URL";
