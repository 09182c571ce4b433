//! Fantasy Premier League API access.
//!
//! - `endpoint`: path templates for every remote endpoint
//! - `params`: optional query parameters
//! - `http`: URL building and the shared GET helper
//! - `client`: the typed accessor surface

pub mod client;
pub mod endpoint;
pub mod http;
pub mod params;

pub use client::FplClient;
pub use endpoint::Endpoint;
pub use params::{FixturesParams, StandingsParams};

/// Base URL of the public FPL API.
pub const FPL_BASE_URL: &str = "https://fantasy.premierleague.com/api/";
