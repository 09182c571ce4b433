//! Command implementations for the FPL CLI

pub mod fetch;

pub use fetch::{fetch_command, handle_command};

use crate::{fpl::FPL_BASE_URL, BASE_URL_ENV_VAR};

/// Resolve the base URL from the flag, then the environment, then the public API.
pub fn resolve_base_url(base_url: Option<String>) -> String {
    base_url
        .or_else(|| {
            std::env::var(BASE_URL_ENV_VAR)
                .ok()
                .filter(|s| !s.trim().is_empty())
        })
        .unwrap_or_else(|| FPL_BASE_URL.to_string())
}
