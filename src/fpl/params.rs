//! Optional query parameters for the endpoints that take them.
//!
//! Absent fields are left out of the query string entirely. Nothing is sent
//! as an empty value or `null`.

use serde::Serialize;

use crate::EventId;

/// Query for `fixtures`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FixturesParams {
    /// Only fixtures of this gameweek.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<EventId>,

    /// Only fixtures not yet played, or all of them. Sent as given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub future: Option<bool>,
}

impl FixturesParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_event(mut self, event: EventId) -> Self {
        self.event = Some(event);
        self
    }

    pub fn with_future(mut self, future: bool) -> Self {
        self.future = Some(future);
        self
    }
}

/// Query for the classic and head-to-head standings endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StandingsParams {
    /// Page of the standings table, for leagues spanning several pages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_standing: Option<u32>,
}

impl StandingsParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page_standing = Some(page);
        self
    }
}
