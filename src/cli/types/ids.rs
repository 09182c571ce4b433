//! ID types for Fantasy Premier League.
//!
//! Ids are forwarded to the upstream service as-is; no range checks are made
//! here, the API decides what an unknown id means.

use crate::error::{FplError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! fpl_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl $name {
            pub fn new(id: u32) -> Self {
                Self(id)
            }

            pub fn as_u32(&self) -> u32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = FplError;

            fn from_str(s: &str) -> Result<Self> {
                Ok(Self(s.trim().parse()?))
            }
        }

        impl From<u32> for $name {
            fn from(id: u32) -> Self {
                Self(id)
            }
        }
    };
}

fpl_id!(
    /// Type-safe wrapper for FPL manager (entry) IDs.
    ///
    /// The id is visible in the URL of a manager's "Gameweek history" page.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpl_api::ManagerId;
    ///
    /// let manager_id = ManagerId::new(12345);
    /// assert_eq!(manager_id.as_u32(), 12345);
    /// assert_eq!(manager_id.to_string(), "12345");
    /// ```
    ManagerId
);

fpl_id!(
    /// Gameweek id.
    EventId
);

fpl_id!(
    /// Premier League player id, called an "element" by the API.
    ElementId
);

fpl_id!(
    /// Type-safe wrapper for FPL league IDs, classic or head-to-head.
    LeagueId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manager_id_parse() {
        let id: ManagerId = "12345".parse().unwrap();
        assert_eq!(id, ManagerId::new(12345));
    }

    #[test]
    fn test_id_parse_trims_whitespace() {
        let id: EventId = " 10 ".parse().unwrap();
        assert_eq!(id.as_u32(), 10);
    }

    #[test]
    fn test_id_parse_rejects_garbage() {
        let err = "gw10".parse::<EventId>().unwrap_err();
        assert!(matches!(err, FplError::InvalidId(_)));

        assert!("-1".parse::<LeagueId>().is_err());
    }

    #[test]
    fn test_zero_id_is_accepted() {
        // Not validated locally; upstream decides
        let id: ElementId = "0".parse().unwrap();
        assert_eq!(id.to_string(), "0");
    }

    #[test]
    fn test_id_serializes_transparently() {
        let json = serde_json::to_string(&LeagueId::new(999)).unwrap();
        assert_eq!(json, "999");

        let back: LeagueId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, LeagueId::from(999));
    }
}
