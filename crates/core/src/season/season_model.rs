//! Season domain models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Season identifiers as persisted in quote records.
pub const SEASON_HIGH: &str = "high";
pub const SEASON_LOW: &str = "low";

/// The two pricing tiers of the seasonal model.
///
/// With no high-season window configured every stay is low season, so `Low`
/// is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    High,
    #[default]
    Low,
}

impl Season {
    /// Returns the string identifier for this season.
    pub fn as_str(&self) -> &'static str {
        match self {
            Season::High => SEASON_HIGH,
            Season::Low => SEASON_LOW,
        }
    }
}

impl From<&str> for Season {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            SEASON_HIGH => Season::High,
            _ => Season::Low,
        }
    }
}

/// The configured high-season calendar window.
///
/// Either bound unset means no high season is configured and every stay
/// classifies as low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SeasonWindow {
    pub high_season_start: Option<NaiveDate>,
    pub high_season_end: Option<NaiveDate>,
}

impl SeasonWindow {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self {
            high_season_start: start,
            high_season_end: end,
        }
    }

    /// True when both bounds are set.
    pub fn is_configured(&self) -> bool {
        self.high_season_start.is_some() && self.high_season_end.is_some()
    }
}
