//! Canonical vehicle model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::season::Season;

/// A vehicle in canonical form, after normalization.
///
/// Pricing fields are guaranteed numeric with
/// `high_season_price >= low_season_price >= 0`. The metadata fields stay
/// optional: absence is a first-class state, not an error. Vehicles are
/// created and edited by the external inventory editor and are read-only
/// here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: String,
    pub name: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub vehicle_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seats: Option<u32>,
    /// Security deposit, where the rate list specifies one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deposit: Option<Decimal>,
    pub low_season_price: Decimal,
    pub high_season_price: Decimal,
}

impl Vehicle {
    /// The daily rate for the given season.
    pub fn rate_for(&self, season: Season) -> Decimal {
        match season {
            Season::High => self.high_season_price,
            Season::Low => self.low_season_price,
        }
    }
}
