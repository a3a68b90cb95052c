//! Draft quote domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ledger::SelectionLedger;
use crate::season::Season;

/// One vehicle chosen for the draft quote.
///
/// Display metadata and the table rate are snapshotted from the vehicle at
/// toggle time, so later inventory edits never reach back into an open
/// draft. While `manually_edited` is false the price tracks the vehicle's
/// rate for `season`; once the user overrides it the entry is pinned until
/// it is removed and re-added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionEntry {
    pub vehicle_id: String,
    pub vehicle_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_fuel: Option<String>,
    pub price_per_day: Decimal,
    /// The vehicle's table rate at selection time, before any manual edits.
    pub original_price_per_day: Decimal,
    pub season: Season,
    pub manually_edited: bool,
}

/// The in-progress, mutable quote under construction in the current session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftQuote {
    pub client_name: String,
    pub reservation_number: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    /// Staff-edited day count; replaces the computed duration when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_override: Option<u32>,
    pub selection: SelectionLedger,
}
