//! The set of vehicles chosen for the in-progress quote.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::selection_model::SelectionEntry;
use crate::inventory::Vehicle;
use crate::season::Season;
use crate::utils::parse_utils::decimal_from_str;

/// Insertion-ordered ledger of selected vehicles.
///
/// Entries keep the season they were given at toggle time; a change of the
/// draft's dates never relabels or reprices them behind the user's back.
/// Price changes happen through `set_price`, which pins the entry against
/// automatic repricing, or through `set_season`, which follows the vehicle's
/// rate table while the entry is unpinned.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionLedger {
    entries: Vec<SelectionEntry>,
}

impl SelectionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects the vehicle, or removes it entirely when already selected
    /// (no soft-disable; re-adding starts from the rate table again).
    pub fn toggle(&mut self, vehicle: &Vehicle, season: Season) {
        if let Some(pos) = self.position(&vehicle.id) {
            self.entries.remove(pos);
            return;
        }
        let rate = vehicle.rate_for(season);
        self.entries.push(SelectionEntry {
            vehicle_id: vehicle.id.clone(),
            vehicle_name: vehicle.name.clone(),
            vehicle_type: vehicle.vehicle_type.clone(),
            vehicle_fuel: vehicle.fuel.clone(),
            price_per_day: rate,
            original_price_per_day: rate,
            season,
            manually_edited: false,
        });
    }

    /// Overwrites the entry's daily price from user input and pins it
    /// against automatic repricing. Unparseable input degrades to zero,
    /// like every other user-typed number.
    pub fn set_price(&mut self, vehicle_id: &str, raw_price: &str) {
        if let Some(entry) = self.entry_mut(vehicle_id) {
            entry.price_per_day = decimal_from_str(raw_price).unwrap_or(Decimal::ZERO);
            entry.manually_edited = true;
        }
    }

    /// Relabels the entry's season. While the entry is unpinned the price
    /// and recorded table rate follow the vehicle's rate for the new season;
    /// a pinned price is left untouched (the override persists across
    /// season toggles).
    pub fn set_season(&mut self, vehicle: &Vehicle, season: Season) {
        if let Some(entry) = self.entry_mut(&vehicle.id) {
            entry.season = season;
            if !entry.manually_edited {
                let rate = vehicle.rate_for(season);
                entry.price_per_day = rate;
                entry.original_price_per_day = rate;
            }
        }
    }

    /// The entries in selection order.
    pub fn entries(&self) -> &[SelectionEntry] {
        &self.entries
    }

    pub fn contains(&self, vehicle_id: &str) -> bool {
        self.position(vehicle_id).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Empties the ledger, as when a new draft is started.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Appends a pre-built entry, bypassing the rate table. Used when
    /// rebuilding a draft from a historical quote.
    pub(crate) fn push_entry(&mut self, entry: SelectionEntry) {
        self.entries.push(entry);
    }

    fn position(&self, vehicle_id: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.vehicle_id == vehicle_id)
    }

    fn entry_mut(&mut self, vehicle_id: &str) -> Option<&mut SelectionEntry> {
        self.entries.iter_mut().find(|e| e.vehicle_id == vehicle_id)
    }
}
