//! Append-only quote history.

use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::quote_model::Quote;
use crate::constants::KEY_QUOTE_HISTORY;
use crate::errors::Result;
use crate::reservations::ReservationSequencerTrait;
use crate::selection::{DraftQuote, SelectionEntry, SelectionLedger};
use crate::store::StateStore;

/// Aggregate figures over the stored history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryStats {
    pub count: usize,
    pub total_value: Decimal,
    pub average: Decimal,
}

/// Contract for the quote history.
#[async_trait]
pub trait QuoteHistoryTrait: Send + Sync {
    /// Appends a finalized quote. History entries are never mutated in
    /// place; deletion is an explicit external purge, not offered here.
    async fn append(&self, quote: &Quote) -> Result<()>;

    /// All stored quotes, most recent first. Storage itself keeps insertion
    /// order; the descending sort is a display concern.
    fn list(&self) -> Result<Vec<Quote>>;

    /// Rebuilds an editable draft from a historical quote, under a freshly
    /// issued reservation number.
    fn duplicate(&self, quote: &Quote) -> Result<DraftQuote>;

    /// Aggregate figures for the dashboard tiles.
    fn stats(&self) -> Result<HistoryStats>;
}

pub struct QuoteHistoryService {
    store: Arc<dyn StateStore>,
    sequencer: Arc<dyn ReservationSequencerTrait>,
}

impl QuoteHistoryService {
    pub fn new(store: Arc<dyn StateStore>, sequencer: Arc<dyn ReservationSequencerTrait>) -> Self {
        QuoteHistoryService { store, sequencer }
    }

    fn read_all(&self) -> Result<Vec<Quote>> {
        match self.store.get(KEY_QUOTE_HISTORY)? {
            Some(blob) => Ok(serde_json::from_str(&blob)?),
            None => Ok(Vec::new()),
        }
    }
}

#[async_trait]
impl QuoteHistoryTrait for QuoteHistoryService {
    async fn append(&self, quote: &Quote) -> Result<()> {
        let mut quotes = self.read_all()?;
        quotes.push(quote.clone());
        self.store
            .set(KEY_QUOTE_HISTORY, &serde_json::to_string(&quotes)?)
            .await?;
        debug!(
            "appended quote {} to history ({} stored)",
            quote.reservation_number,
            quotes.len()
        );
        Ok(())
    }

    fn list(&self) -> Result<Vec<Quote>> {
        let mut quotes = self.read_all()?;
        quotes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(quotes)
    }

    fn duplicate(&self, quote: &Quote) -> Result<DraftQuote> {
        let mut selection = SelectionLedger::new();
        for item in &quote.items {
            selection.push_entry(SelectionEntry {
                vehicle_id: item.vehicle_id.clone(),
                vehicle_name: item.vehicle_name.clone(),
                vehicle_type: item.vehicle_type.clone(),
                vehicle_fuel: item.vehicle_fuel.clone(),
                price_per_day: item.price_per_day,
                original_price_per_day: item.price_per_day,
                season: item.season,
                manually_edited: item.manually_edited,
            });
        }

        Ok(DraftQuote {
            client_name: quote.client_name.clone(),
            reservation_number: self.sequencer.next(),
            start_date: Some(quote.start_date),
            end_date: Some(quote.end_date),
            days_override: None,
            selection,
        })
    }

    fn stats(&self) -> Result<HistoryStats> {
        let quotes = self.read_all()?;
        let total_value: Decimal = quotes.iter().map(|q| q.total).sum();
        let average = if quotes.is_empty() {
            Decimal::ZERO
        } else {
            total_value / Decimal::from(quotes.len() as u64)
        };

        Ok(HistoryStats {
            count: quotes.len(),
            total_value,
            average,
        })
    }
}
