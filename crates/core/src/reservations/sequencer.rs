//! The persisted reservation sequence.
//!
//! Drafts display the next reservation token before commit, so issuing a
//! token never advances the counter; the advance happens only after a quote
//! has been finalized and stored. Persistence is fire-and-forget: a failed
//! write leaves the counter one behind on the next launch, which is a minor,
//! non-corrupting drift.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use log::{debug, warn};

use crate::constants::{
    INITIAL_RESERVATION_COUNTER, KEY_LAST_CLIENT_NAME, KEY_RESERVATION_COUNTER,
    RESERVATION_NUMBER_WIDTH,
};
use crate::errors::Result;
use crate::store::StateStore;

/// Formats a counter value as a human-readable reservation token.
pub fn format_reservation_number(counter: u64) -> String {
    format!("#{counter:0width$}", width = RESERVATION_NUMBER_WIDTH)
}

/// Contract for the reservation sequence and last-client-name cache.
#[async_trait]
pub trait ReservationSequencerTrait: Send + Sync {
    /// The token the next finalized quote will carry. Does NOT advance the
    /// counter.
    fn next(&self) -> String;

    /// Advances and persists the counter. Called only after a quote has
    /// been successfully finalized and stored.
    async fn advance(&self) -> Result<()>;

    /// The most recently used client name, pre-filling the next draft.
    fn last_client_name(&self) -> String;

    /// Remembers and persists the client name.
    async fn set_last_client_name(&self, name: &str) -> Result<()>;
}

/// Process-wide reservation state, loaded from the store at startup and
/// written back on every change.
pub struct ReservationSequencer {
    store: Arc<dyn StateStore>,
    counter: RwLock<u64>,
    last_client_name: RwLock<String>,
}

impl ReservationSequencer {
    /// Initializes from persisted state. A missing or malformed counter
    /// falls back to the initial value; a missing client name is empty.
    pub fn load(store: Arc<dyn StateStore>) -> Result<Self> {
        let counter = match store.get(KEY_RESERVATION_COUNTER)? {
            Some(value) => value.trim().parse().unwrap_or(INITIAL_RESERVATION_COUNTER),
            None => INITIAL_RESERVATION_COUNTER,
        };
        let last_client_name = store.get(KEY_LAST_CLIENT_NAME)?.unwrap_or_default();
        debug!("reservation counter loaded at {counter}");

        Ok(Self {
            store,
            counter: RwLock::new(counter),
            last_client_name: RwLock::new(last_client_name),
        })
    }
}

#[async_trait]
impl ReservationSequencerTrait for ReservationSequencer {
    fn next(&self) -> String {
        format_reservation_number(*self.counter.read().unwrap())
    }

    async fn advance(&self) -> Result<()> {
        let value = {
            let mut counter = self.counter.write().unwrap();
            *counter += 1;
            *counter
        };
        if let Err(e) = self.store.set(KEY_RESERVATION_COUNTER, &value.to_string()).await {
            warn!("failed to persist reservation counter {value}: {e}");
        }
        Ok(())
    }

    fn last_client_name(&self) -> String {
        self.last_client_name.read().unwrap().clone()
    }

    async fn set_last_client_name(&self, name: &str) -> Result<()> {
        *self.last_client_name.write().unwrap() = name.to_string();
        if let Err(e) = self.store.set(KEY_LAST_CLIENT_NAME, name).await {
            warn!("failed to persist last client name: {e}");
        }
        Ok(())
    }
}
