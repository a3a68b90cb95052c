use std::sync::Arc;

use log::debug;
use serde_json::Value;

use super::inventory_model::Vehicle;
use super::normalizer;
use super::seed;
use crate::constants::KEY_INVENTORY;
use crate::errors::Result;
use crate::store::StateStore;

/// Read-side access to the vehicle inventory.
///
/// The inventory is owned by the external editor; this service only loads
/// the raw records and normalizes them. A store that has never been written
/// is seeded with the factory rate list, matching first-launch behavior.
pub struct InventoryService {
    store: Arc<dyn StateStore>,
}

impl InventoryService {
    pub fn new(store: Arc<dyn StateStore>) -> Self {
        Self { store }
    }

    /// Loads the inventory in canonical form, seeding the factory list when
    /// no inventory has been persisted yet.
    pub async fn load(&self) -> Result<Vec<Vehicle>> {
        let raw = match self.store.get(KEY_INVENTORY)? {
            Some(blob) => serde_json::from_str::<Vec<Value>>(&blob)?,
            None => {
                let seeded = seed::factory_inventory();
                debug!("no persisted inventory, seeding {} vehicles", seeded.len());
                self.store
                    .set(KEY_INVENTORY, &serde_json::to_string(&seeded)?)
                    .await?;
                seeded
            }
        };
        Ok(raw.iter().map(normalizer::normalize).collect())
    }
}
