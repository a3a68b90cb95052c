use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use crate::constants::{KEY_COMPANY_LOGO, KEY_SEASON_WINDOW};
use crate::errors::Result;
use crate::season::SeasonWindow;
use crate::store::StateStore;

/// Configuration surface for the quoting UI.
#[async_trait]
pub trait SettingsServiceTrait: Send + Sync {
    /// The configured high-season window; both bounds unset when never
    /// configured.
    fn season_window(&self) -> Result<SeasonWindow>;

    async fn set_season_window(&self, window: &SeasonWindow) -> Result<()>;

    /// Opaque handle to the uploaded company logo, if any.
    fn company_logo(&self) -> Result<Option<String>>;

    async fn set_company_logo(&self, logo: &str) -> Result<()>;
}

pub struct SettingsService {
    store: Arc<dyn StateStore>,
}

impl SettingsService {
    pub fn new(store: Arc<dyn StateStore>) -> Self {
        SettingsService { store }
    }
}

#[async_trait]
impl SettingsServiceTrait for SettingsService {
    fn season_window(&self) -> Result<SeasonWindow> {
        match self.store.get(KEY_SEASON_WINDOW)? {
            Some(blob) => Ok(serde_json::from_str(&blob)?),
            None => Ok(SeasonWindow::default()),
        }
    }

    async fn set_season_window(&self, window: &SeasonWindow) -> Result<()> {
        debug!("updating season window: {window:?}");
        self.store
            .set(KEY_SEASON_WINDOW, &serde_json::to_string(window)?)
            .await
    }

    fn company_logo(&self) -> Result<Option<String>> {
        self.store.get(KEY_COMPANY_LOGO)
    }

    async fn set_company_logo(&self, logo: &str) -> Result<()> {
        self.store.set(KEY_COMPANY_LOGO, logo).await
    }
}
