//! The quote generation pipeline.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};

use super::builder;
use super::history::QuoteHistoryTrait;
use super::quote_model::Quote;
use super::renderer::QuoteRenderer;
use crate::errors::{Error, Result};
use crate::reservations::ReservationSequencerTrait;
use crate::selection::DraftQuote;
use crate::settings::SettingsServiceTrait;

/// Contract for the quote generation pipeline.
#[async_trait]
pub trait QuoteServiceTrait: Send + Sync {
    /// Runs the full pipeline: validate and snapshot the draft, render its
    /// artifacts, append to history, then advance the reservation counter
    /// and remember the client name.
    async fn generate(&self, draft: &DraftQuote) -> Result<Quote>;
}

pub struct QuoteService {
    renderer: Arc<dyn QuoteRenderer>,
    history: Arc<dyn QuoteHistoryTrait>,
    sequencer: Arc<dyn ReservationSequencerTrait>,
    settings: Arc<dyn SettingsServiceTrait>,
    generation_in_progress: AtomicBool,
}

impl QuoteService {
    pub fn new(
        renderer: Arc<dyn QuoteRenderer>,
        history: Arc<dyn QuoteHistoryTrait>,
        sequencer: Arc<dyn ReservationSequencerTrait>,
        settings: Arc<dyn SettingsServiceTrait>,
    ) -> Self {
        Self {
            renderer,
            history,
            sequencer,
            settings,
            generation_in_progress: AtomicBool::new(false),
        }
    }

    async fn generate_inner(&self, draft: &DraftQuote) -> Result<Quote> {
        let quote = builder::finalize(draft)?;

        // The quote must not reach history before its artifacts are attached
        // or recorded absent.
        let logo = self.settings.company_logo()?;
        let quote = match self.renderer.render(&quote, logo.as_deref()).await {
            Ok(artifacts) => quote.with_artifacts(artifacts),
            Err(e) => {
                warn!(
                    "rendering failed for {}; storing quote without artifacts: {e}",
                    quote.reservation_number
                );
                quote
            }
        };

        self.history.append(&quote).await?;
        self.sequencer.advance().await?;
        self.sequencer.set_last_client_name(&quote.client_name).await?;

        debug!(
            "generated quote {} ({} items, total {})",
            quote.reservation_number,
            quote.items.len(),
            quote.total
        );
        Ok(quote)
    }
}

#[async_trait]
impl QuoteServiceTrait for QuoteService {
    async fn generate(&self, draft: &DraftQuote) -> Result<Quote> {
        // A second finalize while one is pending would double-append and
        // double-advance the counter.
        if self
            .generation_in_progress
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(Error::GenerationInProgress);
        }

        let result = self.generate_inner(draft).await;
        self.generation_in_progress.store(false, Ordering::SeqCst);
        result
    }
}
