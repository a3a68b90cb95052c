//! Quote building, rendering, history, and the generation pipeline.
//!
//! - [`quote_model`] - Immutable quote and line-item models
//! - [`builder`] - Draft validation, totals, and snapshotting
//! - [`renderer`] - The external rendering collaborator trait
//! - [`history`] - Append-only quote history over the state store
//! - [`service`] - The finalize pipeline tying the pieces together
//!
//! # Architecture
//!
//! ```text
//! QuoteService ──▶ builder ──▶ Quote
//!      │                        │
//!      ├──▶ QuoteRenderer (UI collaborator, artifacts attached here)
//!      ├──▶ QuoteHistoryService ──▶ StateStore
//!      └──▶ ReservationSequencer ──▶ StateStore
//! ```
//!
//! A quote becomes visible in history only after its rendered artifacts are
//! attached or recorded absent; the counter advances only after the append
//! succeeded.

pub mod builder;
pub mod history;
pub mod quote_model;
pub mod renderer;
pub mod service;


// Re-export commonly used types for convenience
pub use history::{HistoryStats, QuoteHistoryService, QuoteHistoryTrait};
pub use quote_model::{Quote, QuoteLineItem};
pub use renderer::{QuoteRenderer, RenderedArtifacts};
pub use service::{QuoteService, QuoteServiceTrait};
