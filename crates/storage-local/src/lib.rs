//! Local file storage implementation for Fleetquote.
//!
//! This crate provides the persisted key-value store behind the core's
//! `StateStore` trait, backed by a single JSON file on disk. It is the only
//! place in the workspace that touches the filesystem; everything else works
//! with traits.
//!
//! ```text
//! core (domain)
//!       │
//!       ▼
//! storage-local (this crate)
//!       │
//!       ▼
//!   state.json
//! ```

pub mod errors;
pub mod store;

pub use errors::StorageError;
pub use store::LocalStateStore;

// Re-export from fleetquote-core for convenience
pub use fleetquote_core::errors::{Error, Result, StoreError};
