//! The persisted key-value store trait.

use async_trait::async_trait;

use crate::errors::Result;

/// Storage interface for named state blobs.
///
/// There is exactly one mutator thread of control per store, so no
/// compare-and-swap is offered: callers read, modify, and write back.
/// Reads are synchronous (backends keep state in memory); writes are async
/// since they may touch the backing medium.
#[async_trait]
pub trait StateStore: Send + Sync {
    /// Reads the blob stored under `key`, or `None` when the key has never
    /// been written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Writes the blob under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<()>;
}
