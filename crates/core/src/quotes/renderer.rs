//! The external rendering collaborator.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::quote_model::Quote;
use crate::errors::Result;

/// Output of the rendering collaborator.
///
/// Both artifacts are optional; a failed render attaches neither, and the
/// quote is stored regardless.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedArtifacts {
    pub document: Option<String>,
    pub image: Option<String>,
}

/// Produces a quote's printable artifacts (branded document and/or raster
/// image). Implementations live in the host UI; the core only awaits the
/// result and attaches it.
#[async_trait]
pub trait QuoteRenderer: Send + Sync {
    async fn render(&self, quote: &Quote, company_logo: Option<&str>) -> Result<RenderedArtifacts>;
}
