//! Enrichment provider trait and outcome
//!
//! Providers are best-effort: a failed fetch degrades to
//! [`EnrichmentOutcome::Unavailable`] and the chat request carries on
//! with the raw user message.

use crate::error::RelayError;
use crate::models::{ContextInfo, EnrichmentKind};
use crate::Result;
use chrono::{Datelike, NaiveDate};
use reqwest::Client;
use std::time::Duration;
use tracing::{error, info};

pub mod currency;
pub mod news;

pub use currency::CurrencyProvider;
pub use news::NewsProvider;

/// Trait for a single enrichment source
#[async_trait::async_trait]
pub trait EnrichmentProvider: Send + Sync {
    fn kind(&self) -> EnrichmentKind;

    /// `Ok(None)` means the provider answered but had nothing to add.
    async fn fetch(&self, message: &str) -> Result<Option<String>>;
}

/// What enrichment (if any) ended up in the prompt
#[derive(Debug, Clone, PartialEq)]
pub enum EnrichmentOutcome {
    Applied { kind: EnrichmentKind, text: String },
    Unavailable,
}

impl EnrichmentOutcome {
    pub fn text(&self) -> &str {
        match self {
            EnrichmentOutcome::Applied { text, .. } => text,
            EnrichmentOutcome::Unavailable => "",
        }
    }

    pub fn into_context_info(self) -> Option<ContextInfo> {
        match self {
            EnrichmentOutcome::Applied { kind, text } => Some(ContextInfo { kind, data: text }),
            EnrichmentOutcome::Unavailable => None,
        }
    }
}

/// Run a provider and swallow its failure.
pub async fn enrich(provider: &dyn EnrichmentProvider, message: &str) -> EnrichmentOutcome {
    let kind = provider.kind();

    match provider.fetch(message).await {
        Ok(Some(text)) if !text.is_empty() => {
            info!(?kind, chars = text.len(), "Enrichment applied");
            EnrichmentOutcome::Applied { kind, text }
        }
        Ok(_) => {
            info!(?kind, "Enrichment returned nothing");
            EnrichmentOutcome::Unavailable
        }
        Err(e) => {
            error!(?kind, "Enrichment failed: {}", e);
            EnrichmentOutcome::Unavailable
        }
    }
}

/// Pooled client with a bounded per-request timeout
pub(crate) fn build_http_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .pool_idle_timeout(Duration::from_secs(90))
        .pool_max_idle_per_host(8)
        .timeout(timeout)
        .build()
        .map_err(|e| RelayError::Config(format!("Failed to build HTTP client: {}", e)))
}

/// `M/D/YYYY`, the en-US short date.
pub(crate) fn format_short_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}
