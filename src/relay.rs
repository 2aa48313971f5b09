//! Chat relay pipeline
//!
//! CLASSIFY → ENRICH (best-effort) → COMPOSE → GENERATE → ASSEMBLE
//!
//! At most one provider is called per request and generation always
//! follows. Only generation failures reach the caller.

use crate::classifier::{QueryClassifier, QueryKind};
use crate::config::RelayConfig;
use crate::enrichment::{enrich, CurrencyProvider, EnrichmentOutcome, EnrichmentProvider, NewsProvider};
use crate::gemini::{GeminiClient, TextGenerator};
use crate::models::ChatResponse;
use crate::prompt::compose_prompt;
use crate::Result;
use std::sync::Arc;
use tracing::info;

pub struct ChatRelay {
    currency: Arc<dyn EnrichmentProvider>,
    news: Arc<dyn EnrichmentProvider>,
    generator: Arc<dyn TextGenerator>,
}

impl ChatRelay {
    pub fn new(
        currency: Arc<dyn EnrichmentProvider>,
        news: Arc<dyn EnrichmentProvider>,
        generator: Arc<dyn TextGenerator>,
    ) -> Self {
        Self {
            currency,
            news,
            generator,
        }
    }

    /// Wire up the real exchange-rate, mediastack and Gemini clients.
    pub fn from_config(config: &RelayConfig) -> Result<Self> {
        Ok(Self::new(
            Arc::new(CurrencyProvider::new(config)?),
            Arc::new(NewsProvider::new(config)?),
            Arc::new(GeminiClient::new(config)?),
        ))
    }

    /// Classify and enrich, returning the outcome and the final prompt.
    pub async fn prepare(&self, message: &str) -> (EnrichmentOutcome, String) {
        let kind = QueryClassifier::classify(message);
        info!(?kind, "Query classified");

        let outcome = match kind {
            QueryKind::Currency => enrich(self.currency.as_ref(), message).await,
            QueryKind::News => enrich(self.news.as_ref(), message).await,
            QueryKind::Plain => EnrichmentOutcome::Unavailable,
        };

        let prompt = compose_prompt(outcome.text(), message);
        (outcome, prompt)
    }

    pub async fn handle(&self, message: &str) -> Result<ChatResponse> {
        let (outcome, prompt) = self.prepare(message).await;
        let text = self.generator.generate(&prompt).await?;
        Ok(ChatResponse::new(text, outcome.into_context_info()))
    }
}
