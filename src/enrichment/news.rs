//! News enrichment
//!
//! Searches mediastack for articles matching the user's message and
//! summarises the newest ones as "<title> (<date>)".

use super::{build_http_client, format_short_date, EnrichmentProvider};
use crate::config::RelayConfig;
use crate::error::RelayError;
use crate::models::EnrichmentKind;
use crate::Result;
use chrono::{DateTime, NaiveDate};
use reqwest::Client;
use serde::Deserialize;
use tracing::info;

/// Articles requested from the provider
pub const FETCH_LIMIT: usize = 3;
/// Articles quoted in the prompt
pub const USED_ARTICLES: usize = 2;

#[derive(Debug, Clone, Deserialize)]
pub struct Article {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NewsResponse {
    #[serde(default)]
    data: Option<Vec<Article>>,
    #[serde(default)]
    error: Option<serde_json::Value>,
}

pub struct NewsProvider {
    client: Client,
    api_key: String,
    base_url: String,
}

impl NewsProvider {
    pub fn new(config: &RelayConfig) -> Result<Self> {
        Ok(Self {
            client: build_http_client(config.http_timeout)?,
            api_key: config.mediastack_api_key.clone(),
            base_url: config.mediastack_base_url.clone(),
        })
    }

    async fn search(&self, keywords: &str) -> Result<Vec<Article>> {
        let url = format!("{}/v1/news", self.base_url);
        let limit = FETCH_LIMIT.to_string();

        info!("Searching recent news");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("access_key", self.api_key.as_str()),
                ("keywords", keywords),
                ("limit", limit.as_str()),
                ("sort", "published_desc"),
                ("languages", "en"),
            ])
            .send()
            .await
            .map_err(|e| {
                RelayError::Enrichment(format!("News request failed: {}", e.without_url()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RelayError::Enrichment(format!(
                "News API returned {}: {}",
                status, body
            )));
        }

        let body: NewsResponse = response.json().await.map_err(|e| {
            RelayError::Enrichment(format!("Invalid news response: {}", e.without_url()))
        })?;

        if let Some(error) = body.error {
            return Err(RelayError::Enrichment(format!("News API error: {}", error)));
        }

        let articles = body.data.unwrap_or_default();
        info!(count = articles.len(), "News articles received");
        Ok(articles)
    }
}

#[async_trait::async_trait]
impl EnrichmentProvider for NewsProvider {
    fn kind(&self) -> EnrichmentKind {
        EnrichmentKind::News
    }

    async fn fetch(&self, message: &str) -> Result<Option<String>> {
        let articles = self.search(message).await?;
        Ok(format_articles(&articles))
    }
}

/// `None` when there is nothing to summarise. Untitled articles are skipped.
pub fn format_articles(articles: &[Article]) -> Option<String> {
    let entries: Vec<String> = articles
        .iter()
        .filter_map(|a| {
            let title = a.title.as_deref().map(str::trim).filter(|t| !t.is_empty())?;
            Some(match a.published_at.as_deref().filter(|p| !p.is_empty()) {
                Some(published) => format!("{} ({})", title, format_published(published)),
                None => title.to_string(),
            })
        })
        .take(USED_ARTICLES)
        .collect();

    if entries.is_empty() {
        return None;
    }

    Some(format!("Based on recent news: {}. ", entries.join(". ")))
}

/// Calendar date of an RFC 3339 timestamp or a bare `YYYY-MM-DD`.
/// Anything else is echoed back unchanged.
fn format_published(raw: &str) -> String {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return format_short_date(ts.date_naive());
    }
    // mediastack emits "+00:00"-style offsets, but also accept "+0000".
    if let Ok(ts) = DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%z") {
        return format_short_date(ts.date_naive());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return format_short_date(date);
    }
    raw.to_string()
}
