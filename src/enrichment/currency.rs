//! Currency enrichment
//!
//! Pulls the latest USD rate table from exchangerate-api.com (v6) and turns
//! it into a short natural-language block the model can quote from.

use super::{build_http_client, format_short_date, EnrichmentProvider};
use crate::config::RelayConfig;
use crate::error::RelayError;
use crate::models::EnrichmentKind;
use crate::Result;
use chrono::{Local, NaiveDate};
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{debug, info};

pub const BASE_CURRENCY: &str = "USD";

/// (code, display name) for every rate quoted in the block
const TARGET_CURRENCIES: &[(&str, &str)] = &[
    ("NGN", "Nigerian Naira"),
    ("EUR", "Euro"),
    ("GBP", "British Pound"),
];

#[derive(Debug, Deserialize)]
struct RatesResponse {
    #[serde(default)]
    result: Option<String>,
    #[serde(rename = "error-type", default)]
    error_type: Option<String>,
    #[serde(default)]
    conversion_rates: Option<HashMap<String, f64>>,
}

pub struct CurrencyProvider {
    client: Client,
    api_key: String,
    base_url: String,
}

impl CurrencyProvider {
    pub fn new(config: &RelayConfig) -> Result<Self> {
        Ok(Self {
            client: build_http_client(config.http_timeout)?,
            api_key: config.exchange_api_key.clone(),
            base_url: config.exchange_base_url.clone(),
        })
    }

    async fn latest_rates(&self) -> Result<HashMap<String, f64>> {
        // The key is a path segment; keep it out of logs.
        let url = format!("{}/{}/latest/{}", self.base_url, self.api_key, BASE_CURRENCY);

        info!(base = BASE_CURRENCY, "Fetching latest exchange rates");

        let response = self.client.get(&url).send().await.map_err(|e| {
            RelayError::Enrichment(format!(
                "Exchange rate request failed: {}",
                e.without_url()
            ))
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RelayError::Enrichment(format!(
                "Exchange rate API returned {}: {}",
                status, body
            )));
        }

        let body: RatesResponse = response.json().await.map_err(|e| {
            RelayError::Enrichment(format!("Invalid exchange rate response: {}", e.without_url()))
        })?;

        if body.result.as_deref() == Some("error") {
            return Err(RelayError::Enrichment(format!(
                "Exchange rate API error: {}",
                body.error_type.unwrap_or_else(|| "unknown".to_string())
            )));
        }

        let rates = body.conversion_rates.ok_or_else(|| {
            RelayError::Enrichment("Exchange rate response has no conversion_rates".to_string())
        })?;

        debug!(count = rates.len(), "Exchange rates received");
        Ok(rates)
    }
}

#[async_trait::async_trait]
impl EnrichmentProvider for CurrencyProvider {
    fn kind(&self) -> EnrichmentKind {
        EnrichmentKind::Currency
    }

    async fn fetch(&self, _message: &str) -> Result<Option<String>> {
        let rates = self.latest_rates().await?;
        let today = Local::now().date_naive();
        format_rates(today, &rates).map(Some)
    }
}

/// Render the rate block. Every target currency must be present.
pub fn format_rates(date: NaiveDate, rates: &HashMap<String, f64>) -> Result<String> {
    let mut text = format!(
        "As of {}, the current exchange rates are:\n",
        format_short_date(date)
    );

    for (code, name) in TARGET_CURRENCIES {
        let rate = rates.get(*code).ok_or_else(|| {
            RelayError::Enrichment(format!("Exchange rate for {} missing from response", code))
        })?;
        text.push_str(&format!(
            "1 {} equals {} {} ({}).\n",
            BASE_CURRENCY, rate, code, name
        ));
    }

    text.push_str("These are the latest real-time exchange rates from a reliable forex data source.\n");
    text.push_str("Please use these current rates to answer any currency conversion questions.");

    Ok(text)
}
