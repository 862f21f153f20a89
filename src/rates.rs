use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

/// How often the rate is refreshed while watching (5 minutes, fixed).
pub const REFRESH_INTERVAL: Duration = Duration::from_millis(300_000);

/// Default public endpoint serving the USD base table.
pub const DEFAULT_ENDPOINT: &str = "https://open.er-api.com/v6/latest/USD";

#[derive(Debug, Deserialize)]
struct RateResponse {
    rates: HashMap<String, f64>,
}

/// A fetched USD→MXN rate. A stale value stays in use until the next
/// successful refresh; there is no explicit expiry.
#[derive(Debug, Clone, Copy)]
pub struct ExchangeRate {
    pub value: f64,
    pub fetched_at: DateTime<Local>,
}

pub struct RateClient {
    client: Client,
    endpoint: String,
}

impl RateClient {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }

    /// Fetch the current USD→MXN exchange rate.
    pub async fn get_usd_mxn(&self) -> Result<ExchangeRate> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .context("Failed to request exchange rates")?;

        let status = response.status();
        let text = response
            .text()
            .await
            .context("Failed to get response text")?;

        if !status.is_success() {
            anyhow::bail!("Exchange rate request failed: {}", text);
        }

        Ok(ExchangeRate {
            value: parse_mxn_rate(&text)?,
            fetched_at: Local::now(),
        })
    }
}

fn parse_mxn_rate(body: &str) -> Result<f64> {
    let parsed: RateResponse =
        serde_json::from_str(body).context("Failed to parse exchange rate response")?;
    parsed
        .rates
        .get("MXN")
        .copied()
        .context("Exchange rate response has no MXN rate")
}
