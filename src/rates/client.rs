use std::time::Duration;

use serde_json::Value;

use super::result::{round_cents, ConversionErrorKind, ConversionResult};

pub const DEFAULT_RATES_BASE_URL: &str = "https://api.frankfurter.app/";
pub const DEFAULT_RATES_TIMEOUT_SECONDS: u64 = 10;

/// Client for the Frankfurter `latest` endpoint.
///
/// Frankfurter applies the requested `amount` itself, so the value found under
/// `rates.<TO>` is already the converted amount.
#[derive(Debug, Clone)]
pub struct RateClient {
    base_url: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl Default for RateClient {
    fn default() -> Self {
        Self::new(DEFAULT_RATES_BASE_URL, DEFAULT_RATES_TIMEOUT_SECONDS)
    }
}

impl RateClient {
    pub fn new(base_url: impl Into<String>, timeout_seconds: u64) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self {
            base_url,
            timeout: Duration::from_secs(timeout_seconds),
            client: reqwest::Client::new(),
        }
    }

    /// Converts `amount` from one currency to another at the live rate.
    ///
    /// Never fails: transport and data problems come back as
    /// [`ConversionResult::Failed`].
    pub async fn convert(&self, amount: f64, from: &str, to: &str) -> ConversionResult {
        let from = from.trim().to_uppercase();
        let to = to.trim().to_uppercase();

        let body = match self.fetch(amount, &from, &to).await {
            Ok(body) => body,
            Err(err) => {
                log::warn!("rate request {from}->{to} failed: {err}");
                return ConversionResult::failed(ConversionErrorKind::Request, err.to_string());
            }
        };
        log::info!("Rate API response: {body}");

        match extract_rate(&body, &to) {
            Ok(converted) => ConversionResult::Converted {
                amount,
                from,
                to,
                converted: round_cents(converted),
            },
            Err(failure) => failure,
        }
    }

    async fn fetch(&self, amount: f64, from: &str, to: &str) -> Result<String, reqwest::Error> {
        let url = format!("{}latest", self.base_url);
        let response = self
            .client
            .get(url)
            .query(&[("amount", amount.to_string().as_str()), ("from", from), ("to", to)])
            .timeout(self.timeout)
            .send()
            .await?;
        log::debug!("Rate API HTTP status: {}", response.status());
        response.text().await
    }
}

fn extract_rate(body: &str, to: &str) -> Result<f64, ConversionResult> {
    let json: Value = serde_json::from_str(body)
        .map_err(|e| ConversionResult::failed(ConversionErrorKind::Unexpected, e.to_string()))?;
    let Some(entry) = json.get("rates").and_then(|rates| rates.get(to)) else {
        return Err(ConversionResult::failed(
            ConversionErrorKind::RateUnavailable,
            format!("no rate for {to}"),
        ));
    };
    entry.as_f64().ok_or_else(|| {
        ConversionResult::failed(
            ConversionErrorKind::Unexpected,
            format!("rate for {to} is not a number: {entry}"),
        )
    })
}
