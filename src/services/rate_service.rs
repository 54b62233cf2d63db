use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::config::AppState;
use crate::models::currency::RateTable;
use crate::types::external::ErLatest;
use crate::utils::error::FetchError;

pub async fn fetch_rates(state: &AppState) -> Result<RateTable, FetchError> {
    let res = fetch(state).await;
    match &res {
        Ok(table) => info!(as_of = ?table.as_of(), "fetched exchange rates"),
        Err(e) => warn!(url = %state.rates_url, "exchange rates unavailable: {}", e),
    }
    res
}

async fn fetch(state: &AppState) -> Result<RateTable, FetchError> {
    debug!(url = %state.rates_url, "requesting exchange rates");

    let resp = state
        .http
        .get(&state.rates_url)
        .send()
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))?;

    let status = resp.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    let body = resp
        .bytes()
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))?;

    parse_rates(&body)
}

/// Strictly decodes the provider body into a `RateTable`.
pub fn parse_rates(body: &[u8]) -> Result<RateTable, FetchError> {
    let latest: ErLatest =
        serde_json::from_slice(body).map_err(|e| FetchError::Decode(e.to_string()))?;

    let rates = latest.rates;
    for (code, value) in [("EUR", rates.eur), ("GBP", rates.gbp), ("INR", rates.inr)] {
        if !value.is_finite() || value <= 0.0 {
            return Err(FetchError::InvalidRate { code, value });
        }
    }

    // the date is informational only
    let as_of = latest
        .date
        .as_deref()
        .and_then(|d| NaiveDate::parse_from_str(d.trim(), "%Y-%m-%d").ok());

    Ok(RateTable::new(rates.eur, rates.gbp, rates.inr).with_as_of(as_of))
}
