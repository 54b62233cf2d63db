use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::config::AppState;
use crate::models::currency::{Currency, RateTable};
use crate::services::conversion::{convert, describe, non_negative_zero};
use crate::services::rate_service::fetch_rates;
use crate::utils::error::{ApiError, ConversionError, FetchError};
use crate::views::page::{self, Banner, ConverterPage, FormView};

/// Sidebar values as submitted. Kept as raw strings so a bad value becomes
/// a banner on the page instead of a 400 from the extractor.
#[derive(Deserialize, Default)]
pub struct ConvertForm {
    pub base: Option<String>,
    pub target: Option<String>,
    pub amount: Option<String>,
    /// Present only when the Convert button was pressed.
    pub convert: Option<String>,
}

fn parse_currency(field: &str, raw: Option<&str>) -> Result<Currency, ConversionError> {
    match raw {
        None => Ok(Currency::Usd),
        Some(s) => s
            .parse()
            .map_err(|e| ConversionError::Invalid(format!("{}: {}", field, e))),
    }
}

fn parse_amount(raw: Option<&str>) -> Result<f64, ConversionError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(page::EXAMPLE_AMOUNT),
        Some(s) => s
            .parse::<f64>()
            .map(non_negative_zero)
            .map_err(|_| ConversionError::Invalid(format!("amount '{}' is not a number", s))),
    }
}

fn run_conversion(table: &RateTable, f: &ConvertForm) -> Result<String, ConversionError> {
    let source = parse_currency("base", f.base.as_deref())?;
    let target = parse_currency("target", f.target.as_deref())?;
    let amount = parse_amount(f.amount.as_deref())?;
    let converted = convert(table, amount, source, target)?;
    Ok(describe(amount, source, converted, target))
}

fn form_view(f: &ConvertForm) -> FormView {
    let defaults = FormView::default();
    FormView {
        base: parse_currency("base", f.base.as_deref()).unwrap_or(defaults.base),
        target: parse_currency("target", f.target.as_deref()).unwrap_or(defaults.target),
        amount: f
            .amount
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .unwrap_or(defaults.amount),
    }
}

pub async fn index(
    State(state): State<AppState>,
    Query(f): Query<ConvertForm>,
) -> Result<ConverterPage, FetchError> {
    let table = fetch_rates(&state).await?;

    let outcome = f.convert.is_some().then(|| match run_conversion(&table, &f) {
        Ok(msg) => Banner::Success(msg),
        Err(e) => {
            tracing::debug!("conversion rejected: {}", e);
            Banner::Error(e.to_string())
        }
    });

    Ok(ConverterPage::new(&table, form_view(&f), outcome))
}

#[derive(Serialize)]
pub struct RatesBody {
    pub base: Currency,
    pub date: Option<String>,
    pub rates: serde_json::Map<String, serde_json::Value>,
}

pub async fn api_rates(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let table = fetch_rates(&state).await?;
    let rates = table
        .iter()
        .map(|(c, r)| (c.code().to_string(), serde_json::json!(r)))
        .collect();
    Ok(Json(RatesBody {
        base: Currency::Usd,
        date: table.as_of().map(|d| d.format("%Y-%m-%d").to_string()),
        rates,
    }))
}

#[derive(Deserialize)]
pub struct ApiConvertParams {
    pub from: Option<String>,
    pub to: Option<String>,
    pub amount: Option<String>,
}

#[derive(Serialize)]
pub struct ConvertBody {
    pub from: Currency,
    pub to: Currency,
    pub amount: f64,
    pub result: f64,
    pub formatted: String,
}

pub async fn api_convert(
    State(state): State<AppState>,
    Query(p): Query<ApiConvertParams>,
) -> Result<impl IntoResponse, ApiError> {
    // validate before spending the outbound call
    let from = parse_currency("from", p.from.as_deref())?;
    let to = parse_currency("to", p.to.as_deref())?;
    let amount = parse_amount(p.amount.as_deref())?;

    let table = fetch_rates(&state).await?;
    let result = convert(&table, amount, from, to)?;

    Ok(Json(ConvertBody {
        from,
        to,
        amount,
        result,
        formatted: describe(amount, from, result, to),
    }))
}

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "ok": true }))
}
