use axum::{http::StatusCode, response::{IntoResponse, Response}, Json};
use serde::Serialize;
use thiserror::Error;

use crate::views::page::FetchErrorPage;

/// Failure to obtain a usable rate table. Halts the page.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("rates source returned HTTP {0}")]
    Status(u16),
    #[error("could not parse rates: {0}")]
    Decode(String),
    #[error("invalid rate for {code}: {value}")]
    InvalidRate { code: &'static str, value: f64 },
}

/// Failure of a single conversion. The rest of the page still renders.
#[derive(Error, Debug, PartialEq)]
pub enum ConversionError {
    #[error("Cannot divide by zero")]
    DivisionByZero,
    #[error("Error converting currency: {0}")]
    Invalid(String),
}

#[derive(Serialize)]
pub struct ErrorBody<'a> {
    pub error: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")] pub details: Option<String>,
}

impl IntoResponse for FetchError {
    fn into_response(self) -> Response {
        (StatusCode::SERVICE_UNAVAILABLE, FetchErrorPage::from(&self)).into_response()
    }
}

/// JSON surface for `/api/*`.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("external_unavailable: {0}")]
    External(#[from] FetchError),
    #[error("conversion: {0}")]
    Conversion(#[from] ConversionError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::External(e) => (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ErrorBody { error: "External data source unavailable", details: Some(e.to_string()) }),
            ).into_response(),
            ApiError::Conversion(e) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody { error: "Conversion failed", details: Some(e.to_string()) }),
            ).into_response(),
        }
    }
}
