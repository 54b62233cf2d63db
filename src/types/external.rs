use serde::Deserialize;

/// Body of `GET /v4/latest/USD`. Only the fields we use are declared;
/// serde skips the dozens of other currencies in `rates`.
#[derive(Deserialize)]
pub struct ErLatest {
    pub rates: ErRates,
    pub date: Option<String>,
}

#[derive(Deserialize)]
pub struct ErRates {
    #[serde(rename = "EUR")] pub eur: f64,
    #[serde(rename = "GBP")] pub gbp: f64,
    #[serde(rename = "INR")] pub inr: f64,
}
