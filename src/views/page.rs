use askama::Template;

use crate::models::currency::{Currency, RateTable};
use crate::services::conversion::{convert, describe};
use crate::utils::error::FetchError;

pub const EXAMPLE_AMOUNT: f64 = 100.0;
pub const EXAMPLE_SOURCE: Currency = Currency::Usd;
pub const EXAMPLE_TARGET: Currency = Currency::Eur;

/// Current widget values, echoed back into the sidebar.
pub struct FormView {
    pub base: Currency,
    pub target: Currency,
    pub amount: String,
}

impl Default for FormView {
    fn default() -> Self {
        Self { base: Currency::Usd, target: Currency::Usd, amount: "100.0".into() }
    }
}

pub enum Banner {
    Success(String),
    Error(String),
}

pub struct BannerView {
    pub class: &'static str,
    pub text: String,
}

impl From<Banner> for BannerView {
    fn from(b: Banner) -> Self {
        match b {
            Banner::Success(text) => Self { class: "success", text },
            Banner::Error(text) => Self { class: "error", text },
        }
    }
}

pub struct CurrencyOption {
    pub code: &'static str,
    pub selected: bool,
}

pub struct RateRow {
    pub currency: Currency,
    pub rate: f64,
}

#[derive(Template)]
#[template(path = "converter.html")]
pub struct ConverterPage {
    pub base_options: Vec<CurrencyOption>,
    pub target_options: Vec<CurrencyOption>,
    pub amount: String,
    pub outcome: Option<BannerView>,
    pub rates: Vec<RateRow>,
    pub as_of: Option<String>,
    pub example: String,
}

/// Shown when no rate table could be obtained: header and one error
/// banner, no controls.
#[derive(Template)]
#[template(path = "fetch_error.html")]
pub struct FetchErrorPage {
    pub reason: String,
}

impl From<&FetchError> for FetchErrorPage {
    fn from(err: &FetchError) -> Self {
        Self { reason: err.to_string() }
    }
}

fn options(selected: Currency) -> Vec<CurrencyOption> {
    Currency::ALL
        .into_iter()
        .map(|c| CurrencyOption { code: c.code(), selected: c == selected })
        .collect()
}

impl ConverterPage {
    pub fn new(table: &RateTable, form: FormView, outcome: Option<Banner>) -> Self {
        let example = match convert(table, EXAMPLE_AMOUNT, EXAMPLE_SOURCE, EXAMPLE_TARGET) {
            Ok(v) => format!("Example: {}", describe(EXAMPLE_AMOUNT, EXAMPLE_SOURCE, v, EXAMPLE_TARGET)),
            Err(e) => format!("Example unavailable: {}", e),
        };

        Self {
            base_options: options(form.base),
            target_options: options(form.target),
            amount: form.amount,
            outcome: outcome.map(BannerView::from),
            rates: table.iter().map(|(currency, rate)| RateRow { currency, rate }).collect(),
            as_of: table.as_of().map(|d| d.format("%Y-%m-%d").to_string()),
            example,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RateTable {
        RateTable::new(0.92, 0.79, 83.0)
    }

    #[test]
    fn example_uses_the_fixed_pair() {
        let page = ConverterPage::new(&sample(), FormView::default(), None);
        assert_eq!(page.example, "Example: 100.0 USD is equal to 92.00 EUR");
        let html = page.render().unwrap();
        assert!(html.contains("<p>Example: 100.0 USD is equal to 92.00 EUR</p>"));
    }

    #[test]
    fn marks_the_chosen_currencies() {
        let form = FormView { base: Currency::Gbp, target: Currency::Inr, amount: "5".into() };
        let html = ConverterPage::new(&sample(), form, None).render().unwrap();
        assert!(html.contains(r#"<option value="GBP" selected>GBP</option>"#));
        assert!(html.contains(r#"<option value="INR" selected>INR</option>"#));
        assert_eq!(html.matches(" selected>").count(), 2);
        assert!(html.contains(r#"value="5""#));
    }

    #[test]
    fn escapes_banner_and_echoed_amount() {
        let form = FormView { amount: r#""><script>"#.into(), ..FormView::default() };
        let outcome = Some(Banner::Error("bad <b>input & more".into()));
        let html = ConverterPage::new(&sample(), form, outcome).render().unwrap();
        assert!(!html.contains("<script>"));
        assert!(!html.contains("<b>"));
        assert!(html.contains("bad &lt;b&gt;input &amp; more"));
        assert!(html.contains(r#"<div class="banner error" role="alert">"#));
    }

    #[test]
    fn fetch_error_page_has_no_controls() {
        let html = FetchErrorPage::from(&FetchError::Status(502)).render().unwrap();
        assert!(html.contains("Error fetching exchange rates: rates source returned HTTP 502"));
        for tag in ["<select", "<input", "<button", "<details", "<form"] {
            assert!(!html.contains(tag), "{tag}");
        }
    }
}
