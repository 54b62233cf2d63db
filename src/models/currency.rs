use chrono::NaiveDate;
use serde::Serialize;
use std::{fmt, str::FromStr};

/// The four supported currencies, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Currency {
    #[serde(rename = "USD")] Usd,
    #[serde(rename = "EUR")] Eur,
    #[serde(rename = "GBP")] Gbp,
    #[serde(rename = "INR")] Inr,
}

impl Currency {
    pub const ALL: [Currency; 4] = [Currency::Usd, Currency::Eur, Currency::Gbp, Currency::Inr];

    pub fn code(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Inr => "INR",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Currency::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| format!("unsupported currency '{}'", code))
    }
}

/// Units of each currency per 1 USD, valid for a single render.
#[derive(Debug, Clone, PartialEq)]
pub struct RateTable {
    eur: f64,
    gbp: f64,
    inr: f64,
    as_of: Option<NaiveDate>,
}

impl RateTable {
    pub fn new(eur: f64, gbp: f64, inr: f64) -> Self {
        Self { eur, gbp, inr, as_of: None }
    }

    pub fn with_as_of(mut self, as_of: Option<NaiveDate>) -> Self {
        self.as_of = as_of;
        self
    }

    pub fn rate(&self, currency: Currency) -> f64 {
        match currency {
            Currency::Usd => 1.0,
            Currency::Eur => self.eur,
            Currency::Gbp => self.gbp,
            Currency::Inr => self.inr,
        }
    }

    pub fn as_of(&self) -> Option<NaiveDate> {
        self.as_of
    }

    pub fn iter(&self) -> impl Iterator<Item = (Currency, f64)> + '_ {
        Currency::ALL.into_iter().map(move |c| (c, self.rate(c)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_codes_case_insensitively() {
        assert_eq!("usd".parse::<Currency>().unwrap(), Currency::Usd);
        assert_eq!(" GBP ".parse::<Currency>().unwrap(), Currency::Gbp);
        assert!("JPY".parse::<Currency>().is_err());
        assert!("".parse::<Currency>().is_err());
    }

    #[test]
    fn usd_is_always_the_pivot() {
        let table = RateTable::new(0.92, 0.79, 83.0);
        assert_eq!(table.rate(Currency::Usd), 1.0);
    }

    #[test]
    fn iterates_in_display_order() {
        let table = RateTable::new(0.92, 0.79, 83.0);
        let codes: Vec<&str> = table.iter().map(|(c, _)| c.code()).collect();
        assert_eq!(codes, ["USD", "EUR", "GBP", "INR"]);
        let rates: Vec<f64> = table.iter().map(|(_, r)| r).collect();
        assert_eq!(rates, [1.0, 0.92, 0.79, 83.0]);
    }
}
