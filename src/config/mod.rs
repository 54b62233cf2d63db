use reqwest::Client;
use std::env;

pub const DEFAULT_RATES_URL: &str = "https://api.exchangerate-api.com/v4/latest/USD";

#[derive(Clone)]
pub struct AppState {
    pub http: Client,
    pub rates_url: String,
}

pub struct AppConfig {
    pub port: u16,
    pub rates_url: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        let port: u16 = env::var("PORT").unwrap_or_else(|_| "8080".into()).parse()?;
        let rates_url = env::var("RATES_URL")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_RATES_URL.into());
        Ok(Self { port, rates_url })
    }

    // No timeout override: one attempt with the client's defaults.
    pub fn build_state(&self) -> Result<AppState, anyhow::Error> {
        let http = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(AppState {
            http,
            rates_url: self.rates_url.clone(),
        })
    }
}
