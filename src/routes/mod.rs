use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::config::AppState;
use crate::handlers::converter::{api_convert, api_rates, health, index};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/rates", get(api_rates))
        .route("/api/convert", get(api_convert))
        .route("/healthz", get(health))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
