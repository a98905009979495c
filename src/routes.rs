use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, Json},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::render::render_weather;
use crate::weather::WeatherService;

// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub weather: Arc<WeatherService>,
}

#[derive(Debug, Deserialize)]
pub struct IndexQuery {
    pub city: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub version: String,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Weather summary page. A missing or empty `city` parameter is rejected
/// outright rather than forwarded upstream as an empty query.
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<IndexQuery>,
) -> Result<Html<String>, StatusCode> {
    let city = match params.city.as_deref() {
        Some(city) if !city.is_empty() => city,
        _ => {
            tracing::warn!("Rejected request without a city parameter");
            return Err(StatusCode::BAD_REQUEST);
        }
    };

    match state.weather.retrieve(city).await {
        Ok(info) => Ok(Html(render_weather(city, &info))),
        Err(e) => {
            tracing::error!("Weather retrieval for '{}' failed: {}", city, e);
            Err(StatusCode::BAD_GATEWAY)
        }
    }
}

// Create the router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/index", get(index))
        .route("/health", get(health))
        .with_state(state)
}
