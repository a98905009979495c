//! Current-weather summary service.
//!
//! Given a city name, fetches the current conditions from OpenWeatherMap
//! and renders a one-page HTML report. The outbound HTTP call sits behind
//! the [`weather::adapter::FetchAdapter`] trait so the whole pipeline can
//! be exercised with stubbed payloads.

pub mod config;
pub mod render;
pub mod routes;
pub mod weather;
